//! Pure filter primitives over image buffers.
//!
//! None of these hold state between calls; each takes pixel data in and
//! produces (or, for the drawing primitives, mutates) pixel data out.

mod blur;
mod draw;
mod edges;
mod grayscale;
mod lut;

pub use blur::{box_blur, box_blur_plane_f32};
pub use draw::{draw_circle_outline, draw_line, fill_circle_plane_f32};
pub use edges::gradient_edges;
pub use grayscale::to_grayscale;
pub use lut::{apply_lut, channel_histogram, equalization_lut};

pub(crate) use grayscale::luma;
