//! Filtra core library
//!
//! Per-window interactive filter composition: every opened image gets a
//! window session that owns the displayed frame, a set of toggled filters
//! replayed in canonical order, a slider-driven blur preview, pointer
//! annotations, and one-shot derived effects (histogram plot, luma
//! equalization, lomography).

pub mod buffer;
pub mod color;
pub mod config;
pub mod controller;
pub mod effects;
pub mod filters;
pub mod io;
pub mod session;

// Re-export commonly used types
pub use buffer::ImageBuffer;
pub use config::UiDefaults;
pub use controller::{DisplaySurface, WindowController};
pub use effects::EffectKind;
pub use session::{ActiveFilterSet, FilterKind, WindowSession};
