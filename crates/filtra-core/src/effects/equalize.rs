//! Luma histogram equalization with chroma preserved.

use crate::buffer::ImageBuffer;
use crate::color::{merge_ycrcb, split_ycrcb};
use crate::filters::{channel_histogram, equalization_lut};

/// Equalize one plane in place through its own histogram.
fn equalize_plane(plane: &mut [u8]) {
    let histogram = channel_histogram(plane, 0, 1);
    let lut = equalization_lut(&histogram);
    for v in plane.iter_mut() {
        *v = lut[*v as usize];
    }
}

/// Histogram-equalize the luma of an image.
///
/// Color input is converted to YCrCb, only the Y plane is redistributed,
/// and the untouched chroma planes are merged back. Intensity input is
/// equalized directly.
pub fn equalize(image: &ImageBuffer) -> ImageBuffer {
    if image.channels() == 1 {
        let mut data = image.data().to_vec();
        equalize_plane(&mut data);
        return ImageBuffer::from_parts(image.width(), image.height(), 1, data);
    }

    let (mut y, cr, cb) = split_ycrcb(image);
    equalize_plane(&mut y);
    merge_ycrcb(&y, &cr, &cb, image.width(), image.height())
}
