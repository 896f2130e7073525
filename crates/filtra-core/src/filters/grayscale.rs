//! Grayscale reduction.

use crate::buffer::ImageBuffer;

/// Rec.601 luma of an RGB triple.
#[inline]
pub(crate) fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32 + 500) / 1000) as u8
}

/// Reduce a color image to a single luma channel (3 -> 1 channels).
/// Single-channel input is returned as a copy.
pub fn to_grayscale(image: &ImageBuffer) -> ImageBuffer {
    if image.channels() == 1 {
        return image.clone();
    }

    let mut out = Vec::with_capacity(image.data().len() / 3);
    for pixel in image.data().chunks_exact(3) {
        out.push(luma(pixel[0], pixel[1], pixel[2]));
    }
    ImageBuffer::from_parts(image.width(), image.height(), 1, out)
}
