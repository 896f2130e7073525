//! Gradient edge filter.

use crate::buffer::ImageBuffer;

/// 3x3 cross-derivative gradient (first derivative along both axes), with
/// the result saturated to the 8-bit range:
///
/// ```text
///   1  0 -1
///   0  0  0
///  -1  0  1
/// ```
///
/// Works on 1- or 3-channel input; borders replicate the edge pixel, so a
/// uniform image produces zero response everywhere.
pub fn gradient_edges(image: &ImageBuffer) -> ImageBuffer {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let channels = image.channels() as usize;
    let src = image.data();

    let sample = |x: isize, y: isize, c: usize| -> i32 {
        let xx = x.clamp(0, width as isize - 1) as usize;
        let yy = y.clamp(0, height as isize - 1) as usize;
        src[(yy * width + xx) * channels + c] as i32
    };

    let mut out = vec![0u8; src.len()];
    for y in 0..height as isize {
        for x in 0..width as isize {
            for c in 0..channels {
                let v = sample(x - 1, y - 1, c) - sample(x + 1, y - 1, c)
                    - sample(x - 1, y + 1, c)
                    + sample(x + 1, y + 1, c);
                out[(y as usize * width + x as usize) * channels + c] = v.clamp(0, 255) as u8;
            }
        }
    }

    ImageBuffer::from_parts(image.width(), image.height(), image.channels(), out)
}
