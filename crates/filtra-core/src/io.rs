//! Image decode/encode collaborator.
//!
//! Sessions are only ever created from already-decoded buffers; this is
//! the one place file formats are touched.

use std::path::Path;

use crate::buffer::ImageBuffer;

/// Decode an image file into an [`ImageBuffer`]. Grayscale sources stay
/// single-channel; everything else is converted to interleaved RGB8.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<ImageBuffer, String> {
    let path = path.as_ref();
    let decoded = image::open(path)
        .map_err(|err| format!("Failed to decode {}: {}", path.display(), err))?;

    match decoded {
        image::DynamicImage::ImageLuma8(gray) => {
            let (width, height) = (gray.width(), gray.height());
            ImageBuffer::from_raw(width, height, 1, gray.into_raw())
        }
        other => {
            let rgb = other.to_rgb8();
            let (width, height) = (rgb.width(), rgb.height());
            ImageBuffer::from_raw(width, height, 3, rgb.into_raw())
        }
    }
}

/// Write a buffer out as PNG.
pub fn export_png<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> Result<(), String> {
    let path = path.as_ref();
    let (width, height) = (image.width(), image.height());

    let result = match image.channels() {
        1 => image::GrayImage::from_raw(width, height, image.data().to_vec())
            .ok_or_else(|| "Pixel data does not match image dimensions".to_string())?
            .save(path),
        3 => image::RgbImage::from_raw(width, height, image.data().to_vec())
            .ok_or_else(|| "Pixel data does not match image dimensions".to_string())?
            .save(path),
        channels => return Err(format!("Unsupported channel count: {}", channels)),
    };

    result.map_err(|err| format!("Failed to write {}: {}", path.display(), err))
}
