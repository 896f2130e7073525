//! Colorspace conversions (RGB <-> YCrCb).
//!
//! Full-range BT.601 conversion, the classic digital-video layout: luma in
//! Y, red/blue color difference in Cr/Cb centered on 128. Gray pixels map
//! to Cr = Cb = 128 exactly, which is what lets luma-only processing leave
//! chroma untouched.

use crate::buffer::ImageBuffer;

const CR_SCALE: f32 = 0.713;
const CB_SCALE: f32 = 0.564;

#[inline]
fn clamp_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Convert an RGB triple to YCrCb.
#[inline]
pub fn rgb_to_ycrcb(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let y = 0.299 * rf + 0.587 * gf + 0.114 * bf;
    let cr = (rf - y) * CR_SCALE + 128.0;
    let cb = (bf - y) * CB_SCALE + 128.0;
    (clamp_u8(y), clamp_u8(cr), clamp_u8(cb))
}

/// Convert a YCrCb triple back to RGB.
#[inline]
pub fn ycrcb_to_rgb(y: u8, cr: u8, cb: u8) -> (u8, u8, u8) {
    let yf = y as f32;
    let crf = cr as f32 - 128.0;
    let cbf = cb as f32 - 128.0;
    let r = yf + 1.403 * crf;
    let g = yf - 0.714 * crf - 0.344 * cbf;
    let b = yf + 1.773 * cbf;
    (clamp_u8(r), clamp_u8(g), clamp_u8(b))
}

/// Split an RGB buffer into Y, Cr, Cb planes.
pub fn split_ycrcb(image: &ImageBuffer) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    assert_eq!(
        image.channels(),
        3,
        "YCrCb split requires a 3-channel image"
    );
    let pixels = image.data().len() / 3;
    let mut y_plane = Vec::with_capacity(pixels);
    let mut cr_plane = Vec::with_capacity(pixels);
    let mut cb_plane = Vec::with_capacity(pixels);
    for pixel in image.data().chunks_exact(3) {
        let (y, cr, cb) = rgb_to_ycrcb(pixel[0], pixel[1], pixel[2]);
        y_plane.push(y);
        cr_plane.push(cr);
        cb_plane.push(cb);
    }
    (y_plane, cr_plane, cb_plane)
}

/// Merge Y, Cr, Cb planes back into an RGB buffer.
pub fn merge_ycrcb(y: &[u8], cr: &[u8], cb: &[u8], width: u32, height: u32) -> ImageBuffer {
    assert!(
        y.len() == cr.len() && y.len() == cb.len(),
        "YCrCb planes must have equal length"
    );
    let mut data = Vec::with_capacity(y.len() * 3);
    for i in 0..y.len() {
        let (r, g, b) = ycrcb_to_rgb(y[i], cr[i], cb[i]);
        data.push(r);
        data.push(g);
        data.push(b);
    }
    ImageBuffer::from_parts(width, height, 3, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_maps_to_neutral_chroma() {
        for v in [0u8, 1, 64, 128, 200, 255] {
            let (y, cr, cb) = rgb_to_ycrcb(v, v, v);
            assert_eq!(y, v, "luma of gray {} should be {}", v, v);
            assert_eq!(cr, 128, "Cr of gray {} should be neutral", v);
            assert_eq!(cb, 128, "Cb of gray {} should be neutral", v);

            let (r, g, b) = ycrcb_to_rgb(y, cr, cb);
            assert_eq!((r, g, b), (v, v, v));
        }
    }

    #[test]
    fn test_roundtrip_within_rounding() {
        let test_cases = [
            (255u8, 0u8, 0u8),
            (0, 255, 0),
            (0, 0, 255),
            (200, 100, 50),
            (13, 77, 213),
        ];

        for (r, g, b) in test_cases {
            let (y, cr, cb) = rgb_to_ycrcb(r, g, b);
            let (r2, g2, b2) = ycrcb_to_rgb(y, cr, cb);
            assert!(
                (r as i32 - r2 as i32).abs() <= 2
                    && (g as i32 - g2 as i32).abs() <= 2
                    && (b as i32 - b2 as i32).abs() <= 2,
                "roundtrip of ({}, {}, {}) drifted to ({}, {}, {})",
                r,
                g,
                b,
                r2,
                g2,
                b2
            );
        }
    }

    #[test]
    fn test_split_merge_roundtrip() {
        let image = ImageBuffer::from_raw(2, 1, 3, vec![50, 50, 50, 180, 180, 180]).unwrap();
        let (y, cr, cb) = split_ycrcb(&image);
        let merged = merge_ycrcb(&y, &cr, &cb, 2, 1);
        assert_eq!(merged, image);
    }
}
