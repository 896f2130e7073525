//! Normalized box blur.

use rayon::prelude::*;

use crate::buffer::ImageBuffer;

#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// Per-channel sliding-window sums of one row; the divide happens later so
/// the mean is taken over the full k x k window in one step.
fn horizontal_window_sums(dst: &mut [u32], src: &[u8], width: usize, channels: usize, k: usize) {
    let half = (k / 2) as isize;
    for c in 0..channels {
        let mut acc = 0u32;
        for j in 0..k {
            acc += src[clamp_index(j as isize - half, width) * channels + c] as u32;
        }
        dst[c] = acc;
        for x in 1..width {
            let add = clamp_index(x as isize - half + k as isize - 1, width);
            let sub = clamp_index(x as isize - half - 1, width);
            acc += src[add * channels + c] as u32;
            acc -= src[sub * channels + c] as u32;
            dst[x * channels + c] = acc;
        }
    }
}

/// Normalized k x k box blur with the window anchored at `k / 2`; borders
/// replicate the edge pixel. A kernel of 1 is the identity.
pub fn box_blur(image: &ImageBuffer, kernel: u32) -> ImageBuffer {
    let k = kernel.max(1) as usize;
    if k == 1 {
        return image.clone();
    }

    let width = image.width() as usize;
    let height = image.height() as usize;
    let channels = image.channels() as usize;
    let row_len = width * channels;
    let src = image.data();

    let mut sums = vec![0u32; src.len()];
    sums.par_chunks_mut(row_len)
        .zip(src.par_chunks(row_len))
        .for_each(|(dst_row, src_row)| {
            horizontal_window_sums(dst_row, src_row, width, channels, k);
        });

    let divisor = (k * k) as u32;
    let mut out = vec![0u8; src.len()];
    out.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let top = y as isize - (k / 2) as isize;
            for (i, dst) in dst_row.iter_mut().enumerate() {
                let mut total = 0u32;
                for j in 0..k {
                    let yy = clamp_index(top + j as isize, height);
                    total += sums[yy * row_len + i];
                }
                *dst = ((total + divisor / 2) / divisor) as u8;
            }
        });

    ImageBuffer::from_parts(image.width(), image.height(), image.channels(), out)
}

/// Box blur over a single-channel f32 plane. Same window anchoring and
/// border handling as [`box_blur`]; used for effect masks.
pub fn box_blur_plane_f32(plane: &[f32], width: u32, height: u32, kernel: u32) -> Vec<f32> {
    let k = kernel.max(1) as usize;
    if k == 1 {
        return plane.to_vec();
    }

    let w = width as usize;
    let h = height as usize;
    let half = (k / 2) as isize;

    let mut sums = vec![0f32; plane.len()];
    sums.par_chunks_mut(w)
        .zip(plane.par_chunks(w))
        .for_each(|(dst_row, src_row)| {
            let mut acc = 0f32;
            for j in 0..k {
                acc += src_row[clamp_index(j as isize - half, w)];
            }
            dst_row[0] = acc;
            for x in 1..w {
                acc += src_row[clamp_index(x as isize - half + k as isize - 1, w)];
                acc -= src_row[clamp_index(x as isize - half - 1, w)];
                dst_row[x] = acc;
            }
        });

    let norm = 1.0 / (k * k) as f32;
    let mut out = vec![0f32; plane.len()];
    out.par_chunks_mut(w).enumerate().for_each(|(y, dst_row)| {
        let top = y as isize - half;
        for (x, dst) in dst_row.iter_mut().enumerate() {
            let mut total = 0f32;
            for j in 0..k {
                total += sums[clamp_index(top + j as isize, h) * w + x];
            }
            *dst = total * norm;
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_image_is_unchanged() {
        let image = ImageBuffer::filled(8, 6, 3, 128);
        let blurred = box_blur(&image, 5);
        assert_eq!(blurred, image);
    }

    #[test]
    fn test_kernel_one_is_identity() {
        let data: Vec<u8> = (0..24).collect();
        let image = ImageBuffer::from_raw(4, 2, 3, data).unwrap();
        assert_eq!(box_blur(&image, 1), image);
    }

    #[test]
    fn test_single_bright_pixel_spreads() {
        let mut image = ImageBuffer::filled(5, 5, 1, 0);
        let idx = image.pixel_index(2, 2);
        image.data_mut()[idx] = 255;

        let blurred = box_blur(&image, 3);
        // 255 / 9 rounds to 28 across the 3x3 neighborhood
        assert_eq!(blurred.pixel(2, 2), &[28]);
        assert_eq!(blurred.pixel(1, 1), &[28]);
        assert_eq!(blurred.pixel(0, 0), &[0]);
    }

    #[test]
    fn test_plane_blur_preserves_uniform_field() {
        let plane = vec![0.3f32; 12 * 9];
        let blurred = box_blur_plane_f32(&plane, 12, 9, 4);
        for v in blurred {
            assert!((v - 0.3).abs() < 1e-5);
        }
    }
}
