//! Lomography stylization: a logistic tone curve on the red channel plus a
//! blurred circular halo multiplied into the frame.

use rayon::prelude::*;

use crate::buffer::ImageBuffer;
use crate::filters::{apply_lut, box_blur_plane_f32, fill_circle_plane_f32};

const HALO_FIELD: f32 = 0.3;

/// 256-entry logistic tone curve, monotonically non-decreasing:
/// `curve[i] = round(256 / (1 + e^(-(i/256 - 0.5) / 0.1)))`.
pub(crate) fn red_tone_curve() -> [u8; 256] {
    let mut curve = [0u8; 256];
    for (i, entry) in curve.iter_mut().enumerate() {
        let x = i as f32 / 256.0;
        let v = 256.0 / (1.0 + (-(x - 0.5) / 0.1).exp());
        *entry = v.round().min(255.0) as u8;
    }
    curve
}

/// Apply the lomography stylization to a color image.
///
/// The tone curve remaps the red channel first; the vignette multiply
/// comes second. Reversing the two changes the result, since the curve is
/// nonlinear. The halo mask is a 0.3 field with a filled circle of radius
/// width/3 at the image center, box-blurred with a width/3 kernel for a
/// soft falloff.
pub fn lomo(image: &ImageBuffer) -> ImageBuffer {
    assert_eq!(
        image.channels(),
        3,
        "lomography stylization requires a 3-channel image"
    );

    let mut result = image.clone();
    apply_lut(&mut result, 0, &red_tone_curve());

    let width = image.width();
    let height = image.height();
    let radius = (width / 3).max(1);

    let mut halo = vec![HALO_FIELD; width as usize * height as usize];
    fill_circle_plane_f32(
        &mut halo,
        width,
        height,
        width as i32 / 2,
        height as i32 / 2,
        radius,
        1.0,
    );
    let halo = box_blur_plane_f32(&halo, width, height, radius);

    let row_len = width as usize * 3;
    result
        .data_mut()
        .par_chunks_mut(row_len)
        .zip(halo.par_chunks(width as usize))
        .for_each(|(row, mask_row)| {
            for (pixel, &m) in row.chunks_exact_mut(3).zip(mask_row.iter()) {
                for v in pixel.iter_mut() {
                    *v = (*v as f32 * m).round().clamp(0.0, 255.0) as u8;
                }
            }
        });

    result
}
