//! Histogram plot: per-channel intensity histograms drawn as overlaid
//! polylines on a fixed-size canvas.

use crate::buffer::ImageBuffer;
use crate::filters::{channel_histogram, draw_line};

const BINS: usize = 256;
const BACKGROUND: u8 = 20;
const LINE_THICKNESS: u32 = 2;

/// Polyline colors per channel; single-channel images get one neutral line.
const CHANNEL_COLORS: [[u8; 3]; 3] = [[255, 0, 0], [0, 255, 0], [0, 0, 255]];
const GRAY_COLOR: [u8; 3] = [200, 200, 200];

/// Min-max normalize histogram counts to the 0..=upper pixel range.
fn normalize_minmax(histogram: &[u32; BINS], upper: u32) -> [i32; BINS] {
    let min = *histogram.iter().min().unwrap_or(&0);
    let max = *histogram.iter().max().unwrap_or(&0);

    let mut scaled = [0i32; BINS];
    if max > min {
        let range = (max - min) as f64;
        for (dst, &count) in scaled.iter_mut().zip(histogram.iter()) {
            *dst = ((count - min) as f64 * upper as f64 / range).round() as i32;
        }
    }
    scaled
}

/// Plot the per-channel histograms of `image` over the full [0, 256) bin
/// range onto a `width` x `height` RGB canvas, each channel normalized
/// independently and drawn as a polyline connecting bin i-1 to bin i.
///
/// The computation is pure: identical input produces a byte-identical
/// canvas.
pub fn histogram_plot(image: &ImageBuffer, width: u32, height: u32) -> ImageBuffer {
    let mut canvas = ImageBuffer::filled(width, height, 3, BACKGROUND);

    let channels = image.channels() as usize;
    let bin_width = (width as f64 / BINS as f64).round() as i32;
    let h = height as i32;

    // Draw back to front so the first channel's polyline ends up on top.
    for channel in (0..channels).rev() {
        let color = if channels == 1 {
            GRAY_COLOR
        } else {
            CHANNEL_COLORS[channel]
        };
        let histogram = channel_histogram(image.data(), channel, channels);
        let scaled = normalize_minmax(&histogram, height);

        for i in 1..BINS {
            draw_line(
                &mut canvas,
                bin_width * (i as i32 - 1),
                h - scaled[i - 1],
                bin_width * i as i32,
                h - scaled[i],
                color,
                LINE_THICKNESS,
            );
        }
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_image() -> ImageBuffer {
        let mut data = Vec::new();
        for y in 0..16u32 {
            for x in 0..16u32 {
                let v = (x * 16 + y) as u8;
                data.extend_from_slice(&[v, v.wrapping_add(40), 255 - v]);
            }
        }
        ImageBuffer::from_raw(16, 16, 3, data).unwrap()
    }

    #[test]
    fn test_plot_is_deterministic() {
        let image = gradient_image();
        let first = histogram_plot(&image, 512, 300);
        let second = histogram_plot(&image, 512, 300);
        assert_eq!(
            first, second,
            "identical input must produce a byte-identical plot"
        );
    }

    #[test]
    fn test_plot_has_canvas_geometry() {
        let image = gradient_image();
        let plot = histogram_plot(&image, 512, 300);
        assert_eq!(plot.width(), 512);
        assert_eq!(plot.height(), 300);
        assert_eq!(plot.channels(), 3);
    }

    #[test]
    fn test_plot_draws_over_background() {
        let image = gradient_image();
        let plot = histogram_plot(&image, 512, 300);
        assert!(plot.data().iter().any(|&v| v != BACKGROUND));
    }

    #[test]
    fn test_single_channel_input_plots_one_line() {
        let image = ImageBuffer::from_raw(4, 1, 1, vec![0, 80, 160, 240]).unwrap();
        let plot = histogram_plot(&image, 512, 300);
        // Only the neutral gray polyline and the background may appear.
        for pixel in plot.data().chunks_exact(3) {
            assert!(
                pixel == [BACKGROUND; 3] || pixel == GRAY_COLOR,
                "unexpected color {:?}",
                pixel
            );
        }
    }

    #[test]
    fn test_normalize_minmax_spans_range() {
        let mut histogram = [0u32; BINS];
        histogram[0] = 10;
        histogram[255] = 110;
        let scaled = normalize_minmax(&histogram, 300);
        assert_eq!(scaled[0], 27); // (10 - 0) * 300 / 110
        assert_eq!(scaled[255], 300);
        assert_eq!(scaled[1], 0);
    }

    #[test]
    fn test_constant_histogram_scales_to_zero() {
        let histogram = [5u32; BINS];
        let scaled = normalize_minmax(&histogram, 300);
        assert!(scaled.iter().all(|&v| v == 0));
    }
}
