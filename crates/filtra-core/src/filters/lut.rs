//! Lookup tables and channel histograms.

use crate::buffer::ImageBuffer;

/// 256-bin intensity histogram of one channel of interleaved pixel data.
pub fn channel_histogram(data: &[u8], channel: usize, channels: usize) -> [u32; 256] {
    let mut histogram = [0u32; 256];
    for pixel in data.chunks_exact(channels) {
        histogram[pixel[channel] as usize] += 1;
    }
    histogram
}

/// Apply a 256-entry lookup table to one channel in place.
pub fn apply_lut(image: &mut ImageBuffer, channel: usize, table: &[u8; 256]) {
    let channels = image.channels() as usize;
    assert!(
        channel < channels,
        "channel {} out of range for {}-channel image",
        channel,
        channels
    );
    for pixel in image.data_mut().chunks_exact_mut(channels) {
        pixel[channel] = table[pixel[channel] as usize];
    }
}

/// Build the classical histogram-equalization lookup table: the cumulative
/// distribution stretched so the first occupied bin maps to 0 and the full
/// population maps to 255. A constant or empty channel gets the identity
/// table.
pub fn equalization_lut(histogram: &[u32; 256]) -> [u8; 256] {
    let total: u64 = histogram.iter().map(|&c| c as u64).sum();
    let cdf_min = histogram.iter().copied().find(|&c| c > 0).unwrap_or(0) as u64;

    let mut lut = [0u8; 256];
    if total == 0 || total == cdf_min {
        for (i, entry) in lut.iter_mut().enumerate() {
            *entry = i as u8;
        }
        return lut;
    }

    let scale = 255.0 / (total - cdf_min) as f64;
    let mut cdf = 0u64;
    for (i, entry) in lut.iter_mut().enumerate() {
        cdf += histogram[i] as u64;
        let v = cdf.saturating_sub(cdf_min) as f64 * scale;
        *entry = v.round().clamp(0.0, 255.0) as u8;
    }
    lut
}
