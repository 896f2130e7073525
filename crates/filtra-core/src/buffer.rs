//! Image buffers shared by every filter and effect.

/// Interleaved 8-bit image data with 1 (intensity) or 3 (RGB) channels.
///
/// Dimensions and channel count are fixed at construction. Filters that
/// change the channel count (color to grayscale) return a new buffer with
/// the new layout instead of mutating in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Build a buffer from raw interleaved data, validating the layout.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self, String> {
        if channels != 1 && channels != 3 {
            return Err(format!("Unsupported channel count: {}", channels));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(format!(
                "Pixel data length {} does not match {}x{}x{} layout (expected {})",
                data.len(),
                width,
                height,
                channels,
                expected
            ));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Internal constructor for filter outputs whose layout is correct by
    /// construction. Layout mismatches here are programming defects.
    pub(crate) fn from_parts(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Self {
        assert!(
            channels == 1 || channels == 3,
            "Unsupported channel count: {}",
            channels
        );
        assert_eq!(
            data.len(),
            width as usize * height as usize * channels as usize,
            "Pixel data length does not match {}x{}x{} layout",
            width,
            height,
            channels
        );
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// A buffer with every sample set to `value`.
    pub fn filled(width: u32, height: u32, channels: u8, value: u8) -> Self {
        let len = width as usize * height as usize * channels as usize;
        Self::from_parts(width, height, channels, vec![value; len])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Index of the first sample of the pixel at (x, y).
    #[inline]
    pub fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize
    }

    /// Samples of the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let idx = self.pixel_index(x, y);
        &self.data[idx..idx + self.channels as usize]
    }

    /// Interleaved RGB copy of the pixel data; intensity buffers replicate
    /// their single channel. Used for display upload.
    pub fn to_rgb8(&self) -> Vec<u8> {
        match self.channels {
            3 => self.data.clone(),
            _ => {
                let mut out = Vec::with_capacity(self.data.len() * 3);
                for &v in &self.data {
                    out.extend_from_slice(&[v, v, v]);
                }
                out
            }
        }
    }
}
