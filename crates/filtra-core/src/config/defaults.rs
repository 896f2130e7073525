//! Default UI parameter values and their validation.

use serde::Deserialize;

/// Tunable defaults shared by every window session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiDefaults {
    /// Radius of the click marker circle, in pixels
    pub marker_radius: u32,
    /// Stroke thickness of the click marker circle
    pub marker_thickness: u32,
    /// RGB color of the click marker circle
    pub marker_color: [u8; 3],
    /// Kernel size of the toggleable blur filter
    pub toggle_blur_kernel: u32,
    /// Upper bound of the blur preview slider
    pub slider_max: u32,
    /// Histogram plot canvas width
    pub histogram_width: u32,
    /// Histogram plot canvas height
    pub histogram_height: u32,
}

impl Default for UiDefaults {
    fn default() -> Self {
        Self {
            marker_radius: 10,
            marker_thickness: 3,
            marker_color: [0, 255, 0],
            toggle_blur_kernel: 5,
            slider_max: 100,
            histogram_width: 512,
            histogram_height: 300,
        }
    }
}

impl UiDefaults {
    pub(crate) fn sanitize(&mut self) {
        self.marker_radius = self.marker_radius.clamp(1, 512);
        self.marker_thickness = self.marker_thickness.clamp(1, 64);
        self.toggle_blur_kernel = self.toggle_blur_kernel.clamp(1, 99);
        self.slider_max = self.slider_max.clamp(1, 1000);
        self.histogram_width = self.histogram_width.clamp(64, 4096);
        self.histogram_height = self.histogram_height.clamp(64, 4096);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_clamps_out_of_range_values() {
        let mut defaults = UiDefaults {
            marker_radius: 0,
            marker_thickness: 1000,
            toggle_blur_kernel: 0,
            slider_max: 0,
            histogram_width: 1,
            histogram_height: 100_000,
            ..UiDefaults::default()
        };
        defaults.sanitize();
        assert_eq!(defaults.marker_radius, 1);
        assert_eq!(defaults.marker_thickness, 64);
        assert_eq!(defaults.toggle_blur_kernel, 1);
        assert_eq!(defaults.slider_max, 1);
        assert_eq!(defaults.histogram_width, 64);
        assert_eq!(defaults.histogram_height, 4096);
    }

    #[test]
    fn test_defaults_survive_sanitize() {
        let mut defaults = UiDefaults::default();
        let before = defaults.clone();
        defaults.sanitize();
        assert_eq!(defaults.marker_radius, before.marker_radius);
        assert_eq!(defaults.toggle_blur_kernel, before.toggle_blur_kernel);
        assert_eq!(defaults.histogram_width, before.histogram_width);
    }
}
