//! Canonical-order replay of the active filter set.

use crate::buffer::ImageBuffer;
use crate::config::UiDefaults;
use crate::filters::{box_blur, gradient_edges, to_grayscale};

use super::filter_set::{ActiveFilterSet, FilterKind};

/// Recompute the displayed frame from scratch.
///
/// Starts from a fresh copy of `base` (never mutating it) and replays the
/// active filters in canonical order, so the result depends only on the
/// set, never on the order the user toggled them. `ColorRestore` re-seeds
/// the working copy from `base`; its only purpose is cancelling an earlier
/// grayscale reduction. The caller owns the result.
pub fn render(base: &ImageBuffer, active: &ActiveFilterSet, defaults: &UiDefaults) -> ImageBuffer {
    let mut frame = base.clone();
    for kind in active.iter() {
        frame = match kind {
            FilterKind::Blur => box_blur(&frame, defaults.toggle_blur_kernel),
            FilterKind::Grayscale => to_grayscale(&frame),
            FilterKind::ColorRestore => base.clone(),
            FilterKind::EdgeDetect => gradient_edges(&frame),
        };
    }
    frame
}
