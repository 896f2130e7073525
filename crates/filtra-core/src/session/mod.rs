//! Window sessions: the per-window mutable state and its input handlers.

mod filter_set;
mod render;

#[cfg(test)]
mod tests;

pub use filter_set::{ActiveFilterSet, FilterKind};
pub use render::render;

use crate::buffer::ImageBuffer;
use crate::config::UiDefaults;
use crate::effects::{self, EffectKind};
use crate::filters::{box_blur, draw_circle_outline};
use crate::verbose_println;

/// All mutable state behind one display window: the base image, the set of
/// active toggle filters, and the slider blur radius.
///
/// A session is private to one window and one thread; handlers run to
/// completion one at a time. Dropping the session releases the buffer and
/// has no other side effects.
pub struct WindowSession {
    name: String,
    base: ImageBuffer,
    active: ActiveFilterSet,
    blur_radius: u32,
    defaults: UiDefaults,
}

impl WindowSession {
    pub fn new(name: impl Into<String>, base: ImageBuffer, defaults: UiDefaults) -> Self {
        Self {
            name: name.into(),
            base,
            active: ActiveFilterSet::new(),
            blur_radius: 0,
            defaults,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base image, including any annotations burned into it so far.
    pub fn base(&self) -> &ImageBuffer {
        &self.base
    }

    pub fn active_filters(&self) -> &ActiveFilterSet {
        &self.active
    }

    pub fn blur_radius(&self) -> u32 {
        self.blur_radius
    }

    /// Current frame of the toggle pipeline, rendered from the base.
    pub fn current_frame(&self) -> ImageBuffer {
        render(&self.base, &self.active, &self.defaults)
    }

    /// Toggle a filter and recompute the displayed frame.
    pub fn toggle_filter(&mut self, kind: FilterKind) -> ImageBuffer {
        let now_active = self.active.toggle(kind);
        verbose_println!(
            "[{}] {} {}",
            self.name,
            kind.as_str(),
            if now_active { "on" } else { "off" }
        );
        self.current_frame()
    }

    /// Slider handler for the blur preview.
    ///
    /// A position of zero or less is a no-op: the display is left untouched
    /// and the stored radius keeps its value. A positive position is stored
    /// and answered with a single-filter blur of the base image, kept
    /// deliberately separate from the toggle pipeline.
    pub fn on_slide(&mut self, pos: i32) -> Option<ImageBuffer> {
        if pos <= 0 {
            return None;
        }
        self.blur_radius = pos as u32;
        Some(box_blur(&self.base, self.blur_radius))
    }

    /// Pointer handler: burn a marker circle into the base image at (x, y).
    ///
    /// The mutation is irreversible; there is no overlay and no undo.
    /// Out-of-bounds coordinates are accepted as-is, clipping is left to
    /// the drawing primitive. Returns the blur preview when a slider radius
    /// is stored, otherwise the annotated base itself.
    pub fn on_pointer_down(&mut self, x: i32, y: i32) -> ImageBuffer {
        draw_circle_outline(
            &mut self.base,
            x,
            y,
            self.defaults.marker_radius,
            self.defaults.marker_color,
            self.defaults.marker_thickness,
        );
        verbose_println!("[{}] marker at ({}, {})", self.name, x, y);

        if self.blur_radius > 0 {
            box_blur(&self.base, self.blur_radius)
        } else {
            self.base.clone()
        }
    }

    /// Run a one-shot effect over the base image. The output is an
    /// independent buffer for a separate surface; the session's filter set
    /// and blur radius are not consulted or changed.
    pub fn run_effect(&self, kind: EffectKind) -> ImageBuffer {
        verbose_println!("[{}] effect: {}", self.name, kind.as_str());
        effects::apply(kind, &self.base, &self.defaults)
    }
}
