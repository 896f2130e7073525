//! One-shot derived computations.
//!
//! Each effect reads the base image and produces an independent output
//! buffer for a separate surface; none of them touch the session's filter
//! set or blur radius.

mod equalize;
mod histogram;
mod lomo;

pub use equalize::equalize;
pub use histogram::histogram_plot;
pub use lomo::lomo;

use crate::buffer::ImageBuffer;
use crate::config::UiDefaults;

/// One-shot effect triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Histogram,
    Equalize,
    Lomo,
}

impl EffectKind {
    pub const ALL: [EffectKind; 3] = [EffectKind::Histogram, EffectKind::Equalize, EffectKind::Lomo];

    /// Get the effect name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Histogram => "Show histogram",
            Self::Equalize => "Equalize histogram",
            Self::Lomo => "Lomography effect",
        }
    }

    /// Label appended to the session name for the effect's output window.
    pub fn window_suffix(&self) -> &'static str {
        match self {
            Self::Histogram => "Histogram",
            Self::Equalize => "Equalized",
            Self::Lomo => "Lomography",
        }
    }
}

/// Dispatch an effect request to its computation.
pub fn apply(kind: EffectKind, base: &ImageBuffer, defaults: &UiDefaults) -> ImageBuffer {
    match kind {
        EffectKind::Histogram => {
            histogram_plot(base, defaults.histogram_width, defaults.histogram_height)
        }
        EffectKind::Equalize => equalize(base),
        EffectKind::Lomo => lomo(base),
    }
}
