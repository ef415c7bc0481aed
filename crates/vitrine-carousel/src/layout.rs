//! Responsive layout selection for the carousel.

use serde::{Deserialize, Serialize};

/// Widest viewport, in CSS pixels, that still uses the compact layout.
pub const COMPACT_MAX_WIDTH: u32 = 1200;

/// Host viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: u32,
    /// Height in CSS pixels.
    pub height: u32,
}

impl Viewport {
    /// Portrait when taller than wide.
    #[must_use]
    pub const fn is_portrait(self) -> bool {
        self.height > self.width
    }
}

/// Arrangement of the three image slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselLayout {
    /// Previous, center and next slots side by side.
    #[default]
    Wide,
    /// Center slot only; side slots are hidden.
    Compact,
}

impl CarouselLayout {
    /// Pick the layout for the supplied viewport.
    #[must_use]
    pub const fn for_viewport(viewport: Viewport) -> Self {
        if viewport.width <= COMPACT_MAX_WIDTH || viewport.is_portrait() {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    /// Whether side slots are shown.
    #[must_use]
    pub const fn shows_side_slots(self) -> bool {
        matches!(self, Self::Wide)
    }
}
