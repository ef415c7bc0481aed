//! Scrollbar geometry and pointer-to-index mapping.
//!
//! # Design
//! - Pure functions over plain numbers so hosts can supply any coordinate space.
//! - Degenerate inputs (empty lists, zero-width tracks, NaN) map to `None`.

use serde::{Deserialize, Serialize};

/// Bounding box of the scrollbar track along the drag axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    /// Left edge of the track in pointer coordinates.
    pub left: f64,
    /// Track width in pointer coordinates.
    pub width: f64,
}

impl TrackGeometry {
    /// Build a track from its left edge and width.
    #[must_use]
    pub const fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Fraction of the track covered by `pointer_x`, clamped to `[0, 1]`.
    ///
    /// Returns `None` for a non-positive or non-finite width or pointer.
    #[must_use]
    pub fn ratio(self, pointer_x: f64) -> Option<f64> {
        if !pointer_x.is_finite() || !self.left.is_finite() {
            return None;
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return None;
        }
        Some(((pointer_x - self.left) / self.width).clamp(0.0, 1.0))
    }
}

/// Thumb size and offset, both in percent of the track width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThumbGeometry {
    /// Thumb width in percent.
    pub width_percent: f64,
    /// Thumb left offset in percent.
    pub left_percent: f64,
}

/// Thumb geometry for `index` within `len` images.
///
/// The width is `max(min_percent, 100 / len)` and the thumb travels the
/// remaining space in `len - 1` equal steps. Returns `None` for an empty list.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn thumb_geometry(len: usize, index: usize, min_percent: f64) -> Option<ThumbGeometry> {
    if len == 0 {
        return None;
    }
    let width_percent = (100.0 / len as f64).max(min_percent).min(100.0);
    let step = if len > 1 {
        (100.0 - width_percent) / (len - 1) as f64
    } else {
        0.0
    };
    Some(ThumbGeometry {
        width_percent,
        left_percent: step * index.min(len - 1) as f64,
    })
}

/// Nearest image index for a pointer position over the track.
///
/// Returns `None` for an empty list or when the track/pointer is unusable.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn index_for_pointer(pointer_x: f64, track: TrackGeometry, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;
    let ratio = track.ratio(pointer_x)?;
    let index = (ratio * last as f64).round() as usize;
    Some(index.min(last))
}
