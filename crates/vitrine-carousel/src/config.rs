//! Carousel configuration model and validation.
//!
//! # Design
//! - Every field has a default so partial JSON objects are accepted.
//! - Unknown fields are rejected to surface typos in host markup.
//! - Validation runs once at the boundary; the controller trusts its config.

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, CarouselResult};
use crate::policy::BoundaryPolicy;

/// Index selected after every image load (clamped to the last image).
pub const DEFAULT_INITIAL_INDEX: usize = 1;
/// Lower bound of the scrollbar thumb width, in percent of the track.
pub const DEFAULT_MIN_THUMB_PERCENT: f64 = 10.0;

/// Host-supplied carousel options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Paging behaviour at the first and last image.
    pub policy: BoundaryPolicy,
    /// Index selected after each load.
    pub initial_index: usize,
    /// Minimum thumb width in percent.
    pub min_thumb_percent: f64,
    /// Whether loads eagerly prefetch every image.
    pub prefetch: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            policy: BoundaryPolicy::default(),
            initial_index: DEFAULT_INITIAL_INDEX,
            min_thumb_percent: DEFAULT_MIN_THUMB_PERCENT,
            prefetch: true,
        }
    }
}

impl CarouselConfig {
    /// Default configuration with the given boundary policy.
    #[must_use]
    pub fn with_policy(policy: BoundaryPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration object.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::MalformedConfig`] when the payload does not
    /// decode, or [`CarouselError::InvalidConfig`] when a field is out of range.
    pub fn from_json(raw: &str) -> CarouselResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|source| CarouselError::MalformedConfig { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::InvalidConfig`] when `min_thumb_percent` is not
    /// a finite value in `(0, 100]`.
    pub fn validate(&self) -> CarouselResult<()> {
        let min = self.min_thumb_percent;
        if !min.is_finite() || min <= 0.0 || min > 100.0 {
            return Err(CarouselError::InvalidConfig {
                field: "min_thumb_percent",
                value: min.to_string(),
                reason: "must be within (0, 100]",
            });
        }
        Ok(())
    }

    /// Index to select after loading `len` images, `None` for an empty list.
    #[must_use]
    pub fn start_index(&self, len: usize) -> Option<usize> {
        len.checked_sub(1).map(|last| self.initial_index.min(last))
    }
}
