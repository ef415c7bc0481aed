//! Boundary policy for paging and neighbour resolution.
//!
//! # Design
//! - All arithmetic takes the image count explicitly and never divides by zero.
//! - `None` means "no valid index", callers treat it as a no-op or an empty slot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// How paging behaves at the first and last image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Index arithmetic modulo the image count.
    #[default]
    Wrap,
    /// Index arithmetic saturating at the first and last image.
    Clamp,
}

impl BoundaryPolicy {
    /// Stable string form used by attributes and scripts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wrap => "wrap",
            Self::Clamp => "clamp",
        }
    }

    /// Index after `index` for a list of `len` images.
    #[must_use]
    pub const fn after(self, index: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self {
            Self::Wrap => Some((index + 1) % len),
            Self::Clamp => {
                if index + 1 < len {
                    Some(index + 1)
                } else {
                    None
                }
            }
        }
    }

    /// Index before `index` for a list of `len` images.
    #[must_use]
    pub const fn before(self, index: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self {
            Self::Wrap => Some((index + len - 1) % len),
            Self::Clamp => {
                if index > 0 {
                    Some(index - 1)
                } else {
                    None
                }
            }
        }
    }

    /// Whether the "previous" control is usable at `index`.
    #[must_use]
    pub const fn can_go_back(self, index: usize, len: usize) -> bool {
        match self {
            Self::Wrap => len > 0,
            Self::Clamp => len > 0 && index > 0,
        }
    }

    /// Whether the "next" control is usable at `index`.
    #[must_use]
    pub const fn can_go_forward(self, index: usize, len: usize) -> bool {
        match self {
            Self::Wrap => len > 0,
            Self::Clamp => index + 1 < len,
        }
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoundaryPolicy {
    type Err = CarouselError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "wrap" => Ok(Self::Wrap),
            "clamp" => Ok(Self::Clamp),
            _ => Err(CarouselError::InvalidConfig {
                field: "policy",
                value: value.to_string(),
                reason: "must be 'wrap' or 'clamp'",
            }),
        }
    }
}
