//! Error types for carousel input handling.

use thiserror::Error;

/// Primary error type for carousel input that is rejected at the boundary.
#[derive(Debug, Error)]
pub enum CarouselError {
    /// The image attribute was not valid JSON or not a JSON array.
    #[error("image list is not a JSON array of strings")]
    MalformedImageList {
        /// Source JSON error.
        source: serde_json::Error,
    },
    /// An entry of the image list was not a string.
    #[error("image list entry {index} is invalid")]
    InvalidImageEntry {
        /// Position of the offending entry.
        index: usize,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// The configuration payload could not be decoded.
    #[error("carousel configuration is malformed")]
    MalformedConfig {
        /// Source JSON error.
        source: serde_json::Error,
    },
    /// A configuration field contained an invalid value.
    #[error("invalid carousel configuration field '{field}': {reason}")]
    InvalidConfig {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value rendered for diagnostics.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Convenience alias for carousel results.
pub type CarouselResult<T> = Result<T, CarouselError>;
