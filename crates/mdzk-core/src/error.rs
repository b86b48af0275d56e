//! # Core Error Types
//!
//! Error types shared across the mdzk workspace. All errors use `thiserror`
//! and carry enough context for the CLI layer to render a useful message.

use thiserror::Error;

/// Top-level error type for `mdzk-core` operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Canonical serialization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// A timestamp string failed validation.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical encodings: their JCS
    /// number rendering has edge cases that would make statement bytes
    /// implementation-dependent.
    #[error("float values are not permitted in canonical encodings: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_rejected_display_includes_value() {
        let err = CanonicalizationError::FloatRejected(2.5);
        assert!(format!("{err}").contains("2.5"));
    }

    #[test]
    fn core_error_wraps_canonicalization() {
        let err = CoreError::from(CanonicalizationError::FloatRejected(0.1));
        assert!(format!("{err}").starts_with("canonicalization error"));
    }

    #[test]
    fn invalid_timestamp_display() {
        let err = CoreError::InvalidTimestamp("no Z suffix".to_string());
        assert!(format!("{err}").contains("no Z suffix"));
    }
}
