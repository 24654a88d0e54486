//! Error types for rehost operations.
//!
//! This module defines [`RehostError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Conditions that make an override inert (missing, disabled, unparsable)
//!   are not errors; they surface as a
//!   [`NotAppliedReason`](crate::overrides::NotAppliedReason)
//! - `InvalidOverride` aborts resolution or a save
//! - IO failures are wrapped and reported at the top level

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rehost operations.
#[derive(Debug, Error)]
pub enum RehostError {
    /// A field failed URL or scheme validation, or a required field was blank.
    #[error("Invalid override: {message}")]
    InvalidOverride {
        field: &'static str,
        message: String,
    },

    /// The override document could not be parsed.
    #[error("Failed to parse override document at {path}: {message}")]
    OverrideParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RehostError {
    /// Build an `InvalidOverride` error for `field`.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidOverride {
            field,
            message: message.into(),
        }
    }

    /// The offending field, if this is a validation error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidOverride { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias for rehost operations.
pub type Result<T> = std::result::Result<T, RehostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_override_displays_message() {
        let err = RehostError::invalid("APIUrl", "APIUrl must be an absolute URL");
        assert_eq!(
            err.to_string(),
            "Invalid override: APIUrl must be an absolute URL"
        );
        assert_eq!(err.field(), Some("APIUrl"));
    }

    #[test]
    fn parse_error_displays_path_and_message() {
        let err = RehostError::OverrideParseError {
            path: PathBuf::from("/cfg/endpoints.json"),
            message: "expected value".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/cfg/endpoints.json"));
        assert!(msg.contains("expected value"));
        assert!(err.field().is_none());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RehostError = io_err.into();
        assert!(matches!(err, RehostError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: RehostError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
