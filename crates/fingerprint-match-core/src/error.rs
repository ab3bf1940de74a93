//! Error types for fingerprint-match-core.
//!
//! This module defines the central error type [`CoreError`] used throughout
//! the crate, along with the [`CoreResult<T>`] type alias.

use thiserror::Error;

/// Top-level error type for fingerprint correlation operations.
///
/// Provides structured error variants for all failure modes in the core
/// library, enabling precise error handling and informative error messages.
///
/// # Examples
///
/// ```rust
/// use fingerprint_match_core::CoreError;
///
/// let error = CoreError::InvalidSubmission(
///     "submission carries neither a component set nor a canvas payload".to_string(),
/// );
/// assert!(!error.is_retryable());
/// assert!(error.to_string().contains("Invalid submission"));
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// A submitted fingerprint payload is missing mandatory fields.
    ///
    /// # When This Occurs
    ///
    /// - A submission with an empty component set and no canvas payload
    /// - A secondary-lookup request without a component set
    ///
    /// Rejected before any storage access; the caller should treat this as
    /// a 4xx-equivalent and not retry the same payload.
    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    /// A read or write against the record store failed.
    ///
    /// # When This Occurs
    ///
    /// - Backing store connection failure
    /// - Write failure with no partial state committed
    ///
    /// Retryable by the caller.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A stored record could not be scored against the submission.
    ///
    /// # When This Occurs
    ///
    /// - A comparator produced a non-finite score
    /// - Malformed sub-structures in a stored record
    ///
    /// During candidate ranking the offending record is skipped and scoring
    /// continues; the error only aborts single-record comparisons.
    #[error("Comparison error: {0}")]
    Comparison(String),

    /// Error during serialization or deserialization.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration is invalid or missing.
    ///
    /// # When This Occurs
    ///
    /// - Threshold outside the 0-100 range
    /// - Unreadable or unparseable configuration file
    #[error("Configuration error: {0}")]
    Config(String),

    /// An unexpected internal error occurred.
    ///
    /// These errors typically indicate bugs and should be reported.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Whether the caller may retry the failed operation unchanged.
    ///
    /// Only storage failures are transient; every other variant is
    /// deterministic for the same input.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::Config(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidSubmission("missing canvas".to_string());
        assert!(err.to_string().contains("Invalid submission"));
        assert!(err.to_string().contains("missing canvas"));
    }

    #[test]
    fn test_only_storage_errors_are_retryable() {
        assert!(CoreError::StorageUnavailable("down".to_string()).is_retryable());
        assert!(!CoreError::InvalidSubmission("empty".to_string()).is_retryable());
        assert!(!CoreError::Comparison("nan".to_string()).is_retryable());
        assert!(!CoreError::Config("bad threshold".to_string()).is_retryable());
    }

    #[test]
    fn test_serde_json_error_converts() {
        let bad: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: CoreError = bad.unwrap_err().into();
        assert!(matches!(err, CoreError::Serialization(_)));
    }
}
