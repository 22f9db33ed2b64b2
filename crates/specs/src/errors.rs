use std::error::Error;

/// Base trait for all errors raised by this crate
pub trait SpecsErrorCode: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether the error was caused by the test author rather than the subject under test
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Errors that break an assertion before it can be evaluated.
///
/// These indicate a broken test, not a failing subject, so they are always
/// reported through the fatal channel.
#[derive(Debug, thiserror::Error)]
pub enum SpecsError {
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl SpecsErrorCode for SpecsError {
    fn error_code(&self) -> &'static str {
        match self {
            SpecsError::InvalidPattern { .. } => "INVALID_PATTERN",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, SpecsError::InvalidPattern { .. })
    }
}

impl From<(&str, regex::Error)> for SpecsError {
    fn from((pattern, err): (&str, regex::Error)) -> Self {
        SpecsError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    }
}
