//! Common types used across the crate.
//!
//! Endpoint resolution itself cannot fail; errors only come from
//! misuse of the process-wide endpoint slot.

use std::fmt;

// =============================================================================
// Error Types
// =============================================================================

/// Frontend configuration errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Endpoint configuration was rejected or installed twice.
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Config("endpoints already initialized".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: endpoints already initialized"
        );
    }
}
