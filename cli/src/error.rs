//! CLI error types

use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0} of {1} endpoints unreachable")]
    Unreachable(usize, usize),

    #[error(transparent)]
    Core(#[from] lookout_core::CoreError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CliError {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            CliError::InvalidArgument(_) => "CLI002",
            CliError::ConfigError(_) => "CLI003",
            CliError::Unreachable(..) => "CLI004",
            CliError::Core(e) => e.code(),
            CliError::SerializationError(_) => "CLI006",
        }
    }
}

/// CLI-specific result type
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CliError::InvalidArgument("test".to_string()).code(), "CLI002");
        assert_eq!(CliError::ConfigError("test".to_string()).code(), "CLI003");
        assert_eq!(CliError::Unreachable(1, 2).code(), "CLI004");
        assert_eq!(
            CliError::Core(lookout_core::CoreError::ValidationError("x".to_string())).code(),
            "CORE002"
        );
    }

    #[test]
    fn test_error_display() {
        let error = CliError::Unreachable(2, 3);
        assert_eq!(error.to_string(), "2 of 3 endpoints unreachable");

        let error = CliError::InvalidArgument("--timeout-ms must be > 0".to_string());
        assert_eq!(error.to_string(), "Invalid argument: --timeout-ms must be > 0");
    }
}
