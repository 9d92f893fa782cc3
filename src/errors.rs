//! Error types for studioflow
//!
//! The workflow core never fails; these errors come from loading snapshots
//! and configuration and from parsing CLI input. Each has an error code for
//! programmatic handling.

use thiserror::Error;

/// Result type alias for studioflow operations
pub type Result<T> = std::result::Result<T, StudioflowError>;

/// Main error type for studioflow
#[derive(Debug, Error)]
pub enum StudioflowError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Step number outside the pipeline
    #[error("Invalid step: {0}")]
    InvalidStep(String),

    /// Unparseable status, action or module kind
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl StudioflowError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            StudioflowError::FileNotFound(_) => "FILE_NOT_FOUND",
            StudioflowError::InvalidJson(_) => "INVALID_JSON",
            StudioflowError::ConfigError(_) => "CONFIG_ERROR",
            StudioflowError::InvalidStep(_) => "INVALID_STEP",
            StudioflowError::InvalidArgument(_) => "INVALID_ARGUMENT",
            StudioflowError::Io(_) => "IO_ERROR",
            StudioflowError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        StudioflowError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &StudioflowError) -> i32 {
    match error {
        // EX_USAGE
        StudioflowError::InvalidStep(_) | StudioflowError::InvalidArgument(_) => 64,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StudioflowError::FileNotFound("test".into()).code(), "FILE_NOT_FOUND");
        assert_eq!(StudioflowError::InvalidJson("test".into()).code(), "INVALID_JSON");
        assert_eq!(StudioflowError::ConfigError("test".into()).code(), "CONFIG_ERROR");
        assert_eq!(StudioflowError::InvalidStep("test".into()).code(), "INVALID_STEP");
        assert_eq!(StudioflowError::InvalidArgument("test".into()).code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(to_exit_code(&StudioflowError::InvalidStep("7".into())), 64);
        assert_eq!(to_exit_code(&StudioflowError::InvalidArgument("x".into())), 64);
        assert_eq!(to_exit_code(&StudioflowError::FileNotFound("test".into())), 1);
    }

    #[test]
    fn test_wrap_error() {
        let wrapped = StudioflowError::wrap("inner error", "outer context");
        assert_eq!(wrapped.code(), "WRAPPED_ERROR");
        assert!(wrapped.to_string().contains("outer context"));
        assert!(wrapped.to_string().contains("inner error"));
    }
}
