//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from adapter errors to exit codes and user-facing messages.

use finder_client::ApiError;
use finder_core::FilterApiError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Filter API error (transport, status, response shape).
    #[error("{0}")]
    Api(String),

    /// Argument parsing or validation error.
    #[error("invalid arguments: {0}")]
    Arguments(String),

    /// IO error (stdin closed, broken pipe, etc.).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 74: IO error (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Api(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        Self::Api(err.to_string())
    }
}

impl From<FilterApiError> for CliError {
    fn from(err: FilterApiError) -> Self {
        Self::Api(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Api("boom".to_string()).exit_code(), 1);
        assert_eq!(CliError::Arguments("bad".to_string()).exit_code(), 2);
        assert_eq!(CliError::Io("pipe".to_string()).exit_code(), 74);
    }
}
