//! CLI-specific error types and mappings.
//!
//! Maps library errors to exit codes and user-facing messages.

use thiserror::Error;
use xdgdirs_core::{ConfigError, DirsError};

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad input that clap could not catch, such as an empty file name.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The requested file exists in none of the searched directories.
    #[error("{0}")]
    NotFound(String),

    /// No candidate directory could hold the requested file.
    #[error("{0}")]
    CantCreate(String),

    /// IO error while reading configuration or writing output.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Arguments(_) => 2,
            Self::NotFound(_) => 66,   // EX_NOINPUT
            Self::CantCreate(_) => 73, // EX_CANTCREAT
            Self::Io(_) => 74,         // EX_IOERR
            Self::Config(_) => 78,     // EX_CONFIG
        }
    }
}

impl From<DirsError> for CliError {
    fn from(err: DirsError) -> Self {
        let message = err.to_string();
        match err {
            DirsError::NotFound { .. } => Self::NotFound(message),
            DirsError::NoWritableLocation { .. } | DirsError::RuntimeDir { .. } => {
                Self::CantCreate(message)
            }
            DirsError::UserDirsRead { .. } => Self::Io(message),
            DirsError::EmptyName | DirsError::AbsoluteName(_) => Self::Arguments(message),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.to_string())
    }
}
