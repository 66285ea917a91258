// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::matcher::PatternError;

/// Quickfilter error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Pattern list breaks the sorted/minimum-length contract (strict mode)
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// Input line longer than the record capacity (strict mode)
    #[error("line {line} exceeds {capacity} bytes")]
    LineTooLong { line: u64, capacity: usize },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing filtered output failed
    #[error("write error: {0}")]
    Output(#[source] std::io::Error),
}

/// Result type using quickfilter Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Input consumed to end of stream
    Success = 0,
    /// Strict mode rejected an input line
    InputRejected = 1,
    /// Configuration or pattern error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Pattern(_) => ExitCode::ConfigError,
            Error::LineTooLong { .. } => ExitCode::InputRejected,
            Error::Io { .. } | Error::Output(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
