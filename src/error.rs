//! Error types and handling for tapfresh
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tapfresh operations
#[derive(Error, Diagnostic, Debug)]
pub enum TapfreshError {
    // Homebrew errors
    #[error("Homebrew not found")]
    #[diagnostic(
        code(tapfresh::brew::not_found),
        help("Install Homebrew from https://brew.sh and make sure `brew` is on PATH")
    )]
    BrewNotFound,

    #[error("Homebrew command failed: {command}: {reason}")]
    #[diagnostic(code(tapfresh::brew::command_failed))]
    BrewCommandFailed { command: String, reason: String },

    // Tap errors
    #[error("Cannot read history of tap '{tap}': {reason}")]
    #[diagnostic(
        code(tapfresh::tap::unavailable),
        help("Check that the tap is installed (`brew tap`) and its checkout is intact")
    )]
    TapUnavailable { tap: String, reason: String },

    // History errors
    #[error("Failed to read history file: {path}: {reason}")]
    #[diagnostic(code(tapfresh::history::read_failed))]
    HistoryReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(tapfresh::io::error))]
    IoError { message: String },
}

impl From<std::io::Error> for TapfreshError {
    fn from(err: std::io::Error) -> Self {
        TapfreshError::IoError {
            message: err.to_string(),
        }
    }
}

/// Build a `BrewCommandFailed` from a command line and its stderr
pub fn brew_command_failed(command: impl Into<String>, reason: impl Into<String>) -> TapfreshError {
    TapfreshError::BrewCommandFailed {
        command: command.into(),
        reason: reason.into(),
    }
}

/// Build a `TapUnavailable` for a failed retrieval group
pub fn tap_unavailable(tap: impl Into<String>, reason: impl Into<String>) -> TapfreshError {
    TapfreshError::TapUnavailable {
        tap: tap.into(),
        reason: reason.into(),
    }
}

/// Build a `HistoryReadFailed` for an unreadable history file
pub fn history_read_failed(path: impl Into<String>, reason: impl Into<String>) -> TapfreshError {
    TapfreshError::HistoryReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TapfreshError>;
