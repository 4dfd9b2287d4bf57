//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! and translates core failures into user-facing messages.

use std::fmt;

use sealnote_core::SealError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (saved document, config)
    NotFound { message: String, hint: String },

    /// The supplied key did not open the document
    AuthFailed(String),

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::AuthFailed(message) => write!(f, "{}", message),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// The user-facing form of a recoverable core failure.
    ///
    /// Returns `None` for failures that should surface as general errors.
    pub fn from_seal(err: &SealError) -> Option<Self> {
        match err {
            SealError::Decryption => Some(CliError::AuthFailed(
                "Invalid key. Please try again.".to_string(),
            )),
            SealError::EmptySlot => Some(CliError::not_found(
                "No saved document.",
                "Create one with `sealnote new`.",
            )),
            _ => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed(_) => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}
