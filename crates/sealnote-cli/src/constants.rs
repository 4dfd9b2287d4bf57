//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Nothing saved yet, or config missing.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments (e.g. an empty document).
    pub const INVALID_INPUT: i32 = 4;

    /// The key did not open the saved document.
    pub const AUTH_FAILED: i32 = 5;
}

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "SEALNOTE_CONFIG";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SEALNOTE_LOG";
