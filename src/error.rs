//! Error types for Discup operations.
//!
//! This module defines [`DiscupError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Expected absences (package not installed, latest version unknown,
//!   executable not found, process already running) are NOT errors; they
//!   are `Option`/enum outcomes reported as status lines.
//! - `Download` and `Install` are recoverable operational failures: the
//!   run reports them and completes without a distinguished exit code.
//! - `NoElevation` is the one fatal precondition failure; it terminates
//!   the run with a non-zero exit.
//! - Use `anyhow::Error` (via `DiscupError::Other`) for unexpected errors.

use thiserror::Error;

/// Core error type for Discup operations.
#[derive(Debug, Error)]
pub enum DiscupError {
    /// No privilege escalation helper is available on this system.
    #[error("no privilege escalation mechanism available (looked for pkexec, sudo)")]
    NoElevation,

    /// Downloading the package artifact failed.
    #[error("download failed for {url}: {message}")]
    Download { url: String, message: String },

    /// Installing the package failed and dependency repair did not recover.
    #[error("install failed: {message}")]
    Install { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DiscupError {
    /// Whether this error should terminate the run with a non-zero exit.
    ///
    /// Everything except a missing elevation mechanism is reported and
    /// the run carries on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DiscupError::NoElevation)
    }
}

/// Result type alias for Discup operations.
pub type Result<T> = std::result::Result<T, DiscupError>;
