//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map client, validation and export errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (128 + 2).

use pokedex_client::{ClientError, ExportError, ValidationError};

/// Structured exit codes for pokedex-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Network, timeout, or DNS failure.
    ///
    /// Scripts may retry later.
    ConnectionError = 3,

    /// No creature matched.
    NotFound = 4,

    /// The input held nothing to look up.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// HTTP 502/503/504.
    ServiceUnavailable = 8,

    /// SIGINT/Ctrl+C (128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::NotFound(_) => ExitCode::NotFound,
            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,
            ClientError::ApiError { .. } => ExitCode::GeneralError,

            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            ClientError::HttpError(_) => ExitCode::GeneralError,

            ClientError::InvalidResponse(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&ExportError> for ExitCode {
    fn from(err: &ExportError) -> Self {
        match err {
            ExportError::MissingSprite(_) => ExitCode::NotFound,
            ExportError::Fetch { source, .. } => ExitCode::from(source),
            ExportError::Write { .. } => ExitCode::GeneralError,
        }
    }
}

/// Every identifier in a search failed.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct NothingFound {
    pub message: String,
}

/// Extract the exit code for an `anyhow::Error`.
pub trait ExitCodeExt {
    /// Returns `ExitCode::GeneralError` when no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(e) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(e);
            }
            if let Some(e) = cause.downcast_ref::<ExportError>() {
                return ExitCode::from(e);
            }
            if cause.is::<ValidationError>() {
                return ExitCode::ValidationError;
            }
            if cause.is::<NothingFound>() {
                return ExitCode::NotFound;
            }
        }

        ExitCode::GeneralError
    }
}
