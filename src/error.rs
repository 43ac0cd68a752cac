//! Error types for check-allowed-files.
//!
//! Uses thiserror for derive macros; every variant maps to a process exit code.

use crate::exit_codes;
use thiserror::Error;

/// Failure of a pattern check.
#[derive(Error, Debug)]
pub enum CheckError {
    /// None of the supplied patterns matched an existing path.
    #[error("No allowed files found in the repository.")]
    NoMatches,
}

impl CheckError {
    /// Returns the exit code the process should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::NoMatches => exit_codes::NO_MATCHES,
        }
    }
}

/// Result type alias for checker operations.
pub type Result<T> = std::result::Result<T, CheckError>;
