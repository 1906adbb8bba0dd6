//! # Application Error Type
//!
//! Errors that end a console session. Validation problems never reach this
//! type: they are shown at the prompt and the field is asked for again.
//!
//! ```text
//! ValidationError ──► shown at the prompt, re-asked (never propagated)
//! io::Error       ──► AppError::Io     ──► anyhow in main ──► exit 1
//! unreadable file ──► AppError::Load   ──► anyhow in main ──► exit 1
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Fatal console application errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading stdin or writing stdout failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The `--load` file could not be read.
    #[error("Could not read hire data from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON report could not be produced.
    #[error("Could not encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
