//! Unified application error types.

use thiserror::Error;

/// Result alias using [`AppError`].
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// One or more required environment variables are absent or empty.
    #[error("missing required configuration: {0}")]
    MissingConfiguration(String),
}
