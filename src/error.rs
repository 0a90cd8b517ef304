//! Process-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::input::InputError;

/// Exit status for any failed startup, configuration or input error.
pub const EXIT_FAILURE: u8 = 1;

/// Boxed error returned by the business callback.
pub type ProcessingError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort a run. None of them are retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("processing failed: {0}")]
    Processing(#[source] ProcessingError),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        EXIT_FAILURE
    }
}

/// Result type for a bootstrap run.
pub type AppResult<T> = Result<T, AppError>;
