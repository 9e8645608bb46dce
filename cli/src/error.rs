use engine::errors::{AccentError, CatalogError};
use thiserror::Error;

/// Everything that can stop a `tinct` invocation.
///
/// Partial toggle failures are not errors: they come back in the command's
/// [`ToggleReport`](engine::ToggleReport) and only change the exit status.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded, parsed or validated.
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Catalog Error: {0}")]
    Catalog(#[from] CatalogError),

    /// An accent command was rejected before any toggle was issued.
    #[error("Accent Error: {0}")]
    Accent(#[from] AccentError),

    #[error("Logger Error: {0}")]
    Logger(String),

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output Error: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<log::SetLoggerError> for AppError {
    fn from(err: log::SetLoggerError) -> Self {
        AppError::Logger(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
