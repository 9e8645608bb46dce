use super::app::AppConfig;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid logging.level: '{configured}' (valid: {valid})")]
    LogLevel {
        configured: String,
        valid: &'static str,
    },
    #[error("gateway.program must not be empty")]
    EmptyProgram,
    #[error("Catalog file not found: {path}")]
    CatalogNotFound { path: String },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::LogLevel { configured, valid } => format!(
                "Unknown log level!\n\n\
                Your configured value: {configured}\n\
                Valid values: {valid}\n\n\
                Please update logging.level in tinct.toml."
            ),
            ConfigValidationError::EmptyProgram => "Overlay command is empty!\n\n\
                tinct needs a program to run overlay commands with (default: cmd).\n\n\
                Please set gateway.program in tinct.toml or remove it to use the default."
                .to_string(),
            ConfigValidationError::CatalogNotFound { path } => format!(
                "Catalog file not found!\n\n\
                Configured path: {path}\n\n\
                Please fix the catalog path in tinct.toml, or remove it to use the built-in catalog."
            ),
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

impl ConfigLoadResult {
    pub fn into_result(self) -> Result<AppConfig, String> {
        match self {
            ConfigLoadResult::Success(config) => Ok(*config),
            ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => Err(msg),
        }
    }
}
