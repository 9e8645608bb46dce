use super::{LoggingConfig, validation::ConfigValidationError};
use crate::logger::{VALID_LEVELS, parse_level};
use engine::UserId;
use serde::Deserialize;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    user: Option<u32>,
    catalog: Option<String>,
    exclusive_accents: Option<bool>,

    #[serde(default)]
    gateway: GatewayConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if parse_level(self.logging.level()).is_none() {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
                valid: VALID_LEVELS,
            });
        }

        if self.gateway.program().trim().is_empty() {
            errors.push(ConfigValidationError::EmptyProgram);
        }

        if let Some(path) = self.catalog_path() {
            if !Path::new(path).is_file() {
                errors.push(ConfigValidationError::CatalogNotFound {
                    path: path.to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn user(&self) -> UserId {
        UserId(self.user.unwrap_or(0))
    }

    pub fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    /// Whether `tinct accent` disables other enabled accents by default.
    pub fn exclusive_accents(&self) -> bool {
        self.exclusive_accents.unwrap_or(false)
    }

    pub fn gateway(&self) -> &GatewayConfig {
        &self.gateway
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

/// How the overlay command is invoked
#[derive(Debug, Deserialize, Default, Clone)]
pub struct GatewayConfig {
    program: Option<String>,
    prefix_args: Option<Vec<String>>,
}

impl GatewayConfig {
    pub fn program(&self) -> &str {
        self.program.as_deref().unwrap_or("cmd")
    }

    /// Arguments placed between the program and `overlay`, e.g. `["shell", "cmd"]` for adb.
    pub fn prefix_args(&self) -> &[String] {
        self.prefix_args.as_deref().unwrap_or(&[])
    }
}
