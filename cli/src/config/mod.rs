use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod app;
pub mod validation;

pub use app::{AppConfig, GatewayConfig};
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "tinct.toml";

/// Per-user configuration file, e.g. `~/.config/tinct/tinct.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tinct").join(CONFIG_FILE_NAME))
}

/// Loads configuration from files and `TINCT__*` environment variables.
///
/// With an explicit path only that file is read and it must exist. Without
/// one, the per-user file and then `./tinct.toml` are layered, both optional.
/// Environment entries override file values.
pub fn load_config(explicit: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let mut builder = Config::builder();
    match explicit {
        Some(path) => {
            builder = builder
                .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(true));
        }
        None => {
            if let Some(path) = default_config_path() {
                builder = builder
                    .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(false));
            }
            builder = builder.add_source(File::new(CONFIG_FILE_NAME, FileFormat::Toml).required(false));
        }
    }

    let env_source = Environment::with_prefix("TINCT")
        .separator("__")
        .try_parsing(true);

    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your tinct.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                let error_messages: Vec<String> =
                    validation_errors.iter().map(|e| e.user_message()).collect();
                return ConfigLoadResult::DeserializeError(format!(
                    "Configuration validation failed:\n{}",
                    error_messages.join("\n\n")
                ));
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("warn")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
