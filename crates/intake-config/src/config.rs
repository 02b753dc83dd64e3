use crate::{BackendConfig, ConfigError, ConfigErrorResult, LogLevel, LoggingConfig};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for INTAKE_CONFIG_DIR env var, else use ./.intake/
    /// 2. Auto-create the config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply INTAKE_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: INTAKE_CONFIG_DIR env var > ./.intake/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("INTAKE_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".intake"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.backend.validate()?;

        // The log file stays inside the config dir's log directory.
        if let Some(ref file) = self.logging.file {
            if file.is_empty() || file.contains('/') || file.contains("..") {
                return Err(ConfigError::logging(format!(
                    "logging.file must be a bare file name, got {file:?}"
                )));
            }
        }

        Ok(())
    }

    /// Log configuration summary (NEVER logs the access key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  backend: {}", self.backend.url);
        info!(
            "  backend.key: {}",
            if self.backend.key.as_deref().is_some_and(|k| !k.is_empty()) {
                "configured"
            } else {
                "missing"
            }
        );
        info!(
            "  backend.table: {} / backend.bucket: {}",
            self.backend.table, self.backend.bucket
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Backend
        Self::apply_env_string("INTAKE_BACKEND_URL", &mut self.backend.url);
        Self::apply_env_option_string("INTAKE_BACKEND_KEY", &mut self.backend.key);
        Self::apply_env_string("INTAKE_BACKEND_TABLE", &mut self.backend.table);
        Self::apply_env_string("INTAKE_BACKEND_BUCKET", &mut self.backend.bucket);

        // Logging
        Self::apply_env_level("INTAKE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("INTAKE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("INTAKE_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for bool values
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            match val.to_lowercase().as_str() {
                "true" | "1" | "yes" => *target = true,
                "false" | "0" | "no" => *target = false,
                _ => {}
            }
        }
    }

    /// Helper: Apply environment variable override for the log level
    fn apply_env_level(var_name: &str, target: &mut LogLevel) {
        if let Ok(val) = std::env::var(var_name) {
            // FromStr is infallible
            *target = LogLevel::from_str(&val).unwrap();
        }
    }
}
