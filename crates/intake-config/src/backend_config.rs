use crate::{ConfigError, ConfigErrorResult, DEFAULT_BUCKET, DEFAULT_TABLE};

use serde::Deserialize;

/// Connection parameters for the hosted backend.
///
/// The access key is the only secret in the whole configuration; it usually
/// arrives through `INTAKE_BACKEND_KEY` (or a `.env` file) rather than
/// `config.toml`, and it is never logged.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Endpoint URL, e.g. "https://abc.supabase.co"
    pub url: String,
    /// Service access key (anon key)
    pub key: Option<String>,
    /// Target table for record submission
    pub table: String,
    /// Target bucket for file uploads
    pub bucket: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            key: None,
            table: String::from(DEFAULT_TABLE),
            bucket: String::from(DEFAULT_BUCKET),
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.url.is_empty() {
            return Err(ConfigError::backend(
                "backend.url must be set (INTAKE_BACKEND_URL or config.toml)",
            ));
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::backend(format!(
                "backend.url must be an http(s) URL, got {:?}",
                self.url
            )));
        }

        match self.key.as_deref() {
            None | Some("") => {
                return Err(ConfigError::backend(
                    "backend.key must be set (INTAKE_BACKEND_KEY or config.toml)",
                ));
            }
            Some(_) => {}
        }

        // Table and bucket names become URL path segments.
        if self.table.is_empty() || self.table.contains('/') {
            return Err(ConfigError::backend(format!(
                "backend.table must be a non-empty name without '/', got {:?}",
                self.table
            )));
        }

        if self.bucket.is_empty() || self.bucket.contains('/') {
            return Err(ConfigError::backend(format!(
                "backend.bucket must be a non-empty name without '/', got {:?}",
                self.bucket
            )));
        }

        Ok(())
    }
}
