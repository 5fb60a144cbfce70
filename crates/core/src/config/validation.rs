//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use thiserror::Error;

use crate::config::AppConfig;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `favicon_timeout_ms` is less than 100ms or exceeds 1 minute
    /// - `user_agent` is empty
    /// - exactly one of `store_url` / `store_api_key` is set
    /// - `admin_password_hash` is not a SHA-256 hex digest
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.favicon_timeout_ms < 100 {
            return Err(ConfigError::Invalid {
                field: "favicon_timeout_ms".into(),
                reason: "must be at least 100ms".into(),
            });
        }
        if self.favicon_timeout_ms > 60_000 {
            return Err(ConfigError::Invalid {
                field: "favicon_timeout_ms".into(),
                reason: "must not exceed 1 minute (60000ms)".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        let url_set = self.store_url.as_deref().is_some_and(|u| !u.is_empty());
        let key_set = self.store_api_key.as_deref().is_some_and(|k| !k.is_empty());
        if url_set != key_set {
            let field = if url_set { "store_api_key" } else { "store_url" };
            return Err(ConfigError::Invalid {
                field: field.into(),
                reason: "store_url and store_api_key must be set together".into(),
            });
        }
        if !url_set {
            tracing::warn!("remote store not configured; running in static data mode");
        }

        if let Some(hash) = self.admin_password_hash.as_deref()
            && !(hash.len() == 64 && hash.chars().all(|c| c.is_ascii_hexdigit()))
        {
            return Err(ConfigError::Invalid {
                field: "admin_password_hash".into(),
                reason: "must be a 64-character SHA-256 hex digest".into(),
            });
        }

        Ok(())
    }
}
