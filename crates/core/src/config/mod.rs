//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (LINKDEX_*)
//! 2. TOML config file (if LINKDEX_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (LINKDEX_*)
/// 2. TOML config file (if LINKDEX_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the remote catalog store (PostgREST-style API).
    ///
    /// Set via LINKDEX_STORE_URL environment variable. When unset the
    /// application runs in static data mode against the seed dataset.
    #[serde(default)]
    pub store_url: Option<String>,

    /// API key for the remote catalog store.
    ///
    /// Set via LINKDEX_STORE_API_KEY environment variable.
    #[serde(default)]
    pub store_api_key: Option<String>,

    /// SHA-256 hex digest of the admin password gating catalog mutations.
    ///
    /// Set via LINKDEX_ADMIN_PASSWORD_HASH environment variable. When unset
    /// mutations are refused.
    #[serde(default)]
    pub admin_password_hash: Option<String>,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via LINKDEX_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via LINKDEX_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Whether to probe for favicons when adding or updating listings.
    ///
    /// Set via LINKDEX_CHECK_FAVICONS environment variable.
    #[serde(default = "default_true")]
    pub check_favicons: bool,

    /// Favicon probe timeout in milliseconds.
    ///
    /// Set via LINKDEX_FAVICON_TIMEOUT_MS environment variable.
    #[serde(default = "default_favicon_timeout_ms")]
    pub favicon_timeout_ms: u64,
}

fn default_user_agent() -> String {
    "linkdex/0.1".into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_favicon_timeout_ms() -> u64 {
    5_000
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_url: None,
            store_api_key: None,
            admin_password_hash: None,
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            check_favicons: true,
            favicon_timeout_ms: default_favicon_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Favicon probe timeout as Duration.
    pub fn favicon_timeout(&self) -> Duration {
        Duration::from_millis(self.favicon_timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("LINKDEX_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("LINKDEX_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Whether a remote catalog store is configured.
    pub fn store_configured(&self) -> bool {
        matches!((&self.store_url, &self.store_api_key), (Some(url), Some(key)) if !url.is_empty() && !key.is_empty())
    }

    /// Require the remote store settings (for deferred validation).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if either setting is absent.
    pub fn require_store(&self) -> Result<(&str, &str), ConfigError> {
        let url = self.store_url.as_deref().filter(|u| !u.is_empty()).ok_or_else(|| ConfigError::Missing {
            field: "store_url".into(),
            hint: "Set LINKDEX_STORE_URL environment variable".into(),
        })?;
        let key = self.store_api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            ConfigError::Missing {
                field: "store_api_key".into(),
                hint: "Set LINKDEX_STORE_API_KEY environment variable".into(),
            }
        })?;
        Ok((url, key))
    }
}
