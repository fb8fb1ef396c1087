//! # roll-config
//!
//! Layered configuration loading for Rollcall using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ROLLCALL_*` prefix, `__` as separator)
//! 2. Project-level `.rollcall/config.toml`
//! 3. User-level `~/.config/rollcall/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ROLLCALL_API__BASE_URL` -> `api.base_url`,
//! `ROLLCALL_GENERAL__PAGE_SIZE` -> `general.page_size`, etc. The `__`
//! (double underscore) separates nested config sections.

mod api;
mod credentials;
mod error;
mod general;

pub use api::ApiConfig;
pub use credentials::CredentialsConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RollConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RollConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or the
    /// merged figment does not extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support. This is the typical
    /// entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".rollcall/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ROLLCALL_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("rollcall").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = RollConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.general.page_size, 10);
        assert!(!config.credentials.is_configured());
    }

    #[test]
    fn toml_layer_overrides_defaults() {
        let config: RollConfig = Figment::from(Serialized::defaults(RollConfig::default()))
            .merge(Toml::string(
                r#"
                [api]
                base_url = "https://rollcall.example.com/api"

                [general]
                page_size = 25
                "#,
            ))
            .extract()
            .expect("extract");
        assert_eq!(config.api.base_url, "https://rollcall.example.com/api");
        assert_eq!(config.general.page_size, 25);
        // Untouched fields keep their defaults.
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn env_layer_wins_over_files() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".rollcall")?;
            jail.create_file(
                ".rollcall/config.toml",
                r#"
                [api]
                base_url = "https://file.example.com/api"
                "#,
            )?;
            jail.set_env("ROLLCALL_API__BASE_URL", "https://env.example.com/api");
            jail.set_env("ROLLCALL_CREDENTIALS__USERNAME", "admin");
            jail.set_env("ROLLCALL_CREDENTIALS__PASSWORD", "hunter2");

            let config: RollConfig = RollConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "https://env.example.com/api");
            assert!(config.credentials.is_configured());
            Ok(())
        });
    }
}
