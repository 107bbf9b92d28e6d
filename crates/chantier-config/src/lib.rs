//! # chantier-config
//!
//! Layered configuration loading for Chantier using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CHANTIER_*` prefix, `__` as separator)
//! 2. Project-level `.chantier/config.toml`
//! 3. User-level `~/.config/chantier/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CHANTIER_API__BASE_URL` -> `api.base_url`,
//! `CHANTIER_STORAGE__PATH` -> `storage.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use chantier_config::ChantierConfig;
//!
//! let config = ChantierConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.api.base_url);
//! ```

mod api;
mod error;
mod storage;

pub use api::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ConfigError;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChantierConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl ChantierConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or merge providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".chantier/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CHANTIER_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("chantier").join("config.toml"))
    }

    /// Load `.env` from the current directory. Silently does nothing if absent.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_backend() {
        let config = ChantierConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(config.api.timeout_secs.is_none());
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: ChantierConfig = ChantierConfig::figment().extract()?;
            assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api");
            Ok(())
        });
    }
}
