//! Local store configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

const STORE_DIR: &str = ".chantier";
const STORE_FILE: &str = "store.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Store file location. Defaults to `~/.chantier/store.json`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the effective store file path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Unresolvable`] when no path is configured and
    /// the home directory cannot be determined.
    pub fn resolve_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        dirs::home_dir()
            .map(|home| home.join(STORE_DIR).join(STORE_FILE))
            .ok_or_else(|| ConfigError::Unresolvable {
                field: "storage.path".into(),
                reason: "home directory not found".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = StorageConfig {
            path: Some(PathBuf::from("/tmp/chantier.json")),
        };
        assert_eq!(
            config.resolve_path().unwrap(),
            PathBuf::from("/tmp/chantier.json")
        );
    }

    #[test]
    fn default_path_is_under_home() {
        let path = StorageConfig::default().resolve_path().expect("should resolve");
        assert!(path.ends_with(".chantier/store.json"));
    }
}
