use std::path::PathBuf;

use anyhow::Context;
use chantier_config::ChantierConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<ChantierConfig> {
    ChantierConfig::load_with_dotenv().context("failed to load chantier configuration")
}

/// `--store` wins over `storage.path` and the default location.
pub fn resolve_store_path(flags: &GlobalFlags, config: &ChantierConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = &flags.store {
        return Ok(path.clone());
    }
    config
        .storage
        .resolve_path()
        .context("failed to resolve the local store path")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chantier_config::{ChantierConfig, StorageConfig};
    use pretty_assertions::assert_eq;

    use super::resolve_store_path;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(store: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            store: store.map(PathBuf::from),
        }
    }

    #[test]
    fn store_flag_overrides_config() {
        let config = ChantierConfig {
            storage: StorageConfig {
                path: Some(PathBuf::from("/var/lib/chantier/store.json")),
            },
            ..ChantierConfig::default()
        };
        let path = resolve_store_path(&flags(Some("/tmp/override.json")), &config).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/override.json"));
    }

    #[test]
    fn configured_path_is_used_without_flag() {
        let config = ChantierConfig {
            storage: StorageConfig {
                path: Some(PathBuf::from("/var/lib/chantier/store.json")),
            },
            ..ChantierConfig::default()
        };
        let path = resolve_store_path(&flags(None), &config).unwrap();
        assert_eq!(path, PathBuf::from("/var/lib/chantier/store.json"));
    }
}
