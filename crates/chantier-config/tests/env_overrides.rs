use chantier_config::{ChantierConfig, ConfigError};
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn env_sets_base_url_and_timeout() {
    Jail::expect_with(|jail| {
        jail.set_env("CHANTIER_API__BASE_URL", "https://chantier.example.dz/api");
        jail.set_env("CHANTIER_API__TIMEOUT_SECS", "15");

        let config = ChantierConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://chantier.example.dz/api");
        assert_eq!(config.api.timeout_secs, Some(15));
        Ok(())
    });
}

#[test]
fn env_sets_store_path() {
    Jail::expect_with(|jail| {
        jail.set_env("CHANTIER_STORAGE__PATH", "/var/lib/chantier/store.json");

        let config = ChantierConfig::load().expect("config loads");
        assert_eq!(
            config.storage.resolve_path().expect("path"),
            std::path::PathBuf::from("/var/lib/chantier/store.json")
        );
        Ok(())
    });
}

#[test]
fn invalid_base_url_fails_load() {
    Jail::expect_with(|jail| {
        jail.set_env("CHANTIER_API__BASE_URL", "localhost:8000");

        let err = ChantierConfig::load().expect_err("should reject");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
