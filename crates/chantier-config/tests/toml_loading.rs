use chantier_config::ChantierConfig;
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn project_toml_is_read() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".chantier").map_err(|e| e.to_string())?;
        jail.create_file(
            ".chantier/config.toml",
            r#"
            [api]
            base_url = "http://10.0.0.5:8000/api"
            timeout_secs = 30
            "#,
        )?;

        let config = ChantierConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://10.0.0.5:8000/api");
        assert_eq!(config.api.timeout_secs, Some(30));
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".chantier").map_err(|e| e.to_string())?;
        jail.create_file(
            ".chantier/config.toml",
            r#"
            [api]
            base_url = "http://10.0.0.5:8000/api"
            "#,
        )?;
        jail.set_env("CHANTIER_API__BASE_URL", "http://10.0.0.9:8000/api");

        let config = ChantierConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://10.0.0.9:8000/api");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".chantier").map_err(|e| e.to_string())?;
        jail.create_file(".chantier/config.toml", "[api]\ntimeout_secs = 5\n")?;

        let config = ChantierConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.api.timeout_secs, Some(5));
        Ok(())
    });
}
