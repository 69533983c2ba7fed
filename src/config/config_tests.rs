use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_empty_toml_produces_defaults() {
    let cfg: CmsConfig = toml::from_str("").expect("Should parse empty TOML");
    assert_eq!(cfg, CmsConfig::default());
}

#[test]
fn test_defaults() {
    let cfg = CmsConfig::default();
    assert_eq!(cfg.data_dir, PathBuf::from("data"));
    assert_eq!(cfg.public_dir, PathBuf::from("public"));
    assert_eq!(cfg.base_url, "http://localhost:4000");
    assert_eq!(cfg.logging.level, "info");
    assert_eq!(cfg.logging.rotation, "daily");
    assert!(!cfg.logging.json);
    assert!(cfg.logging.dir.is_none());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let toml_str = "base_url = \"https://example.id\"\n\n[logging]\njson = true\n";
    let cfg: CmsConfig = toml::from_str(toml_str).expect("Should parse partial config");
    assert_eq!(cfg.base_url, "https://example.id");
    assert!(cfg.logging.json);
    assert_eq!(cfg.logging.level, "info");
    assert_eq!(cfg.data_dir, PathBuf::from("data"));
}

#[test]
fn test_unknown_logging_key_rejected() {
    let result: Result<CmsConfig, _> = toml::from_str("[logging]\nverbosity = 3\n");
    assert!(result.is_err());
}

#[test]
fn test_roundtrip_serialization() {
    let cfg = CmsConfig::default();
    let serialized = toml::to_string(&cfg).expect("Should serialize");
    let deserialized: CmsConfig = toml::from_str(&serialized).expect("Should deserialize");
    assert_eq!(cfg, deserialized);
}

#[test]
fn test_config_path_under_cms_home() {
    let path = config_path();
    assert!(path.ends_with(".site-cms/config.toml"));
}

#[test]
fn test_load_explicit_file() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("site.toml");
    fs::write(
        &config_path,
        "data_dir = \"/srv/site/data\"\npublic_dir = \"/srv/site/public\"\n",
    )
    .expect("write config");

    let cfg = load_config(Some(&config_path)).expect("load config");
    assert_eq!(cfg.data_dir, PathBuf::from("/srv/site/data"));
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/site/public"));
}

#[test]
fn test_load_explicit_missing_file_is_error() {
    let dir = tempdir().expect("tempdir");
    let result = load_config(Some(&dir.path().join("absent.toml")));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_invalid_toml() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("bad.toml");
    fs::write(&config_path, "data_dir = [").expect("write config");
    assert!(matches!(
        load_config_from(&config_path),
        Err(ConfigError::Toml(_))
    ));
}
