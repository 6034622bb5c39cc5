//! Configuration Loader Tests

use bakery_infrastructure::config::{AppConfig, ConfigLoader};
use bakery_infrastructure::constants::{
    DEFAULT_BAKER, DEFAULT_LOG_LEVEL, DEFAULT_RESOLVER, DEFAULT_SHUTDOWN_TIMEOUT_SECS,
};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert_eq!(config.loader.resolver.provider, DEFAULT_RESOLVER);
    assert_eq!(config.loader.baker.provider, DEFAULT_BAKER);
    assert_eq!(
        config.loader.shutdown_timeout(),
        Duration::from_secs(DEFAULT_SHUTDOWN_TIMEOUT_SECS)
    );
}

#[test]
fn test_load_from_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bakery.toml");
    std::fs::write(
        &path,
        r#"
[logging]
level = "debug"

[loader]
shutdown_timeout_secs = 3

[loader.resolver]
provider = "memory"

[loader.resolver.extra]
latency_ms = "5"

[loader.baker]
provider = "toml"
"#,
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_env_prefix("BAKERY_TEST_EXPLICIT")
        .with_config_path(&path)
        .load()
        .unwrap();

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.loader.shutdown_timeout_secs, 3);
    assert_eq!(config.loader.resolver.provider, "memory");
    assert_eq!(
        config.loader.resolver.extra.get("latency_ms"),
        Some(&"5".to_string())
    );
    assert_eq!(config.loader.baker.provider, "toml");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();

    let config = ConfigLoader::new()
        .with_env_prefix("BAKERY_TEST_MISSING")
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert_eq!(config.loader.resolver.provider, DEFAULT_RESOLVER);
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");

    let mut original = AppConfig::default();
    original.loader.baker.provider = "toml".to_string();
    original.loader.shutdown_timeout_secs = 42;

    let loader = ConfigLoader::new()
        .with_env_prefix("BAKERY_TEST_SAVED")
        .with_config_path(&path);
    loader.save_to_file(&original, &path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.loader.baker.provider, "toml");
    assert_eq!(loaded.loader.shutdown_timeout_secs, 42);
    assert_eq!(loader.config_path(), Some(path.as_path()));
}

#[test]
fn test_invalid_file_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[loader]\nshutdown_timeout_secs = \"soon\"\n").unwrap();

    let err = ConfigLoader::new()
        .with_env_prefix("BAKERY_TEST_BROKEN")
        .with_config_path(&path)
        .load()
        .unwrap_err();

    assert!(matches!(err, bakery_domain::Error::Configuration { .. }));
}
