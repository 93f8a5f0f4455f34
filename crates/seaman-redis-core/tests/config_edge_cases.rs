use std::fs;
use std::path::PathBuf;

use seaman_redis_core::config::{ConfigError, RedisConfig};
use seaman_redis_core::{CoreError, RedisPlugin};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// 1. Missing config directory / nonexistent path
// ---------------------------------------------------------------------------

#[test]
fn load_from_nonexistent_path_returns_default_config() {
    let path = PathBuf::from("/tmp/seaman-redis-test-nonexistent/does/not/exist/config.toml");
    assert!(!path.exists());

    let config =
        RedisConfig::load_from_path(&path).expect("should not panic or error on missing path");

    assert_eq!(config, RedisConfig::default());
}

// ---------------------------------------------------------------------------
// 2. Empty config file
// ---------------------------------------------------------------------------

#[test]
fn load_empty_config_file_returns_default_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "").unwrap();

    let config =
        RedisConfig::load_from_path(&config_path).expect("empty file should parse as default");

    assert_eq!(config, RedisConfig::default());
}

// ---------------------------------------------------------------------------
// 3. Corrupt / invalid TOML
// ---------------------------------------------------------------------------

#[test]
fn load_corrupt_toml_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[[[broken").unwrap();

    let err = RedisConfig::load_from_path(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
    assert!(
        err.to_string().contains("parse"),
        "error should mention parsing: {err}"
    );
}

// ---------------------------------------------------------------------------
// 4. Values violating the schema
// ---------------------------------------------------------------------------

#[test]
fn load_port_out_of_range_returns_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "port = 0\n").unwrap();

    let err = RedisConfig::load_from_path(&config_path).unwrap_err();
    assert_eq!(err.field(), Some("port"));

    fs::write(&config_path, "cluster_base_port = 65536\n").unwrap();
    let err = RedisConfig::load_from_path(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { max: 65535, .. }));
}

#[test]
fn load_wrong_value_types_returns_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");

    fs::write(&config_path, "port = \"6379\"\n").unwrap();
    assert!(matches!(
        RedisConfig::load_from_path(&config_path),
        Err(ConfigError::InvalidType { .. })
    ));

    fs::write(&config_path, "persistence = \"yes\"\n").unwrap();
    assert!(matches!(
        RedisConfig::load_from_path(&config_path),
        Err(ConfigError::InvalidType { .. })
    ));
}

#[test]
fn load_unknown_version_returns_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "version = \"5-alpine\"\n").unwrap();

    let err = RedisConfig::load_from_path(&config_path).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("5-alpine"), "{msg}");
    assert!(msg.contains("7-alpine"), "{msg}");
}

// ---------------------------------------------------------------------------
// 5. Config with unknown / extra fields
// ---------------------------------------------------------------------------

#[test]
fn load_config_with_unknown_fields_ignores_them() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");

    let content = r#"
unknown_top_level_key = "hello"
port = 16379

[some_table]
totally_unknown_field = true
"#;
    fs::write(&config_path, content).unwrap();

    let config = RedisConfig::load_from_path(&config_path)
        .expect("unknown fields should be silently ignored");
    assert_eq!(config.port, 16379);
}

// ---------------------------------------------------------------------------
// 6. Environment variable expansion
// ---------------------------------------------------------------------------

#[test]
fn load_expands_env_var_defaults() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        "version = \"${SEAMAN_REDIS_TEST_UNSET_VERSION:-6-alpine}\"\n",
    )
    .unwrap();

    let config = RedisConfig::load_from_path(&config_path).unwrap();
    assert_eq!(config.version, "6-alpine");
}

// ---------------------------------------------------------------------------
// 7. Config feeding the plugin's services
// ---------------------------------------------------------------------------

#[test]
fn loaded_config_drives_cluster_ports() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "cluster_base_port = 7000\n").unwrap();

    let plugin = RedisPlugin::with_config(RedisConfig::load_from_path(&config_path).unwrap());
    let services = plugin.services().unwrap();
    assert_eq!(services[1].ports, vec![7000, 7001, 7002, 7003, 7004, 7005]);
}

#[test]
fn base_port_near_limit_is_rejected_by_services() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "cluster_base_port = 65535\n").unwrap();

    let plugin = RedisPlugin::with_config(RedisConfig::load_from_path(&config_path).unwrap());
    let err = plugin.services().unwrap_err();
    assert!(matches!(err, CoreError::PortRangeExceeded { base: 65535, .. }));
}

// ---------------------------------------------------------------------------
// 8. Unreadable config path
// ---------------------------------------------------------------------------

#[test]
fn load_directory_as_config_returns_load_error() {
    let dir = TempDir::new().unwrap();

    let err = RedisConfig::load_from_path(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::LoadError { .. }));
}
