//! Redis plugin configuration
//!
//! Settings are read from a TOML file holding the plugin fields at top level:
//!
//! ```toml
//! version = "7-alpine"
//! port = 6379
//! cluster_base_port = 6380
//! persistence = false
//! ```
//!
//! A missing or empty file yields the schema defaults.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::{ConfigError, Result};
use super::schema::{ConfigSchema, FieldSpec};

/// Image tags accepted for the `version` field
pub const REDIS_VERSIONS: &[&str] = &["6-alpine", "7-alpine", "alpine", "latest"];

/// Build the plugin's config schema
pub fn redis_schema() -> ConfigSchema {
    ConfigSchema::new(vec![
        FieldSpec::string("version", "7-alpine")
            .label("Redis version")
            .description("Docker image tag to use")
            .choices(REDIS_VERSIONS),
        FieldSpec::integer("port", 6379, 1, 65535)
            .label("Standalone port")
            .description("Host port for Redis standalone"),
        FieldSpec::integer("cluster_base_port", 6380, 1, 65535)
            .label("Cluster base port")
            .description("Starting port for cluster nodes (uses 6 consecutive ports)"),
        FieldSpec::boolean("persistence", false)
            .label("Enable persistence")
            .description("Enable Redis data persistence with AOF"),
    ])
}

/// Validated plugin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Docker image tag
    pub version: String,
    /// Host port for the standalone service
    pub port: u16,
    /// First host port of the six cluster nodes
    pub cluster_base_port: u16,
    /// Enable AOF persistence
    pub persistence: bool,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            version: "7-alpine".to_string(),
            port: 6379,
            cluster_base_port: 6380,
            persistence: false,
        }
    }
}

impl RedisConfig {
    /// Validate raw values against `schema` and build the typed config
    pub fn from_values(schema: &ConfigSchema, values: &Map<String, Value>) -> Result<Self> {
        let effective = schema.validate(values)?;
        Ok(serde_json::from_value(Value::Object(effective))?)
    }

    /// Load configuration from the standard location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::LoadError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML content
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let expanded = Self::expand_env_vars(content);
        let table: toml::Table = toml::from_str(&expanded)?;
        let values = match serde_json::to_value(table)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::from_values(&redis_schema(), &values)
    }

    /// Get the default configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("sh", "seaman", "seaman-redis")
            .ok_or(ConfigError::ConfigDirError)?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Expand `${VAR}` and `${VAR:-default}` references, leaving unset variables as-is
    fn expand_env_vars(content: &str) -> String {
        shellexpand::env_with_context_no_errors(content, |var| std::env::var(var).ok())
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_matches_schema_defaults() {
        let from_schema = RedisConfig::from_values(&redis_schema(), &Map::new()).unwrap();
        assert_eq!(from_schema, RedisConfig::default());
    }

    #[test]
    fn test_schema_has_all_fields() {
        let schema = redis_schema();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["version", "port", "cluster_base_port", "persistence"]
        );
        assert_eq!(schema.field("version").unwrap().label, "Redis version");
    }

    #[test]
    fn test_from_values_overrides_port() {
        let values = json!({"version": "7-alpine", "port": 6380});
        let config =
            RedisConfig::from_values(&redis_schema(), values.as_object().unwrap()).unwrap();
        assert_eq!(config.port, 6380);
        assert_eq!(config.cluster_base_port, 6380);
    }

    #[test]
    fn test_from_values_rejects_unknown_version() {
        let values = json!({"version": "5"});
        let err =
            RedisConfig::from_values(&redis_schema(), values.as_object().unwrap()).unwrap_err();
        assert_eq!(err.field(), Some("version"));
    }

    #[test]
    fn test_from_toml_str() {
        let config = RedisConfig::from_toml_str(
            r#"
version = "6-alpine"
cluster_base_port = 7000
persistence = true
"#,
        )
        .unwrap();
        assert_eq!(config.version, "6-alpine");
        assert_eq!(config.port, 6379);
        assert_eq!(config.cluster_base_port, 7000);
        assert!(config.persistence);
    }
}
