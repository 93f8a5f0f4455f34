//! Plugin facade: metadata, configuration and provided services

use serde_json::{Map, Value};
use tracing::debug;

use crate::catalog::{CATALOG, CommandSpec};
use crate::config::{ConfigSchema, RedisConfig, redis_schema};
use crate::error::Result;
use crate::service::{ServiceDefinition, cluster_service, standalone_service};

pub const PLUGIN_NAME: &str = "seaman/redis";
pub const PLUGIN_VERSION: &str = "1.0.0";
pub const PLUGIN_DESCRIPTION: &str = "Redis and Redis Cluster plugin for Seaman";

/// The Redis plugin as seen by the host
#[derive(Debug, Clone)]
pub struct RedisPlugin {
    schema: ConfigSchema,
    config: RedisConfig,
}

impl Default for RedisPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl RedisPlugin {
    /// Plugin with default configuration
    pub fn new() -> Self {
        Self {
            schema: redis_schema(),
            config: RedisConfig::default(),
        }
    }

    /// Plugin with an already validated configuration
    pub fn with_config(config: RedisConfig) -> Self {
        Self {
            schema: redis_schema(),
            config,
        }
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn version(&self) -> &'static str {
        PLUGIN_VERSION
    }

    pub fn description(&self) -> &'static str {
        PLUGIN_DESCRIPTION
    }

    pub fn config_schema(&self) -> &ConfigSchema {
        &self.schema
    }

    /// Validate `values` and make them the current configuration.
    ///
    /// On error the previous configuration is kept.
    pub fn configure(&mut self, values: &Map<String, Value>) -> Result<()> {
        self.config = RedisConfig::from_values(&self.schema, values)?;
        debug!("Configured {}: {:?}", PLUGIN_NAME, self.config);
        Ok(())
    }

    pub fn config(&self) -> &RedisConfig {
        &self.config
    }

    pub fn redis_service(&self) -> ServiceDefinition {
        standalone_service(&self.config)
    }

    pub fn redis_cluster_service(&self) -> Result<ServiceDefinition> {
        cluster_service(&self.config)
    }

    /// Every service the plugin provides
    pub fn services(&self) -> Result<Vec<ServiceDefinition>> {
        Ok(vec![self.redis_service(), self.redis_cluster_service()?])
    }

    /// Commands to register with the host
    pub fn commands(&self) -> &'static [CommandSpec] {
        &CATALOG
    }
}
