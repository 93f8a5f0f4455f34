//! Service definitions handed to the host's deployment templating

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::config::RedisConfig;
use crate::error::{CoreError, Result};

/// Number of nodes in the cluster service (3 masters, 3 replicas)
pub const CLUSTER_NODES: u16 = 6;
/// Port Redis listens on inside every container
pub const REDIS_INTERNAL_PORT: u16 = 6379;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Cache,
}

/// Container health check, compose-style
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub test: Vec<String>,
    pub interval: String,
    pub timeout: String,
    pub retries: u32,
}

impl HealthCheck {
    /// `redis-cli ping` every 10s, 5s timeout, 5 retries
    pub fn redis_ping() -> Self {
        Self {
            test: ["CMD", "redis-cli", "ping"]
                .into_iter()
                .map(String::from)
                .collect(),
            interval: "10s".to_string(),
            timeout: "5s".to_string(),
            retries: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceDefinition {
    pub name: String,
    /// Template the host renders; resolved by the host
    pub template: String,
    pub display_name: String,
    pub description: String,
    pub icon: String,
    pub category: ServiceCategory,
    pub ports: Vec<u16>,
    pub internal_ports: Vec<u16>,
    pub default_config: Map<String, Value>,
    pub health_check: HealthCheck,
}

/// `[base, base + 1, ..., base + 5]`
pub fn cluster_ports(base: u16) -> Result<Vec<u16>> {
    (0..CLUSTER_NODES)
        .map(|offset| base.checked_add(offset))
        .collect::<Option<Vec<_>>>()
        .ok_or(CoreError::PortRangeExceeded {
            base,
            nodes: CLUSTER_NODES,
        })
}

/// Single-node Redis service
pub fn standalone_service(config: &RedisConfig) -> ServiceDefinition {
    ServiceDefinition {
        name: "redis".to_string(),
        template: "redis.yaml.twig".to_string(),
        display_name: "Redis".to_string(),
        description: "In-memory data store for cache and sessions".to_string(),
        icon: "🔴".to_string(),
        category: ServiceCategory::Cache,
        ports: vec![config.port],
        internal_ports: vec![REDIS_INTERNAL_PORT],
        default_config: object(json!({
            "version": config.version,
            "port": config.port,
            "persistence": config.persistence,
        })),
        health_check: HealthCheck::redis_ping(),
    }
}

/// Six-node Redis Cluster service on consecutive host ports
pub fn cluster_service(config: &RedisConfig) -> Result<ServiceDefinition> {
    Ok(ServiceDefinition {
        name: "redis-cluster".to_string(),
        template: "redis-cluster.yaml.twig".to_string(),
        display_name: "Redis Cluster".to_string(),
        description: "Redis Cluster with 3 masters and 3 replicas".to_string(),
        icon: "🔴".to_string(),
        category: ServiceCategory::Cache,
        ports: cluster_ports(config.cluster_base_port)?,
        internal_ports: vec![REDIS_INTERNAL_PORT],
        default_config: object(json!({
            "version": config.version,
            "cluster_base_port": config.cluster_base_port,
            "persistence": config.persistence,
        })),
        health_check: HealthCheck::redis_ping(),
    })
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
