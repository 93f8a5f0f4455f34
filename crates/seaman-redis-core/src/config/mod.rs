//! Plugin configuration
//!
// Allow nested config module - this is intentional for the config subsystem

#![allow(clippy::module_inception)]
//!
//! The schema is a declarative table of field descriptors consumed by a
//! generic validator; [`RedisConfig`] is the typed result of validating the
//! plugin's settings against it.

pub mod config;
pub mod error;
pub mod schema;

pub use config::{REDIS_VERSIONS, RedisConfig, redis_schema};
pub use error::{ConfigError, Result};
pub use schema::{ConfigSchema, FieldKind, FieldSpec};
