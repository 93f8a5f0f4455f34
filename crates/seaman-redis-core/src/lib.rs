//! # seaman-redis-core
//!
//! The Redis plugin for Seaman manages standalone Redis and a six-node Redis
//! Cluster running in containers. This crate holds everything that does not
//! depend on a terminal:
//!
//! - **Command dispatch** - [`catalog`] maps a parsed [`CommandRequest`] to a
//!   `docker exec ... redis-cli` [`Invocation`], runs it through an injected
//!   [`ProcessExecutor`] and interprets the [`ExecutionOutcome`].
//! - **Configuration** - a declarative [`ConfigSchema`] and the typed
//!   [`RedisConfig`] validated against it.
//! - **Services** - [`ServiceDefinition`]s for the host's templating, with
//!   ports and health checks derived from the configuration.
//!
//! ```rust
//! use seaman_redis_core::{CommandRequest, TargetMode};
//!
//! let request = CommandRequest::Keys { cluster: true, pattern: "user:*".to_string() };
//! assert_eq!(request.target_mode(), TargetMode::Cluster);
//! assert_eq!(
//!     request.invocation().tokens(),
//!     &["docker", "exec", "redis-node-1", "redis-cli", "KEYS", "user:*"]
//! );
//! ```

pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod executor;
pub mod interpret;
pub mod invocation;
pub mod plugin;
pub mod service;

pub use catalog::{CATALOG, CommandKind, CommandRequest, CommandSpec, Dispatcher, OptionKind};
pub use config::{ConfigError, ConfigSchema, FieldKind, FieldSpec, RedisConfig};
pub use console::{Confirm, Line, OutputSink, Style};
pub use error::{CoreError, Result};
pub use executor::{ExecutionOutcome, ProcessExecutor};
pub use interpret::{CommandStatus, ResultPolicy};
pub use invocation::{Invocation, TargetMode};
pub use plugin::RedisPlugin;
pub use service::{HealthCheck, ServiceCategory, ServiceDefinition};
