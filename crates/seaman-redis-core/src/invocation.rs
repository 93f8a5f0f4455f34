//! Argument builder
//!
//! Turns a target mode, an interactivity flag and raw `redis-cli` tokens into a
//! `docker exec` invocation against the right container.

use std::fmt;
use tracing::debug;

/// Program that runs the container commands
pub const LAUNCHER: &str = "docker";
/// Launcher subcommand for running inside a container
pub const EXEC_SUBCOMMAND: &str = "exec";
/// Attach stdin and allocate a TTY
pub const INTERACTIVE_FLAG: &str = "-it";
/// Container of the standalone service
pub const STANDALONE_CONTAINER: &str = "redis";
/// First node of the cluster service
pub const CLUSTER_CONTAINER: &str = "redis-node-1";

/// Which deployment a command runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    Standalone,
    Cluster,
}

impl TargetMode {
    /// Mode selected by a `--cluster` style flag
    pub fn from_cluster_flag(cluster: bool) -> Self {
        if cluster {
            TargetMode::Cluster
        } else {
            TargetMode::Standalone
        }
    }

    /// Container the mode resolves to
    pub fn container(self) -> &'static str {
        match self {
            TargetMode::Standalone => STANDALONE_CONTAINER,
            TargetMode::Cluster => CLUSTER_CONTAINER,
        }
    }
}

impl fmt::Display for TargetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetMode::Standalone => write!(f, "standalone"),
            TargetMode::Cluster => write!(f, "cluster"),
        }
    }
}

/// A fully qualified external program invocation
///
/// The token list always starts with the launcher, so it is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    tokens: Vec<String>,
    interactive: bool,
}

impl Invocation {
    /// Build a `docker exec` invocation for `raw` in the container `mode` resolves to
    pub fn build<S: AsRef<str>>(mode: TargetMode, interactive: bool, raw: &[S]) -> Self {
        let mut tokens = vec![LAUNCHER.to_string(), EXEC_SUBCOMMAND.to_string()];
        if interactive {
            tokens.push(INTERACTIVE_FLAG.to_string());
        }
        tokens.push(mode.container().to_string());
        tokens.extend(raw.iter().map(|t| t.as_ref().to_string()));

        debug!(
            "Built invocation for {} (interactive: {}): {:?}",
            mode, interactive, tokens
        );

        Self {
            tokens,
            interactive,
        }
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether the executor should attach the operator's terminal
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self
            .tokens
            .iter()
            .map(|t| {
                if t.contains(' ') || t.is_empty() {
                    format!("\"{}\"", t)
                } else {
                    t.clone()
                }
            })
            .collect();
        write!(f, "{}", quoted.join(" "))
    }
}
