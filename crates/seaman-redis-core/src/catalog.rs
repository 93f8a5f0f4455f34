//! Command catalog and dispatcher
//!
//! [`CATALOG`] is the static registry of the plugin's logical commands. Each
//! entry declares its options for the host to register and the policy used to
//! interpret its result. A parsed [`CommandRequest`] is turned into an
//! [`Invocation`], executed through the injected [`ProcessExecutor`], and the
//! outcome is interpreted and written to the host's [`OutputSink`].

use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::console::{Confirm, Line, OutputSink};
use crate::error::Result;
use crate::executor::ProcessExecutor;
use crate::interpret::{CommandStatus, ResultPolicy, interpret};
use crate::invocation::{Invocation, TargetMode};

/// Client binary run inside the container
pub const REDIS_CLI: &str = "redis-cli";
/// Prompt shown before flushing
pub const FLUSH_PROMPT: &str = "This will delete ALL keys. Continue?";
/// Default `KEYS` pattern
pub const DEFAULT_KEY_PATTERN: &str = "*";

const MONITOR_BANNER: &str = "Monitoring Redis commands (Ctrl+C to stop)...";
const ABORTED: &str = "Aborted.";

/// The logical commands the plugin provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandKind {
    Cli,
    Flush,
    Info,
    Keys,
    Monitor,
    ClusterInfo,
    ClusterNodes,
}

/// How an option is passed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Boolean switch
    Flag,
    /// Option taking a value
    Value,
    /// Positional argument
    Argument,
}

/// Option or argument declaration handed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    pub name: &'static str,
    pub short: Option<char>,
    pub kind: OptionKind,
    pub description: &'static str,
    pub default: Option<&'static str>,
}

const CLUSTER_OPTION: OptionSpec = OptionSpec {
    name: "cluster",
    short: Some('c'),
    kind: OptionKind::Flag,
    description: "Execute on Redis Cluster (first node)",
    default: None,
};

const FORCE_OPTION: OptionSpec = OptionSpec {
    name: "force",
    short: Some('f'),
    kind: OptionKind::Flag,
    description: "Skip confirmation prompt",
    default: None,
};

const SECTION_OPTION: OptionSpec = OptionSpec {
    name: "section",
    short: Some('s'),
    kind: OptionKind::Value,
    description: "Info section (server, clients, memory, stats, replication, cpu, cluster, keyspace)",
    default: None,
};

const PATTERN_ARGUMENT: OptionSpec = OptionSpec {
    name: "pattern",
    short: None,
    kind: OptionKind::Argument,
    description: "Key pattern to match",
    default: Some(DEFAULT_KEY_PATTERN),
};

/// Static descriptor of one logical command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub kind: CommandKind,
    /// Logical name, e.g. `cluster-info`
    pub name: &'static str,
    /// Name the host registers, e.g. `redis:cluster:info`
    pub qualified_name: &'static str,
    pub description: &'static str,
    pub options: &'static [OptionSpec],
    pub policy: ResultPolicy,
    pub failure_message: Option<&'static str>,
}

impl CommandSpec {
    pub fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Whether the caller may choose the target mode
    pub fn accepts_cluster_flag(&self) -> bool {
        self.option(CLUSTER_OPTION.name).is_some()
    }
}

/// Registry of every command the plugin provides
pub static CATALOG: [CommandSpec; 7] = [
    CommandSpec {
        kind: CommandKind::Cli,
        name: "cli",
        qualified_name: "redis:cli",
        description: "Open interactive redis-cli session",
        options: &[CLUSTER_OPTION],
        policy: ResultPolicy::StatusOnly,
        failure_message: None,
    },
    CommandSpec {
        kind: CommandKind::Flush,
        name: "flush",
        qualified_name: "redis:flush",
        description: "Flush all Redis keys",
        options: &[CLUSTER_OPTION, FORCE_OPTION],
        policy: ResultPolicy::Message("All keys flushed successfully."),
        failure_message: Some("Failed to flush keys."),
    },
    CommandSpec {
        kind: CommandKind::Info,
        name: "info",
        qualified_name: "redis:info",
        description: "Display Redis server information",
        options: &[CLUSTER_OPTION, SECTION_OPTION],
        policy: ResultPolicy::Verbatim,
        failure_message: Some("Failed to get Redis info."),
    },
    CommandSpec {
        kind: CommandKind::Keys,
        name: "keys",
        qualified_name: "redis:keys",
        description: "List keys matching a pattern",
        options: &[CLUSTER_OPTION, PATTERN_ARGUMENT],
        policy: ResultPolicy::KeyList,
        failure_message: Some("Failed to list keys."),
    },
    CommandSpec {
        kind: CommandKind::Monitor,
        name: "monitor",
        qualified_name: "redis:monitor",
        description: "Monitor Redis commands in real-time",
        options: &[CLUSTER_OPTION],
        policy: ResultPolicy::StatusOnly,
        failure_message: None,
    },
    CommandSpec {
        kind: CommandKind::ClusterInfo,
        name: "cluster-info",
        qualified_name: "redis:cluster:info",
        description: "Display Redis Cluster information",
        options: &[],
        policy: ResultPolicy::Banner("Redis Cluster Info:"),
        failure_message: Some("Failed to get cluster info. Is the cluster running?"),
    },
    CommandSpec {
        kind: CommandKind::ClusterNodes,
        name: "cluster-nodes",
        qualified_name: "redis:cluster:nodes",
        description: "Display Redis Cluster nodes",
        options: &[],
        policy: ResultPolicy::Banner("Redis Cluster Nodes:"),
        failure_message: Some("Failed to get cluster nodes. Is the cluster running?"),
    },
];

impl CommandKind {
    /// Catalog entry for this command. [`CATALOG`] is ordered by kind.
    pub fn spec(self) -> &'static CommandSpec {
        &CATALOG[self as usize]
    }
}

/// Look up a command by logical or qualified name
pub fn find(name: &str) -> Option<&'static CommandSpec> {
    CATALOG
        .iter()
        .find(|spec| spec.name == name || spec.qualified_name == name)
}

/// A command with its parsed options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRequest {
    Cli { cluster: bool },
    Flush { cluster: bool, force: bool },
    Info { cluster: bool, section: Option<String> },
    Keys { cluster: bool, pattern: String },
    Monitor { cluster: bool },
    ClusterInfo,
    ClusterNodes,
}

impl CommandRequest {
    pub fn kind(&self) -> CommandKind {
        match self {
            CommandRequest::Cli { .. } => CommandKind::Cli,
            CommandRequest::Flush { .. } => CommandKind::Flush,
            CommandRequest::Info { .. } => CommandKind::Info,
            CommandRequest::Keys { .. } => CommandKind::Keys,
            CommandRequest::Monitor { .. } => CommandKind::Monitor,
            CommandRequest::ClusterInfo => CommandKind::ClusterInfo,
            CommandRequest::ClusterNodes => CommandKind::ClusterNodes,
        }
    }

    pub fn spec(&self) -> &'static CommandSpec {
        self.kind().spec()
    }

    /// Resolved target. Cluster introspection always runs on the cluster.
    pub fn target_mode(&self) -> TargetMode {
        match self {
            CommandRequest::Cli { cluster }
            | CommandRequest::Flush { cluster, .. }
            | CommandRequest::Info { cluster, .. }
            | CommandRequest::Keys { cluster, .. }
            | CommandRequest::Monitor { cluster } => TargetMode::from_cluster_flag(*cluster),
            CommandRequest::ClusterInfo | CommandRequest::ClusterNodes => TargetMode::Cluster,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            CommandRequest::Cli { .. } | CommandRequest::Monitor { .. }
        )
    }

    /// `redis-cli` tokens run inside the container
    pub fn raw_tokens(&self) -> Vec<&str> {
        let mut tokens = vec![REDIS_CLI];
        match self {
            CommandRequest::Cli { .. } => {}
            CommandRequest::Flush { .. } => tokens.push("FLUSHALL"),
            CommandRequest::Info { section, .. } => {
                tokens.push("INFO");
                if let Some(section) = section.as_deref().filter(|s| !s.is_empty()) {
                    tokens.push(section);
                }
            }
            CommandRequest::Keys { pattern, .. } => {
                tokens.push("KEYS");
                tokens.push(pattern);
            }
            CommandRequest::Monitor { .. } => tokens.push("MONITOR"),
            CommandRequest::ClusterInfo => tokens.extend(["CLUSTER", "INFO"]),
            CommandRequest::ClusterNodes => tokens.extend(["CLUSTER", "NODES"]),
        }
        tokens
    }

    pub fn invocation(&self) -> Invocation {
        Invocation::build(self.target_mode(), self.is_interactive(), &self.raw_tokens())
    }

    /// Whether the operator must confirm before anything runs
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, CommandRequest::Flush { force: false, .. })
    }
}

impl fmt::Display for CommandRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec().qualified_name)?;
        if self.spec().accepts_cluster_flag() && self.target_mode() == TargetMode::Cluster {
            write!(f, " --cluster")?;
        }
        match self {
            CommandRequest::Flush { force: true, .. } => write!(f, " --force"),
            CommandRequest::Info {
                section: Some(section),
                ..
            } => write!(f, " --section {}", section),
            CommandRequest::Keys { pattern, .. } => write!(f, " {}", pattern),
            _ => Ok(()),
        }
    }
}

/// Runs catalog commands through an injected executor
pub struct Dispatcher<E> {
    executor: E,
}

impl<E: ProcessExecutor> Dispatcher<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Run `request` to completion.
    ///
    /// Each command is a single attempt; nothing is retried. An operator
    /// declining the flush prompt is a success with nothing executed.
    pub fn run(
        &self,
        request: &CommandRequest,
        confirm: &mut dyn Confirm,
        out: &mut dyn OutputSink,
    ) -> Result<CommandStatus> {
        let spec = request.spec();

        if request.needs_confirmation() && !confirm.confirm(FLUSH_PROMPT, false)? {
            info!("{} aborted by operator", spec.qualified_name);
            out.write_line(Line::comment(ABORTED));
            return Ok(CommandStatus::Success);
        }

        if spec.kind == CommandKind::Monitor {
            out.write_line(Line::info(MONITOR_BANNER));
        }

        let invocation = request.invocation();
        info!("Executing {}: {}", spec.qualified_name, invocation);
        let outcome = self.executor.execute(&invocation);
        debug!(
            "{} exited with code {}",
            spec.qualified_name, outcome.exit_code
        );

        let interpretation = interpret(spec.policy, spec.failure_message, &outcome);
        for line in interpretation.lines {
            out.write_line(line);
        }
        Ok(interpretation.status)
    }
}
