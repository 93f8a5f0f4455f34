//! CLI structure and command definitions
//!
//! The Redis subcommands mirror the plugin's command catalog; each is
//! registered under its logical name with the host-qualified name
//! (`redis:keys`, `redis:cluster:info`, ...) as a visible alias.

use clap::{Args, Parser, Subcommand};
use seaman_redis_core::CommandRequest;

/// Redis and Redis Cluster plugin for Seaman
#[derive(Parser, Debug)]
#[command(name = "seaman-redis")]
#[command(version, about = "Redis and Redis Cluster plugin for Seaman")]
#[command(long_about = "
Redis and Redis Cluster plugin for Seaman

Runs redis-cli inside the plugin's containers: `redis` for the standalone
service and `redis-node-1` for the cluster.

EXAMPLES:
    # Open an interactive redis-cli session
    seaman-redis cli

    # List keys on the cluster
    seaman-redis keys 'user:*' --cluster

    # Show memory statistics
    seaman-redis info --section memory

    # Flush everything without prompting
    seaman-redis flush --force

    # Print the service definitions
    seaman-redis services -o yaml
")]
pub struct Cli {
    /// Path to alternate configuration file
    #[arg(long, global = true, env = "SEAMAN_REDIS_CONFIG_FILE")]
    pub config_file: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "auto")]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Automatically choose format based on command
    Auto,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Human-readable table format
    Table,
}

impl OutputFormat {
    /// Resolve `auto` to the command's preferred format
    pub fn resolve(self, preferred: crate::output::OutputFormat) -> crate::output::OutputFormat {
        match self {
            OutputFormat::Auto => preferred,
            OutputFormat::Json => crate::output::OutputFormat::Json,
            OutputFormat::Yaml => crate::output::OutputFormat::Yaml,
            OutputFormat::Table => crate::output::OutputFormat::Table,
        }
    }
}

/// Target selection shared by the Redis commands
#[derive(Args, Debug, Clone, Copy)]
pub struct TargetArgs {
    /// Execute on Redis Cluster (first node)
    #[arg(long, short)]
    pub cluster: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open interactive redis-cli session
    #[command(visible_alias = "redis:cli")]
    Cli(TargetArgs),

    /// Flush all Redis keys
    #[command(visible_alias = "redis:flush")]
    Flush {
        #[command(flatten)]
        target: TargetArgs,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Display Redis server information
    #[command(visible_alias = "redis:info")]
    Info {
        #[command(flatten)]
        target: TargetArgs,

        /// Info section (server, clients, memory, stats, replication, cpu, cluster, keyspace)
        #[arg(long, short)]
        section: Option<String>,
    },

    /// List keys matching a pattern
    #[command(visible_alias = "redis:keys")]
    Keys {
        #[command(flatten)]
        target: TargetArgs,

        /// Key pattern to match
        #[arg(default_value = seaman_redis_core::catalog::DEFAULT_KEY_PATTERN)]
        pattern: String,
    },

    /// Monitor Redis commands in real-time
    #[command(visible_alias = "redis:monitor")]
    Monitor(TargetArgs),

    /// Display Redis Cluster information
    #[command(name = "cluster-info", visible_alias = "redis:cluster:info")]
    ClusterInfo,

    /// Display Redis Cluster nodes
    #[command(name = "cluster-nodes", visible_alias = "redis:cluster:nodes")]
    ClusterNodes,

    /// Print the service definitions for the deployment templates
    Services,

    /// Plugin configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// List the Redis commands this plugin provides
    #[command(name = "commands")]
    ListCommands,

    /// Generate shell completions
    #[command(visible_alias = "comp")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Catalog request for the Redis commands, `None` for plugin housekeeping
    pub fn to_request(&self) -> Option<CommandRequest> {
        let request = match self {
            Commands::Cli(target) => CommandRequest::Cli {
                cluster: target.cluster,
            },
            Commands::Flush { target, force } => CommandRequest::Flush {
                cluster: target.cluster,
                force: *force,
            },
            Commands::Info { target, section } => CommandRequest::Info {
                cluster: target.cluster,
                section: section.clone(),
            },
            Commands::Keys { target, pattern } => CommandRequest::Keys {
                cluster: target.cluster,
                pattern: pattern.clone(),
            },
            Commands::Monitor(target) => CommandRequest::Monitor {
                cluster: target.cluster,
            },
            Commands::ClusterInfo => CommandRequest::ClusterInfo,
            Commands::ClusterNodes => CommandRequest::ClusterNodes,
            Commands::Services
            | Commands::Config(_)
            | Commands::ListCommands
            | Commands::Completions { .. } => return None,
        };
        Some(request)
    }
}

/// Configuration commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Show the configuration fields, defaults and accepted values
    Schema,
    /// Show the path to the configuration file
    Path,
}

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bourne Again Shell
    Bash,
    /// Z Shell
    Zsh,
    /// Friendly Interactive Shell
    Fish,
    /// PowerShell
    #[value(name = "powershell", alias = "power-shell")]
    PowerShell,
    /// Elvish
    Elvish,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use seaman_redis_core::{CATALOG, OptionKind, TargetMode};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("seaman-redis").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_every_catalog_command_is_registered() {
        let cmd = Cli::command();
        for spec in CATALOG.iter() {
            let sub = cmd
                .find_subcommand(spec.name)
                .unwrap_or_else(|| panic!("{} is not registered", spec.name));
            assert!(
                sub.get_all_aliases().any(|a| a == spec.qualified_name),
                "{} lacks alias {}",
                spec.name,
                spec.qualified_name
            );

            for option in spec.options {
                let arg = sub
                    .get_arguments()
                    .find(|a| a.get_id() == option.name)
                    .unwrap_or_else(|| panic!("{} lacks {}", spec.name, option.name));
                assert_eq!(arg.get_short(), option.short, "{}", option.name);
                assert_eq!(
                    arg.is_positional(),
                    option.kind == OptionKind::Argument,
                    "{}",
                    option.name
                );
            }
            assert_eq!(
                sub.get_arguments().any(|a| a.get_id() == "cluster"),
                spec.accepts_cluster_flag()
            );
        }
    }

    #[test]
    fn test_keys_defaults_to_all() {
        let cli = parse(&["keys"]);
        assert_eq!(
            cli.command.to_request(),
            Some(CommandRequest::Keys {
                cluster: false,
                pattern: "*".to_string()
            })
        );
    }

    #[test]
    fn test_qualified_alias_parses() {
        let cli = parse(&["redis:info", "-c", "-s", "memory"]);
        assert_eq!(
            cli.command.to_request(),
            Some(CommandRequest::Info {
                cluster: true,
                section: Some("memory".to_string())
            })
        );
    }

    #[test]
    fn test_flush_flags() {
        let cli = parse(&["flush", "--force", "--cluster"]);
        let request = cli.command.to_request().unwrap();
        assert!(!request.needs_confirmation());
        assert_eq!(request.target_mode(), TargetMode::Cluster);
    }

    #[test]
    fn test_cluster_info_rejects_cluster_flag() {
        assert!(Cli::try_parse_from(["seaman-redis", "cluster-info", "--cluster"]).is_err());
        assert_eq!(
            parse(&["cluster-nodes"]).command.to_request(),
            Some(CommandRequest::ClusterNodes)
        );
    }

    #[test]
    fn test_housekeeping_commands_are_not_requests() {
        assert!(parse(&["services"]).command.to_request().is_none());
        assert!(parse(&["config", "show"]).command.to_request().is_none());
        assert!(parse(&["commands"]).command.to_request().is_none());
    }

    #[test]
    fn test_verbose_counts() {
        assert_eq!(parse(&["-vv", "services"]).verbose, 2);
    }
}
