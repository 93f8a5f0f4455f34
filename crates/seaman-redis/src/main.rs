use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, shells};
use seaman_redis_core::{CommandStatus, RedisConfig};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod executor;
mod output;
mod terminal;

use cli::{Cli, Commands, ConfigCommands};
use error::SeamanRedisError;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level
    init_tracing(cli.verbose);

    match execute_command(&cli) {
        Ok(status) if !status.is_success() => std::process::exit(status.code()),
        Ok(_) => Ok(()),
        // The reader stopped listening; nothing left to report
        Err(SeamanRedisError::OutputClosed) => Ok(()),
        Err(e) => {
            e.print_diagnostic();
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    // Check for RUST_LOG env var first, then fall back to verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "seaman_redis=warn,seaman_redis_core=warn",
            1 => "seaman_redis=info,seaman_redis_core=info",
            2 => "seaman_redis=debug,seaman_redis_core=debug",
            _ => "seaman_redis=trace,seaman_redis_core=trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .init();

    debug!("Tracing initialized with verbosity level: {}", verbose);
}

fn execute_command(cli: &Cli) -> Result<CommandStatus, SeamanRedisError> {
    trace!("Executing command: {:?}", cli.command);

    let start = std::time::Instant::now();
    let result = if let Some(request) = cli.command.to_request() {
        info!("Command: {}", request);
        commands::redis::handle_redis_command(&request)
    } else {
        execute_plugin_command(cli).map(|()| CommandStatus::Success)
    };

    let duration = start.elapsed();
    match &result {
        Ok(status) => info!(
            "Command completed in {:?} with exit code {}",
            duration,
            status.code()
        ),
        Err(e) => info!("Command failed after {:?}: {}", duration, e),
    }

    result
}

fn execute_plugin_command(cli: &Cli) -> Result<(), SeamanRedisError> {
    match &cli.command {
        Commands::Services => {
            let (config, _) = load_config(cli)?;
            commands::services::handle_services(&config, cli.output)
        }
        Commands::Config(ConfigCommands::Show) => {
            let (config, _) = load_config(cli)?;
            commands::config::handle_show(&config, cli.output)
        }
        Commands::Config(ConfigCommands::Schema) => commands::config::handle_schema(cli.output),
        Commands::Config(ConfigCommands::Path) => {
            commands::config::handle_path(&resolve_config_path(cli)?)
        }
        Commands::ListCommands => commands::catalog::handle_list_commands(cli.output),
        Commands::Completions { shell } => generate_completions(*shell),
        // Redis commands go through the dispatcher
        _ => Ok(()),
    }
}

/// Explicit `--config-file` (with `~` and `$VAR` expanded) or the default location
fn resolve_config_path(cli: &Cli) -> Result<PathBuf, SeamanRedisError> {
    match &cli.config_file {
        Some(config_file) => {
            let expanded = shellexpand::full(config_file).map_err(|e| {
                SeamanRedisError::InvalidConfigPath {
                    path: config_file.clone(),
                    message: e.to_string(),
                }
            })?;
            Ok(PathBuf::from(expanded.as_ref()))
        }
        None => Ok(RedisConfig::config_path()?),
    }
}

fn load_config(cli: &Cli) -> Result<(RedisConfig, PathBuf), SeamanRedisError> {
    let path = resolve_config_path(cli)?;
    debug!("Loading config from {:?}", path);
    let config = RedisConfig::load_from_path(&path)
        .map_err(|e| SeamanRedisError::from(e).with_config_path(&path))?;
    Ok((config, path))
}

fn generate_completions(shell: cli::Shell) -> Result<(), SeamanRedisError> {
    let mut cmd = cli::Cli::command();
    let name = cmd.get_name().to_string();
    let mut script = Vec::new();

    match shell {
        cli::Shell::Bash => generate(shells::Bash, &mut cmd, name, &mut script),
        cli::Shell::Zsh => generate(shells::Zsh, &mut cmd, name, &mut script),
        cli::Shell::Fish => generate(shells::Fish, &mut cmd, name, &mut script),
        cli::Shell::PowerShell => generate(shells::PowerShell, &mut cmd, name, &mut script),
        cli::Shell::Elvish => generate(shells::Elvish, &mut cmd, name, &mut script),
    }

    std::io::stdout().lock().write_all(&script)?;
    Ok(())
}
