//! Listing of the Redis commands the plugin contributes to the host

use serde::Serialize;

use seaman_redis_core::{CommandSpec, OptionKind, RedisPlugin};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::{self, print_output};

#[derive(Debug, Serialize)]
struct CommandRow {
    command: &'static str,
    name: &'static str,
    options: String,
    description: &'static str,
}

/// Print the command catalog, as a table unless asked otherwise
pub fn handle_list_commands(output_format: OutputFormat) -> Result<()> {
    let plugin = RedisPlugin::new();
    match output_format.resolve(output::OutputFormat::Table) {
        output::OutputFormat::Table => {
            print_output(command_rows(plugin.commands()), output::OutputFormat::Table)?
        }
        structured => print_output(plugin.commands(), structured)?,
    }
    Ok(())
}

fn command_rows(specs: &'static [CommandSpec]) -> Vec<CommandRow> {
    specs
        .iter()
        .map(|spec| CommandRow {
            command: spec.qualified_name,
            name: spec.name,
            options: spec
                .options
                .iter()
                .map(|option| match option.kind {
                    OptionKind::Argument => format!("[{}]", option.name),
                    OptionKind::Flag | OptionKind::Value => format!("--{}", option.name),
                })
                .collect::<Vec<_>>()
                .join(" "),
            description: spec.description,
        })
        .collect()
}
