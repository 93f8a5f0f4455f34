//! Configuration inspection commands

use serde::Serialize;
use std::io::Write;
use std::path::Path;

use seaman_redis_core::{ConfigSchema, RedisConfig, RedisPlugin};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::{self, print_output};

/// One row of `config schema`
#[derive(Debug, Serialize)]
struct SchemaRow<'a> {
    field: &'a str,
    label: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    default: String,
    constraints: String,
    description: &'a str,
}

/// Print the effective configuration, JSON unless asked otherwise
pub fn handle_show(config: &RedisConfig, output_format: OutputFormat) -> Result<()> {
    print_output(config, output_format.resolve(output::OutputFormat::Json))?;
    Ok(())
}

/// Print the configuration fields, as a table unless asked otherwise
pub fn handle_schema(output_format: OutputFormat) -> Result<()> {
    show_schema(RedisPlugin::new().config_schema(), output_format)
}

pub fn handle_path(config_path: &Path) -> Result<()> {
    writeln!(std::io::stdout().lock(), "{}", config_path.display())?;
    Ok(())
}

fn show_schema(schema: &ConfigSchema, output_format: OutputFormat) -> Result<()> {
    match output_format.resolve(output::OutputFormat::Table) {
        output::OutputFormat::Table => {
            print_output(schema_rows(schema), output::OutputFormat::Table)?
        }
        structured => print_output(schema.fields(), structured)?,
    }
    Ok(())
}

fn schema_rows(schema: &ConfigSchema) -> Vec<SchemaRow<'_>> {
    schema
        .fields()
        .iter()
        .map(|field| SchemaRow {
            field: &field.name,
            label: &field.label,
            kind: field.kind.type_name(),
            default: field.default.to_string(),
            constraints: field.kind.constraints(),
            description: &field.description,
        })
        .collect()
}
