//! Service definitions for the deployment templates

use seaman_redis_core::{RedisConfig, RedisPlugin};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::{self, print_output};

/// Print both service definitions, JSON unless asked otherwise
pub fn handle_services(config: &RedisConfig, output_format: OutputFormat) -> Result<()> {
    let plugin = RedisPlugin::with_config(config.clone());
    let services = plugin.services()?;

    print_output(&services, output_format.resolve(output::OutputFormat::Json))?;
    Ok(())
}
