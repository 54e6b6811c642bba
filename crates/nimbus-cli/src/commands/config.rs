//! `nimbus config`: read configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => output.line(&config.get(&key)?)?,
        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.line(config.to_toml()?.trim_end())?;
        }
        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            output.line(&path.display().to_string())?;
        }
    }

    Ok(())
}
