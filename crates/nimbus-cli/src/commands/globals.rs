//! `nimbus globals`: show what every render receives before call data.

use serde_json::Value;

use crate::{
    cli::{GlobalArgs, GlobalsArgs, ListFormat, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: GlobalsArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let manager = super::view_manager(
        super::views_dir(&global, &config),
        config.views.normalization,
        &config,
        &args.globals,
    )?;
    let globals = manager.globals()?;

    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Json => output.json(globals.as_data())?,
        ListFormat::List => {
            for (key, value) in globals.as_data().iter() {
                output.line(&format!("{key}={}", display_value(value)))?;
            }
        }
        ListFormat::Table => {
            output.header("View globals:")?;
            let width = globals.as_data().keys().map(String::len).max().unwrap_or(0);
            for (key, value) in globals.as_data().iter() {
                output.line(&format!("  {key:<width$} = {}", display_value(value)))?;
            }
        }
    }

    Ok(())
}

/// Strings bare, everything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
