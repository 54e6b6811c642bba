//! Command handlers, one module per subcommand.
//!
//! Handlers take already-parsed arguments plus the loaded [`AppConfig`] and
//! an [`OutputManager`]; they never parse flags or touch the subscriber.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use nimbus_adapters::MustacheRenderer;
use nimbus_core::{
    application::ViewManager,
    domain::{NameNormalization, RenderData},
    error::NimbusError,
};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod completions;
pub mod config;
pub mod exists;
pub mod globals;
pub mod init;
pub mod list;
pub mod render;

/// `--views` wins over `views.directory`.
pub(crate) fn views_dir(global: &GlobalArgs, config: &AppConfig) -> PathBuf {
    global
        .views
        .clone()
        .unwrap_or_else(|| config.views.directory.clone())
}

/// Fail with a configuration error when the views directory is absent.
pub(crate) fn require_views_dir(dir: &Path) -> CliResult<()> {
    if dir.is_dir() {
        return Ok(());
    }
    Err(NimbusError::Configuration {
        message: format!("views directory '{}' does not exist", dir.display()),
    }
    .into())
}

/// The view manager an application would build from this config.
pub(crate) fn view_manager(
    views: PathBuf,
    normalization: NameNormalization,
    config: &AppConfig,
    extra_globals: &[String],
) -> CliResult<ViewManager> {
    debug!(views = %views.display(), %normalization, "Building view manager");
    let renderer = MustacheRenderer::with_normalization(views, normalization);
    let manager = ViewManager::new(renderer, &config.app.view_config());
    manager.add_globals(&parse_globals(extra_globals)?)?;
    Ok(manager)
}

/// Parse repeated `KEY=VALUE` flags.
///
/// Values that parse as JSON keep their type (`count=3`, `flags=[1,2]`);
/// anything else is taken as a string.
pub(crate) fn parse_globals(pairs: &[String]) -> CliResult<RenderData> {
    let mut globals = RenderData::new();
    for pair in pairs {
        let Some((key, raw)) = pair.split_once('=') else {
            return Err(CliError::InvalidInput {
                message: format!("global '{pair}' is not in KEY=VALUE form"),
                source: None,
            });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::InvalidInput {
                message: format!("global '{pair}' has an empty key"),
                source: None,
            });
        }
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        globals.insert(key, value);
    }
    Ok(globals)
}
