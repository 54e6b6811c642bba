//! `nimbus exists`: check a template resolves under the views directory.
//!
//! Uses [`MustacheEngine`], so `about` and `about.mustache` name the same file.

use tracing::debug;

use nimbus_adapters::MustacheEngine;
use nimbus_core::{
    application::TemplateEngine,
    domain::{NameNormalization, TemplateRef},
};

use crate::{
    cli::{ExistsArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ExistsArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let template = TemplateRef::new(args.template.as_str())?;
    let engine = MustacheEngine::new(super::views_dir(&global, &config));
    let directory = engine.template_directory()?;
    debug!(directory = %directory.display(), "Checking template");

    if !engine.exists(&template) {
        return Err(CliError::TemplateNotFound {
            id: template.normalized(NameNormalization::StripExtension).to_string(),
        });
    }

    let path = directory.join(template.relative_path(engine.normalization()));
    output.success(&format!("{} exists at {}", template, path.display()))?;
    Ok(())
}
