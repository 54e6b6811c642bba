//! Implementation of the `nimbus list` command.

use nimbus_adapters::{FilesystemTemplateLoader, template_loader::TemplateKind};

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let loader = FilesystemTemplateLoader::new(super::views_dir(&global, &config));
    let entries = if args.templates_only {
        loader.templates()?
    } else {
        loader.load_all()?
    };

    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header(&format!(
                "Templates in {}:",
                loader.views_dir().display()
            ))?;
            if entries.is_empty() {
                output.info("No templates found")?;
            }
            let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
            for entry in &entries {
                let label = match entry.kind {
                    TemplateKind::Template => entry.name.clone(),
                    TemplateKind::Partial => format!("> {}", entry.name),
                };
                output.line(&format!(
                    "  {:<width$}  {}",
                    label,
                    entry.kind,
                    width = width + 2
                ))?;
            }
        }
        ListFormat::List => {
            for entry in &entries {
                output.line(&entry.name)?;
            }
        }
        ListFormat::Json => output.json(&entries)?,
    }

    Ok(())
}
