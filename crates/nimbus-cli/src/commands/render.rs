//! `nimbus render`: render one template through a view manager.

use std::io::Read as _;
use std::path::Path;

use tracing::{info, instrument};

use nimbus_core::{
    application::Renderer,
    domain::{NameNormalization, RenderData, TemplateRef},
};

use crate::{
    cli::{GlobalArgs, RenderArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(template = %args.template))]
pub fn execute(
    args: RenderArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let template = TemplateRef::new(args.template.as_str())?;
    let data = read_data(&args)?;

    let views = super::views_dir(&global, &config);
    super::require_views_dir(&views)?;

    let normalization = if args.strip_extension {
        NameNormalization::StripExtension
    } else {
        config.views.normalization
    };
    let manager = super::view_manager(views, normalization, &config, &args.globals)?;

    let body = manager.render(&template, &data)?;
    info!(bytes = body.len(), "Template rendered");

    match &args.output {
        Some(path) => {
            std::fs::write(path, &body)
                .with_cli_context(|| format!("failed to write '{}'", path.display()))?;
            output.success(&format!("Rendered {} to {}", template, path.display()))?;
        }
        None => output.body(&body)?,
    }

    Ok(())
}

/// Render data from `--data`, `--data-file`, or an empty object.
fn read_data(args: &RenderArgs) -> CliResult<RenderData> {
    if let Some(raw) = &args.data {
        return Ok(RenderData::from_json(raw)?);
    }
    match &args.data_file {
        Some(path) => Ok(RenderData::from_json(&read_source(path)?)?),
        None => Ok(RenderData::new()),
    }
}

fn read_source(path: &Path) -> CliResult<String> {
    if path == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .with_cli_context(|| "failed to read render data from stdin")?;
        return Ok(raw);
    }
    std::fs::read_to_string(path)
        .with_cli_context(|| format!("failed to read data file '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    fn args(data: Option<&str>, data_file: Option<PathBuf>) -> RenderArgs {
        RenderArgs {
            template: "home".into(),
            data: data.map(str::to_string),
            data_file,
            globals: Vec::new(),
            strip_extension: false,
            output: None,
        }
    }

    #[test]
    fn no_data_is_empty_object() {
        assert!(read_data(&args(None, None)).unwrap().is_empty());
    }

    #[test]
    fn inline_data_is_parsed() {
        let data = read_data(&args(Some(r#"{"title": "Hi", "n": 2}"#), None)).unwrap();
        assert_eq!(data.get("title"), Some(&json!("Hi")));
        assert_eq!(data.get("n"), Some(&json!(2)));
    }

    #[test]
    fn non_object_data_is_user_error() {
        let err = read_data(&args(Some("[1, 2]"), None)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn data_file_is_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.json");
        std::fs::write(&path, r#"{"items": [1, 2, 3]}"#).unwrap();

        let data = read_data(&args(None, Some(path))).unwrap();
        assert_eq!(data.get("items"), Some(&json!([1, 2, 3])));
    }

    #[test]
    fn missing_data_file_is_io_error() {
        let err = read_data(&args(None, Some(PathBuf::from("/no/such/data.json")))).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
