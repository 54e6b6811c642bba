//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the [`ViewConfig`]
//! derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--views`, `--strip-extension`; applied at the call-site)
//! 2. Environment variables: `NIMBUS_APP__APP_NAME`, `NIMBUS_VIEWS__DIRECTORY`, ...
//! 3. Config file (`--config FILE`, or the platform default path)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use nimbus_core::domain::{DEFAULT_APP_NAME, DEFAULT_BASE_URL, NameNormalization, ViewConfig};

use crate::{
    cli::OutputFormat,
    error::{CliError, CliResult},
};

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "NIMBUS";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values seeded into every render.
    pub app: AppSection,
    /// Where templates live and how names resolve.
    pub views: ViewsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSection {
    pub app_name: String,
    pub base_url: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.into(),
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl AppSection {
    /// The globals configuration handed to a `ViewManager`.
    pub fn view_config(&self) -> ViewConfig {
        ViewConfig::new()
            .app_name(self.app_name.clone())
            .base_url(self.base_url.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    pub directory: PathBuf,
    pub normalization: NameNormalization,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("views"),
            normalization: NameNormalization::Verbatim,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is `auto`; `auto` here means detect the
    /// terminal.
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then `NIMBUS_*`
    /// environment variables.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Self::from_sources(&path, required)
    }

    fn from_sources(path: &Path, required: bool) -> CliResult<Self> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| CliError::ConfigError {
                message: format!("failed to read '{}': {e}", path.display()),
                source: Some(Box::new(e)),
            })?;

        settings
            .try_deserialize()
            .map_err(|e| CliError::ConfigError {
                message: format!("invalid configuration in '{}': {e}", path.display()),
                source: Some(Box::new(e)),
            })
    }

    /// Render as the TOML written by `nimbus init`.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Look up a dotted key such as `app.app_name`.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let value = match key {
            "app.app_name" => self.app.app_name.clone(),
            "app.base_url" => self.app.base_url.clone(),
            "views.directory" => self.views.directory.display().to_string(),
            "views.normalization" => self.views.normalization.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.to_string(),
            _ => {
                return Err(CliError::ConfigError {
                    message: format!("unknown config key '{key}'"),
                    source: None,
                });
            }
        };
        Ok(value)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `nimbus.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "nimbus", "nimbus")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

/// File written by `nimbus init --local`.
pub const LOCAL_CONFIG_FILE: &str = "nimbus.toml";

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn defaults_match_view_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.app.app_name, "Nimbus");
        assert_eq!(cfg.app.base_url, "/");
        assert_eq!(cfg.views.directory, PathBuf::from("views"));
        assert_eq!(cfg.views.normalization, NameNormalization::Verbatim);
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, OutputFormat::Auto);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::from_sources(&temp.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.app.app_name, "Nimbus");
    }

    #[test]
    fn missing_explicit_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn file_values_override_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nimbus.toml");
        fs::write(
            &path,
            "[app]\napp_name = \"Demo\"\n\n[views]\ndirectory = \"app/views\"\nnormalization = \"strip-extension\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(cfg.app.app_name, "Demo");
        assert_eq!(cfg.app.base_url, "/");
        assert_eq!(cfg.views.directory, PathBuf::from("app/views"));
        assert_eq!(cfg.views.normalization, NameNormalization::StripExtension);
    }

    #[test]
    fn invalid_normalization_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nimbus.toml");
        fs::write(&path, "[views]\nnormalization = \"sideways\"\n").unwrap();

        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn output_format_is_read_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nimbus.toml");
        fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert_eq!(cfg.get("output.format").unwrap(), "json");
    }

    #[test]
    fn unknown_output_format_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nimbus.toml");
        fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn toml_output_reloads_to_same_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nimbus.toml");
        let mut cfg = AppConfig::default();
        cfg.app.app_name = "Written".into();
        fs::write(&path, cfg.to_toml().unwrap()).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.app.app_name, "Written");
        assert_eq!(loaded.views.normalization, NameNormalization::Verbatim);
    }

    #[test]
    fn view_config_carries_app_section() {
        let mut cfg = AppConfig::default();
        cfg.app.base_url = "/demo/".into();
        let view = cfg.app.view_config();
        assert_eq!(view.app_name.as_deref(), Some("Nimbus"));
        assert_eq!(view.base_url.as_deref(), Some("/demo/"));
    }

    #[test]
    fn get_known_and_unknown_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("app.app_name").unwrap(), "Nimbus");
        assert_eq!(cfg.get("views.normalization").unwrap(), "verbatim");
        assert_eq!(cfg.get("output.no_color").unwrap(), "false");
        assert_eq!(cfg.get("output.format").unwrap(), "auto");
        assert!(matches!(
            cfg.get("does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
