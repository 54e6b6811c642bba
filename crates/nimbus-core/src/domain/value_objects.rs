//! Domain value objects: TemplateRef, NameNormalization, Record.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity, no I/O.
//! A [`TemplateRef`] is validated for *shape* on construction (no empty
//! names, no absolute paths, no parent traversal) but never for existence;
//! whether the template resolves is the renderer's business.

use crate::domain::error::DomainError;
use crate::domain::validation::DomainValidator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// File extension of template resources (without the dot).
pub const TEMPLATE_EXTENSION: &str = "mustache";

/// Name of the partials subdirectory under the template root.
pub const PARTIALS_DIR: &str = "partials";

/// A fetched database row.
pub type Record = serde_json::Map<String, serde_json::Value>;

// ── TemplateRef ──────────────────────────────────────────────────────────────

/// Reference to a template resource, e.g. `about` or `admin/index`.
///
/// Names use `/` as separator regardless of platform and are resolved
/// against the configured template directory by the engine adapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TemplateRef(String);

impl TemplateRef {
    /// Validate and wrap a template name.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        DomainValidator::validate_template_name(&name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name after applying `normalization`.
    pub fn normalized(&self, normalization: NameNormalization) -> &str {
        match normalization {
            NameNormalization::Verbatim => &self.0,
            NameNormalization::StripExtension => self
                .0
                .strip_suffix(TEMPLATE_EXTENSION)
                .and_then(|rest| rest.strip_suffix('.'))
                .filter(|rest| !rest.is_empty())
                .unwrap_or(&self.0),
        }
    }

    /// Relative path of the template file: the normalized name with
    /// `.mustache` appended.
    ///
    /// The extension is appended, never substituted, so a verbatim
    /// `about.mustache` resolves to `about.mustache.mustache`.
    pub fn relative_path(&self, normalization: NameNormalization) -> PathBuf {
        let name = self.normalized(normalization);
        let mut path: PathBuf = name.split('/').filter(|s| !s.is_empty()).collect();
        let file_name = format!(
            "{}.{}",
            path.file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default(),
            TEMPLATE_EXTENSION
        );
        path.set_file_name(file_name);
        path
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TemplateRef {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for TemplateRef {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TemplateRef {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TemplateRef> for String {
    fn from(value: TemplateRef) -> Self {
        value.0
    }
}

impl AsRef<str> for TemplateRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── NameNormalization ────────────────────────────────────────────────────────

/// How an engine adapter maps a [`TemplateRef`] onto a file name.
///
/// The two Mustache adapters historically disagree here: the plain renderer
/// uses names verbatim, the engine variant strips a trailing `.mustache`.
/// Both behaviours are kept and selected explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameNormalization {
    /// Use the name as given.
    #[default]
    Verbatim,
    /// Strip one trailing `.mustache` before resolution.
    StripExtension,
}

impl NameNormalization {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Verbatim => "verbatim",
            Self::StripExtension => "strip-extension",
        }
    }
}

impl fmt::Display for NameNormalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameNormalization {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbatim" => Ok(Self::Verbatim),
            "strip-extension" | "strip_extension" | "strip" => Ok(Self::StripExtension),
            _ => Err(DomainError::UnknownNormalization(s.to_string())),
        }
    }
}
