//! Filesystem template discovery.
//!
//! Walks a views directory and reports the templates and partials a
//! renderer rooted there can resolve.
//!
//! # Directory layout expected
//!
//! ```text
//! views/
//! ├── about.mustache           ← template "about"
//! ├── admin/
//! │   └── index.mustache       ← template "admin/index"
//! └── partials/
//!     └── header.mustache      ← partial "header" ({{> header}})
//! ```
//!
//! Files without the `.mustache` extension are ignored.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use nimbus_core::{
    domain::{PARTIALS_DIR, TEMPLATE_EXTENSION},
    error::{Context, NimbusError, NimbusResult},
};

/// Whether a discovered file is a page template or a partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Template,
    Partial,
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Template => write!(f, "template"),
            Self::Partial => write!(f, "partial"),
        }
    }
}

/// A template file found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    /// Name to pass to a renderer (or partial tag), `/`-separated, no extension.
    pub name: String,
    pub kind: TemplateKind,
    pub path: PathBuf,
}

/// Discovers templates under a views directory.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateLoader {
    views_dir: PathBuf,
}

impl FilesystemTemplateLoader {
    pub fn new(views_dir: impl Into<PathBuf>) -> Self {
        Self {
            views_dir: views_dir.into(),
        }
    }

    pub fn views_dir(&self) -> &Path {
        &self.views_dir
    }

    /// All templates and partials, sorted by kind then name.
    #[instrument(skip_all, fields(views_dir = %self.views_dir.display()))]
    pub fn load_all(&self) -> NimbusResult<Vec<TemplateEntry>> {
        if !self.views_dir.is_dir() {
            return Err(NimbusError::Configuration {
                message: format!(
                    "views directory '{}' does not exist",
                    self.views_dir.display()
                ),
            });
        }

        let partials_root = self.views_dir.join(PARTIALS_DIR);
        let mut entries = Vec::new();

        for entry in WalkDir::new(&self.views_dir).follow_links(true) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION)
            {
                continue;
            }

            let (kind, base) = if path.starts_with(&partials_root) {
                (TemplateKind::Partial, partials_root.as_path())
            } else {
                (TemplateKind::Template, self.views_dir.as_path())
            };

            let relative = path
                .strip_prefix(base)
                .context("template path outside views directory")?;
            entries.push(TemplateEntry {
                name: template_name(relative),
                kind,
                path: path.to_path_buf(),
            });
        }

        entries.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));
        debug!(count = entries.len(), "Templates discovered");
        Ok(entries)
    }

    /// Page templates only.
    pub fn templates(&self) -> NimbusResult<Vec<TemplateEntry>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|e| e.kind == TemplateKind::Template)
            .collect())
    }
}

/// `admin/index.mustache` → `admin/index`, with `/` on every platform.
fn template_name(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_views(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for rel in files {
            let full = temp.path().join(rel);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, "").unwrap();
        }
        temp
    }

    #[test]
    fn load_all_returns_error_for_missing_dir() {
        let loader = FilesystemTemplateLoader::new("/absolutely/does/not/exist");
        assert!(matches!(
            loader.load_all(),
            Err(NimbusError::Configuration { .. })
        ));
    }

    #[test]
    fn discovers_templates_and_partials() {
        let temp = make_views(&[
            "about.mustache",
            "admin/index.mustache",
            "partials/header.mustache",
            "README.md",
        ]);

        let entries = FilesystemTemplateLoader::new(temp.path()).load_all().unwrap();
        let names: Vec<_> = entries
            .iter()
            .map(|e| (e.kind, e.name.as_str()))
            .collect();

        assert_eq!(
            names,
            vec![
                (TemplateKind::Template, "about"),
                (TemplateKind::Template, "admin/index"),
                (TemplateKind::Partial, "header"),
            ]
        );
    }

    #[test]
    fn templates_excludes_partials() {
        let temp = make_views(&["home.mustache", "partials/footer.mustache"]);

        let entries = FilesystemTemplateLoader::new(temp.path()).templates().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "home");
        assert!(entries[0].path.ends_with("home.mustache"));
    }

    #[test]
    fn empty_directory_is_ok() {
        let temp = TempDir::new().unwrap();
        assert!(
            FilesystemTemplateLoader::new(temp.path())
                .load_all()
                .unwrap()
                .is_empty()
        );
    }
}
