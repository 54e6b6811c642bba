//! Mustache engine: a renderer with an inspectable, re-rootable template
//! directory.

use std::path::{Path, PathBuf};

use nimbus_core::{
    application::ports::{Renderer, TemplateEngine},
    domain::{NameNormalization, RenderData, TemplateRef},
    error::NimbusResult,
};
use tracing::instrument;

use super::compiled::CompiledTemplates;

/// Template engine over Mustache files.
///
/// Unlike [`super::MustacheRenderer`], this engine strips a trailing
/// `.mustache` from names by default, so `about` and `about.mustache` both
/// resolve to `<dir>/about.mustache`.
pub struct MustacheEngine {
    views: CompiledTemplates,
    normalization: NameNormalization,
}

impl MustacheEngine {
    /// Create an engine rooted at `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self::with_normalization(directory, NameNormalization::StripExtension)
    }

    /// Create an engine with an explicit name normalization.
    pub fn with_normalization(
        directory: impl Into<PathBuf>,
        normalization: NameNormalization,
    ) -> Self {
        Self {
            views: CompiledTemplates::new(directory),
            normalization,
        }
    }

    pub fn normalization(&self) -> NameNormalization {
        self.normalization
    }

    /// Drop all compiled templates.
    pub fn clear_cache(&self) -> NimbusResult<()> {
        self.views.clear()
    }

    /// Number of compiled templates currently cached.
    pub fn cached(&self) -> usize {
        self.views.len()
    }
}

impl Renderer for MustacheEngine {
    #[instrument(skip_all, fields(template = %template))]
    fn render(&self, template: &TemplateRef, data: &RenderData) -> NimbusResult<String> {
        self.views.render(template, self.normalization, data)
    }
}

impl TemplateEngine for MustacheEngine {
    fn exists(&self, template: &TemplateRef) -> bool {
        self.views.exists(template, self.normalization)
    }

    fn template_directory(&self) -> NimbusResult<PathBuf> {
        self.views.root()
    }

    fn set_template_directory(&self, directory: &Path) -> NimbusResult<()> {
        self.views.set_root(directory)
    }
}
