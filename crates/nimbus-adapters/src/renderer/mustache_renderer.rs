//! Mustache renderer that resolves template names verbatim.

use std::path::{Path, PathBuf};

use nimbus_core::{
    application::ports::Renderer,
    domain::{NameNormalization, RenderData, TemplateRef},
    error::NimbusResult,
};
use tracing::instrument;

use super::compiled::CompiledTemplates;

/// Renderer backed by Mustache templates on disk.
///
/// `render` hands the name straight to the loader: `about` resolves to
/// `<dir>/about.mustache`, and `about.mustache` to
/// `<dir>/about.mustache.mustache`. Use [`MustacheRenderer::with_normalization`]
/// to opt into suffix stripping.
pub struct MustacheRenderer {
    views: CompiledTemplates,
    normalization: NameNormalization,
}

impl MustacheRenderer {
    /// Create a renderer rooted at `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self::with_normalization(directory, NameNormalization::Verbatim)
    }

    /// Create a renderer with an explicit name normalization.
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

    /// The directory templates resolve against.
    pub fn template_directory(&self) -> NimbusResult<PathBuf> {
        self.views.root()
    }

    /// Re-root the renderer, dropping all compiled templates.
    pub fn set_template_directory(&self, directory: &Path) -> NimbusResult<()> {
        self.views.set_root(directory)
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

impl Renderer for MustacheRenderer {
    #[instrument(skip_all, fields(template = %template))]
    fn render(&self, template: &TemplateRef, data: &RenderData) -> NimbusResult<String> {
        self.views.render(template, self.normalization, data)
    }
}
