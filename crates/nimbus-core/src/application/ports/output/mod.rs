//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the view layer needs from external systems.
//! The `nimbus-adapters` crate provides implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{Record, RenderData, TemplateRef};
use crate::error::NimbusResult;

/// Port for template rendering.
///
/// Implemented by:
/// - `nimbus_adapters::renderer::MustacheRenderer` (names used verbatim)
/// - `nimbus_adapters::renderer::MustacheEngine` (see [`TemplateEngine`])
/// - `nimbus_core::application::ViewManager` (decorator adding globals)
/// - `nimbus_adapters::renderer::RecordingRenderer` (testing)
///
/// ## Contract
///
/// - A template that does not resolve fails with
///   `ApplicationError::TemplateNotFound`, raised by the adapter when it
///   tries to load the file. Callers do not pre-check existence.
/// - Keys absent from `data` render as empty/falsy.
/// - No side effects beyond the adapter's compiled-template cache.
#[cfg_attr(test, mockall::automock)]
pub trait Renderer: Send + Sync {
    /// Render `template` with `data` into a response body.
    fn render(&self, template: &TemplateRef, data: &RenderData) -> NimbusResult<String>;
}

impl<R: Renderer + ?Sized> Renderer for Arc<R> {
    fn render(&self, template: &TemplateRef, data: &RenderData) -> NimbusResult<String> {
        (**self).render(template, data)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&self, template: &TemplateRef, data: &RenderData) -> NimbusResult<String> {
        (**self).render(template, data)
    }
}

/// Port for a renderer bound to a template directory it can inspect and
/// re-root at runtime.
///
/// Implemented by:
/// - `nimbus_adapters::renderer::MustacheEngine`
pub trait TemplateEngine: Renderer {
    /// `true` iff `<directory>/<template>.mustache` is an existing file.
    fn exists(&self, template: &TemplateRef) -> bool;

    /// The directory templates currently resolve against.
    fn template_directory(&self) -> NimbusResult<PathBuf>;

    /// Re-root the engine.
    ///
    /// Rebuilds the template and partials loaders and drops every compiled
    /// template from the previous directory.
    fn set_template_directory(&self, directory: &Path) -> NimbusResult<()>;
}

/// Port for a prepared or executed database statement.
///
/// Implemented by:
/// - `nimbus_adapters::database::MockStatement` (testing)
pub trait Statement: Send {
    /// Execute with positional parameters.
    fn execute(&mut self, params: &[serde_json::Value]) -> NimbusResult<bool>;

    /// Fetch the next row.
    fn fetch(&mut self) -> NimbusResult<Record>;

    /// Fetch all remaining rows.
    fn fetch_all(&mut self) -> NimbusResult<Vec<Record>>;
}

/// Port for a database connection handed to controllers.
///
/// Implemented by:
/// - `nimbus_adapters::database::MockConnection` (testing)
pub trait Connection: Send + Sync {
    /// Prepare `sql` for later execution.
    fn prepare(&self, sql: &str) -> NimbusResult<Box<dyn Statement>>;

    /// Run `sql` and return a statement positioned at its result set.
    fn query(&self, sql: &str) -> NimbusResult<Box<dyn Statement>>;

    /// Run `sql` for its side effects.
    fn exec(&self, sql: &str) -> NimbusResult<Box<dyn Statement>>;
}
