//! Application context - the composition root handed to controllers.
//!
//! Bootstrap picks a renderer (usually a `ViewManager` over a Mustache
//! engine) and a database connection once, then clones the context into
//! every controller.

use std::sync::Arc;

use tracing::instrument;

use crate::{
    application::ports::{Connection, Renderer},
    domain::{RenderData, TemplateRef},
    error::NimbusResult,
};

/// Shared dependencies for controllers.
#[derive(Clone)]
pub struct AppContext {
    view: Arc<dyn Renderer>,
    db: Arc<dyn Connection>,
}

impl AppContext {
    /// Create a context from a renderer and a connection.
    pub fn new(view: Arc<dyn Renderer>, db: Arc<dyn Connection>) -> Self {
        Self { view, db }
    }

    /// Render `template` into a response body.
    ///
    /// The name is validated before the renderer sees it.
    #[instrument(skip(self, data))]
    pub fn render(&self, template: &str, data: &RenderData) -> NimbusResult<String> {
        let template = TemplateRef::new(template)?;
        self.view.render(&template, data)
    }

    /// The injected renderer.
    pub fn view(&self) -> &dyn Renderer {
        self.view.as_ref()
    }

    /// The injected database connection.
    pub fn db(&self) -> &dyn Connection {
        self.db.as_ref()
    }
}
