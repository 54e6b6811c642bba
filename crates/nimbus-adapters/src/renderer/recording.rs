//! In-memory renderer for testing.

use std::{
    collections::HashSet,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use nimbus_core::{
    application::{ApplicationError, ports::Renderer},
    domain::{RenderData, TemplateRef},
    error::NimbusResult,
};

/// One captured `render` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCall {
    pub template: TemplateRef,
    pub data: RenderData,
}

/// Renderer that records every call instead of touching the filesystem.
///
/// Clones share state, so a test can hand one clone to a `ViewManager` and
/// inspect the calls through another.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    inner: Arc<RwLock<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    calls: Vec<RenderCall>,
    response: Option<String>,
    missing: HashSet<String>,
}

impl RecordingRenderer {
    /// Create a renderer that answers with the render data as JSON.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every render with `body`.
    pub fn with_response(self, body: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.response = Some(body.into());
        }
        self
    }

    /// Fail renders of `template` with `TemplateNotFound`.
    pub fn with_missing(self, template: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.missing.insert(template.into());
        }
        self
    }

    /// All calls so far, oldest first.
    pub fn calls(&self) -> Vec<RenderCall> {
        self.inner
            .read()
            .map(|i| i.calls.clone())
            .unwrap_or_default()
    }

    /// The most recent call.
    pub fn last_call(&self) -> Option<RenderCall> {
        self.inner.read().ok()?.calls.last().cloned()
    }

    /// Forget recorded calls.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.calls.clear();
        }
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, template: &TemplateRef, data: &RenderData) -> NimbusResult<String> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StateLock)?;

        inner.calls.push(RenderCall {
            template: template.clone(),
            data: data.clone(),
        });

        if inner.missing.contains(template.as_str()) {
            return Err(ApplicationError::TemplateNotFound {
                name: template.to_string(),
                path: PathBuf::from(format!("{template}.mustache")),
            }
            .into());
        }

        match &inner.response {
            Some(body) => Ok(body.clone()),
            None => serde_json::to_string(data).map_err(|e| {
                ApplicationError::RenderingFailed {
                    template: template.to_string(),
                    reason: e.to_string(),
                }
                .into()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn records_calls_across_clones() {
        let renderer = RecordingRenderer::new().with_response("ok");
        let handle = renderer.clone();

        let t = TemplateRef::new("home").unwrap();
        assert_eq!(
            renderer.render(&t, &RenderData::new().with("a", 1)).unwrap(),
            "ok"
        );

        let last = handle.last_call().unwrap();
        assert_eq!(last.template, t);
        assert_eq!(last.data.get("a"), Some(&json!(1)));
        assert_eq!(handle.calls().len(), 1);

        handle.clear();
        assert!(renderer.calls().is_empty());
    }

    #[test]
    fn default_body_is_data_json() {
        let renderer = RecordingRenderer::new();
        let t = TemplateRef::new("home").unwrap();

        let body = renderer
            .render(&t, &RenderData::new().with("x", "y"))
            .unwrap();

        assert_eq!(body, r#"{"x":"y"}"#);
    }

    #[test]
    fn missing_templates_fail_but_are_recorded() {
        let renderer = RecordingRenderer::new().with_missing("gone");
        let t = TemplateRef::new("gone").unwrap();

        let err = renderer.render(&t, &RenderData::new()).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(renderer.calls().len(), 1);
    }
}
