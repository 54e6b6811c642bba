//! Renderer adapters.

mod compiled;
mod engine;
mod mustache_renderer;
mod recording;

pub use engine::MustacheEngine;
pub use mustache_renderer::MustacheRenderer;
pub use recording::{RecordingRenderer, RenderCall};
