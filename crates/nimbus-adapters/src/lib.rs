//! Infrastructure adapters for Nimbus.
//!
//! This crate implements the ports defined in `nimbus-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod database;
pub mod renderer;
pub mod template_loader;

// Re-export commonly used adapters
pub use database::{MockConnection, MockStatement};
pub use renderer::{MustacheEngine, MustacheRenderer, RecordingRenderer};
pub use template_loader::FilesystemTemplateLoader;
