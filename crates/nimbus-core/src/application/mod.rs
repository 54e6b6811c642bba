//! Application layer for Nimbus views.
//!
//! This layer contains:
//! - **Services**: `ViewManager` (globals decorator), `AppContext` (composition root)
//! - **Ports**: Interface definitions (traits) for renderers and databases
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; value rules such as
//! template-name shape live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{AppContext, ViewManager};

// Re-export port traits (for adapter implementation)
pub use ports::{Connection, Renderer, Statement, TemplateEngine};

pub use error::ApplicationError;
