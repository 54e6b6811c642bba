//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `nimbus-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by controllers and services,
//!   implemented by infrastructure
//!   - `Renderer`: template + data → response body
//!   - `TemplateEngine`: a `Renderer` with a re-rootable template directory
//!   - `Connection` / `Statement`: database access
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Connection, Renderer, Statement, TemplateEngine};

#[cfg(test)]
pub use output::MockRenderer;
