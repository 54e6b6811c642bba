//! Nimbus Core - view layer for Nimbus MVC applications
//!
//! This crate provides the domain and application layers shared by every
//! generated Nimbus application, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     Controllers / nimbus-cli            │
//! │     call render(template, data)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (ViewManager, AppContext)          │
//! │   merges globals, wires dependencies    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Renderer, TemplateEngine, Connection)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    nimbus-adapters (Infrastructure)     │
//! │ (MustacheRenderer, MockConnection, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Values)      │
//! │   (TemplateRef, RenderData, Globals)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nimbus_core::prelude::*;
//!
//! # fn demo(engine: impl Renderer + 'static) -> NimbusResult<()> {
//! let views = ViewManager::new(engine, &ViewConfig::new().app_name("Demo"));
//! views.add_global("theme", "dark")?;
//!
//! let about = TemplateRef::new("about")?;
//! let body = views.render(&about, &RenderData::new().with("title", "About"))?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AppContext, ViewManager,
        ports::{Connection, Renderer, Statement, TemplateEngine},
    };
    pub use crate::domain::{
        Globals, NameNormalization, Record, RenderData, TemplateRef, ViewConfig,
    };
    pub use crate::error::{NimbusError, NimbusResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
