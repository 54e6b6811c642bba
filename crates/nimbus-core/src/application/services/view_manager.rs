//! View Manager - renderer decorator that injects view globals.
//!
//! Every render call sees `globals ∪ data`, with call-specific data winning
//! on key collision:
//! 1. Snapshot engine + globals under a read lock
//! 2. Merge into a fresh `RenderData`
//! 3. Delegate to the wrapped renderer with the lock released
//!
//! Globals are seeded once at construction (`app_name`, `base_url`, `year`)
//! and only change through `add_global` / `add_globals`.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Datelike;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Renderer},
    domain::{Globals, RenderData, TemplateRef, ViewConfig},
    error::NimbusResult,
};

/// Renderer decorator holding the global template variables.
///
/// The engine slot and the global registry sit behind one `RwLock`, so a
/// render always pairs a single engine with a single globals snapshot even
/// while another thread swaps either.
pub struct ViewManager {
    state: RwLock<ViewState>,
}

struct ViewState {
    engine: Arc<dyn Renderer>,
    globals: Globals,
}

impl ViewManager {
    /// Wrap `engine`, seeding `year` from the local clock.
    pub fn new<R: Renderer + 'static>(engine: R, config: &ViewConfig) -> Self {
        Self::with_year(engine, config, chrono::Local::now().year())
    }

    /// Wrap `engine` with an explicit `year` global.
    pub fn with_year<R: Renderer + 'static>(engine: R, config: &ViewConfig, year: i32) -> Self {
        Self::from_shared(Arc::new(engine), config, year)
    }

    /// Wrap an already shared engine.
    pub fn from_shared(engine: Arc<dyn Renderer>, config: &ViewConfig, year: i32) -> Self {
        let globals = Globals::seeded(config, year);
        debug!(globals = globals.len(), year, "View manager initialised");
        Self {
            state: RwLock::new(ViewState { engine, globals }),
        }
    }

    /// Set one global; overwrites an existing key.
    pub fn add_global(&self, key: impl Into<String>, value: impl Into<Value>) -> NimbusResult<()> {
        let key = key.into();
        let mut state = self.write()?;
        debug!(key = %key, "Adding view global");
        state.globals = state.globals.with_global(key, value);
        Ok(())
    }

    /// Set every entry of `globals`; later keys overwrite earlier ones.
    pub fn add_globals(&self, globals: &RenderData) -> NimbusResult<()> {
        let mut state = self.write()?;
        debug!(count = globals.len(), "Adding view globals");
        state.globals = state.globals.with_globals(globals);
        Ok(())
    }

    /// Immutable snapshot of the current globals.
    pub fn globals(&self) -> NimbusResult<Globals> {
        Ok(self.read()?.globals.clone())
    }

    /// The wrapped renderer.
    pub fn engine(&self) -> NimbusResult<Arc<dyn Renderer>> {
        Ok(Arc::clone(&self.read()?.engine))
    }

    /// Replace the wrapped renderer.
    ///
    /// Renders already in flight finish on the engine they started with.
    pub fn set_engine<R: Renderer + 'static>(&self, engine: R) -> NimbusResult<()> {
        self.set_shared_engine(Arc::new(engine))
    }

    /// Replace the wrapped renderer with an already shared one.
    pub fn set_shared_engine(&self, engine: Arc<dyn Renderer>) -> NimbusResult<()> {
        let mut state = self.write()?;
        debug!("Swapping view engine");
        state.engine = engine;
        Ok(())
    }

    fn read(&self) -> NimbusResult<RwLockReadGuard<'_, ViewState>> {
        self.state
            .read()
            .map_err(|_| ApplicationError::StateLock.into())
    }

    fn write(&self) -> NimbusResult<RwLockWriteGuard<'_, ViewState>> {
        self.state
            .write()
            .map_err(|_| ApplicationError::StateLock.into())
    }
}

impl Renderer for ViewManager {
    #[instrument(skip_all, fields(template = %template))]
    fn render(&self, template: &TemplateRef, data: &RenderData) -> NimbusResult<String> {
        let (engine, merged) = {
            let state = self.read()?;
            (Arc::clone(&state.engine), state.globals.merge(data))
        };
        debug!(keys = merged.len(), "Rendering with merged globals");
        engine.render(template, &merged)
    }
}
