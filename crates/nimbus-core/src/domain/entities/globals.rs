//! View globals: template-wide defaults overridable per render call.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Globals (seeded once)        │  app_name, base_url, year
//! └──────────────┬───────────────┘
//!                │ merged_with(data)   data wins on collision
//!                ▼
//! ┌──────────────────────────────┐
//! │ RenderData (fresh copy)      │  → Renderer::render
//! └──────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::render_data::RenderData;

pub const APP_NAME_KEY: &str = "app_name";
pub const BASE_URL_KEY: &str = "base_url";
pub const YEAR_KEY: &str = "year";

pub const DEFAULT_APP_NAME: &str = "Nimbus";
pub const DEFAULT_BASE_URL: &str = "/";

/// Construction-time settings for the view layer.
///
/// Both keys are optional; absent values fall back to
/// [`DEFAULT_APP_NAME`] and [`DEFAULT_BASE_URL`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
}

/// Immutable snapshot of the global registry.
///
/// Every mutation produces a new value; a snapshot handed to a render call
/// can never observe later `add_global` calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Globals(RenderData);

impl Globals {
    /// Seed `app_name`, `base_url`, and `year`.
    pub fn seeded(config: &ViewConfig, year: i32) -> Self {
        let data = RenderData::new()
            .with(
                APP_NAME_KEY,
                config.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME),
            )
            .with(
                BASE_URL_KEY,
                config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            )
            .with(YEAR_KEY, year);
        Self(data)
    }

    /// Copy with one entry set; an existing key is overwritten.
    pub fn with_global(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self(self.0.clone().with(key, value))
    }

    /// Copy with every entry of `entries` set.
    pub fn with_globals(&self, entries: &RenderData) -> Self {
        Self(self.0.merged_with(entries))
    }

    /// Globals overlaid by call-specific `data` (data wins).
    pub fn merge(&self, data: &RenderData) -> RenderData {
        self.0.merged_with(data)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_data(&self) -> &RenderData {
        &self.0
    }
}
