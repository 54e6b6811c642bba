//! Application layer errors.
//!
//! These errors represent failures at the ports (template loading, engine
//! rendering, shared-state locks), not domain rule violations. Domain
//! errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while resolving, compiling, or rendering views.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The template does not resolve to a file under the template directory.
    #[error("Template not found: '{name}' (looked for {path})")]
    TemplateNotFound { name: String, path: PathBuf },

    /// The engine failed to compile or render the template.
    #[error("Rendering '{template}' failed: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Template file exists but could not be read.
    #[error("Template I/O error at {path}: {reason}")]
    TemplateIo { path: PathBuf, reason: String },

    /// Shared view state lock was poisoned.
    #[error("View state lock poisoned")]
    StateLock,

    /// Database operation failed.
    #[error("Database error: {reason}")]
    Database { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name, path } => vec![
                format!("No template file at {}", path.display()),
                format!("Create it, or check the spelling of '{}'", name),
                "Try: nimbus list to see available templates".into(),
                "Or point at another directory with --views".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Check the Mustache syntax in '{}'", template),
                "Make sure every referenced partial exists under partials/".into(),
            ],
            Self::TemplateIo { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that you have read permissions".into(),
            ],
            Self::StateLock => vec![
                "A render panicked while holding the view state".into(),
                "Restart the process to reset view globals".into(),
            ],
            Self::Database { .. } => vec!["Check the database connection settings".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Validation,
            Self::TemplateIo { .. } | Self::StateLock | Self::Database { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
