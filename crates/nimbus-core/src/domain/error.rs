// ============================================================================
// domain/error.rs - VIEW DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (errors cross the renderer boundary by value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid template name '{name}': {reason}")]
    InvalidTemplateName { name: String, reason: String },

    #[error("Invalid render data: {0}")]
    InvalidRenderData(String),

    #[error("Unknown name normalization '{0}'")]
    UnknownNormalization(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidTemplateName { name, reason } => vec![
                format!("'{}' cannot be used as a template name: {}", name, reason),
                "Template names are relative to the views directory, e.g. 'about' or 'admin/index'"
                    .into(),
                "The .mustache extension is optional".into(),
            ],
            Self::InvalidRenderData(msg) => vec![
                "Render data must be a JSON object at the top level".into(),
                format!("Details: {}", msg),
                "Example: {\"title\": \"Hello\", \"items\": [1, 2, 3]}".into(),
            ],
            Self::UnknownNormalization(value) => vec![
                format!("'{}' is not a name normalization mode", value),
                "Use 'verbatim' or 'strip-extension'".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidTemplateName { .. } | Self::InvalidRenderData(_) => {
                ErrorCategory::Validation
            }
            Self::UnknownNormalization(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
