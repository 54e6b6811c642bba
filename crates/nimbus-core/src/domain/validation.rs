use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across value objects.
pub struct DomainValidator;

impl DomainValidator {
    /// Check that `name` has the shape of a template reference.
    ///
    /// Existence is not checked; only empty names, absolute paths, parent
    /// traversal, and control characters are rejected.
    pub fn validate_template_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidTemplateName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if name.starts_with('/') || name.starts_with('\\') || has_drive_prefix(name) {
            return Err(invalid("absolute paths are not allowed"));
        }
        if name.ends_with('/') {
            return Err(invalid("name must not end with '/'"));
        }
        if name.chars().any(char::is_control) {
            return Err(invalid("name contains control characters"));
        }
        if name.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(invalid("parent directory components ('..') are not allowed"));
        }

        Ok(())
    }

    /// Render data must be a JSON object at the top level.
    pub fn validate_render_data(value: &serde_json::Value) -> Result<(), DomainError> {
        match value {
            serde_json::Value::Object(_) => Ok(()),
            other => Err(DomainError::InvalidRenderData(format!(
                "expected an object, found {}",
                json_kind(other)
            ))),
        }
    }
}

fn has_drive_prefix(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
