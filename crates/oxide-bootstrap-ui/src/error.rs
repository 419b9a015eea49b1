//! Error types for the form helper.

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

/// Form helper errors.
#[derive(Debug, Error)]
pub enum FormHelperError {
    /// The `align` option is not one of `default`, `horizontal` or `inline`.
    #[error("invalid `align` option value: {0}")]
    InvalidAlign(String),

    /// No template with this name exists in any layer.
    #[error("cannot find template named: {0}")]
    UnknownTemplate(String),

    /// A template or configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No widget is registered for the type and no `_default` exists.
    #[error("no widget registered for type: {0}")]
    UnknownWidget(String),
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns whether a field has at least one error.
    pub fn has(&self, field: &str) -> bool {
        self.errors.get(field).is_some_and(|m| !m.is_empty())
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> &[String] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form helper operations.
pub type Result<T> = std::result::Result<T, FormHelperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());
        errors.add("email", "is required");
        errors.add("email", "must be valid");
        assert!(errors.has("email"));
        assert!(!errors.has("name"));
        assert_eq!(errors.get("email").len(), 2);
        assert!(errors.get("name").is_empty());
    }

    #[test]
    fn test_error_messages() {
        let err = FormHelperError::InvalidAlign("diagonal".to_string());
        assert_eq!(err.to_string(), "invalid `align` option value: diagonal");
    }
}
