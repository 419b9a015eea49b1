//! Value binding for form fields.

use std::collections::{HashMap, HashSet};

use crate::error::ValidationErrors;
use crate::options::FieldType;

/// Supplies current values, errors and metadata for fields.
///
/// Field names are the dotted paths passed to the helper.
pub trait FormContext {
    /// Current value of a field.
    fn val(&self, field: &str) -> Option<String>;

    /// Current values of a multiple-choice field.
    fn values(&self, field: &str) -> Vec<String> {
        self.val(field).into_iter().collect()
    }

    /// Validation messages of a field.
    fn errors(&self, field: &str) -> Vec<String>;

    /// Whether the field is required.
    fn is_required(&self, _field: &str) -> bool {
        false
    }

    /// Type hint used when the field options do not name one.
    fn field_type(&self, _field: &str) -> Option<FieldType> {
        None
    }
}

/// Context of a form without bound data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullContext;

impl FormContext for NullContext {
    fn val(&self, _field: &str) -> Option<String> {
        None
    }

    fn errors(&self, _field: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Context backed by in-memory maps, e.g. submitted form data.
#[derive(Debug, Clone, Default)]
pub struct MapContext {
    values: HashMap<String, String>,
    selections: HashMap<String, Vec<String>>,
    errors: ValidationErrors,
    required: HashSet<String>,
    types: HashMap<String, FieldType>,
}

impl MapContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context from submitted values.
    pub fn from_values(values: HashMap<String, String>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Sets a value.
    #[must_use]
    pub fn value(mut self, field: &str, value: impl Into<String>) -> Self {
        self.values.insert(field.to_string(), value.into());
        self
    }

    /// Sets the values of a multiple-choice field.
    #[must_use]
    pub fn selected<I, S>(mut self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selections
            .insert(field.to_string(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Adds an error message.
    #[must_use]
    pub fn error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.errors.add(field, message);
        self
    }

    /// Replaces all error messages.
    #[must_use]
    pub fn validation_errors(mut self, errors: ValidationErrors) -> Self {
        self.errors = errors;
        self
    }

    /// Marks a field as required.
    #[must_use]
    pub fn required(mut self, field: &str) -> Self {
        self.required.insert(field.to_string());
        self
    }

    /// Sets the type hint of a field.
    #[must_use]
    pub fn typed(mut self, field: &str, field_type: FieldType) -> Self {
        self.types.insert(field.to_string(), field_type);
        self
    }
}

impl FormContext for MapContext {
    fn val(&self, field: &str) -> Option<String> {
        self.values.get(field).cloned()
    }

    fn values(&self, field: &str) -> Vec<String> {
        match self.selections.get(field) {
            Some(values) => values.clone(),
            None => self.val(field).into_iter().collect(),
        }
    }

    fn errors(&self, field: &str) -> Vec<String> {
        self.errors.get(field).to_vec()
    }

    fn is_required(&self, field: &str) -> bool {
        self.required.contains(field)
    }

    fn field_type(&self, field: &str) -> Option<FieldType> {
        self.types.get(field).cloned()
    }
}
