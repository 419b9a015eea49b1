//! Tamper protection bookkeeping for rendered fields.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::Result;
use crate::html::HtmlAttributes;
use crate::templates::StringTemplate;

/// Records the fields a form renders so the submission can be checked.
pub trait FieldSecurity {
    /// Forgets every registered field.
    fn reset(&mut self);

    /// Registers a field; `locked_value` pins the value that must come back.
    fn register(&mut self, field: &str, locked_value: Option<&str>);

    /// Returns whether no field is registered.
    fn is_empty(&self) -> bool;

    /// Renders the hidden token markup emitted before the form closes.
    ///
    /// # Errors
    ///
    /// Propagates template and encoding failures.
    fn render(&self, templates: &StringTemplate, attrs: &HtmlAttributes) -> Result<String>;
}

/// Default registrar emitting the field list as a JSON token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldLockRegistry {
    fields: BTreeSet<String>,
    locked: BTreeMap<String, String>,
}

impl FieldLockRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered field names.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    /// Locked value of a field.
    pub fn locked(&self, field: &str) -> Option<&str> {
        self.locked.get(field).map(String::as_str)
    }
}

impl FieldSecurity for FieldLockRegistry {
    fn reset(&mut self) {
        self.fields.clear();
        self.locked.clear();
    }

    fn register(&mut self, field: &str, locked_value: Option<&str>) {
        self.fields.insert(field.to_string());
        if let Some(value) = locked_value {
            self.locked.insert(field.to_string(), value.to_string());
        }
    }

    fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn render(&self, templates: &StringTemplate, attrs: &HtmlAttributes) -> Result<String> {
        let mut token_attrs = HtmlAttributes::new().with("value", serde_json::to_string(self)?);
        token_attrs.extend(attrs);
        let input = templates.format(
            "input",
            &[
                ("type", "hidden"),
                ("name", "_Token[fields]"),
                ("attrs", &token_attrs.to_html()),
            ],
        )?;
        templates.format("hiddenBlock", &[("content", &input)])
    }
}
