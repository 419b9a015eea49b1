//! Layered string templates with `{{placeholder}}` substitution.

mod defaults;

pub use defaults::{bootstrap_templates, template_set};

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::error::{FormHelperError, Result};
use crate::options::FieldType;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([\w.-]+)\}\}").expect("placeholder pattern is valid"));

/// Structural position a template fills around a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Label and input arrangement.
    FormGroup,
    /// Outer wrapper without errors.
    Container,
    /// Outer wrapper when the field has errors.
    ContainerError,
}

impl Slot {
    /// The generic template name used when no type-specific one exists.
    pub const fn generic(self) -> &'static str {
        match self {
            Self::FormGroup => "formGroup",
            Self::Container => "inputContainer",
            Self::ContainerError => "inputContainerError",
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Self::FormGroup => "FormGroup",
            Self::Container => "Container",
            Self::ContainerError => "ContainerError",
        }
    }
}

/// Type-qualified template names: (type, form group, container, error container).
const TYPED_TEMPLATES: &[(&str, &str, &str, &str)] = &[
    ("checkbox", "checkboxFormGroup", "checkboxContainer", "checkboxContainerError"),
    ("radio", "radioFormGroup", "radioContainer", "radioContainerError"),
    (
        "multicheckbox",
        "multicheckboxFormGroup",
        "multicheckboxContainer",
        "multicheckboxContainerError",
    ),
    ("select", "selectFormGroup", "selectContainer", "selectContainerError"),
    (
        "multiselect",
        "multiselectFormGroup",
        "multiselectContainer",
        "multiselectContainerError",
    ),
    ("textarea", "textareaFormGroup", "textareaContainer", "textareaContainerError"),
    ("text", "textFormGroup", "textContainer", "textContainerError"),
    ("email", "emailFormGroup", "emailContainer", "emailContainerError"),
    ("password", "passwordFormGroup", "passwordContainer", "passwordContainerError"),
    ("number", "numberFormGroup", "numberContainer", "numberContainerError"),
    ("tel", "telFormGroup", "telContainer", "telContainerError"),
    ("url", "urlFormGroup", "urlContainer", "urlContainerError"),
    ("search", "searchFormGroup", "searchContainer", "searchContainerError"),
    ("date", "dateFormGroup", "dateContainer", "dateContainerError"),
    ("file", "fileFormGroup", "fileContainer", "fileContainerError"),
    (
        "staticControl",
        "staticControlFormGroup",
        "staticControlContainer",
        "staticControlContainerError",
    ),
];

/// Custom types are qualified by name, e.g. `colorContainer`.
fn typed_name(field_type: &FieldType, slot: Slot) -> Option<Cow<'static, str>> {
    if let FieldType::Custom(name) = field_type {
        return Some(Cow::Owned(format!("{name}{}", slot.suffix())));
    }
    let key = field_type.as_str();
    TYPED_TEMPLATES
        .iter()
        .find(|(ty, ..)| *ty == key)
        .map(|(_, group, container, container_error)| match slot {
            Slot::FormGroup => Cow::Borrowed(*group),
            Slot::Container => Cow::Borrowed(*container),
            Slot::ContainerError => Cow::Borrowed(*container_error),
        })
}

/// Mutable template dictionary with a snapshot stack.
#[derive(Debug, Clone, Default)]
pub struct StringTemplate {
    templates: HashMap<String, String>,
    stack: Vec<HashMap<String, String>>,
}

impl StringTemplate {
    /// Creates a dictionary from initial templates.
    pub fn new(templates: HashMap<String, String>) -> Self {
        Self {
            templates,
            stack: Vec::new(),
        }
    }

    /// Returns a template by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(String::as_str)
    }

    /// Layers templates over the current ones.
    pub fn add<I, K, V>(&mut self, templates: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.templates
            .extend(templates.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// Removes a template.
    pub fn remove(&mut self, name: &str) {
        self.templates.remove(name);
    }

    /// Snapshots the current templates.
    pub fn push(&mut self) {
        self.stack.push(self.templates.clone());
    }

    /// Restores the last snapshot. Does nothing when no snapshot exists.
    pub fn pop(&mut self) {
        if let Some(previous) = self.stack.pop() {
            self.templates = previous;
        }
    }

    /// Number of snapshots on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Resolves the template name for a slot, preferring the type-qualified
    /// variant when one is defined.
    pub fn resolve(&self, slot: Slot, field_type: &FieldType) -> Cow<'static, str> {
        typed_name(field_type, slot)
            .filter(|name| self.templates.contains_key(name.as_ref()))
            .unwrap_or(Cow::Borrowed(slot.generic()))
    }

    /// Formats a template, substituting `{{name}}` placeholders.
    ///
    /// Placeholders without a value are replaced by an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`FormHelperError::UnknownTemplate`] when no template has
    /// this name.
    pub fn format(&self, name: &str, vars: &[(&str, &str)]) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| FormHelperError::UnknownTemplate(name.to_string()))?;
        Ok(PLACEHOLDER
            .replace_all(template, |caps: &Captures<'_>| {
                vars.iter()
                    .find(|(key, _)| *key == &caps[1])
                    .map(|(_, value)| (*value).to_string())
                    .unwrap_or_default()
            })
            .into_owned())
    }
}

/// Reads a JSON object of template name to template string.
///
/// # Errors
///
/// Fails when the file cannot be read or is not a JSON string map.
pub fn load_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = std::fs::read_to_string(path).map_err(|source| FormHelperError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let templates: HashMap<String, String> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), count = templates.len(), "Loaded templates");
    Ok(templates)
}
