//! Helper configuration.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::align::{Align, GridSpec};
use crate::error::{FormHelperError, Result};
use crate::options::FieldType;
use crate::templates::{bootstrap_templates, template_set};

/// Configuration of a [`FormHelper`](crate::FormHelper).
///
/// Deserializes from JSON with camelCase keys; every key is optional.
///
/// ```rust
/// use oxide_bootstrap_ui::{Align, HelperConfig};
///
/// let config = HelperConfig::from_json_str(
///     r#"{"align": "horizontal", "grid": {"left": 3, "middle": 9}}"#,
/// )
/// .unwrap();
/// assert_eq!(config.align, Align::Horizontal);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HelperConfig {
    /// Alignment used when a form neither sets nor hints one.
    pub align: Align,
    /// Class added to inputs that have errors.
    pub error_class: Option<String>,
    /// Grid used by horizontal forms without an explicit grid.
    pub grid: GridSpec,
    /// Overrides merged over the Bootstrap templates.
    pub templates: HashMap<String, String>,
    /// Overrides merged over the built-in per-alignment template sets.
    pub template_set: HashMap<Align, HashMap<String, String>>,
    /// Field types that never receive the `form-control` class.
    pub form_control_exempt: Vec<String>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            align: Align::Default,
            error_class: None,
            grid: GridSpec::default(),
            templates: HashMap::new(),
            template_set: HashMap::new(),
            form_control_exempt: ["checkbox", "radio", "hidden", "staticControl"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl HelperConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or an unknown alignment name.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| FormHelperError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&content)?;
        debug!(path = %path.display(), align = %config.align, "Loaded form helper config");
        Ok(config)
    }

    /// Sets the default alignment.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Sets the class added to inputs with errors.
    #[must_use]
    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = Some(class.into());
        self
    }

    /// Sets the default grid.
    #[must_use]
    pub fn grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    /// Overrides a template.
    #[must_use]
    pub fn template(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(name.into(), template.into());
        self
    }

    /// Overrides a template of one alignment set.
    #[must_use]
    pub fn set_template(
        mut self,
        align: Align,
        name: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.template_set
            .entry(align)
            .or_default()
            .insert(name.into(), template.into());
        self
    }

    /// Replaces the list of types exempt from `form-control`.
    #[must_use]
    pub fn form_control_exempt(mut self, types: &[&str]) -> Self {
        self.form_control_exempt = types.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Bootstrap templates with the configured overrides.
    pub fn base_templates(&self) -> HashMap<String, String> {
        let mut templates = bootstrap_templates();
        templates.extend(self.templates.clone());
        templates
    }

    /// Template set for an alignment with the configured overrides.
    pub fn template_set(&self, align: Align) -> HashMap<String, String> {
        let mut templates = template_set(align);
        if let Some(overrides) = self.template_set.get(&align) {
            templates.extend(overrides.clone());
        }
        templates
    }

    /// Returns whether the type skips the `form-control` class.
    pub fn is_form_control_exempt(&self, field_type: &FieldType) -> bool {
        self.form_control_exempt
            .iter()
            .any(|t| t == field_type.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{Breakpoint, Position};
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = HelperConfig::default();
        assert_eq!(config.align, Align::Default);
        assert!(config.error_class.is_none());
        assert_eq!(config.grid.class(Position::Right, false), "col-md-4");
        assert!(config.is_form_control_exempt(&FieldType::Checkbox));
        assert!(config.is_form_control_exempt(&FieldType::StaticControl));
        assert!(!config.is_form_control_exempt(&FieldType::Text));
    }

    #[test]
    fn test_from_json() {
        let config = HelperConfig::from_json_str(
            r#"{
                "align": "inline",
                "errorClass": "is-invalid",
                "grid": {"sm": {"left": 4, "middle": 8}},
                "templates": {"help": "<small>{{content}}</small>"},
                "templateSet": {"inline": {"inputContainer": "<span>{{content}}</span>"}}
            }"#,
        )
        .unwrap();
        assert_eq!(config.align, Align::Inline);
        assert_eq!(config.error_class.as_deref(), Some("is-invalid"));
        assert!(matches!(&config.grid, GridSpec::Breakpoints(m) if m.contains_key(&Breakpoint::Sm)));
        assert_eq!(config.base_templates()["help"], "<small>{{content}}</small>");
        assert_eq!(
            config.template_set(Align::Inline)["inputContainer"],
            "<span>{{content}}</span>"
        );
        assert!(config.template_set(Align::Inline)["label"].contains("sr-only"));
    }

    #[test]
    fn test_invalid_align_in_json() {
        assert!(HelperConfig::from_json_str(r#"{"align": "diagonal"}"#).is_err());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"align": "horizontal"}}"#).unwrap();
        let config = HelperConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.align, Align::Horizontal);
    }

    #[test]
    fn test_missing_config_file() {
        let err = HelperConfig::from_json_file(Path::new("/nonexistent/helper.json")).unwrap_err();
        assert!(matches!(err, FormHelperError::File { .. }));
        assert!(err
            .to_string()
            .starts_with("failed to read /nonexistent/helper.json"));
    }

    #[test]
    fn test_builder() {
        let config = HelperConfig::new()
            .align(Align::Horizontal)
            .error_class("error")
            .template("error", "<em>{{content}}</em>")
            .set_template(Align::Horizontal, "submitContainer", "<p>{{content}}</p>")
            .form_control_exempt(&["checkbox"]);
        assert_eq!(config.base_templates()["error"], "<em>{{content}}</em>");
        assert_eq!(
            config.template_set(Align::Horizontal)["submitContainer"],
            "<p>{{content}}</p>"
        );
        assert!(!config.is_form_control_exempt(&FieldType::Hidden));
    }
}
