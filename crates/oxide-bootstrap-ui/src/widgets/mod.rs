//! Widgets emitting the markup of a single field type.

mod bootstrap;

pub use bootstrap::{
    BasicWidget, ButtonWidget, CheckboxWidget, MultiCheckboxWidget, RadioWidget, SelectBoxWidget,
    TextareaWidget,
};

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{FormHelperError, Result};
use crate::html::HtmlAttributes;
use crate::options::{FieldType, LabelSpec};
use crate::templates::StringTemplate;

/// Key of the widget used when no type-specific widget is registered.
pub const DEFAULT_WIDGET: &str = "_default";

/// Normalized input handed to a widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetData {
    /// The `name` attribute.
    pub name: String,
    pub id: String,
    pub field_type: FieldType,
    pub value: Option<String>,
    /// Selected choices of multiple selects and checkbox lists.
    pub selected: Vec<String>,
    /// Attributes of the input element.
    pub attrs: HtmlAttributes,
    /// Choices as (value, text) pairs.
    pub options: Vec<(String, String)>,
    /// Label nested around checkbox and radio inputs.
    pub label: Option<LabelSpec>,
    pub inline: bool,
    pub multiple: bool,
    pub empty: Option<String>,
    pub prepend: Option<String>,
    pub append: Option<String>,
    /// Button title.
    pub text: String,
    pub escape: bool,
}

impl WidgetData {
    /// Returns whether a choice is part of the current value.
    pub fn is_selected(&self, option: &str) -> bool {
        if self.multiple || self.field_type == FieldType::MultiCheckbox {
            self.selected.iter().any(|v| v == option)
        } else {
            self.value.as_deref() == Some(option)
        }
    }
}

/// Trait for widgets that render a field type.
pub trait Widget: Send + Sync {
    /// Renders the widget as HTML.
    ///
    /// # Errors
    ///
    /// Propagates template failures.
    fn render(&self, data: &WidgetData, templates: &StringTemplate) -> Result<String>;
}

/// Widgets keyed by field type name.
#[derive(Clone, Default)]
pub struct WidgetRegistry {
    widgets: HashMap<String, Arc<dyn Widget>>,
}

impl std::fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.widgets.keys().collect();
        names.sort();
        f.debug_struct("WidgetRegistry")
            .field("widgets", &names)
            .finish()
    }
}

impl WidgetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the Bootstrap widgets.
    pub fn bootstrap() -> Self {
        let mut registry = Self::new();
        registry.add("button", ButtonWidget);
        registry.add("checkbox", CheckboxWidget);
        registry.add("radio", RadioWidget);
        registry.add("select", SelectBoxWidget);
        registry.add("multicheckbox", MultiCheckboxWidget);
        registry.add("textarea", TextareaWidget);
        registry.add(DEFAULT_WIDGET, BasicWidget);
        registry
    }

    /// Registers a widget, replacing an existing one.
    pub fn add(&mut self, name: impl Into<String>, widget: impl Widget + 'static) {
        self.widgets.insert(name.into(), Arc::new(widget));
    }

    /// Returns the widget for a type, falling back to the default widget.
    ///
    /// # Errors
    ///
    /// Returns [`FormHelperError::UnknownWidget`] when neither exists.
    pub fn get(&self, name: &str) -> Result<&dyn Widget> {
        self.widgets
            .get(name)
            .or_else(|| self.widgets.get(DEFAULT_WIDGET))
            .map(|widget| &**widget)
            .ok_or_else(|| FormHelperError::UnknownWidget(name.to_string()))
    }
}
