//! Options accepted by the helper operations.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::align::AlignOption;
use crate::html::HtmlAttributes;

/// Type of a form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Search,
    Date,
    File,
    Hidden,
    Textarea,
    Select,
    MultiSelect,
    MultiCheckbox,
    Checkbox,
    Radio,
    StaticControl,
    /// Any other input type, rendered by the registered widget of that name
    /// or the default widget.
    Custom(String),
}

impl FieldType {
    /// Returns the type name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
            Self::Date => "date",
            Self::File => "file",
            Self::Hidden => "hidden",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::MultiSelect => "multiselect",
            Self::MultiCheckbox => "multicheckbox",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::StaticControl => "staticControl",
            Self::Custom(name) => name,
        }
    }

    /// Name of the widget that renders this type.
    pub fn widget_name(&self) -> &str {
        match self {
            Self::MultiSelect => "select",
            other => other.as_str(),
        }
    }
}

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        match name {
            "text" => Self::Text,
            "email" => Self::Email,
            "password" => Self::Password,
            "number" => Self::Number,
            "tel" => Self::Tel,
            "url" => Self::Url,
            "search" => Self::Search,
            "date" => Self::Date,
            "file" => Self::File,
            "hidden" => Self::Hidden,
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            "multiselect" => Self::MultiSelect,
            "multicheckbox" => Self::MultiCheckbox,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "staticControl" => Self::StaticControl,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where per-form template overrides come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates given directly.
    Inline(HashMap<String, String>),
    /// A JSON file mapping names to templates.
    File(PathBuf),
}

/// Options for [`FormHelper::create`](crate::FormHelper::create).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOptions {
    /// Alignment name, grid, or legacy boolean.
    pub align: Option<AlignOption>,
    /// Deprecated alias of `align`.
    pub horizontal: Option<AlignOption>,
    /// Templates layered over the alignment set for this form.
    pub templates: Option<TemplateSource>,
    /// HTTP method; `put`, `patch` and `delete` are emulated over POST.
    pub method: String,
    /// Form action.
    pub url: Option<String>,
    /// Extra attributes of the form tag.
    pub attrs: HtmlAttributes,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            align: None,
            horizontal: None,
            templates: None,
            method: "post".to_string(),
            url: None,
            attrs: HtmlAttributes::new(),
        }
    }
}

impl FormOptions {
    /// Creates default form options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alignment.
    #[must_use]
    pub fn align(mut self, align: impl Into<AlignOption>) -> Self {
        self.align = Some(align.into());
        self
    }

    /// Sets the deprecated `horizontal` option.
    #[must_use]
    pub fn legacy_horizontal(mut self, value: impl Into<AlignOption>) -> Self {
        self.horizontal = Some(value.into());
        self
    }

    /// Sets inline template overrides.
    #[must_use]
    pub fn templates(mut self, templates: HashMap<String, String>) -> Self {
        self.templates = Some(TemplateSource::Inline(templates));
        self
    }

    /// Loads template overrides from a JSON file.
    #[must_use]
    pub fn templates_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.templates = Some(TemplateSource::File(path.into()));
        self
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Sets the form action.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Adds classes to the form tag.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.attrs.inject_classes(class);
        self
    }

    /// Sets an attribute of the form tag.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}

/// The `label` option of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LabelOption {
    /// Humanized from the field name.
    #[default]
    Auto,
    /// No label.
    Hidden,
    /// Label text.
    Text(String),
    /// Label text (humanized when `None`) with attributes.
    Attrs {
        text: Option<String>,
        attrs: HtmlAttributes,
    },
}

/// A resolved label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSpec {
    pub text: String,
    pub attrs: HtmlAttributes,
}

/// The `error` option of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorOption {
    /// Messages from the context.
    #[default]
    Auto,
    /// Never show errors.
    Hidden,
    /// Replace the context messages with this one.
    Message(String),
}

/// The `multiple` option of a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiple {
    /// A multiple select box.
    List,
    /// A list of checkboxes.
    Checkbox,
}

/// Options for [`FormHelper::input`](crate::FormHelper::input).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Field type; inferred when `None`.
    pub field_type: Option<FieldType>,
    pub label: LabelOption,
    pub error: ErrorOption,
    /// Taken from the context when `None`.
    pub required: Option<bool>,
    /// Choices as (value, text) pairs.
    pub options: Option<Vec<(String, String)>>,
    /// Help text, rendered with the `help` template.
    pub help: Option<String>,
    /// Markup placed before the input in an input group.
    pub prepend: Option<String>,
    /// Markup placed after the input in an input group.
    pub append: Option<String>,
    /// Inline checkbox/radio; detected from the label class when `None`.
    pub inline: Option<bool>,
    pub multiple: Option<Multiple>,
    /// Text of an empty leading select option.
    pub empty: Option<String>,
    /// Value; taken from the context when `None`.
    pub value: Option<String>,
    /// Selected choices of multiple selects; taken from the context when `None`.
    pub selected: Option<Vec<String>>,
    /// Templates applied to this field only.
    pub templates: HashMap<String, String>,
    /// Attributes of the input element.
    pub attrs: HtmlAttributes,
}

impl FieldOptions {
    /// Creates empty field options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field type.
    #[must_use]
    pub fn field_type(mut self, field_type: impl Into<FieldType>) -> Self {
        self.field_type = Some(field_type.into());
        self
    }

    /// Sets the label text.
    #[must_use]
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = LabelOption::Text(text.into());
        self
    }

    /// Sets the label with attributes.
    #[must_use]
    pub fn label_attrs(mut self, text: Option<&str>, attrs: HtmlAttributes) -> Self {
        self.label = LabelOption::Attrs {
            text: text.map(str::to_string),
            attrs,
        };
        self
    }

    /// Suppresses the label.
    #[must_use]
    pub fn no_label(mut self) -> Self {
        self.label = LabelOption::Hidden;
        self
    }

    /// Replaces context error messages with a custom one.
    #[must_use]
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error = ErrorOption::Message(message.into());
        self
    }

    /// Suppresses error messages.
    #[must_use]
    pub fn no_error(mut self) -> Self {
        self.error = ErrorOption::Hidden;
        self
    }

    /// Sets whether the field is required.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Sets the choices.
    #[must_use]
    pub fn options(mut self, choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        self.options = Some(
            choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
        );
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Sets the input group prefix.
    #[must_use]
    pub fn prepend(mut self, content: impl Into<String>) -> Self {
        self.prepend = Some(content.into());
        self
    }

    /// Sets the input group suffix.
    #[must_use]
    pub fn append(mut self, content: impl Into<String>) -> Self {
        self.append = Some(content.into());
        self
    }

    /// Sets inline display of checkboxes and radios.
    #[must_use]
    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = Some(inline);
        self
    }

    /// Sets the multiple mode of a select.
    #[must_use]
    pub fn multiple(mut self, multiple: Multiple) -> Self {
        self.multiple = Some(multiple);
        self
    }

    /// Adds an empty leading option to a select.
    #[must_use]
    pub fn empty(mut self, text: impl Into<String>) -> Self {
        self.empty = Some(text.into());
        self
    }

    /// Sets the value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the selected choices of a multiple select.
    #[must_use]
    pub fn selected<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Overrides a template for this field only.
    #[must_use]
    pub fn template(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(name.into(), template.into());
        self
    }

    /// Adds classes to the input.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.attrs.inject_classes(class);
        self
    }

    /// Sets an input attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}

/// Options for [`FormHelper::static_control`](crate::FormHelper::static_control).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticOptions {
    /// Displayed value; taken from the context when `None`.
    pub value: Option<String>,
    /// Emit a hidden input carrying the value.
    pub hidden_field: bool,
    /// Lock the value with the security registrar.
    pub secure: bool,
    /// Attributes of the hidden input.
    pub attrs: HtmlAttributes,
}

impl Default for StaticOptions {
    fn default() -> Self {
        Self {
            value: None,
            hidden_field: true,
            secure: true,
            attrs: HtmlAttributes::new(),
        }
    }
}

impl StaticOptions {
    /// Creates default static control options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the displayed value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets whether a hidden input follows the text.
    #[must_use]
    pub fn hidden_field(mut self, hidden_field: bool) -> Self {
        self.hidden_field = hidden_field;
        self
    }

    /// Sets whether the value is locked.
    #[must_use]
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }
}

/// Options for [`FormHelper::submit`](crate::FormHelper::submit).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitOptions {
    pub attrs: HtmlAttributes,
}

impl SubmitOptions {
    /// Creates empty submit options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds classes to the submit input.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.attrs.inject_classes(class);
        self
    }
}

/// Options for [`FormHelper::button`](crate::FormHelper::button).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonOptions {
    /// Escape the title.
    pub escape: bool,
    /// Attributes of the button; `type` defaults to `submit`.
    pub attrs: HtmlAttributes,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            escape: true,
            attrs: HtmlAttributes::new(),
        }
    }
}

impl ButtonOptions {
    /// Creates default button options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the button type.
    #[must_use]
    pub fn button_type(mut self, kind: impl Into<String>) -> Self {
        self.attrs.set("type", kind);
        self
    }

    /// Sets whether the title is escaped.
    #[must_use]
    pub fn escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Adds classes to the button.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.attrs.inject_classes(class);
        self
    }
}
