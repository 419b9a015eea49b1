//! The Bootstrap form helper.

use tracing::{debug, warn};

use crate::align::{normalize_legacy, resolve_alignment, Align, GridSpec};
use crate::config::HelperConfig;
use crate::context::{FormContext, NullContext};
use crate::error::Result;
use crate::html::{dom_id, field_name_attr, html_escape, humanize, HtmlAttributes};
use crate::options::{
    ButtonOptions, ErrorOption, FieldOptions, FieldType, FormOptions, LabelOption, LabelSpec,
    Multiple, StaticOptions, SubmitOptions, TemplateSource,
};
use crate::security::FieldSecurity;
use crate::templates::{load_file, Slot, StringTemplate};
use crate::widgets::{Widget, WidgetData, WidgetRegistry};

/// Checkbox wrapper used by `multiple = checkbox` selects.
const MULTICHECKBOX_WRAPPER: &str = r#"<div class="checkbox">{{label}}</div>"#;

/// State of the form between `create` and `end`.
struct FormState {
    align: Align,
    grid: Option<GridSpec>,
    context: Box<dyn FormContext>,
}

/// Renders Bootstrap forms.
///
/// One helper renders one request; alignment and grid only live between
/// [`create`](Self::create) and [`end`](Self::end).
///
/// ```rust
/// use oxide_bootstrap_ui::{FieldOptions, FormHelper, FormOptions, HtmlAttributes, NullContext};
///
/// let mut form = FormHelper::default();
/// let open = form
///     .create(NullContext, FormOptions::new().align("horizontal").url("/posts"))
///     .unwrap();
/// assert!(open.contains("form-horizontal"));
///
/// let title = form.input("title", FieldOptions::new().help("Keep it short")).unwrap();
/// assert!(title.contains(r#"class="control-label col-md-2""#));
/// assert!(title.contains(r#"<div class="col-md-6">"#));
///
/// assert_eq!(form.end(&HtmlAttributes::new()).unwrap(), "</form>");
/// ```
pub struct FormHelper {
    config: HelperConfig,
    templater: StringTemplate,
    widgets: WidgetRegistry,
    security: Option<Box<dyn FieldSecurity>>,
    form: Option<FormState>,
    deprecations: Vec<String>,
}

impl std::fmt::Debug for FormHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormHelper")
            .field("config", &self.config)
            .field("widgets", &self.widgets)
            .field("align", &self.alignment())
            .field("grid", &self.grid())
            .field("deprecations", &self.deprecations)
            .finish_non_exhaustive()
    }
}

impl Default for FormHelper {
    fn default() -> Self {
        Self::new(HelperConfig::default())
    }
}

impl FormHelper {
    /// Creates a helper with the Bootstrap widgets.
    pub fn new(config: HelperConfig) -> Self {
        Self::with_widgets(config, WidgetRegistry::bootstrap())
    }

    /// Creates a helper with a custom widget registry.
    pub fn with_widgets(config: HelperConfig, widgets: WidgetRegistry) -> Self {
        Self {
            templater: StringTemplate::new(config.base_templates()),
            config,
            widgets,
            security: None,
            form: None,
            deprecations: Vec::new(),
        }
    }

    /// Registers a widget for a field type.
    #[must_use]
    pub fn with_widget(mut self, name: impl Into<String>, widget: impl Widget + 'static) -> Self {
        self.widgets.add(name, widget);
        self
    }

    /// Enables field registration for tamper protection.
    #[must_use]
    pub fn with_security(mut self, security: impl FieldSecurity + 'static) -> Self {
        self.security = Some(Box::new(security));
        self
    }

    /// The configuration.
    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// The current templates.
    pub fn templates(&self) -> &StringTemplate {
        &self.templater
    }

    /// Layers templates over the current ones.
    pub fn set_templates<I, K, V>(&mut self, templates: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.templater.add(templates);
    }

    /// Alignment of the open form.
    pub fn alignment(&self) -> Option<Align> {
        self.form.as_ref().map(|f| f.align)
    }

    /// Grid of the open form; only set for horizontal forms.
    pub fn grid(&self) -> Option<&GridSpec> {
        self.form.as_ref().and_then(|f| f.grid.as_ref())
    }

    /// Deprecation notices raised so far.
    pub fn deprecations(&self) -> &[String] {
        &self.deprecations
    }

    /// The security registrar, if enabled.
    pub fn field_security(&self) -> Option<&dyn FieldSecurity> {
        self.security.as_deref()
    }

    fn context(&self) -> &dyn FormContext {
        match &self.form {
            Some(state) => state.context.as_ref(),
            None => &NullContext,
        }
    }

    /// Opens a form.
    ///
    /// Resolves the alignment, layers its templates for the lifetime of the
    /// form and returns the opening tag.
    ///
    /// # Errors
    ///
    /// Fails on an invalid `align` value or unreadable template file.
    pub fn create<C>(&mut self, context: C, mut options: FormOptions) -> Result<String>
    where
        C: FormContext + 'static,
    {
        if self.form.is_some() {
            self.close_form();
        }

        if let Some(notice) = normalize_legacy(&mut options) {
            warn!("{notice}");
            self.deprecations.push(notice.to_string());
        }

        let alignment = resolve_alignment(options.align.as_ref(), &options.attrs, &self.config)?;
        debug!(align = %alignment.align, "Resolved form alignment");

        let mut templates = alignment.templates(&self.config);
        match options.templates.take() {
            Some(TemplateSource::Inline(overrides)) => templates.extend(overrides),
            Some(TemplateSource::File(path)) => templates.extend(load_file(&path)?),
            None => {}
        }

        let method = options.method.to_lowercase();
        let mut attrs = HtmlAttributes::new()
            .with("method", if method == "get" { "get" } else { "post" })
            .with("accept-charset", "utf-8");
        let mut form_attrs = options.attrs;
        form_attrs.set_default("role", "form");
        if let Some(class) = alignment.align.form_class() {
            form_attrs.inject_classes(class);
        }
        attrs.extend(&form_attrs);
        if let Some(url) = &options.url {
            attrs.set("action", url);
        }

        self.templater.push();
        self.templater.add(templates);
        if let Some(security) = self.security.as_mut() {
            security.reset();
        }
        self.form = Some(FormState {
            align: alignment.align,
            grid: alignment.grid,
            context: Box::new(context),
        });

        let mut html = self
            .templater
            .format("formStart", &[("attrs", &attrs.to_html())])?;
        if matches!(method.as_str(), "put" | "patch" | "delete") {
            let method_attrs = HtmlAttributes::new().with("value", method.to_uppercase());
            let hidden = self.templater.format(
                "input",
                &[
                    ("type", "hidden"),
                    ("name", "_method"),
                    ("attrs", &method_attrs.to_html()),
                ],
            )?;
            html.push_str(&self.templater.format("hiddenBlock", &[("content", &hidden)])?);
        }
        Ok(html)
    }

    /// Renders a field with its label, help, errors and wrappers.
    ///
    /// Templates changed for this field are restored afterwards.
    ///
    /// # Errors
    ///
    /// Propagates template and widget failures.
    pub fn input(&mut self, field: &str, options: FieldOptions) -> Result<String> {
        self.templater.push();
        let result = self.render_input(field, options);
        self.templater.pop();
        result
    }

    fn render_input(&mut self, field: &str, options: FieldOptions) -> Result<String> {
        let FieldOptions {
            field_type,
            label,
            error,
            required,
            options: choices,
            help,
            prepend,
            append,
            inline,
            multiple,
            empty,
            value,
            selected,
            templates,
            mut attrs,
        } = options;

        let context = self.context();
        let mut field_type = field_type
            .or_else(|| context.field_type(field))
            .unwrap_or_else(|| infer_type(field, choices.is_some()));
        let required = required.unwrap_or_else(|| {
            field_type != FieldType::StaticControl && context.is_required(field)
        });
        let value = value.or_else(|| context.val(field));
        let selected = selected.unwrap_or_else(|| context.values(field));
        let context_errors = context.errors(field);

        let mut label = match label {
            LabelOption::Hidden => None,
            LabelOption::Auto => Some(LabelSpec {
                text: humanize(field),
                attrs: HtmlAttributes::new(),
            }),
            LabelOption::Text(text) => Some(LabelSpec {
                text,
                attrs: HtmlAttributes::new(),
            }),
            LabelOption::Attrs { text, attrs } => Some(LabelSpec {
                text: text.unwrap_or_else(|| humanize(field)),
                attrs,
            }),
        };

        attrs.set_default("id", dom_id(field));
        let id = attrs.get("id").unwrap_or_default().to_string();

        let mut is_inline = false;
        let mut is_multiple = false;
        match field_type {
            FieldType::Checkbox | FieldType::Radio => {
                let inline_class = format!("{}-inline", field_type.as_str());
                is_inline = inline.unwrap_or_else(|| {
                    label
                        .as_ref()
                        .is_some_and(|l| l.attrs.check_classes(&inline_class))
                });
                if is_inline {
                    if let Some(label) = label.as_mut() {
                        label.attrs.inject_classes(&inline_class);
                    }
                }
            }
            FieldType::Select => match multiple {
                Some(Multiple::Checkbox) => {
                    self.templater
                        .add([("checkboxWrapper", MULTICHECKBOX_WRAPPER)]);
                    field_type = FieldType::MultiCheckbox;
                }
                Some(Multiple::List) => is_multiple = true,
                None => {}
            },
            FieldType::MultiSelect => is_multiple = true,
            FieldType::Textarea | FieldType::MultiCheckbox => {}
            _ => {
                let styled = self
                    .templater
                    .get("label")
                    .is_some_and(|t| t.contains("class="));
                if !styled {
                    if let Some(label) = label.as_mut() {
                        label.attrs.inject_classes("control-label");
                    }
                }
            }
        }

        if !self.config.is_form_control_exempt(&field_type) {
            attrs.inject_classes("form-control");
        }

        let help = match help {
            Some(help) => self.templater.format("help", &[("content", &help)])?,
            None => String::new(),
        };

        self.templater.add(templates);

        let messages = match error {
            ErrorOption::Hidden => Vec::new(),
            ErrorOption::Auto => context_errors,
            ErrorOption::Message(message) if !context_errors.is_empty() => vec![message],
            ErrorOption::Message(_) => Vec::new(),
        };
        let has_error = !messages.is_empty();
        if has_error {
            if let Some(class) = &self.config.error_class {
                attrs.inject_classes(class);
            }
        }
        let error_html = messages
            .iter()
            .map(|m| self.templater.format("error", &[("content", &html_escape(m))]))
            .collect::<Result<String>>()?;

        let accepts_required = !matches!(field_type, FieldType::Hidden | FieldType::StaticControl);
        if required && accepts_required {
            attrs.set_default("required", "required");
        }

        let nested = matches!(field_type, FieldType::Checkbox | FieldType::Radio);
        let input_html = if field_type == FieldType::StaticControl {
            self.static_markup(field, value.unwrap_or_default(), true, true, attrs)?
        } else {
            let data = WidgetData {
                name: field_name_attr(field),
                id: id.clone(),
                field_type: field_type.clone(),
                value: value.clone(),
                selected,
                attrs,
                options: choices.unwrap_or_default(),
                label: if nested { label.clone() } else { None },
                inline: is_inline,
                multiple: is_multiple,
                empty,
                prepend,
                append,
                text: String::new(),
                escape: true,
            };
            let html = self
                .widgets
                .get(field_type.widget_name())?
                .render(&data, &self.templater)?;
            let locked =
                (field_type == FieldType::Hidden).then(|| value.as_deref().unwrap_or_default());
            self.register(&data.name, locked);
            html
        };

        if field_type == FieldType::Hidden {
            return Ok(input_html);
        }

        let label_html = if nested {
            input_html.clone()
        } else if let Some(label) = &label {
            let mut label_attrs = label.attrs.clone();
            label_attrs.set_default("for", &id);
            self.templater.format(
                "label",
                &[
                    ("attrs", &label_attrs.to_html()),
                    ("text", &html_escape(&label.text)),
                ],
            )?
        } else {
            String::new()
        };
        let group_input = if field_type == FieldType::Checkbox {
            String::new()
        } else {
            input_html
        };

        let group = self.templater.format(
            &self.templater.resolve(Slot::FormGroup, &field_type),
            &[
                ("input", &group_input),
                ("label", &label_html),
                ("error", &error_html),
                ("help", &help),
            ],
        )?;

        let slot = if has_error {
            Slot::ContainerError
        } else {
            Slot::Container
        };
        self.templater.format(
            &self.templater.resolve(slot, &field_type),
            &[
                ("content", &group),
                ("error", &error_html),
                ("help", &help),
                ("required", if required { " required" } else { "" }),
                ("type", field_type.as_str()),
            ],
        )
    }

    /// Renders a read-only value, by default followed by a hidden input
    /// carrying it.
    ///
    /// # Errors
    ///
    /// Propagates template and widget failures.
    pub fn static_control(&mut self, field: &str, options: StaticOptions) -> Result<String> {
        let StaticOptions {
            value,
            hidden_field,
            secure,
            mut attrs,
        } = options;
        attrs.set_default("id", dom_id(field));
        let value = value
            .or_else(|| self.context().val(field))
            .unwrap_or_default();
        self.static_markup(field, value, hidden_field, secure, attrs)
    }

    fn static_markup(
        &mut self,
        field: &str,
        value: String,
        hidden_field: bool,
        secure: bool,
        attrs: HtmlAttributes,
    ) -> Result<String> {
        let static_html = self
            .templater
            .format("staticControl", &[("content", &html_escape(&value))])?;
        if !hidden_field {
            return Ok(static_html);
        }

        let name = field_name_attr(field);
        if secure {
            self.register(&name, Some(&value));
        }

        let data = WidgetData {
            name,
            id: attrs.get("id").unwrap_or_default().to_string(),
            field_type: FieldType::Hidden,
            value: Some(value),
            attrs,
            ..WidgetData::default()
        };
        let hidden = self
            .widgets
            .get(FieldType::Hidden.widget_name())?
            .render(&data, &self.templater)?;
        Ok(static_html + &hidden)
    }

    /// Renders a submit input in the `submitContainer` template.
    ///
    /// # Errors
    ///
    /// Propagates template failures.
    pub fn submit(&self, caption: &str, options: SubmitOptions) -> Result<String> {
        let mut attrs = HtmlAttributes::new().with("value", caption);
        attrs.extend(&options.attrs);
        let input = self.templater.format(
            "inputSubmit",
            &[("type", "submit"), ("attrs", &attrs.to_html())],
        )?;
        self.templater
            .format("submitContainer", &[("content", &input)])
    }

    /// Renders a `<button>` through the `button` widget.
    ///
    /// # Errors
    ///
    /// Propagates widget failures.
    pub fn button(&self, title: &str, options: ButtonOptions) -> Result<String> {
        let data = WidgetData {
            field_type: FieldType::Custom("button".to_string()),
            attrs: options.attrs,
            text: title.to_string(),
            escape: options.escape,
            ..WidgetData::default()
        };
        self.widgets.get("button")?.render(&data, &self.templater)
    }

    /// Closes the form.
    ///
    /// Emits the security token block when fields were registered, then
    /// restores the templates and clears alignment, grid and context.
    ///
    /// # Errors
    ///
    /// Propagates template and registrar failures. The form is closed
    /// either way.
    pub fn end(&mut self, secure_attributes: &HtmlAttributes) -> Result<String> {
        let result = self.closing_markup(secure_attributes);
        self.close_form();
        result
    }

    fn closing_markup(&self, secure_attributes: &HtmlAttributes) -> Result<String> {
        let mut html = String::new();
        if let Some(security) = &self.security {
            if self.form.is_some() && !security.is_empty() {
                html.push_str(&security.render(&self.templater, secure_attributes)?);
            }
        }
        html.push_str(&self.templater.format("formEnd", &[])?);
        Ok(html)
    }

    fn close_form(&mut self) {
        if self.form.take().is_some() {
            self.templater.pop();
        }
        if let Some(security) = self.security.as_mut() {
            security.reset();
        }
    }

    fn register(&mut self, name: &str, locked_value: Option<&str>) {
        if self.form.is_none() {
            return;
        }
        if let Some(security) = self.security.as_mut() {
            security.register(name, locked_value);
        }
    }
}

fn infer_type(field: &str, has_options: bool) -> FieldType {
    if has_options {
        FieldType::Select
    } else if field.rsplit('.').next().is_some_and(|f| f.contains("password")) {
        FieldType::Password
    } else {
        FieldType::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::AlignOption;
    use crate::context::MapContext;
    use crate::error::FormHelperError;
    use crate::security::FieldLockRegistry;

    fn open(options: FormOptions) -> FormHelper {
        let mut form = FormHelper::default();
        form.create(NullContext, options).unwrap();
        form
    }

    #[test]
    fn test_create_default_form() {
        let mut form = FormHelper::default();
        let html = form
            .create(NullContext, FormOptions::new().url("/posts"))
            .unwrap();
        assert_eq!(
            html,
            r#"<form method="post" accept-charset="utf-8" role="form" action="/posts">"#
        );
        assert_eq!(form.alignment(), Some(Align::Default));
        assert!(form.grid().is_none());
    }

    #[test]
    fn test_create_emulated_method() {
        let mut form = FormHelper::default();
        let html = form
            .create(NullContext, FormOptions::new().method("put"))
            .unwrap();
        assert!(html.starts_with(r#"<form method="post""#));
        assert!(html.contains(r#"<input type="hidden" name="_method" value="PUT"/>"#));
    }

    #[test]
    fn test_default_text_input() {
        let mut form = open(FormOptions::new());
        let html = form.input("title", FieldOptions::new()).unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="form-group">"#,
                r#"<label class="control-label" for="title">Title</label>"#,
                r#"<input type="text" name="title" id="title" class="form-control"/>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_horizontal_grid_classes() {
        let mut form = FormHelper::default();
        let html = form
            .create(NullContext, FormOptions::new().align("horizontal"))
            .unwrap();
        assert!(html.contains(r#"class="form-horizontal""#));

        let html = form.input("title", FieldOptions::new()).unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="form-group">"#,
                r#"<label class="control-label col-md-2" for="title">Title</label>"#,
                r#"<div class="col-md-6">"#,
                r#"<input type="text" name="title" id="title" class="form-control"/>"#,
                "</div></div>"
            )
        );

        let submit = form.submit("Save", SubmitOptions::new()).unwrap();
        assert_eq!(
            submit,
            r#"<div class="col-md-offset-2 col-md-6"><input type="submit" value="Save"/></div>"#
        );
    }

    #[test]
    fn test_legacy_horizontal_flag() {
        let mut form = FormHelper::default();
        form.create(NullContext, FormOptions::new().legacy_horizontal(true))
            .unwrap();
        assert_eq!(form.alignment(), Some(Align::Horizontal));
        assert_eq!(form.deprecations().len(), 1);

        form.create(NullContext, FormOptions::new().align(true)).unwrap();
        assert_eq!(form.alignment(), Some(Align::Horizontal));
        assert_eq!(form.deprecations().len(), 2);
    }

    #[test]
    fn test_alignment_from_form_class() {
        let form = open(FormOptions::new().class("form-inline"));
        assert_eq!(form.alignment(), Some(Align::Inline));
    }

    #[test]
    fn test_invalid_alignment() {
        let mut form = FormHelper::default();
        let err = form
            .create(NullContext, FormOptions::new().align("diagonal"))
            .unwrap_err();
        assert!(matches!(err, FormHelperError::InvalidAlign(name) if name == "diagonal"));
        assert!(form.alignment().is_none());
    }

    #[test]
    fn test_custom_grid() {
        let grid: GridSpec = serde_json::from_str(r#"{"left": 3, "middle": 9}"#).unwrap();
        let mut form = open(FormOptions::new().align(AlignOption::Grid(grid)));
        let html = form.input("title", FieldOptions::new()).unwrap();
        assert!(html.contains(r#"class="control-label col-md-3""#));
        assert!(html.contains(r#"<div class="col-md-9">"#));
    }

    #[test]
    fn test_inline_form() {
        let mut form = FormHelper::default();
        let html = form
            .create(NullContext, FormOptions::new().align("inline"))
            .unwrap();
        assert!(html.contains(r#"class="form-inline""#));

        let html = form
            .input("email", FieldOptions::new().field_type("email"))
            .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<label class="sr-only" for="email">Email</label>"#,
                r#"<input type="email" name="email" id="email" class="form-control"/>"#
            )
        );
    }

    #[test]
    fn test_default_checkbox() {
        let mut form = open(FormOptions::new());
        let html = form
            .input("published", FieldOptions::new().field_type("checkbox"))
            .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="checkbox">"#,
                r#"<input type="hidden" name="published" value="0"/>"#,
                r#"<label for="published">"#,
                r#"<input type="checkbox" name="published" value="1" id="published">"#,
                "Published</label></div>"
            )
        );
    }

    #[test]
    fn test_radio_group() {
        let mut form = open(FormOptions::new());
        let html = form
            .input(
                "color",
                FieldOptions::new()
                    .field_type("radio")
                    .options(vec![("r", "Red"), ("g", "Green")])
                    .value("g"),
            )
            .unwrap();
        assert!(html.starts_with(r#"<div class="form-group">"#));
        assert!(html.contains(r#"<div class="radio"><label for="color-r">"#));
        assert!(html.contains(r#"value="g" id="color-g" checked="checked">Green"#));
    }

    #[test]
    fn test_select_inferred_from_options() {
        let mut form = open(FormOptions::new());
        let html = form
            .input(
                "status",
                FieldOptions::new().options(vec![("draft", "Draft"), ("live", "Live")]),
            )
            .unwrap();
        assert!(html.contains(r#"<label for="status">Status</label>"#));
        assert!(html.contains(r#"<select name="status" id="status" class="form-control">"#));
    }

    #[test]
    fn test_password_inferred_from_name() {
        let mut form = open(FormOptions::new());
        let html = form.input("user.password", FieldOptions::new()).unwrap();
        assert!(html.contains(r#"<input type="password" name="user[password]""#));
    }

    #[test]
    fn test_multicheckbox_wrapper() {
        let mut form = open(FormOptions::new());
        let html = form
            .input(
                "tags",
                FieldOptions::new()
                    .options(vec![("a", "A"), ("b", "B")])
                    .multiple(Multiple::Checkbox),
            )
            .unwrap();
        assert!(html.contains(
            r#"<div class="checkbox"><label for="tags-a"><input type="checkbox" name="tags[]" value="a""#
        ));
        assert!(!html.contains("<label><input"));
        assert_eq!(
            form.templates().get("checkboxWrapper"),
            Some(r#"<div class="checkbox"><label>{{input}}{{label}}</label></div>"#)
        );
    }

    #[test]
    fn test_field_templates_do_not_persist() {
        let mut form = open(FormOptions::new());
        let html = form
            .input(
                "title",
                FieldOptions::new().template("inputContainer", "<section>{{content}}</section>"),
            )
            .unwrap();
        assert!(html.starts_with("<section>"));

        let html = form.input("body", FieldOptions::new()).unwrap();
        assert!(html.starts_with(r#"<div class="form-group">"#));
    }

    #[test]
    fn test_form_templates_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("templates.json");
        std::fs::write(&path, r#"{"inputContainer": "<section>{{content}}</section>"}"#)
            .unwrap();

        let mut form = open(FormOptions::new().templates_file(&path));
        let html = form.input("title", FieldOptions::new()).unwrap();
        assert!(html.starts_with("<section>"));
    }

    #[test]
    fn test_errors_and_required() {
        let context = MapContext::new()
            .error("title", "Too short")
            .required("title");
        let mut form = FormHelper::new(HelperConfig::new().error_class("is-invalid"));
        form.create(context, FormOptions::new()).unwrap();

        let html = form.input("title", FieldOptions::new()).unwrap();
        assert!(html.starts_with(r#"<div class="form-group required has-error">"#));
        assert!(html.contains(r#"class="form-control is-invalid""#));
        assert!(html.contains(r#"required="required""#));
        assert!(html.contains(r#"<p class="help-block">Too short</p>"#));
    }

    #[test]
    fn test_error_message_override() {
        let context = MapContext::new().error("title", "Too short");
        let mut form = FormHelper::default();
        form.create(context, FormOptions::new()).unwrap();

        let html = form
            .input("title", FieldOptions::new().error_message("Pick another"))
            .unwrap();
        assert!(html.contains("Pick another"));
        assert!(!html.contains("Too short"));

        let html = form
            .input("body", FieldOptions::new().error_message("Pick another"))
            .unwrap();
        assert!(!html.contains("Pick another"));
    }

    #[test]
    fn test_help_block() {
        let mut form = open(FormOptions::new());
        let html = form
            .input("title", FieldOptions::new().help("Keep it short"))
            .unwrap();
        assert!(html.ends_with(r#"<p class="help-block">Keep it short</p></div>"#));
    }

    #[test]
    fn test_hidden_input_is_bare() {
        let mut form = open(FormOptions::new());
        let html = form
            .input("id", FieldOptions::new().field_type("hidden").value("3"))
            .unwrap();
        assert_eq!(html, r#"<input type="hidden" name="id" id="id" value="3"/>"#);
    }

    #[test]
    fn test_static_control_with_security() {
        let mut form = FormHelper::default().with_security(FieldLockRegistry::new());
        form.create(MapContext::new().value("id", "5"), FormOptions::new())
            .unwrap();

        let html = form.static_control("id", StaticOptions::new()).unwrap();
        assert_eq!(
            html,
            r#"<p class="form-control-static">5</p><input type="hidden" name="id" id="id" value="5"/>"#
        );
        assert!(!form.field_security().unwrap().is_empty());

        let html = form.end(&HtmlAttributes::new()).unwrap();
        assert!(html.contains("_Token[fields]"));
        assert!(html.ends_with("</form>"));
        assert!(form.field_security().unwrap().is_empty());
    }

    #[test]
    fn test_static_control_without_hidden_field() {
        let mut form = open(FormOptions::new());
        let html = form
            .static_control("id", StaticOptions::new().value("5").hidden_field(false))
            .unwrap();
        assert_eq!(html, r#"<p class="form-control-static">5</p>"#);
    }

    #[test]
    fn test_end_resets_alignment() {
        let mut form = FormHelper::default();
        form.create(NullContext, FormOptions::new().align("horizontal"))
            .unwrap();
        assert_eq!(form.end(&HtmlAttributes::new()).unwrap(), "</form>");
        assert!(form.alignment().is_none());
        assert_eq!(form.templates().depth(), 0);

        form.create(NullContext, FormOptions::new()).unwrap();
        assert_eq!(form.alignment(), Some(Align::Default));
        assert_eq!(
            form.templates().get("label"),
            Some("<label{{attrs}}>{{text}}</label>")
        );
    }

    #[test]
    fn test_create_closes_open_form() {
        let mut form = open(FormOptions::new().align("horizontal"));
        form.create(NullContext, FormOptions::new()).unwrap();
        assert_eq!(form.templates().depth(), 1);
        assert_eq!(form.alignment(), Some(Align::Default));
    }

    struct ColorWidget;

    impl Widget for ColorWidget {
        fn render(&self, data: &WidgetData, _templates: &StringTemplate) -> Result<String> {
            Ok(format!(r#"<input type="color" name="{}">"#, data.name))
        }
    }

    #[test]
    fn test_custom_widget() {
        let mut form = FormHelper::default().with_widget("color", ColorWidget);
        form.create(NullContext, FormOptions::new()).unwrap();
        let html = form
            .input("tint", FieldOptions::new().field_type("color"))
            .unwrap();
        assert!(html.contains(r#"<input type="color" name="tint">"#));
        assert!(html.contains(r#"<label class="control-label" for="tint">Tint</label>"#));
    }

    #[test]
    fn test_custom_type_templates() {
        let mut form = FormHelper::default().with_widget("color", ColorWidget);
        form.create(NullContext, FormOptions::new()).unwrap();
        form.set_templates([("colorContainer", "<section>{{content}}</section>")]);
        let html = form
            .input("tint", FieldOptions::new().field_type("color"))
            .unwrap();
        assert!(html.starts_with("<section>"));
        assert!(html.ends_with("</section>"));
    }

    #[test]
    fn test_horizontal_checkbox() {
        let mut form = open(FormOptions::new().align("horizontal"));
        let html = form
            .input("published", FieldOptions::new().field_type("checkbox"))
            .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="form-group">"#,
                r#"<div class="col-md-offset-2 col-md-6"><div class="checkbox">"#,
                r#"<input type="hidden" name="published" value="0"/>"#,
                r#"<label for="published">"#,
                r#"<input type="checkbox" name="published" value="1" id="published">"#,
                "Published</label></div></div></div>"
            )
        );
    }

    #[test]
    fn test_horizontal_radio() {
        let mut form = open(FormOptions::new().align("horizontal"));
        let html = form
            .input(
                "color",
                FieldOptions::new()
                    .field_type("radio")
                    .options(vec![("r", "Red")]),
            )
            .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="form-group">"#,
                r#"<div class="col-md-offset-2 col-md-6"><div class="radio">"#,
                r#"<input type="hidden" name="color" value=""/>"#,
                r#"<label for="color-r">"#,
                r#"<input type="radio" name="color" value="r" id="color-r">"#,
                "Red</label></div></div></div>"
            )
        );
    }

    #[test]
    fn test_inline_checkbox_from_label_class() {
        let mut form = open(FormOptions::new());
        let label_attrs = HtmlAttributes::new().with("class", "checkbox-inline");
        let html = form
            .input(
                "published",
                FieldOptions::new()
                    .field_type("checkbox")
                    .label_attrs(None, label_attrs),
            )
            .unwrap();
        assert!(html.contains(
            r#"<label class="checkbox-inline" for="published"><input type="checkbox""#
        ));
    }

    #[test]
    fn test_inline_radio_injects_class() {
        let mut form = open(FormOptions::new());
        let html = form
            .input(
                "color",
                FieldOptions::new()
                    .field_type("radio")
                    .options(vec![("r", "Red"), ("g", "Green")])
                    .inline(true),
            )
            .unwrap();
        assert!(html.contains(r#"<label class="radio-inline" for="color-r">"#));
        assert!(html.contains(r#"<label class="radio-inline" for="color-g">"#));
        assert!(!html.contains(r#"<div class="radio">"#));
    }

    #[test]
    fn test_checkbox_in_inline_form() {
        let mut form = open(FormOptions::new().align("inline"));
        let html = form
            .input("remember", FieldOptions::new().field_type("checkbox"))
            .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<input type="hidden" name="remember" value="0"/>"#,
                r#"<label for="remember">"#,
                r#"<input type="checkbox" name="remember" value="1" id="remember">"#,
                "Remember</label>"
            )
        );
    }

    #[test]
    fn test_input_registers_fields() {
        let mut form = FormHelper::default().with_security(FieldLockRegistry::new());
        form.create(NullContext, FormOptions::new()).unwrap();
        form.input("title", FieldOptions::new()).unwrap();
        form.input("id", FieldOptions::new().field_type("hidden").value("3"))
            .unwrap();

        let html = form.end(&HtmlAttributes::new()).unwrap();
        assert!(html.contains("&quot;fields&quot;:[&quot;id&quot;,&quot;title&quot;]"));
        assert!(html.contains("&quot;locked&quot;:{&quot;id&quot;:&quot;3&quot;}"));
    }

    #[test]
    fn test_static_control_input_is_not_required() {
        let context = MapContext::new().value("id", "5").required("id");
        let mut form = FormHelper::default();
        form.create(context, FormOptions::new()).unwrap();
        let html = form
            .input("id", FieldOptions::new().field_type("staticControl"))
            .unwrap();
        assert!(html.starts_with(r#"<div class="form-group">"#));
        assert!(html.contains(
            r#"<p class="form-control-static">5</p><input type="hidden" name="id" id="id" value="5"/>"#
        ));
        assert!(!html.contains("required"));
    }

    #[test]
    fn test_multiple_select_values_with_commas() {
        let context = MapContext::new().selected("tags", ["a,b"]);
        let mut form = FormHelper::default();
        form.create(context, FormOptions::new()).unwrap();
        let choices = vec![("a,b", "AB"), ("a", "A")];
        let html = form
            .input(
                "tags",
                FieldOptions::new()
                    .options(choices.clone())
                    .multiple(Multiple::List),
            )
            .unwrap();
        assert!(html.contains(r#"<option value="a,b" selected="selected">AB</option>"#));
        assert!(html.contains(r#"<option value="a">A</option>"#));

        let html = form
            .input(
                "tags",
                FieldOptions::new()
                    .options(choices)
                    .multiple(Multiple::List)
                    .selected(["a"]),
            )
            .unwrap();
        assert!(html.contains(r#"<option value="a,b">AB</option>"#));
        assert!(html.contains(r#"<option value="a" selected="selected">A</option>"#));
    }

    #[test]
    fn test_button_with_attributes() {
        let form = FormHelper::default();
        let mut options = ButtonOptions::new().button_type("reset").class("btn-primary");
        options.attrs.set("data-id", "7");
        let html = form.button("Reset", options).unwrap();
        assert!(html.starts_with("<button"));
        assert!(html.contains(r#"type="reset""#));
        assert!(html.contains(r#"class="btn-primary btn""#));
        assert!(html.contains(r#"data-id="7""#));
        assert!(html.ends_with(">Reset</button>"));
    }

    #[test]
    fn test_button() {
        let form = FormHelper::default();
        let html = form.button("Go", ButtonOptions::new()).unwrap();
        assert!(html.contains(r#"class="btn btn-default""#));
        assert!(html.contains(">Go</button>"));
    }
}
