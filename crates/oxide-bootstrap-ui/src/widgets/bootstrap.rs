//! Bootstrap widgets.

use std::sync::LazyLock;

use ironhtml::html;
use regex::Regex;

use super::{Widget, WidgetData};
use crate::error::Result;
use crate::html::{dom_id, html_escape, HtmlAttributes};
use crate::templates::StringTemplate;

static BUTTON_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bbtn-(default|primary|success|info|warning|danger|link)\b")
        .expect("button style pattern is valid")
});

fn hidden_input(templates: &StringTemplate, name: &str, value: &str) -> Result<String> {
    let attrs = HtmlAttributes::new().with("value", value);
    templates.format(
        "input",
        &[("type", "hidden"), ("name", name), ("attrs", &attrs.to_html())],
    )
}

fn option_id(data: &WidgetData, value: &str) -> String {
    let suffix = dom_id(value);
    if suffix.is_empty() {
        data.id.clone()
    } else {
        format!("{}-{suffix}", data.id)
    }
}

fn nesting_label(
    templates: &StringTemplate,
    label_attrs: Option<&HtmlAttributes>,
    for_id: &str,
    input: &str,
    text: &str,
    hidden: &str,
) -> Result<String> {
    let mut attrs = label_attrs.cloned().unwrap_or_default();
    attrs.set_default("for", for_id);
    templates.format(
        "nestingLabel",
        &[
            ("hidden", hidden),
            ("input", input),
            ("text", &html_escape(text)),
            ("attrs", &attrs.to_html()),
        ],
    )
}

/// Plain `<input>` with optional input group addons.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicWidget;

impl BasicWidget {
    fn addon(templates: &StringTemplate, content: &str) -> Result<String> {
        let class = if content.trim_start().starts_with("<button") {
            "input-group-btn"
        } else {
            "input-group-addon"
        };
        templates.format("inputGroupAddon", &[("class", class), ("content", content)])
    }
}

impl Widget for BasicWidget {
    fn render(&self, data: &WidgetData, templates: &StringTemplate) -> Result<String> {
        let mut attrs = data.attrs.clone();
        if let Some(value) = &data.value {
            attrs.set("value", value);
        }
        let input = templates.format(
            "input",
            &[
                ("type", data.field_type.as_str()),
                ("name", &data.name),
                ("attrs", &attrs.to_html()),
            ],
        )?;

        if data.prepend.is_none() && data.append.is_none() {
            return Ok(input);
        }

        let prepend = data
            .prepend
            .as_deref()
            .map(|p| Self::addon(templates, p))
            .transpose()?
            .unwrap_or_default();
        let append = data
            .append
            .as_deref()
            .map(|a| Self::addon(templates, a))
            .transpose()?
            .unwrap_or_default();

        templates.format(
            "inputGroupContainer",
            &[("prepend", &prepend), ("content", &input), ("append", &append)],
        )
    }
}

/// `<button>` with Bootstrap button classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonWidget;

impl Widget for ButtonWidget {
    fn render(&self, data: &WidgetData, _templates: &StringTemplate) -> Result<String> {
        let mut attrs = data.attrs.clone();
        let styled = attrs
            .get("class")
            .is_some_and(|class| BUTTON_STYLE.is_match(class));
        attrs.inject_classes(if styled { "btn" } else { "btn btn-default" });
        let kind = attrs.remove("type").unwrap_or_else(|| "submit".to_string());

        let mut button = html! { button.type_(#kind) };
        for (key, value) in attrs.iter() {
            button = button.attr(key.to_string(), value);
        }
        let button = if data.escape {
            button.text(&data.text)
        } else {
            button.raw(&data.text)
        };
        Ok(button.render())
    }
}

/// Checkbox nested in its label, preceded by a hidden `0` input.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxWidget;

impl Widget for CheckboxWidget {
    fn render(&self, data: &WidgetData, templates: &StringTemplate) -> Result<String> {
        let mut attrs = data.attrs.clone();
        let checked = data
            .value
            .as_deref()
            .is_some_and(|v| matches!(v, "1" | "true" | "on"));
        if checked {
            attrs.set("checked", "checked");
        }

        let hidden = hidden_input(templates, &data.name, "0")?;
        let input = templates.format(
            "checkbox",
            &[("name", &data.name), ("value", "1"), ("attrs", &attrs.to_html())],
        )?;

        match &data.label {
            Some(label) => nesting_label(
                templates,
                Some(&label.attrs),
                &data.id,
                &input,
                &label.text,
                &hidden,
            ),
            None => Ok(format!("{hidden}{input}")),
        }
    }
}

/// Radio group; each input is nested in its own label.
#[derive(Debug, Clone, Copy, Default)]
pub struct RadioWidget;

impl Widget for RadioWidget {
    fn render(&self, data: &WidgetData, templates: &StringTemplate) -> Result<String> {
        let mut html = hidden_input(templates, &data.name, "")?;
        let label_attrs = data.label.as_ref().map(|l| &l.attrs);

        for (value, text) in &data.options {
            let id = option_id(data, value);
            let mut attrs = data.attrs.clone();
            attrs.set("id", &id);
            if data.is_selected(value) {
                attrs.set("checked", "checked");
            }
            let input = templates.format(
                "radio",
                &[
                    ("name", &data.name),
                    ("value", &html_escape(value)),
                    ("attrs", &attrs.to_html()),
                ],
            )?;
            let label = nesting_label(templates, label_attrs, &id, &input, text, "")?;
            if data.inline {
                html.push_str(&label);
            } else {
                html.push_str(&templates.format("radioWrapper", &[("label", &label)])?);
            }
        }

        Ok(html)
    }
}

/// `<select>` box, single or multiple.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectBoxWidget;

impl Widget for SelectBoxWidget {
    fn render(&self, data: &WidgetData, templates: &StringTemplate) -> Result<String> {
        let mut content = String::new();

        if let Some(empty) = &data.empty {
            content.push_str(&templates.format(
                "option",
                &[("value", ""), ("text", &html_escape(empty))],
            )?);
        }

        for (value, text) in &data.options {
            let attrs = if data.is_selected(value) {
                HtmlAttributes::new().with("selected", "selected")
            } else {
                HtmlAttributes::new()
            };
            content.push_str(&templates.format(
                "option",
                &[
                    ("value", &html_escape(value)),
                    ("text", &html_escape(text)),
                    ("attrs", &attrs.to_html()),
                ],
            )?);
        }

        let template = if data.multiple {
            "selectMultiple"
        } else {
            "select"
        };
        templates.format(
            template,
            &[
                ("name", &data.name),
                ("attrs", &data.attrs.to_html()),
                ("content", &content),
            ],
        )
    }
}

/// List of checkboxes sharing one name, each in a `checkboxWrapper`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiCheckboxWidget;

impl Widget for MultiCheckboxWidget {
    fn render(&self, data: &WidgetData, templates: &StringTemplate) -> Result<String> {
        let mut html = hidden_input(templates, &data.name, "")?;
        let name = format!("{}[]", data.name);

        for (value, text) in &data.options {
            let id = option_id(data, value);
            let mut attrs = data.attrs.clone();
            attrs.set("id", &id);
            if data.is_selected(value) {
                attrs.set("checked", "checked");
            }
            let input = templates.format(
                "checkbox",
                &[
                    ("name", &name),
                    ("value", &html_escape(value)),
                    ("attrs", &attrs.to_html()),
                ],
            )?;
            let label = nesting_label(templates, None, &id, &input, text, "")?;
            html.push_str(
                &templates.format("checkboxWrapper", &[("input", &input), ("label", &label)])?,
            );
        }

        Ok(html)
    }
}

/// `<textarea>` with escaped content.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextareaWidget;

impl Widget for TextareaWidget {
    fn render(&self, data: &WidgetData, templates: &StringTemplate) -> Result<String> {
        let value = data.value.as_deref().map(html_escape).unwrap_or_default();
        templates.format(
            "textarea",
            &[
                ("name", &data.name),
                ("value", &value),
                ("attrs", &data.attrs.to_html()),
            ],
        )
    }
}
