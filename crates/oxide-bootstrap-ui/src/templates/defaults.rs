//! Built-in template tables.

use std::collections::HashMap;

use crate::align::Align;

/// Host-level templates every other layer builds on.
const BASE: &[(&str, &str)] = &[
    ("button", "<button{{attrs}}>{{text}}</button>"),
    (
        "checkbox",
        r#"<input type="checkbox" name="{{name}}" value="{{value}}"{{attrs}}>"#,
    ),
    ("checkboxFormGroup", "{{label}}"),
    ("checkboxWrapper", r#"<div class="checkbox">{{label}}</div>"#),
    ("error", r#"<div class="error-message">{{content}}</div>"#),
    ("formStart", "<form{{attrs}}>"),
    ("formEnd", "</form>"),
    ("formGroup", "{{label}}{{input}}"),
    ("hiddenBlock", r#"<div style="display:none;">{{content}}</div>"#),
    (
        "input",
        r#"<input type="{{type}}" name="{{name}}"{{attrs}}/>"#,
    ),
    ("inputSubmit", r#"<input type="{{type}}"{{attrs}}/>"#),
    (
        "inputContainer",
        r#"<div class="input {{type}}{{required}}">{{content}}</div>"#,
    ),
    (
        "inputContainerError",
        r#"<div class="input {{type}}{{required}} error">{{content}}{{error}}</div>"#,
    ),
    ("label", "<label{{attrs}}>{{text}}</label>"),
    (
        "nestingLabel",
        "{{hidden}}<label{{attrs}}>{{input}}{{text}}</label>",
    ),
    (
        "option",
        r#"<option value="{{value}}"{{attrs}}>{{text}}</option>"#,
    ),
    (
        "select",
        r#"<select name="{{name}}"{{attrs}}>{{content}}</select>"#,
    ),
    (
        "selectMultiple",
        r#"<select name="{{name}}[]" multiple="multiple"{{attrs}}>{{content}}</select>"#,
    ),
    (
        "radio",
        r#"<input type="radio" name="{{name}}" value="{{value}}"{{attrs}}>"#,
    ),
    ("radioWrapper", "{{label}}"),
    (
        "textarea",
        r#"<textarea name="{{name}}"{{attrs}}>{{value}}</textarea>"#,
    ),
    ("submitContainer", r#"<div class="submit">{{content}}</div>"#),
];

/// Bootstrap replacements for the host templates.
const BOOTSTRAP: &[(&str, &str)] = &[
    ("error", r#"<p class="help-block">{{content}}</p>"#),
    ("help", r#"<p class="help-block">{{content}}</p>"#),
    (
        "inputContainer",
        r#"<div class="form-group{{required}}">{{content}}{{help}}</div>"#,
    ),
    (
        "inputContainerError",
        r#"<div class="form-group{{required}} has-error">{{content}}{{error}}{{help}}</div>"#,
    ),
    (
        "checkboxWrapper",
        r#"<div class="checkbox"><label>{{input}}{{label}}</label></div>"#,
    ),
    ("radioFormGroup", "{{input}}"),
    ("radioWrapper", r#"<div class="radio">{{label}}</div>"#),
    (
        "staticControl",
        r#"<p class="form-control-static">{{content}}</p>"#,
    ),
    (
        "inputGroupContainer",
        r#"<div class="input-group">{{prepend}}{{content}}{{append}}</div>"#,
    ),
    ("inputGroupAddon", r#"<span class="{{class}}">{{content}}</span>"#),
];

const SET_DEFAULT: &[(&str, &str)] = &[
    (
        "checkboxContainer",
        r#"<div class="checkbox">{{content}}{{help}}</div>"#,
    ),
    (
        "checkboxContainerError",
        r#"<div class="checkbox has-error">{{content}}{{error}}{{help}}</div>"#,
    ),
];

const SET_INLINE: &[(&str, &str)] = &[
    ("label", r#"<label class="sr-only"{{attrs}}>{{text}}</label>"#),
    ("inputContainer", "{{content}}"),
];

/// Horizontal templates carry a `%s` slot for the computed grid classes.
const SET_HORIZONTAL: &[(&str, &str)] = &[
    (
        "label",
        r#"<label class="control-label %s"{{attrs}}>{{text}}</label>"#,
    ),
    (
        "formGroup",
        r#"{{label}}<div class="%s">{{input}}{{error}}{{help}}</div>"#,
    ),
    (
        "checkboxFormGroup",
        r#"<div class="%s"><div class="checkbox">{{label}}</div>{{error}}{{help}}</div>"#,
    ),
    (
        "radioFormGroup",
        r#"<div class="%s"><div class="radio">{{label}}</div>{{error}}{{help}}</div>"#,
    ),
    ("radioWrapper", "{{label}}"),
    ("submitContainer", r#"<div class="%s">{{content}}</div>"#),
    (
        "inputContainer",
        r#"<div class="form-group{{required}}">{{content}}</div>"#,
    ),
    (
        "inputContainerError",
        r#"<div class="form-group{{required}} has-error">{{content}}</div>"#,
    ),
];

fn to_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Host templates with the Bootstrap replacements applied.
pub fn bootstrap_templates() -> HashMap<String, String> {
    let mut templates = to_map(BASE);
    templates.extend(to_map(BOOTSTRAP));
    templates
}

/// Templates applied for the duration of a form with the given alignment.
pub fn template_set(align: Align) -> HashMap<String, String> {
    match align {
        Align::Default => to_map(SET_DEFAULT),
        Align::Inline => to_map(SET_INLINE),
        Align::Horizontal => to_map(SET_HORIZONTAL),
    }
}
