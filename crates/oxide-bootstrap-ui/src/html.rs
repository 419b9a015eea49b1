//! HTML attribute handling and naming helpers.

/// Ordered set of HTML attributes.
///
/// Insertion order is kept so rendered markup is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttributes {
    attrs: Vec<(String, String)>,
}

impl HtmlAttributes {
    /// Creates new empty attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Sets an attribute only when it is not present yet.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !self.contains(&key) {
            self.attrs.push((key, value.into()));
        }
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Removes an attribute and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|(k, _)| k == key)?;
        Some(self.attrs.remove(pos).1)
    }

    /// Returns whether the attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.attrs.iter().any(|(k, _)| k == key)
    }

    /// Returns whether no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterates over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copies every attribute of `other` over this set.
    pub fn extend(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Appends space separated classes to the `class` attribute, skipping
    /// classes that are already present.
    pub fn inject_classes(&mut self, classes: &str) {
        let mut current: Vec<String> = self
            .get("class")
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        for class in classes.split_whitespace() {
            if !current.iter().any(|c| c == class) {
                current.push(class.to_string());
            }
        }
        if !current.is_empty() {
            self.set("class", current.join(" "));
        }
    }

    /// Returns whether every one of the space separated classes is present.
    pub fn check_classes(&self, classes: &str) -> bool {
        let Some(current) = self.get("class") else {
            return false;
        };
        classes
            .split_whitespace()
            .all(|wanted| current.split_whitespace().any(|c| c == wanted))
    }

    /// Renders the attributes as ` key="value"` pairs with escaped values.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Builds a DOM id from a dotted field path (`user.first_name` ->
/// `user-first-name`).
pub fn dom_id(value: &str) -> String {
    let mut id = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            id.push(c.to_ascii_lowercase());
        } else if !id.ends_with('-') {
            id.push('-');
        }
    }
    id.trim_matches('-').to_string()
}

/// Builds the `name` attribute from a dotted field path (`user.first_name`
/// -> `user[first_name]`).
pub fn field_name_attr(field: &str) -> String {
    let mut parts = field.split('.');
    let mut name = parts.next().unwrap_or_default().to_string();
    for part in parts {
        name.push('[');
        name.push_str(part);
        name.push(']');
    }
    name
}

/// Builds a human readable label from a dotted field path
/// (`user.first_name` -> `First Name`, `author_id` -> `Author`).
pub fn humanize(field: &str) -> String {
    let last = field.rsplit('.').next().unwrap_or(field);
    let last = last.strip_suffix("_id").unwrap_or(last);
    last.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
