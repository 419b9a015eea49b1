//! # oxide-bootstrap-ui
//!
//! Bootstrap form rendering driven by string templates.
//!
//! This crate provides:
//! - Default, horizontal and inline form alignment with grid classes
//! - A layered template dictionary with per-form and per-field overrides
//! - Bootstrap widgets for inputs, checkboxes, radios, selects and buttons
//! - Value and error binding through a [`FormContext`]
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_bootstrap_ui::{
//!     FieldOptions, FormHelper, FormOptions, HtmlAttributes, MapContext, SubmitOptions,
//! };
//!
//! let context = MapContext::new()
//!     .value("title", "Hello")
//!     .error("body", "Body is required");
//!
//! let mut form = FormHelper::default();
//! let mut html = form
//!     .create(context, FormOptions::new().align("horizontal").url("/posts"))
//!     .unwrap();
//! html.push_str(&form.input("title", FieldOptions::new()).unwrap());
//! html.push_str(&form.input("body", FieldOptions::new().field_type("textarea")).unwrap());
//! html.push_str(&form.submit("Save", SubmitOptions::new()).unwrap());
//! html.push_str(&form.end(&HtmlAttributes::new()).unwrap());
//!
//! assert!(html.contains(r#"value="Hello""#));
//! assert!(html.contains("has-error"));
//! ```
//!
//! ## Configuration
//!
//! [`HelperConfig`] sets the default alignment, grid and template
//! overrides, and can be loaded from JSON:
//!
//! ```rust
//! use oxide_bootstrap_ui::{FormHelper, HelperConfig};
//!
//! let config = HelperConfig::from_json_str(r#"{"align": "inline"}"#).unwrap();
//! let form = FormHelper::new(config);
//! assert!(form.alignment().is_none());
//! ```

mod align;
mod config;
mod context;
mod error;
mod helper;
pub mod html;
mod options;
mod security;
pub mod templates;
pub mod widgets;

pub use align::{
    normalize_legacy, resolve_alignment, Align, AlignOption, Breakpoint, FormAlignment,
    GridColumns, GridSpec, Position,
};
pub use config::HelperConfig;
pub use context::{FormContext, MapContext, NullContext};
pub use error::{FormHelperError, Result, ValidationErrors};
pub use helper::FormHelper;
pub use html::HtmlAttributes;
pub use options::{
    ButtonOptions, ErrorOption, FieldOptions, FieldType, FormOptions, LabelOption, LabelSpec,
    Multiple, StaticOptions, SubmitOptions, TemplateSource,
};
pub use security::{FieldLockRegistry, FieldSecurity};
pub use templates::StringTemplate;
pub use widgets::{Widget, WidgetData, WidgetRegistry};
