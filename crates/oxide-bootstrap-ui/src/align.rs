//! Form alignment and grid handling.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use serde::Deserialize;

use crate::config::HelperConfig;
use crate::error::FormHelperError;
use crate::html::HtmlAttributes;
use crate::options::FormOptions;

/// Layout style of a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Stacked labels and inputs.
    #[default]
    Default,
    /// Labels beside inputs on a grid.
    Horizontal,
    /// Compact single line.
    Inline,
}

impl Align {
    /// Returns the alignment name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Horizontal => "horizontal",
            Self::Inline => "inline",
        }
    }

    /// Class added to the form tag, if any.
    pub const fn form_class(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Horizontal => Some("form-horizontal"),
            Self::Inline => Some("form-inline"),
        }
    }
}

impl FromStr for Align {
    type Err = FormHelperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "horizontal" => Ok(Self::Horizontal),
            "inline" => Ok(Self::Inline),
            other => Err(FormHelperError::InvalidAlign(other.to_string())),
        }
    }
}

impl std::fmt::Display for Align {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value accepted by the `align` option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AlignOption {
    /// Legacy boolean; `true` means horizontal.
    Flag(bool),
    /// Alignment name.
    Named(String),
    /// Horizontal alignment with an explicit grid.
    Grid(GridSpec),
}

impl From<Align> for AlignOption {
    fn from(align: Align) -> Self {
        Self::Named(align.as_str().to_string())
    }
}

impl From<bool> for AlignOption {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&str> for AlignOption {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<GridSpec> for AlignOption {
    fn from(grid: GridSpec) -> Self {
        Self::Grid(grid)
    }
}

/// A section of a horizontal form row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Label column.
    Left,
    /// Input column.
    Middle,
    /// Trailing column.
    Right,
}

/// Column widths per position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridColumns {
    pub left: Option<u8>,
    pub middle: Option<u8>,
    pub right: Option<u8>,
}

impl GridColumns {
    /// Creates columns with all three widths set.
    pub const fn new(left: u8, middle: u8, right: u8) -> Self {
        Self {
            left: Some(left),
            middle: Some(middle),
            right: Some(right),
        }
    }

    /// Width for a position.
    pub const fn get(&self, position: Position) -> Option<u8> {
        match position {
            Position::Left => self.left,
            Position::Middle => self.middle,
            Position::Right => self.right,
        }
    }
}

/// Bootstrap screen size, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Class infix for the breakpoint.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

/// Column allocation of a horizontal form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GridSpec {
    /// Widths applied at the `md` breakpoint.
    Columns(GridColumns),
    /// Widths per breakpoint.
    Breakpoints(BTreeMap<Breakpoint, GridColumns>),
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::Columns(GridColumns::new(2, 6, 4))
    }
}

impl GridSpec {
    /// Returns the grid class for a position, e.g. `col-md-2` or with
    /// `offset` set `col-md-offset-2`. Empty when no breakpoint defines the
    /// position.
    pub fn class(&self, position: Position, offset: bool) -> String {
        let class = |screen: &str, width: u8| {
            if offset {
                format!("col-{screen}-offset-{width}")
            } else {
                format!("col-{screen}-{width}")
            }
        };
        match self {
            Self::Columns(columns) => columns
                .get(position)
                .map(|width| class(Breakpoint::Md.as_str(), width))
                .unwrap_or_default(),
            Self::Breakpoints(screens) => screens
                .iter()
                .filter_map(|(screen, columns)| {
                    columns.get(position).map(|width| class(screen.as_str(), width))
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Alignment chosen for one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormAlignment {
    pub align: Align,
    /// Only set for horizontal forms.
    pub grid: Option<GridSpec>,
}

impl FormAlignment {
    fn horizontal(grid: GridSpec) -> Self {
        Self {
            align: Align::Horizontal,
            grid: Some(grid),
        }
    }

    /// The configured template set for this alignment with grid classes
    /// filled into the `%s` slots.
    pub fn templates(&self, config: &HelperConfig) -> HashMap<String, String> {
        let mut templates = config.template_set(self.align);
        let Some(grid) = &self.grid else {
            return templates;
        };

        let left = grid.class(Position::Left, false);
        let middle = grid.class(Position::Middle, false);
        let offset = [grid.class(Position::Left, true), middle.clone()]
            .into_iter()
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        fill_slot(&mut templates, "label", &left);
        fill_slot(&mut templates, "formGroup", &middle);
        for name in ["checkboxFormGroup", "radioFormGroup", "submitContainer"] {
            fill_slot(&mut templates, name, &offset);
        }
        templates
    }
}

fn fill_slot(templates: &mut HashMap<String, String>, name: &str, class: &str) {
    if let Some(template) = templates.get_mut(name) {
        *template = template.replacen("%s", class, 1);
    }
}

/// Moves legacy alignment options to `align`.
///
/// A `horizontal` option is moved to `align` (`true` becoming
/// `"horizontal"`) and a boolean `align` is translated the same way.
/// Returns the deprecation notice when a legacy form was used.
pub fn normalize_legacy(options: &mut FormOptions) -> Option<&'static str> {
    if let Some(legacy) = options.horizontal.take() {
        options.align = from_flag(legacy);
        return Some("The `horizontal` option is deprecated. Use `align` instead.");
    }
    if let Some(AlignOption::Flag(_)) = options.align {
        options.align = options.align.take().and_then(from_flag);
        return Some("Boolean `align` values are deprecated. Use `align: \"horizontal\"` instead.");
    }
    None
}

fn from_flag(option: AlignOption) -> Option<AlignOption> {
    match option {
        AlignOption::Flag(true) => Some(Align::Horizontal.into()),
        AlignOption::Flag(false) => None,
        other => Some(other),
    }
}

/// Picks the alignment of a form.
///
/// Without an explicit option the form classes are checked for
/// `form-horizontal` and `form-inline`, then the configured default is used.
///
/// # Errors
///
/// Returns [`FormHelperError::InvalidAlign`] for an unknown alignment name.
pub fn resolve_alignment(
    option: Option<&AlignOption>,
    form_attrs: &HtmlAttributes,
    config: &HelperConfig,
) -> Result<FormAlignment, FormHelperError> {
    let align = match option {
        Some(AlignOption::Grid(grid)) => return Ok(FormAlignment::horizontal(grid.clone())),
        Some(AlignOption::Named(name)) if !name.is_empty() => name.parse()?,
        Some(AlignOption::Flag(true)) => Align::Horizontal,
        _ => detect_alignment(form_attrs, config.align),
    };

    Ok(match align {
        Align::Horizontal => FormAlignment::horizontal(config.grid.clone()),
        other => FormAlignment {
            align: other,
            grid: None,
        },
    })
}

fn detect_alignment(form_attrs: &HtmlAttributes, fallback: Align) -> Align {
    [Align::Horizontal, Align::Inline]
        .into_iter()
        .find(|align| {
            align
                .form_class()
                .is_some_and(|class| form_attrs.check_classes(class))
        })
        .unwrap_or(fallback)
}
