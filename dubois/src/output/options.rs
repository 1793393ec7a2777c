//! Option types accepted by the table builder.
//!
//! - [`TableOptions`]: table-wide visual settings, merged field by field
//! - [`RenderOptions`]: constructor options, forwarded from the caller as-is

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::style::Length;
use crate::error::Error;
use crate::Result;

/// Column sizing algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableLayout {
    /// Widths follow content, bounded by any explicit column widths
    #[default]
    Auto,
    /// Widths come only from the first row and explicit column widths
    Fixed,
}

/// Font weight for column labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Bolder,
    Lighter,
}

/// Case transform for column labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    Uppercase,
    Lowercase,
    Capitalize,
}

/// Table-wide visual options.
///
/// Every field is optional. Applying a set of options onto another only
/// overrides the fields that are set, so options can be layered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_font_size: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_width: Option<Length>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_layout: Option<TableLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_labels_font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_labels_text_transform: Option<TextTransform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_body_hlines_color: Option<String>,
}

impl TableOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_background_color(mut self, color: impl Into<String>) -> Self {
        self.table_background_color = Some(color.into());
        self
    }

    pub fn table_font_size(mut self, size: Length) -> Self {
        self.table_font_size = Some(size);
        self
    }

    pub fn heading_background_color(mut self, color: impl Into<String>) -> Self {
        self.heading_background_color = Some(color.into());
        self
    }

    pub fn table_width(mut self, width: Length) -> Self {
        self.table_width = Some(width);
        self
    }

    pub fn table_layout(mut self, layout: TableLayout) -> Self {
        self.table_layout = Some(layout);
        self
    }

    pub fn column_labels_font_weight(mut self, weight: FontWeight) -> Self {
        self.column_labels_font_weight = Some(weight);
        self
    }

    pub fn column_labels_text_transform(mut self, transform: TextTransform) -> Self {
        self.column_labels_text_transform = Some(transform);
        self
    }

    pub fn table_body_hlines_color(mut self, color: impl Into<String>) -> Self {
        self.table_body_hlines_color = Some(color.into());
        self
    }

    /// Layer `other` on top of `self`: set fields in `other` win.
    pub fn merge(self, other: TableOptions) -> Self {
        Self {
            table_background_color: other
                .table_background_color
                .or(self.table_background_color),
            table_font_size: other.table_font_size.or(self.table_font_size),
            heading_background_color: other
                .heading_background_color
                .or(self.heading_background_color),
            table_width: other.table_width.or(self.table_width),
            table_layout: other.table_layout.or(self.table_layout),
            column_labels_font_weight: other
                .column_labels_font_weight
                .or(self.column_labels_font_weight),
            column_labels_text_transform: other
                .column_labels_text_transform
                .or(self.column_labels_text_transform),
            table_body_hlines_color: other
                .table_body_hlines_color
                .or(self.table_body_hlines_color),
        }
    }
}

/// Constructor options passed through to the table builder.
///
/// The known options are typed; anything else is kept verbatim in an extra
/// map that is flattened alongside the known keys when serialized. The
/// extra map never holds a typed key, so serialized options always read
/// back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// HTML id for the rendered table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Locale used for number and date formatting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Column whose values become row labels (the stub)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rowname_col: Option<String>,
    /// Column whose values split rows into groups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groupname_col: Option<String>,
    /// Align columns by their value type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_align: Option<bool>,
    /// Options the typed fields do not cover
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl RenderOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn rowname_col(mut self, column: impl Into<String>) -> Self {
        self.rowname_col = Some(column.into());
        self
    }

    pub fn groupname_col(mut self, column: impl Into<String>) -> Self {
        self.groupname_col = Some(column.into());
        self
    }

    pub fn auto_align(mut self, enabled: bool) -> Self {
        self.auto_align = Some(enabled);
        self
    }

    /// Builder: set an option by name.
    ///
    /// Names of typed options set the typed field (`null` clears it), so
    /// `option("rowname_col", "state")` is the same as `rowname_col("state")`.
    /// Any other name is stored as-is.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOption`] if a typed option gets a value of the wrong type.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        let key = key.into();
        let value = value.into();

        match key.as_str() {
            "id" => self.id = string_option(&key, value)?,
            "locale" => self.locale = string_option(&key, value)?,
            "rowname_col" => self.rowname_col = string_option(&key, value)?,
            "groupname_col" => self.groupname_col = string_option(&key, value)?,
            "auto_align" => {
                self.auto_align = match value {
                    Value::Null => None,
                    Value::Bool(b) => Some(b),
                    _ => return Err(invalid_option(&key, "a boolean")),
                }
            }
            _ => {
                self.extra.insert(key, value);
            }
        }
        Ok(self)
    }

    /// Options without a typed field, by name.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

fn string_option(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        _ => Err(invalid_option(key, "a string")),
    }
}

fn invalid_option(key: impl Into<String>, expected: &'static str) -> Error {
    Error::InvalidOption {
        key: key.into(),
        expected,
    }
}
