//! Presentation-ready table: a dataset plus its visual configuration.
//!
//! [`TableBuilder`] accumulates configuration step by step; [`StyledTable`]
//! is the frozen result. Rendering is left to whatever consumes the table
//! (a template, an HTML writer, or JSON via serde) - this module only
//! records what the table should look like.
//!
//! The builder mirrors the usual table-styling vocabulary:
//!
//! | step              | sets                                    |
//! |-------------------|-----------------------------------------|
//! | `tab_options`     | table-wide colors, sizes, layout        |
//! | `opt_table_font`  | the font stack                          |
//! | `cols_label`      | display labels per column               |
//! | `cols_width`      | widths per column                       |
//! | `tab_header`      | title and subtitle                      |
//! | `tab_source_note` | notes below the table                   |

use log::trace;
use serde::{Deserialize, Serialize};

use super::options::{RenderOptions, TableOptions};
use super::style::{Font, Length};
use crate::data::Dataset;
use crate::error::Error;
use crate::Result;

/// Title block shown above the column labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// Styled table, immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct StyledTable<D> {
    data: D,
    render_options: RenderOptions,
    options: TableOptions,
    fonts: Vec<Font>,
    column_labels: Vec<(String, String)>,
    column_widths: Vec<(String, Length)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    header: Option<Header>,
    source_notes: Vec<String>,
}

impl<D> StyledTable<D> {
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Give back the wrapped dataset.
    pub fn into_data(self) -> D {
        self.data
    }

    /// Constructor options, exactly as they were passed in.
    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Font stack, most preferred first.
    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    /// `(column, label)` pairs in the order they were first set.
    pub fn column_labels(&self) -> &[(String, String)] {
        &self.column_labels
    }

    pub fn column_label(&self, column: &str) -> Option<&str> {
        lookup(&self.column_labels, column).map(String::as_str)
    }

    pub fn column_widths(&self) -> &[(String, Length)] {
        &self.column_widths
    }

    pub fn column_width(&self, column: &str) -> Option<Length> {
        lookup(&self.column_widths, column).copied()
    }

    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    pub fn source_notes(&self) -> &[String] {
        &self.source_notes
    }
}

/// Incrementally configures a [`StyledTable`].
///
/// Steps that name columns check them against the dataset and fail with
/// [`Error::UnknownColumn`] for names it does not have.
#[derive(Debug, Clone)]
pub struct TableBuilder<D> {
    table: StyledTable<D>,
}

impl<D: Dataset> TableBuilder<D> {
    /// Wrap a dataset with constructor options.
    pub fn new(data: D, render_options: RenderOptions) -> Result<Self> {
        for (column, context) in [
            (&render_options.rowname_col, "rowname_col"),
            (&render_options.groupname_col, "groupname_col"),
        ] {
            if let Some(column) = column {
                check_column(&data, column, context)?;
            }
        }

        trace!(
            "table builder: {} columns, {} rows",
            data.num_columns(),
            data.num_rows()
        );

        Ok(Self {
            table: StyledTable {
                data,
                render_options,
                options: TableOptions::default(),
                fonts: Vec::new(),
                column_labels: Vec::new(),
                column_widths: Vec::new(),
                header: None,
                source_notes: Vec::new(),
            },
        })
    }

    /// Layer table-wide options over the current ones.
    pub fn tab_options(mut self, options: TableOptions) -> Self {
        trace!("tab_options: {:?}", options);
        self.table.options = self.table.options.merge(options);
        self
    }

    /// Replace the font stack.
    pub fn opt_table_font(mut self, fonts: Vec<Font>) -> Self {
        trace!("opt_table_font: {} fonts", fonts.len());
        self.table.fonts = fonts;
        self
    }

    /// Set display labels for columns.
    pub fn cols_label<I, K, V>(mut self, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (column, label) in labels {
            let column = column.into();
            check_column(&self.table.data, &column, "cols_label")?;
            upsert(&mut self.table.column_labels, column, label.into());
        }
        trace!("cols_label: {} labels", self.table.column_labels.len());
        Ok(self)
    }

    /// Set widths for columns.
    pub fn cols_width<I, K>(mut self, widths: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Length)>,
        K: Into<String>,
    {
        for (column, width) in widths {
            let column = column.into();
            check_column(&self.table.data, &column, "cols_width")?;
            upsert(&mut self.table.column_widths, column, width);
        }
        trace!("cols_width: {} widths", self.table.column_widths.len());
        Ok(self)
    }

    /// Attach a title, with an optional subtitle.
    pub fn tab_header(mut self, title: impl Into<String>, subtitle: Option<String>) -> Self {
        self.table.header = Some(Header {
            title: title.into(),
            subtitle,
        });
        self
    }

    /// Append a note below the table.
    pub fn tab_source_note(mut self, note: impl Into<String>) -> Self {
        self.table.source_notes.push(note.into());
        self
    }

    pub fn build(self) -> StyledTable<D> {
        self.table
    }
}

fn check_column<D: Dataset>(data: &D, column: &str, context: &'static str) -> Result<()> {
    if data.has_column(column) {
        Ok(())
    } else {
        Err(Error::UnknownColumn {
            column: column.to_string(),
            context,
        })
    }
}

fn lookup<'a, T>(entries: &'a [(String, T)], column: &str) -> Option<&'a T> {
    entries.iter().find(|(c, _)| c == column).map(|(_, v)| v)
}

/// Replace the value for `column`, or append it if new.
fn upsert<T>(entries: &mut Vec<(String, T)>, column: String, value: T) {
    match entries.iter_mut().find(|(c, _)| *c == column) {
        Some(entry) => entry.1 = value,
        None => entries.push((column, value)),
    }
}
