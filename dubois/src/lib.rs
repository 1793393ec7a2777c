//! # dubois
//!
//! A styling preset that gives tables the look of W.E.B. Du Bois's data
//! portraits.
//!
//! ## Overview
//!
//! `dubois` does not render tables. It takes a dataset and returns a
//! [`StyledTable`]: the same data plus a fixed set of presentation settings,
//! ready for a template, an HTML writer, or serialization to JSON.
//!
//! The theme applies:
//!
//! - **Colors**: parchment (`#F5F2E1`) background, `aliceblue` heading,
//!   `darkgray` body rules
//! - **Fonts**: Baskervville SC and Libre Baskerville web fonts, falling
//!   back to Baskerville, Georgia and any serif
//! - **Sizing**: 13px text, 135px per column, every column an equal share
//! - **Labels**: `snake_case` column names shown as `Title Case`, bold
//!
//! plus an optional title/subtitle header and source note.
//!
//! ## Pipeline
//!
//! 1. **data** - the [`Dataset`] trait (column names, row count) and [`Frame`]
//! 2. **theme** - [`dubois_table`] derives widths and labels from the dataset
//! 3. **output** - [`TableBuilder`] records each setting, [`StyledTable`] freezes them
//!
//! ## Example
//!
//! ```rust
//! use dubois::{dubois_table, Frame, RenderOptions, ThemeOptions};
//! use serde_json::json;
//!
//! let frame = Frame::new(["state", "negro_population"])
//!     .with_row([json!("Georgia"), json!(1_034_813)])
//!     .with_row([json!("Mississippi"), json!(907_630)]);
//!
//! let table = dubois_table(
//!     frame,
//!     ThemeOptions::new()
//!         .title("Negro Population of the United States")
//!         .subtitle("By state, 1900")
//!         .source_note("Atlanta University")
//!         .render(RenderOptions::new().id("population")),
//! )?;
//!
//! assert_eq!(table.column_label("negro_population"), Some("Negro Population"));
//! assert_eq!(table.header().unwrap().subtitle.as_deref(), Some("By state, 1900"));
//! assert_eq!(table.render_options().id.as_deref(), Some("population"));
//! # Ok::<(), dubois::Error>(())
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod theme;

pub use data::{Dataset, Frame};
pub use error::Error;
pub use output::{
    Font, FontWeight, Header, Length, RenderOptions, StyledTable, TableBuilder, TableLayout,
    TableOptions, TextTransform,
};
pub use theme::{
    column_label, column_labels, dubois_table, equal_column_width, table_width, ThemeConfig,
    ThemeOptions, PX_PER_COLUMN,
};

/// Result type for dubois operations
pub type Result<T> = std::result::Result<T, Error>;
