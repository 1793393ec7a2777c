//! Output: the styled table and the options that configure it.
//!
//! - **TableBuilder / StyledTable**: accumulate configuration, then freeze it
//! - **TableOptions**: table-wide colors, sizes and layout
//! - **RenderOptions**: constructor options forwarded from the caller
//! - **Length / Font**: value types used by the options
//!
//! A `StyledTable` is a pure presentation record - it holds no rendering
//! logic and can be handed to a template or serialized to JSON.
//!
//! ## Example
//!
//! ```rust
//! use dubois::data::Frame;
//! use dubois::output::{Length, RenderOptions, TableBuilder, TableOptions};
//!
//! let table = TableBuilder::new(Frame::new(["a", "b"]), RenderOptions::new())?
//!     .tab_options(TableOptions::new().table_width(Length::px(270.0)))
//!     .cols_width([("a", Length::pct(50.0)), ("b", Length::pct(50.0))])?
//!     .tab_header("Title", None)
//!     .build();
//!
//! assert_eq!(table.column_width("a"), Some(Length::pct(50.0)));
//! # Ok::<(), dubois::Error>(())
//! ```

pub mod options;
pub mod style;
pub mod table;

pub use options::{FontWeight, RenderOptions, TableLayout, TableOptions, TextTransform};
pub use style::{Font, Length};
pub use table::{Header, StyledTable, TableBuilder};
