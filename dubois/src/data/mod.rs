//! Tabular input: what the theme reads from a dataset.
//!
//! The theme only needs the shape of a dataset - its ordered column names
//! and its row count. Anything that can answer those questions implements
//! [`Dataset`]; [`Frame`] is a small owned implementation for callers that
//! do not already have a table type of their own.
//!
//! ## Example
//!
//! ```rust
//! use dubois::data::{Dataset, Frame};
//! use serde_json::json;
//!
//! let frame = Frame::new(["year", "life_expectancy"])
//!     .with_row([json!(1900), json!(47.3)])
//!     .with_row([json!(1950), json!(68.2)]);
//!
//! assert_eq!(frame.num_columns(), 2);
//! assert_eq!(frame.num_rows(), 2);
//! ```

pub mod frame;

pub use frame::Frame;

/// Read-only view of a table with named columns.
pub trait Dataset {
    /// Column names, in display order.
    fn column_names(&self) -> &[String];

    /// Number of data rows.
    fn num_rows(&self) -> usize;

    /// Number of columns.
    fn num_columns(&self) -> usize {
        self.column_names().len()
    }

    /// Whether a column with this exact name exists.
    fn has_column(&self, name: &str) -> bool {
        self.column_names().iter().any(|c| c == name)
    }
}

impl<D: Dataset + ?Sized> Dataset for &D {
    fn column_names(&self) -> &[String] {
        (**self).column_names()
    }

    fn num_rows(&self) -> usize {
        (**self).num_rows()
    }

    fn num_columns(&self) -> usize {
        (**self).num_columns()
    }
}
