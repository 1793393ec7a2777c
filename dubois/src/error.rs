//! Error types for dubois

use thiserror::Error;

/// Errors that can occur while styling a table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The dataset has no columns, so the table width cannot be divided
    #[error("division by zero: cannot split table width across zero columns")]
    ZeroColumns,

    /// An option referenced a column the dataset does not have
    #[error("unknown column '{column}' in {context}")]
    UnknownColumn {
        column: String,
        context: &'static str,
    },

    /// A typed option was given a value of the wrong type
    #[error("invalid value for option '{key}': expected {expected}")]
    InvalidOption {
        key: String,
        expected: &'static str,
    },

    /// A length string was neither `<n>px` nor `<n>%`
    #[error("invalid length '{0}': expected a value like '135px' or '25%'")]
    InvalidLength(String),
}
