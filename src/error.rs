//! Defines the error type shared by every module of this crate.
use thiserror::Error;

use crate::sample::ValueKind;


/// Errors raised while reading data, growing a tree,
/// or classifying a row.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Class counts, impurity, or a tree were requested
    /// for a collection with no rows.
    #[error("empty dataset: cannot compute {0} over zero rows")]
    EmptyDataset(&'static str),

    /// A row with no column at all, hence no label.
    #[error("a row must have at least one column (the label)")]
    EmptyRow,

    /// A question refers to a column the row does not have.
    #[error("column index {column} is out of range for a row of width {width}")]
    ColumnIndex {
        /// Requested column.
        column: usize,
        /// Width of the offending row.
        width: usize,
    },

    /// A cell does not have the kind the schema (or the question) expects.
    #[error("schema mismatch at column {column}: expected {expected}, found {found}")]
    SchemaMismatch {
        /// Offending column.
        column: usize,
        /// Kind recorded in the schema.
        expected: ValueKind,
        /// Kind of the given cell.
        found: ValueKind,
    },

    /// A row has a different number of columns than the schema.
    #[error("row has {found} columns, expected {expected}")]
    WidthMismatch {
        /// Accepted width(s), e.g. `"3"` or `"2 or 3"`.
        expected: String,
        /// Width of the offending row.
        found: usize,
    },

    /// A malformed line in a CSV source.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-indexed line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// The requested target column does not exist.
    #[error("the target column `{0}` does not exist")]
    MissingTarget(String),

    /// A null cell in a data frame.
    #[error("missing value in column `{column}` at row {row}")]
    MissingValue {
        /// Column name.
        column: String,
        /// 0-indexed row.
        row: usize,
    },

    /// A data frame column whose dtype has no `Value` counterpart.
    #[error("column `{column}` has unsupported dtype {dtype}")]
    UnsupportedType {
        /// Column name.
        column: String,
        /// Polars dtype.
        dtype: String,
    },

    /// I/O failure while reading a dataset or writing a rendering.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failure reported by `polars`.
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),

    /// Failure reported by `serde_json`.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}


/// Alias for `std::result::Result<T, TreeError>`.
pub type Result<T> = std::result::Result<T, TreeError>;
