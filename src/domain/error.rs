use thiserror::Error;

/// Errors raised when building a [`Grid`](super::Grid) from row data.
///
/// A constructed grid is rectangular by invariant, so these are the only
/// places malformed cell data can enter the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The input had no rows, or rows with no columns.
    #[error("grid must be at least 1x1")]
    Empty,

    /// A row's length disagreed with the first row's.
    #[error("ragged grid: row {row} has {got} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Errors raised when registering a structure template.
///
/// Rejected synchronously at registration so the search path never has to
/// validate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The pattern had no rows, or rows with no columns.
    #[error("template \"{name}\" must be at least 1x1")]
    Empty { name: String },

    /// A row's length disagreed with the first row's.
    #[error("ragged template \"{name}\": row {row} has {got} columns, expected {expected}")]
    Ragged {
        name: String,
        row: usize,
        expected: usize,
        got: usize,
    },

    /// The pattern contained only dead cells.
    #[error("template \"{name}\" has no live cells")]
    NoLiveCells { name: String },
}
