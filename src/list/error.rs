use std::fmt;

/// Errors reported by fallible `List` operations.
///
/// There are exactly two failure conditions: asking for an element of an
/// empty list, and presenting a cursor the list cannot honour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The operation requires at least one element, but the list is empty.
    Empty,

    /// The cursor does not belong to this list, references a slot that has
    /// been freed, references a sentinel where a data node is required, or
    /// was asked to step across a list boundary.
    InvalidCursor,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Empty => f.write_str("container is empty"),
            ListError::InvalidCursor => f.write_str("invalid cursor"),
        }
    }
}

impl std::error::Error for ListError {}
