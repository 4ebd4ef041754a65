use thiserror::Error;

/// Errors reported by [`List`](crate::List) and its cursors.
///
/// Running off either end of the list is *not* an error: the move operations
/// of a cursor return `None` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// A cursor was requested at an index past the end of the list.
    #[error("index {index} is out of range for a list of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// `remove` or `replace` was called on an empty list.
    #[error("operation is not supported on an empty list")]
    Unsupported,

    /// `remove` or `replace` was called, but the last cursor operation was
    /// not a successful move.
    #[error("no element to act on: the cursor has not moved since it was created or last mutated")]
    InvalidState,
}

pub type Result<T, E = ListError> = std::result::Result<T, E>;
