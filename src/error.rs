use std::fmt;

/// Errors returned by fallible operations on a [`List`](crate::List).
///
/// Both variants are usage errors: the call is rejected and the list is left
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// Reading or popping an element of an empty list
    /// (`front`, `back`, `pop_front`, `pop_back` and their `_mut` variants).
    EmptyAccess,
    /// Erasing the sentinel node, either directly or because the end of an
    /// erased range is not reachable before the sentinel.
    InvalidErase,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::EmptyAccess => f.write_str("cannot access an element of an empty list"),
            ListError::InvalidErase => f.write_str("cannot erase the sentinel node"),
        }
    }
}

impl std::error::Error for ListError {}
