use std::error::Error as StdError;
use std::fmt;

/// Errors a sort call can fail with. A failed call leaves its input untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Raised when merge sort cannot obtain its scratch buffer.
    ScratchAllocation { len: usize },
}

impl StdError for SortError {}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SortError::ScratchAllocation { len } => {
                write!(f, "unable to allocate a scratch buffer of {len} elements")
            }
        }
    }
}
