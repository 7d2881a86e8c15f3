
use thiserror::Error;

/// The error raised by positional operations on a [`SeqList`](crate::SeqList).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The index addressed no position of the list.
    #[error("index {index} is out of bounds for a list of length {len}")]
    OutOfBounds {
        /// The index which was addressed.
        index: usize,
        /// The length of the list at the time.
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
