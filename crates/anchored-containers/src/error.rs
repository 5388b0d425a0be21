use std::result::Result as StdResult;

use thiserror::Error;


pub type Result<T> = StdResult<T, CollectionError>;


/// The ways in which a container operation can fail.
///
/// Both are violations of an operation's contract by the caller, so a failed operation never
/// mutates the container.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionError {
    /// A positional operation was given an index outside of the container's valid range, which is
    /// `0..len` (or `0..=len` for insertions).
    #[error("index {index} is out of range for a container of length {len}")]
    IndexOutOfRange {
        index: usize,
        len:   usize,
    },
    /// An operation which reads or removes an end of the container (or its top priority entry)
    /// was performed on an empty container.
    #[error("the operation requires a nonempty container")]
    EmptyContainer,
}

impl CollectionError {
    /// Return `Ok(())` if `index` refers to an existing entry of a container of length `len`.
    #[inline]
    pub(crate) const fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }

    /// Return `Ok(())` if a new entry could be inserted at `index` in a container of length
    /// `len`.
    #[inline]
    pub(crate) const fn check_insertion_index(index: usize, len: usize) -> Result<()> {
        if index <= len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }
}
