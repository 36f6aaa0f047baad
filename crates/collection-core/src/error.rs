//! Error types for checked array operations.

use std::error::Error;
use std::fmt;

/// The checked operation that rejected an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`DynamicArray::get`](crate::DynamicArray::get) or `Index`.
    Get,
    /// [`DynamicArray::set`](crate::DynamicArray::set) or `IndexMut`.
    Set,
    /// [`DynamicArray::insert_at`](crate::DynamicArray::insert_at).
    InsertAt,
    /// [`DynamicArray::remove_at`](crate::DynamicArray::remove_at).
    RemoveAt,
    /// [`DynamicArray::exchange`](crate::DynamicArray::exchange).
    Exchange,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::InsertAt => "insert_at",
            Self::RemoveAt => "remove_at",
            Self::Exchange => "exchange",
        };
        f.write_str(name)
    }
}

/// Errors returned by checked [`DynamicArray`](crate::DynamicArray) operations.
///
/// A failed operation never mutates the array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionError {
    /// An index argument fell outside the bounds valid for `op`.
    ///
    /// Reads, writes, removals and exchanges accept `index < count`;
    /// insertion accepts `index <= count`.
    IndexOutOfRange {
        /// The operation that rejected the index.
        op: Operation,
        /// The offending index.
        index: usize,
        /// Element count at the time of the call.
        count: usize,
    },
}

impl CollectionError {
    /// The rejected index.
    pub fn index(&self) -> usize {
        match self {
            Self::IndexOutOfRange { index, .. } => *index,
        }
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange {
                op: op @ Operation::InsertAt,
                index,
                count,
            } => {
                write!(
                    f,
                    "{op}: index {index} out of range (must be <= count {count})"
                )
            }
            Self::IndexOutOfRange { op, index, count } => {
                write!(f, "{op}: index {index} out of range (count {count})")
            }
        }
    }
}

impl Error for CollectionError {}
