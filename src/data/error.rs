//! Errors raised by the value model.
//!
//! Every fallible [`DataNode`](super::DataNode) operation returns
//! [`DataResult`]. These errors mean the game content is malformed; they
//! are never retried.

use thiserror::Error;

use super::node::NodeKind;

/// Failure accessing or mutating a value node.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DataError {
    /// The node holds a different variant than the accessor demands.
    #[error("a value of type '{demanded}' was requested from a node of type '{actual}'")]
    WrongType {
        /// Variant the caller asked for.
        demanded: NodeKind,
        /// Variant the node actually holds.
        actual: NodeKind,
    },

    /// Indexed access past the end of a list.
    #[error("list index {index} is out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Length of the list at the time of access.
        len: usize,
    },

    /// Keyed access to a key the map does not contain.
    #[error("key '{key}' not found in map")]
    KeyNotFound {
        /// The missing key.
        key: String,
    },
}

impl DataError {
    pub(crate) fn wrong_type(demanded: NodeKind, actual: NodeKind) -> Self {
        DataError::WrongType { demanded, actual }
    }

    pub(crate) fn key_not_found(key: impl Into<String>) -> Self {
        DataError::KeyNotFound { key: key.into() }
    }
}

/// Result alias for value-model operations.
pub type DataResult<T> = Result<T, DataError>;
