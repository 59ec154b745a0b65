//! Error types for the meshpoint framework
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Every variant is non-recoverable at this layer: a failed store/load
//! leaves its channel at an unspecified position and the channel must not
//! be reused.

use crate::entity::{EntityId, EntityKind};
use std::io;
use thiserror::Error;

/// Result type alias for meshpoint operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for checkpoint store/load operations
#[derive(Debug, Error)]
pub enum Error {
    /// Channel exhausted before a read could complete
    ///
    /// Retrying cannot help: the underlying checkpoint is truncated
    /// relative to the sequence of load calls replaying it.
    #[error("channel underrun: requested {requested} bytes, {available} available")]
    Underrun {
        /// Bytes the read needed
        requested: usize,
        /// Bytes the channel could still supply
        available: usize,
    },

    /// Entity being stored has no valid stable identifier
    ///
    /// An entity that cannot be named cannot be restored. Raised before any
    /// byte is written, so a sentinel is never emitted ambiguously.
    #[error("cannot store a {0} reference without a valid id")]
    MissingIdentifier(EntityKind),

    /// A reference load was attempted with no entity directory supplied
    ///
    /// A bare identifier cannot recover a live handle without a directory.
    #[error("cannot load a {0} reference without an entity directory")]
    MissingContext(EntityKind),

    /// A stored identifier the entity directory cannot resolve
    ///
    /// Signals a checkpoint taken against a mesh whose topology has since
    /// changed.
    #[error("unresolved {kind} reference: id {id} is not in the entity directory")]
    UnresolvedReference {
        /// Kind of entity the reference named
        kind: EntityKind,
        /// Identifier read from the channel
        id: EntityId,
    },

    /// I/O error from a file-backed channel
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed data decoded from a channel
    #[error("data corruption: {0}")]
    Corruption(String),
}
