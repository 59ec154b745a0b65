//! Checkpoint context
//!
//! The context travels through every store/load call unchanged. It exists
//! so the dependency of reference types on the entity directory is visible
//! at every call site instead of hiding in ambient state; by-value types
//! ignore it entirely.

use meshpoint_core::{EntityDirectory, EntityKind, Error, Result};

/// Per-call context forwarded through nested store/load calls
///
/// Wraps the caller's [`EntityDirectory`], if any. Only the entity
/// reference impls interpret the context; every other impl forwards it
/// untouched.
#[derive(Clone, Copy, Default)]
pub struct CheckpointContext<'a> {
    directory: Option<&'a dyn EntityDirectory>,
}

impl<'a> CheckpointContext<'a> {
    /// Context with no entity directory
    ///
    /// Sufficient for any sequence of by-value stores/loads; loading a
    /// reference through it fails with
    /// [`Error::MissingContext`].
    pub fn empty() -> Self {
        Self { directory: None }
    }

    /// Context carrying the caller's entity directory
    ///
    /// The directory must be fully populated before any load call that
    /// resolves references, and must outlive every such call.
    pub fn with_directory(directory: &'a dyn EntityDirectory) -> Self {
        Self {
            directory: Some(directory),
        }
    }

    /// The entity directory, if one was supplied
    pub fn directory(&self) -> Option<&'a dyn EntityDirectory> {
        self.directory
    }

    /// The entity directory, or [`Error::MissingContext`] for `kind`
    ///
    /// Used by reference loads, which cannot proceed without a directory.
    pub fn require_directory(&self, kind: EntityKind) -> Result<&'a dyn EntityDirectory> {
        self.directory.ok_or(Error::MissingContext(kind))
    }
}

impl std::fmt::Debug for CheckpointContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckpointContext")
            .field("has_directory", &self.directory.is_some())
            .finish()
    }
}
