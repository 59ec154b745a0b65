//! Checkpoint store/load core
//!
//! Per-type encode/decode for simulation state. Two open traits, [`Store`]
//! and [`Load`], are implemented for every supported type and resolved
//! statically; composite shapes sequence calls into their element type's
//! impl and never re-encode primitives. New shapes are added by
//! implementing the traits, not by touching a central dispatcher.
//!
//! ## Format
//!
//! A checkpoint has no header, magic number, or version tag: it is exactly
//! the concatenation of the stored values, in store order, and is only
//! interpretable by replaying the identical sequence of typed load calls.
//! The "schema" is the caller's code. Scalars use machine-native widths and
//! byte order (portability across binary-incompatible machines is a
//! non-goal); variable-length values are size-prefixed.
//!
//! ## Ordering
//!
//! Store order and load order must match call for call, type for type.
//! The framework performs no self-describing validation: replaying a
//! mismatched sequence yields an underrun or garbage, never a diagnostic.
//!
//! ## References
//!
//! Mesh entity references encode as stable ids and re-resolve through the
//! [`CheckpointContext`]'s entity directory on load; see the
//! [`reference`] module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collections;
pub mod composite;
pub mod context;
pub mod reference;
pub mod scalar;
pub mod text;

pub use context::CheckpointContext;

use meshpoint_channel::{ByteSink, ByteSource};
use meshpoint_core::Result;

/// Types that can encode themselves onto a byte channel
pub trait Store {
    /// Append this value's encoding to `sink`
    ///
    /// The context is forwarded unchanged to nested calls; only entity
    /// reference impls interpret it.
    fn store(&self, sink: &mut dyn ByteSink, ctx: &CheckpointContext<'_>) -> Result<()>;
}

/// Types that can decode themselves in place from a byte channel
pub trait Load {
    /// Overwrite this value with the next encoding in `source`
    ///
    /// Must consume exactly the bytes the matching [`Store`] impl wrote.
    /// On error the destination and the channel position are unspecified.
    fn load(&mut self, source: &mut dyn ByteSource, ctx: &CheckpointContext<'_>) -> Result<()>;
}

/// Store a single value into `sink`
///
/// Entry point for the orchestration layer; forwards to the value's
/// [`Store`] impl.
pub fn store<T: Store + ?Sized>(
    value: &T,
    sink: &mut dyn ByteSink,
    ctx: &CheckpointContext<'_>,
) -> Result<()> {
    value.store(sink, ctx)
}

/// Load a single value in place from `source`
///
/// Entry point for the orchestration layer; forwards to the value's
/// [`Load`] impl. Load calls must replay the store sequence exactly.
pub fn load<T: Load + ?Sized>(
    dest: &mut T,
    source: &mut dyn ByteSource,
    ctx: &CheckpointContext<'_>,
) -> Result<()> {
    dest.load(source, ctx)
}
