//! Meshpoint - checkpoint/restart serialization for mesh-based simulations
//!
//! Meshpoint persists and restores in-memory simulation state: scalars,
//! strings, dense matrices, rank-2/rank-4 tensors, text buffers,
//! collections, and references to mesh entities that must survive a
//! save/reload cycle even though their addresses do not.
//!
//! # Quick Start
//!
//! ```ignore
//! use meshpoint::{store, load, CheckpointContext, SliceReader};
//!
//! // Store: the caller decides what to persist and in what order
//! let ctx = CheckpointContext::empty();
//! let mut bytes: Vec<u8> = Vec::new();
//! store(&time_step, &mut bytes, &ctx)?;
//! store(&solution_norms, &mut bytes, &ctx)?;
//!
//! // Load: replay the identical sequence over the same bytes
//! let mut reader = SliceReader::new(&bytes);
//! load(&mut time_step, &mut reader, &ctx)?;
//! load(&mut solution_norms, &mut reader, &ctx)?;
//! ```
//!
//! Entity references additionally need a [`MeshDirectory`] (or any
//! [`EntityDirectory`]) built over the reloaded mesh, passed via
//! [`CheckpointContext::with_directory`].
//!
//! # Architecture
//!
//! - `meshpoint-core`: errors, entity model, directory, value types
//! - `meshpoint-channel`: byte sinks/sources (memory and file backed)
//! - `meshpoint-checkpoint`: the per-type store/load implementations
//!
//! A checkpoint is the bare concatenation of the stored values - no
//! header, no version tag - and is only interpretable by replaying the
//! same sequence of typed load calls that wrote it.

pub use meshpoint_channel::{
    ByteSink, ByteSource, FileReader, FileWriter, SliceReader, SyncMode,
};
pub use meshpoint_checkpoint::{load, store, CheckpointContext, Load, Store};
pub use meshpoint_core::{
    ColumnMajorMatrix, DenseMatrix, ElemHandle, Element, EntityDirectory, EntityId, EntityKind,
    Error, MeshDirectory, Node, NodeHandle, RankFourTensor, RankTwoTensor, Real, Result,
    TextBuffer,
};
