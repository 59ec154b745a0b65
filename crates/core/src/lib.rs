//! Core types for the meshpoint checkpoint framework
//!
//! This crate defines the foundational types used throughout the system:
//! - Error: Error type hierarchy for store/load failures
//! - EntityId: Stable mesh entity identifier with a null-reference sentinel
//! - Element / Node: Mesh topology entities and their shared handles
//! - EntityDirectory: Caller-supplied id-to-handle resolution
//! - DenseMatrix / ColumnMajorMatrix: Runtime-shaped numeric matrices
//! - RankTwoTensor / RankFourTensor: Fixed-shape coordinate tensors
//! - TextBuffer: Accumulating opaque text buffer

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod directory;
pub mod entity;
pub mod error;
pub mod matrix;
pub mod tensor;

// Re-export commonly used types
pub use buffer::TextBuffer;
pub use directory::{EntityDirectory, MeshDirectory};
pub use entity::{ElemHandle, Element, EntityId, EntityKind, Node, NodeHandle};
pub use error::{Error, Result};
pub use matrix::{ColumnMajorMatrix, DenseMatrix};
pub use tensor::{RankFourTensor, RankTwoTensor};

/// Scalar type used for all simulation field values.
///
/// Checkpoints encode scalars in their machine-native representation, so a
/// build that changes this alias cannot read checkpoints written by another.
pub type Real = f64;
