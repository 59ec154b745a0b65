//! Mesh entity identifiers and handles
//!
//! Entities (elements and nodes) are owned by the mesh, never by this
//! framework. A checkpoint stores only an entity's stable [`EntityId`];
//! the handle it resolves to after reload is a different allocation that
//! denotes the same logical entity.

use crate::Real;
use std::fmt;
use std::sync::Arc;

/// Stable identifier for a mesh entity
///
/// Assigned by the externally-owned mesh and stable for the lifetime of a
/// single process run. Identifiers are only meaningful relative to the
/// entity directory active at load time: they are not portable across mesh
/// instances unless the mesh is rebuilt with identical id assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Reserved sentinel denoting "no entity" (a null reference)
    pub const INVALID: EntityId = EntityId(u64::MAX);

    /// Create an id from its raw integer value
    pub const fn new(raw: u64) -> Self {
        EntityId(raw)
    }

    /// Raw integer value of this id
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Whether this id names an actual entity (not the sentinel)
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "<invalid>")
        }
    }
}

/// Kind of mesh entity a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A mesh element (cell)
    Element,
    /// A mesh node (vertex)
    Node,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Element => write!(f, "element"),
            EntityKind::Node => write!(f, "node"),
        }
    }
}

/// A mesh element (cell) with its node connectivity
///
/// Minimal topology carrier: the id names the element, the node ids give
/// its connectivity. Geometry and field data live outside this framework.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: EntityId,
    node_ids: Vec<EntityId>,
}

impl Element {
    /// Create an element from its id and node connectivity
    pub fn new(id: EntityId, node_ids: Vec<EntityId>) -> Self {
        Self { id, node_ids }
    }

    /// Stable identifier of this element
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Ids of the nodes this element connects
    pub fn node_ids(&self) -> &[EntityId] {
        &self.node_ids
    }
}

/// A mesh node (vertex) with its spatial coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: EntityId,
    coords: [Real; 3],
}

impl Node {
    /// Create a node from its id and coordinates
    pub fn new(id: EntityId, coords: [Real; 3]) -> Self {
        Self { id, coords }
    }

    /// Stable identifier of this node
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Spatial coordinates of this node
    pub fn coords(&self) -> &[Real; 3] {
        &self.coords
    }
}

/// Shared handle to a live element
///
/// Handle addresses are not stable across runs; two handles denote the
/// same logical entity exactly when their ids are equal.
pub type ElemHandle = Arc<Element>;

/// Shared handle to a live node
pub type NodeHandle = Arc<Node>;
