//! Entity directory: identifier to live-handle resolution
//!
//! The directory is supplied by the caller at load time and backed by the
//! externally-owned mesh. It is read-only from the framework's perspective
//! and must be fully populated before any load call that resolves
//! references; its lifetime must exceed every such call.

use crate::entity::{ElemHandle, Element, EntityId, Node, NodeHandle};
use std::collections::HashMap;
use std::sync::Arc;

/// Lookup service mapping stable entity ids to live handles
///
/// Implemented over the reconstructed mesh by the checkpoint orchestration
/// layer. The framework never mutates a directory and never retains one
/// beyond a single load call.
pub trait EntityDirectory {
    /// Resolve an element id to a live handle, or `None` if no element
    /// with that id exists in the mesh
    fn resolve_element(&self, id: EntityId) -> Option<ElemHandle>;

    /// Resolve a node id to a live handle, or `None` if no node with that
    /// id exists in the mesh
    fn resolve_node(&self, id: EntityId) -> Option<NodeHandle>;

    /// Stable identifier of an element (the sentinel if it has none)
    fn element_id(&self, elem: &Element) -> EntityId {
        elem.id()
    }

    /// Stable identifier of a node (the sentinel if it has none)
    fn node_id(&self, node: &Node) -> EntityId {
        node.id()
    }
}

/// Map-backed [`EntityDirectory`] over a reconstructed mesh
///
/// Callers populate one of these after rebuilding the mesh, then hand it to
/// every load call that resolves references. Entities with the invalid
/// sentinel id are rejected at insertion: they could never be resolved.
#[derive(Debug, Default)]
pub struct MeshDirectory {
    elements: HashMap<EntityId, ElemHandle>,
    nodes: HashMap<EntityId, NodeHandle>,
}

impl MeshDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element, returning its shared handle
    ///
    /// # Panics
    ///
    /// Panics if the element carries the invalid sentinel id.
    pub fn add_element(&mut self, elem: Element) -> ElemHandle {
        assert!(
            elem.id().is_valid(),
            "cannot register an element with an invalid id"
        );
        let handle: ElemHandle = Arc::new(elem);
        self.elements.insert(handle.id(), Arc::clone(&handle));
        handle
    }

    /// Register a node, returning its shared handle
    ///
    /// # Panics
    ///
    /// Panics if the node carries the invalid sentinel id.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        assert!(
            node.id().is_valid(),
            "cannot register a node with an invalid id"
        );
        let handle: NodeHandle = Arc::new(node);
        self.nodes.insert(handle.id(), Arc::clone(&handle));
        handle
    }

    /// Number of registered elements
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Number of registered nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl EntityDirectory for MeshDirectory {
    fn resolve_element(&self, id: EntityId) -> Option<ElemHandle> {
        self.elements.get(&id).map(Arc::clone)
    }

    fn resolve_node(&self, id: EntityId) -> Option<NodeHandle> {
        self.nodes.get(&id).map(Arc::clone)
    }
}
