//! Reference identity across a rebuilt mesh
//!
//! The restart contract: a stored reference resolves to a *different*
//! handle after reload (addresses are never reused) but to the *same
//! logical entity*, recoverable solely through its id and a directory
//! populated from the reloaded mesh.

use meshpoint::{
    load, store, CheckpointContext, ElemHandle, Element, EntityDirectory, EntityId, EntityKind,
    Error, MeshDirectory, Node, NodeHandle, SliceReader,
};
use std::sync::Arc;

/// Build a small mesh: four nodes, two triangles sharing an edge
fn build_mesh() -> MeshDirectory {
    let mut mesh = MeshDirectory::new();
    mesh.add_node(Node::new(EntityId::new(0), [0.0, 0.0, 0.0]));
    mesh.add_node(Node::new(EntityId::new(1), [1.0, 0.0, 0.0]));
    mesh.add_node(Node::new(EntityId::new(2), [1.0, 1.0, 0.0]));
    mesh.add_node(Node::new(EntityId::new(3), [0.0, 1.0, 0.0]));
    mesh.add_element(Element::new(
        EntityId::new(10),
        vec![EntityId::new(0), EntityId::new(1), EntityId::new(2)],
    ));
    mesh.add_element(Element::new(
        EntityId::new(11),
        vec![EntityId::new(0), EntityId::new(2), EntityId::new(3)],
    ));
    mesh
}

#[test]
fn references_survive_mesh_rebuild() {
    // First run: store references out of the original mesh
    let first_mesh = build_mesh();
    let elem = first_mesh.resolve_element(EntityId::new(11)).unwrap();
    let node = first_mesh.resolve_node(EntityId::new(2)).unwrap();

    let ctx = CheckpointContext::empty();
    let mut bytes: Vec<u8> = Vec::new();
    store(&Some(Arc::clone(&elem)), &mut bytes, &ctx).unwrap();
    store(&Some(Arc::clone(&node)), &mut bytes, &ctx).unwrap();

    // "Restarted process": the mesh is rebuilt from scratch with the same
    // topology and id assignment; every handle is a fresh allocation.
    drop(first_mesh);
    let second_mesh = build_mesh();
    let load_ctx = CheckpointContext::with_directory(&second_mesh);

    let mut elem_out: Option<ElemHandle> = None;
    let mut node_out: Option<NodeHandle> = None;
    let mut reader = SliceReader::new(&bytes);
    load(&mut elem_out, &mut reader, &load_ctx).unwrap();
    load(&mut node_out, &mut reader, &load_ctx).unwrap();
    assert!(reader.is_exhausted());

    // Different handle, same logical entity
    let elem_out = elem_out.unwrap();
    assert!(!Arc::ptr_eq(&elem_out, &elem));
    assert_eq!(elem_out.id(), EntityId::new(11));
    assert_eq!(elem_out.node_ids(), elem.node_ids());

    let node_out = node_out.unwrap();
    assert!(!Arc::ptr_eq(&node_out, &node));
    assert_eq!(node_out.id(), EntityId::new(2));
    assert_eq!(node_out.coords(), &[1.0, 1.0, 0.0]);
}

#[test]
fn topology_mismatch_is_fatal() {
    let mesh = build_mesh();
    let elem = mesh.resolve_element(EntityId::new(10)).unwrap();

    let ctx = CheckpointContext::empty();
    let mut bytes: Vec<u8> = Vec::new();
    store(&Some(elem), &mut bytes, &ctx).unwrap();

    // The "reloaded" mesh lost element 10: a checkpoint/mesh mismatch
    let mut smaller_mesh = MeshDirectory::new();
    smaller_mesh.add_element(Element::new(EntityId::new(11), vec![]));
    let load_ctx = CheckpointContext::with_directory(&smaller_mesh);

    let mut out: Option<ElemHandle> = None;
    let mut reader = SliceReader::new(&bytes);
    let err = load(&mut out, &mut reader, &load_ctx).unwrap_err();
    assert!(matches!(
        err,
        Error::UnresolvedReference {
            kind: EntityKind::Element,
            ..
        }
    ));
}

#[test]
fn null_and_live_references_interleave() {
    let mesh = build_mesh();
    let node = mesh.resolve_node(EntityId::new(0)).unwrap();

    let ctx = CheckpointContext::empty();
    let mut bytes: Vec<u8> = Vec::new();
    store::<Option<NodeHandle>>(&None, &mut bytes, &ctx).unwrap();
    store(&Some(node), &mut bytes, &ctx).unwrap();
    store::<Option<NodeHandle>>(&None, &mut bytes, &ctx).unwrap();

    let load_ctx = CheckpointContext::with_directory(&mesh);
    let mut reader = SliceReader::new(&bytes);

    let mut first: Option<NodeHandle> = None;
    let mut second: Option<NodeHandle> = None;
    let mut third: Option<NodeHandle> = None;
    load(&mut first, &mut reader, &load_ctx).unwrap();
    load(&mut second, &mut reader, &load_ctx).unwrap();
    load(&mut third, &mut reader, &load_ctx).unwrap();

    assert!(first.is_none());
    assert_eq!(second.unwrap().id(), EntityId::new(0));
    assert!(third.is_none());
}

#[test]
fn references_inside_collections_resolve() {
    let mesh = build_mesh();
    let refs: Vec<Option<ElemHandle>> = vec![
        mesh.resolve_element(EntityId::new(10)),
        None,
        mesh.resolve_element(EntityId::new(11)),
    ];

    let ctx = CheckpointContext::empty();
    let mut bytes: Vec<u8> = Vec::new();
    store(&refs, &mut bytes, &ctx).unwrap();

    let load_ctx = CheckpointContext::with_directory(&mesh);
    let mut out: Vec<Option<ElemHandle>> = Vec::new();
    let mut reader = SliceReader::new(&bytes);
    load(&mut out, &mut reader, &load_ctx).unwrap();

    assert_eq!(out.len(), 3);
    assert_eq!(out[0].as_ref().unwrap().id(), EntityId::new(10));
    assert!(out[1].is_none());
    assert_eq!(out[2].as_ref().unwrap().id(), EntityId::new(11));
}
