//! Entity reference resolution
//!
//! References never serialize an address. Store writes the entity's stable
//! id (the sentinel for `None`); load reads the id back and re-resolves it
//! through the caller-supplied entity directory. The directory dependency
//! is explicit in the context at every call site, never ambient state.
//!
//! On reload the resolved handle is a different allocation than the one
//! stored, but denotes the same logical entity: identity survives the
//! process boundary through the id alone.

use crate::{CheckpointContext, Load, Store};
use meshpoint_channel::{ByteSink, ByteSource};
use meshpoint_core::{ElemHandle, EntityId, EntityKind, Error, NodeHandle, Result};

impl Store for EntityId {
    fn store(&self, sink: &mut dyn ByteSink, ctx: &CheckpointContext<'_>) -> Result<()> {
        self.as_u64().store(sink, ctx)
    }
}

impl Load for EntityId {
    fn load(&mut self, source: &mut dyn ByteSource, ctx: &CheckpointContext<'_>) -> Result<()> {
        let mut raw = 0u64;
        raw.load(source, ctx)?;
        *self = EntityId::new(raw);
        Ok(())
    }
}

impl Store for Option<ElemHandle> {
    fn store(&self, sink: &mut dyn ByteSink, ctx: &CheckpointContext<'_>) -> Result<()> {
        let id = match self {
            Some(elem) => {
                let id = elem.id();
                if !id.is_valid() {
                    // Raised before any byte is written: a sentinel must
                    // never be emitted for a real entity.
                    return Err(Error::MissingIdentifier(EntityKind::Element));
                }
                id
            }
            None => EntityId::INVALID,
        };
        id.store(sink, ctx)
    }
}

impl Load for Option<ElemHandle> {
    fn load(&mut self, source: &mut dyn ByteSource, ctx: &CheckpointContext<'_>) -> Result<()> {
        // Directory presence is checked before any byte is consumed.
        let directory = ctx.require_directory(EntityKind::Element)?;

        let mut id = EntityId::INVALID;
        id.load(source, ctx)?;

        *self = if id.is_valid() {
            let handle = directory
                .resolve_element(id)
                .ok_or(Error::UnresolvedReference {
                    kind: EntityKind::Element,
                    id,
                })?;
            Some(handle)
        } else {
            None
        };
        Ok(())
    }
}

impl Store for Option<NodeHandle> {
    fn store(&self, sink: &mut dyn ByteSink, ctx: &CheckpointContext<'_>) -> Result<()> {
        let id = match self {
            Some(node) => {
                let id = node.id();
                if !id.is_valid() {
                    return Err(Error::MissingIdentifier(EntityKind::Node));
                }
                id
            }
            None => EntityId::INVALID,
        };
        id.store(sink, ctx)
    }
}

impl Load for Option<NodeHandle> {
    fn load(&mut self, source: &mut dyn ByteSource, ctx: &CheckpointContext<'_>) -> Result<()> {
        let directory = ctx.require_directory(EntityKind::Node)?;

        let mut id = EntityId::INVALID;
        id.load(source, ctx)?;

        *self = if id.is_valid() {
            let handle = directory.resolve_node(id).ok_or(Error::UnresolvedReference {
                kind: EntityKind::Node,
                id,
            })?;
            Some(handle)
        } else {
            None
        };
        Ok(())
    }
}
