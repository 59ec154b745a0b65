//! Collection shapes
//!
//! Variable-size aggregates carry a native-order `u32` element count
//! followed by each element via its own impl. Load clears and rebuilds the
//! destination; elements are default-constructed and then loaded into, so
//! element types need `Default`.
//!
//! Hashed containers iterate in an unspecified order, so two stores of the
//! same map may differ byte-for-byte; round-trip equality is the contract,
//! not byte-identical re-encoding.

use crate::{CheckpointContext, Load, Store};
use meshpoint_channel::{ByteSink, ByteSource};
use meshpoint_core::Result;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

impl<T: Store> Store for Vec<T> {
    fn store(&self, sink: &mut dyn ByteSink, ctx: &CheckpointContext<'_>) -> Result<()> {
        (self.len() as u32).store(sink, ctx)?;
        for value in self {
            value.store(sink, ctx)?;
        }
        Ok(())
    }
}

impl<T: Load + Default> Load for Vec<T> {
    fn load(&mut self, source: &mut dyn ByteSource, ctx: &CheckpointContext<'_>) -> Result<()> {
        let mut count = 0u32;
        count.load(source, ctx)?;

        self.clear();
        self.reserve(count as usize);
        for _ in 0..count {
            let mut value = T::default();
            value.load(source, ctx)?;
            self.push(value);
        }
        Ok(())
    }
}

impl<K: Store, V: Store> Store for HashMap<K, V> {
    fn store(&self, sink: &mut dyn ByteSink, ctx: &CheckpointContext<'_>) -> Result<()> {
        (self.len() as u32).store(sink, ctx)?;
        for (key, value) in self {
            key.store(sink, ctx)?;
            value.store(sink, ctx)?;
        }
        Ok(())
    }
}

impl<K: Load + Default + Eq + Hash, V: Load + Default> Load for HashMap<K, V> {
    fn load(&mut self, source: &mut dyn ByteSource, ctx: &CheckpointContext<'_>) -> Result<()> {
        let mut count = 0u32;
        count.load(source, ctx)?;

        self.clear();
        for _ in 0..count {
            let mut key = K::default();
            key.load(source, ctx)?;
            let mut value = V::default();
            value.load(source, ctx)?;
            self.insert(key, value);
        }
        Ok(())
    }
}

impl<T: Store> Store for HashSet<T> {
    fn store(&self, sink: &mut dyn ByteSink, ctx: &CheckpointContext<'_>) -> Result<()> {
        (self.len() as u32).store(sink, ctx)?;
        for value in self {
            value.store(sink, ctx)?;
        }
        Ok(())
    }
}

impl<T: Load + Default + Eq + Hash> Load for HashSet<T> {
    fn load(&mut self, source: &mut dyn ByteSource, ctx: &CheckpointContext<'_>) -> Result<()> {
        let mut count = 0u32;
        count.load(source, ctx)?;

        self.clear();
        for _ in 0..count {
            let mut value = T::default();
            value.load(source, ctx)?;
            self.insert(value);
        }
        Ok(())
    }
}
