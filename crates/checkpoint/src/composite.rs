//! Composite shapes: fixed arrays, matrices, tensors
//!
//! Composite impls only sequence calls into the element type's impl; they
//! never re-encode primitives. Shapes that are fixed at compile time (or
//! guaranteed matching by the caller) carry no dimension prefix;
//! [`DenseMatrix`] is the one shape whose dimensions travel with the data.

use crate::{CheckpointContext, Load, Store};
use meshpoint_channel::{ByteSink, ByteSource};
use meshpoint_core::{ColumnMajorMatrix, DenseMatrix, RankFourTensor, RankTwoTensor, Real, Result};

impl<T: Store, const N: usize> Store for [T; N] {
    fn store(&self, sink: &mut dyn ByteSink, ctx: &CheckpointContext<'_>) -> Result<()> {
        for value in self {
            value.store(sink, ctx)?;
        }
        Ok(())
    }
}

impl<T: Load, const N: usize> Load for [T; N] {
    fn load(&mut self, source: &mut dyn ByteSource, ctx: &CheckpointContext<'_>) -> Result<()> {
        for value in self.iter_mut() {
            value.load(source, ctx)?;
        }
        Ok(())
    }
}

impl Store for DenseMatrix {
    fn store(&self, sink: &mut dyn ByteSink, ctx: &CheckpointContext<'_>) -> Result<()> {
        (self.rows() as u32).store(sink, ctx)?;
        (self.cols() as u32).store(sink, ctx)?;
        for value in self.as_slice() {
            value.store(sink, ctx)?;
        }
        Ok(())
    }
}

impl Load for DenseMatrix {
    fn load(&mut self, source: &mut dyn ByteSource, ctx: &CheckpointContext<'_>) -> Result<()> {
        let mut rows = 0u32;
        rows.load(source, ctx)?;
        let mut cols = 0u32;
        cols.load(source, ctx)?;

        // The destination is fully overwritten; a differently-shaped
        // destination is discarded, not merged.
        self.resize(rows as usize, cols as usize);
        for value in self.as_mut_slice() {
            value.load(source, ctx)?;
        }
        Ok(())
    }
}

impl Store for ColumnMajorMatrix {
    fn store(&self, sink: &mut dyn ByteSink, ctx: &CheckpointContext<'_>) -> Result<()> {
        // (row, col) logical order regardless of the column-major physical
        // layout. No dimension prefix: shape must already match on both
        // ends, as with the fixed-shape tensors.
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                self[(row, col)].store(sink, ctx)?;
            }
        }
        Ok(())
    }
}

impl Load for ColumnMajorMatrix {
    fn load(&mut self, source: &mut dyn ByteSource, ctx: &CheckpointContext<'_>) -> Result<()> {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let mut value: Real = 0.0;
                value.load(source, ctx)?;
                self[(row, col)] = value;
            }
        }
        Ok(())
    }
}

impl Store for RankTwoTensor {
    fn store(&self, sink: &mut dyn ByteSink, ctx: &CheckpointContext<'_>) -> Result<()> {
        self.coords().store(sink, ctx)
    }
}

impl Load for RankTwoTensor {
    fn load(&mut self, source: &mut dyn ByteSource, ctx: &CheckpointContext<'_>) -> Result<()> {
        self.coords_mut().load(source, ctx)
    }
}

impl Store for RankFourTensor {
    fn store(&self, sink: &mut dyn ByteSink, ctx: &CheckpointContext<'_>) -> Result<()> {
        self.values().store(sink, ctx)
    }
}

impl Load for RankFourTensor {
    fn load(&mut self, source: &mut dyn ByteSource, ctx: &CheckpointContext<'_>) -> Result<()> {
        self.values_mut().load(source, ctx)
    }
}
