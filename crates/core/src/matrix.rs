//! Runtime-shaped numeric matrices
//!
//! Two layouts with different checkpoint contracts:
//! - [`DenseMatrix`]: row-major, dimensions travel with the data, the load
//!   destination is resized to match.
//! - [`ColumnMajorMatrix`]: column-major physical storage, dimensions do
//!   not travel; the caller guarantees identical shape on both ends.

use crate::Real;
use std::ops::{Index, IndexMut};

/// Dense row-major matrix of [`Real`] entries
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DenseMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Real>,
}

impl DenseMatrix {
    /// Create a zero-filled `rows` x `cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Reshape to `rows` x `cols`, discarding all prior contents
    ///
    /// Every entry is zero afterwards. Pre-existing data in a
    /// differently-shaped destination is discarded, never merged.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.data.clear();
        self.data.resize(rows * cols, 0.0);
    }

    /// Entries in row-major order
    pub fn as_slice(&self) -> &[Real] {
        &self.data
    }

    /// Mutable entries in row-major order
    pub fn as_mut_slice(&mut self) -> &mut [Real] {
        &mut self.data
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = Real;

    fn index(&self, (row, col): (usize, usize)) -> &Real {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Real {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

/// Dense matrix stored column-major, indexed in `(row, col)` logical order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnMajorMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Real>,
}

impl ColumnMajorMatrix {
    /// Create a zero-filled `rows` x `cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entries in column-major (physical) order
    pub fn as_slice(&self) -> &[Real] {
        &self.data
    }
}

impl Index<(usize, usize)> for ColumnMajorMatrix {
    type Output = Real;

    fn index(&self, (row, col): (usize, usize)) -> &Real {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &self.data[col * self.rows + row]
    }
}

impl IndexMut<(usize, usize)> for ColumnMajorMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Real {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        &mut self.data[col * self.rows + row]
    }
}
