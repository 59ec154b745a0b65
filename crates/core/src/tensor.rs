//! Fixed-shape coordinate tensors
//!
//! Both tensors expose their fixed-size backing arrays so the checkpoint
//! layer can delegate to the dense-array routine: the shape is compile-time
//! fixed and identical on both ends, so no dimensions travel with the data.

use crate::Real;
use std::ops::{Index, IndexMut};

/// Rank-2 tensor over 3-space (3 x 3), stored as a flat coordinate array
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankTwoTensor {
    coords: [Real; 9],
}

impl RankTwoTensor {
    /// Create a zero tensor
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tensor from its flat coordinate array
    pub fn from_coords(coords: [Real; 9]) -> Self {
        Self { coords }
    }

    /// Flat coordinate backing store
    pub fn coords(&self) -> &[Real; 9] {
        &self.coords
    }

    /// Mutable flat coordinate backing store
    pub fn coords_mut(&mut self) -> &mut [Real; 9] {
        &mut self.coords
    }
}

impl Index<(usize, usize)> for RankTwoTensor {
    type Output = Real;

    fn index(&self, (i, j): (usize, usize)) -> &Real {
        assert!(i < 3 && j < 3, "index out of bounds");
        &self.coords[i * 3 + j]
    }
}

impl IndexMut<(usize, usize)> for RankTwoTensor {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Real {
        assert!(i < 3 && j < 3, "index out of bounds");
        &mut self.coords[i * 3 + j]
    }
}

/// Rank-4 tensor over 3-space (3 x 3 x 3 x 3), stored as a flat value array
#[derive(Debug, Clone, PartialEq)]
pub struct RankFourTensor {
    values: [Real; 81],
}

impl RankFourTensor {
    /// Create a zero tensor
    pub fn new() -> Self {
        Self { values: [0.0; 81] }
    }

    /// Create a tensor from its flat value array
    pub fn from_values(values: [Real; 81]) -> Self {
        Self { values }
    }

    /// Flat value backing store
    pub fn values(&self) -> &[Real; 81] {
        &self.values
    }

    /// Mutable flat value backing store
    pub fn values_mut(&mut self) -> &mut [Real; 81] {
        &mut self.values
    }
}

impl Default for RankFourTensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<(usize, usize, usize, usize)> for RankFourTensor {
    type Output = Real;

    fn index(&self, (i, j, k, l): (usize, usize, usize, usize)) -> &Real {
        assert!(i < 3 && j < 3 && k < 3 && l < 3, "index out of bounds");
        &self.values[((i * 3 + j) * 3 + k) * 3 + l]
    }
}

impl IndexMut<(usize, usize, usize, usize)> for RankFourTensor {
    fn index_mut(&mut self, (i, j, k, l): (usize, usize, usize, usize)) -> &mut Real {
        assert!(i < 3 && j < 3 && k < 3 && l < 3, "index out of bounds");
        &mut self.values[((i * 3 + j) * 3 + k) * 3 + l]
    }
}
