use bitvec::prelude::*;
use std::fmt;

/// Fixed-capacity set of dense tile ids
///
/// Backs every wave cell domain and every adjacency rule set. Provides O(1)
/// membership testing and word-wide set operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    bits: BitVec,
    capacity: usize,
}

impl TileSet {
    /// Create a set with no tiles present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Create a set containing every tile id below the capacity
    pub fn full(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
            capacity,
        }
    }

    /// Insert a tile id, ignoring ids beyond the capacity
    pub fn insert(&mut self, tile: usize) {
        if tile < self.capacity {
            self.bits.set(tile, true);
        }
    }

    /// Remove a tile id, reporting whether it was present
    pub fn remove(&mut self, tile: usize) -> bool {
        if tile < self.capacity && self.contains(tile) {
            self.bits.set(tile, false);
            return true;
        }
        false
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Merge another set into this one in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Maximum number of distinct ids the set can hold
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lowest tile id present
    pub fn first(&self) -> Option<usize> {
        self.bits.first_one()
    }

    /// Iterate present tile ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all present tile ids as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileSet({} tiles: {:?})", self.count(), self.to_vec())
    }
}
