//! Per-cell candidate domains for the output grid

use crate::algorithm::bitset::TileSet;
use ndarray::Array2;

/// Candidate tracking for every output cell
///
/// Domains only ever shrink. Collapse additionally marks a cell observed so
/// the selection scan stops revisiting it; cells narrowed to one candidate
/// purely by propagation stay unobserved and are resolved implicitly.
#[derive(Clone, Debug)]
pub struct Wave {
    domains: Array2<TileSet>,
    observed: Array2<bool>,
}

impl Wave {
    /// Create a wave with every tile possible in every cell
    pub fn new(rows: usize, cols: usize, tile_count: usize) -> Self {
        Self {
            domains: Array2::from_elem((rows, cols), TileSet::full(tile_count)),
            observed: Array2::from_elem((rows, cols), false),
        }
    }

    /// Number of cell rows
    pub fn rows(&self) -> usize {
        self.domains.nrows()
    }

    /// Number of cell columns
    pub fn cols(&self) -> usize {
        self.domains.ncols()
    }

    /// Total number of cells
    pub fn total_cells(&self) -> usize {
        self.domains.len()
    }

    /// Remaining candidate count at a cell, zero when out of bounds
    pub fn count(&self, cell: [usize; 2]) -> usize {
        self.domains.get(cell).map_or(0, TileSet::count)
    }

    /// Whether a tile remains possible at a cell
    pub fn contains(&self, cell: [usize; 2], tile: usize) -> bool {
        self.domains
            .get(cell)
            .is_some_and(|domain| domain.contains(tile))
    }

    /// Candidate set at a cell
    pub fn domain(&self, cell: [usize; 2]) -> Option<&TileSet> {
        self.domains.get(cell)
    }

    /// Remove a tile from a cell's candidates
    ///
    /// Returns whether the tile was present, so repeated removals report
    /// `false` and callers can queue each elimination exactly once.
    pub fn eliminate(&mut self, cell: [usize; 2], tile: usize) -> bool {
        self.domains
            .get_mut(cell)
            .is_some_and(|domain| domain.remove(tile))
    }

    /// Lowest-numbered candidate at a cell
    pub fn first_possible(&self, cell: [usize; 2]) -> Option<usize> {
        self.domains.get(cell).and_then(TileSet::first)
    }

    /// Whether the cell was explicitly collapsed
    pub fn is_observed(&self, cell: [usize; 2]) -> bool {
        self.observed.get(cell).copied().unwrap_or(false)
    }

    /// Flag a cell as explicitly collapsed
    pub fn mark_observed(&mut self, cell: [usize; 2]) {
        if let Some(flag) = self.observed.get_mut(cell) {
            *flag = true;
        }
    }

    /// Count of cells narrowed to exactly one candidate
    pub fn resolved_cells(&self) -> usize {
        self.domains
            .iter()
            .filter(|domain| domain.count() == 1)
            .count()
    }

    /// First cell with no remaining candidates, in row-major order
    pub fn first_empty_cell(&self) -> Option<[usize; 2]> {
        self.domains
            .indexed_iter()
            .find(|(_, domain)| domain.is_empty())
            .map(|((row, col), _)| [row, col])
    }
}
