//! Tile extraction and deduplication from coded sample grids
//!
//! Partitions a sample into fixed-stride tiles, assigns dense ids in
//! first-seen scan order, and records occurrence frequencies together with
//! the sample re-expressed as a grid of tile ids.

use crate::io::error::{GenerationError, Result, invalid_parameter};
use ndarray::Array2;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Rectangular block of coded symbols treated as one placement unit
///
/// Blocks cut from the sample edge may be smaller than the nominal tile
/// size when the sample dimensions do not divide evenly, so two tiles with
/// identical cells but different dimensions stay distinct.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    width: usize,
    height: usize,
    cells: Vec<usize>,
}

impl Tile {
    fn from_region(
        sample: &Array2<usize>,
        top: usize,
        left: usize,
        height: usize,
        width: usize,
    ) -> Self {
        let mut cells = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                cells.push(sample.get([top + row, left + col]).copied().unwrap_or(0));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Tile width in symbols
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Tile height in symbols
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Symbol code at a tile-local position
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col).copied()
    }
}

/// Deduplicated tile inventory extracted from one sample
///
/// Tile ids are dense indices into the inventory, assigned in first-seen
/// scan order so equal samples always produce equal catalogs.
#[derive(Clone, Debug)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
    frequencies: Vec<usize>,
    tile_grid: Array2<usize>,
    tile_width: usize,
    tile_height: usize,
}

impl TileCatalog {
    /// Partition a coded sample into tiles at a fixed stride
    ///
    /// Repeated content increments the frequency of the existing id rather
    /// than minting a new one. The final row and column of blocks may be
    /// truncated when the sample dimensions do not divide evenly.
    ///
    /// # Errors
    ///
    /// Returns an error if either tile dimension is zero or the sample has
    /// no cells.
    pub fn from_coded(
        sample: &Array2<usize>,
        tile_width: usize,
        tile_height: usize,
    ) -> Result<Self> {
        if tile_width == 0 {
            return Err(invalid_parameter(
                "tile_width",
                &tile_width,
                &"must be at least 1",
            ));
        }
        if tile_height == 0 {
            return Err(invalid_parameter(
                "tile_height",
                &tile_height,
                &"must be at least 1",
            ));
        }

        let (sample_rows, sample_cols) = sample.dim();
        if sample_rows == 0 || sample_cols == 0 {
            return Err(GenerationError::InvalidSourceData {
                reason: "sample grid has no cells".to_string(),
            });
        }

        let block_rows = sample_rows.div_ceil(tile_height);
        let block_cols = sample_cols.div_ceil(tile_width);

        let mut tiles: Vec<Tile> = Vec::new();
        let mut frequencies: Vec<usize> = Vec::new();
        let mut ids_by_content: HashMap<Tile, usize> = HashMap::new();
        let mut tile_grid = Array2::zeros((block_rows, block_cols));

        for block_row in 0..block_rows {
            for block_col in 0..block_cols {
                let top = block_row * tile_height;
                let left = block_col * tile_width;
                let height = tile_height.min(sample_rows - top);
                let width = tile_width.min(sample_cols - left);
                let tile = Tile::from_region(sample, top, left, height, width);

                let next_id = tiles.len();
                let id = match ids_by_content.entry(tile) {
                    Entry::Occupied(entry) => *entry.get(),
                    Entry::Vacant(entry) => {
                        tiles.push(entry.key().clone());
                        frequencies.push(0);
                        entry.insert(next_id);
                        next_id
                    }
                };

                if let Some(count) = frequencies.get_mut(id) {
                    *count += 1;
                }
                if let Some(slot) = tile_grid.get_mut([block_row, block_col]) {
                    *slot = id;
                }
            }
        }

        Ok(Self {
            tiles,
            frequencies,
            tile_grid,
            tile_width,
            tile_height,
        })
    }

    /// All distinct tiles in id order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile for a dense id
    pub fn tile(&self, id: usize) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// Number of distinct tiles
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Occurrence count for a tile id
    pub fn frequency(&self, id: usize) -> Option<usize> {
        self.frequencies.get(id).copied()
    }

    /// Occurrence counts indexed by tile id
    pub fn frequencies(&self) -> &[usize] {
        &self.frequencies
    }

    /// The sample re-expressed as a grid of tile ids at block positions
    pub const fn tile_grid(&self) -> &Array2<usize> {
        &self.tile_grid
    }

    /// Nominal tile width used for partitioning
    pub const fn tile_width(&self) -> usize {
        self.tile_width
    }

    /// Nominal tile height used for partitioning
    pub const fn tile_height(&self) -> usize {
        self.tile_height
    }
}
