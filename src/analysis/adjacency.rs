//! Adjacency rule inference from tile catalogs
//!
//! Two strategies build the rule table: co-occurrence inference records
//! exactly the neighbor pairs present in the sample, border matching permits
//! any pair whose touching edges carry identical symbols.

use crate::algorithm::bitset::TileSet;
use crate::spatial::tiles::{Tile, TileCatalog};
use clap::ValueEnum;

/// Grid direction for neighbor relationships in row-major coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller row indices
    Up,
    /// Toward larger column indices
    Right,
    /// Toward larger row indices
    Down,
    /// Toward smaller column indices
    Left,
}

impl Direction {
    /// All directions in rule-table order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Dense index for rule-table storage
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    /// Row and column offset of the neighbor in this direction
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::Up => [-1, 0],
            Self::Right => [0, 1],
            Self::Down => [1, 0],
            Self::Left => [0, -1],
        }
    }

    /// The direction pointing back toward the origin cell
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }
}

/// How adjacency rules are derived from the sample
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InferenceStrategy {
    /// Permit only the neighbor pairs observed in the sample tile grid
    #[default]
    Observed,
    /// Permit any pair whose touching borders carry identical symbols
    Border,
}

/// Permitted neighbor sets for every direction and tile pairing
///
/// Rule sets are directional and need not be symmetric. An empty set means
/// the sample offered no evidence for that tile in that direction, which
/// leaves the direction unconstrained during propagation but bans the tile
/// from the grid edge facing it.
#[derive(Clone, Debug)]
pub struct AdjacencyRules {
    allowed: Vec<TileSet>,
    tile_count: usize,
}

impl AdjacencyRules {
    /// Create a rule table with no permitted pairings
    pub fn new(tile_count: usize) -> Self {
        Self {
            allowed: vec![TileSet::new(tile_count); Direction::ALL.len() * tile_count],
            tile_count,
        }
    }

    /// Build rules for a catalog using the requested strategy
    pub fn infer(catalog: &TileCatalog, strategy: InferenceStrategy) -> Self {
        match strategy {
            InferenceStrategy::Observed => Self::from_observed(catalog),
            InferenceStrategy::Border => Self::from_borders(catalog),
        }
    }

    /// Record neighbor pairs exactly as they occur in the sample tile grid
    pub fn from_observed(catalog: &TileCatalog) -> Self {
        let mut rules = Self::new(catalog.tile_count());
        let tile_grid = catalog.tile_grid();
        let (rows, cols) = tile_grid.dim();

        for row in 0..rows {
            for col in 0..cols {
                let Some(&tile) = tile_grid.get([row, col]) else {
                    continue;
                };
                for direction in Direction::ALL {
                    let [row_offset, col_offset] = direction.offset();
                    let neighbor_row = row as i32 + row_offset;
                    let neighbor_col = col as i32 + col_offset;
                    if neighbor_row < 0
                        || neighbor_col < 0
                        || neighbor_row >= rows as i32
                        || neighbor_col >= cols as i32
                    {
                        continue;
                    }
                    let Some(&neighbor) =
                        tile_grid.get([neighbor_row as usize, neighbor_col as usize])
                    else {
                        continue;
                    };
                    rules.permit(direction, tile, neighbor);
                }
            }
        }

        rules
    }

    /// Permit pairs whose touching borders carry identical symbols
    ///
    /// Borders only compare equal when their extents match, so truncated
    /// edge tiles pair exclusively with tiles of compatible size along
    /// that axis.
    pub fn from_borders(catalog: &TileCatalog) -> Self {
        let mut rules = Self::new(catalog.tile_count());

        for (tile_id, tile) in catalog.tiles().iter().enumerate() {
            for (neighbor_id, neighbor) in catalog.tiles().iter().enumerate() {
                for direction in Direction::ALL {
                    if border_cells(tile, direction)
                        == border_cells(neighbor, direction.opposite())
                    {
                        rules.permit(direction, tile_id, neighbor_id);
                    }
                }
            }
        }

        rules
    }

    /// Mark `neighbor` as permitted in `direction` from `tile`
    pub fn permit(&mut self, direction: Direction, tile: usize, neighbor: usize) {
        if let Some(set) = self.allowed.get_mut(direction.index() * self.tile_count + tile) {
            set.insert(neighbor);
        }
    }

    /// Permitted neighbor set for a tile in one direction
    pub fn allowed(&self, direction: Direction, tile: usize) -> Option<&TileSet> {
        self.allowed.get(direction.index() * self.tile_count + tile)
    }

    /// Test whether a specific pairing is permitted
    pub fn allows(&self, direction: Direction, tile: usize, neighbor: usize) -> bool {
        self.allowed(direction, tile)
            .is_some_and(|set| set.contains(neighbor))
    }

    /// Whether the sample gave no evidence for this tile in this direction
    pub fn is_unconstrained(&self, direction: Direction, tile: usize) -> bool {
        self.allowed(direction, tile).is_none_or(TileSet::is_empty)
    }

    /// Number of distinct tiles covered by the table
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }
}

// Border cells adjacent to the named direction, in scan order
fn border_cells(tile: &Tile, direction: Direction) -> Vec<usize> {
    match direction {
        Direction::Up => (0..tile.width()).filter_map(|col| tile.get(0, col)).collect(),
        Direction::Down => (0..tile.width())
            .filter_map(|col| tile.get(tile.height() - 1, col))
            .collect(),
        Direction::Left => (0..tile.height())
            .filter_map(|row| tile.get(row, 0))
            .collect(),
        Direction::Right => (0..tile.height())
            .filter_map(|row| tile.get(row, tile.width() - 1))
            .collect(),
    }
}
