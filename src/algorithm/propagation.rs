use crate::{
    algorithm::bitset::TileSet,
    algorithm::trace::SolveObserver,
    analysis::adjacency::{AdjacencyRules, Direction},
    spatial::wave::Wave,
};

/// Queue-driven constraint propagation over the wave
///
/// Every elimination is pushed onto a stack and drained most-recent-first.
/// Processing order changes only the traversal, the fixed point reached is
/// the same for any order.
#[derive(Debug)]
pub struct Propagator {
    pending: Vec<([usize; 2], usize)>,
}

impl Default for Propagator {
    fn default() -> Self {
        Self::new()
    }
}

impl Propagator {
    /// Create a propagator with an empty work queue
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Remove a tile at a cell and queue the consequence for propagation
    ///
    /// Repeated removals of the same pair report `false` and are not queued
    /// again, so each elimination is propagated exactly once.
    pub fn eliminate(
        &mut self,
        wave: &mut Wave,
        cell: [usize; 2],
        tile: usize,
        observer: &mut Option<Box<dyn SolveObserver>>,
    ) -> bool {
        if !wave.eliminate(cell, tile) {
            return false;
        }
        if let Some(observer) = observer {
            observer.on_elimination(cell, tile);
        }
        self.pending.push((cell, tile));
        true
    }

    /// Drain the queue until the wave is locally consistent
    ///
    /// For each queued elimination, every neighbor of the affected cell is
    /// re-checked: candidates without support from the cell's surviving
    /// tiles are eliminated in turn. Returns the first cell whose candidate
    /// set became empty, or `None` once consistency is reached.
    pub fn propagate(
        &mut self,
        wave: &mut Wave,
        rules: &AdjacencyRules,
        observer: &mut Option<Box<dyn SolveObserver>>,
    ) -> Option<[usize; 2]> {
        while let Some((cell, _)) = self.pending.pop() {
            for direction in Direction::ALL {
                let Some(neighbor) = neighbor_of(cell, direction, wave.rows(), wave.cols()) else {
                    continue;
                };
                let Some(support) = directional_support(wave, cell, direction, rules) else {
                    continue;
                };
                let unsupported: Vec<usize> = match wave.domain(neighbor) {
                    Some(domain) => domain.iter().filter(|&tile| !support.contains(tile)).collect(),
                    None => continue,
                };
                for tile in unsupported {
                    self.eliminate(wave, neighbor, tile, observer);
                }
                if wave.count(neighbor) == 0 {
                    self.pending.clear();
                    return Some(neighbor);
                }
            }
        }
        None
    }
}

// Neighbor position in the given direction, `None` past the grid edge
const fn neighbor_of(
    cell: [usize; 2],
    direction: Direction,
    rows: usize,
    cols: usize,
) -> Option<[usize; 2]> {
    let [row_offset, col_offset] = direction.offset();
    let row = cell[0] as i32 + row_offset;
    let col = cell[1] as i32 + col_offset;
    if row < 0 || col < 0 || row >= rows as i32 || col >= cols as i32 {
        return None;
    }
    Some([row as usize, col as usize])
}

/// Union of neighbor tiles reachable from a cell's surviving candidates
///
/// Returns `None` when any candidate carries no rule for the direction,
/// which places no constraint on the neighbor.
fn directional_support(
    wave: &Wave,
    cell: [usize; 2],
    direction: Direction,
    rules: &AdjacencyRules,
) -> Option<TileSet> {
    let domain = wave.domain(cell)?;
    let mut support = TileSet::new(rules.tile_count());
    for tile in domain.iter() {
        let allowed = rules.allowed(direction, tile)?;
        if allowed.is_empty() {
            return None;
        }
        support.union_with(allowed);
    }
    Some(support)
}
