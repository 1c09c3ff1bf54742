use crate::{io::configuration::ENTROPY_JITTER, math::probability, spatial::wave::Wave};
use num_traits::ToPrimitive;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Outcome of scanning the wave for the next cell to collapse
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellChoice {
    /// Lowest-entropy unresolved cell to collapse next
    Next([usize; 2]),
    /// Every cell is observed or narrowed to a single candidate
    Complete,
    /// A cell has no remaining candidates
    Contradiction([usize; 2]),
}

/// Seeded random source for reproducible collapse decisions
///
/// All randomness in a solve flows through one generator, so a fixed seed
/// reproduces the identical sequence of selections and collapses.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic selector from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Entropy tie-break noise scaled to stay below any count difference
    pub fn jitter(&mut self) -> f64 {
        self.rng.random::<f64>() * ENTROPY_JITTER
    }

    /// Weighted random selection over arbitrary numeric weights
    ///
    /// Returns an index into the weight slice drawn from the cumulative
    /// distribution of the weights.
    pub fn weighted_choice<W: ToPrimitive>(&mut self, weights: &[W]) -> usize {
        probability::weighted_index(weights, self.rng.random::<f64>())
    }
}

/// Scan the wave for the unobserved cell with the lowest entropy
///
/// Entropy is the natural log of the remaining candidate count plus a small
/// random jitter, so ties between equal counts break randomly while cells
/// with strictly fewer candidates always win. Cells already observed or
/// narrowed to one candidate are skipped.
pub fn select_lowest_entropy(wave: &Wave, selector: &mut RandomSelector) -> CellChoice {
    let mut best: Option<[usize; 2]> = None;
    let mut best_entropy = f64::INFINITY;

    for row in 0..wave.rows() {
        for col in 0..wave.cols() {
            let cell = [row, col];
            if wave.is_observed(cell) {
                continue;
            }
            let count = wave.count(cell);
            if count == 0 {
                return CellChoice::Contradiction(cell);
            }
            if count == 1 {
                continue;
            }
            let entropy = (count as f64).ln() + selector.jitter();
            if entropy < best_entropy {
                best_entropy = entropy;
                best = Some(cell);
            }
        }
    }

    best.map_or(CellChoice::Complete, CellChoice::Next)
}

/// Collapse weights for a candidate list
///
/// Each candidate weighs in at its sample frequency. Ids missing from the
/// frequency table default to one so they stay selectable.
pub fn frequency_weights(candidates: &[usize], frequencies: &[usize]) -> Vec<usize> {
    candidates
        .iter()
        .map(|&tile| frequencies.get(tile).copied().unwrap_or(1))
        .collect()
}
