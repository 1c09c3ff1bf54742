use crate::{
    algorithm::bitset::TileSet,
    algorithm::propagation::Propagator,
    algorithm::selection::{self, CellChoice, RandomSelector},
    algorithm::trace::SolveObserver,
    analysis::adjacency::{AdjacencyRules, Direction, InferenceStrategy},
    analysis::sample::SampleAnalysis,
    io::configuration::MAX_OUTPUT_DIMENSION,
    io::error::{GenerationError, Result, invalid_parameter},
    spatial::tiles::TileCatalog,
    spatial::wave::Wave,
};
use ndarray::Array2;
use std::hash::Hash;

/// Generation parameters for one solve
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Output width in symbols
    pub output_width: usize,
    /// Output height in symbols
    pub output_height: usize,
    /// Tile width in symbols
    pub tile_width: usize,
    /// Tile height in symbols
    pub tile_height: usize,
    /// How adjacency rules are derived from the sample
    pub strategy: InferenceStrategy,
    /// Seed for reproducible generation
    pub seed: u64,
    /// Optional collapse budget, exhausting it aborts the solve
    pub max_steps: Option<usize>,
}

/// Outcome of a single solver step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveStep {
    /// One cell was collapsed and its consequences propagated
    Collapsed {
        /// Grid position of the collapsed cell
        cell: [usize; 2],
        /// Tile id chosen for the cell
        tile: usize,
    },
    /// Every cell is resolved, the output can be reconstructed
    Resolved,
}

/// Wave function collapse solver for one sample and output size
///
/// Owns the extracted catalog, the inferred rule table, and the wave, and
/// drives observe, collapse, and propagate cycles until the grid resolves
/// or a contradiction surfaces.
pub struct Solver<S> {
    analysis: SampleAnalysis<S>,
    catalog: TileCatalog,
    rules: AdjacencyRules,
    wave: Wave,
    propagator: Propagator,
    selector: RandomSelector,
    observer: Option<Box<dyn SolveObserver>>,
    config: SolverConfig,
    steps: usize,
    started: bool,
}

impl<S: Clone + Eq + Hash> Solver<S> {
    /// Build a solver from a sample grid and configuration
    ///
    /// The wave is sized to cover the requested output with whole tiles,
    /// rounding up when tile dimensions do not divide the output evenly.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either tile dimension is zero
    /// - The output does not cover at least one tile
    /// - An output dimension exceeds the maximum allowed size
    /// - The sample has no cells
    pub fn new(sample: &Array2<S>, config: SolverConfig) -> Result<Self> {
        if config.tile_width == 0 || config.tile_height == 0 {
            return Err(invalid_parameter(
                "tile dimensions",
                &format!("{}x{}", config.tile_width, config.tile_height),
                &"both dimensions must be at least 1",
            ));
        }
        if config.output_width < config.tile_width || config.output_height < config.tile_height {
            return Err(invalid_parameter(
                "output dimensions",
                &format!("{}x{}", config.output_width, config.output_height),
                &"output must cover at least one tile",
            ));
        }
        if config.output_width > MAX_OUTPUT_DIMENSION || config.output_height > MAX_OUTPUT_DIMENSION
        {
            return Err(invalid_parameter(
                "output dimensions",
                &format!("{}x{}", config.output_width, config.output_height),
                &format!("dimensions must not exceed {MAX_OUTPUT_DIMENSION}"),
            ));
        }

        let analysis = SampleAnalysis::from_grid(sample)?;
        let catalog =
            TileCatalog::from_coded(analysis.coded(), config.tile_width, config.tile_height)?;
        let rules = AdjacencyRules::infer(&catalog, config.strategy);

        let rows = config.output_height.div_ceil(config.tile_height);
        let cols = config.output_width.div_ceil(config.tile_width);
        let wave = Wave::new(rows, cols, catalog.tile_count());

        Ok(Self {
            analysis,
            catalog,
            rules,
            wave,
            propagator: Propagator::new(),
            selector: RandomSelector::new(config.seed),
            observer: None,
            config,
            steps: 0,
            started: false,
        })
    }

    /// Run one observe, collapse, propagate cycle
    ///
    /// The first call additionally applies boundary bans: tiles without
    /// sample evidence toward a direction are removed from the cells at the
    /// grid edge facing it, and the consequences propagated, before any
    /// cell is collapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell runs out of candidates or the configured
    /// step budget is exhausted.
    pub fn step(&mut self) -> Result<SolveStep> {
        if !self.started {
            self.started = true;
            self.apply_boundary_bans()?;
        }

        let cell = match selection::select_lowest_entropy(&self.wave, &mut self.selector) {
            CellChoice::Complete => return Ok(SolveStep::Resolved),
            CellChoice::Contradiction(cell) => {
                return Err(GenerationError::Contradiction {
                    cell,
                    step: self.steps,
                });
            }
            CellChoice::Next(cell) => cell,
        };

        if let Some(limit) = self.config.max_steps {
            if self.steps >= limit {
                return Err(GenerationError::Aborted { steps: self.steps });
            }
        }
        self.steps += 1;

        let tile = self.collapse(cell)?;

        if let Some(conflict) =
            self.propagator
                .propagate(&mut self.wave, &self.rules, &mut self.observer)
        {
            return Err(GenerationError::Contradiction {
                cell: conflict,
                step: self.steps,
            });
        }

        Ok(SolveStep::Collapsed { cell, tile })
    }

    /// Run steps until the wave resolves, then reconstruct the output
    ///
    /// # Errors
    ///
    /// Returns an error if any step contradicts or exhausts the budget.
    pub fn solve(&mut self) -> Result<Array2<S>> {
        loop {
            if matches!(self.step()?, SolveStep::Resolved) {
                return self.output();
            }
        }
    }

    /// Paint the resolved wave into a symbol grid
    ///
    /// Each cell contributes its lowest remaining tile, clipped to the
    /// requested output bounds. Positions a truncated tile leaves uncovered
    /// keep the first symbol of the alphabet.
    ///
    /// # Errors
    ///
    /// Returns an error if any cell has no remaining candidates.
    pub fn output(&self) -> Result<Array2<S>> {
        let fill =
            self.analysis
                .decode(0)
                .cloned()
                .ok_or_else(|| GenerationError::InvalidSourceData {
                    reason: "sample produced no symbols".to_string(),
                })?;
        let mut output = Array2::from_elem(
            (self.config.output_height, self.config.output_width),
            fill,
        );

        for block_row in 0..self.wave.rows() {
            for block_col in 0..self.wave.cols() {
                let cell = [block_row, block_col];
                let Some(tile_id) = self.wave.first_possible(cell) else {
                    return Err(GenerationError::Contradiction {
                        cell,
                        step: self.steps,
                    });
                };
                let Some(tile) = self.catalog.tile(tile_id) else {
                    continue;
                };
                for tile_row in 0..tile.height() {
                    for tile_col in 0..tile.width() {
                        let row = block_row * self.config.tile_height + tile_row;
                        let col = block_col * self.config.tile_width + tile_col;
                        if row >= self.config.output_height || col >= self.config.output_width {
                            continue;
                        }
                        let Some(symbol) = tile
                            .get(tile_row, tile_col)
                            .and_then(|code| self.analysis.decode(code))
                        else {
                            continue;
                        };
                        if let Some(slot) = output.get_mut([row, col]) {
                            *slot = symbol.clone();
                        }
                    }
                }
            }
        }

        Ok(output)
    }

    /// Attach an observer notified of collapse and elimination events
    pub fn set_observer(&mut self, observer: Box<dyn SolveObserver>) {
        self.observer = Some(observer);
    }

    /// Detach and return the current observer
    pub fn take_observer(&mut self) -> Option<Box<dyn SolveObserver>> {
        self.observer.take()
    }

    /// Collapse steps performed so far
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Cells narrowed to exactly one candidate
    pub fn resolved_cells(&self) -> usize {
        self.wave.resolved_cells()
    }

    /// Total number of wave cells
    pub fn total_cells(&self) -> usize {
        self.wave.total_cells()
    }

    /// Number of distinct tiles extracted from the sample
    pub fn tile_count(&self) -> usize {
        self.catalog.tile_count()
    }

    // Commits the cell to one weighted-random candidate and queues the
    // eliminated alternatives
    fn collapse(&mut self, cell: [usize; 2]) -> Result<usize> {
        let candidates = self.wave.domain(cell).map_or_else(Vec::new, TileSet::to_vec);
        if candidates.is_empty() {
            return Err(GenerationError::Contradiction {
                cell,
                step: self.steps,
            });
        }

        let weights = selection::frequency_weights(&candidates, self.catalog.frequencies());
        let pick = self.selector.weighted_choice(&weights);
        let tile = candidates.get(pick).copied().unwrap_or(0);

        for &candidate in &candidates {
            if candidate != tile {
                self.propagator
                    .eliminate(&mut self.wave, cell, candidate, &mut self.observer);
            }
        }
        self.wave.mark_observed(cell);
        if let Some(observer) = &mut self.observer {
            observer.on_collapse(cell, tile);
        }

        Ok(tile)
    }

    // Tiles with an empty rule set for a direction cannot sit at the grid
    // edge facing it. Runs once before the first collapse so propagation
    // starts from a boundary-consistent wave.
    fn apply_boundary_bans(&mut self) -> Result<()> {
        for direction in Direction::ALL {
            let banned: Vec<usize> = (0..self.catalog.tile_count())
                .filter(|&tile| self.rules.is_unconstrained(direction, tile))
                .collect();
            if banned.is_empty() {
                continue;
            }
            for cell in edge_cells(self.wave.rows(), self.wave.cols(), direction) {
                for &tile in &banned {
                    self.propagator
                        .eliminate(&mut self.wave, cell, tile, &mut self.observer);
                }
            }
        }

        if let Some(cell) = self.wave.first_empty_cell() {
            return Err(GenerationError::Contradiction { cell, step: 0 });
        }
        if let Some(cell) =
            self.propagator
                .propagate(&mut self.wave, &self.rules, &mut self.observer)
        {
            return Err(GenerationError::Contradiction { cell, step: 0 });
        }
        Ok(())
    }
}

// Cells on the physical edge that faces the given direction
fn edge_cells(rows: usize, cols: usize, direction: Direction) -> Vec<[usize; 2]> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    match direction {
        Direction::Up => (0..cols).map(|col| [0, col]).collect(),
        Direction::Down => (0..cols).map(|col| [rows - 1, col]).collect(),
        Direction::Left => (0..rows).map(|row| [row, 0]).collect(),
        Direction::Right => (0..rows).map(|row| [row, cols - 1]).collect(),
    }
}
