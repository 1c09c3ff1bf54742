//! Command-line interface for batch solving text sample files

use crate::algorithm::solver::{SolveStep, Solver, SolverConfig};
use crate::analysis::adjacency::InferenceStrategy;
use crate::io::configuration::{
    DEFAULT_RETRIES, DEFAULT_SEED, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::text;
use clap::Parser;
use ndarray::Array2;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Generate symbol grids with wave function collapse"
)]
/// Command-line arguments for the grid generation tool
pub struct Cli {
    /// Input text file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output width in cells (defaults to the sample width)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Output height in cells (defaults to the sample height)
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Width of the tiles extracted from the sample
    #[arg(long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: usize,

    /// Height of the tiles extracted from the sample
    #[arg(long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: usize,

    /// How adjacency rules are inferred from the sample
    #[arg(long, value_enum, default_value = "observed")]
    pub strategy: InferenceStrategy,

    /// Abort the solve after this many collapse steps
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Retries with adjusted seeds after a contradiction or abort
    #[arg(short, long, default_value_t = DEFAULT_RETRIES)]
    pub retries: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch solving of text sample files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("txt") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a .txt sample",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("txt")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a .txt sample or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback between retry attempts
    #[allow(clippy::print_stderr)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = Self::get_output_path(input_path);
        let sample = text::load_sample(input_path)?;

        let base = SolverConfig {
            output_width: self.cli.width.unwrap_or_else(|| sample.ncols()),
            output_height: self.cli.height.unwrap_or_else(|| sample.nrows()),
            tile_width: self.cli.tile_width,
            tile_height: self.cli.tile_height,
            strategy: self.cli.strategy,
            seed: self.cli.seed,
            max_steps: self.cli.max_steps,
        };

        let mut attempt: usize = 0;
        loop {
            let config = SolverConfig {
                seed: self.cli.seed.wrapping_add(attempt as u64),
                ..base
            };
            let mut solver = Solver::new(&sample, config)?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(index, input_path, solver.total_cells());
            }

            match self.drive(&mut solver, index) {
                Ok(output) => {
                    text::write_grid(&output, &output_path)?;
                    if let Some(ref mut pm) = self.progress_manager {
                        pm.complete_file(index);
                    }
                    return Ok(());
                }
                Err(error) if error.is_retryable() && attempt < self.cli.retries => {
                    if !self.cli.quiet {
                        eprintln!("Retrying {}: {error}", input_path.display());
                    }
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }

    fn drive(&mut self, solver: &mut Solver<char>, index: usize) -> Result<Array2<char>> {
        loop {
            match solver.step()? {
                SolveStep::Resolved => return solver.output(),
                SolveStep::Collapsed { .. } => {
                    if let Some(ref mut pm) = self.progress_manager {
                        pm.update_cells(index, solver.resolved_cells());
                    }
                }
            }
        }
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
