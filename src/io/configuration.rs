//! Algorithm constants and runtime configuration defaults

// Entropy scoring
/// Magnitude of the random jitter added to cell entropy for tie-breaking
pub const ENTROPY_JITTER: f64 = 1e-6;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output dimension in symbols
pub const MAX_OUTPUT_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default tile width in symbols
pub const DEFAULT_TILE_WIDTH: usize = 1;
/// Default tile height in symbols
pub const DEFAULT_TILE_HEIGHT: usize = 1;

/// Default number of extra attempts after a failed solve
pub const DEFAULT_RETRIES: usize = 0;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
