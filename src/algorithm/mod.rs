/// Efficient bitset implementation for tile candidate tracking
pub mod bitset;
/// Constraint propagation across the wave
pub mod propagation;
/// Entropy-based cell selection and weighted collapse choices
pub mod selection;
/// Solve loop orchestration from sample to output grid
pub mod solver;
/// Observer hooks and event recording
pub mod trace;
