//! Analysis modules for sample preprocessing and rule inference

/// Adjacency rule inference from tile catalogs
pub mod adjacency;
/// Symbol interning over sample grids
pub mod sample;
