//! Wave function collapse generation for symbol grids
//!
//! Extracts tiles from a small sample grid, infers which tiles may sit next
//! to each other, and collapses a larger output grid cell by cell while
//! propagating the consequences of every choice.

#![forbid(unsafe_code)]

/// Core algorithm implementation including propagation, selection, and the solve loop
pub mod algorithm;
/// Sample preprocessing and adjacency rule inference
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for weighted sampling
pub mod math;
/// Spatial tile extraction and wave management
pub mod spatial;

pub use io::error::{GenerationError, Result};
