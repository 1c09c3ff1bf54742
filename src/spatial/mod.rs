//! Spatial data structures for tiles and the output wave
//!
//! This module contains spatial-related functionality including:
//! - Tile extraction and the deduplicated catalog
//! - Per-cell candidate domains for the output grid

/// Tile extraction and catalog management
pub mod tiles;
/// Per-cell candidate domains
pub mod wave;

pub use wave::Wave;
