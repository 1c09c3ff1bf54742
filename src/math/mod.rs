//! Mathematical utilities for the algorithm

/// Probability distributions and weighted sampling
pub mod probability;
