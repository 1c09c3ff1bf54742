//! Symbol interning over arbitrary sample alphabets

use crate::io::error::{GenerationError, Result};
use ndarray::Array2;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Sample grid re-expressed over dense symbol codes
///
/// Codes are assigned in first-seen row-major order so equal samples always
/// produce equal codings. The original symbols stay available for
/// reconstructing output grids.
#[derive(Clone, Debug)]
pub struct SampleAnalysis<S> {
    coded: Array2<usize>,
    alphabet: Vec<S>,
}

impl<S: Clone + Eq + Hash> SampleAnalysis<S> {
    /// Intern every distinct symbol in the sample
    ///
    /// # Errors
    ///
    /// Returns an error if the sample has no cells.
    pub fn from_grid(sample: &Array2<S>) -> Result<Self> {
        let (rows, cols) = sample.dim();
        if rows == 0 || cols == 0 {
            return Err(GenerationError::InvalidSourceData {
                reason: "sample grid has no cells".to_string(),
            });
        }

        let mut codes: HashMap<S, usize> = HashMap::new();
        let mut alphabet: Vec<S> = Vec::new();
        let mut coded = Array2::zeros((rows, cols));

        for row in 0..rows {
            for col in 0..cols {
                let Some(symbol) = sample.get([row, col]) else {
                    continue;
                };
                let next_code = alphabet.len();
                let code = match codes.entry(symbol.clone()) {
                    Entry::Occupied(entry) => *entry.get(),
                    Entry::Vacant(entry) => {
                        alphabet.push(entry.key().clone());
                        entry.insert(next_code);
                        next_code
                    }
                };
                if let Some(slot) = coded.get_mut([row, col]) {
                    *slot = code;
                }
            }
        }

        Ok(Self { coded, alphabet })
    }

    /// The sample as a grid of dense symbol codes
    pub const fn coded(&self) -> &Array2<usize> {
        &self.coded
    }

    /// Distinct symbols in first-seen order
    pub fn alphabet(&self) -> &[S] {
        &self.alphabet
    }

    /// Number of distinct symbols
    pub fn symbol_count(&self) -> usize {
        self.alphabet.len()
    }

    /// Original symbol for a dense code
    pub fn decode(&self, code: usize) -> Option<&S> {
        self.alphabet.get(code)
    }
}
