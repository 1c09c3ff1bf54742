use num_traits::ToPrimitive;

/// Map a unit-interval sample to an index drawn from cumulative weights
///
/// Walks the cumulative distribution of the weights and returns the first
/// index whose running total covers `sample * total`. Weights that fail
/// numeric conversion contribute nothing. A non-positive total falls back
/// to the first index so callers always get a valid slot for non-empty
/// input.
pub fn weighted_index<W: ToPrimitive>(weights: &[W], sample: f64) -> usize {
    let total: f64 = weights.iter().filter_map(ToPrimitive::to_f64).sum();
    if total <= 0.0 {
        return 0;
    }

    let mut remaining = sample * total;
    for (index, weight) in weights.iter().enumerate() {
        remaining -= weight.to_f64().unwrap_or(0.0);
        if remaining <= 0.0 {
            return index;
        }
    }

    weights.len().saturating_sub(1)
}
