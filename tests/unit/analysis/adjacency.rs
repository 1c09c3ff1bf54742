//! Tests for direction geometry and adjacency rule inference

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use wavetile::analysis::adjacency::{AdjacencyRules, Direction, InferenceStrategy};
    use wavetile::analysis::sample::SampleAnalysis;
    use wavetile::spatial::tiles::TileCatalog;

    fn catalog(rows: &[&str], tile_width: usize, tile_height: usize) -> TileCatalog {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let cells: Vec<char> = rows.iter().flat_map(|row| row.chars()).collect();
        let sample = Array2::from_shape_vec((height, width), cells).unwrap();
        let analysis = SampleAnalysis::from_grid(&sample).unwrap();
        TileCatalog::from_coded(analysis.coded(), tile_width, tile_height).unwrap()
    }

    // Tests opposite is an involution and negates the offset
    // Verified by swapping the Left and Down mappings
    #[test]
    fn test_direction_opposite_negates_offset() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);

            let [row, col] = direction.offset();
            let [opposite_row, opposite_col] = direction.opposite().offset();
            assert_eq!(row + opposite_row, 0);
            assert_eq!(col + opposite_col, 0);
        }
    }

    // Tests direction indices are dense and distinct
    // Verified by mapping two directions to one index
    #[test]
    fn test_direction_indices_are_dense() {
        let mut seen = [false; 4];
        for direction in Direction::ALL {
            let index = direction.index();
            assert!(index < 4);
            assert!(!seen[index], "Duplicate direction index {index}");
            seen[index] = true;
        }
    }

    // Tests observed inference records exactly the sampled neighbor pairs
    // Verified by permitting the reversed pair as well
    #[test]
    fn test_observed_rules_match_sample_pairs() {
        let rules = AdjacencyRules::infer(
            &catalog(&["AB", "BA"], 1, 1),
            InferenceStrategy::Observed,
        );

        // The checkerboard only ever pairs a tile with the other one
        for direction in Direction::ALL {
            assert!(rules.allows(direction, 0, 1));
            assert!(rules.allows(direction, 1, 0));
            assert!(!rules.allows(direction, 0, 0));
            assert!(!rules.allows(direction, 1, 1));
        }
    }

    // Tests directions without sample evidence yield empty rule sets
    // Verified by seeding every direction with the full tile set
    #[test]
    fn test_missing_evidence_leaves_direction_unconstrained() {
        let rules = AdjacencyRules::infer(&catalog(&["AB"], 1, 1), InferenceStrategy::Observed);

        assert!(rules.is_unconstrained(Direction::Up, 0));
        assert!(rules.is_unconstrained(Direction::Down, 0));
        assert!(rules.is_unconstrained(Direction::Left, 0));
        assert!(!rules.is_unconstrained(Direction::Right, 0));
        assert!(rules.allowed(Direction::Up, 0).unwrap().is_empty());
        assert!(rules.allows(Direction::Right, 0, 1));
    }

    // Tests border matching with single-symbol tiles reduces to equality
    // Verified by comparing borders against the same side of the neighbor
    #[test]
    fn test_border_rules_pair_identical_symbols() {
        let rules = AdjacencyRules::infer(&catalog(&["AB", "BA"], 1, 1), InferenceStrategy::Border);

        for direction in Direction::ALL {
            assert!(rules.allows(direction, 0, 0));
            assert!(rules.allows(direction, 1, 1));
            assert!(!rules.allows(direction, 0, 1));
            assert!(!rules.allows(direction, 1, 0));
        }
    }

    // Tests border matching requires matching border extents
    // Verified by comparing only the overlapping border prefix
    #[test]
    fn test_border_rules_respect_truncated_extents() {
        // 3x3 sample in 2x2 tiles: full, 2x1, 1x2, and 1x1 shapes
        let rules = AdjacencyRules::infer(
            &catalog(&["AAA", "AAA", "AAA"], 2, 2),
            InferenceStrategy::Border,
        );

        // The full tile's two-cell border matches the 2x1 tile's border
        assert!(rules.allows(Direction::Right, 0, 1));
        // but not the single-cell border of the 1x1 tile
        assert!(!rules.allows(Direction::Right, 0, 3));
        assert!(rules.allows(Direction::Right, 2, 3));
        assert!(rules.allows(Direction::Down, 0, 2));
        assert!(!rules.allows(Direction::Down, 0, 3));
    }

    // Tests manual permits are directional
    // Verified by inserting the mirrored pairing automatically
    #[test]
    fn test_permit_is_directional() {
        let mut rules = AdjacencyRules::new(3);
        rules.permit(Direction::Up, 1, 2);

        assert!(rules.allows(Direction::Up, 1, 2));
        assert!(!rules.allows(Direction::Down, 2, 1));
        assert!(!rules.allows(Direction::Up, 2, 1));
        assert_eq!(rules.tile_count(), 3);
    }

    // Tests out-of-range tile ids read as unconstrained
    // Verified by panicking on out-of-range lookups
    #[test]
    fn test_out_of_range_ids_are_unconstrained() {
        let rules = AdjacencyRules::new(2);

        assert!(rules.allowed(Direction::Left, 9).is_none());
        assert!(!rules.allows(Direction::Left, 9, 0));
        assert!(rules.is_unconstrained(Direction::Left, 9));
    }
}
