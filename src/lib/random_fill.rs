//! Random (key, value) supply for stress-filling a tree.

use std::ops::RangeInclusive;

use rand::Rng;

/// Draws `count` keys uniformly from the inclusive `range` and pairs each
/// with its decimal rendering.
///
/// Duplicate keys are possible; the receiving dictionary's upsert semantics
/// collapse them, so the resulting size may be below `count`. The caller
/// supplies the generator, so tests can pass a seeded one.
pub fn pairs<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    range: RangeInclusive<i64>,
) -> Vec<(i64, String)> {
    (0..count)
        .map(|_| {
            let key = rng.gen_range(range.clone());
            (key, key.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::btree::BTree;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pairs_stay_in_range_and_match_their_rendering() {
        let mut rng = StdRng::seed_from_u64(42);
        let pairs = pairs(&mut rng, 500, -100..=100);
        assert_eq!(pairs.len(), 500);
        for (key, value) in &pairs {
            assert!((-100..=100).contains(key));
            assert_eq!(*value, key.to_string());
        }
    }

    #[test]
    fn test_filling_a_tree_dedupes_on_upsert() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tree = BTree::new(3).unwrap();
        tree.extend(pairs(&mut rng, 200, 1..=50));

        // 200 draws from 50 distinct keys must collide.
        assert!(tree.len() <= 50);
        assert!(!tree.is_empty());
        for (key, value) in &tree {
            assert_eq!(*value, key.to_string());
        }
    }
}
