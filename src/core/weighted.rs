/// Weighted random choice shared by every sampling step.
use log::trace;
use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Pick one candidate with probability proportional to its weight.
///
/// Falls back to a uniform pick when the weights cannot form a
/// distribution (all zero, negative, non-finite, or a length mismatch).
/// Returns `None` only when `candidates` is empty.
pub fn weighted_choice<'a, T>(
    candidates: &'a [T],
    weights: &[f64],
    rng: &mut StdRng,
) -> Option<&'a T> {
    if candidates.is_empty() {
        return None;
    }

    if weights.len() == candidates.len() {
        if let Ok(dist) = WeightedIndex::new(weights) {
            return Some(&candidates[dist.sample(rng)]);
        }
    }

    trace!(
        "weights unusable for {} candidates, choosing uniformly",
        candidates.len()
    );
    candidates.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn empty_candidates() {
        let mut rng = StdRng::seed_from_u64(1);
        let none: [&str; 0] = [];
        assert!(weighted_choice(&none, &[], &mut rng).is_none());
    }

    #[test]
    fn zero_weight_never_chosen() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates = ["a", "b", "c"];
        for _ in 0..200 {
            let pick = weighted_choice(&candidates, &[0.0, 1.0, 0.0], &mut rng).unwrap();
            assert_eq!(*pick, "b");
        }
    }

    #[test]
    fn all_zero_weights_fall_back_to_uniform() {
        let mut rng = StdRng::seed_from_u64(3);
        let candidates = ["a", "b", "c"];
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(*weighted_choice(&candidates, &[0.0, 0.0, 0.0], &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn mismatched_weights_fall_back_to_uniform() {
        let mut rng = StdRng::seed_from_u64(3);
        let candidates = [1, 2];
        assert!(weighted_choice(&candidates, &[1.0], &mut rng).is_some());
    }

    #[test]
    fn heavier_weight_wins_more_often() {
        let mut rng = StdRng::seed_from_u64(11);
        let candidates = ['x', 'y'];
        let mut x = 0;
        for _ in 0..1000 {
            if *weighted_choice(&candidates, &[9.0, 1.0], &mut rng).unwrap() == 'x' {
                x += 1;
            }
        }
        assert!(x > 700, "expected 'x' to dominate, got {x}/1000");
    }

    #[test]
    fn deterministic_under_seed() {
        let candidates = ["p", "q", "r", "s"];
        let weights = [0.1, 0.2, 0.3, 0.4];
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let a: Vec<_> = (0..20)
            .map(|_| weighted_choice(&candidates, &weights, &mut rng1).unwrap())
            .collect();
        let b: Vec<_> = (0..20)
            .map(|_| weighted_choice(&candidates, &weights, &mut rng2).unwrap())
            .collect();
        assert_eq!(a, b);
    }
}
