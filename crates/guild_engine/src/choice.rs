//! Random choice helpers shared by the opponents
//!
//! Every helper takes the caller's RNG so tests can seed it.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Probability that a heuristic opponent plays its second-best move
pub const VARIETY_CHANCE: f64 = 0.1;

/// Probability that a Medium opponent takes a preferred move when one exists
pub const PREFERENCE_CHANCE: f64 = 0.6;

/// Uniform choice; `None` for an empty slice
pub fn uniform<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Option<T> {
    items.choose(rng).cloned()
}

/// With probability [`PREFERENCE_CHANCE`] pick uniformly from `preferred`,
/// otherwise from `all`
pub fn prefer<T: Clone, R: Rng + ?Sized>(preferred: &[T], all: &[T], rng: &mut R) -> Option<T> {
    if !preferred.is_empty() && rng.random_bool(PREFERENCE_CHANCE) {
        return uniform(preferred, rng);
    }
    uniform(all, rng)
}

/// Sort by score, best first. Ties keep generation order.
pub fn rank<T>(scored: &mut [(T, f64)]) {
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
}

/// Uniform pick among the best `len / divisor` entries (at least one)
pub fn from_top<T: Clone, R: Rng + ?Sized>(
    mut scored: Vec<(T, f64)>,
    divisor: usize,
    rng: &mut R,
) -> Option<T> {
    rank(&mut scored);
    let keep = (scored.len() / divisor.max(1)).max(1).min(scored.len());
    let pool: Vec<T> = scored.into_iter().take(keep).map(|(mv, _)| mv).collect();
    uniform(&pool, rng)
}

/// The best entry, or the runner-up with probability [`VARIETY_CHANCE`]
pub fn best_with_variety<T, R: Rng + ?Sized>(mut scored: Vec<(T, f64)>, rng: &mut R) -> Option<T> {
    rank(&mut scored);
    let pick = if scored.len() > 1 && rng.random_bool(VARIETY_CHANCE) {
        1
    } else {
        0
    };
    scored.into_iter().nth(pick).map(|(mv, _)| mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_inputs_yield_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(uniform::<u8, _>(&[], &mut rng), None);
        assert_eq!(prefer::<u8, _>(&[], &[], &mut rng), None);
        assert_eq!(from_top::<u8, _>(Vec::new(), 2, &mut rng), None);
        assert_eq!(best_with_variety::<u8, _>(Vec::new(), &mut rng), None);
    }

    #[test]
    fn test_from_top_only_picks_upper_half() {
        //! Over many draws nothing below the cut is ever chosen
        let mut rng = StdRng::seed_from_u64(7);
        let scored: Vec<(u8, f64)> = (0..8).map(|i| (i, f64::from(i))).collect();
        for _ in 0..200 {
            let pick = from_top(scored.clone(), 2, &mut rng);
            assert!(matches!(pick, Some(4..=7)), "picked {pick:?}");
        }
    }

    #[test]
    fn test_from_top_small_pool_keeps_one() {
        let mut rng = StdRng::seed_from_u64(3);
        let scored = vec![(1u8, 0.5), (2u8, 9.0)];
        assert_eq!(from_top(scored, 4, &mut rng), Some(2));
    }

    #[test]
    fn test_best_with_variety_mostly_best() {
        //! The top entry dominates and only the runner-up appears otherwise
        let mut rng = StdRng::seed_from_u64(11);
        let scored = vec![(0u8, 1.0), (1u8, 5.0), (2u8, 3.0)];
        let mut best = 0;
        for _ in 0..500 {
            match best_with_variety(scored.clone(), &mut rng) {
                Some(1) => best += 1,
                Some(2) => {}
                other => panic!("unexpected pick {other:?}"),
            }
        }
        assert!(best > 400, "best chosen only {best} times");
    }
}
