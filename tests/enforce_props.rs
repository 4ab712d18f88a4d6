//! Property tests for minimum-probability enforcement.
//!
//! 1. **Floor**: every eligible action ends at or above `minimum_uniform / N`.
//! 2. **Mass**: the total stays 1.
//! 3. **Exclusions**: zeros stay zero when `update_zero_elements = false`.
//! 4. **Idempotence**: a second pass with the same parameters changes nothing.

use explore::{enforce_minimum_probability, generate_bag, generate_epsilon_greedy};
use proptest::prelude::*;

const TOL: f32 = 1e-6;

fn sum(p: &[f32]) -> f64 {
    p.iter().map(|&x| f64::from(x)).sum()
}

/// Normalised pmfs with a sprinkling of exact zeros.
fn arb_pmf() -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(prop_oneof![3 => 0.0f32..1.0f32, 1 => Just(0.0f32)], 1..24)
        .prop_filter("needs some mass", |v| v.iter().any(|&x| x > 0.0))
        .prop_map(|v| {
            let total: f32 = v.iter().sum();
            v.into_iter().map(|x| x / total).collect()
        })
}

proptest! {
    #[test]
    fn floor_and_mass_hold(
        pmf in arb_pmf(),
        minimum_uniform in 0.0f32..=1.0f32,
        update_zero in any::<bool>(),
    ) {
        let before = pmf.clone();
        let mut pmf = pmf;
        enforce_minimum_probability(minimum_uniform, update_zero, &mut pmf).unwrap();

        let floor = minimum_uniform / pmf.len() as f32;
        prop_assert!((sum(&pmf) - 1.0).abs() < 1e-5, "sum={} pmf={:?}", sum(&pmf), pmf);
        for (b, a) in before.iter().zip(&pmf) {
            prop_assert!(a.is_finite() && *a >= 0.0);
            if *b == 0.0 && !update_zero {
                prop_assert_eq!(*a, 0.0);
            } else {
                prop_assert!(*a >= floor - TOL, "a={} floor={}", a, floor);
            }
        }
    }

    #[test]
    fn enforcement_is_idempotent(
        pmf in arb_pmf(),
        minimum_uniform in 0.0f32..=1.0f32,
        update_zero in any::<bool>(),
    ) {
        let mut once = pmf;
        enforce_minimum_probability(minimum_uniform, update_zero, &mut once).unwrap();
        let mut twice = once.clone();
        enforce_minimum_probability(minimum_uniform, update_zero, &mut twice).unwrap();
        for (a, b) in once.iter().zip(&twice) {
            prop_assert!((a - b).abs() < TOL, "once={:?} twice={:?}", once, twice);
        }
    }

    #[test]
    fn epsilon_greedy_output_already_conforms(
        epsilon in 0.0f32..=1.0f32,
        n in 1usize..32,
        top in any::<prop::sample::Index>(),
    ) {
        // epsilon-greedy output has a floor of epsilon / N by construction.
        let mut pmf = vec![0.0f32; n];
        generate_epsilon_greedy(epsilon, top.index(n), &mut pmf).unwrap();
        let before = pmf.clone();
        enforce_minimum_probability(epsilon, true, &mut pmf).unwrap();
        for (a, b) in before.iter().zip(&pmf) {
            prop_assert!((a - b).abs() < TOL);
        }
    }

    #[test]
    fn bag_then_floor_keeps_unvoted_actions_excluded(
        n in 2usize..16,
        raw in proptest::collection::vec(any::<prop::sample::Index>(), 1..16),
        minimum_uniform in 0.0f32..=1.0f32,
    ) {
        let votes: Vec<usize> = raw.iter().map(|i| i.index(n)).collect();
        let mut pmf = vec![0.0f32; n];
        generate_bag(&votes, &mut pmf).unwrap();
        enforce_minimum_probability(minimum_uniform, false, &mut pmf).unwrap();
        for (a, &p) in pmf.iter().enumerate() {
            prop_assert_eq!(p == 0.0, !votes.contains(&a));
        }
    }
}
