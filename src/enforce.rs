//! Minimum-probability enforcement.
//!
//! Guarantees every eligible action at least `minimum_uniform / N` while keeping the total at 1.
//! Zero entries are hard exclusions unless `update_zero_elements` is set.

use crate::error::ensure_non_empty;
use crate::{ExplorationError, Result};

/// Raise every eligible entry of `pmf` to at least `minimum_uniform / pmf.len()`.
///
/// Eligible entries are the non-zero ones, plus the zero ones when `update_zero_elements` is
/// true. Excluded zeros are left at 0.
///
/// The eligible mass is first normalised, then water-filled: entries that would sit at or
/// below the floor are pinned to it and the others share the remaining mass in proportion to
/// their current values. The pinned set is grown until it is stable, so no entry is pushed
/// under the floor by the rescaling and a second application is a no-op (up to rounding).
/// When nothing is left to scale (e.g. `minimum_uniform = 1`), eligible entries become uniform
/// over the support.
///
/// Fails with `BadRange` when `minimum_uniform` is outside `[0, 1]`, `pmf` is empty, or an
/// entry is negative or non-finite. A pmf with no eligible entries is left unchanged.
pub fn enforce_minimum_probability(
    minimum_uniform: f32,
    update_zero_elements: bool,
    pmf: &mut [f32],
) -> Result<()> {
    if !(0.0..=1.0).contains(&minimum_uniform) {
        return Err(ExplorationError::BadRange("minimum_uniform must be in [0, 1]"));
    }
    ensure_non_empty(pmf, "pmf is empty")?;
    if pmf.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return Err(ExplorationError::BadRange(
            "pmf entries must be finite and non-negative",
        ));
    }

    let eligible = |p: f32| p > 0.0 || update_zero_elements;
    let support = pmf.iter().filter(|&&p| eligible(p)).count();
    if support == 0 {
        return Ok(());
    }

    let total: f64 = pmf.iter().map(|&p| f64::from(p)).sum();
    if total <= 0.0 {
        tracing::trace!(support, "pmf has no mass; uniform over support");
        let uniform = 1.0 / support as f32;
        pmf.fill(uniform);
        return Ok(());
    }
    let floor = f64::from(minimum_uniform) / pmf.len() as f64;

    let mut ratio = 1.0;
    let (mut pinned, mut free) = partition(pmf, update_zero_elements, total, floor, ratio);
    for _ in 0..=support {
        if free <= 0.0 {
            break;
        }
        let next = (1.0 - pinned as f64 * floor) / free;
        let (pinned_next, free_next) = partition(pmf, update_zero_elements, total, floor, next);
        ratio = next;
        if pinned_next == pinned {
            break;
        }
        pinned = pinned_next;
        free = free_next;
    }

    if free <= 0.0 {
        tracing::trace!(support, "no free mass left; uniform over support");
        let uniform = 1.0 / support as f32;
        for p in pmf.iter_mut().filter(|p| eligible(**p)) {
            *p = uniform;
        }
        return Ok(());
    }

    for p in pmf.iter_mut() {
        if !eligible(*p) {
            continue;
        }
        let scaled = f64::from(*p) / total * ratio;
        *p = if scaled <= floor { floor as f32 } else { scaled as f32 };
    }
    Ok(())
}

/// Count eligible entries pinned at `floor` under `ratio`, and sum the (normalised) mass of
/// the rest.
fn partition(pmf: &[f32], update_zero: bool, total: f64, floor: f64, ratio: f64) -> (usize, f64) {
    let mut pinned = 0usize;
    let mut free = 0.0f64;
    for &p in pmf {
        if !(p > 0.0 || update_zero) {
            continue;
        }
        let q = f64::from(p) / total;
        if q * ratio <= floor {
            pinned += 1;
        } else {
            free += q;
        }
    }
    (pinned, free)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: &[f32], want: &[f32]) {
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(want) {
            assert!((g - w).abs() < 1e-6, "got={got:?} want={want:?}");
        }
    }

    #[test]
    fn lifts_small_entries_and_rescales_the_rest() {
        let mut pmf = [0.9f32, 0.1, 0.0];
        enforce_minimum_probability(0.6, false, &mut pmf).unwrap();
        assert_close(&pmf, &[0.8, 0.2, 0.0]);
    }

    #[test]
    fn rescaling_never_pushes_an_entry_under_the_floor() {
        // A single proportional rescale would leave 0.31 at ~0.217 here.
        let mut pmf = [0.31f32, 0.0, 0.69];
        enforce_minimum_probability(0.9, true, &mut pmf).unwrap();
        assert_close(&pmf, &[0.3, 0.3, 0.4]);
    }

    #[test]
    fn full_uniform_floor() {
        let mut pmf = [0.5f32, 0.5, 0.0];
        enforce_minimum_probability(1.0, true, &mut pmf).unwrap();
        assert_close(&pmf, &[1.0 / 3.0; 3]);

        let mut pmf = [0.7f32, 0.3, 0.0];
        enforce_minimum_probability(1.0, false, &mut pmf).unwrap();
        assert_close(&pmf, &[2.0 / 3.0, 1.0 / 3.0, 0.0]);
    }

    #[test]
    fn all_zero_pmf() {
        let mut pmf = [0.0f32; 4];
        enforce_minimum_probability(0.2, false, &mut pmf).unwrap();
        assert_eq!(pmf, [0.0; 4]);
        enforce_minimum_probability(0.2, true, &mut pmf).unwrap();
        assert_close(&pmf, &[0.25; 4]);
    }

    #[test]
    fn zero_minimum_only_normalises() {
        let mut pmf = [0.2f32, 0.2, 0.0];
        enforce_minimum_probability(0.0, false, &mut pmf).unwrap();
        assert_close(&pmf, &[0.5, 0.5, 0.0]);
    }

    #[test]
    fn rejects_bad_inputs() {
        let mut pmf = [0.5f32, 0.5];
        assert!(enforce_minimum_probability(1.01, true, &mut pmf).is_err());
        assert!(enforce_minimum_probability(-0.1, true, &mut pmf).is_err());
        assert!(enforce_minimum_probability(f32::NAN, true, &mut pmf).is_err());
        assert!(enforce_minimum_probability(0.1, true, &mut []).is_err());
        let mut bad = [0.5f32, -0.1];
        assert_eq!(
            enforce_minimum_probability(0.1, true, &mut bad).unwrap_err().code(),
            crate::BAD_RANGE
        );
    }
}
