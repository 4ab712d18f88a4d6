//! In-place normalisation used by the samplers before drawing.

use crate::{ExplorationError, Result};

/// Rescale `pmf` in place so it sums to 1.
///
/// Negative entries are clamped to 0. An all-zero buffer becomes `[1, 0, ..]`: position 0 is
/// the caller's best-ranked action. Accumulation is in `f32` so that every port normalises to
/// the same bits; if finite weights overflow the total, they are first rescaled by the largest
/// entry. Non-finite entries are rejected with `BadRange`.
pub(crate) fn normalize(pmf: &mut [f32]) -> Result<()> {
    if pmf.iter().any(|p| !p.is_finite()) {
        return Err(ExplorationError::BadRange("pmf entries must be finite"));
    }

    let mut total = 0.0f32;
    for p in pmf.iter_mut() {
        if *p < 0.0 {
            *p = 0.0;
        }
        total += *p;
    }

    if total.is_infinite() {
        // Finite weights whose sum overflows: bring them under 1 first.
        let max = pmf.iter().copied().fold(0.0f32, f32::max);
        tracing::trace!(max, "pmf total overflows f32; rescaling by the max entry");
        total = 0.0;
        for p in pmf.iter_mut() {
            *p /= max;
            total += *p;
        }
    }

    if total == 0.0 {
        tracing::trace!(n = pmf.len(), "pmf has no mass; choosing the first action");
        if let Some(first) = pmf.first_mut() {
            *first = 1.0;
        }
        return Ok(());
    }
    if total != 1.0 {
        for p in pmf.iter_mut() {
            *p /= total;
        }
    }
    Ok(())
}
