//! Seeded samplers.
//!
//! Every sampler consumes draws from the seed's [`SeedStream`](crate::SeedStream) in a fixed
//! order, so a logged `(seed, distribution)` pair is enough to replay the choice.

use crate::error::ensure_non_empty;
use crate::normalize::normalize;
use crate::{ExplorationError, Result, Seed};

/// Normalise `pmf` in place, then draw an action index.
///
/// The chosen index is the first position whose running sum is strictly greater than the draw
/// `u ∈ [0, 1)`, so zero-probability actions are never chosen.
///
/// Fails with `BadRange` for an empty pmf or a non-finite entry.
pub fn sample_after_normalizing<'a>(seed: impl Into<Seed<'a>>, pmf: &mut [f32]) -> Result<usize> {
    ensure_non_empty(pmf, "pmf is empty")?;
    normalize(pmf)?;
    let u = seed.into().stream().next_f32();
    Ok(walk(u, pmf))
}

/// Draw an action index from a pmf the caller already keeps normalised.
///
/// If the draw is still unmatched after the full walk (the pmf sums to less than the draw),
/// the residual goes to the last action. The input must be normalised: a pmf whose mass falls
/// short of 1 can hand the residual to a trailing zero-probability action.
///
/// Fails with `BadRange` for an empty pmf.
pub fn sample_without_normalizing<'a>(seed: impl Into<Seed<'a>>, pmf: &[f32]) -> Result<usize> {
    ensure_non_empty(pmf, "pmf is empty")?;
    let u = seed.into().stream().next_f32();
    Ok(walk(u, pmf))
}

/// Draw a value from a bucketed density over `[range_min, range_max)`.
///
/// `pdf` is normalised in place and split into `pdf.len()` equal-width buckets over the range.
/// Draw 0 selects the bucket (as in [`sample_after_normalizing`]); draw 1 places the value
/// uniformly inside it as `range_min + width * (bucket + draw1)`, evaluated in `f32` so that
/// replays agree to the bit. Only when `range_max - range_min` overflows `f32` is the span
/// computed in `f64`.
///
/// Fails with `BadRange` when either bound is non-finite, `range_min >= range_max`, or `pdf`
/// is empty.
pub fn sample_pdf<'a>(
    seed: impl Into<Seed<'a>>,
    pdf: &mut [f32],
    range_min: f32,
    range_max: f32,
) -> Result<f32> {
    if !range_min.is_finite() || !range_max.is_finite() {
        return Err(ExplorationError::BadRange("range bounds must be finite"));
    }
    if range_min >= range_max {
        return Err(ExplorationError::BadRange("range_min must be below range_max"));
    }
    ensure_non_empty(pdf, "pdf is empty")?;
    normalize(pdf)?;

    let mut stream = seed.into().stream();
    let bucket = walk(stream.next_f32(), pdf);
    let offset = stream.next_f32();

    let span = range_max - range_min;
    let chosen = if span.is_finite() {
        let width = span / pdf.len() as f32;
        range_min + width * (bucket as f32 + offset)
    } else {
        // e.g. -f32::MAX..f32::MAX
        let width = (f64::from(range_max) - f64::from(range_min)) / pdf.len() as f64;
        (f64::from(range_min) + width * (bucket as f64 + f64::from(offset))) as f32
    };
    if chosen >= range_max {
        return Ok(next_down(range_max).max(range_min));
    }
    Ok(chosen.max(range_min))
}

/// Inverse-CDF walk shared by every sampler.
fn walk(u: f32, pmf: &[f32]) -> usize {
    let mut sum = 0.0f32;
    for (i, &p) in pmf.iter().enumerate() {
        sum += p;
        if sum > u {
            return i;
        }
    }
    let fallback = pmf.len().saturating_sub(1);
    tracing::trace!(u, sum, fallback, "draw exceeded cumulative mass; assigning residual");
    fallback
}

/// Largest `f32` strictly below a finite `x`.
fn next_down(x: f32) -> f32 {
    if x == 0.0 {
        return -f32::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f32::from_bits(bits - 1)
    } else {
        f32::from_bits(bits + 1)
    }
}
