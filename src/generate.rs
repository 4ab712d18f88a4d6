//! PMF generators.
//!
//! Each generator fills a caller-owned, pre-sized buffer. Nothing is allocated and nothing is
//! retained past the call. The `*_pmf` forms allocate a `Vec<f32>` for callers who do not
//! manage their own buffers.
//!
//! Sums are accumulated in `f64` so the written `f32` entries sum to 1 within a few ulps.

use crate::error::{ensure_non_empty, ensure_same_len};
use crate::{ExplorationError, Result};

/// Epsilon-greedy: `epsilon / N` everywhere, plus `1 - epsilon` on `top_action`.
///
/// Fails with `BadRange` when `epsilon` is outside `[0, 1]` (or NaN), `pmf` is empty, or
/// `top_action >= pmf.len()`.
pub fn generate_epsilon_greedy(epsilon: f32, top_action: usize, pmf: &mut [f32]) -> Result<()> {
    if !(0.0..=1.0).contains(&epsilon) {
        return Err(ExplorationError::BadRange("epsilon must be in [0, 1]"));
    }
    ensure_non_empty(pmf, "pmf is empty")?;
    if top_action >= pmf.len() {
        return Err(ExplorationError::BadRange("top_action is out of range"));
    }

    let floor = epsilon / pmf.len() as f32;
    pmf.fill(floor);
    pmf[top_action] += 1.0 - epsilon;
    Ok(())
}

/// Softmax: `pmf[i] ∝ exp(lambda * scores[i])`.
///
/// - Uses the max-trick (`max(lambda * s)`) for numerical stability, which also keeps
///   negative `lambda` (favour low scores) stable.
/// - If the denominator is zero or non-finite (e.g. all scores `-inf`, or a NaN score), the
///   result is uniform.
///
/// Fails with `BadRange` for empty `scores` or non-finite `lambda`, and with `SizeMismatch`
/// when `scores.len() != pmf.len()`.
pub fn generate_softmax(lambda: f32, scores: &[f32], pmf: &mut [f32]) -> Result<()> {
    if !lambda.is_finite() {
        return Err(ExplorationError::BadRange("lambda must be finite"));
    }
    ensure_non_empty(scores, "scores are empty")?;
    ensure_same_len(scores.len(), pmf.len())?;

    let lambda = f64::from(lambda);
    let max_scaled = scores
        .iter()
        .map(|&s| lambda * f64::from(s))
        .fold(f64::NEG_INFINITY, f64::max);

    let mut denom = 0.0f64;
    let mut weights_ok = true;
    for (slot, &s) in pmf.iter_mut().zip(scores) {
        let x = (lambda * f64::from(s) - max_scaled).exp();
        if !x.is_finite() {
            weights_ok = false;
        }
        denom += x;
        *slot = x as f32;
    }

    if !weights_ok || denom <= 0.0 || !denom.is_finite() {
        tracing::debug!(n = pmf.len(), "softmax denominator degenerate; using uniform");
        pmf.fill(1.0 / pmf.len() as f32);
        return Ok(());
    }

    for slot in pmf.iter_mut() {
        *slot = (f64::from(*slot) / denom) as f32;
    }
    Ok(())
}

/// Bagging: each entry of `top_actions` is one model's vote and adds `1 / |top_actions|`.
///
/// Fails with `BadRange` for empty `top_actions`, empty `pmf`, or a vote `>= pmf.len()`.
/// Votes are validated before anything is written.
pub fn generate_bag(top_actions: &[usize], pmf: &mut [f32]) -> Result<()> {
    ensure_non_empty(top_actions, "top_actions are empty")?;
    ensure_non_empty(pmf, "pmf is empty")?;
    if top_actions.iter().any(|&a| a >= pmf.len()) {
        return Err(ExplorationError::BadRange("vote references an unknown action"));
    }

    // Counts are exact in f32 well past any realistic ensemble size.
    pmf.fill(0.0);
    for &a in top_actions {
        pmf[a] += 1.0;
    }
    let total = top_actions.len() as f64;
    for p in pmf.iter_mut() {
        *p = (f64::from(*p) / total) as f32;
    }
    Ok(())
}

/// Bagging from per-action vote counts: `pmf[i] = counts[i] / Σ counts`.
///
/// When no model voted (total 0) all mass goes to action 0.
///
/// Fails with `BadRange` when `counts` is empty and with `SizeMismatch` when
/// `counts.len() != pmf.len()`.
pub fn generate_bag_counts(counts: &[u32], pmf: &mut [f32]) -> Result<()> {
    ensure_non_empty(counts, "counts are empty")?;
    ensure_same_len(counts.len(), pmf.len())?;

    let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
    if total == 0 {
        tracing::debug!(n = pmf.len(), "no votes; all mass to action 0");
        pmf.fill(0.0);
        pmf[0] = 1.0;
        return Ok(());
    }
    let total = total as f64;
    for (slot, &c) in pmf.iter_mut().zip(counts) {
        *slot = (f64::from(c) / total) as f32;
    }
    Ok(())
}

/// Allocating form of [`generate_epsilon_greedy`].
pub fn epsilon_greedy_pmf(epsilon: f32, top_action: usize, num_actions: usize) -> Result<Vec<f32>> {
    let mut pmf = vec![0.0; num_actions];
    generate_epsilon_greedy(epsilon, top_action, &mut pmf)?;
    Ok(pmf)
}

/// Allocating form of [`generate_softmax`] (one slot per score).
pub fn softmax_pmf(lambda: f32, scores: &[f32]) -> Result<Vec<f32>> {
    let mut pmf = vec![0.0; scores.len()];
    generate_softmax(lambda, scores, &mut pmf)?;
    Ok(pmf)
}

/// Allocating form of [`generate_bag`].
pub fn bag_pmf(top_actions: &[usize], num_actions: usize) -> Result<Vec<f32>> {
    let mut pmf = vec![0.0; num_actions];
    generate_bag(top_actions, &mut pmf)?;
    Ok(pmf)
}

/// Allocating form of [`generate_bag_counts`] (one slot per count).
pub fn bag_counts_pmf(counts: &[u32]) -> Result<Vec<f32>> {
    let mut pmf = vec![0.0; counts.len()];
    generate_bag_counts(counts, &mut pmf)?;
    Ok(pmf)
}
