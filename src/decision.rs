//! Audit envelope for a single exploration decision.
//!
//! A decision record carries everything needed to replay the draw later: the expanded seed,
//! the chosen index, and the probability it was chosen with (the propensity that downstream
//! off-policy evaluation needs).

use crate::{sample_without_normalizing, Result, StrategyKind};

/// Audit-friendly notes attached to a decision.
///
/// Notes are intentionally small, typed, and stable. Prefer adding new variants
/// over changing existing semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecisionNote {
    /// A minimum-probability floor was applied after generation.
    MinimumProbabilityEnforced {
        minimum_uniform: f32,
        update_zero_elements: bool,
    },

    /// The pmf was normalised in place before drawing.
    SampledAfterNormalizing,

    /// The pmf was drawn from as given.
    SampledWithoutNormalizing,

    /// The chosen action was swapped into rank 0 of the caller's action list.
    PromotedToFront { from: usize },
}

/// A single exploration decision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplorationDecision {
    /// Strategy that generated the distribution.
    pub strategy: StrategyKind,
    /// Index of the sampled action in the pmf.
    pub chosen_index: usize,
    /// Probability of `chosen_index` in the final (post-floor, post-normalisation) pmf.
    pub probability: f32,
    /// Expanded 64-bit seed (byte-string seeds are stored hashed).
    pub seed: u64,
    /// Audit notes describing how the choice was made.
    pub notes: Vec<DecisionNote>,
}

impl ExplorationDecision {
    /// Re-draw from `pmf` with this decision's seed.
    ///
    /// Given the final pmf the decision was sampled from, this returns `chosen_index` again.
    pub fn replay(&self, pmf: &[f32]) -> Result<usize> {
        sample_without_normalizing(self.seed, pmf)
    }
}
