//! Generate → floor → sample → rank, in one call.

use crate::error::ensure_same_len;
use crate::{
    enforce_minimum_probability, sample_after_normalizing, sample_without_normalizing,
    swap_chosen, DecisionNote, ExplorationDecision, PmfGenerator, Result, Seed,
};

/// Post-processing and sampling options for [`explore()`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplorationConfig {
    /// Total uniform floor to enforce after generation (`None` skips enforcement).
    pub minimum_uniform: Option<f32>,
    /// Whether zero entries are lifted to the floor (otherwise they stay excluded).
    pub update_zero_elements: bool,
    /// Normalise the pmf in place before drawing.
    ///
    /// Turning this off saves a pass when the generator output is already normalised.
    pub normalize: bool,
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            minimum_uniform: None,
            update_zero_elements: false,
            normalize: true,
        }
    }
}

/// Fill `pmf` with `generator`, apply the configured floor, and sample an action.
///
/// `pmf` holds the final distribution afterwards, so callers can log it alongside the decision.
pub fn explore<'a, G>(
    generator: &G,
    cfg: &ExplorationConfig,
    seed: impl Into<Seed<'a>>,
    pmf: &mut [f32],
) -> Result<ExplorationDecision>
where
    G: PmfGenerator + ?Sized,
{
    let seed = seed.into();
    generator.generate(pmf)?;

    let mut notes = Vec::new();
    if let Some(minimum_uniform) = cfg.minimum_uniform {
        enforce_minimum_probability(minimum_uniform, cfg.update_zero_elements, pmf)?;
        notes.push(DecisionNote::MinimumProbabilityEnforced {
            minimum_uniform,
            update_zero_elements: cfg.update_zero_elements,
        });
    }

    let chosen_index = if cfg.normalize {
        notes.push(DecisionNote::SampledAfterNormalizing);
        sample_after_normalizing(seed, pmf)?
    } else {
        notes.push(DecisionNote::SampledWithoutNormalizing);
        sample_without_normalizing(seed, pmf)?
    };
    let probability = pmf[chosen_index];

    tracing::debug!(
        strategy = ?generator.kind(),
        chosen_index,
        probability,
        n = pmf.len(),
        "exploration decision"
    );

    Ok(ExplorationDecision {
        strategy: generator.kind(),
        chosen_index,
        probability,
        seed: seed.expand(),
        notes,
    })
}

/// [`explore()`], then move the chosen action id to the front of `actions`.
///
/// `actions` must be parallel to `pmf` (`SizeMismatch` otherwise).
pub fn explore_and_rank<'a, G, T>(
    generator: &G,
    cfg: &ExplorationConfig,
    seed: impl Into<Seed<'a>>,
    pmf: &mut [f32],
    actions: &mut [T],
) -> Result<ExplorationDecision>
where
    G: PmfGenerator + ?Sized,
{
    ensure_same_len(actions.len(), pmf.len())?;
    let mut decision = explore(generator, cfg, seed, pmf)?;
    swap_chosen(actions, decision.chosen_index)?;
    if decision.chosen_index != 0 {
        decision.notes.push(DecisionNote::PromotedToFront {
            from: decision.chosen_index,
        });
    }
    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bag, EpsilonGreedy, Softmax, StrategyKind};

    #[test]
    fn default_config_is_plain_sampling() {
        let cfg = ExplorationConfig::default();
        let mut pmf = [0.0f32; 3];
        let d = explore(
            &EpsilonGreedy {
                epsilon: 0.0,
                top_action: 1,
            },
            &cfg,
            7u64,
            &mut pmf,
        )
        .unwrap();
        assert_eq!(d.chosen_index, 1);
        assert_eq!(d.probability, 1.0);
        assert_eq!(d.strategy, StrategyKind::EpsilonGreedy);
        assert_eq!(d.notes, vec![DecisionNote::SampledAfterNormalizing]);
    }

    #[test]
    fn floor_is_applied_and_recorded() {
        let cfg = ExplorationConfig {
            minimum_uniform: Some(0.3),
            update_zero_elements: true,
            normalize: false,
        };
        let mut pmf = [0.0f32; 3];
        let d = explore(&Bag { top_actions: &[0, 0] }, &cfg, "req-17", &mut pmf).unwrap();
        for &p in &pmf {
            assert!(p >= 0.1 - 1e-6, "pmf={pmf:?}");
        }
        assert_eq!(
            d.notes[0],
            DecisionNote::MinimumProbabilityEnforced {
                minimum_uniform: 0.3,
                update_zero_elements: true
            }
        );
        assert_eq!(d.seed, Seed::from("req-17").expand());
        assert_eq!(d.replay(&pmf).unwrap(), d.chosen_index);
        assert_eq!(d.probability, pmf[d.chosen_index]);
    }

    #[test]
    fn rank_promotes_chosen_action() {
        let cfg = ExplorationConfig::default();
        let scores = [0.0f32, 0.0, 50.0, 0.0];
        let mut pmf = [0.0f32; 4];
        let mut ids = ["a", "b", "c", "d"];
        let d = explore_and_rank(
            &Softmax {
                lambda: 1.0,
                scores: &scores,
            },
            &cfg,
            3u64,
            &mut pmf,
            &mut ids,
        )
        .unwrap();
        assert_eq!(d.chosen_index, 2);
        assert_eq!(ids, ["c", "b", "a", "d"]);
        assert_eq!(d.notes.last(), Some(&DecisionNote::PromotedToFront { from: 2 }));
    }

    #[test]
    fn rank_rejects_mismatched_action_list() {
        let mut pmf = [0.0f32; 3];
        let mut ids = [10u32, 20];
        let err = explore_and_rank(
            &EpsilonGreedy {
                epsilon: 0.1,
                top_action: 0,
            },
            &ExplorationConfig::default(),
            1u64,
            &mut pmf,
            &mut ids,
        )
        .unwrap_err();
        assert_eq!(err.code(), crate::PDF_RANKING_SIZE_MISMATCH);
    }

    #[test]
    fn generator_errors_propagate() {
        let mut pmf = [0.0f32; 2];
        let err = explore(
            &EpsilonGreedy {
                epsilon: 2.0,
                top_action: 0,
            },
            &ExplorationConfig::default(),
            1u64,
            &mut pmf,
        )
        .unwrap_err();
        assert_eq!(err.code(), crate::BAD_RANGE);
    }
}
