//! `PmfGenerator`: one interface over the exploration strategies.
//!
//! The `generate_*` free functions are the primitive API. The strategy values here bundle a
//! generator with its inputs so that pipeline code ([`explore()`](crate::explore())) can be
//! generic over which strategy the caller picked.

use crate::{
    generate_bag, generate_bag_counts, generate_epsilon_greedy, generate_softmax, Result,
};

/// Which strategy produced a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrategyKind {
    EpsilonGreedy,
    Softmax,
    Bag,
    BagCounts,
}

/// Common interface for filling a pre-sized pmf buffer.
///
/// # Example
///
/// ```rust
/// use explore::{EpsilonGreedy, PmfGenerator, Softmax};
///
/// fn fill<G: PmfGenerator>(g: &G, n: usize) -> Vec<f32> {
///     let mut pmf = vec![0.0; n];
///     g.generate(&mut pmf).unwrap();
///     pmf
/// }
///
/// let eg = fill(&EpsilonGreedy { epsilon: 0.1, top_action: 0 }, 3);
/// let sm = fill(&Softmax { lambda: 1.0, scores: &[0.0, 1.0, 2.0] }, 3);
/// assert!(eg[0] > eg[1]);
/// assert!(sm[2] > sm[1]);
/// ```
pub trait PmfGenerator {
    /// Strategy tag recorded in decisions.
    fn kind(&self) -> StrategyKind;

    /// Overwrite `pmf` with this strategy's distribution.
    fn generate(&self, pmf: &mut [f32]) -> Result<()>;
}

/// Epsilon-greedy around a single exploit action.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpsilonGreedy {
    /// Total uniform exploration mass in `[0, 1]`.
    pub epsilon: f32,
    /// Index of the exploit action.
    pub top_action: usize,
}

/// Softmax over per-action scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Softmax<'a> {
    /// Inverse temperature; `0` is uniform, larger is greedier.
    pub lambda: f32,
    pub scores: &'a [f32],
}

/// One vote per bagged model, each naming its top action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bag<'a> {
    pub top_actions: &'a [usize],
}

/// Per-action vote counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BagCounts<'a> {
    pub counts: &'a [u32],
}

impl PmfGenerator for EpsilonGreedy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::EpsilonGreedy
    }
    fn generate(&self, pmf: &mut [f32]) -> Result<()> {
        generate_epsilon_greedy(self.epsilon, self.top_action, pmf)
    }
}

impl PmfGenerator for Softmax<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Softmax
    }
    fn generate(&self, pmf: &mut [f32]) -> Result<()> {
        generate_softmax(self.lambda, self.scores, pmf)
    }
}

impl PmfGenerator for Bag<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Bag
    }
    fn generate(&self, pmf: &mut [f32]) -> Result<()> {
        generate_bag(self.top_actions, pmf)
    }
}

impl PmfGenerator for BagCounts<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::BagCounts
    }
    fn generate(&self, pmf: &mut [f32]) -> Result<()> {
        generate_bag_counts(self.counts, pmf)
    }
}
