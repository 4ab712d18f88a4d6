//! `explore`: deterministic exploration distributions for decision-making systems.
//!
//! Designed for the step between “the policy knows which action looks best” and “an action is
//! taken”: turn a ranking (top action, scores, or ensemble votes) into an explicit probability
//! mass function, keep every action reachable with a minimum probability, and draw one action
//! reproducibly from a seed.
//!
//! **Goals:**
//! - **Replayable**: same seed + same distribution → same draw, in every process and every
//!   language port. The seed construction is pinned bit-for-bit (see [`SeedStream`]), so a
//!   decision can be logged by seed alone.
//! - **Allocation-free core**: generators, the enforcer and the samplers write into
//!   caller-owned buffers and keep no state between calls.
//! - **Explicit failures**: out-of-domain parameters and size mismatches are returned as
//!   [`ExplorationError`]s, never clamped, truncated or padded.
//!
//! **Generators** (fill a pre-sized `&mut [f32]`):
//! - [`generate_epsilon_greedy`]: uniform `epsilon` floor plus `1 - epsilon` on the top action.
//! - [`generate_softmax`]: `exp(lambda * score)` weighting with a uniform fallback.
//! - [`generate_bag`] / [`generate_bag_counts`]: ensemble vote shares.
//!
//! **Post-processing and sampling:**
//! - [`enforce_minimum_probability`]: idempotent uniform floor with optional hard exclusions.
//! - [`sample_after_normalizing`] / [`sample_without_normalizing`]: seeded inverse-CDF draw.
//! - [`sample_pdf`]: seeded draw from a bucketed density over a real range.
//! - [`swap_chosen`]: promote the sampled action to rank 0 of the caller's action list.
//!
//! **Pipeline:** [`PmfGenerator`] strategies plus [`explore()`] / [`explore_and_rank`] produce an
//! audit-friendly [`ExplorationDecision`].
//!
//! ```rust
//! use explore::{enforce_minimum_probability, generate_softmax, sample_after_normalizing, swap_chosen};
//!
//! let scores = [0.2f32, 1.5, 0.9];
//! let mut pmf = [0.0f32; 3];
//! generate_softmax(2.0, &scores, &mut pmf).unwrap();
//! enforce_minimum_probability(0.3, true, &mut pmf).unwrap();
//!
//! let chosen = sample_after_normalizing("event-0001", &mut pmf).unwrap();
//! let mut actions = ["a", "b", "c"];
//! swap_chosen(&mut actions, chosen).unwrap();
//!
//! // The same seed always replays to the same action.
//! assert_eq!(sample_after_normalizing("event-0001", &mut pmf).unwrap(), chosen);
//! ```
//!
//! **Non-goals:**
//! - No policy, model, reward handling or learning loop: this crate only shapes and samples.
//! - Not a general-purpose RNG; [`SeedStream`] exists for seed replay.

#![forbid(unsafe_code)]

mod error;
pub use error::*;

mod stable_hash;
pub use stable_hash::*;

mod seed;
pub use seed::*;

mod generate;
pub use generate::*;

mod enforce;
pub use enforce::*;

mod normalize;

mod sample;
pub use sample::*;

mod reorder;
pub use reorder::*;

mod policy;
pub use policy::*;

mod decision;
pub use decision::*;

mod explore;
pub use explore::*;
