//! Promote a sampled action to rank 0 of the caller's action list.

use crate::{ExplorationError, Result};

/// Swap `actions[0]` with `actions[chosen_index]`.
///
/// A no-op for `chosen_index == 0`. Fails with `BadRange` when `chosen_index` is out of
/// bounds (including an empty slice). Probability buffers are not touched.
pub fn swap_chosen<T>(actions: &mut [T], chosen_index: usize) -> Result<()> {
    if chosen_index >= actions.len() {
        return Err(ExplorationError::BadRange("chosen_index is out of range"));
    }
    actions.swap(0, chosen_index);
    Ok(())
}
