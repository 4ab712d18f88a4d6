//! Error and status-code types.
//!
//! Every fallible operation reports one of two failure kinds. The numeric codes are
//! stable so that logs and foreign callers can carry them as plain integers.

use thiserror::Error;

/// Status code for a successful call.
pub const SUCCESS: i32 = 0;
/// Status code for an input outside its documented domain (or an empty buffer).
pub const BAD_RANGE: i32 = 1;
/// Status code for related sequences whose lengths must agree but do not.
pub const PDF_RANKING_SIZE_MISMATCH: i32 = 2;

/// Errors reported by generators, the enforcer, samplers and the reorder helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExplorationError {
    /// A parameter or buffer violates its domain (e.g. `epsilon > 1`, empty pmf).
    #[error("bad range: {0}")]
    BadRange(&'static str),

    /// A ranking/score/vote input does not match the size of its target buffer.
    #[error("size mismatch: input has {input} entries, target buffer has {target}")]
    SizeMismatch { input: usize, target: usize },
}

impl ExplorationError {
    /// Numeric status code (`BAD_RANGE` or `PDF_RANKING_SIZE_MISMATCH`).
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::BadRange(_) => BAD_RANGE,
            Self::SizeMismatch { .. } => PDF_RANKING_SIZE_MISMATCH,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExplorationError>;

/// Collapse a result into its numeric status code.
#[must_use]
pub fn status_code<T>(r: &Result<T>) -> i32 {
    match r {
        Ok(_) => SUCCESS,
        Err(e) => e.code(),
    }
}

pub(crate) fn ensure_non_empty<T>(buf: &[T], what: &'static str) -> Result<()> {
    if buf.is_empty() {
        return Err(ExplorationError::BadRange(what));
    }
    Ok(())
}

pub(crate) fn ensure_same_len(input: usize, target: usize) -> Result<()> {
    if input != target {
        return Err(ExplorationError::SizeMismatch { input, target });
    }
    Ok(())
}
