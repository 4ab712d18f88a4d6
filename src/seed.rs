//! Seed expansion: integer or byte-string seeds → reproducible uniform draws.
//!
//! The draw construction is a fixed 64-bit linear congruential step ("merand48"):
//!
//! ```text
//!   state' = 0xeece66d5deece66d * state + 2147483647   (mod 2^64)
//!   u      = f32::from_bits(((state' >> 25) & 0x7fffff) | 0x3f800000) - 1.0
//! ```
//!
//! `u` is exactly representable and lies in `[0, 1)`. Draw `n` (0-based) of a seed is the value
//! after `n + 1` steps, and [`SeedStream::uniform_at`] reaches it by jump-ahead, so the stream is
//! addressable by counter rather than by hidden state. Nothing here depends on the platform or
//! on a standard-library RNG; the constants are the whole contract.

use crate::hash_seed_bytes;

const LCG_MUL: u64 = 0xeece_66d5_deec_e66d;
const LCG_ADD: u64 = 2_147_483_647;
const ONE_BITS: u32 = 127 << 23;

/// A seed in either of its accepted forms.
///
/// Byte-string seeds always pass through [`hash_seed_bytes`] before reaching the draw logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed<'a> {
    Integer(u64),
    Bytes(&'a [u8]),
}

impl Seed<'_> {
    /// The 64-bit value the uniform stream is started from.
    #[must_use]
    pub fn expand(&self) -> u64 {
        match *self {
            Seed::Integer(v) => v,
            Seed::Bytes(b) => hash_seed_bytes(b),
        }
    }

    /// A fresh uniform stream for this seed.
    #[must_use]
    pub fn stream(&self) -> SeedStream {
        SeedStream::new(self.expand())
    }
}

impl From<u64> for Seed<'_> {
    fn from(v: u64) -> Self {
        Seed::Integer(v)
    }
}

impl<'a> From<&'a [u8]> for Seed<'a> {
    fn from(b: &'a [u8]) -> Self {
        Seed::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Seed<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        Seed::Bytes(b.as_slice())
    }
}

impl<'a> From<&'a str> for Seed<'a> {
    fn from(s: &'a str) -> Self {
        Seed::Bytes(s.as_bytes())
    }
}

impl<'a> From<&'a String> for Seed<'a> {
    fn from(s: &'a String) -> Self {
        Seed::Bytes(s.as_bytes())
    }
}

/// Deterministic stream of uniform draws derived from a 64-bit seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedStream {
    state: u64,
    drawn: u64,
}

impl SeedStream {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed,
            drawn: 0,
        }
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn drawn(&self) -> u64 {
        self.drawn
    }

    /// Next uniform value in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        self.advance();
        unit_f32(self.state)
    }

    /// The `n`-th (0-based) uniform draw of `seed`, computed without stepping through `0..n`.
    #[must_use]
    pub fn uniform_at(seed: u64, n: u64) -> f32 {
        unit_f32(lcg_jump(seed, n.wrapping_add(1)))
    }

    /// Skip `n` draws.
    pub fn skip(&mut self, n: u64) {
        self.state = lcg_jump(self.state, n);
        self.drawn = self.drawn.wrapping_add(n);
    }

    #[inline]
    fn advance(&mut self) -> u64 {
        self.state = LCG_MUL.wrapping_mul(self.state).wrapping_add(LCG_ADD);
        self.drawn = self.drawn.wrapping_add(1);
        self.state
    }
}

/// First uniform draw of `seed` (the value every sampler consumes first).
#[must_use]
pub fn uniform_random(seed: u64) -> f32 {
    SeedStream::uniform_at(seed, 0)
}

#[inline]
fn unit_f32(state: u64) -> f32 {
    // 23 mantissa bits from state[25..48] under a fixed exponent: a value in [1, 2).
    let bits = ((state >> 25) as u32 & 0x007f_ffff) | ONE_BITS;
    f32::from_bits(bits) - 1.0
}

/// Apply the LCG step `steps` times in O(log steps).
fn lcg_jump(state: u64, mut steps: u64) -> u64 {
    let mut acc_mul: u64 = 1;
    let mut acc_add: u64 = 0;
    let mut cur_mul = LCG_MUL;
    let mut cur_add = LCG_ADD;
    while steps > 0 {
        if steps & 1 == 1 {
            acc_mul = acc_mul.wrapping_mul(cur_mul);
            acc_add = acc_add.wrapping_mul(cur_mul).wrapping_add(cur_add);
        }
        cur_add = cur_mul.wrapping_add(1).wrapping_mul(cur_add);
        cur_mul = cur_mul.wrapping_mul(cur_mul);
        steps >>= 1;
    }
    acc_mul.wrapping_mul(state).wrapping_add(acc_add)
}

impl rand::RngCore for SeedStream {
    fn next_u32(&mut self) -> u32 {
        (self.advance() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.advance()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.advance().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
