//! Deterministic hashing for byte-string seeds.
//!
//! This module intentionally does **not** provide cryptographic guarantees; it exists so that
//! a textual identifier (event id, request id) maps to the same 64-bit seed in every process
//! and every language port.

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// MurmurHash3 (x86, 32-bit) over `bytes`.
///
/// Implementation:
/// - 4-byte little-endian blocks, tail folded little-endian
/// - standard `fmix32` finalizer
///
/// The output is part of the replay contract: changing it changes every byte-seeded draw.
#[must_use]
pub fn stable_hash32(bytes: &[u8], seed: u32) -> u32 {
    let mut h = seed;
    let mut blocks = bytes.chunks_exact(4);
    for block in &mut blocks {
        let k = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        h ^= mix_k(k);
        h = h.rotate_left(13);
        h = h.wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let mut k = 0u32;
        for (j, b) in tail.iter().enumerate() {
            k |= u32::from(*b) << (8 * j);
        }
        h ^= mix_k(k);
    }

    // Only the low 32 bits of the length participate (matches the reference).
    h ^= bytes.len() as u32;
    fmix32(h)
}

/// Hash a byte-string seed into the 64-bit seed space (zero-extended `stable_hash32`, seed 0).
#[must_use]
pub fn hash_seed_bytes(bytes: &[u8]) -> u64 {
    u64::from(stable_hash32(bytes, 0))
}

#[inline]
fn mix_k(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

#[inline]
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^ (h >> 16)
}
