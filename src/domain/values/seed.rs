//! Stable seed derivation for the pricing estimators.
//!
//! Estimators need pseudo-random but reproducible jitter: the same
//! `(origin, destination)` must always produce the same estimate so cached
//! and uncached runs agree. The seed is **64-bit FNV-1a** over the UTF-8 bytes
//! of each part, with a single `0x1F` (unit separator) byte between parts.
//! Other ports that want bit-for-bit estimator parity must use the same
//! derivation.

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
const PART_SEPARATOR: u8 = 0x1f;

/// FNV-1a 64 over `parts` joined by the unit separator.
pub fn stable_seed(parts: &[&str]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            hash ^= PART_SEPARATOR as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        for byte in part.as_bytes() {
            hash ^= *byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }
    hash
}

/// Seed reduced into `0..modulus`.
pub fn seeded_offset(parts: &[&str], modulus: u64) -> u64 {
    if modulus == 0 {
        return 0;
    }
    stable_seed(parts) % modulus
}
