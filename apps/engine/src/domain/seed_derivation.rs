//! RNG seed derivation utilities for deterministic match behavior.
//!
//! A match is driven by a single seed. Each consumer of randomness gets its
//! own stream derived from that seed, so changing how one consumer draws
//! (e.g. the trump tie-break) never shifts the cards another consumer sees.

/// Derive the seed of the stream that shuffles the deck.
pub fn derive_dealing_seed(match_seed: u64) -> u64 {
    mix(match_seed.wrapping_add(1))
}

/// Derive the seed of the stream used for table decisions (starting seat,
/// trump color when a Wizard is revealed).
pub fn derive_table_seed(match_seed: u64) -> u64 {
    mix(match_seed.wrapping_add(2))
}

/// Derive the seed of the `match_no`-th match of a tournament.
pub fn derive_match_seed(tournament_seed: u64, match_no: u32) -> u64 {
    mix(tournament_seed.wrapping_add((match_no as u64).wrapping_mul(1_000_003)))
}

/// SplitMix64 finalizer: spreads nearby inputs across the whole u64 range.
fn mix(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}
