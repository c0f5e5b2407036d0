//! RNG seed derivation for deterministic, replayable tables.
//!
//! A single table seed fans out into one seed per deal and purpose, so a
//! configured seed reproduces every shuffle and every redeal cut.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derive the shuffle seed for a deal.
///
/// # Arguments
///
/// * `table_seed` - Base seed of the table
/// * `deal_no` - Deal number within the match (1-based)
pub fn derive_dealing_seed(table_seed: u64, deal_no: u32) -> u64 {
    table_seed
        .wrapping_add((deal_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2) // Offset to distinguish from cut seed
}

/// Derive the seed used to pick cut points after abandoned auctions.
pub fn derive_cut_seed(table_seed: u64, deal_no: u32) -> u64 {
    table_seed
        .wrapping_add((deal_no as u64).wrapping_mul(10_000))
        .wrapping_add(1)
}

pub fn rng_from_seed(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
