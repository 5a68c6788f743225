//! Samples UPC-style product identifiers.

use super::IoTableGenerator;
use rand::Rng;
use std::ops::Range;

/// The 12-digit identifier space products are drawn from. The upper bound
/// is exclusive.
pub const UPC_RANGE: Range<u64> = 100_000_000_000..999_999_999_999;

/// One uniform draw from the UPC space.
pub(super) fn next_upc<R: Rng>(rng: &mut R) -> u64 {
    rng.gen_range(UPC_RANGE)
}

/// Sample the identifier pool for `n` products.
///
/// Draws are independent and with replacement: nothing rejects duplicates,
/// and downstream stages must tolerate them. A collision is rare at these
/// magnitudes but is a legal pool.
pub fn sample_pool<R: Rng>(rng: &mut R, n: usize) -> Vec<u64> {
    (0..n).map(|_| next_upc(rng)).collect()
}

impl<R: Rng> IoTableGenerator<R> {
    /// One uniform draw from the UPC space.
    pub fn next_upc(&mut self) -> u64 {
        next_upc(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::{sample_pool, UPC_RANGE};
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn pool_has_one_entry_per_product() {
        let mut rng = SmallRng::seed_from_u64(42);

        let pool = sample_pool(&mut rng, 1_000);

        assert_eq!(pool.len(), 1_000);
        assert!(pool.iter().all(|upc| UPC_RANGE.contains(upc)));
    }

    #[test]
    fn every_upc_is_twelve_digits() {
        let mut rng = SmallRng::seed_from_u64(42);

        for upc in sample_pool(&mut rng, 100) {
            assert_eq!(upc.to_string().len(), 12);
        }
    }
}
