//! Bounded quantity sampling for the three row families.

use super::IoTableGenerator;
use rand::Rng;
use std::ops::Range;

/// Labor requirement per product. Upper bounds are exclusive throughout.
pub const LABOR_QUANTITY: Range<u64> = 100..10_000;

/// Quantity of an input consumed per unit of output.
pub const EDGE_QUANTITY: Range<u64> = 10..10_000;

/// Margin added on top of a product's total required input.
pub const OUTPUT_MARGIN: Range<u64> = 100..1_000;

impl<R: Rng> IoTableGenerator<R> {
    pub fn next_labor_quantity(&mut self) -> u64 {
        self.rng.gen_range(LABOR_QUANTITY)
    }

    pub fn next_edge_quantity(&mut self) -> u64 {
        self.rng.gen_range(EDGE_QUANTITY)
    }

    pub fn next_output_margin(&mut self) -> u64 {
        self.rng.gen_range(OUTPUT_MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::make_test_generator;
    use super::{EDGE_QUANTITY, LABOR_QUANTITY, OUTPUT_MARGIN};

    #[test]
    fn draws_stay_in_range() {
        let mut generator = make_test_generator(1, 0.0);

        for _ in 0..1_000 {
            assert!(LABOR_QUANTITY.contains(&generator.next_labor_quantity()));
            assert!(EDGE_QUANTITY.contains(&generator.next_edge_quantity()));
            assert!(OUTPUT_MARGIN.contains(&generator.next_output_margin()));
        }
    }
}
