//! Core generation pipeline for input-output tables.
//!
//! Four stages run strictly forward over one shared row collection: the
//! identifier pool is sampled, labor rows are appended in product order,
//! recipe edges are appended, and finally one aggregate output row per
//! product is appended. The output stage computes each product's total
//! required input by scanning the collection it is appending into. That
//! scan is the point of this generator: when two product slots drew the
//! same UPC, the later slot's total absorbs the earlier slot's aggregate
//! row, which is how the fixture grows its missing-output and oversized-
//! quantity lines. Do not replace the scan with a snapshotted accumulator;
//! the downstream consumers rely on the flawed totals.

pub mod quantity;
pub mod upc;

use crate::config::GeneratorOptions;
use crate::model::Row;
use rand::Rng;

/// Pipeline stage, reported to progress callbacks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    Labor,
    Edges,
    Outputs,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Labor => "labor",
            Stage::Edges => "production inputs",
            Stage::Outputs => "output totals",
        }
    }
}

/// Generator for one complete table.
///
/// Generic over the random source so tests can run it seeded; the binary
/// instantiates it with a `SmallRng`.
pub struct IoTableGenerator<R: Rng> {
    options: GeneratorOptions,
    rng: R,
    upcs: Vec<u64>,
    rows: Vec<Row>,
}

impl<R: Rng> IoTableGenerator<R> {
    /// Create a generator, sampling the identifier pool up front.
    pub fn new(options: GeneratorOptions, mut rng: R) -> Self {
        let upcs = upc::sample_pool(&mut rng, options.num_products);
        Self::from_pool(options, rng, upcs)
    }

    /// Create a generator over a caller-supplied identifier pool.
    ///
    /// The pool must have one entry per product. Supplying a pool with
    /// duplicate UPCs forces the collision defects at known slots, which
    /// is useful when a fixture needs the defect rather than a chance of
    /// it.
    pub fn from_pool(options: GeneratorOptions, rng: R, upcs: Vec<u64>) -> Self {
        assert_eq!(upcs.len(), options.num_products);
        let rows = Vec::with_capacity(options.total_rows());
        Self {
            options,
            rng,
            upcs,
            rows,
        }
    }

    /// The sampled identifier pool, in product-slot order.
    pub fn upcs(&self) -> &[u64] {
        &self.upcs
    }

    /// Run the remaining three stages and return the finished table.
    ///
    /// `progress` is purely observational: it is invoked after every
    /// generated row with the stage, the row's index within the stage, and
    /// the stage's total row count.
    pub fn generate(mut self, mut progress: impl FnMut(Stage, usize, usize)) -> Vec<Row> {
        self.load_labor(&mut progress);
        self.load_edges(&mut progress);
        self.load_outputs(&mut progress);
        self.rows
    }

    /// Stage 2: one labor row per product, in product-slot order.
    fn load_labor(&mut self, progress: &mut impl FnMut(Stage, usize, usize)) {
        let n = self.options.num_products;
        for i in 0..n {
            let quantity = self.next_labor_quantity();
            self.rows.push(Row::labor(self.upcs[i], quantity));
            progress(Stage::Labor, i, n);
        }
    }

    /// Stage 3: `floor(density * N^2)` recipe edges.
    ///
    /// Both endpoints are drawn from slot indices `0..N-1`: the last slot
    /// is never picked. The bias is part of the fixture's documented shape,
    /// so it stays. A product consuming itself is legal (gasoline burns
    /// gasoline). The floor at 1 keeps `N == 1` from sampling an empty
    /// range.
    fn load_edges(&mut self, progress: &mut impl FnMut(Stage, usize, usize)) {
        let edge_count = self.options.edge_count();
        let slot_bound = (self.options.num_products - 1).max(1);
        for i in 0..edge_count {
            let subject = self.upcs[self.rng.gen_range(0..slot_bound)];
            let input = self.upcs[self.rng.gen_range(0..slot_bound)];
            let quantity = self.next_edge_quantity();
            self.rows.push(Row::edge(subject, input, quantity));
            progress(Stage::Edges, i, edge_count);
        }
    }

    /// Stage 4: one aggregate output row per product, in product-slot
    /// order. The total scans every row already in the collection,
    /// aggregate rows from earlier iterations included.
    fn load_outputs(&mut self, progress: &mut impl FnMut(Stage, usize, usize)) {
        let n = self.options.num_products;
        for i in 0..n {
            let total = self.total_required(self.upcs[i]);
            let quantity = total + self.next_output_margin();
            self.rows.push(Row::output(self.upcs[i], quantity));
            progress(Stage::Outputs, i, n);
        }
    }

    /// Sum of `quantity` over every row currently held whose subject is
    /// `upc`. Matches on subject equality only, so labor rows, edges, and
    /// already-appended aggregate rows all count.
    fn total_required(&self, upc: u64) -> u64 {
        self.rows
            .iter()
            .filter(|row| row.subject == upc)
            .map(|row| row.quantity)
            .sum()
    }
}
