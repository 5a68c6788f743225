//! Configuration options for the input-output table generator.

use clap::{Args, Parser};
use std::path::PathBuf;

/// A random sparse input-output table generator.
///
/// Writes `iotable-<N>.txt` containing one labor row per product, a sampled
/// set of recipe edges, and one aggregate output row per product.
#[derive(Clone, Debug, Parser)]
#[clap(author, version, about)]
pub struct Config {
    #[clap(flatten)]
    pub generator_options: GeneratorOptions,

    /// Directory the table file is written to.
    #[clap(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Disable progress bars.
    #[clap(long = "no-progress", default_value_t = true, action = clap::ArgAction::SetFalse)]
    pub progress: bool,
}

/// Properties of the generated table.
#[derive(Clone, Debug, Args)]
pub struct GeneratorOptions {
    /// Number of products in the table universe.
    pub num_products: usize,

    /// Fraction of all product pairs that receive a recipe edge.
    #[clap(long, default_value = "0.01")]
    pub density: f64,

    /// Seed for the random source. Runs are entropy-seeded (and therefore
    /// not reproducible) when no seed is given.
    #[clap(long)]
    pub seed: Option<u64>,
}

impl GeneratorOptions {
    /// Number of recipe-edge rows: `floor(density * N^2)`.
    pub fn edge_count(&self) -> usize {
        (self.density * (self.num_products as f64).powi(2)) as usize
    }

    /// Total rows in the finished table: labor and aggregate blocks of `N`
    /// rows each around the edge block.
    pub fn total_rows(&self) -> usize {
        2 * self.num_products + self.edge_count()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            generator_options: GeneratorOptions::default(),
            output_dir: PathBuf::from("."),
            progress: true,
        }
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            num_products: 10_000,
            density: 0.01,
            seed: None,
        }
    }
}
