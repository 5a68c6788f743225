//! Random sparse input-output table generator.
//!
//! Synthesizes a Leontief-style table over a universe of N products: one
//! labor row per product, `floor(density * N^2)` random recipe edges, and
//! one aggregate output row per product summarizing total required input
//! plus a margin. The table is written as a flat text file and is meant as
//! a stress-test fixture for downstream table analyzers.
//!
//! The fixture is deliberately imperfect. Product identifiers are drawn
//! with replacement, and the output pass sums over the same row collection
//! it appends aggregate rows into, so an identifier collision makes one
//! product slot lose its output line and inflates a later aggregate by the
//! earlier one. Both defects surface at a predictable row offset, which is
//! exactly what the fixture's consumers test against.

pub mod config;
pub mod generator;
pub mod model;
pub mod writer;
