//! Shared test utilities used across kruskal crates.
//!
//! Nothing here depends on `kruskal-core`, so the core crate can pull this in
//! as a dev-dependency without creating a second copy of its own types. Graphs
//! are therefore described as plain `(source, destination, weight)` tuples.

pub mod graphs;
pub mod oracle;
pub mod proptest_profile;
pub mod tracing;

/// An undirected edge as a `(source, destination, weight)` tuple.
pub type EdgeTuple = (usize, usize, u64);
