//! Benchmark support for the Kruskal workspace.
//!
//! Generates seeded synthetic graphs and groups benchmark parameters for the
//! Criterion suites under `benches/`.

pub mod error;
pub mod params;
pub mod synthetic;
