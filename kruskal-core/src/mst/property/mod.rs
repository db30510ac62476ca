//! Property-based tests for Kruskal's algorithm.
//!
//! Checks the selected forest against a naive reference implementation and
//! a brute-force oracle, validates structural invariants (acyclicity, edge
//! count, weight order) and confirms that every sort strategy and repeated
//! run yields the same forest.

mod determinism;
mod equivalence;
mod minimality;
mod strategies;
mod structural;
mod types;
