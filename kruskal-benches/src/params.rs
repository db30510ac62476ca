//! Benchmark parameter labels.

use std::fmt;

use kruskal_core::SortStrategy;

/// Parameters for one MST benchmark input.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
    /// Sort strategy under test.
    pub strategy: SortStrategy,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},m={},{}",
            self.vertex_count, self.edge_count, self.strategy
        )
    }
}
