//! Fixture types shared by the MST property suite.

use kruskal_test_support::EdgeTuple;
use test_strategy::Arbitrary;

use crate::Graph;

/// How edges and weights are laid out in a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Every edge carries a distinct weight.
    #[weight(2)]
    Unique,
    /// Weights come from a pool of one to three values, so ties dominate.
    #[weight(3)]
    ManyIdentical,
    /// A random spanning path plus a few extra edges.
    #[weight(2)]
    Sparse,
    /// Vertices split into groups with no edge between groups.
    #[weight(2)]
    Disconnected,
    /// Self-loops and reversed duplicates mixed into random edges.
    #[weight(1)]
    LoopsAndDuplicates,
}

/// Size limits for one family of generated graphs.
#[derive(Clone, Copy, Debug)]
pub(super) struct GraphBounds {
    /// Largest vertex count to generate.
    pub max_vertices: usize,
    /// Largest edge count to generate.
    pub max_edges: usize,
}

/// A generated graph together with the distribution that produced it.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices; always at least one.
    pub vertex_count: usize,
    /// Edges in insertion order.
    pub edges: Vec<EdgeTuple>,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl GraphFixture {
    /// Builds the core graph for this fixture.
    pub(super) fn graph(&self) -> Graph {
        Graph::from_edges(self.vertex_count, self.edges.iter().copied())
    }

    /// Short context string appended to failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len()
        )
    }
}
