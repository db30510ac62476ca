//! Hand-checked graphs with known minimum spanning forests.

use crate::EdgeTuple;

/// A graph together with the forest Kruskal's algorithm must select for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceGraph {
    /// Short identifier used in test names and failure messages.
    pub name: &'static str,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges in insertion order.
    pub edges: &'static [EdgeTuple],
    /// Selected edges in selection order.
    pub expected: &'static [EdgeTuple],
    /// Summed weight of `expected`.
    pub expected_total: u128,
    /// Connected components of the input.
    pub expected_components: usize,
}

/// Four vertices, five edges; `(0, 2, 6)` is skipped because 0 and 2 are
/// already joined through 3.
pub const SQUARE_WITH_DIAGONAL: ReferenceGraph = ReferenceGraph {
    name: "square_with_diagonal",
    vertex_count: 4,
    edges: &[(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
    expected: &[(2, 3, 4), (0, 3, 5), (0, 1, 10)],
    expected_total: 19,
    expected_components: 1,
};

/// Three vertices and no edges at all.
pub const NO_EDGES: ReferenceGraph = ReferenceGraph {
    name: "no_edges",
    vertex_count: 3,
    edges: &[],
    expected: &[],
    expected_total: 0,
    expected_components: 3,
};

/// One edge and two isolated vertices: a spanning forest, not a tree.
pub const ISOLATED_VERTICES: ReferenceGraph = ReferenceGraph {
    name: "isolated_vertices",
    vertex_count: 4,
    edges: &[(0, 1, 1)],
    expected: &[(0, 1, 1)],
    expected_total: 1,
    expected_components: 3,
};

/// Two triangles with no edge between them.
pub const TWO_TRIANGLES: ReferenceGraph = ReferenceGraph {
    name: "two_triangles",
    vertex_count: 6,
    edges: &[
        (0, 1, 3),
        (1, 2, 1),
        (0, 2, 2),
        (3, 4, 7),
        (4, 5, 9),
        (3, 5, 8),
    ],
    expected: &[(1, 2, 1), (0, 2, 2), (3, 4, 7), (3, 5, 8)],
    expected_total: 18,
    expected_components: 2,
};

/// Equal weights everywhere: the stable sort keeps insertion order, so the
/// first edges that do not close a cycle win.
pub const ALL_TIED: ReferenceGraph = ReferenceGraph {
    name: "all_tied",
    vertex_count: 4,
    edges: &[(2, 3, 5), (0, 1, 5), (1, 3, 5), (0, 2, 5), (0, 3, 5)],
    expected: &[(2, 3, 5), (0, 1, 5), (1, 3, 5)],
    expected_total: 15,
    expected_components: 1,
};

/// Self-loops, a reverse duplicate and zero weights.
pub const LOOPS_AND_DUPLICATES: ReferenceGraph = ReferenceGraph {
    name: "loops_and_duplicates",
    vertex_count: 3,
    edges: &[(0, 0, 0), (0, 1, 2), (1, 0, 2), (1, 2, 0), (2, 2, 1)],
    expected: &[(1, 2, 0), (0, 1, 2)],
    expected_total: 2,
    expected_components: 1,
};

/// Every reference graph, for table-driven tests.
pub const ALL: &[ReferenceGraph] = &[
    SQUARE_WITH_DIAGONAL,
    NO_EDGES,
    ISOLATED_VERTICES,
    TWO_TRIANGLES,
    ALL_TIED,
    LOOPS_AND_DUPLICATES,
];
