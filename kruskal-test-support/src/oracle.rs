//! Brute-force spanning forest oracle for small graphs.
//!
//! Enumerates every edge subset of size `n - c`, where `c` is the number of
//! connected components, and keeps the lightest acyclic one. Exponential in
//! the edge count, so it is only meant for graphs with a handful of vertices.

use crate::EdgeTuple;

/// Largest edge list [`brute_force_forest`] accepts.
pub const MAX_ORACLE_EDGES: usize = 20;

/// Summary of the lightest spanning forest found by enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BruteForceForest {
    /// Total weight of the lightest spanning forest.
    pub total_weight: u128,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Connected components of the input graph.
    pub component_count: usize,
}

/// Finds the minimum spanning forest weight by exhaustive search.
///
/// # Panics
/// Panics when `edges` holds more than [`MAX_ORACLE_EDGES`] entries or an
/// endpoint is not below `vertex_count`.
///
/// # Examples
/// ```
/// use kruskal_test_support::oracle::brute_force_forest;
///
/// let forest = brute_force_forest(3, &[(0, 1, 5), (1, 2, 1), (0, 2, 2)]);
/// assert_eq!(forest.total_weight, 3);
/// assert_eq!(forest.edge_count, 2);
/// ```
#[must_use]
pub fn brute_force_forest(vertex_count: usize, edges: &[EdgeTuple]) -> BruteForceForest {
    assert!(
        edges.len() <= MAX_ORACLE_EDGES,
        "oracle supports at most {MAX_ORACLE_EDGES} edges, got {}",
        edges.len()
    );

    let component_count = count_components(vertex_count, edges);
    let edge_count = vertex_count.saturating_sub(component_count);

    let mut best: Option<u128> = None;
    for mask in 0_u32..(1_u32 << edges.len()) {
        if mask.count_ones() as usize != edge_count {
            continue;
        }
        let subset: Vec<EdgeTuple> = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| *edge)
            .collect();
        if !is_acyclic(vertex_count, &subset) {
            continue;
        }
        let weight = total_weight(&subset);
        best = Some(best.map_or(weight, |current| current.min(weight)));
    }

    BruteForceForest {
        total_weight: best.unwrap_or(0),
        edge_count,
        component_count,
    }
}

/// Counts the connected components induced by `edges` over `vertex_count`
/// vertices.
///
/// # Panics
/// Panics when an endpoint is not below `vertex_count`.
#[must_use]
pub fn count_components(vertex_count: usize, edges: &[EdgeTuple]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for &(source, destination, _) in edges {
        let left = root(&mut parent, source);
        let right = root(&mut parent, destination);
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}

/// Returns `true` when no edge in `edges` joins two already-connected
/// vertices, scanning in order.
///
/// # Panics
/// Panics when an endpoint is not below `vertex_count`.
#[must_use]
pub fn is_acyclic(vertex_count: usize, edges: &[EdgeTuple]) -> bool {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for &(source, destination, _) in edges {
        let left = root(&mut parent, source);
        let right = root(&mut parent, destination);
        if left == right {
            return false;
        }
        parent[right] = left;
    }
    true
}

/// Sums edge weights without overflow.
#[must_use]
pub fn total_weight(edges: &[EdgeTuple]) -> u128 {
    edges.iter().map(|&(_, _, weight)| u128::from(weight)).sum()
}

fn root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}
