//! Equivalence with a naive reference selection.
//!
//! The reference stable-sorts edge indices by weight and tracks components
//! with a plain label vector, relabelling on every merge. It shares no code
//! with [`DisjointSet`](crate::DisjointSet), so agreement on the exact edge
//! sequence pins down both the tie-break order and the union-find behaviour.

use kruskal_test_support::EdgeTuple;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::as_tuples;

use super::types::GraphFixture;

/// Runs the reference equivalence property for `fixture`.
pub(super) fn run_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let forest = fixture.graph().compute_mst().map_err(|err| {
        TestCaseError::fail(format!("kruskal failed: {err} ({})", fixture.describe()))
    })?;
    let expected = reference_selection(fixture.vertex_count, &fixture.edges);
    let actual = as_tuples(forest.edges());

    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "selection differs from reference\n  actual:   {actual:?}\n  expected: {expected:?}\n  ({})",
            fixture.describe()
        )));
    }
    Ok(())
}

/// Quadratic Kruskal used as a trusted reference.
pub(super) fn reference_selection(vertex_count: usize, edges: &[EdgeTuple]) -> Vec<EdgeTuple> {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by_key(|&index| edges[index].2);

    let mut label: Vec<usize> = (0..vertex_count).collect();
    let mut selected = Vec::new();
    for index in order {
        let (source, destination, weight) = edges[index];
        let (kept, merged) = (label[source], label[destination]);
        if kept == merged {
            continue;
        }
        for entry in &mut label {
            if *entry == merged {
                *entry = kept;
            }
        }
        selected.push((source, destination, weight));
    }
    selected
}
