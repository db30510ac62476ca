//! Minimality against the brute-force oracle.
//!
//! On graphs small enough to enumerate every edge subset, the selected forest
//! must weigh exactly as much as the lightest acyclic subset spanning the
//! same components.

use kruskal_test_support::oracle::brute_force_forest;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::types::GraphFixture;

/// Runs the minimality property for `fixture`.
pub(super) fn run_minimality_property(fixture: &GraphFixture) -> TestCaseResult {
    let forest = fixture.graph().compute_mst().map_err(|err| {
        TestCaseError::fail(format!("kruskal failed: {err} ({})", fixture.describe()))
    })?;
    let oracle = brute_force_forest(fixture.vertex_count, &fixture.edges);

    if forest.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight {} exceeds the optimum {} ({})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.describe()
        )));
    }
    if forest.len() != oracle.edge_count || forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "forest has {} edges over {} components, oracle expects {} over {} ({})",
            forest.len(),
            forest.component_count(),
            oracle.edge_count,
            oracle.component_count,
            fixture.describe()
        )));
    }
    Ok(())
}
