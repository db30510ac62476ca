//! Structural invariants of the selected forest.
//!
//! - every selected edge comes from the input, at most as often as it occurs
//! - no self-loops and no cycles
//! - weights appear in non-decreasing order
//! - `vertices - components` edges, where `components` counts the input
//! - the reported total equals the sum of the selected weights

use std::collections::HashMap;

use kruskal_test_support::EdgeTuple;
use kruskal_test_support::oracle::{count_components, is_acyclic, total_weight};
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::kruskal;
use crate::test_utils::as_tuples;

use super::types::GraphFixture;

/// Runs the structural invariant property for `fixture`.
pub(super) fn run_structural_property(fixture: &GraphFixture) -> TestCaseResult {
    let forest = kruskal(&fixture.graph()).map_err(|err| {
        TestCaseError::fail(format!("kruskal failed: {err} ({})", fixture.describe()))
    })?;
    let selected = as_tuples(forest.edges());

    validate_subset(&fixture.edges, &selected)?;
    validate_no_self_loops(&selected)?;
    if !is_acyclic(fixture.vertex_count, &selected) {
        return Err(TestCaseError::fail(format!(
            "selected edges contain a cycle: {selected:?} ({})",
            fixture.describe()
        )));
    }
    if let Some(index) = selected.windows(2).position(|pair| pair[0].2 > pair[1].2) {
        return Err(TestCaseError::fail(format!(
            "weights decrease after position {index}: {selected:?}"
        )));
    }

    let components = count_components(fixture.vertex_count, &fixture.edges);
    prop_check(
        forest.component_count() == components,
        || format!("component count {} != {components}", forest.component_count()),
    )?;
    prop_check(selected.len() == fixture.vertex_count - components, || {
        format!(
            "edge count {} != vertices - components = {} ({})",
            selected.len(),
            fixture.vertex_count - components,
            fixture.describe()
        )
    })?;
    prop_check(forest.total_weight() == total_weight(&selected), || {
        format!(
            "reported total {} != summed total {}",
            forest.total_weight(),
            total_weight(&selected)
        )
    })?;
    prop_check(forest.is_tree() == (components == 1), || {
        format!("is_tree() disagrees with {components} components")
    })
}

fn prop_check(condition: bool, message: impl FnOnce() -> String) -> TestCaseResult {
    if condition {
        Ok(())
    } else {
        Err(TestCaseError::fail(message()))
    }
}

fn validate_subset(input: &[EdgeTuple], selected: &[EdgeTuple]) -> TestCaseResult {
    let mut available: HashMap<EdgeTuple, usize> = HashMap::new();
    for edge in input {
        *available.entry(*edge).or_default() += 1;
    }
    for edge in selected {
        match available.get_mut(edge) {
            Some(count) if *count > 0 => *count -= 1,
            _ => {
                return Err(TestCaseError::fail(format!(
                    "selected edge {edge:?} is not part of the input"
                )));
            }
        }
    }
    Ok(())
}

fn validate_no_self_loops(selected: &[EdgeTuple]) -> TestCaseResult {
    match selected.iter().find(|(source, destination, _)| source == destination) {
        Some(edge) => Err(TestCaseError::fail(format!("self-loop selected: {edge:?}"))),
        None => Ok(()),
    }
}
