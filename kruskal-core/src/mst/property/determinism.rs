//! Determinism across sort strategies and repeated runs.
//!
//! Every available [`SortStrategy`] must select the same edge sequence, and
//! re-running a strategy on the same graph must reproduce it exactly.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Kruskal, MinimumSpanningForest, SortStrategy};

use super::types::GraphFixture;

/// Number of runs per strategy.
const REPETITIONS: usize = 3;

/// Runs the determinism property for `fixture`.
pub(super) fn run_determinism_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let run = |strategy: SortStrategy| -> Result<MinimumSpanningForest, TestCaseError> {
        Kruskal::new()
            .with_sort_strategy(strategy)
            .run(&graph)
            .map_err(|err| {
                TestCaseError::fail(format!(
                    "{strategy} run failed: {err} ({})",
                    fixture.describe()
                ))
            })
    };

    let baseline = run(SortStrategy::Sequential)?;
    for strategy in strategies() {
        for attempt in 0..REPETITIONS {
            let forest = run(strategy)?;
            if forest != baseline {
                return Err(TestCaseError::fail(format!(
                    "{strategy} run {attempt} diverged from the sequential baseline\n  \
                     baseline: {:?}\n  run:      {:?}\n  ({})",
                    baseline.edges(),
                    forest.edges(),
                    fixture.describe()
                )));
            }
        }
    }
    Ok(())
}

fn strategies() -> Vec<SortStrategy> {
    let mut strategies = vec![SortStrategy::Sequential, SortStrategy::Auto];
    if cfg!(feature = "parallel") {
        strategies.push(SortStrategy::Parallel);
    }
    strategies
}
