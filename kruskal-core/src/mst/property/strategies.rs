//! Graph generators for the MST property suite.
//!
//! Proptest picks a distribution and a seed; the seed drives a [`SmallRng`]
//! that builds the edge list. The same generators back the seeded rstest
//! cases so a failing seed can be replayed directly.

use kruskal_test_support::EdgeTuple;
use kruskal_test_support::oracle::MAX_ORACLE_EDGES;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{GraphBounds, GraphFixture, WeightDistribution};

/// Graphs small enough for the brute-force oracle.
pub(super) const SMALL: GraphBounds = GraphBounds {
    max_vertices: 6,
    max_edges: 12,
};

/// Graphs large enough to exercise path compression and early stopping.
pub(super) const MEDIUM: GraphBounds = GraphBounds {
    max_vertices: 48,
    max_edges: 160,
};

const _: () = assert!(SMALL.max_edges <= MAX_ORACLE_EDGES);

/// Largest weight drawn for non-tied distributions.
const MAX_WEIGHT: u64 = 1_000;

/// Strategy producing fixtures within `bounds`.
pub(super) fn fixture_strategy(bounds: GraphBounds) -> impl Strategy<Value = GraphFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(move |(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, bounds, &mut rng)
    })
}

/// Generates a fixture for an explicit distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    bounds: GraphBounds,
    rng: &mut SmallRng,
) -> GraphFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => unique_weights(bounds, rng),
        WeightDistribution::ManyIdentical => identical_weights(bounds, rng),
        WeightDistribution::Sparse => sparse(bounds, rng),
        WeightDistribution::Disconnected => disconnected(bounds, rng),
        WeightDistribution::LoopsAndDuplicates => loops_and_duplicates(bounds, rng),
    };
    GraphFixture {
        vertex_count,
        edges,
        distribution,
    }
}

type Generated = (usize, Vec<EdgeTuple>);

fn random_endpoints(rng: &mut SmallRng, vertex_count: usize) -> (usize, usize) {
    (
        rng.gen_range(0..vertex_count),
        rng.gen_range(0..vertex_count),
    )
}

fn unique_weights(bounds: GraphBounds, rng: &mut SmallRng) -> Generated {
    let vertex_count = rng.gen_range(1..=bounds.max_vertices);
    let edge_count = rng.gen_range(0..=bounds.max_edges);
    let mut weights: Vec<u64> = (0..edge_count as u64).map(|w| w * 7 + 1).collect();
    weights.shuffle(rng);
    let edges = weights
        .into_iter()
        .map(|weight| {
            let (source, destination) = random_endpoints(rng, vertex_count);
            (source, destination, weight)
        })
        .collect();
    (vertex_count, edges)
}

fn identical_weights(bounds: GraphBounds, rng: &mut SmallRng) -> Generated {
    let vertex_count = rng.gen_range(1..=bounds.max_vertices);
    let edge_count = rng.gen_range(0..=bounds.max_edges);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<u64> = (0..pool_size).map(|_| rng.gen_range(0..=10)).collect();
    let edges = (0..edge_count)
        .map(|_| {
            let (source, destination) = random_endpoints(rng, vertex_count);
            let weight = pool[rng.gen_range(0..pool.len())];
            (source, destination, weight)
        })
        .collect();
    (vertex_count, edges)
}

fn sparse(bounds: GraphBounds, rng: &mut SmallRng) -> Generated {
    let vertex_count = rng.gen_range(1..=bounds.max_vertices);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);

    let mut edges: Vec<EdgeTuple> = order
        .windows(2)
        .take(bounds.max_edges)
        .map(|pair| (pair[0], pair[1], rng.gen_range(0..=MAX_WEIGHT)))
        .collect();

    let extra = rng.gen_range(0..=vertex_count / 2);
    for _ in 0..extra.min(bounds.max_edges - edges.len()) {
        let (source, destination) = random_endpoints(rng, vertex_count);
        edges.push((source, destination, rng.gen_range(0..=MAX_WEIGHT)));
    }
    edges.shuffle(rng);
    (vertex_count, edges)
}

fn disconnected(bounds: GraphBounds, rng: &mut SmallRng) -> Generated {
    let vertex_count = rng.gen_range(2..=bounds.max_vertices.max(2));
    let group_count = rng.gen_range(2..=vertex_count.min(5));
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);
    let groups: Vec<Vec<usize>> = (0..group_count)
        .map(|group| order.iter().copied().skip(group).step_by(group_count).collect())
        .collect();

    let edge_count = rng.gen_range(0..=bounds.max_edges);
    let edges = (0..edge_count)
        .map(|_| {
            let members = &groups[rng.gen_range(0..group_count)];
            let source = members[rng.gen_range(0..members.len())];
            let destination = members[rng.gen_range(0..members.len())];
            (source, destination, rng.gen_range(0..=MAX_WEIGHT))
        })
        .collect();
    (vertex_count, edges)
}

fn loops_and_duplicates(bounds: GraphBounds, rng: &mut SmallRng) -> Generated {
    let vertex_count = rng.gen_range(1..=bounds.max_vertices);
    let edge_count = rng.gen_range(0..=bounds.max_edges);
    let mut edges: Vec<EdgeTuple> = Vec::with_capacity(edge_count);
    while edges.len() < edge_count {
        let weight = rng.gen_range(0..=20);
        match (rng.gen_range(0..3), edges.last().copied()) {
            (0, _) => {
                let vertex = rng.gen_range(0..vertex_count);
                edges.push((vertex, vertex, weight));
            }
            (1, Some((source, destination, previous))) => {
                edges.push((destination, source, previous));
            }
            _ => {
                let (source, destination) = random_endpoints(rng, vertex_count);
                edges.push((source, destination, weight));
            }
        }
    }
    (vertex_count, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(WeightDistribution::Unique)]
    #[case(WeightDistribution::ManyIdentical)]
    #[case(WeightDistribution::Sparse)]
    #[case(WeightDistribution::Disconnected)]
    #[case(WeightDistribution::LoopsAndDuplicates)]
    fn fixtures_respect_their_bounds(#[case] distribution: WeightDistribution) {
        for seed in 0..32 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let fixture = generate_fixture(distribution, SMALL, &mut rng);
            assert!((1..=SMALL.max_vertices).contains(&fixture.vertex_count));
            assert!(fixture.edges.len() <= SMALL.max_edges);
            assert!(
                fixture
                    .edges
                    .iter()
                    .all(|&(s, d, _)| s < fixture.vertex_count && d < fixture.vertex_count)
            );
        }
    }

    #[test]
    fn unique_weights_are_distinct() {
        let mut rng = SmallRng::seed_from_u64(7);
        let fixture = generate_fixture(WeightDistribution::Unique, MEDIUM, &mut rng);
        let mut weights: Vec<u64> = fixture.edges.iter().map(|&(_, _, w)| w).collect();
        weights.sort_unstable();
        weights.dedup();
        assert_eq!(weights.len(), fixture.edges.len());
    }

    #[test]
    fn disconnected_fixtures_have_several_components() {
        for seed in 0..16 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let fixture = generate_fixture(WeightDistribution::Disconnected, MEDIUM, &mut rng);
            let components = kruskal_test_support::oracle::count_components(
                fixture.vertex_count,
                &fixture.edges,
            );
            assert!(components >= 2, "seed {seed}: {components} components");
        }
    }
}
