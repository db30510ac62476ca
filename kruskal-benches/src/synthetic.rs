//! Seeded synthetic graphs for benchmarking.
//!
//! Every graph is connected: a random spanning path is laid down first and
//! the remaining edges join uniformly random vertex pairs, so Kruskal's
//! algorithm always has to build a full tree.

use kruskal_core::{Edge, Graph, Weight};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// How edge weights are drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WeightProfile {
    /// Uniform over `0..=max_weight`; ties are rare for large ranges.
    Uniform {
        /// Largest weight drawn.
        max_weight: Weight,
    },
    /// A handful of distinct weights, so most comparisons are ties.
    FewDistinct {
        /// Number of distinct weights.
        distinct: u8,
    },
}

/// Configuration for [`generate_graph`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges per vertex, counting the spanning path.
    pub average_degree: usize,
    /// Weight distribution.
    pub weights: WeightProfile,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected graph from `config`.
///
/// The graph holds `vertex_count * average_degree` edges, or at least the
/// `vertex_count - 1` edges of the spanning path.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count`,
/// `average_degree` or the number of distinct weights is zero.
///
/// # Examples
/// ```
/// use kruskal_benches::synthetic::{SyntheticGraphConfig, WeightProfile, generate_graph};
///
/// let config = SyntheticGraphConfig {
///     vertex_count: 100,
///     average_degree: 4,
///     weights: WeightProfile::Uniform { max_weight: 1_000 },
///     seed: 42,
/// };
/// let graph = generate_graph(&config).expect("valid config");
/// assert_eq!(graph.edge_count(), 400);
/// assert!(graph.compute_mst().expect("graph is valid").is_tree());
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    if config.average_degree == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "average_degree",
        });
    }
    if config.weights == (WeightProfile::FewDistinct { distinct: 0 }) {
        return Err(BenchSetupError::ZeroValue {
            context: "distinct weights",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let vertex_count = config.vertex_count;
    let edge_count = vertex_count
        .saturating_mul(config.average_degree)
        .max(vertex_count - 1);
    let mut graph = Graph::with_capacity(vertex_count, edge_count);

    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(&mut rng);
    let path: Vec<Edge> = order
        .windows(2)
        .filter_map(|pair| match *pair {
            [source, destination] => Some((source, destination)),
            _ => None,
        })
        .map(|(source, destination)| {
            Edge::new(source, destination, draw_weight(config.weights, &mut rng))
        })
        .collect();
    graph.extend(path);

    while graph.edge_count() < edge_count {
        let source = rng.gen_range(0..vertex_count);
        let destination = rng.gen_range(0..vertex_count);
        let weight = draw_weight(config.weights, &mut rng);
        graph.add_edge(source, destination, weight);
    }
    Ok(graph)
}

fn draw_weight(profile: WeightProfile, rng: &mut SmallRng) -> Weight {
    match profile {
        WeightProfile::Uniform { max_weight } => rng.gen_range(0..=max_weight),
        WeightProfile::FewDistinct { distinct } => Weight::from(rng.gen_range(0..distinct)),
    }
}
