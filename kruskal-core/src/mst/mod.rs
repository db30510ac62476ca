//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! Edges are sorted by weight with a stable sort, then scanned in ascending
//! order. An edge is kept when its endpoints are still in different
//! components of a fresh [`DisjointSet`]; otherwise it would close a cycle and
//! is skipped. Disconnected graphs yield a minimum spanning forest with one
//! tree per component.
//!
//! The sort may run on the Rayon pool when the `parallel` feature is enabled.
//! Selection is always sequential because each union decides whether later
//! edges close a cycle.

use std::fmt;

#[cfg(feature = "parallel")]
use rayon::slice::ParallelSliceMut;
use tracing::{Span, debug, field, instrument, trace};

use crate::{
    DisjointSet,
    error::MstError,
    graph::{Edge, Graph},
};

/// Edge count above which [`SortStrategy::Auto`] sorts on the Rayon pool.
pub const PARALLEL_SORT_THRESHOLD: usize = 1 << 14;

/// Selects how the edge list is sorted before selection.
///
/// Both strategies use a stable sort, so equal-weight edges keep their
/// insertion order and the selected forest is identical either way.
///
/// # Examples
/// ```
/// use kruskal_core::{Kruskal, SortStrategy};
///
/// let kruskal = Kruskal::new().with_sort_strategy(SortStrategy::Sequential);
/// assert_eq!(kruskal.sort_strategy(), SortStrategy::Sequential);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SortStrategy {
    /// Sort in parallel for large edge lists when the `parallel` feature is
    /// enabled, sequentially otherwise.
    #[default]
    Auto,
    /// Always sort on the calling thread.
    Sequential,
    /// Always sort on the Rayon pool. Requires the `parallel` feature.
    Parallel,
}

impl SortStrategy {
    /// Returns the label recorded on tracing spans.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The output of a minimum spanning forest computation.
///
/// Edges appear in selection order, which is non-decreasing by weight. When
/// the input graph is connected the forest is a minimum spanning tree.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<Edge>,
    component_count: usize,
    total_weight: u128,
}

impl MinimumSpanningForest {
    /// Returns the selected edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the summed weight of the selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> u128 { self.total_weight }

    /// Returns the number of connected components of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when no edge was selected.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest, returning the selected edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

/// Configures and runs Kruskal's algorithm.
///
/// # Examples
/// ```
/// use kruskal_core::{Graph, Kruskal, SortStrategy};
///
/// let graph = Graph::from_edges(3, [(0, 1, 2), (1, 2, 1), (0, 2, 3)]);
/// let forest = Kruskal::new()
///     .with_sort_strategy(SortStrategy::Sequential)
///     .run(&graph)?;
/// assert_eq!(forest.total_weight(), 3);
/// assert!(forest.is_tree());
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Kruskal {
    sort_strategy: SortStrategy,
}

impl Kruskal {
    /// Creates a runner using [`SortStrategy::Auto`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the sort strategy.
    #[must_use]
    pub const fn with_sort_strategy(mut self, sort_strategy: SortStrategy) -> Self {
        self.sort_strategy = sort_strategy;
        self
    }

    /// Returns the configured sort strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sort_strategy(&self) -> SortStrategy { self.sort_strategy }

    /// Computes the minimum spanning forest of `graph`.
    ///
    /// The graph is not modified. An empty edge list, including the
    /// degenerate zero-vertex graph, yields an empty forest.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidVertex`] when an edge endpoint is not below
    /// the vertex count, [`MstError::StrategyUnavailable`] when
    /// [`SortStrategy::Parallel`] is requested without the `parallel` feature
    /// and [`MstError::DisjointSet`] when no disjoint set of the vertex count
    /// can be allocated.
    #[instrument(
        name = "mst.kruskal",
        err,
        skip(self, graph),
        fields(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            strategy = field::Empty,
            selected = field::Empty,
            components = field::Empty,
            total_weight = field::Empty,
        ),
    )]
    pub fn run(&self, graph: &Graph) -> Result<MinimumSpanningForest, MstError> {
        validate_endpoints(graph)?;

        let resolved = resolve_strategy(self.sort_strategy, graph.edge_count())?;
        let span = Span::current();
        span.record("strategy", field::display(resolved.as_str()));

        let sorted = sort_edges(graph.edges(), resolved);
        let forest = select_edges(graph.vertex_count(), &sorted)?;

        span.record("selected", forest.len());
        span.record("components", forest.component_count());
        span.record("total_weight", field::display(forest.total_weight()));
        debug!(
            selected = forest.len(),
            components = forest.component_count(),
            "minimum spanning forest computed"
        );
        Ok(forest)
    }
}

/// Computes the minimum spanning forest of `graph` with default settings.
///
/// # Errors
/// Returns [`MstError::InvalidVertex`] when an edge endpoint is not below the
/// vertex count.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, Graph, kruskal};
///
/// let mut graph = Graph::new(4);
/// for (source, destination, weight) in [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)] {
///     graph.add_edge(source, destination, weight);
/// }
/// let forest = kruskal(&graph)?;
/// assert_eq!(
///     forest.edges(),
///     &[Edge::new(2, 3, 4), Edge::new(0, 3, 5), Edge::new(0, 1, 10)]
/// );
/// assert_eq!(forest.total_weight(), 19);
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
pub fn kruskal(graph: &Graph) -> Result<MinimumSpanningForest, MstError> {
    Kruskal::new().run(graph)
}

impl Graph {
    /// Computes the minimum spanning forest of this graph.
    ///
    /// Shorthand for [`kruskal`].
    ///
    /// # Errors
    /// Returns [`MstError::InvalidVertex`] when an edge added through
    /// [`Graph::add_edge`] references a vertex outside the graph.
    pub fn compute_mst(&self) -> Result<MinimumSpanningForest, MstError> {
        kruskal(self)
    }
}

fn validate_endpoints(graph: &Graph) -> Result<(), MstError> {
    let vertex_count = graph.vertex_count();
    for edge in graph.edges() {
        for vertex in [edge.source(), edge.destination()] {
            if vertex >= vertex_count {
                return Err(MstError::InvalidVertex {
                    source_vertex: edge.source(),
                    destination: edge.destination(),
                    vertex,
                    vertex_count,
                });
            }
        }
    }
    Ok(())
}

fn resolve_strategy(requested: SortStrategy, edge_count: usize) -> Result<SortStrategy, MstError> {
    match requested {
        SortStrategy::Sequential => Ok(SortStrategy::Sequential),
        SortStrategy::Parallel if cfg!(feature = "parallel") => Ok(SortStrategy::Parallel),
        SortStrategy::Parallel => Err(MstError::StrategyUnavailable { requested }),
        SortStrategy::Auto if cfg!(feature = "parallel") && edge_count >= PARALLEL_SORT_THRESHOLD => {
            Ok(SortStrategy::Parallel)
        }
        SortStrategy::Auto => Ok(SortStrategy::Sequential),
    }
}

fn sort_edges(edges: &[Edge], strategy: SortStrategy) -> Vec<Edge> {
    let mut sorted = edges.to_vec();
    match strategy {
        #[cfg(feature = "parallel")]
        SortStrategy::Parallel => sorted.par_sort_by_key(Edge::weight),
        _ => sorted.sort_by_key(Edge::weight),
    }
    sorted
}

fn select_edges(vertex_count: usize, sorted: &[Edge]) -> Result<MinimumSpanningForest, MstError> {
    let tree_size = vertex_count.saturating_sub(1);
    let mut components = DisjointSet::try_new(vertex_count)?;
    let mut edges = Vec::with_capacity(tree_size.min(sorted.len()));
    let mut total_weight: u128 = 0;

    for edge in sorted {
        if edges.len() == tree_size {
            break;
        }
        if components.union(edge.source(), edge.destination())? {
            trace!(
                source = edge.source(),
                destination = edge.destination(),
                weight = edge.weight(),
                "edge selected"
            );
            total_weight += u128::from(edge.weight());
            edges.push(*edge);
        } else {
            trace!(
                source = edge.source(),
                destination = edge.destination(),
                weight = edge.weight(),
                "edge skipped; endpoints already connected"
            );
        }
    }

    Ok(MinimumSpanningForest {
        edges,
        component_count: components.component_count(),
        total_weight,
    })
}

#[cfg(test)]
mod property;
