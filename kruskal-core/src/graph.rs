//! Undirected weighted graph stored as a flat edge list.

use crate::error::GraphError;

/// Non-negative integer edge weight.
pub type Weight = u64;

/// An undirected weighted edge.
///
/// `(u, v, w)` and `(v, u, w)` describe the same connection; endpoints are kept
/// exactly as supplied.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    destination: usize,
    weight: Weight,
}

impl Edge {
    /// Creates an edge between `source` and `destination`.
    #[must_use]
    pub const fn new(source: usize, destination: usize, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Returns the source endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the destination endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn destination(&self) -> usize { self.destination }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

impl From<(usize, usize, Weight)> for Edge {
    fn from((source, destination, weight): (usize, usize, Weight)) -> Self {
        Self::new(source, destination, weight)
    }
}

/// An undirected weighted graph with a fixed vertex count.
///
/// Vertices are the indices `0..vertex_count`. Edges are appended in insertion
/// order and never reordered; computing the MST reads them without mutation.
///
/// # Examples
/// ```
/// use kruskal_core::Graph;
///
/// let mut graph = Graph::new(3);
/// assert!(graph.is_empty());
/// graph.add_edge(0, 1, 4);
/// graph.try_add_edge(1, 2, 2)?;
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.try_add_edge(1, 3, 1).is_err());
/// # Ok::<(), kruskal_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `capacity` edges.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, capacity: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Creates a graph from an iterator of edges without validating endpoints.
    #[must_use]
    pub fn from_edges<I, E>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new(vertex_count);
        graph.extend(edges.into_iter().map(Into::into));
        graph
    }

    /// Appends an edge without validating its endpoints.
    ///
    /// Endpoints outside `0..vertex_count` are reported later by
    /// [`Graph::compute_mst`]; use [`Graph::try_add_edge`] to reject them at
    /// insertion time.
    pub fn add_edge(&mut self, source: usize, destination: usize, weight: Weight) {
        self.edges.push(Edge::new(source, destination, weight));
    }

    /// Appends an edge after checking both endpoints are vertices of the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] naming the first endpoint that
    /// is not below `vertex_count`; the graph is left unchanged.
    pub fn try_add_edge(
        &mut self,
        source: usize,
        destination: usize,
        weight: Weight,
    ) -> Result<(), GraphError> {
        for vertex in [source, destination] {
            if vertex >= self.vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        self.add_edge(source, destination, weight);
        Ok(())
    }

    /// Returns `true` when no edges have been added.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of stored edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }
}

impl Extend<Edge> for Graph {
    fn extend<T: IntoIterator<Item = Edge>>(&mut self, iter: T) {
        self.edges.extend(iter);
    }
}
