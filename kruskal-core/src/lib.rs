//! Kruskal minimum spanning tree core library.
//!
//! Build a [`Graph`] from a vertex count and weighted undirected edges, then
//! call [`Graph::compute_mst`] (or [`kruskal`]) to obtain the minimum
//! spanning forest. Cycle detection uses the [`DisjointSet`] union-find, which
//! is also exposed for direct use.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod mst;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{
        DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, MstError,
        MstErrorCode,
    },
    graph::{Edge, Graph, Weight},
    mst::{Kruskal, MinimumSpanningForest, PARALLEL_SORT_THRESHOLD, SortStrategy, kruskal},
};
