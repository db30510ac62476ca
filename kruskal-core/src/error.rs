//! Error types for the Kruskal core library.
//!
//! Each error enum carries a stable, machine-readable code so callers can log
//! and match failures without depending on display strings.

use std::{collections::TryReserveError, fmt};

use thiserror::Error;

use crate::mst::SortStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The element lies outside `0..len`.
    #[error("element {element} is out of bounds for a disjoint set of {len} elements")]
    ElementOutOfBounds {
        /// The offending element.
        element: usize,
        /// Number of elements tracked by the set.
        len: usize,
    },
    /// Storage for the requested number of elements could not be reserved.
    #[error("cannot allocate a disjoint set of {len} elements: {source}")]
    CapacityExceeded {
        /// Requested number of elements.
        len: usize,
        /// Allocation failure reported by the standard library.
        #[source]
        source: TryReserveError,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The element lies outside `0..len`.
        ElementOutOfBounds => ElementOutOfBounds { .. } => "DISJOINT_SET_ELEMENT_OUT_OF_BOUNDS",
        /// Storage for the requested number of elements could not be reserved.
        CapacityExceeded => CapacityExceeded { .. } => "DISJOINT_SET_CAPACITY_EXCEEDED",
    }
}

/// An error produced by checked [`crate::Graph`] mutation.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint is not a vertex of the graph.
    #[error("vertex {vertex} is out of range; the graph has {vertex_count} vertices")]
    VertexOutOfRange {
        /// The endpoint supplied by the caller.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint is not a vertex of the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
    }
}

/// Errors returned while computing a minimum spanning tree/forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// An edge referenced a vertex that is not present in the graph.
    #[error("edge ({source_vertex}, {destination}) references vertex {vertex}, but the graph has {vertex_count} vertices")]
    InvalidVertex {
        /// Source endpoint of the offending edge.
        source_vertex: usize,
        /// Destination endpoint of the offending edge.
        destination: usize,
        /// The endpoint that is out of range.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The disjoint set rejected an operation during edge selection.
    #[error("disjoint set failed during edge selection: {error}")]
    DisjointSet {
        /// Underlying disjoint set error.
        #[source]
        error: DisjointSetError,
    },
    /// The requested sort strategy is not compiled into this build.
    #[error("sort strategy `{requested}` is not available in this build")]
    StrategyUnavailable {
        /// Strategy that could not be satisfied.
        requested: SortStrategy,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// An edge referenced a vertex that is not present in the graph.
        InvalidVertex => InvalidVertex { .. } => "MST_INVALID_VERTEX",
        /// The disjoint set rejected an operation during edge selection.
        DisjointSetFailure => DisjointSet { .. } => "MST_DISJOINT_SET_FAILURE",
        /// The requested sort strategy is not compiled into this build.
        StrategyUnavailable => StrategyUnavailable { .. } => "MST_STRATEGY_UNAVAILABLE",
    }
}

impl MstError {
    /// Retrieve the inner [`DisjointSetErrorCode`] when the failure originated
    /// in the disjoint set.
    #[must_use]
    pub const fn disjoint_set_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::DisjointSet { error } => Some(error.code()),
            Self::InvalidVertex { .. } | Self::StrategyUnavailable { .. } => None,
        }
    }
}

impl From<DisjointSetError> for MstError {
    fn from(error: DisjointSetError) -> Self {
        Self::DisjointSet { error }
    }
}
