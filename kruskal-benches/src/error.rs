//! Benchmark setup errors.

use kruskal_core::MstError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A zero value was passed where a positive one was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was zero.
        context: &'static str,
    },
    /// A warm-up MST computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}
