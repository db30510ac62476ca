//! Support library for the `kruskal` binary.
//!
//! Exposes the interactive session and logging setup so tests can drive a
//! whole session over in-memory buffers instead of a terminal.

pub mod cli;
pub mod logging;
