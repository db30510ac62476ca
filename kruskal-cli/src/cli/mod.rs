//! Command-line interface for computing a minimum spanning tree.
//!
//! The binary reads a vertex count and a list of weighted edges, either from
//! a terminal or from a scripted input file, and prints the tree Kruskal's
//! algorithm selects.

mod commands;
mod render;
mod session;

pub use commands::{Cli, CliError, run_cli};
pub use render::render_forest;
pub use session::{
    EdgeLineError, MAX_VERTICES, Session, SessionError, SessionOptions, SessionSummary,
    parse_edge_line,
};
