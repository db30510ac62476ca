//! Argument parsing and input selection for the `kruskal` binary.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use kruskal_core::MstErrorCode;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::session::{Session, SessionError, SessionOptions, SessionSummary};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone, Default)]
#[command(
    name = "kruskal",
    about = "Compute the minimum spanning tree of a weighted undirected graph."
)]
pub struct Cli {
    /// Number of vertices; skips the interactive prompt.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub vertices: Option<usize>,

    /// Read the session from a file instead of standard input.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Return as soon as the tree is printed instead of waiting for `exit`.
    #[arg(long)]
    pub no_exit_prompt: bool,
}

impl Cli {
    /// Session options derived from the flags.
    #[must_use]
    pub const fn session_options(&self) -> SessionOptions {
        SessionOptions {
            vertices: self.vertices,
            exit_prompt: !self.no_exit_prompt,
        }
    }
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The session ended with a fatal error.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl CliError {
    /// Returns a stable machine-readable code for logging.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_INPUT_OPEN_FAILED",
            Self::Session(err) => err.code(),
        }
    }

    /// Returns the core MST error code when the computation itself failed.
    #[must_use]
    pub fn mst_code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Session(SessionError::Mst(err)) => Some(err.code()),
            _ => None,
        }
    }
}

/// Runs one session described by `cli`, writing the transcript to `output`.
///
/// Input comes from `--input` when given, standard input otherwise.
///
/// # Errors
/// Returns [`CliError`] when the input file cannot be opened or the session
/// fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1 3\n1 2 1\ndone\n")?;
/// let cli = Cli {
///     vertices: Some(3),
///     input: Some(file.path().to_path_buf()),
///     no_exit_prompt: true,
/// };
/// let summary = run_cli(cli, Vec::new())?;
/// assert_eq!(summary.forest.total_weight(), 4);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, output),
    fields(input = field::Empty, vertices_override = field::Empty),
)]
pub fn run_cli(cli: Cli, output: impl Write) -> Result<SessionSummary, CliError> {
    let span = Span::current();
    span.record(
        "input",
        field::display(
            cli.input
                .as_deref()
                .map_or_else(|| "<stdin>".into(), Path::to_string_lossy),
        ),
    );
    if let Some(vertices) = cli.vertices {
        span.record("vertices_override", vertices);
    }

    let options = cli.session_options();
    let summary = match cli.input {
        Some(path) => run_session(open_input(&path)?, output, options)?,
        None => run_session(io::stdin().lock(), output, options)?,
    };

    info!(
        vertices = summary.graph.vertex_count(),
        edges = summary.graph.edge_count(),
        selected = summary.forest.len(),
        total_weight = %summary.forest.total_weight(),
        "session completed"
    );
    Ok(summary)
}

fn run_session(
    input: impl BufRead,
    output: impl Write,
    options: SessionOptions,
) -> Result<SessionSummary, CliError> {
    Ok(Session::new(input, output, options).run()?)
}

#[instrument(name = "cli.open_input", err, skip(path), fields(path = %path.display()))]
pub(super) fn open_input(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
