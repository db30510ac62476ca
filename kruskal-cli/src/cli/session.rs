//! Interactive session: prompts, edge-line validation and the exit prompt.
//!
//! A [`Session`] reads from any [`BufRead`] and writes to any [`Write`], so
//! the same code drives a terminal, a scripted input file and in-memory test
//! buffers.

use std::io::{self, BufRead, Write};

use kruskal_core::{Edge, Graph, MinimumSpanningForest, MstError};
use thiserror::Error;
use tracing::{Span, debug, field, instrument};

use super::render::render_forest;

/// Largest vertex count a session accepts.
pub const MAX_VERTICES: usize = u32::MAX as usize;

/// Rejection reasons for a single edge line.
///
/// The messages are shown to the user verbatim before prompting again.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum EdgeLineError {
    /// The line did not hold exactly three tokens.
    #[error("Invalid input format. Please try again.")]
    WrongTokenCount {
        /// Number of whitespace-separated tokens found.
        found: usize,
    },
    /// A token was not an integer.
    #[error("Invalid input numbers. Please try again.")]
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// An endpoint was negative or not below the vertex count.
    #[error("Vertex numbers must be between 0 and {max_vertex}")]
    VertexOutOfRange {
        /// The endpoint as entered.
        vertex: i64,
        /// Largest valid vertex index.
        max_vertex: usize,
    },
    /// The weight was negative.
    #[error("Weight must be non-negative")]
    NegativeWeight {
        /// The weight as entered.
        weight: i64,
    },
}

/// Fatal session failures.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The vertex count was not an integer in `1..=MAX_VERTICES`.
    #[error("invalid number of vertices `{raw}`")]
    InvalidVertexCount {
        /// The rejected input, trimmed.
        raw: String,
    },
    /// Input ended before any edge was accepted.
    #[error("no edges were added to the graph")]
    NoEdges,
    /// Reading input or writing the transcript failed.
    #[error("failed to {action}: {source}")]
    Io {
        /// What the session was doing.
        action: &'static str,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The MST computation failed.
    #[error(transparent)]
    Mst(#[from] MstError),
}

impl SessionError {
    /// Returns a stable machine-readable code for logging.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidVertexCount { .. } => "SESSION_INVALID_VERTEX_COUNT",
            Self::NoEdges => "SESSION_NO_EDGES",
            Self::Io { .. } => "SESSION_IO",
            Self::Mst(err) => err.code().as_str(),
        }
    }
}

fn io_error(action: &'static str) -> impl FnOnce(io::Error) -> SessionError {
    move |source| SessionError::Io { action, source }
}

/// Knobs controlling a [`Session`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SessionOptions {
    /// Vertex count supplied up front; skips the prompt when set.
    pub vertices: Option<usize>,
    /// Whether to wait for `exit` before returning.
    pub exit_prompt: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            vertices: None,
            exit_prompt: true,
        }
    }
}

/// Outcome of a successful session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionSummary {
    /// The graph assembled from accepted edge lines.
    pub graph: Graph,
    /// The forest printed to the user.
    pub forest: MinimumSpanningForest,
}

/// One interactive run over an input and an output stream.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Session, SessionOptions};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let input = "3\n0 1 4\n1 2 2\ndone\nexit\n".as_bytes();
/// let mut output = Vec::new();
/// let summary = Session::new(input, &mut output, SessionOptions::default()).run()?;
/// assert_eq!(summary.forest.total_weight(), 6);
/// assert!(String::from_utf8(output)?.contains("Total MST weight: 6"));
/// # Ok(())
/// # }
/// ```
pub struct Session<R, W> {
    input: R,
    output: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    /// Runs the session to completion.
    ///
    /// The exit prompt is shown after invalid vertex counts and empty edge
    /// lists too, unless it is disabled or the failure was an I/O error.
    ///
    /// # Errors
    /// Returns [`SessionError`] when the vertex count is invalid, no edge was
    /// accepted, the MST computation fails, or the streams fail.
    #[instrument(
        name = "cli.session",
        err,
        skip(self),
        fields(vertices = field::Empty, edges = field::Empty, total_weight = field::Empty),
    )]
    pub fn run(mut self) -> Result<SessionSummary, SessionError> {
        let outcome = self.interact();
        if matches!(outcome, Err(SessionError::Io { .. })) {
            return outcome;
        }
        if self.options.exit_prompt {
            self.hold_open()?;
        }
        outcome
    }

    fn interact(&mut self) -> Result<SessionSummary, SessionError> {
        let span = Span::current();
        let vertex_count = self.vertex_count()?;
        span.record("vertices", vertex_count);

        let graph = self.read_edges(vertex_count)?;
        span.record("edges", graph.edge_count());
        if graph.is_empty() {
            self.say("No edges were added to the graph")?;
            return Err(SessionError::NoEdges);
        }

        let forest = graph.compute_mst()?;
        span.record("total_weight", field::display(forest.total_weight()));
        render_forest(&forest, &mut self.output).map_err(io_error("write the tree"))?;
        Ok(SessionSummary { graph, forest })
    }

    pub(super) fn vertex_count(&mut self) -> Result<usize, SessionError> {
        let raw = match self.options.vertices {
            Some(vertices) => vertices.to_string(),
            None => {
                self.prompt("Enter the number of vertices: ")?;
                self.read_line()?.unwrap_or_default()
            }
        };
        let raw = raw.trim();
        match raw.parse::<usize>() {
            Ok(count) if (1..=MAX_VERTICES).contains(&count) => Ok(count),
            _ => {
                self.say("Invalid number of vertices")?;
                Err(SessionError::InvalidVertexCount {
                    raw: raw.to_owned(),
                })
            }
        }
    }

    fn read_edges(&mut self, vertex_count: usize) -> Result<Graph, SessionError> {
        self.say("")?;
        self.say("Enter edges in format 'source destination weight'")?;
        self.say("Example: 0 1 5")?;
        self.say("Type 'done' to finish entering edges")?;

        let mut graph = Graph::new(vertex_count);
        loop {
            self.prompt("Edge: ")?;
            let Some(line) = self.read_line()? else {
                debug!("input ended before `done`");
                break;
            };
            let line = line.trim();
            if line.eq_ignore_ascii_case("done") {
                break;
            }
            match parse_edge_line(line, vertex_count) {
                Ok(edge) => {
                    graph.add_edge(edge.source(), edge.destination(), edge.weight());
                    self.say(&format!(
                        "Added edge: {} -- {} with weight {}",
                        edge.source(),
                        edge.destination(),
                        edge.weight()
                    ))?;
                }
                Err(err) => {
                    debug!(line, reason = ?err, "edge line rejected");
                    self.say(&err.to_string())?;
                }
            }
        }
        Ok(graph)
    }

    fn hold_open(&mut self) -> Result<(), SessionError> {
        self.say("")?;
        self.say("Type 'exit' to close the program")?;
        while let Some(line) = self.read_line()? {
            if line.trim().eq_ignore_ascii_case("exit") {
                break;
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(io_error("read input"))?;
        Ok((read > 0).then_some(line))
    }

    fn prompt(&mut self, text: &str) -> Result<(), SessionError> {
        write!(self.output, "{text}").map_err(io_error("write a prompt"))?;
        self.output.flush().map_err(io_error("flush output"))
    }

    fn say(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{text}").map_err(io_error("write output"))
    }
}

/// Parses `source destination weight` for a graph of `vertex_count`
/// vertices.
///
/// Checks run in order: token count, integer syntax, endpoint range, weight
/// sign. The first failing check decides the error.
///
/// # Errors
/// Returns the [`EdgeLineError`] describing the first failed check.
///
/// # Examples
/// ```
/// use kruskal_cli::cli::{EdgeLineError, parse_edge_line};
/// use kruskal_core::Edge;
///
/// assert_eq!(parse_edge_line("0 2 5", 3), Ok(Edge::new(0, 2, 5)));
/// assert_eq!(
///     parse_edge_line("0 3 5", 3),
///     Err(EdgeLineError::VertexOutOfRange { vertex: 3, max_vertex: 2 })
/// );
/// ```
pub fn parse_edge_line(line: &str, vertex_count: usize) -> Result<Edge, EdgeLineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [source, destination, weight] = tokens.as_slice() else {
        return Err(EdgeLineError::WrongTokenCount {
            found: tokens.len(),
        });
    };
    let [source, destination, weight] = [*source, *destination, *weight].map(|token| {
        token
            .parse::<i64>()
            .map_err(|_| EdgeLineError::InvalidNumber {
                token: token.to_owned(),
            })
    });
    let (source, destination, weight) = (source?, destination?, weight?);

    let max_vertex = vertex_count.saturating_sub(1);
    let to_vertex = |vertex: i64| {
        usize::try_from(vertex)
            .ok()
            .filter(|index| *index < vertex_count)
            .ok_or(EdgeLineError::VertexOutOfRange { vertex, max_vertex })
    };
    let (source, destination) = (to_vertex(source)?, to_vertex(destination)?);
    let weight = u64::try_from(weight).map_err(|_| EdgeLineError::NegativeWeight { weight })?;

    Ok(Edge::new(source, destination, weight))
}
