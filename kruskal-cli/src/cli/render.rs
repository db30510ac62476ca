//! Plain-text rendering of a minimum spanning forest.

use std::io::{self, Write};

use kruskal_core::MinimumSpanningForest;

const RULE: &str = "-------------------------------------";
const TITLE: &str = "      The Minimum Spanning Tree      ";
const COLUMNS: &str = "[source] -- [destination] : [weight]";

/// Writes the selected edges and their total weight to `writer`.
///
/// One line per edge in selection order, framed by horizontal rules.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::render_forest;
/// # use kruskal_core::Graph;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let forest = Graph::from_edges(2, [(0, 1, 7)]).compute_mst()?;
/// let mut buffer = Vec::new();
/// render_forest(&forest, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("0 -- 1 : 7\n"));
/// assert!(text.contains("Total MST weight: 7\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_forest(forest: &MinimumSpanningForest, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{RULE}")?;
    writeln!(writer, "{TITLE}")?;
    writeln!(writer, "{COLUMNS}")?;
    for edge in forest.edges() {
        writeln!(
            writer,
            "{} -- {} : {}",
            edge.source(),
            edge.destination(),
            edge.weight()
        )?;
    }
    writeln!(writer)?;
    writeln!(writer, "Total MST weight: {}", forest.total_weight())?;
    writeln!(writer, "{RULE}")
}
