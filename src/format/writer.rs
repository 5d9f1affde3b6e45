//! Writes `strict graph` documents from in-memory graphs.

use std::fmt::Display;
use std::path::Path;

use crate::graph::{Graph, Storage};
use crate::types::TangleResult;

/// Writer producing the same subset the reader accepts.
///
/// Emits one `u -- v [weight=w];` line per logical edge, always with an
/// explicit weight attribute. The grammar has no node-only statement, so
/// isolated nodes do not survive a write/read round trip.
pub struct DotWriter;

impl DotWriter {
    /// Render the graph as a document.
    ///
    /// Directed instances are written one line per arc. The subset itself
    /// only expresses undirected edges, so orientation is lost when such
    /// a document is read back.
    pub fn write_to_string<S>(graph: &Graph<S>) -> String
    where
        S: Storage,
        S::Node: Display,
    {
        let mut out = String::from("strict graph {\n");
        for (weight, u, v) in graph.edges() {
            out.push_str(&format!("    {} -- {} [weight={}];\n", u, v, weight));
        }
        out.push_str("}\n");
        out
    }

    /// Render the graph into a file, replacing any existing contents.
    pub fn write_to_file<S>(graph: &Graph<S>, path: &Path) -> TangleResult<()>
    where
        S: Storage,
        S::Node: Display,
    {
        std::fs::write(path, Self::write_to_string(graph))?;
        Ok(())
    }
}
