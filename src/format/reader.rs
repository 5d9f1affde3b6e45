//! Parses `strict graph` documents into in-memory graphs.
//!
//! The accepted grammar is a small DOT-like subset:
//!
//! ```text
//! strict graph {
//!     A -- B [weight=2];
//!     B -- C;
//! }
//! ```
//!
//! Blank lines are ignored everywhere. The opening brace may end the
//! header line or stand alone on the next one; every body line is one
//! undirected edge statement; the final line is `}`. An attribute block
//! may carry `weight=<integer>` among other `key=value` pairs, which are
//! read and discarded; an edge without a block gets weight 1. Any
//! violation aborts the import with an error naming the offending line.

use std::path::Path;

use log::debug;

use crate::graph::{Graph, Storage};
use crate::types::{TangleError, TangleResult, Weight, DEFAULT_WEIGHT};

/// One parsed edge statement.
struct Statement {
    left: String,
    right: String,
    weight: Weight,
}

/// Reader for `strict graph` documents.
pub struct DotReader;

impl DotReader {
    /// Parse a file into a fresh undirected graph over the chosen storage.
    pub fn read_from_file<S>(path: &Path) -> TangleResult<Graph<S>>
    where
        S: Storage<Node = String>,
    {
        let text = std::fs::read_to_string(path)?;
        Self::read_from_str(&text)
    }

    /// Parse a document into a fresh undirected graph over the chosen
    /// storage.
    pub fn read_from_str<S>(text: &str) -> TangleResult<Graph<S>>
    where
        S: Storage<Node = String>,
    {
        let mut graph = Graph::undirected();
        populate(&mut graph, text)?;
        Ok(graph)
    }
}

/// Parse `text` and apply its statements to `graph` through the ordinary
/// node and edge operations, so imported data obeys the same invariants
/// as built-up data. `DotReader` calls this on fresh graphs and
/// `Graph::import_from_*` on cleared ones.
pub(crate) fn populate<S>(graph: &mut Graph<S>, text: &str) -> TangleResult<()>
where
    S: Storage<Node = String>,
{
    for statement in parse_document(text)? {
        graph.add_node(statement.left.clone());
        graph.add_node(statement.right.clone());
        graph.add_edge(&statement.left, &statement.right, statement.weight);
    }
    debug!(
        "imported {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}

/// Validate the document frame and parse every edge statement.
fn parse_document(text: &str) -> TangleResult<Vec<Statement>> {
    // Non-blank lines, each tagged with its 1-based document position.
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let Some(&(_, header)) = lines.first() else {
        return Err(TangleError::MissingHeader);
    };
    if !header.starts_with("strict graph") {
        return Err(TangleError::MissingHeader);
    }

    let body_start = if header.ends_with('{') {
        1
    } else if lines.len() > 1 && lines[1].1 == "{" {
        2
    } else {
        return Err(TangleError::MissingBrace);
    };

    let body = &lines[body_start..];
    let Some(&(_, last)) = body.last() else {
        return Err(TangleError::MissingClosingBrace);
    };
    if last != "}" {
        return Err(TangleError::MissingClosingBrace);
    }

    let mut statements = Vec::with_capacity(body.len() - 1);
    for &(lineno, line) in &body[..body.len() - 1] {
        statements.push(parse_statement(lineno, line)?);
    }
    Ok(statements)
}

/// Parse one `left -- right [attributes];` line.
fn parse_statement(lineno: usize, line: &str) -> TangleResult<Statement> {
    let Some((left, rest)) = line.split_once("--") else {
        return Err(TangleError::ExpectedEdge(lineno));
    };
    let left = left.trim().to_string();
    let rest = rest.trim().trim_end_matches(';');

    let Some(bracket) = rest.find('[') else {
        return Ok(Statement {
            left,
            right: rest.trim().to_string(),
            weight: DEFAULT_WEIGHT,
        });
    };
    // A second '[' makes the block ambiguous.
    if rest[bracket + 1..].contains('[') {
        return Err(TangleError::BadAttribute(lineno));
    }

    let right = rest[..bracket].trim().to_string();
    let attributes = rest[bracket + 1..].trim_matches(|c| c == ' ' || c == ']');

    let mut weight = DEFAULT_WEIGHT;
    for item in attributes.split(',') {
        let pair: Vec<&str> = item.split('=').collect();
        if pair.len() != 2 {
            return Err(TangleError::BadAttribute(lineno));
        }
        if pair[0].trim() == "weight" {
            weight = pair[1]
                .trim()
                .parse()
                .map_err(|_| TangleError::BadWeight(lineno))?;
        }
        // Other keys are legal and ignored.
    }

    Ok(Statement {
        left,
        right,
        weight,
    })
}
