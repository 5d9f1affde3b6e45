//! Error types for the tangle library.

use thiserror::Error;

/// All errors that can occur in the tangle library.
///
/// Importer errors carry the 1-based line number of the offending line,
/// counted over the original document before blank lines are dropped.
#[derive(Error, Debug)]
pub enum TangleError {
    /// Document does not begin with the `strict graph` header.
    #[error("Missing 'strict graph' header")]
    MissingHeader,

    /// No opening brace at the end of the header line or alone on the next.
    #[error("Missing opening brace after header")]
    MissingBrace,

    /// The final non-blank line of the document is not `}`.
    #[error("Missing closing brace")]
    MissingClosingBrace,

    /// A body line with no `--` edge operator.
    #[error("Line {0}: expected an edge statement")]
    ExpectedEdge(usize),

    /// An attribute block that cannot be read as `key=value` pairs.
    #[error("Line {0}: malformed attribute block")]
    BadAttribute(usize),

    /// A `weight` attribute whose value is not an integer.
    #[error("Line {0}: weight is not an integer")]
    BadWeight(usize),

    /// An engine was given a node the graph does not contain.
    #[error("Node {0} not found")]
    NodeNotFound(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for tangle operations.
pub type TangleResult<T> = Result<T, TangleError>;
