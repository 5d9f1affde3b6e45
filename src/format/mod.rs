//! Text I/O for the `strict graph` subset.

pub mod reader;
pub mod writer;

pub use reader::DotReader;
pub use writer::DotWriter;
