//! tangle — in-memory weighted graphs with pluggable storage and classic
//! algorithms.
//!
//! Graphs are built by insertion or imported from a restricted `strict graph`
//! text subset, over either adjacency-list or adjacency-matrix storage, then
//! queried through the engines: depth-first traversal, two single-source
//! shortest-path variants, Kruskal minimum spanning trees, and Kahn
//! topological ordering with cycle detection.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    dfs, dfs_from, is_dag, kruskal, shortest_paths_dense, shortest_paths_heap, toposort, Distance,
    MinScored, UnionFind,
};
pub use format::{DotReader, DotWriter};
pub use graph::{
    AdjacencyList, AdjacencyMatrix, EdgeKind, EdgeListGraph, Graph, ListGraph, MatrixGraph,
    Storage,
};
pub use types::{Label, TangleError, TangleResult, Weight, WeightedEdge, DEFAULT_WEIGHT};
