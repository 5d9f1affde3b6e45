//! In-memory graph representations — the core data structures.

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod edge_list;
pub mod model;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
pub use edge_list::EdgeListGraph;
pub use model::{EdgeKind, Graph, Storage};

/// A graph over adjacency-list storage.
pub type ListGraph<N> = Graph<AdjacencyList<N>>;

/// A graph over adjacency-matrix storage.
pub type MatrixGraph<N> = Graph<AdjacencyMatrix<N>>;
