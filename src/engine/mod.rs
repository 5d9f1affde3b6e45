//! High-level operations — the algorithm engines.

pub mod mst;
pub mod shortest_path;
pub mod topo;
pub mod traversal;
pub mod union_find;

pub use mst::kruskal;
pub use shortest_path::{shortest_paths_dense, shortest_paths_heap, Distance, MinScored};
pub use topo::{is_dag, toposort};
pub use traversal::{dfs, dfs_from};
pub use union_find::UnionFind;
