//! Minimum spanning tree construction with Kruskal's algorithm.

use log::debug;

use crate::graph::EdgeListGraph;
use crate::types::Label;

use super::union_find::UnionFind;

/// Build a minimum spanning tree of the input, or a minimum spanning
/// forest when the input is disconnected.
///
/// Edges are considered in ascending weight order under a stable sort, so
/// edges of equal weight keep their input order and the result is
/// deterministic for a given input. An edge is kept exactly when
/// union-find reports its endpoints not yet connected. The input is left
/// untouched; the result carries the kept edges and only their endpoints
/// as vertices, and holds `|V| - c` edges for an input with `c` connected
/// components over `|V|` vertices.
pub fn kruskal<N: Label>(graph: &EdgeListGraph<N>) -> EdgeListGraph<N> {
    let mut edges = graph.edges().to_vec();
    edges.sort_by_key(|&(weight, _, _)| weight);

    let mut components = UnionFind::new(graph.vertices());
    let mut tree = EdgeListGraph::new();

    for (weight, u, v) in edges {
        if components.union(&u, &v) {
            tree.add_edge(u, v, weight);
        }
    }

    debug!(
        "kruskal kept {} of {} edges over {} vertices",
        tree.edge_count(),
        graph.edge_count(),
        graph.vertex_count()
    );
    tree
}
