//! Graph model tests: node and edge operations over both storages.

use tangle::graph::{
    AdjacencyList, AdjacencyMatrix, EdgeKind, EdgeListGraph, Graph, ListGraph, MatrixGraph,
    Storage,
};
use tangle::types::Weight;

// ==================== Helper ====================

/// Build a graph of the given kind, adding both endpoints before each edge.
fn build<S: Storage<Node = String>>(kind: EdgeKind, edges: &[(&str, &str, Weight)]) -> Graph<S> {
    let mut graph = Graph::new(kind);
    for &(u, v, w) in edges {
        graph.add_node(u.to_string());
        graph.add_node(v.to_string());
        graph.add_edge(&u.to_string(), &v.to_string(), w);
    }
    graph
}

/// The weights on arcs from `from` to `to`, sorted.
fn arc_weights<S: Storage<Node = String>>(graph: &Graph<S>, from: &str, to: &str) -> Vec<Weight> {
    let mut weights: Vec<Weight> = graph
        .neighbors(&from.to_string())
        .into_iter()
        .filter(|(n, _)| n == to)
        .map(|(_, w)| w)
        .collect();
    weights.sort();
    weights
}

// ==================== Node Tests ====================

fn check_add_node_idempotent<S: Storage<Node = String>>() {
    let mut graph: Graph<S> = Graph::undirected();
    assert!(graph.add_node("a".to_string()));
    assert!(!graph.add_node("a".to_string()));
    assert_eq!(graph.node_count(), 1);
    assert!(graph.contains_node(&"a".to_string()));
}

#[test]
fn test_add_node_idempotent_list() {
    check_add_node_idempotent::<AdjacencyList<String>>();
}

#[test]
fn test_add_node_idempotent_matrix() {
    check_add_node_idempotent::<AdjacencyMatrix<String>>();
}

#[test]
fn test_readd_keeps_existing_edges() {
    let mut graph: ListGraph<String> =
        build(EdgeKind::Undirected, &[("a", "b", 2)]);
    assert!(!graph.add_node("a".to_string()));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(arc_weights(&graph, "a", "b"), vec![2]);
}

#[test]
fn test_empty_graph() {
    let graph: ListGraph<String> = Graph::undirected();
    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.nodes().is_empty());
}

#[test]
fn test_clear_keeps_kind() {
    let mut graph: ListGraph<String> = build(EdgeKind::Directed, &[("a", "b", 1)]);
    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.kind(), EdgeKind::Directed);
    assert!(graph.is_directed());
}

// ==================== Edge Tests ====================

fn check_edge_requires_both_endpoints<S: Storage<Node = String>>() {
    let mut graph: Graph<S> = Graph::undirected();
    graph.add_node("a".to_string());

    // Missing endpoint: silently ignored, no node springs into existence.
    graph.add_edge(&"a".to_string(), &"ghost".to_string(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.contains_node(&"ghost".to_string()));

    graph.add_node("ghost".to_string());
    graph.add_edge(&"a".to_string(), &"ghost".to_string(), 1);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_edge_requires_both_endpoints_list() {
    check_edge_requires_both_endpoints::<AdjacencyList<String>>();
}

#[test]
fn test_edge_requires_both_endpoints_matrix() {
    check_edge_requires_both_endpoints::<AdjacencyMatrix<String>>();
}

fn check_undirected_edge_symmetric<S: Storage<Node = String>>() {
    let graph: Graph<S> = build(EdgeKind::Undirected, &[("a", "b", 7)]);
    assert_eq!(arc_weights(&graph, "a", "b"), vec![7]);
    assert_eq!(arc_weights(&graph, "b", "a"), vec![7]);
    // Mirror arcs count as one logical edge.
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_undirected_edge_symmetric_list() {
    check_undirected_edge_symmetric::<AdjacencyList<String>>();
}

#[test]
fn test_undirected_edge_symmetric_matrix() {
    check_undirected_edge_symmetric::<AdjacencyMatrix<String>>();
}

#[test]
fn test_directed_edge_one_way() {
    let graph: ListGraph<String> = build(EdgeKind::Directed, &[("a", "b", 3)]);
    assert_eq!(arc_weights(&graph, "a", "b"), vec![3]);
    assert!(arc_weights(&graph, "b", "a").is_empty());
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_parallel_weights_coexist_on_list() {
    let graph: ListGraph<String> =
        build(EdgeKind::Undirected, &[("a", "b", 2), ("a", "b", 3)]);
    assert_eq!(arc_weights(&graph, "a", "b"), vec![2, 3]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_identical_edge_idempotent_on_list() {
    let graph: ListGraph<String> =
        build(EdgeKind::Undirected, &[("a", "b", 2), ("a", "b", 2)]);
    assert_eq!(arc_weights(&graph, "a", "b"), vec![2]);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_matrix_edge_overwrites_weight() {
    let graph: MatrixGraph<String> =
        build(EdgeKind::Undirected, &[("a", "b", 2), ("a", "b", 3)]);
    // One cell per ordered pair: the second insert replaced the first.
    assert_eq!(arc_weights(&graph, "a", "b"), vec![3]);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_matrix_weight_zero_means_no_edge() {
    let graph: MatrixGraph<String> = build(EdgeKind::Undirected, &[("a", "b", 0)]);
    assert!(arc_weights(&graph, "a", "b").is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_self_loop() {
    let mut graph: ListGraph<String> = Graph::undirected();
    graph.add_node("a".to_string());
    graph.add_edge(&"a".to_string(), &"a".to_string(), 5);

    assert_eq!(arc_weights(&graph, "a", "a"), vec![5]);
    assert_eq!(graph.edge_count(), 1);

    graph.remove_edge(&"a".to_string(), &"a".to_string());
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.contains_node(&"a".to_string()));
}

#[test]
fn test_neighbors_of_absent_node_empty() {
    let graph: ListGraph<String> = Graph::undirected();
    assert!(graph.neighbors(&"ghost".to_string()).is_empty());
}

#[test]
fn test_directed_edges_listed_per_arc() {
    let graph: ListGraph<String> =
        build(EdgeKind::Directed, &[("a", "b", 1), ("b", "a", 1)]);
    // Opposite arcs are distinct edges in a directed graph.
    assert_eq!(graph.edge_count(), 2);
}

// ==================== Removal Tests ====================

fn check_remove_node_purges_edges<S: Storage<Node = String>>() {
    let mut graph: Graph<S> = build(
        EdgeKind::Undirected,
        &[("a", "b", 1), ("b", "c", 2), ("a", "c", 3)],
    );
    graph.remove_node(&"b".to_string());

    assert_eq!(graph.node_count(), 2);
    assert!(!graph.contains_node(&"b".to_string()));
    for node in graph.nodes() {
        for (neighbor, _) in graph.neighbors(&node) {
            assert_ne!(neighbor, "b");
        }
    }
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_remove_node_purges_edges_list() {
    check_remove_node_purges_edges::<AdjacencyList<String>>();
}

#[test]
fn test_remove_node_purges_edges_matrix() {
    check_remove_node_purges_edges::<AdjacencyMatrix<String>>();
}

#[test]
fn test_remove_node_purges_incoming_arcs() {
    // Directed arcs into the removed node must go too, not just its own list.
    let mut graph: ListGraph<String> =
        build(EdgeKind::Directed, &[("a", "b", 1), ("c", "b", 2)]);
    graph.remove_node(&"b".to_string());

    assert!(graph.neighbors(&"a".to_string()).is_empty());
    assert!(graph.neighbors(&"c".to_string()).is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_remove_edge_drops_every_weight() {
    let mut graph: ListGraph<String> =
        build(EdgeKind::Undirected, &[("a", "b", 2), ("a", "b", 3)]);
    graph.remove_edge(&"a".to_string(), &"b".to_string());

    assert_eq!(graph.edge_count(), 0);
    assert!(arc_weights(&graph, "a", "b").is_empty());
    assert!(arc_weights(&graph, "b", "a").is_empty());
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_remove_edge_directed_keeps_reverse_arc() {
    let mut graph: ListGraph<String> =
        build(EdgeKind::Directed, &[("a", "b", 1), ("b", "a", 1)]);
    graph.remove_edge(&"a".to_string(), &"b".to_string());

    assert!(arc_weights(&graph, "a", "b").is_empty());
    assert_eq!(arc_weights(&graph, "b", "a"), vec![1]);
}

#[test]
fn test_remove_absent_is_noop() {
    let mut graph: ListGraph<String> = build(EdgeKind::Undirected, &[("a", "b", 1)]);

    graph.remove_node(&"ghost".to_string());
    graph.remove_edge(&"a".to_string(), &"ghost".to_string());
    graph.remove_edge(&"a".to_string(), &"b".to_string());
    graph.remove_edge(&"a".to_string(), &"b".to_string());

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 0);
}

// ==================== Matrix Position Tests ====================

#[test]
fn test_matrix_neighbors_in_insertion_order() {
    let mut graph: MatrixGraph<String> = Graph::directed();
    for label in ["c", "a", "b", "hub"] {
        graph.add_node(label.to_string());
    }
    for target in ["b", "c", "a"] {
        graph.add_edge(&"hub".to_string(), &target.to_string(), 1);
    }

    let order: Vec<String> = graph
        .neighbors(&"hub".to_string())
        .into_iter()
        .map(|(n, _)| n)
        .collect();
    // Row scan order follows node insertion, not edge insertion.
    assert_eq!(order, vec!["c", "a", "b"]);
}

#[test]
fn test_matrix_remove_shifts_positions() {
    let mut graph: MatrixGraph<String> = build(
        EdgeKind::Undirected,
        &[("a", "b", 1), ("b", "c", 2), ("c", "d", 3)],
    );
    graph.remove_node(&"a".to_string());

    assert_eq!(graph.node_count(), 3);
    assert_eq!(arc_weights(&graph, "b", "c"), vec![2]);
    assert_eq!(arc_weights(&graph, "c", "d"), vec![3]);
    assert_eq!(graph.edge_count(), 2);

    // Mutation keeps working against the shifted positions.
    graph.add_edge(&"b".to_string(), &"d".to_string(), 9);
    assert_eq!(arc_weights(&graph, "b", "d"), vec![9]);
}

// ==================== Edge List Tests ====================

#[test]
fn test_edge_list_registers_endpoints() {
    let mut graph: EdgeListGraph<String> = EdgeListGraph::new();
    graph.add_edge("a".to_string(), "b".to_string(), 4);
    graph.add_edge("a".to_string(), "b".to_string(), 4);

    assert_eq!(graph.vertex_count(), 2);
    assert!(graph.contains_vertex(&"a".to_string()));
    // Parallel identical edges both stay in the list.
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.total_weight(), 8);
}

#[test]
fn test_edge_list_from_graph_keeps_isolated_nodes() {
    let mut graph: ListGraph<String> = build(EdgeKind::Undirected, &[("a", "b", 2)]);
    graph.add_node("island".to_string());

    let list = EdgeListGraph::from_graph(&graph);
    assert_eq!(list.vertex_count(), 3);
    assert!(list.contains_vertex(&"island".to_string()));
    assert_eq!(list.edge_count(), 1);
    assert_eq!(list.total_weight(), 2);
}

#[test]
fn test_edge_list_empty() {
    let graph: EdgeListGraph<String> = EdgeListGraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.total_weight(), 0);
    assert!(graph.edges().is_empty());
}
