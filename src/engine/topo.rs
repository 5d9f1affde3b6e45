//! DAG checking and topological ordering with Kahn's algorithm.

use std::collections::{HashMap, VecDeque};

use crate::graph::{Graph, Storage};

/// Whether the graph admits a topological order.
///
/// Runs one Kahn pass: nodes of in-degree 0 are dequeued repeatedly while
/// their out-neighbors' counts tick down. The graph is a DAG exactly when
/// every node gets dequeued; members of a cycle never reach in-degree 0.
///
/// Meaningful on directed instances. An undirected instance stores every
/// edge as a mirror pair, which is a two-cycle, so any undirected graph
/// with at least one edge answers `false`.
pub fn is_dag<S: Storage>(graph: &Graph<S>) -> bool {
    kahn(graph).len() == graph.node_count()
}

/// A topological ordering of the graph, or `None` when no ordering
/// exists.
///
/// `None` is the cyclic graph's answer; an empty graph yields `Some` of
/// an empty ordering. A node's position never precedes a node with an arc
/// into it.
pub fn toposort<S: Storage>(graph: &Graph<S>) -> Option<Vec<S::Node>> {
    if !is_dag(graph) {
        return None;
    }
    Some(kahn(graph))
}

/// One Kahn pass: the dequeue order of nodes whose in-degree reached 0.
/// Shorter than `node_count` exactly when the graph has a cycle.
fn kahn<S: Storage>(graph: &Graph<S>) -> Vec<S::Node> {
    let mut in_degree: HashMap<S::Node, usize> =
        graph.nodes().into_iter().map(|node| (node, 0)).collect();
    for node in graph.nodes() {
        for (neighbor, _) in graph.neighbors(&node) {
            if let Some(degree) = in_degree.get_mut(&neighbor) {
                *degree += 1;
            }
        }
    }

    let mut queue: VecDeque<S::Node> = in_degree
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(node, _)| node.clone())
        .collect();
    let mut order: Vec<S::Node> = Vec::with_capacity(in_degree.len());

    while let Some(node) = queue.pop_front() {
        for (neighbor, _) in graph.neighbors(&node) {
            if let Some(degree) = in_degree.get_mut(&neighbor) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(neighbor);
                }
            }
        }
        order.push(node);
    }

    order
}
