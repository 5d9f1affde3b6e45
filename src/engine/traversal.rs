//! Depth-first traversal over any storage representation.

use std::collections::HashSet;

use crate::graph::{Graph, Storage};

/// Visit every node of the graph exactly once, depth-first, and return the
/// visit order.
///
/// Traversal restarts from each not-yet-visited node in `nodes()` order,
/// so disconnected components are all covered. From a given node,
/// neighbors are explored in storage order: representation-defined for
/// adjacency lists, ascending position for adjacency matrices.
///
/// The walk runs on an explicit stack, so a path-shaped graph of any
/// length traverses without growing the call stack. Unvisited neighbors
/// are pushed in reverse, which makes the order match a recursive
/// first-neighbor-first descent.
pub fn dfs<S: Storage>(graph: &Graph<S>) -> Vec<S::Node> {
    let mut visited: HashSet<S::Node> = HashSet::new();
    let mut order: Vec<S::Node> = Vec::with_capacity(graph.node_count());

    for start in graph.nodes() {
        if !visited.contains(&start) {
            visit_component(graph, start, &mut visited, &mut order);
        }
    }
    order
}

/// Depth-first preorder of the component reachable from `start`.
/// Empty when `start` is not in the graph.
pub fn dfs_from<S: Storage>(graph: &Graph<S>, start: &S::Node) -> Vec<S::Node> {
    let mut order = Vec::new();
    if !graph.contains_node(start) {
        return order;
    }
    let mut visited: HashSet<S::Node> = HashSet::new();
    visit_component(graph, start.clone(), &mut visited, &mut order);
    order
}

fn visit_component<S: Storage>(
    graph: &Graph<S>,
    start: S::Node,
    visited: &mut HashSet<S::Node>,
    order: &mut Vec<S::Node>,
) {
    let mut stack: Vec<S::Node> = vec![start];

    while let Some(node) = stack.pop() {
        if !visited.insert(node.clone()) {
            continue; // reached through an earlier stack entry
        }
        order.push(node.clone());

        for (neighbor, _) in graph.neighbors(&node).into_iter().rev() {
            if !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }
}
