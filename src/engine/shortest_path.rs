//! Single-source shortest paths: a dense scanning variant and a
//! binary-heap variant.
//!
//! Both return the same distance map on non-negative weights and differ
//! only in cost: the scan is O(V^2), the heap O((V + E) log V). Results
//! over negative weights are unspecified.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::{Serialize, Serializer};

use crate::graph::{Graph, Storage};
use crate::types::{Label, TangleError, TangleResult, Weight};

/// A tentative or final distance from the source node.
///
/// `Infinite` marks unreachable nodes and compares greater than every
/// finite distance. Every node of the graph appears in a result map;
/// unreachable ones map to `Infinite` rather than being left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// Reachable at this total weight.
    Finite(Weight),
    /// Not reachable from the source.
    Infinite,
}

impl Distance {
    /// Whether the distance is finite.
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// The finite value, if there is one.
    pub fn finite(&self) -> Option<Weight> {
        match self {
            Self::Finite(weight) => Some(*weight),
            Self::Infinite => None,
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(weight) => write!(f, "{}", weight),
            Self::Infinite => f.write_str("inf"),
        }
    }
}

impl Serialize for Distance {
    /// Serializes as the weight for finite distances and as null for
    /// `Infinite`, which has no JSON number.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.finite().serialize(serializer)
    }
}

/// Heap entry ordered by its score alone, smallest first, so that a
/// `BinaryHeap` of these behaves as a min-priority queue.
#[derive(Debug, Clone, Copy)]
pub struct MinScored<K, T>(pub K, pub T);

impl<K: Ord, T> PartialEq for MinScored<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Ord, T> Eq for MinScored<K, T> {}

impl<K: Ord, T> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: the max-heap then yields the smallest score first.
        other.0.cmp(&self.0)
    }
}

/// O(V^2) single-source shortest paths: each round scans every unvisited
/// node for the minimum tentative distance, then relaxes its neighbors.
///
/// The scan stops early once no unvisited node has a finite distance, at
/// which point the remainder is unreachable. Errors when `source` is not
/// in the graph.
pub fn shortest_paths_dense<S: Storage>(
    graph: &Graph<S>,
    source: &S::Node,
) -> TangleResult<HashMap<S::Node, Distance>> {
    let mut dist = init_distances(graph, source)?;
    let mut visited: HashSet<S::Node> = HashSet::new();
    let total = graph.node_count();

    while visited.len() < total {
        // Linear scan for the closest unvisited node.
        let mut closest: Option<(S::Node, Weight)> = None;
        for (node, d) in &dist {
            if visited.contains(node) {
                continue;
            }
            if let Distance::Finite(d) = *d {
                let better = match &closest {
                    None => true,
                    Some((_, best)) => d < *best,
                };
                if better {
                    closest = Some((node.clone(), d));
                }
            }
        }
        let Some((node, node_dist)) = closest else {
            break; // every remaining node is unreachable
        };
        visited.insert(node.clone());

        for (neighbor, weight) in graph.neighbors(&node) {
            if !visited.contains(&neighbor) {
                relax(&mut dist, neighbor, node_dist + weight);
            }
        }
    }

    Ok(dist)
}

/// Heap-driven single-source shortest paths with lazy deletion: a node
/// improved while already queued is pushed again, and the stale entry is
/// discarded when it surfaces.
///
/// Same results and same error contract as [`shortest_paths_dense`].
pub fn shortest_paths_heap<S: Storage>(
    graph: &Graph<S>,
    source: &S::Node,
) -> TangleResult<HashMap<S::Node, Distance>> {
    let mut dist = init_distances(graph, source)?;
    let mut visited: HashSet<S::Node> = HashSet::new();
    let mut queue: BinaryHeap<MinScored<Weight, S::Node>> = BinaryHeap::new();
    queue.push(MinScored(0, source.clone()));

    while let Some(MinScored(node_dist, node)) = queue.pop() {
        if !visited.insert(node.clone()) {
            continue; // stale entry, node already finalized
        }
        for (neighbor, weight) in graph.neighbors(&node) {
            if visited.contains(&neighbor) {
                continue;
            }
            let candidate = node_dist + weight;
            if relax(&mut dist, neighbor.clone(), candidate) {
                queue.push(MinScored(candidate, neighbor));
            }
        }
    }

    Ok(dist)
}

/// Every node at `Infinite` except the source at 0. Errors when the
/// source is absent.
fn init_distances<S: Storage>(
    graph: &Graph<S>,
    source: &S::Node,
) -> TangleResult<HashMap<S::Node, Distance>> {
    if !graph.contains_node(source) {
        return Err(TangleError::NodeNotFound(format!("{:?}", source)));
    }
    let mut dist: HashMap<S::Node, Distance> = graph
        .nodes()
        .into_iter()
        .map(|node| (node, Distance::Infinite))
        .collect();
    dist.insert(source.clone(), Distance::Finite(0));
    Ok(dist)
}

/// Record `candidate` for `node` when it improves on the map entry.
/// Returns whether an update happened.
fn relax<N: Label>(dist: &mut HashMap<N, Distance>, node: N, candidate: Weight) -> bool {
    let improved = match dist.get(&node) {
        Some(current) => Distance::Finite(candidate) < *current,
        None => false,
    };
    if improved {
        dist.insert(node, Distance::Finite(candidate));
    }
    improved
}
