//! Edge-list graph: an ordered list of weighted edges plus a vertex set.

use std::collections::HashSet;

use crate::types::{Label, Weight, WeightedEdge};

use super::{Graph, Storage};

/// A graph held as an ordered list of `(weight, u, v)` edges and the set
/// of vertices seen so far.
///
/// Nothing is deduplicated: parallel edges all stay in the list, in
/// insertion order. This is the input and output shape of Kruskal's
/// algorithm, where edge order under equal weights decides ties.
#[derive(Debug, Clone)]
pub struct EdgeListGraph<N: Label> {
    edges: Vec<WeightedEdge<N>>,
    vertices: HashSet<N>,
}

impl<N: Label> EdgeListGraph<N> {
    /// Create an empty edge-list graph.
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            vertices: HashSet::new(),
        }
    }

    /// Build an edge-list view of an adjacency-backed graph: every logical
    /// edge once, every node registered even when isolated.
    pub fn from_graph<S: Storage<Node = N>>(graph: &Graph<S>) -> Self {
        let mut list = Self::new();
        for node in graph.nodes() {
            list.add_vertex(node);
        }
        for (weight, u, v) in graph.edges() {
            list.add_edge(u, v, weight);
        }
        list
    }

    /// Append an edge, registering both endpoints.
    ///
    /// Unlike `Graph::add_edge` this never ignores anything: unknown
    /// endpoints join the vertex set on the way through.
    pub fn add_edge(&mut self, u: N, v: N, weight: Weight) {
        self.vertices.insert(u.clone());
        self.vertices.insert(v.clone());
        self.edges.push((weight, u, v));
    }

    /// Register a vertex with no edge.
    pub fn add_vertex(&mut self, v: N) {
        self.vertices.insert(v);
    }

    /// The edges in insertion order.
    pub fn edges(&self) -> &[WeightedEdge<N>] {
        &self.edges
    }

    /// The registered vertices, in arbitrary order.
    pub fn vertices(&self) -> Vec<N> {
        self.vertices.iter().cloned().collect()
    }

    /// Whether the vertex is registered.
    pub fn contains_vertex(&self, v: &N) -> bool {
        self.vertices.contains(v)
    }

    /// Number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Sum of every edge weight.
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|&(weight, _, _)| weight).sum()
    }

    /// Whether no vertices are registered.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<N: Label> Default for EdgeListGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}
