//! Adjacency-matrix storage: positional labels over a square weight table.

use std::collections::HashMap;

use crate::types::{Label, Weight};

use super::Storage;

/// Adjacency matrix with labels in insertion order, a label-to-position
/// map, and a square table of weights where 0 means "no arc".
///
/// Neighbor iteration walks the node's row in ascending position order, so
/// traversals over this storage are deterministic. Because 0 is the no-arc
/// sentinel, an edge inserted with weight 0 is indistinguishable from no
/// edge at all, and at most one arc exists per ordered node pair; inserting
/// again overwrites the weight.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<N: Label> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    matrix: Vec<Vec<Weight>>,
}

impl<N: Label> AdjacencyMatrix<N> {
    /// Create empty storage.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            matrix: Vec::new(),
        }
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (position, label) in self.nodes.iter().enumerate() {
            self.index.insert(label.clone(), position);
        }
    }
}

impl<N: Label> Default for AdjacencyMatrix<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Label> Storage for AdjacencyMatrix<N> {
    type Node = N;

    fn insert_node(&mut self, label: N) -> bool {
        if self.index.contains_key(&label) {
            return false;
        }
        self.index.insert(label.clone(), self.nodes.len());
        self.nodes.push(label);
        // Grow every existing row, then append the new node's row.
        for row in &mut self.matrix {
            row.push(0);
        }
        self.matrix.push(vec![0; self.nodes.len()]);
        true
    }

    fn remove_node(&mut self, label: &N) {
        let Some(position) = self.index.remove(label) else {
            return;
        };
        self.nodes.remove(position);
        self.matrix.remove(position);
        for row in &mut self.matrix {
            row.remove(position);
        }
        // Positions after the removed one all shifted down.
        self.rebuild_index();
    }

    fn contains_node(&self, label: &N) -> bool {
        self.index.contains_key(label)
    }

    fn insert_arc(&mut self, from: &N, to: &N, weight: Weight) {
        if let (Some(&i), Some(&j)) = (self.index.get(from), self.index.get(to)) {
            self.matrix[i][j] = weight;
        }
    }

    fn remove_arcs(&mut self, from: &N, to: &N) {
        if let (Some(&i), Some(&j)) = (self.index.get(from), self.index.get(to)) {
            self.matrix[i][j] = 0;
        }
    }

    fn neighbors(&self, label: &N) -> Vec<(N, Weight)> {
        let Some(&i) = self.index.get(label) else {
            return Vec::new();
        };
        let mut result = Vec::new();
        for (j, &weight) in self.matrix[i].iter().enumerate() {
            if weight != 0 {
                result.push((self.nodes[j].clone(), weight));
            }
        }
        result
    }

    fn nodes(&self) -> Vec<N> {
        self.nodes.clone()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.matrix.clear();
    }
}
