//! Adjacency-list storage: per-node hash sets of weighted neighbor entries.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::types::{Label, Weight};

use super::Storage;

/// Adjacency lists held as a map from each node to its set of
/// `(neighbor, weight)` pairs.
///
/// The weight is part of the set element, so parallel edges with distinct
/// weights coexist as distinct members while repeating an identical edge
/// stays idempotent. Iteration order over nodes and neighbors is
/// representation-defined.
#[derive(Debug, Clone)]
pub struct AdjacencyList<N: Label> {
    adjacency: HashMap<N, HashSet<(N, Weight)>>,
}

impl<N: Label> AdjacencyList<N> {
    /// Create empty storage.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }
}

impl<N: Label> Default for AdjacencyList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Label> Storage for AdjacencyList<N> {
    type Node = N;

    fn insert_node(&mut self, label: N) -> bool {
        match self.adjacency.entry(label) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(HashSet::new());
                true
            }
        }
    }

    fn remove_node(&mut self, label: &N) {
        if self.adjacency.remove(label).is_none() {
            return;
        }
        // Purge arcs pointing at the removed node from every other list.
        for neighbors in self.adjacency.values_mut() {
            neighbors.retain(|(n, _)| n != label);
        }
    }

    fn contains_node(&self, label: &N) -> bool {
        self.adjacency.contains_key(label)
    }

    fn insert_arc(&mut self, from: &N, to: &N, weight: Weight) {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.insert((to.clone(), weight));
        }
    }

    fn remove_arcs(&mut self, from: &N, to: &N) {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.retain(|(n, _)| n != to);
        }
    }

    fn neighbors(&self, label: &N) -> Vec<(N, Weight)> {
        self.adjacency
            .get(label)
            .map(|neighbors| neighbors.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn nodes(&self) -> Vec<N> {
        self.adjacency.keys().cloned().collect()
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn clear(&mut self) {
        self.adjacency.clear();
    }
}
