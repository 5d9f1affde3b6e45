//! Union-find (disjoint sets) over node labels.
//!
//! Path compression plus union by rank keep both operations near-constant
//! amortized. Kruskal's algorithm uses this to reject cycle-forming edges.

use std::collections::HashMap;

use crate::types::Label;

/// Disjoint-set structure over labels.
///
/// The element set is fixed at construction. `find` and `union` panic when
/// handed an element that was never registered, the same way an
/// index-based variant would fault on an out-of-range index.
#[derive(Debug, Clone)]
pub struct UnionFind<N: Label> {
    parent: HashMap<N, N>,
    rank: HashMap<N, u32>,
    sets: usize,
}

impl<N: Label> UnionFind<N> {
    /// Create one singleton set per distinct element.
    pub fn new<I: IntoIterator<Item = N>>(elements: I) -> Self {
        let mut parent = HashMap::new();
        let mut rank = HashMap::new();
        for element in elements {
            rank.entry(element.clone()).or_insert(0);
            parent.entry(element.clone()).or_insert(element);
        }
        let sets = parent.len();
        Self { parent, rank, sets }
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether no elements are registered.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets remaining.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// The representative of the set holding `x`.
    ///
    /// Compresses the path on the way: every element walked over is
    /// re-parented directly onto the discovered root, so repeated finds
    /// keep getting cheaper.
    pub fn find(&mut self, x: &N) -> N {
        // First pass: walk up to the root.
        let mut root = x.clone();
        while self.parent[&root] != root {
            root = self.parent[&root].clone();
        }

        // Second pass: re-parent the walked path onto the root.
        let mut node = x.clone();
        while self.parent[&node] != root {
            let next = self.parent[&node].clone();
            self.parent.insert(node, root.clone());
            node = next;
        }

        root
    }

    /// Merge the sets holding `x` and `y`.
    ///
    /// Returns `false` and changes nothing when they already share a root;
    /// for Kruskal that answer means "this edge would close a cycle".
    /// Otherwise the lower-rank root is linked under the higher one; on a
    /// rank tie `y`'s root goes under `x`'s, whose rank increments.
    pub fn union(&mut self, x: &N, y: &N) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        let rank_x = self.rank[&root_x];
        let rank_y = self.rank[&root_y];

        if rank_x < rank_y {
            self.parent.insert(root_x, root_y);
        } else if rank_x > rank_y {
            self.parent.insert(root_y, root_x);
        } else {
            self.parent.insert(root_y, root_x.clone());
            if let Some(rank) = self.rank.get_mut(&root_x) {
                *rank += 1;
            }
        }

        self.sets -= 1;
        true
    }

    /// Whether `x` and `y` are currently in the same set.
    pub fn connected(&mut self, x: &N, y: &N) -> bool {
        self.find(x) == self.find(y)
    }
}
