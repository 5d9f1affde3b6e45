//! The core graph type, generic over its storage representation.

use std::collections::HashSet;
use std::path::Path;

use crate::types::{Label, TangleResult, Weight, WeightedEdge};

/// Whether a graph treats its edges as one-way arcs or symmetric pairs.
///
/// A graph is directed or undirected for its whole lifetime; the two kinds
/// never mix within one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Every edge is a single arc from its first endpoint to its second.
    Directed,
    /// Every edge is held as two mirror arcs with the same weight.
    Undirected,
}

impl EdgeKind {
    /// Human-readable name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage strategy behind a [`Graph`].
///
/// Implementations hold directed arcs only. `Graph` maintains the
/// undirected symmetry invariant itself by inserting and removing mirror
/// arcs, so a storage never needs to know the edge kind.
pub trait Storage: Default {
    /// The node label type. The label is the node's entire identity.
    type Node: Label;

    /// Insert a node if absent. Returns `true` when the label was new.
    fn insert_node(&mut self, label: Self::Node) -> bool;

    /// Remove a node and every arc referencing it, in either role.
    /// No-op when the label is absent.
    fn remove_node(&mut self, label: &Self::Node);

    /// Whether the label is present.
    fn contains_node(&self, label: &Self::Node) -> bool;

    /// Insert one arc. Callers guarantee both endpoints exist.
    fn insert_arc(&mut self, from: &Self::Node, to: &Self::Node, weight: Weight);

    /// Remove every arc from `from` to `to`, whatever its weight.
    fn remove_arcs(&mut self, from: &Self::Node, to: &Self::Node);

    /// Outgoing neighbors of a node with their arc weights.
    /// Empty for absent labels.
    fn neighbors(&self, label: &Self::Node) -> Vec<(Self::Node, Weight)>;

    /// Every node label, in the representation's own order.
    fn nodes(&self) -> Vec<Self::Node>;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Remove all nodes and arcs.
    fn clear(&mut self);
}

/// A weighted graph over a pluggable storage representation.
///
/// All mutation runs through this type, which is what keeps the storage
/// invariants intact: nodes exist before their edges, undirected arcs come
/// in mirror pairs, and removal leaves no dangling references behind.
#[derive(Debug, Clone)]
pub struct Graph<S: Storage> {
    kind: EdgeKind,
    storage: S,
}

impl<S: Storage> Graph<S> {
    /// Create an empty graph of the given kind.
    pub fn new(kind: EdgeKind) -> Self {
        Self {
            kind,
            storage: S::default(),
        }
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(EdgeKind::Directed)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(EdgeKind::Undirected)
    }

    /// The edge kind fixed at construction.
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Whether edges are one-way arcs.
    pub fn is_directed(&self) -> bool {
        self.kind == EdgeKind::Directed
    }

    /// Add a node. Idempotent: a label already present is left untouched
    /// and `false` comes back; a new label gets an empty adjacency entry.
    pub fn add_node(&mut self, label: S::Node) -> bool {
        self.storage.insert_node(label)
    }

    /// Remove a node together with every edge incident to it, incoming
    /// arcs included. No-op when the label is absent.
    pub fn remove_node(&mut self, label: &S::Node) {
        self.storage.remove_node(label);
    }

    /// Add an edge between two existing nodes.
    ///
    /// Silently ignored unless both endpoints are already present; adding
    /// an edge never creates nodes. Undirected instances insert the mirror
    /// arc with the same weight.
    pub fn add_edge(&mut self, a: &S::Node, b: &S::Node, weight: Weight) {
        if !self.storage.contains_node(a) || !self.storage.contains_node(b) {
            return;
        }
        self.storage.insert_arc(a, b, weight);
        if self.kind == EdgeKind::Undirected {
            self.storage.insert_arc(b, a, weight);
        }
    }

    /// Remove every edge between two endpoints regardless of weight, in
    /// both directions on undirected instances. No-op when either endpoint
    /// is absent.
    pub fn remove_edge(&mut self, a: &S::Node, b: &S::Node) {
        if !self.storage.contains_node(a) || !self.storage.contains_node(b) {
            return;
        }
        self.storage.remove_arcs(a, b);
        if self.kind == EdgeKind::Undirected && a != b {
            self.storage.remove_arcs(b, a);
        }
    }

    /// Whether the label is present.
    pub fn contains_node(&self, label: &S::Node) -> bool {
        self.storage.contains_node(label)
    }

    /// Outgoing neighbors of a node with their weights. Asking about an
    /// absent label yields an empty list, not an error.
    pub fn neighbors(&self, label: &S::Node) -> Vec<(S::Node, Weight)> {
        self.storage.neighbors(label)
    }

    /// Every node label, in storage order.
    pub fn nodes(&self) -> Vec<S::Node> {
        self.storage.nodes()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.storage.node_count()
    }

    /// Whether the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.storage.node_count() == 0
    }

    /// Every logical edge once, as `(weight, u, v)` triples.
    ///
    /// On undirected instances each mirror pair collapses into a single
    /// entry and self-loops appear once. Directed instances list every arc.
    pub fn edges(&self) -> Vec<WeightedEdge<S::Node>> {
        let mut edges = Vec::new();
        if self.kind == EdgeKind::Directed {
            for u in self.storage.nodes() {
                for (v, w) in self.storage.neighbors(&u) {
                    edges.push((w, u.clone(), v));
                }
            }
            return edges;
        }

        let mut taken: HashSet<(S::Node, S::Node, Weight)> = HashSet::new();
        for u in self.storage.nodes() {
            for (v, w) in self.storage.neighbors(&u) {
                if taken.contains(&(v.clone(), u.clone(), w)) {
                    continue; // mirror of an arc already listed
                }
                taken.insert((u.clone(), v.clone(), w));
                edges.push((w, u.clone(), v));
            }
        }
        edges
    }

    /// Number of logical edges.
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Remove every node and edge. The kind stays as constructed.
    pub fn clear(&mut self) {
        self.storage.clear();
    }
}

impl<S: Storage> Default for Graph<S> {
    /// An empty undirected graph.
    fn default() -> Self {
        Self::undirected()
    }
}

impl<S: Storage<Node = String>> Graph<S> {
    /// Import a `strict graph` document, replacing this graph's contents.
    ///
    /// Storage is cleared before a single line is parsed, so a failed
    /// import leaves the graph empty rather than restoring what it held.
    /// Callers that need the old contents on failure keep their own copy.
    pub fn import_from_str(&mut self, text: &str) -> TangleResult<()> {
        self.storage.clear();
        crate::format::reader::populate(self, text)
    }

    /// Import from a file. Same contract as `import_from_str`, including
    /// the up-front clear.
    pub fn import_from_file(&mut self, path: &Path) -> TangleResult<()> {
        self.storage.clear();
        let text = std::fs::read_to_string(path)?;
        crate::format::reader::populate(self, &text)
    }
}
