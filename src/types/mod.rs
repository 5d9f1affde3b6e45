//! All data types shared across the tangle library.

pub mod error;

pub use error::{TangleError, TangleResult};

use std::fmt::Debug;
use std::hash::Hash;

/// Edge weight. The importer parses integer weights; negative values parse,
/// but shortest-path results over them are unspecified.
pub type Weight = i64;

/// Weight given to an imported edge that carries no `weight` attribute.
pub const DEFAULT_WEIGHT: Weight = 1;

/// A weighted edge as `(weight, u, v)`. Weight comes first so that sorting
/// an edge list orders it by weight.
pub type WeightedEdge<N> = (Weight, N, N);

/// Bound for node labels.
///
/// A label is the node's entire identity: there is no separate node object
/// behind it. Anything clonable, hashable and comparable qualifies, and the
/// blanket impl below makes every such type a label automatically.
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Label for T {}
