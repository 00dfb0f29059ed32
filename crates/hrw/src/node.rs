//! Node abstractions for rendezvous ranking.
//!
//! Nodes are identified by a `NodeId`, the 32-bit signed value that seeds the
//! weight function. Anything that can name its `NodeId` can be ranked through
//! the [`Candidate`] trait, so callers keep their own node types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compact identifier for a candidate node.
///
/// Newtype over `i32` because the weight function is defined over 32-bit
/// signed identifiers; wider identifiers would not interoperate.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct NodeId(pub i32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for NodeId {
    fn from(id: i32) -> Self {
        NodeId(id)
    }
}

/// Candidate node with a human-readable name.
///
/// Keep this struct small and cheap to clone; rankings hand back clones of
/// the candidates they were given.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Human-readable name or hostname.
    pub name: String,
}

impl Node {
    /// Construct a new node.
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Anything that can be ranked for a key.
///
/// Two candidates with the same `node_id` always receive the same score.
pub trait Candidate {
    /// Identifier fed to the weight function.
    fn node_id(&self) -> NodeId;
}

impl Candidate for NodeId {
    #[inline]
    fn node_id(&self) -> NodeId {
        *self
    }
}

impl Candidate for i32 {
    #[inline]
    fn node_id(&self) -> NodeId {
        NodeId(*self)
    }
}

impl Candidate for Node {
    #[inline]
    fn node_id(&self) -> NodeId {
        self.id
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    #[inline]
    fn node_id(&self) -> NodeId {
        (**self).node_id()
    }
}
