//! Rendezvous ranking.
//!
//! Every node is scored independently against the key digest and the nodes
//! are ordered by descending score. Because scores never depend on the other
//! candidates, adding or removing a node only moves the keys whose top choice
//! was that node.
//!
//! The free functions use the default [`TieBreak::NodeId`] policy; build a
//! [`Ranker`] to choose another.

pub mod ranker;

pub use ranker::{Ranker, RankerBuilder, TieBreak};

use crate::error::Result;
use crate::node::Candidate;

/// Returns `nodes` ordered from most to least suited to own `key`.
pub fn rank_all<N: Candidate + Clone>(nodes: &[N], key: &[u8]) -> Vec<N> {
    Ranker::default().rank_all(nodes, key)
}

/// Returns the `n` nodes most suited to own `key`, best first.
///
/// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument) when
/// `n > nodes.len()`.
pub fn top_n<N: Candidate + Clone>(nodes: &[N], key: &[u8], n: usize) -> Result<Vec<N>> {
    Ranker::default().top_n(nodes, key, n)
}

/// Returns the node most suited to own `key`.
pub fn owner<N: Candidate + Clone>(nodes: &[N], key: &[u8]) -> Option<N> {
    Ranker::default().owner(nodes, key)
}
