//! Ranker and its builder.

use crate::digest::KeyDigest;
use crate::error::{Error, Result};
use crate::node::{Candidate, NodeId};
use crate::weight::Score;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// How nodes with equal scores are ordered.
///
/// Both policies are total and deterministic. Input position is always the
/// last resort, so duplicate entries keep their relative order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TieBreak {
    /// Ascending `NodeId`. The ranking depends only on which nodes were
    /// supplied, not on the order they were supplied in.
    #[default]
    NodeId,
    /// Input order is kept (stable sort).
    InputOrder,
}

/// Scratch entry: one per candidate, alive for a single call.
#[derive(Debug)]
struct Entry<'a, N> {
    node: &'a N,
    id: NodeId,
    score: Score,
    position: usize,
}

/// Ranks candidate nodes for keys.
///
/// A `Ranker` holds no state besides its tie-break policy, so it is `Copy`
/// and can be shared freely across threads.
///
/// # Example
///
/// ```rust
/// use hrw::{Ranker, TieBreak};
///
/// let ranker = Ranker::builder().with_tie_break(TieBreak::InputOrder).build();
/// let ranked = ranker.rank_all(&[1, 2, 3, 4, 5], b"hello, world");
/// assert_eq!(ranked, vec![5, 4, 2, 1, 3]);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ranker {
    tie_break: TieBreak,
}

impl Ranker {
    /// Ranker with the default tie-break policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> RankerBuilder {
        RankerBuilder::new()
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Returns `nodes` ordered by decreasing score for `key`.
    ///
    /// Empty input yields an empty ranking.
    pub fn rank_all<N: Candidate + Clone>(&self, nodes: &[N], key: &[u8]) -> Vec<N> {
        let mut entries = self.score_all(nodes, key);
        entries.sort_unstable_by(|a, b| self.compare(a, b));
        entries.into_iter().map(|e| e.node.clone()).collect()
    }

    /// Like [`rank_all`](Self::rank_all), paired with each node's score.
    pub fn rank_scored<N: Candidate + Clone>(&self, nodes: &[N], key: &[u8]) -> Vec<(N, Score)> {
        let mut entries = self.score_all(nodes, key);
        entries.sort_unstable_by(|a, b| self.compare(a, b));
        entries
            .into_iter()
            .map(|e| (e.node.clone(), e.score))
            .collect()
    }

    /// Returns the first `n` nodes of [`rank_all`](Self::rank_all).
    ///
    /// Only the top `n` entries are sorted; the rest are partitioned away in
    /// linear time. The comparator is a total order, so the result is the
    /// same as truncating the full ranking.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `n` exceeds `nodes.len()`.
    pub fn top_n<N: Candidate + Clone>(&self, nodes: &[N], key: &[u8], n: usize) -> Result<Vec<N>> {
        if n > nodes.len() {
            debug!(requested = n, available = nodes.len(), "top-n exceeds candidate count");
            return Err(Error::InvalidArgument {
                requested: n,
                available: nodes.len(),
            });
        }
        if n == 0 {
            return Ok(Vec::new());
        }

        let mut entries = self.score_all(nodes, key);
        if n < entries.len() {
            entries.select_nth_unstable_by(n - 1, |a, b| self.compare(a, b));
            entries.truncate(n);
        }
        entries.sort_unstable_by(|a, b| self.compare(a, b));
        Ok(entries.into_iter().map(|e| e.node.clone()).collect())
    }

    /// The top choice for `key`, or `None` when there are no nodes.
    ///
    /// Equivalent to the head of [`rank_all`](Self::rank_all) in a single
    /// pass without sorting.
    pub fn owner<N: Candidate + Clone>(&self, nodes: &[N], key: &[u8]) -> Option<N> {
        let digest = KeyDigest::from_key(key);
        nodes
            .iter()
            .enumerate()
            .map(|(position, node)| Self::entry(node, position, digest))
            .min_by(|a, b| self.compare(a, b))
            .map(|e| e.node.clone())
    }

    fn score_all<'a, N: Candidate>(&self, nodes: &'a [N], key: &[u8]) -> Vec<Entry<'a, N>> {
        let digest = KeyDigest::from_key(key);
        trace!(nodes = nodes.len(), %digest, "scoring candidates");
        nodes
            .iter()
            .enumerate()
            .map(|(position, node)| Self::entry(node, position, digest))
            .collect()
    }

    #[inline]
    fn entry<N: Candidate>(node: &N, position: usize, digest: KeyDigest) -> Entry<'_, N> {
        let id = node.node_id();
        Entry {
            node,
            id,
            score: Score::compute(id, digest),
            position,
        }
    }

    /// Higher score first, then the tie-break policy, then input position.
    #[inline]
    fn compare<N>(&self, a: &Entry<'_, N>, b: &Entry<'_, N>) -> Ordering {
        b.score
            .cmp(&a.score)
            .then_with(|| match self.tie_break {
                TieBreak::NodeId => a.id.cmp(&b.id),
                TieBreak::InputOrder => Ordering::Equal,
            })
            .then_with(|| a.position.cmp(&b.position))
    }
}

/// Builder for [`Ranker`].
///
/// # Example
///
/// ```rust
/// use hrw::{RankerBuilder, TieBreak};
///
/// let ranker = RankerBuilder::new()
///     .with_tie_break(TieBreak::InputOrder)
///     .build();
/// assert_eq!(ranker.tie_break(), TieBreak::InputOrder);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RankerBuilder {
    tie_break: TieBreak,
}

impl RankerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how equal scores are ordered. Defaults to [`TieBreak::NodeId`].
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn build(self) -> Ranker {
        Ranker {
            tie_break: self.tie_break,
        }
    }
}
