//! Weight function: LCG-style mixing of a node identifier with a key digest.
//!
//! All arithmetic is 32-bit two's-complement with wraparound. Independent
//! implementations only agree on rankings if they reproduce this exactly.

use crate::digest::KeyDigest;
use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Multiplier.
pub const A: i32 = 1_103_515_245;

/// Increment.
pub const C: i32 = 12_345;

/// Added to negative results: 2^31 - 1.
pub const M: i32 = i32::MAX;

/// Computes the raw weight of `node` for digest `d`.
///
/// `v = A * (((A * node + C) ^ d) + C)`, then `v + M` if `v` is negative.
/// The result is non-negative except for `v == i32::MIN`, which maps to `-1`.
#[inline]
pub fn weight(node: i32, d: i32) -> i32 {
    let mixed = (A.wrapping_mul(node).wrapping_add(C) ^ d).wrapping_add(C);
    let v = A.wrapping_mul(mixed);
    if v < 0 {
        v.wrapping_add(M)
    } else {
        v
    }
}

/// Score of a node for a key. Higher scores rank first.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct Score(pub i32);

impl Score {
    /// Scores `node` against an already computed key digest.
    #[inline]
    pub fn compute(node: NodeId, digest: KeyDigest) -> Self {
        Score(weight(node.0, digest.0))
    }

    /// Scores `node` against `key`.
    pub fn for_key(node: NodeId, key: &[u8]) -> Self {
        Self::compute(node, KeyDigest::from_key(key))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_weights() {
        assert_eq!(weight(0, 0), 666_356_873);
        assert_eq!(weight(1, 0), 1_784_309_491);
        assert_eq!(weight(-1, 0), 1_695_887_904);
        assert_eq!(weight(7, -5), 1_927_328_360);
        assert_eq!(weight(i32::MAX, 123), 2_144_387_887);
    }

    #[test]
    fn test_hello_world_weights() {
        let d = KeyDigest::from_key(b"hello, world");
        let scores: Vec<i32> = (1..=5).map(|n| Score::compute(NodeId(n), d).0).collect();
        assert_eq!(
            scores,
            vec![531_104_228, 1_278_797_115, 76_960_285, 1_482_536_308, 1_785_500_287]
        );
    }

    #[test]
    fn test_min_value_wraps_to_minus_one() {
        // (C ^ d) + C == 2^31 makes the product exactly i32::MIN.
        let d = ((1i64 << 31) - i64::from(C)) as i32 ^ C;
        assert_eq!(d, 2_147_483_646);
        assert_eq!(weight(0, d), -1);
    }

    #[test]
    fn test_score_for_key_matches_compute() {
        let d = KeyDigest::from_key(b"some-key");
        assert_eq!(Score::for_key(NodeId(42), b"some-key"), Score::compute(NodeId(42), d));
    }
}
