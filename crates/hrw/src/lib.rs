//! Highest Random Weight (rendezvous) hashing.
//!
//! Given a key and a set of candidate nodes, this crate deterministically
//! ranks the nodes from most to least suited to own the key:
//! - Key digest: 32-bit FNV-1a of the key bytes
//! - Weight function: LCG-style mixing of node id and digest in wrapping
//!   32-bit arithmetic
//! - Ranker: full ranking, top-N selection and single-owner lookup
//!
//! The digest and weight formulas are an interoperability contract: any other
//! system using the same formulas agrees on which node owns a key.
//!
//! # Example
//!
//! ```rust
//! use hrw::Node;
//!
//! let servers = vec![
//!     Node::new(1, "one.example.com"),
//!     Node::new(2, "two.example.com"),
//!     Node::new(3, "three.example.com"),
//!     Node::new(4, "four.example.com"),
//!     Node::new(5, "five.example.com"),
//!     Node::new(6, "six.example.com"),
//! ];
//!
//! let key = b"/examples/object-key";
//! let picked: Vec<String> = hrw::top_n(&servers, key, 3)?
//!     .into_iter()
//!     .map(|node| node.name)
//!     .collect();
//! assert_eq!(picked, ["one.example.com", "three.example.com", "five.example.com"]);
//! # Ok::<(), hrw::Error>(())
//! ```

pub mod digest;
pub mod error;
pub mod node;
pub mod ranker;
pub mod weight;

pub use digest::{digest, Fnv1a32, KeyDigest};
pub use error::{Error, Result};
pub use node::{Candidate, Node, NodeId};
pub use ranker::{owner, rank_all, top_n, Ranker, RankerBuilder, TieBreak};
pub use weight::{weight, Score};
