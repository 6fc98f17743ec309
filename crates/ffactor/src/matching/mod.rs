//! Maximum-cardinality matching on general graphs.
//!
//! Purpose
//! - Implement Edmonds' blossom algorithm: one alternating BFS per unmatched
//!   root, with odd alternating cycles contracted into super-vertices so the
//!   search stays correct on non-bipartite graphs.
//!
//! Why this design
//! - Blossom membership is an index-based `base` pointer per vertex,
//!   re-pointed at the contraction ancestor; no separate union-find arena is
//!   needed because all forest state is rebuilt per root search anyway.
//! - Augmenting paths are flipped with an explicit `parent` walk, never
//!   recursion, so deep trees on large graphs are safe.
//!
//! Code cross-refs: `graph::Graph` (input, never mutated),
//! `factor` (runs this engine on its gadget graph).

mod blossom;
mod types;

pub use blossom::maximum_matching;
pub use types::Matching;
