//! Maximum-cardinality matching on general graphs, and the f-factor problem.
//!
//! Two layers:
//! - `matching` runs Edmonds' blossom algorithm on a plain adjacency
//!   [`graph::Graph`]: alternating BFS per unmatched root, contraction of
//!   odd cycles, iterative augmenting-path flips.
//! - `factor` answers the degree-constrained subgraph (f-factor) question by
//!   reducing it to one perfect-matching question on a derived gadget graph
//!   and decoding the result back to original edges.
//!
//! `gen` provides reproducible random instances for tests and benches.
//!
//! The input `Graph` is never mutated by the algorithms; all working state is
//! rebuilt per call, so independent runs may share one `Graph` freely.

pub mod factor;
pub mod gen;
pub mod graph;
pub mod matching;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::factor::{find_f_factor, FactorError};
    pub use crate::gen::{draw_gnp, planted_targets, GnpCfg, ReplayToken};
    pub use crate::graph::{Graph, GraphError};
    pub use crate::matching::{maximum_matching, Matching};
}
