//! Deterministic random instances for tests and benchmarks.
//!
//! Purpose
//! - Provide reproducible graph and target streams: every draw is keyed by a
//!   replay token `(seed, index)` mixed into a single `StdRng`, so a failing
//!   case can be re-run exactly from its token.
//!
//! Model
//! - `draw_gnp` samples a simple G(n, p) graph, each vertex pair present
//!   independently.
//! - `planted_targets` samples a random subgraph of a given graph and
//!   returns its degree sequence; the subgraph itself realizes those
//!   degrees, so the resulting f-factor instance is feasible by
//!   construction.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing keeps nearby (seed, index) pairs
        // uncorrelated.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let key = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(key)
    }
}

/// G(n, p) sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct GnpCfg {
    pub vertices: usize,
    /// Per-pair edge probability. Clamped to [0, 1].
    pub edge_prob: f64,
}

impl Default for GnpCfg {
    fn default() -> Self {
        Self {
            vertices: 16,
            edge_prob: 0.25,
        }
    }
}

/// Draw a simple random graph with each pair `(u, w)` present independently
/// with probability `cfg.edge_prob`.
pub fn draw_gnp(cfg: GnpCfg, tok: ReplayToken) -> Graph {
    let mut rng = tok.to_std_rng();
    let p = cfg.edge_prob.clamp(0.0, 1.0);
    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); cfg.vertices];
    for u in 0..cfg.vertices {
        for w in (u + 1)..cfg.vertices {
            if rng.gen_bool(p) {
                adj[u].push(w);
                adj[w].push(u);
            }
        }
    }
    Graph::from_adjacency(adj)
}

/// Keep each edge of `g` independently with probability `keep_prob` and
/// return the degree sequence of the kept subgraph.
///
/// The kept subgraph realizes the returned targets, so
/// `find_f_factor(g, &targets)` is feasible by construction.
pub fn planted_targets(g: &Graph, keep_prob: f64, tok: ReplayToken) -> Vec<usize> {
    let mut rng = tok.to_std_rng();
    let p = keep_prob.clamp(0.0, 1.0);
    let mut target = vec![0; g.n()];
    for (u, w) in g.edges() {
        if rng.gen_bool(p) {
            target[u] += 1;
            target[w] += 1;
        }
    }
    target
}
