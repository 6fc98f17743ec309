//! Gadget construction for the f-factor reduction.
//!
//! Layout of gadget ids: `0..slot_count` are edge slots, one per adjacency
//! occurrence of the original graph in owner-major order; everything above
//! is a slack vertex. The slot side table is built once here and consulted
//! during decoding, never recomputed.

use std::collections::HashMap;

use crate::graph::Graph;

/// Derived matching instance plus the bookkeeping needed to decode it.
pub(super) struct Gadget {
    graph: Graph,
    /// Gadget slot id -> original `(owner, other)` endpoints.
    slot_edge: Vec<(usize, usize)>,
}

impl Gadget {
    /// Build the gadget for `g` under `target`. The caller has already
    /// verified `target[v] <= degree(v)` for every `v`.
    pub fn build(g: &Graph, target: &[usize]) -> Gadget {
        let n = g.n();
        debug_assert_eq!(target.len(), n);

        // One slot per adjacency occurrence; remember each vertex's slots
        // so slack vertices can reach all of them.
        let mut slots_of: Vec<Vec<usize>> = Vec::with_capacity(n);
        let mut slot_edge: Vec<(usize, usize)> = Vec::new();
        for u in 0..n {
            let slots = g
                .neighbors(u)
                .iter()
                .map(|&w| {
                    slot_edge.push((u, w));
                    slot_edge.len() - 1
                })
                .collect();
            slots_of.push(slots);
        }

        let slot_count = slot_edge.len();
        let slack_total: usize = (0..n).map(|v| g.degree(v) - target[v]).sum();
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); slot_count + slack_total];

        // Wire sibling slots: each occurrence of `(a, b)` on a's side pairs
        // with exactly one occurrence of `(b, a)` on b's side, so parallel
        // edges each get their own private slot pair.
        let mut waiting: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
        for (s, &(a, b)) in slot_edge.iter().enumerate() {
            if let Some(t) = waiting.get_mut(&(b, a)).and_then(Vec::pop) {
                adj[s].push(t);
                adj[t].push(s);
            } else {
                waiting.entry((a, b)).or_default().push(s);
            }
        }
        debug_assert!(
            waiting.values().all(Vec::is_empty),
            "unpaired slot: input adjacency was not symmetric"
        );

        // Slack vertices: `degree(v) - target(v)` per vertex, each adjacent
        // to every slot of `v`. A perfect matching must send exactly that
        // many of v's slots to slacks, leaving target(v) selected edges.
        let mut next = slot_count;
        for v in 0..n {
            for _ in target[v]..g.degree(v) {
                for &s in &slots_of[v] {
                    adj[next].push(s);
                    adj[s].push(next);
                }
                next += 1;
            }
        }

        Gadget {
            graph: Graph::from_adjacency(adj),
            slot_edge,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Number of edge-slot vertices; ids at and above this are slacks.
    pub fn slot_count(&self) -> usize {
        self.slot_edge.len()
    }

    /// Original `(owner, other)` endpoints of slot `s`.
    pub fn slot_edge(&self, s: usize) -> (usize, usize) {
        self.slot_edge[s]
    }
}
