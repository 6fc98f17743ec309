//! Edmonds' blossom search.
//!
//! One alternating BFS per unmatched root, in increasing id order. A root
//! whose search fails stays unmatched for the rest of the run: no later
//! augmentation can cover it, so every vertex is tried at most once.
//! Total cost `O(V·(V+E))`.

use std::collections::VecDeque;

use super::types::Matching;
use crate::graph::Graph;

/// Sentinel for "no vertex" in the engine's index arrays.
const UNSET: usize = usize::MAX;

/// Compute a maximum-cardinality matching of `g`.
///
/// Deterministic up to adjacency-list order and never fails: the empty
/// matching answers an edgeless graph. `g` itself is not mutated.
pub fn maximum_matching(g: &Graph) -> Matching {
    BlossomRunner::new(g).solve()
}

/// Engine state: the matching built so far plus the alternating-forest
/// scratch, which is reset for every root search and never outlives one.
struct BlossomRunner<'a> {
    g: &'a Graph,
    /// Current partner per vertex (`UNSET` while unmatched).
    mate: Vec<usize>,
    /// Tree predecessor along the alternating path (odd-level entry edge).
    parent: Vec<usize>,
    /// Representative of the blossom currently containing each vertex.
    base: Vec<usize>,
    /// Even-level membership in the current alternating tree.
    in_tree: Vec<bool>,
    /// Scratch marking the bases absorbed by the contraction in progress.
    absorbed: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a> BlossomRunner<'a> {
    fn new(g: &'a Graph) -> Self {
        let n = g.n();
        Self {
            g,
            mate: vec![UNSET; n],
            parent: vec![UNSET; n],
            base: (0..n).collect(),
            in_tree: vec![false; n],
            absorbed: vec![false; n],
            queue: VecDeque::new(),
        }
    }

    fn solve(mut self) -> Matching {
        for root in 0..self.g.n() {
            if self.mate[root] == UNSET {
                if let Some(end) = self.find_augmenting_path(root) {
                    self.augment(end);
                }
            }
        }
        let mate = self
            .mate
            .iter()
            .map(|&m| (m != UNSET).then_some(m))
            .collect();
        Matching::from_mates(mate)
    }

    /// Alternating BFS from `root`; returns the unmatched far endpoint of an
    /// augmenting path if one exists, with `parent` describing the path.
    fn find_augmenting_path(&mut self, root: usize) -> Option<usize> {
        let g = self.g;
        for v in 0..g.n() {
            self.parent[v] = UNSET;
            self.base[v] = v;
            self.in_tree[v] = false;
        }
        self.queue.clear();
        self.queue.push_back(root);
        self.in_tree[root] = true;

        while let Some(v) = self.queue.pop_front() {
            for &u in g.neighbors(v) {
                if self.base[v] == self.base[u] || self.mate[v] == u {
                    // Same blossom, or the edge we are matched through.
                    continue;
                }
                if u == root || (self.mate[u] != UNSET && self.parent[self.mate[u]] != UNSET) {
                    // `u` is an even-level tree vertex: the edge closes an
                    // odd alternating cycle.
                    self.contract(v, u);
                } else if self.parent[u] == UNSET {
                    self.parent[u] = v;
                    if self.mate[u] == UNSET {
                        return Some(u);
                    }
                    // Extend the tree through u's partner.
                    let m = self.mate[u];
                    if !self.in_tree[m] {
                        self.in_tree[m] = true;
                        self.queue.push_back(m);
                    }
                }
            }
        }
        None
    }

    /// Contract the blossom closed by tree edge `(v, u)`: re-point every
    /// base on both tree paths down to their lowest common ancestor, and
    /// enqueue absorbed vertices that were only reachable at odd level.
    fn contract(&mut self, v: usize, u: usize) {
        let anchor = self.lca(v, u);
        self.absorbed.fill(false);
        self.mark_path(v, anchor, u);
        self.mark_path(u, anchor, v);
        for i in 0..self.g.n() {
            if self.absorbed[self.base[i]] {
                self.base[i] = anchor;
                if !self.in_tree[i] {
                    self.in_tree[i] = true;
                    self.queue.push_back(i);
                }
            }
        }
    }

    /// Lowest common ancestor of `v` and `u` in the alternating tree: walk
    /// each side rootward through `parent`/`mate`, marking visited bases,
    /// until one side meets a base the other already marked.
    fn lca(&self, v: usize, u: usize) -> usize {
        let mut seen = vec![false; self.g.n()];
        let mut a = v;
        loop {
            a = self.base[a];
            seen[a] = true;
            if self.mate[a] == UNSET {
                break; // reached the tree root
            }
            a = self.parent[self.mate[a]];
        }
        let mut b = u;
        loop {
            b = self.base[b];
            if seen[b] {
                return b;
            }
            b = self.parent[self.mate[b]];
        }
    }

    /// Mark every blossom base on the tree path from `v` down to `anchor`
    /// and rewire `parent` so the cycle can later be traversed either way
    /// around; `peer` is the vertex on the far side of the closing edge.
    fn mark_path(&mut self, mut v: usize, anchor: usize, mut peer: usize) {
        while self.base[v] != anchor {
            let m = self.mate[v];
            self.absorbed[self.base[v]] = true;
            self.absorbed[self.base[m]] = true;
            self.parent[v] = peer;
            peer = m;
            v = self.parent[m];
        }
    }

    /// Flip matched status along the alternating path ending at `end`,
    /// walking `parent` links back to the root.
    fn augment(&mut self, end: usize) {
        let mut v = end;
        while v != UNSET {
            let p = self.parent[v];
            debug_assert!(p != UNSET, "path vertex {} lost its tree parent", v);
            let next = self.mate[p];
            self.mate[v] = p;
            self.mate[p] = v;
            v = next;
        }
    }
}
