//! Undirected multigraph value type.
//!
//! Purpose
//! - Provide the minimal adjacency-list graph shared by the matching engine
//!   and the f-factor reducer: a vertex count plus symmetric neighbor lists.
//! - Keep construction strict: endpoint ids are validated and self-loops
//!   rejected before any mutation, so the algorithms can assume a
//!   well-formed symmetric adjacency throughout.
//!
//! Parallel edges are first-class: each occurrence is kept on both endpoint
//! lists, and `w` appears in `adj[u]` exactly as many times as `u` appears
//! in `adj[w]`.

use std::fmt;

/// Errors surfaced by graph construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// An endpoint id is not in `0..n`.
    VertexOutOfRange { vertex: usize, n: usize },
    /// Both endpoints name the same vertex.
    SelfLoop { vertex: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexOutOfRange { vertex, n } => {
                write!(f, "vertex {} out of range for a graph on {} vertices", vertex, n)
            }
            GraphError::SelfLoop { vertex } => {
                write!(f, "self-loop at vertex {} is not representable", vertex)
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Undirected multigraph on vertices `0..n` with symmetric adjacency lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Edgeless graph on `n` vertices.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            adj: vec![Vec::new(); n],
        }
    }

    /// Wrap already-symmetric adjacency lists (gadget construction path).
    pub(crate) fn from_adjacency(adj: Vec<Vec<usize>>) -> Self {
        #[cfg(debug_assertions)]
        {
            let n = adj.len();
            for (u, nbrs) in adj.iter().enumerate() {
                for &w in nbrs {
                    debug_assert!(w < n, "neighbor {} out of range {}", w, n);
                    debug_assert!(w != u, "self-loop at {}", u);
                    let fwd = nbrs.iter().filter(|&&x| x == w).count();
                    let back = adj[w].iter().filter(|&&x| x == u).count();
                    debug_assert_eq!(fwd, back, "asymmetric adjacency between {} and {}", u, w);
                }
            }
        }
        Self { n: adj.len(), adj }
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of undirected edges, parallel edges counted separately.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Degree of `v`, counting each parallel edge.
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Neighbor list of `v` in insertion order.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Insert the undirected edge `(u, w)` on both endpoint lists.
    ///
    /// Validates before touching anything: on error no partial edge is
    /// recorded. Self-loops are rejected outright rather than given an
    /// arbitrary meaning downstream.
    pub fn add_edge(&mut self, u: usize, w: usize) -> Result<(), GraphError> {
        if u >= self.n {
            return Err(GraphError::VertexOutOfRange { vertex: u, n: self.n });
        }
        if w >= self.n {
            return Err(GraphError::VertexOutOfRange { vertex: w, n: self.n });
        }
        if u == w {
            return Err(GraphError::SelfLoop { vertex: u });
        }
        self.adj[u].push(w);
        self.adj[w].push(u);
        Ok(())
    }

    /// Each undirected edge once as a `(low, high)` pair, parallel edges
    /// repeated with multiplicity.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj.iter().enumerate().flat_map(|(u, nbrs)| {
            nbrs.iter()
                .filter(move |&&w| w > u)
                .map(move |&w| (u, w))
        })
    }
}
