//! f-factor: degree-constrained subgraphs via matching.
//!
//! Purpose
//! - Given a graph and a per-vertex target degree, find a subgraph in which
//!   every vertex has exactly its target degree, or report that none exists.
//!
//! Why this design
//! - The instance is reduced to one perfect-matching question: every
//!   adjacency occurrence becomes an "edge slot" vertex, sibling slots of an
//!   edge are wired together (matching them selects the edge), and each
//!   vertex gets `degree - target` slack vertices that soak up exactly the
//!   slots it must decline. The gadget has a perfect matching iff the
//!   instance is feasible, so the blossom engine does all the searching.
//!
//! Code cross-refs: `gadget::Gadget` (construction and slot side table),
//! `matching::maximum_matching` (the engine this reduces to).

use std::fmt;

use crate::graph::Graph;
use crate::matching::maximum_matching;

use gadget::Gadget;

mod gadget;

/// Errors surfaced by the f-factor entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FactorError {
    /// `target` must carry exactly one entry per vertex.
    TargetLength { expected: usize, found: usize },
}

impl fmt::Display for FactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactorError::TargetLength { expected, found } => write!(
                f,
                "target vector has {} entries, graph has {} vertices",
                found, expected
            ),
        }
    }
}

impl std::error::Error for FactorError {}

/// Find an f-factor of `g`: a set of edges giving every vertex `v` degree
/// exactly `target[v]`.
///
/// Returns `Ok(None)` when no such subgraph exists (a normal outcome, not an
/// error), `Ok(Some(edges))` with each chosen edge once as a `(low, high)`
/// pair (parallel edges repeated per chosen copy), or `Err` when `target`
/// does not have one entry per vertex.
///
/// Infeasibility by inspection (some `target[v]` exceeding `degree(v)`) is
/// reported before any gadget is built or the engine is invoked.
pub fn find_f_factor(
    g: &Graph,
    target: &[usize],
) -> Result<Option<Vec<(usize, usize)>>, FactorError> {
    if target.len() != g.n() {
        return Err(FactorError::TargetLength {
            expected: g.n(),
            found: target.len(),
        });
    }
    if (0..g.n()).any(|v| target[v] > g.degree(v)) {
        return Ok(None);
    }

    let gadget = Gadget::build(g, target);
    let matching = maximum_matching(gadget.graph());

    // Any uncovered gadget vertex means some slot could neither select its
    // edge nor be declined, i.e. the demanded degrees are unrealizable.
    if !matching.is_perfect() {
        return Ok(None);
    }

    let mut chosen = Vec::new();
    for slot in 0..gadget.slot_count() {
        if let Some(mate) = matching.partner(slot) {
            if mate < gadget.slot_count() && slot < mate {
                // Two slots matched to each other are the two sides of one
                // original edge: it is selected.
                let (a, b) = gadget.slot_edge(slot);
                debug_assert_eq!(gadget.slot_edge(mate), (b, a));
                chosen.push((a.min(b), a.max(b)));
            }
        }
    }
    Ok(Some(chosen))
}

#[cfg(test)]
mod tests;
