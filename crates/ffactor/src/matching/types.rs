//! Matching result type.

/// A matching: every vertex carries its partner or is unmatched.
///
/// Immutable once returned by the engine. Invariant:
/// `partner(partner(v)) == v` for every matched `v`, and no vertex is the
/// partner of two others.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matching {
    mate: Vec<Option<usize>>,
}

impl Matching {
    pub(crate) fn from_mates(mate: Vec<Option<usize>>) -> Self {
        #[cfg(debug_assertions)]
        for (v, &m) in mate.iter().enumerate() {
            if let Some(u) = m {
                debug_assert_eq!(mate[u], Some(v), "mate array is not an involution");
            }
        }
        Self { mate }
    }

    /// Number of vertices the matching was computed over.
    pub fn n(&self) -> usize {
        self.mate.len()
    }

    /// Partner of `v`, if matched.
    pub fn partner(&self, v: usize) -> Option<usize> {
        self.mate[v]
    }

    /// Whether `v` is covered by the matching.
    pub fn is_matched(&self, v: usize) -> bool {
        self.mate[v].is_some()
    }

    /// Number of matched edges.
    pub fn size(&self) -> usize {
        self.mate.iter().filter(|m| m.is_some()).count() / 2
    }

    /// Whether every vertex is covered.
    pub fn is_perfect(&self) -> bool {
        self.mate.iter().all(Option::is_some)
    }

    /// Matched edges, each once as a `(low, high)` pair in vertex order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.mate
            .iter()
            .enumerate()
            .filter_map(|(v, &m)| m.filter(|&u| v < u).map(|u| (v, u)))
            .collect()
    }
}
