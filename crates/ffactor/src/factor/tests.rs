use proptest::prelude::*;

use super::*;
use crate::gen::{draw_gnp, planted_targets, GnpCfg, ReplayToken};
use crate::graph::Graph;

fn from_edges(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut g = Graph::new(n);
    for &(u, w) in edges {
        g.add_edge(u, w).unwrap();
    }
    g
}

/// Degrees induced on `g.n()` vertices by a chosen edge set.
fn induced_degrees(n: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut deg = vec![0; n];
    for &(u, w) in edges {
        deg[u] += 1;
        deg[w] += 1;
    }
    deg
}

fn assert_is_f_factor(g: &Graph, target: &[usize], chosen: &[(usize, usize)]) {
    assert_eq!(induced_degrees(g.n(), chosen), target);
    // Every chosen edge must exist in the original graph, with multiplicity.
    let mut available: Vec<_> = g.edges().collect();
    for &e in chosen {
        let pos = available
            .iter()
            .position(|&a| a == e)
            .unwrap_or_else(|| panic!("chosen edge {:?} not in graph", e));
        available.swap_remove(pos);
    }
}

#[test]
fn four_cycle_has_a_one_factor() {
    let g = from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    let chosen = find_f_factor(&g, &[1, 1, 1, 1]).unwrap().unwrap();
    assert_eq!(chosen.len(), 2);
    assert_is_f_factor(&g, &[1, 1, 1, 1], &chosen);
}

#[test]
fn path_of_three_has_no_one_factor() {
    // Target degree sum is odd, so no edge set can realize it.
    let g = from_edges(3, &[(0, 1), (1, 2)]);
    assert_eq!(find_f_factor(&g, &[1, 1, 1]).unwrap(), None);
}

#[test]
fn full_targets_select_every_edge() {
    let g = from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    let chosen = find_f_factor(&g, &[2, 2, 2, 2]).unwrap().unwrap();
    assert_eq!(chosen.len(), 4);
    assert_is_f_factor(&g, &[2, 2, 2, 2], &chosen);
}

#[test]
fn zero_targets_select_nothing() {
    let g = from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
    let chosen = find_f_factor(&g, &[0, 0, 0]).unwrap().unwrap();
    assert!(chosen.is_empty());
}

#[test]
fn empty_graph_with_empty_targets_is_feasible() {
    let g = Graph::new(0);
    assert_eq!(find_f_factor(&g, &[]).unwrap(), Some(Vec::new()));
}

#[test]
fn target_above_degree_is_infeasible_by_inspection() {
    let g = from_edges(3, &[(0, 1), (1, 2)]);
    assert_eq!(find_f_factor(&g, &[2, 1, 1]).unwrap(), None);
}

#[test]
fn target_length_mismatch_is_an_error() {
    let g = from_edges(2, &[(0, 1)]);
    assert_eq!(
        find_f_factor(&g, &[1]),
        Err(FactorError::TargetLength {
            expected: 2,
            found: 1
        })
    );
    assert_eq!(
        find_f_factor(&g, &[1, 1, 1]),
        Err(FactorError::TargetLength {
            expected: 2,
            found: 3
        })
    );
}

#[test]
fn triangle_two_regular_factor_is_the_triangle() {
    let g = from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
    let chosen = find_f_factor(&g, &[2, 2, 2]).unwrap().unwrap();
    assert_eq!(chosen.len(), 3);
    assert_is_f_factor(&g, &[2, 2, 2], &chosen);
}

#[test]
fn triangle_one_regular_is_infeasible() {
    let g = from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
    assert_eq!(find_f_factor(&g, &[1, 1, 1]).unwrap(), None);
}

#[test]
fn multigraph_planted_factor_is_found() {
    // Planted subgraph {(0,1), (1,4), (4,5), (4,5), (2,3), (6,7)}; its
    // degrees are the target, so the instance is feasible by construction.
    let g = from_edges(
        8,
        &[
            (0, 1),
            (0, 4),
            (0, 6),
            (1, 4),
            (1, 2),
            (2, 5),
            (2, 3),
            (3, 7),
            (4, 5),
            (4, 5),
            (4, 6),
            (5, 7),
            (6, 7),
        ],
    );
    let target = [1, 2, 1, 1, 3, 2, 1, 1];
    let chosen = find_f_factor(&g, &target).unwrap().unwrap();
    assert_is_f_factor(&g, &target, &chosen);
}

#[test]
fn parallel_edges_can_both_be_selected() {
    let g = from_edges(2, &[(0, 1), (0, 1)]);
    let chosen = find_f_factor(&g, &[2, 2]).unwrap().unwrap();
    assert_eq!(chosen, vec![(0, 1), (0, 1)]);
}

#[test]
fn planted_random_instances_are_feasible() {
    for index in 0..25 {
        let tok = ReplayToken { seed: 19, index };
        let g = draw_gnp(
            GnpCfg {
                vertices: 18,
                edge_prob: 0.3,
            },
            tok,
        );
        let target = planted_targets(&g, 0.5, ReplayToken { seed: 20, index });
        let chosen = find_f_factor(&g, &target)
            .unwrap()
            .unwrap_or_else(|| panic!("planted instance {} reported infeasible", index));
        assert_is_f_factor(&g, &target, &chosen);
    }
}

proptest! {
    /// Whenever a factor is reported, every vertex hits its target exactly
    /// and only real edges are used.
    #[test]
    fn reported_factors_hit_their_targets(
        seed in any::<u64>(),
        raw_target in prop::collection::vec(0..4usize, 12)
    ) {
        let g = draw_gnp(
            GnpCfg { vertices: 12, edge_prob: 0.35 },
            ReplayToken { seed, index: 0 },
        );
        if let Some(chosen) = find_f_factor(&g, &raw_target).unwrap() {
            assert_is_f_factor(&g, &raw_target, &chosen);
        }
    }

    /// Planted instances are always feasible.
    #[test]
    fn planted_instances_never_report_infeasible(seed in any::<u64>()) {
        let g = draw_gnp(
            GnpCfg { vertices: 14, edge_prob: 0.3 },
            ReplayToken { seed, index: 1 },
        );
        let target = planted_targets(&g, 0.4, ReplayToken { seed, index: 2 });
        let chosen = find_f_factor(&g, &target).unwrap();
        prop_assert!(chosen.is_some());
        assert_is_f_factor(&g, &target, &chosen.unwrap());
    }
}
