//! Move generation for both roles.
//!
//! Guard lists coming in are canonical (ascending); every generated configuration is
//! canonical again before it is returned.

use rustc_hash::FxHashSet;

use crate::conf::Conf;
use crate::graph::{Graph, Vertex};

/// Every unoccupied vertex can be attacked.
pub fn attacker_moves(n: usize, guards: &[Vertex]) -> Vec<Conf> {
    (0..n as Vertex)
        .filter(|v| !guards.contains(v))
        .map(|target| Conf::Response {
            guards: guards.to_vec(),
            target,
        })
        .collect()
}

/// One guard adjacent to `target` steps onto it; the others stay.
pub fn one_guard_moves(graph: &Graph, guards: &[Vertex], target: Vertex) -> Vec<Conf> {
    guards
        .iter()
        .enumerate()
        .filter(|&(_, &g)| graph.has_edge(g, target))
        .map(|(i, _)| {
            let mut next = guards.to_vec();
            next[i] = target;
            Conf::attack(next)
        })
        .collect()
}

/// Every simultaneous move: each guard stays or steps to a neighbor.
///
/// Positions are not deduplicated or sorted here; the order is "stay" first, then each
/// neighbor in adjacency order, with the first guard varying fastest.
pub fn multi_moves(graph: &Graph, guards: &[Vertex]) -> Vec<Vec<Vertex>> {
    multi_moves_from(graph, guards, 0)
}

fn multi_moves_from(graph: &Graph, guards: &[Vertex], i: usize) -> Vec<Vec<Vertex>> {
    if i == guards.len() {
        return vec![guards.to_vec()];
    }
    let mut out: Vec<Vec<Vertex>> = Vec::new();
    for conf in multi_moves_from(graph, guards, i + 1) {
        out.push(conf.clone());
        for &nbor in graph.neighbors(conf[i]) {
            let mut moved = conf.clone();
            moved[i] = nbor;
            out.push(moved);
        }
    }
    out
}

/// Simultaneous moves that end on distinct vertices covering `target`.
///
/// Different moves reaching the same occupied set are reported once, at their first
/// occurrence.
pub fn many_guards_moves(graph: &Graph, guards: &[Vertex], target: Vertex) -> Vec<Conf> {
    let mut seen: FxHashSet<Vec<Vertex>> = FxHashSet::default();
    let mut out: Vec<Conf> = Vec::new();
    for mut next in multi_moves(graph, guards) {
        next.sort_unstable();
        if next.windows(2).any(|w| w[0] == w[1]) || !next.contains(&target) {
            continue;
        }
        if seen.insert(next.clone()) {
            out.push(Conf::Attack { guards: next });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_moves_lists_stay_before_neighbors() {
        let g = Graph::path(3);
        assert_eq!(multi_moves(&g, &[1]), vec![vec![1], vec![0], vec![2]]);
        assert_eq!(
            multi_moves(&g, &[0, 2]),
            vec![vec![0, 2], vec![1, 2], vec![0, 1], vec![1, 1]]
        );
    }

    #[test]
    fn attacker_skips_occupied_vertices() {
        let moves = attacker_moves(4, &[1, 3]);
        let targets: Vec<Option<Vertex>> = moves.iter().map(Conf::target).collect();
        assert_eq!(targets, vec![Some(0), Some(2)]);
    }

    #[test]
    fn one_guard_moves_require_adjacency() {
        let g = Graph::path(4);
        assert_eq!(
            one_guard_moves(&g, &[0, 2], 1),
            vec![Conf::attack(vec![1, 2]), Conf::attack(vec![0, 1])]
        );
        assert!(one_guard_moves(&g, &[0], 3).is_empty());
    }

    #[test]
    fn many_guards_moves_are_distinct_and_cover_target() {
        let g = Graph::cycle(4);
        let moves = many_guards_moves(&g, &[0, 2], 1);
        assert!(!moves.is_empty());
        for m in &moves {
            let guards = m.guards();
            assert!(guards.contains(&1));
            assert!(guards.windows(2).all(|w| w[0] < w[1]));
        }
        let unique: FxHashSet<&Conf> = moves.iter().collect();
        assert_eq!(unique.len(), moves.len());
    }
}
