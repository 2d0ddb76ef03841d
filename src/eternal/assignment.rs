//! Mapping an answered guard *set* back onto named guards.
//!
//! The arena works on occupied sets, but a move is made by individual guards: guard `i`
//! at `guards[i]` must end on `next[i]` with `next[i] == guards[i]` or an edge between
//! them. Among all such bijections we want one that moves the fewest guards.

use itertools::Itertools;
use lapjv::{lapjv, Matrix};

use crate::graph::{Graph, Vertex};

/// Above this many guards the permutation search gives way to weighted matching.
pub const MAX_PERMUTATION_GUARDS: usize = 8;

const STAY_COST: f64 = 0.0;
const MOVE_COST: f64 = 1.0;
const BLOCKED_COST: f64 = 1.0e9;

#[inline]
fn reachable(graph: &Graph, from: Vertex, to: Vertex) -> bool {
    from == to || graph.has_edge(from, to)
}

/// True if every guard can reach its assigned vertex in one move.
pub fn is_feasible(graph: &Graph, guards: &[Vertex], next: &[Vertex]) -> bool {
    guards.len() == next.len()
        && guards
            .iter()
            .zip(next)
            .all(|(&g, &u)| reachable(graph, g, u))
}

/// Number of guards whose position changes.
pub fn moved(guards: &[Vertex], next: &[Vertex]) -> usize {
    guards.iter().zip(next).filter(|(g, u)| g != u).count()
}

/// Assign the vertices of `answer` to the guards, minimizing the number of moved guards.
///
/// `None` if sizes differ or no feasible assignment exists.
pub fn good_permutation(
    graph: &Graph,
    guards: &[Vertex],
    answer: &[Vertex],
) -> Option<Vec<Vertex>> {
    if guards.len() != answer.len() {
        return None;
    }
    if guards.is_empty() {
        return Some(Vec::new());
    }
    if guards.len() <= MAX_PERMUTATION_GUARDS {
        best_permutation(graph, guards, answer)
    } else {
        min_cost_assignment(graph, guards, answer)
    }
}

/// Exhaustive search over the permutations of `answer`.
///
/// Ties go to the first permutation in lexicographic index order.
pub fn best_permutation(
    graph: &Graph,
    guards: &[Vertex],
    answer: &[Vertex],
) -> Option<Vec<Vertex>> {
    if guards.len() != answer.len() {
        return None;
    }
    if guards.is_empty() {
        return Some(Vec::new());
    }
    answer
        .iter()
        .copied()
        .permutations(answer.len())
        .filter(|perm| is_feasible(graph, guards, perm))
        .min_by_key(|perm| moved(guards, perm))
}

/// Minimum-cost bipartite assignment (LAPJV).
///
/// Cost is 0 to stay, 1 to step along an edge, and a blocking penalty otherwise. The
/// optimum is checked for feasibility, so a blocked pair never leaks into the result.
pub fn min_cost_assignment(
    graph: &Graph,
    guards: &[Vertex],
    answer: &[Vertex],
) -> Option<Vec<Vertex>> {
    let k = guards.len();
    if k != answer.len() {
        return None;
    }
    if k == 0 {
        return Some(Vec::new());
    }

    let mut costs: Vec<f64> = Vec::with_capacity(k * k);
    for &g in guards {
        for &u in answer {
            costs.push(if g == u {
                STAY_COST
            } else if graph.has_edge(g, u) {
                MOVE_COST
            } else {
                BLOCKED_COST
            });
        }
    }
    let matrix = Matrix::from_shape_vec((k, k), costs).ok()?;

    let (row_to_col, _) = match lapjv(&matrix) {
        Ok(solution) => solution,
        Err(e) => {
            log::warn!("assignment solver failed for {k} guards: {e:?}");
            return None;
        }
    };

    let next: Vec<Vertex> = row_to_col.iter().map(|&j| answer[j]).collect();
    is_feasible(graph, guards, &next).then_some(next)
}
