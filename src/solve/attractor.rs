use crate::arena::NodeId;
use crate::conf::Role;

use std::collections::VecDeque;

/// Half-moves until the Attacker wins under optimal play from both sides.
pub type Rank = u32;

/// Attacker attractor with ranks.
///
/// Targets are Guards-to-move nodes with no successors (rank 1). From there the labeling
/// propagates backwards:
/// - an Attacker node is attracted by its first attracted successor (rank + 1)
/// - a Guards node is attracted once *all* its successors are, with the rank of the last
///   one + 1 (FIFO order makes that the maximum)
///
/// Runs in O(V + E). Unlabeled nodes are safe for the Guards forever.
pub fn compute_attractor(
    roles: &[Role],
    adj: &[Vec<NodeId>],
    reverse_adj: &[Vec<NodeId>],
) -> Vec<Option<Rank>> {
    let n = roles.len();
    debug_assert_eq!(adj.len(), n);
    debug_assert_eq!(reverse_adj.len(), n);

    let mut rank: Vec<Option<Rank>> = vec![None; n];

    // For guards nodes: number of successors that are not attracted yet.
    let mut remaining: Vec<usize> = vec![0; n];
    let mut q: VecDeque<NodeId> = VecDeque::new();

    for id in 0..n {
        if roles[id] != Role::Guards {
            continue;
        }
        remaining[id] = adj[id].len();
        if remaining[id] == 0 {
            rank[id] = Some(1);
            q.push_back(id);
        }
    }

    while let Some(v) = q.pop_front() {
        let Some(r) = rank[v] else {
            continue;
        };
        for &p in &reverse_adj[v] {
            if rank[p].is_some() {
                continue;
            }
            match roles[p] {
                Role::Attacker => {
                    // One attracted attack is enough.
                    rank[p] = Some(r + 1);
                    q.push_back(p);
                }
                Role::Guards => {
                    // Every answer must be attracted.
                    remaining[p] = remaining[p].saturating_sub(1);
                    if remaining[p] == 0 {
                        rank[p] = Some(r + 1);
                        q.push_back(p);
                    }
                }
            }
        }
    }

    rank
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reverse(adj: &[Vec<NodeId>]) -> Vec<Vec<NodeId>> {
        let mut rev = vec![Vec::new(); adj.len()];
        for (u, succ) in adj.iter().enumerate() {
            for &v in succ {
                rev[v].push(u);
            }
        }
        rev
    }

    #[test]
    fn chain_ranks_count_half_moves() {
        // 0 (A) -> 1 (B) -> 2 (A) -> 3 (B, no answer)
        let roles = [Role::Attacker, Role::Guards, Role::Attacker, Role::Guards];
        let adj = vec![vec![1], vec![2], vec![3], vec![]];
        let ranks = compute_attractor(&roles, &adj, &reverse(&adj));
        assert_eq!(ranks, vec![Some(4), Some(3), Some(2), Some(1)]);
    }

    #[test]
    fn guards_escape_with_one_safe_answer() {
        // 1 (B) can answer to 0 (A, attacked) or 2 (A, stuck without attacks).
        let roles = [Role::Attacker, Role::Guards, Role::Attacker, Role::Guards];
        let adj = vec![vec![3], vec![0, 2], vec![], vec![]];
        let ranks = compute_attractor(&roles, &adj, &reverse(&adj));
        assert_eq!(ranks, vec![Some(2), None, None, Some(1)]);
    }

    #[test]
    fn duplicate_edges_are_counted_consistently() {
        let roles = [Role::Guards, Role::Attacker, Role::Guards];
        let adj = vec![vec![1, 1], vec![2], vec![]];
        let ranks = compute_attractor(&roles, &adj, &reverse(&adj));
        assert_eq!(ranks, vec![Some(3), Some(2), Some(1)]);
    }
}
