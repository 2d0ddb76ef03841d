//! Best-response extraction.
//!
//! The attractor computation only labels configurations. For play you want a concrete
//! successor; the helpers here read it off the ranks of the successors.
//!
//! An unlabeled successor counts as rank `+inf`. Ties go to the first successor in
//! adjacency order.

use std::cmp::Reverse;

use crate::arena::{Arena, ArenaGraph, NodeId};
use crate::solve::attractor::Rank;

#[inline]
fn weight(rank: Option<Rank>) -> Rank {
    rank.unwrap_or(Rank::MAX)
}

/// Guards' answer: the successor that avoids the attractor, or delays it the longest.
pub fn guards_response_id<A: Arena>(arena: &ArenaGraph<A>, id: NodeId) -> Option<NodeId> {
    arena
        .successors(id)
        .iter()
        .copied()
        .min_by_key(|&s| Reverse(weight(arena.rank(s))))
}

/// Attacker's answer: the successor closest to a win.
pub fn attacker_response_id<A: Arena>(arena: &ArenaGraph<A>, id: NodeId) -> Option<NodeId> {
    arena
        .successors(id)
        .iter()
        .copied()
        .min_by_key(|&s| weight(arena.rank(s)))
}

pub fn guards_response<'a, A: Arena>(
    arena: &'a ArenaGraph<A>,
    conf: &A::Conf,
) -> Option<&'a A::Conf> {
    let id = arena.node_id(conf)?;
    guards_response_id(arena, id).map(|s| arena.conf(s))
}

pub fn attacker_response<'a, A: Arena>(
    arena: &'a ArenaGraph<A>,
    conf: &A::Conf,
) -> Option<&'a A::Conf> {
    let id = arena.node_id(conf)?;
    attacker_response_id(arena, id).map(|s| arena.conf(s))
}
