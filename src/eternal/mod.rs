//! Eternal domination games.
//!
//! Guards sit on distinct vertices of an undirected graph. The Attacker repeatedly attacks
//! an unoccupied vertex, and the Guards must move a guard onto it:
//! - [`Ruleset::OneGuard`]: exactly one guard adjacent to the attack steps onto it
//! - [`Ruleset::ManyGuards`]: every guard may step to a neighbor or stay, as long as the
//!   guards end on distinct vertices and one of them covers the attack
//!
//! The Attacker wins when an attack cannot be answered.

pub mod assignment;
pub mod moves;

use serde::{Deserialize, Serialize};

use crate::arena::enumerate::subsets;
use crate::arena::{Arena, ArenaGraph};
use crate::conf::{Conf, Encoder, Role};
use crate::graph::{Graph, Vertex};
use crate::scenario::{ResourceLimits, SolveError};
use crate::solve::attractor::Rank;
use crate::solve::strategy::{attacker_response, guards_response};

use assignment::good_permutation;
use moves::{attacker_moves, many_guards_moves, one_guard_moves};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Ruleset {
    OneGuard,
    ManyGuards,
}

/// The configuration space of one eternal domination instance.
#[derive(Clone, Debug)]
pub struct EternalArena {
    graph: Graph,
    ruleset: Ruleset,
    guard_count: usize,
    encoder: Encoder,
}

impl EternalArena {
    pub fn new(graph: Graph, ruleset: Ruleset, guard_count: usize) -> Self {
        let encoder = Encoder::new(graph.len());
        Self {
            graph,
            ruleset,
            guard_count,
            encoder,
        }
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    #[inline]
    pub fn guard_count(&self) -> usize {
        self.guard_count
    }

    #[inline]
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }
}

impl Arena for EternalArena {
    type Conf = Conf;

    fn size(&self) -> u64 {
        self.encoder.size()
    }

    fn a_confs(&self) -> Vec<Conf> {
        subsets(self.graph.len(), self.guard_count)
            .into_iter()
            .map(|guards| Conf::Attack { guards })
            .collect()
    }

    fn b_confs(&self) -> Vec<Conf> {
        let n = self.graph.len();
        subsets(n, self.guard_count)
            .iter()
            .flat_map(|guards| attacker_moves(n, guards))
            .collect()
    }

    fn role(&self, conf: &Conf) -> Role {
        conf.role()
    }

    fn neighbors(&self, conf: &Conf) -> Vec<Conf> {
        match conf {
            Conf::Attack { guards } => attacker_moves(self.graph.len(), guards),
            Conf::Response { guards, target } => match self.ruleset {
                Ruleset::OneGuard => one_guard_moves(&self.graph, guards, *target),
                Ruleset::ManyGuards => many_guards_moves(&self.graph, guards, *target),
            },
        }
    }

    fn encode(&self, conf: &Conf) -> u64 {
        self.encoder.encode(conf)
    }
}

/// Counts describing a solved arena.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArenaSummary {
    pub vertices: usize,
    pub graph_edges: usize,
    pub ruleset: Ruleset,
    pub guards: usize,
    pub configurations: usize,
    pub arena_edges: usize,
    /// Pre-attack configurations from which the Attacker forces a win.
    pub attracted_attack: usize,
    /// Post-attack configurations from which the Attacker forces a win.
    pub attracted_response: usize,
    pub safe_placements: usize,
    pub max_rank: Option<Rank>,
}

/// A solved eternal domination instance.
#[derive(Clone, Debug)]
pub struct EternalDomination {
    arena: ArenaGraph<EternalArena>,
}

impl EternalDomination {
    pub fn build(graph: &Graph, ruleset: Ruleset, guard_count: usize) -> Result<Self, SolveError> {
        Self::build_with_limits(graph, ruleset, guard_count, &ResourceLimits::default())
    }

    pub fn build_with_limits(
        graph: &Graph,
        ruleset: Ruleset,
        guard_count: usize,
        limits: &ResourceLimits,
    ) -> Result<Self, SolveError> {
        limits.check(graph.len(), guard_count)?;
        let arena = EternalArena::new(graph.clone(), ruleset, guard_count);
        let solved = Self {
            arena: ArenaGraph::build_with_limits(arena, limits)?,
        };
        log::info!(
            "solved {:?} with {} guards on {} vertices: {} configurations, {} edges, {} safe",
            ruleset,
            guard_count,
            graph.len(),
            solved.arena.len(),
            solved.arena.edge_count(),
            solved.safe_placements(),
        );
        Ok(solved)
    }

    #[inline]
    pub fn arena(&self) -> &ArenaGraph<EternalArena> {
        &self.arena
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        self.arena.arena().graph()
    }

    #[inline]
    pub fn ruleset(&self) -> Ruleset {
        self.arena.arena().ruleset()
    }

    #[inline]
    pub fn guard_count(&self) -> usize {
        self.arena.arena().guard_count()
    }

    /// Canonical form of `conf`, if it is a configuration of this instance.
    fn checked(&self, conf: Conf) -> Option<Conf> {
        let fits = conf.guards().len() == self.guard_count();
        (fits && conf.is_canonical(self.graph().len())).then_some(conf)
    }

    fn attack_conf(&self, guards: &[Vertex]) -> Option<Conf> {
        self.checked(Conf::attack(guards.to_vec()))
    }

    fn response_conf(&self, guards: &[Vertex], attacked: Vertex) -> Option<Conf> {
        self.checked(Conf::response(guards.to_vec(), attacked))
    }

    /// Next guard positions after `attacked` is attacked, in the order of `guards`.
    ///
    /// `None` when no guard can answer (the Attacker has won) or the input is not a
    /// position of this instance.
    pub fn guards_answer(&self, guards: &[Vertex], attacked: Vertex) -> Option<Vec<Vertex>> {
        let conf = self.response_conf(guards, attacked)?;
        let next = guards_response(&self.arena, &conf)?;
        let assigned = good_permutation(self.graph(), guards, next.guards());
        if assigned.is_none() {
            log::warn!(
                "no guard assignment from {guards:?} onto {:?}",
                next.guards()
            );
        }
        assigned
    }

    /// The Attacker's best attack, or `None` if it cannot force a win from here.
    pub fn attacker_answer(&self, guards: &[Vertex]) -> Option<Vertex> {
        let conf = self.attack_conf(guards)?;
        self.arena.rank_of(&conf)?;
        attacker_response(&self.arena, &conf)?.target()
    }

    /// Rank of the placement before an attack; `None` if the Guards hold forever.
    pub fn rank_before_attack(&self, guards: &[Vertex]) -> Option<Rank> {
        let conf = self.attack_conf(guards)?;
        self.arena.rank_of(&conf)
    }

    /// Rank once `attacked` is attacked; `Some(1)` means no guard can answer.
    pub fn rank_after_attack(&self, guards: &[Vertex], attacked: Vertex) -> Option<Rank> {
        let conf = self.response_conf(guards, attacked)?;
        self.arena.rank_of(&conf)
    }

    /// True if the Attacker forces a win against this placement.
    pub fn is_attacker_win(&self, guards: &[Vertex]) -> bool {
        self.rank_before_attack(guards).is_some()
    }

    /// Placements from which the Guards defend forever.
    pub fn safe_placements(&self) -> usize {
        self.arena.count(Role::Attacker) - self.arena.attracted(Role::Attacker)
    }

    /// Some placement the Guards can hold forever, if any.
    pub fn safe_placement(&self) -> Option<Vec<Vertex>> {
        (0..self.arena.len())
            .find(|&id| self.arena.role(id) == Role::Attacker && self.arena.rank(id).is_none())
            .map(|id| self.arena.conf(id).guards().to_vec())
    }

    pub fn summary(&self) -> ArenaSummary {
        ArenaSummary {
            vertices: self.graph().len(),
            graph_edges: self.graph().edge_count(),
            ruleset: self.ruleset(),
            guards: self.guard_count(),
            configurations: self.arena.len(),
            arena_edges: self.arena.edge_count(),
            attracted_attack: self.arena.attracted(Role::Attacker),
            attracted_response: self.arena.attracted(Role::Guards),
            safe_placements: self.safe_placements(),
            max_rank: self.arena.max_rank(),
        }
    }
}

/// Smallest guard count for which some placement is defended forever.
///
/// Builds one arena per candidate count, starting from zero guards.
pub fn eternal_domination_number(
    graph: &Graph,
    ruleset: Ruleset,
    limits: &ResourceLimits,
) -> Result<usize, SolveError> {
    for k in 0..=graph.len() {
        let solved = EternalDomination::build_with_limits(graph, ruleset, k, limits)?;
        if solved.safe_placements() > 0 {
            log::debug!("{ruleset:?} eternal domination number is {k}");
            return Ok(k);
        }
    }
    // k = n always returns above: a full placement leaves nothing to attack.
    Ok(graph.len())
}
