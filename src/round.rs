//! One puzzle round on a fixed graph: place guards, then alternate attacks and answers.
//!
//! The round owns its solved arena. Changing the graph, the ruleset or the guard count
//! means starting a new round, which solves a fresh arena.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::eternal::assignment::is_feasible;
use crate::eternal::{EternalDomination, Ruleset};
use crate::graph::{Graph, Vertex};
use crate::scenario::{ResourceLimits, SolveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Guards are being placed.
    Preparation,
    Game,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Machine moves come from the solved arena.
    Machine,
    /// Machine moves are random legal moves.
    Random,
    /// Two humans; no arena is built.
    Duel,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Position {
    /// Named guards: index `i` is always the same guard.
    pub guards: Vec<Vertex>,
    pub attacked: Option<Vertex>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Attack(Vertex),
    /// New position of every guard, in guard order.
    Defend(Vec<Vertex>),
}

#[derive(Debug, Clone)]
pub struct Round {
    graph: Graph,
    ruleset: Ruleset,
    mode: Mode,
    limits: ResourceLimits,
    phase: Phase,
    position: Position,
    solved: Option<EternalDomination>,
}

impl Round {
    pub fn new(graph: Graph, ruleset: Ruleset, mode: Mode) -> Self {
        Self {
            graph,
            ruleset,
            mode,
            limits: ResourceLimits::default(),
            phase: Phase::Preparation,
            position: Position::default(),
            solved: None,
        }
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
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
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn solved(&self) -> Option<&EternalDomination> {
        self.solved.as_ref()
    }

    /// Add or remove a guard on `v` during preparation. Returns whether anything changed.
    pub fn toggle_guard(&mut self, v: Vertex) -> bool {
        if self.phase != Phase::Preparation || v as usize >= self.graph.len() {
            return false;
        }
        let guards = &mut self.position.guards;
        match guards.iter().position(|&g| g == v) {
            Some(i) => {
                guards.remove(i);
            }
            None => guards.push(v),
        }
        true
    }

    /// Leave preparation and solve the arena for the placed guards.
    pub fn start(&mut self) -> Result<(), SolveError> {
        if self.phase != Phase::Preparation {
            return Err(SolveError::InvalidScenario {
                reason: "round already started".to_string(),
            });
        }
        if self.mode != Mode::Duel {
            self.solved = Some(EternalDomination::build_with_limits(
                &self.graph,
                self.ruleset,
                self.position.guards.len(),
                &self.limits,
            )?);
        }
        self.phase = Phase::Game;
        Ok(())
    }

    /// An attack is pending and no guard is next to it.
    pub fn is_level_finished(&self) -> bool {
        match self.position.attacked {
            Some(attacked) => self
                .position
                .guards
                .iter()
                .all(|&g| !self.graph.has_edge(g, attacked)),
            None => false,
        }
    }

    /// Whether `dests` answers the pending attack under the round's ruleset.
    pub fn is_valid_defense(&self, dests: &[Vertex]) -> bool {
        let Some(attacked) = self.position.attacked else {
            return false;
        };
        let srcs = &self.position.guards;
        let mut sorted = dests.to_vec();
        sorted.sort_unstable();
        let distinct = sorted.windows(2).all(|w| w[0] < w[1]);
        let moved = srcs.iter().zip(dests).filter(|(s, d)| s != d).count();
        dests.contains(&attacked)
            && distinct
            && is_feasible(&self.graph, srcs, dests)
            && (self.ruleset == Ruleset::ManyGuards || moved == 1)
    }

    /// Apply a move; `None` (and no change) if it is not legal here.
    pub fn play(&mut self, mv: Move) -> Option<&Position> {
        if self.phase != Phase::Game || self.is_level_finished() {
            return None;
        }
        match mv {
            Move::Attack(v) => {
                if self.position.attacked.is_some()
                    || v as usize >= self.graph.len()
                    || self.position.guards.contains(&v)
                {
                    return None;
                }
                self.position.attacked = Some(v);
            }
            Move::Defend(dests) => {
                if !self.is_valid_defense(&dests) {
                    return None;
                }
                self.position = Position {
                    guards: dests,
                    attacked: None,
                };
            }
        }
        Some(&self.position)
    }

    /// A uniformly random legal move for the side to move.
    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        if self.phase != Phase::Game || self.is_level_finished() {
            return None;
        }
        let Position { guards, attacked } = &self.position;
        match *attacked {
            Some(attacked) => {
                let candidates: Vec<usize> = (0..guards.len())
                    .filter(|&i| self.graph.has_edge(guards[i], attacked))
                    .collect();
                let &i = candidates.choose(rng)?;
                let mut dests = guards.clone();
                dests[i] = attacked;
                Some(Move::Defend(dests))
            }
            None => {
                let candidates: Vec<Vertex> =
                    self.graph.vertices().filter(|v| !guards.contains(v)).collect();
                candidates.choose(rng).map(|&v| Move::Attack(v))
            }
        }
    }

    /// The machine's move for the side to move.
    ///
    /// Uses the arena when there is one. If the Attacker cannot force a win the position
    /// is a draw, and a random attack is played instead.
    pub fn machine_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Move> {
        if self.phase != Phase::Game || self.is_level_finished() {
            return None;
        }
        let solved = match (&self.solved, self.mode) {
            (Some(solved), Mode::Machine) => solved,
            _ => return self.random_move(rng),
        };
        let Position { guards, attacked } = &self.position;
        match *attacked {
            Some(attacked) => solved.guards_answer(guards, attacked).map(Move::Defend),
            None => match solved.attacker_answer(guards) {
                Some(v) => Some(Move::Attack(v)),
                None => self.random_move(rng),
            },
        }
    }
}
