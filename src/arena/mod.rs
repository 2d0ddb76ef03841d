//! Generic two-role reachability arenas.
//!
//! An [`Arena`] describes a configuration space implicitly (enumeration plus a neighbor
//! function); [`ArenaGraph`] materializes it, with forward/reverse adjacency and the
//! attractor labeling.

pub mod enumerate;
pub mod graph;

pub use graph::{ArenaGraph, NodeId};

use crate::conf::Role;

/// A finite configuration space for an Attacker-vs-Guards reachability game.
///
/// The Attacker wins by reaching a Guards-to-move configuration with no successors.
pub trait Arena {
    type Conf: Clone + Eq + std::fmt::Debug;

    /// Exclusive upper bound on [`Arena::encode`].
    fn size(&self) -> u64;

    /// Configurations where the Attacker moves.
    fn a_confs(&self) -> Vec<Self::Conf>;

    /// Configurations where the Guards move.
    fn b_confs(&self) -> Vec<Self::Conf>;

    fn role(&self, conf: &Self::Conf) -> Role;

    /// Successors of `conf`. Every returned configuration must belong to the enumeration.
    fn neighbors(&self, conf: &Self::Conf) -> Vec<Self::Conf>;

    /// Injective on the enumerated configurations; pure.
    fn encode(&self, conf: &Self::Conf) -> u64;
}
