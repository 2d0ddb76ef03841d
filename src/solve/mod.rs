//! Solvers over a materialized [`crate::arena::ArenaGraph`].

pub mod attractor;
pub mod strategy;
