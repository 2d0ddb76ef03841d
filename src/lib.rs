//! Attractor-based solver for eternal domination games on small graphs.
//!
//! Guards defend the vertices of a graph against an endless sequence of attacks. The
//! whole configuration space is enumerated into an arena and solved backwards, so every
//! position knows whether the Attacker forces a win and how fast.

pub mod graph;
pub mod conf;
pub mod arena;
pub mod solve;
pub mod eternal;
pub mod scenario;
pub mod round;
