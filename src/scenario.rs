//! Scenario layer: what to solve and within which budgets.
//!
//! A [`Scenario`] bundles:
//! - the underlying graph description ([`GraphSpec`])
//! - the guard ruleset ([`Ruleset`]) and guard count
//! - explicit budgets via [`ResourceLimits`]
//!
//! Scenarios are plain serde data so they can be read from JSON files by the binaries.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::conf::MAX_VERTICES;
use crate::eternal::{EternalDomination, Ruleset};
use crate::graph::{Graph, GraphError, GraphSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
/// Construction budgets.
///
/// The arena is exponential in the guard count, so callers bound it explicitly:
/// - `max_vertices`: vertices of the underlying graph (never above [`MAX_VERTICES`])
/// - `max_configurations`: A- plus B-configurations admitted to the arena
/// - `max_edges`: generated arena edges
pub struct ResourceLimits {
    pub max_vertices: usize,
    pub max_configurations: usize,
    pub max_edges: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_vertices: MAX_VERTICES,
            max_configurations: 4_000_000,
            max_edges: 50_000_000,
        }
    }
}

#[derive(Debug)]
/// Structured errors returned by arena construction.
///
/// Missing moves are not errors: queries return `Option` for those.
pub enum SolveError {
    /// The scenario is internally inconsistent (e.g. more guards than vertices).
    InvalidScenario { reason: String },
    /// The underlying graph failed validation.
    InvalidGraph(GraphError),
    /// A configured resource limit was exceeded.
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
    },
    /// Two enumerated configurations share a key.
    DuplicateConfiguration { stage: &'static str, key: u64 },
    /// A generated neighbor is outside the enumerated configurations.
    UnknownConfiguration { stage: &'static str, key: u64 },
    /// I/O failure while reading a scenario file.
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidScenario { reason } => write!(f, "invalid scenario: {reason}"),
            SolveError::InvalidGraph(e) => write!(f, "invalid graph: {e}"),
            SolveError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
            } => write!(
                f,
                "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed})"
            ),
            SolveError::DuplicateConfiguration { stage, key } => {
                write!(f, "duplicate configuration key {key:#x} at {stage}")
            }
            SolveError::UnknownConfiguration { stage, key } => write!(
                f,
                "configuration key {key:#x} at {stage} is outside the enumerated arena"
            ),
            SolveError::Io { stage, path, error } => {
                write!(f, "io error at {stage} for {path}: {error}")
            }
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::InvalidGraph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for SolveError {
    fn from(e: GraphError) -> Self {
        SolveError::InvalidGraph(e)
    }
}

impl ResourceLimits {
    /// Reject `(n, k)` before anything is allocated.
    pub fn check(&self, vertices: usize, guards: usize) -> Result<(), SolveError> {
        let max_vertices = self.max_vertices.min(MAX_VERTICES);
        if vertices > max_vertices {
            return Err(SolveError::LimitExceeded {
                stage: "arena_precheck",
                metric: "vertices",
                limit: max_vertices as u64,
                observed: vertices as u64,
            });
        }
        if guards > vertices {
            return Err(SolveError::InvalidScenario {
                reason: format!("{guards} guards do not fit on {vertices} vertices"),
            });
        }
        let observed = configuration_count(vertices, guards);
        if observed > self.max_configurations as u128 {
            return Err(SolveError::LimitExceeded {
                stage: "arena_precheck",
                metric: "configurations",
                limit: self.max_configurations as u64,
                observed: observed.min(u64::MAX as u128) as u64,
            });
        }
        Ok(())
    }
}

/// `C(n, k)` A-configurations plus `C(n, k) * (n - k)` B-configurations.
pub fn configuration_count(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let mut c: u128 = 1;
    for i in 0..k {
        c = c.saturating_mul((n - i) as u128) / (i as u128 + 1);
    }
    c.saturating_mul((n - k) as u128 + 1)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
/// An eternal domination instance to solve.
pub struct Scenario {
    pub name: String,
    pub graph: GraphSpec,
    pub ruleset: Ruleset,
    pub guards: usize,
    #[serde(default)]
    pub limits: ResourceLimits,
}

impl Scenario {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, SolveError> {
        serde_json::from_slice(bytes).map_err(|e| SolveError::InvalidScenario {
            reason: format!("malformed scenario json: {e}"),
        })
    }

    pub fn load(path: &Path) -> Result<Self, SolveError> {
        let bytes = std::fs::read(path).map_err(|e| SolveError::Io {
            stage: "scenario_load",
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_json_slice(&bytes)
    }

    /// Build the underlying graph and check it against the limits.
    pub fn validate(&self) -> Result<Graph, SolveError> {
        let graph = self.graph.build()?;
        self.limits.check(graph.len(), self.guards)?;
        Ok(graph)
    }

    pub fn solve(&self) -> Result<EternalDomination, SolveError> {
        let graph = self.validate()?;
        log::debug!("solving scenario {}", self.name);
        EternalDomination::build_with_limits(&graph, self.ruleset, self.guards, &self.limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_count_matches_binomials() {
        assert_eq!(configuration_count(3, 1), 3 + 3 * 2);
        assert_eq!(configuration_count(6, 2), 15 + 15 * 4);
        assert_eq!(configuration_count(4, 4), 1);
        assert_eq!(configuration_count(2, 3), 0);
    }

    #[test]
    fn precheck_rejects_oversized_inputs() {
        let limits = ResourceLimits {
            max_configurations: 10,
            ..ResourceLimits::default()
        };
        assert!(limits.check(3, 1).is_ok());
        assert!(matches!(
            limits.check(6, 2),
            Err(SolveError::LimitExceeded {
                metric: "configurations",
                ..
            })
        ));
        assert!(matches!(
            limits.check(2, 3),
            Err(SolveError::InvalidScenario { .. })
        ));
        assert!(matches!(
            ResourceLimits::default().check(MAX_VERTICES + 1, 1),
            Err(SolveError::LimitExceeded {
                metric: "vertices",
                ..
            })
        ));
    }
}
