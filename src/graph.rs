use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex index in the underlying graph.
pub type Vertex = u16;

/// A simple undirected graph stored as adjacency lists.
///
/// Neighbor lists keep edge-insertion order, which fixes the order in which guard
/// moves are generated (and therefore tie-breaking in the solver).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<Vertex>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    VertexOutOfRange { vertex: Vertex, len: usize },
    SelfLoop { vertex: Vertex },
    /// `v` lists `u` as a neighbor but not the other way round.
    Asymmetric { u: Vertex, v: Vertex },
    TooManyVertices { len: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexOutOfRange { vertex, len } => {
                write!(f, "vertex {vertex} out of range for a graph of {len} vertices")
            }
            GraphError::SelfLoop { vertex } => write!(f, "self-loop on vertex {vertex}"),
            GraphError::Asymmetric { u, v } => {
                write!(f, "edge {v}->{u} has no matching edge {u}->{v}")
            }
            GraphError::TooManyVertices { len } => {
                write!(f, "{len} vertices do not fit in a vertex index")
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl Graph {
    /// A graph with `n` vertices and no edges.
    pub fn empty(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
        }
    }

    /// Build from an edge list. Parallel edges are collapsed.
    pub fn from_edges(n: usize, edges: &[(Vertex, Vertex)]) -> Result<Self, GraphError> {
        if n > Vertex::MAX as usize {
            return Err(GraphError::TooManyVertices { len: n });
        }
        let mut g = Self::empty(n);
        for &(u, v) in edges {
            for w in [u, v] {
                if w as usize >= n {
                    return Err(GraphError::VertexOutOfRange { vertex: w, len: n });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop { vertex: u });
            }
            g.add_edge(u, v);
        }
        Ok(g)
    }

    /// Build from adjacency lists, checking range, loops and symmetry.
    pub fn from_adjacency(adj: Vec<Vec<Vertex>>) -> Result<Self, GraphError> {
        let n = adj.len();
        if n > Vertex::MAX as usize {
            return Err(GraphError::TooManyVertices { len: n });
        }
        for (v, nbors) in adj.iter().enumerate() {
            let v = v as Vertex;
            for &u in nbors {
                if u as usize >= n {
                    return Err(GraphError::VertexOutOfRange { vertex: u, len: n });
                }
                if u == v {
                    return Err(GraphError::SelfLoop { vertex: v });
                }
                if !adj[u as usize].contains(&v) {
                    return Err(GraphError::Asymmetric { u, v });
                }
            }
        }
        Ok(Self { adj })
    }

    fn add_edge(&mut self, u: Vertex, v: Vertex) {
        if self.has_edge(u, v) {
            return;
        }
        self.adj[u as usize].push(v);
        self.adj[v as usize].push(u);
    }

    /// Path `0 - 1 - ... - (n-1)`.
    pub fn path(n: usize) -> Self {
        let mut g = Self::empty(n);
        for i in 1..n {
            g.add_edge((i - 1) as Vertex, i as Vertex);
        }
        g
    }

    /// Path closed into a cycle. For `n < 3` this is just the path.
    pub fn cycle(n: usize) -> Self {
        let mut g = Self::path(n);
        if n >= 3 {
            g.add_edge(0, (n - 1) as Vertex);
        }
        g
    }

    /// `rows x cols` grid; vertex `(i, j)` has index `i * cols + j`.
    pub fn grid(rows: usize, cols: usize) -> Self {
        let mut g = Self::empty(rows * cols);
        for i in 0..rows {
            for j in 0..cols.saturating_sub(1) {
                g.add_edge((i * cols + j) as Vertex, (i * cols + j + 1) as Vertex);
            }
        }
        for i in 0..rows.saturating_sub(1) {
            for j in 0..cols {
                g.add_edge((i * cols + j) as Vertex, (i * cols + j + cols) as Vertex);
            }
        }
        g
    }

    /// Complete bipartite graph: left part `0..n`, right part `n..n+m`.
    pub fn biclique(m: usize, n: usize) -> Self {
        let mut g = Self::empty(n + m);
        for i in 0..n {
            for j in 0..m {
                g.add_edge(i as Vertex, (j + n) as Vertex);
            }
        }
        g
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    #[inline]
    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        &self.adj[v as usize]
    }

    #[inline]
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.adj
            .get(u as usize)
            .is_some_and(|nbors| nbors.contains(&v))
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        0..self.adj.len() as Vertex
    }
}

/// Serializable description of an underlying graph, as found in scenario files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphSpec {
    Path {
        n: usize,
    },
    Cycle {
        n: usize,
    },
    Grid {
        rows: usize,
        cols: usize,
    },
    Biclique {
        left: usize,
        right: usize,
    },
    Custom {
        vertices: usize,
        edges: Vec<(Vertex, Vertex)>,
    },
}

impl GraphSpec {
    /// `None` if the count overflows `usize`.
    pub fn vertex_count(&self) -> Option<usize> {
        match self {
            GraphSpec::Path { n } | GraphSpec::Cycle { n } => Some(*n),
            GraphSpec::Grid { rows, cols } => rows.checked_mul(*cols),
            GraphSpec::Biclique { left, right } => left.checked_add(*right),
            GraphSpec::Custom { vertices, .. } => Some(*vertices),
        }
    }

    pub fn build(&self) -> Result<Graph, GraphError> {
        let len = self
            .vertex_count()
            .ok_or(GraphError::TooManyVertices { len: usize::MAX })?;
        if len > Vertex::MAX as usize {
            return Err(GraphError::TooManyVertices { len });
        }
        Ok(match self {
            GraphSpec::Path { n } => Graph::path(*n),
            GraphSpec::Cycle { n } => Graph::cycle(*n),
            GraphSpec::Grid { rows, cols } => Graph::grid(*rows, *cols),
            GraphSpec::Biclique { left, right } => Graph::biclique(*right, *left),
            GraphSpec::Custom { vertices, edges } => Graph::from_edges(*vertices, edges)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_have_expected_edge_counts() {
        assert_eq!(Graph::path(6).edge_count(), 5);
        assert_eq!(Graph::cycle(6).edge_count(), 6);
        assert_eq!(Graph::cycle(2).edge_count(), 1);
        assert_eq!(Graph::grid(3, 4).edge_count(), 3 * 3 + 2 * 4);
        assert_eq!(Graph::biclique(2, 5).edge_count(), 10);
    }

    #[test]
    fn grid_indexing_is_row_major() {
        let g = Graph::grid(2, 3);
        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(0, 3));
        assert!(!g.has_edge(2, 3));
    }

    #[test]
    fn malformed_edges_are_rejected() {
        assert_eq!(
            Graph::from_edges(3, &[(0, 3)]),
            Err(GraphError::VertexOutOfRange { vertex: 3, len: 3 })
        );
        assert_eq!(
            Graph::from_edges(3, &[(1, 1)]),
            Err(GraphError::SelfLoop { vertex: 1 })
        );
        assert_eq!(
            Graph::from_adjacency(vec![vec![1], vec![]]),
            Err(GraphError::Asymmetric { u: 1, v: 0 })
        );
    }

    #[test]
    fn parallel_edges_collapse() {
        let g = Graph::from_edges(2, &[(0, 1), (1, 0)]).unwrap();
        assert_eq!(g.neighbors(0), &[1]);
        assert_eq!(g.edge_count(), 1);
    }
}
