use crate::arena::Arena;
use crate::conf::Role;
use crate::scenario::{ResourceLimits, SolveError};
use crate::solve::attractor::{compute_attractor, Rank};
use rustc_hash::FxHashMap;

pub type NodeId = usize;

/// A materialized arena: dense node ids, forward/reverse adjacency and attractor ranks.
///
/// Immutable once built. Any change to the inputs means building a new one.
#[derive(Clone, Debug)]
pub struct ArenaGraph<A: Arena> {
    arena: A,
    confs: Vec<A::Conf>,
    roles: Vec<Role>,
    index: FxHashMap<u64, NodeId>,
    adj: Vec<Vec<NodeId>>,
    reverse_adj: Vec<Vec<NodeId>>,
    attractor: Vec<Option<Rank>>,
    edges: usize,
}

impl<A: Arena> ArenaGraph<A> {
    pub fn build(arena: A) -> Result<Self, SolveError> {
        Self::build_with_limits(arena, &ResourceLimits::default())
    }

    /// Enumerate every configuration, fill the edges and solve the attractor.
    ///
    /// Node ids follow enumeration order: A-configurations first, then B-configurations.
    /// Successor lists keep `neighbors` call order, duplicates included.
    pub fn build_with_limits(arena: A, limits: &ResourceLimits) -> Result<Self, SolveError> {
        let a_confs = arena.a_confs();
        let b_confs = arena.b_confs();
        let total = a_confs.len() + b_confs.len();
        if total > limits.max_configurations {
            return Err(SolveError::LimitExceeded {
                stage: "arena_enumerate",
                metric: "configurations",
                limit: limits.max_configurations as u64,
                observed: total as u64,
            });
        }

        let size = arena.size();
        let mut index: FxHashMap<u64, NodeId> = FxHashMap::default();
        index.reserve(total);
        let mut confs: Vec<A::Conf> = Vec::with_capacity(total);
        let mut roles: Vec<Role> = Vec::with_capacity(total);

        for conf in a_confs.into_iter().chain(b_confs) {
            let key = arena.encode(&conf);
            if key >= size {
                return Err(SolveError::UnknownConfiguration {
                    stage: "arena_enumerate",
                    key,
                });
            }
            if index.insert(key, confs.len()).is_some() {
                return Err(SolveError::DuplicateConfiguration {
                    stage: "arena_enumerate",
                    key,
                });
            }
            roles.push(arena.role(&conf));
            confs.push(conf);
        }
        log::debug!("arena enumerated: {total} configurations");

        // Fill edges.
        let mut adj: Vec<Vec<NodeId>> = vec![Vec::new(); total];
        let mut reverse_adj: Vec<Vec<NodeId>> = vec![Vec::new(); total];
        let mut edges: usize = 0;

        for id in 0..total {
            let succs = arena.neighbors(&confs[id]);
            edges += succs.len();
            if edges > limits.max_edges {
                return Err(SolveError::LimitExceeded {
                    stage: "arena_edges",
                    metric: "edges",
                    limit: limits.max_edges as u64,
                    observed: edges as u64,
                });
            }

            let mut succ_ids: Vec<NodeId> = Vec::with_capacity(succs.len());
            for next in &succs {
                let key = arena.encode(next);
                let &next_id = index.get(&key).ok_or(SolveError::UnknownConfiguration {
                    stage: "arena_edges",
                    key,
                })?;
                succ_ids.push(next_id);
                reverse_adj[next_id].push(id);
            }
            adj[id] = succ_ids;
        }
        log::debug!("arena edges filled: {edges} edges");

        let attractor = compute_attractor(&roles, &adj, &reverse_adj);

        Ok(Self {
            arena,
            confs,
            roles,
            index,
            adj,
            reverse_adj,
            attractor,
            edges,
        })
    }

    #[inline]
    pub fn arena(&self) -> &A {
        &self.arena
    }

    /// Number of enumerated configurations.
    #[inline]
    pub fn len(&self) -> usize {
        self.confs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.confs.is_empty()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Node id of an enumerated configuration, `None` for anything else.
    pub fn node_id(&self, conf: &A::Conf) -> Option<NodeId> {
        let id = *self.index.get(&self.arena.encode(conf))?;
        (self.confs[id] == *conf).then_some(id)
    }

    #[inline]
    pub fn conf(&self, id: NodeId) -> &A::Conf {
        &self.confs[id]
    }

    #[inline]
    pub fn role(&self, id: NodeId) -> Role {
        self.roles[id]
    }

    #[inline]
    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        &self.adj[id]
    }

    #[inline]
    pub fn predecessors(&self, id: NodeId) -> &[NodeId] {
        &self.reverse_adj[id]
    }

    /// Attractor rank; `None` means the Guards hold forever.
    #[inline]
    pub fn rank(&self, id: NodeId) -> Option<Rank> {
        self.attractor[id]
    }

    pub fn rank_of(&self, conf: &A::Conf) -> Option<Rank> {
        self.node_id(conf).and_then(|id| self.rank(id))
    }

    #[inline]
    pub fn attractor(&self) -> &[Option<Rank>] {
        &self.attractor
    }

    #[inline]
    pub fn adjacency(&self) -> &[Vec<NodeId>] {
        &self.adj
    }

    #[inline]
    pub fn reverse_adjacency(&self) -> &[Vec<NodeId>] {
        &self.reverse_adj
    }

    /// Number of configurations with the given role to move.
    pub fn count(&self, role: Role) -> usize {
        self.roles.iter().filter(|&&r| r == role).count()
    }

    /// Number of attracted configurations with the given role to move.
    pub fn attracted(&self, role: Role) -> usize {
        (0..self.len())
            .filter(|&id| self.roles[id] == role && self.attractor[id].is_some())
            .count()
    }

    pub fn max_rank(&self) -> Option<Rank> {
        self.attractor.iter().flatten().copied().max()
    }
}
