use crate::graph::Vertex;

/// Largest vertex count whose configurations still pack into a `u64` key.
pub const MAX_VERTICES: usize = 57;

/// Which side moves from a configuration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    /// Pre-attack: the Attacker picks a vertex.
    Attacker,
    /// Post-attack: the Guards must answer.
    Guards,
}

/// A game configuration.
///
/// `guards` is always canonical: ascending and pairwise distinct. Guard identity is
/// irrelevant to the game value, only the occupied set matters.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Conf {
    /// A-configuration: guards placed, Attacker to move.
    Attack { guards: Vec<Vertex> },
    /// B-configuration: `target` attacked, Guards to move.
    Response { guards: Vec<Vertex>, target: Vertex },
}

impl Conf {
    /// Canonical A-configuration from guards given in any order.
    pub fn attack(mut guards: Vec<Vertex>) -> Self {
        guards.sort_unstable();
        Conf::Attack { guards }
    }

    /// Canonical B-configuration from guards given in any order.
    pub fn response(mut guards: Vec<Vertex>, target: Vertex) -> Self {
        guards.sort_unstable();
        Conf::Response { guards, target }
    }

    #[inline]
    pub fn role(&self) -> Role {
        match self {
            Conf::Attack { .. } => Role::Attacker,
            Conf::Response { .. } => Role::Guards,
        }
    }

    #[inline]
    pub fn guards(&self) -> &[Vertex] {
        match self {
            Conf::Attack { guards } | Conf::Response { guards, .. } => guards,
        }
    }

    #[inline]
    pub fn target(&self) -> Option<Vertex> {
        match self {
            Conf::Attack { .. } => None,
            Conf::Response { target, .. } => Some(*target),
        }
    }

    /// True if the guard list is ascending, distinct and within `0..n`.
    pub fn is_canonical(&self, n: usize) -> bool {
        let guards = self.guards();
        guards.windows(2).all(|w| w[0] < w[1])
            && guards.iter().all(|&g| (g as usize) < n)
            && self.target().map_or(true, |t| (t as usize) < n)
    }
}

/// Packs a configuration into a `u64` key.
///
/// Encoding:
/// - bit `g` is set for every guard position `g` (positions are distinct, so the sum of
///   `2^g` is injective on the guard set)
/// - a response adds `(target + 1) << n`, so the low `n` bits never collide with the
///   attack slot and A-keys (attack slot zero) never collide with B-keys.
#[derive(Clone, Debug)]
pub struct Encoder {
    vertices: usize,
}

impl Encoder {
    /// `vertices` must not exceed [`MAX_VERTICES`].
    pub fn new(vertices: usize) -> Self {
        debug_assert!(vertices <= MAX_VERTICES);
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Exclusive upper bound on every key this encoder produces.
    #[inline]
    pub fn size(&self) -> u64 {
        ((self.vertices as u64) + 1) << self.vertices
    }

    pub fn encode(&self, conf: &Conf) -> u64 {
        let mut acc: u64 = 0;
        for &g in conf.guards() {
            acc |= 1u64 << g;
        }
        if let Some(target) = conf.target() {
            acc += (target as u64 + 1) << self.vertices;
        }
        acc
    }
}
