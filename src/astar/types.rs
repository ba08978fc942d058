//! Core types for A* search: node state, the node arena, and the graph
//! capability.

/// Sentinel cost of a node not yet reached: larger than any real path cost.
///
/// All cost arithmetic in the engine saturates, so the sentinel cannot be
/// exceeded by overflow.
pub const INFINITE_COST: u32 = u32::MAX;

/// Identifier of a node inside a [`NodeArena`].
///
/// Parent back-references are stored as `NodeId` relations into the arena
/// rather than node references, which keeps search state free of aliasing
/// and serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

/// Per-node search state.
///
/// Nodes are long-lived, caller-owned values that persist across searches.
/// The engine mutates `g_cost`, `h_cost`, and `parent` in place while
/// searching, and resets exactly the nodes it touched at the start of the
/// next invocation. `traversable` is configuration, not search state: the
/// engine reads it but never writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    /// Whether the node may be entered.
    pub traversable: bool,

    /// Accumulated cost from the start along the best known path.
    pub g_cost: u32,

    /// Heuristic estimate of the remaining cost to the goal.
    pub h_cost: u32,

    /// Predecessor on the best known path, used for path reconstruction.
    pub parent: Option<NodeId>,
}

impl PathNode {
    /// Creates a traversable node with default search state.
    pub fn new() -> Self {
        Self {
            traversable: true,
            g_cost: INFINITE_COST,
            h_cost: 0,
            parent: None,
        }
    }

    /// Creates a non-traversable node.
    pub fn blocked() -> Self {
        Self {
            traversable: false,
            ..Self::new()
        }
    }

    /// Total cost `g + h` (saturating), the frontier priority.
    ///
    /// Always derived, never stored.
    pub fn f_cost(&self) -> u32 {
        self.g_cost.saturating_add(self.h_cost)
    }

    /// Reverts the search-transient fields to their defaults.
    ///
    /// Idempotent. Leaves `traversable` untouched.
    pub fn reset(&mut self) {
        self.parent = None;
        self.h_cost = 0;
        self.g_cost = INFINITE_COST;
    }
}

impl Default for PathNode {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-owned store of [`PathNode`]s.
///
/// The engine addresses nodes by [`NodeId`] and never creates or destroys
/// them: callers build the arena once, map their domain vertices to ids,
/// and reuse it across searches.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeArena {
    nodes: Vec<PathNode>,
}

impl NodeArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Adds a traversable node with default state, returning its id.
    pub fn add(&mut self) -> NodeId {
        self.add_node(PathNode::new())
    }

    /// Adds the given node, returning its id.
    pub fn add_node(&mut self, node: PathNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Returns the node with the given id, or `None` if absent.
    pub fn get(&self, id: NodeId) -> Option<&PathNode> {
        self.nodes.get(id.0)
    }

    /// Mutable variant of [`NodeArena::get`].
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut PathNode> {
        self.nodes.get_mut(id.0)
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the arena.
    pub fn node(&self, id: NodeId) -> &PathNode {
        &self.nodes[id.0]
    }

    /// Mutable variant of [`NodeArena::node`].
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the arena.
    pub fn node_mut(&mut self, id: NodeId) -> &mut PathNode {
        &mut self.nodes[id.0]
    }

    /// Returns `true` if `id` names a node in this arena.
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all nodes with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &PathNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }
}

/// The graph capability consumed by the engine.
///
/// The caller implements adjacency and cost evaluation; the engine stays
/// agnostic to what a node actually is. Both operations are expected to be
/// pure functions of their arguments.
///
/// # Examples
///
/// ```ignore
/// // A 4-connected grid stored row-major in the arena.
/// struct Grid { width: usize, height: usize }
///
/// impl PathGraph for Grid {
///     fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
///         let (x, y) = (node.0 % self.width, node.0 / self.width);
///         let mut out = Vec::new();
///         if x > 0 { out.push(NodeId(node.0 - 1)); }
///         if x + 1 < self.width { out.push(NodeId(node.0 + 1)); }
///         if y > 0 { out.push(NodeId(node.0 - self.width)); }
///         if y + 1 < self.height { out.push(NodeId(node.0 + self.width)); }
///         out
///     }
///
///     fn cost(&self, a: NodeId, b: NodeId) -> u32 {
///         let (ax, ay) = (a.0 % self.width, a.0 / self.width);
///         let (bx, by) = (b.0 % self.width, b.0 / self.width);
///         (ax.abs_diff(bx) + ay.abs_diff(by)) as u32
///     }
/// }
/// ```
pub trait PathGraph: Send + Sync {
    /// Returns the candidate adjacent nodes of `node`.
    ///
    /// May return ids the engine has not seen yet. No ordering is
    /// required, though ordering can affect which of several equally
    /// cheap paths is returned. Ids not present in the arena are ignored
    /// by the engine.
    fn neighbors(&self, node: NodeId) -> Vec<NodeId>;

    /// Cost between two nodes.
    ///
    /// Used both as the edge-traversal cost when `a` and `b` are adjacent
    /// and as the heuristic estimate when `b` is the goal. No
    /// admissibility check is imposed; a heuristic that overestimates
    /// forfeits optimality of the returned path.
    fn cost(&self, a: NodeId, b: NodeId) -> u32;
}
