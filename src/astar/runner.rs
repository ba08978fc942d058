//! A* execution loop and path reconstruction.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::heap::OpenSet;
use super::types::{NodeArena, NodeId, PathGraph};

/// Error raised before any search work begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The start or end id does not name a node in the arena.
    #[error("node {0:?} does not exist in the node arena")]
    UnknownNode(NodeId),
}

/// Result of one search invocation.
///
/// An unreachable goal is a normal outcome, not an error: it is reported
/// as `path: None` with `cancelled: false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Ordered route from start to end, both endpoints inclusive. `None`
    /// when the frontier was exhausted (or the run was cancelled) before
    /// reaching the goal.
    pub path: Option<Vec<NodeId>>,

    /// Accumulated cost of the returned path (the goal's `g_cost`).
    /// 0 when no path was found.
    pub path_cost: u32,

    /// Number of nodes expanded: moved from the frontier to the visited
    /// set and relaxed. The goal pop itself is not counted.
    pub expanded: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

impl SearchResult {
    /// Returns `true` if a path was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

/// Executes A* searches over a caller-owned [`NodeArena`].
///
/// The runner owns the frontier (open set) and the visited set (closed
/// set) and keeps both between invocations: together they name exactly the
/// nodes whose state the previous search mutated, and the next invocation
/// reverts precisely that set before seeding. Resetting therefore costs
/// O(touched), not O(arena).
///
/// Ties between equal-`f_cost` frontier members are broken by lower
/// `h_cost`, then first-discovered order, so repeated searches over
/// identical graph state return identical paths.
///
/// A runner mutates node state in place and is not reentrant: searches
/// over a shared arena must run one at a time, and a runner should stay
/// paired with the arena it searched last.
///
/// # Examples
///
/// ```
/// use u_pathfind::astar::{AstarRunner, NodeArena, NodeId, PathGraph};
///
/// // Three nodes in a row, unit edge cost, hop-count heuristic.
/// struct Line(usize);
///
/// impl PathGraph for Line {
///     fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
///         let mut out = Vec::new();
///         if node.0 > 0 {
///             out.push(NodeId(node.0 - 1));
///         }
///         if node.0 + 1 < self.0 {
///             out.push(NodeId(node.0 + 1));
///         }
///         out
///     }
///
///     fn cost(&self, a: NodeId, b: NodeId) -> u32 {
///         a.0.abs_diff(b.0) as u32
///     }
/// }
///
/// let mut nodes = NodeArena::new();
/// let ids: Vec<NodeId> = (0..3).map(|_| nodes.add()).collect();
///
/// let mut runner = AstarRunner::new();
/// let result = runner
///     .find_path(&Line(3), &mut nodes, ids[0], ids[2])
///     .unwrap();
///
/// assert_eq!(result.path, Some(vec![ids[0], ids[1], ids[2]]));
/// assert_eq!(result.path_cost, 2);
/// ```
#[derive(Debug)]
pub struct AstarRunner {
    open: OpenSet,
    closed: HashSet<NodeId>,
}

impl AstarRunner {
    /// Creates a runner with empty working sets.
    pub fn new() -> Self {
        Self {
            open: OpenSet::new(),
            closed: HashSet::new(),
        }
    }

    /// Searches for the cheapest route from `start` to `end`.
    ///
    /// Returns `Ok` with `path: None` when the goal is unreachable.
    /// Fails with [`SearchError::UnknownNode`] before touching any node
    /// state when either endpoint is not in the arena. `start == end`
    /// yields the single-element path `[start]` with zero expansions.
    pub fn find_path<G: PathGraph>(
        &mut self,
        graph: &G,
        nodes: &mut NodeArena,
        start: NodeId,
        end: NodeId,
    ) -> Result<SearchResult, SearchError> {
        self.find_path_with_cancel(graph, nodes, start, end, None)
    }

    /// Runs [`AstarRunner::find_path`] with an optional cancellation flag.
    ///
    /// The flag is checked once per loop iteration, before the next
    /// expansion. A cancelled run returns `path: None` with
    /// `cancelled: true`; a genuine no-path result has `cancelled: false`.
    pub fn find_path_with_cancel<G: PathGraph>(
        &mut self,
        graph: &G,
        nodes: &mut NodeArena,
        start: NodeId,
        end: NodeId,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult, SearchError> {
        if !nodes.contains(start) {
            return Err(SearchError::UnknownNode(start));
        }
        if !nodes.contains(end) {
            return Err(SearchError::UnknownNode(end));
        }

        self.reset_touched(nodes);

        // Seed
        let h = graph.cost(start, end);
        let seed = nodes.node_mut(start);
        seed.g_cost = 0;
        seed.h_cost = h;
        let f = seed.f_cost();
        self.open.push(start, f, h);

        let mut expanded = 0usize;
        let mut cancelled = false;

        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let Some(current) = self.open.pop_min() else {
                break;
            };

            // Into the visited set before the goal test, so the retained
            // sets cover every node this search mutated.
            self.closed.insert(current);

            if current == end {
                return Ok(SearchResult {
                    path: Some(reconstruct_path(nodes, end)),
                    path_cost: nodes.node(end).g_cost,
                    expanded,
                    cancelled: false,
                });
            }

            expanded += 1;
            let current_g = nodes.node(current).g_cost;

            for neighbor in graph.neighbors(current) {
                if self.closed.contains(&neighbor) {
                    continue;
                }
                // Ids the capability returns but the arena does not hold
                // are out of contract; skip them.
                let Some(state) = nodes.get(neighbor) else {
                    continue;
                };
                if !state.traversable {
                    // Permanent exclusion for the rest of this search.
                    self.closed.insert(neighbor);
                    continue;
                }

                let tentative_g = current_g.saturating_add(graph.cost(current, neighbor));
                if tentative_g < state.g_cost {
                    let h = graph.cost(neighbor, end);
                    let state = nodes.node_mut(neighbor);
                    state.parent = Some(current);
                    state.g_cost = tentative_g;
                    state.h_cost = h;
                    let f = state.f_cost();
                    if self.open.contains(neighbor) {
                        self.open.decrease_key(neighbor, f, h);
                    } else {
                        self.open.push(neighbor, f, h);
                    }
                }
            }
        }

        Ok(SearchResult {
            path: None,
            path_cost: 0,
            expanded,
            cancelled,
        })
    }

    /// Reverts the nodes touched by the previous invocation and clears
    /// both working sets.
    ///
    /// Ids that are no longer present in the arena are skipped.
    fn reset_touched(&mut self, nodes: &mut NodeArena) {
        for id in self.open.members() {
            if let Some(node) = nodes.get_mut(id) {
                node.reset();
            }
        }
        for &id in &self.closed {
            if let Some(node) = nodes.get_mut(id) {
                node.reset();
            }
        }
        self.open.clear();
        self.closed.clear();
    }
}

impl Default for AstarRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Walks the parent chain from the goal until a node with no parent (the
/// start) and returns the route in start-to-end order, both inclusive.
///
/// A parent cycle would not terminate; one cannot occur while the engine
/// invariants hold, since a node is parented at most once per search and
/// visited nodes are never re-parented.
fn reconstruct_path(nodes: &NodeArena, end: NodeId) -> Vec<NodeId> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(parent) = nodes.node(current).parent {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
