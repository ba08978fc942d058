//! A* shortest-path search.
//!
//! Classical best-first search over a caller-defined graph: the caller
//! supplies the node store ([`NodeArena`]) and the adjacency and cost
//! metric ([`PathGraph`]); the engine ([`AstarRunner`]) supplies the
//! expansion loop and path reconstruction.
//!
//! The engine imposes no admissibility check on the supplied heuristic.
//! With a consistent lower-bound heuristic the returned path is optimal;
//! otherwise optimality is the caller's responsibility.
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"

mod heap;
mod runner;
mod types;

pub use runner::{AstarRunner, SearchError, SearchResult};
pub use types::{NodeArena, NodeId, PathGraph, PathNode, INFINITE_COST};
