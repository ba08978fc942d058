//! Domain-agnostic shortest-path search over caller-defined graphs.
//!
//! Provides a generic implementation of the A* search algorithm:
//!
//! - **Node model**: per-node search state (traversability, accumulated
//!   cost, heuristic estimate, parent back-reference) stored in a
//!   caller-owned [`astar::NodeArena`] and reused across searches.
//! - **Graph capability**: the caller implements [`astar::PathGraph`] —
//!   neighbor enumeration and pairwise cost evaluation — so the engine
//!   stays agnostic to the node representation (grid cell, graph vertex,
//!   navmesh region, ...).
//! - **Search engine**: [`astar::AstarRunner`] owns the frontier and
//!   visited sets for one search at a time, runs the expansion loop, and
//!   reconstructs the route from parent back-references.
//!
//! Searches are synchronous and single-threaded. Node state is shared
//! mutable data owned by the caller, so a runner is not reentrant:
//! searches over a shared arena must run one at a time.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. It
//! contains no domain-specific concepts — grids, navmeshes, road networks,
//! etc. are all defined by consumers at higher layers.

pub mod astar;
