//! A* shortest-path search over implicit graphs.
//!
//! The graph is never stored: callers describe it through a neighbor
//! function, an edge-cost function and a heuristic, either as closures
//! ([`find_path`]) or by implementing the pather traits and running a
//! reusable [`PathSearch`].
//!
//! The open set is an [`IndexedMinHeap`], a binary min-heap with an
//! identity index, so a node whose cost improves is re-prioritised in place
//! instead of being pushed a second time.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible heuristic |
//!
//! [`GridPather`] implements all three for a [`wayfind_core::GridMap`].

mod astar;
mod distance;
mod grid;
mod heap;
mod neighbors;
mod pathsearch;
mod traits;

pub use astar::find_path;
pub use distance::{chebyshev, euclidean, manhattan, octile};
pub use grid::GridPather;
pub use heap::IndexedMinHeap;
pub use neighbors::{Neighbors, push_all, push_cardinal};
pub use pathsearch::{CameFrom, Path, PathSearch, SearchLimits, SearchOutcome, SearchStats};
pub use traits::{AstarPather, FnPather, Pather, WeightedPather};
