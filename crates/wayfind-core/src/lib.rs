//! **wayfind-core** — geometry and tile-map types shared by the *wayfind*
//! crates.
//!
//! This crate provides the integer [`Point`] / [`Range`] primitives used as
//! search nodes on grids, and [`GridMap`], a small text-defined map used by
//! the grid pathers and the demo binary.

pub mod geom;
pub mod map;

pub use geom::{Point, Range, RangeIter};
pub use map::{GridMap, MapError, Tile};
