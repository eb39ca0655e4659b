use wayfind_core::{GridMap, Point};

use crate::distance::{euclidean, manhattan, octile};
use crate::neighbors::{push_all, push_cardinal};
use crate::pathsearch::CameFrom;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Movement rules over a [`GridMap`].
///
/// Every in-bounds cell is a neighbor, walls included; stepping onto a
/// wall costs `f64::INFINITY`, so walls are never part of a path. Other
/// steps cost their Euclidean length (1 straight, √2 diagonal).
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    map: &'a GridMap,
    diagonals: bool,
}

impl<'a> GridPather<'a> {
    /// 8-way movement.
    pub fn new(map: &'a GridMap) -> Self {
        Self {
            map,
            diagonals: true,
        }
    }

    /// 4-way (cardinal) movement.
    pub fn cardinal(map: &'a GridMap) -> Self {
        Self {
            map,
            diagonals: false,
        }
    }

    pub fn map(&self) -> &'a GridMap {
        self.map
    }
}

impl Pather for GridPather<'_> {
    type Node = Point;

    fn neighbors(&self, p: &Point, buf: &mut Vec<Point>) {
        let rng = self.map.range();
        if self.diagonals {
            push_all(*p, buf, |n| rng.contains(n));
        } else {
            push_cardinal(*p, buf, |n| rng.contains(n));
        }
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, _came_from: &CameFrom<Point>, from: &Point, to: &Point) -> f64 {
        if self.map.is_passable(*to) {
            euclidean(*from, *to)
        } else {
            f64::INFINITY
        }
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: &Point, goal: &Point) -> f64 {
        if self.diagonals {
            octile(*from, *goal)
        } else {
            f64::from(manhattan(*from, *goal))
        }
    }
}
