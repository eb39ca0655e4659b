use std::hash::Hash;
use std::marker::PhantomData;

use crate::pathsearch::CameFrom;

/// Minimal pathfinding interface: defines the graph by neighbor enumeration.
pub trait Pather {
    /// Node identity. Used as a map key, so two nodes are the same node
    /// exactly when they compare equal.
    type Node: Clone + Eq + Hash;

    /// Append neighbors of `node` into `buf`. The caller clears `buf` before
    /// calling. Enumeration order decides ties between equal-cost paths.
    fn neighbors(&self, node: &Self::Node, buf: &mut Vec<Self::Node>);
}

/// Pather with weighted edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`.
    ///
    /// Must be `>= 0`; `f64::INFINITY` marks an impassable edge. `came_from`
    /// holds the best known predecessor of every node reached so far, so
    /// costs may depend on the shape of the path (turn penalties and such).
    fn cost(&self, came_from: &CameFrom<Self::Node>, from: &Self::Node, to: &Self::Node)
    -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `goal`.
    /// Must never overestimate the true cost (admissible) for the returned
    /// path to be the cheapest one.
    fn estimate(&self, from: &Self::Node, goal: &Self::Node) -> f64;
}

/// An [`AstarPather`] assembled from three closures.
///
/// The heuristic closure only receives the node: it is expected to already
/// know the goal.
pub struct FnPather<N, H, F, C> {
    heuristic: H,
    neighbors_of: F,
    edge_cost: C,
    _node: PhantomData<fn(&N)>,
}

impl<N, H, F, C> FnPather<N, H, F, C> {
    pub fn new<I>(heuristic: H, neighbors_of: F, edge_cost: C) -> Self
    where
        H: Fn(&N) -> f64,
        F: Fn(&N) -> I,
        I: IntoIterator<Item = N>,
        C: Fn(&CameFrom<N>, &N, &N) -> f64,
    {
        Self {
            heuristic,
            neighbors_of,
            edge_cost,
            _node: PhantomData,
        }
    }
}

impl<N, H, F, I, C> Pather for FnPather<N, H, F, C>
where
    N: Clone + Eq + Hash,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    type Node = N;

    fn neighbors(&self, node: &N, buf: &mut Vec<N>) {
        buf.extend((self.neighbors_of)(node));
    }
}

impl<N, H, F, I, C> WeightedPather for FnPather<N, H, F, C>
where
    N: Clone + Eq + Hash,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
    C: Fn(&CameFrom<N>, &N, &N) -> f64,
{
    fn cost(&self, came_from: &CameFrom<N>, from: &N, to: &N) -> f64 {
        (self.edge_cost)(came_from, from, to)
    }
}

impl<N, H, F, I, C> AstarPather for FnPather<N, H, F, C>
where
    N: Clone + Eq + Hash,
    H: Fn(&N) -> f64,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
    C: Fn(&CameFrom<N>, &N, &N) -> f64,
{
    fn estimate(&self, from: &N, _goal: &N) -> f64 {
        (self.heuristic)(from)
    }
}
