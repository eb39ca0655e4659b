use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::heap::IndexedMinHeap;

/// Best known predecessor of every node reached by a search.
pub type CameFrom<N> = HashMap<N, N>;

/// Per-query budget for [`PathSearch::astar`].
///
/// The default is unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Stop with [`SearchOutcome::LimitReached`] once this many nodes have
    /// been expanded.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    /// No budget: the search runs until it finds the goal or runs out of
    /// frontier.
    pub const fn unlimited() -> Self {
        Self {
            max_expansions: None,
        }
    }

    pub const fn with_max_expansions(max: usize) -> Self {
        Self {
            max_expansions: Some(max),
        }
    }

    #[inline]
    pub(crate) fn allows(&self, expanded: usize) -> bool {
        self.max_expansions.is_none_or(|max| expanded < max)
    }
}

/// Counters for the last query run by a [`PathSearch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes taken off the frontier and expanded (the goal is not counted).
    pub expanded: usize,
    /// Edge relaxations attempted.
    pub relaxed: usize,
    /// Largest frontier size seen.
    pub max_frontier: usize,
}

/// A start-to-goal path and its total edge cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<N> {
    pub nodes: Vec<N>,
    pub cost: f64,
}

/// How an A* query ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<N> {
    /// The goal was reached.
    Found(Path<N>),
    /// The frontier ran out: no path exists.
    Exhausted,
    /// The [`SearchLimits`] budget ran out before the goal was reached.
    LimitReached,
}

impl<N> SearchOutcome<N> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn path(&self) -> Option<&Path<N>> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    /// The path's nodes, discarding the cost. `None` unless found.
    pub fn into_path(self) -> Option<Vec<N>> {
        match self {
            Self::Found(path) => Some(path.nodes),
            _ => None,
        }
    }
}

impl<N> fmt::Display for SearchOutcome<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(path) => write!(
                f,
                "found path of {} nodes (cost {})",
                path.nodes.len(),
                path.cost
            ),
            Self::Exhausted => write!(f, "no path"),
            Self::LimitReached => write!(f, "expansion limit reached"),
        }
    }
}

/// Reusable A* search state.
///
/// `PathSearch` owns the open set, the cost maps and a neighbor scratch
/// buffer, so repeated queries reuse their allocations. Each query starts
/// by clearing everything: nothing carries over from one search to the
/// next except capacity.
#[derive(Debug, Clone)]
pub struct PathSearch<N> {
    pub(crate) open: IndexedMinHeap<N>,
    pub(crate) came_from: CameFrom<N>,
    // g-score: cheapest known cost from the start.
    pub(crate) g: HashMap<N, f64>,
    // f-score: g plus heuristic, the open set priority.
    pub(crate) f: HashMap<N, f64>,
    pub(crate) nbuf: Vec<N>,
    pub(crate) stats: SearchStats,
}

impl<N> Default for PathSearch<N> {
    fn default() -> Self {
        Self {
            open: IndexedMinHeap::default(),
            came_from: HashMap::new(),
            g: HashMap::new(),
            f: HashMap::new(),
            nbuf: Vec::with_capacity(8),
            stats: SearchStats::default(),
        }
    }
}

impl<N: Clone + Eq + Hash> PathSearch<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a search with room for `capacity` nodes in each map.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            open: IndexedMinHeap::with_capacity(capacity),
            came_from: HashMap::with_capacity(capacity),
            g: HashMap::with_capacity(capacity),
            f: HashMap::with_capacity(capacity),
            nbuf: Vec::with_capacity(8),
            stats: SearchStats::default(),
        }
    }

    /// Counters for the last query.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Cheapest known cost from the last query's start to `node`.
    ///
    /// `None` if the last query never reached `node`.
    pub fn cost_to(&self, node: &N) -> Option<f64> {
        self.g.get(node).copied()
    }

    /// Estimated total cost of the best known path through `node` in the
    /// last query.
    pub fn estimate_through(&self, node: &N) -> Option<f64> {
        self.f.get(node).copied()
    }

    /// Predecessor map left by the last query.
    pub fn came_from(&self) -> &CameFrom<N> {
        &self.came_from
    }

    pub(crate) fn reset(&mut self) {
        self.open.clear();
        self.came_from.clear();
        self.g.clear();
        self.f.clear();
        self.nbuf.clear();
        self.stats = SearchStats::default();
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn limits_round_trip() {
        let limits = SearchLimits::with_max_expansions(500);
        let json = serde_json::to_string(&limits).unwrap();
        assert_eq!(json, r#"{"max_expansions":500}"#);
        let back: SearchLimits = serde_json::from_str(&json).unwrap();
        assert_eq!(back, limits);
    }

    #[test]
    fn stats_round_trip() {
        let stats = SearchStats {
            expanded: 12,
            relaxed: 80,
            max_frontier: 9,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
