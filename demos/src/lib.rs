//! Shared code for the wayfind demos: load a text map, plan a route between
//! its `S` and `G` markers and draw the result.

use std::fmt;

use wayfind_core::{GridMap, MapError, Point};
use wayfind_paths::{GridPather, PathSearch, SearchLimits, SearchOutcome, SearchStats};

/// Map used when no file is given.
pub const DEFAULT_MAP: &str = "\
S.........#.........
..........#.........
..######..#..#####..
.......#..#......#..
.......#..####...#..
.......#.........#..
.......###########..
...................G";

/// Options for [`plan`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteOptions {
    /// Restrict movement to the four cardinal directions.
    pub cardinal: bool,
    pub limits: SearchLimits,
}

/// A planned route and the work it took.
#[derive(Debug, Clone)]
pub struct Route {
    pub map: GridMap,
    pub outcome: SearchOutcome<Point>,
    pub stats: SearchStats,
}

impl Route {
    /// The map with the route drawn in `*`, followed by a summary line.
    pub fn render(&self) -> String {
        let path = self.outcome.path().map(|p| p.nodes.as_slice()).unwrap_or(&[]);
        format!(
            "{}\n{} ({} nodes expanded)",
            self.map.render(path),
            self.outcome,
            self.stats.expanded
        )
    }
}

/// Errors from [`plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    Map(MapError),
    /// The map has no `S` or no `G` marker.
    MissingMarker(char),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(e) => write!(f, "{e}"),
            Self::MissingMarker(ch) => write!(f, "map has no \u{201c}{ch}\u{201d} marker"),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Map(e) => Some(e),
            Self::MissingMarker(_) => None,
        }
    }
}

impl From<MapError> for RouteError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

/// Parse `text` and search from its `S` marker to its `G` marker.
pub fn plan(text: &str, opts: RouteOptions) -> Result<Route, RouteError> {
    let map = GridMap::parse(text)?;
    let start = map.start().ok_or(RouteError::MissingMarker('S'))?;
    let goal = map.goal().ok_or(RouteError::MissingMarker('G'))?;

    let pather = if opts.cardinal {
        GridPather::cardinal(&map)
    } else {
        GridPather::new(&map)
    };
    let mut search = PathSearch::with_capacity(map.range().len());
    let outcome = search.astar(&pather, start, goal, &opts.limits);
    let stats = search.stats();
    Ok(Route {
        map,
        outcome,
        stats,
    })
}
