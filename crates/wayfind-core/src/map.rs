//! Rectangular tile maps built from text.
//!
//! A [`GridMap`] parses an ASCII picture into walls and floor, with optional
//! start and goal markers:
//!
//! | Char | Meaning |
//! |---|---|
//! | `#` | wall |
//! | `.` | floor |
//! | `S` | floor, start marker |
//! | `G` | floor, goal marker |

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};

/// What occupies a map cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tile {
    Floor,
    Wall,
}

/// A rectangular map of [`Tile`]s anchored at the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    range: Range,
    tiles: Vec<Tile>,
    start: Option<Point>,
    goal: Option<Point>,
}

impl GridMap {
    /// Create an all-floor map of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        let range = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            range,
            tiles: vec![Tile::Floor; range.len()],
            start: None,
            goal: None,
        }
    }

    /// Parse a map from text.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, and a
    /// trailing `'\r'` is dropped from each line. Every line must have the
    /// same width.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(s.len());
        let mut start = None;
        let mut goal = None;
        let mut width = None;
        let mut height = 0;

        for (y, line) in s.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let y = y as i32;
            let mut x = 0;
            for ch in line.chars() {
                let pos = Point::new(x, y);
                let tile = match ch {
                    '#' => Tile::Wall,
                    '.' => Tile::Floor,
                    'S' | 'G' => {
                        let slot = if ch == 'S' { &mut start } else { &mut goal };
                        if slot.is_some() {
                            return Err(MapError::DuplicateMarker { marker: ch, pos });
                        }
                        *slot = Some(pos);
                        Tile::Floor
                    }
                    _ => return Err(MapError::InvalidChar { ch, pos }),
                };
                tiles.push(tile);
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => {
                    return Err(MapError::InconsistentWidth {
                        line: y,
                        expected: w,
                        found: x,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        Ok(Self {
            range: Range::new(0, 0, width, height),
            tiles,
            start,
            goal,
        })
    }

    /// The rectangle covered by the map.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Position of the `S` marker, if the map had one.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the `G` marker, if the map had one.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Tile at `p`, or `None` outside the map.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.idx(p).map(|i| self.tiles[i])
    }

    /// Overwrite the tile at `p`. Returns `false` if `p` is outside the map.
    pub fn set(&mut self, p: Point, tile: Tile) -> bool {
        match self.idx(p) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Whether `p` is inside the map and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p) == Some(Tile::Floor)
    }

    /// Draw the map back to text, marking every point of `path` with `*`.
    ///
    /// Start and goal markers are kept on top of the path.
    pub fn render(&self, path: &[Point]) -> String {
        let w = self.range.width().max(0) as usize;
        let mut out = String::with_capacity(self.tiles.len() + self.range.height() as usize);
        for p in self.range {
            let ch = if Some(p) == self.start {
                'S'
            } else if Some(p) == self.goal {
                'G'
            } else if path.contains(&p) {
                '*'
            } else {
                match self.at(p) {
                    Some(Tile::Wall) => '#',
                    _ => '.',
                }
            };
            out.push(ch);
            if p.x as usize == w - 1 && p.y < self.range.max.y - 1 {
                out.push('\n');
            }
        }
        out
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.range.contains(p) {
            return None;
        }
        Some(p.y as usize * self.range.width() as usize + p.x as usize)
    }
}

impl FromStr for GridMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors that can occur when parsing a [`GridMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The text contained no cells.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth { line: i32, expected: i32, found: i32 },
    /// A character outside `#.SG` was found.
    InvalidChar { ch: char, pos: Point },
    /// An `S` or `G` marker appeared more than once.
    DuplicateMarker { marker: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no cells"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map contains invalid char \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { marker, pos } => {
                write!(f, "map: duplicate \u{201c}{marker}\u{201d} marker at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S..#
.#.#
...G";

    #[test]
    fn parse_and_size() {
        let m = GridMap::parse(ROOM).unwrap();
        assert_eq!(m.range(), Range::new(0, 0, 4, 3));
        assert_eq!(m.start(), Some(Point::new(0, 0)));
        assert_eq!(m.goal(), Some(Point::new(3, 2)));
        assert_eq!(m.at(Point::new(3, 0)), Some(Tile::Wall));
        assert_eq!(m.at(Point::new(1, 1)), Some(Tile::Wall));
        assert!(m.is_passable(Point::new(3, 2)));
        assert!(!m.is_passable(Point::new(4, 0)));
        assert_eq!(m.at(Point::new(-1, 0)), None);
    }

    #[test]
    fn parse_via_from_str_and_crlf() {
        let m: GridMap = "..\r\n#.\r\n".parse().unwrap();
        assert_eq!(m.range().size(), Point::new(2, 2));
        assert_eq!(m.at(Point::new(0, 1)), Some(Tile::Wall));
        assert_eq!(m.start(), None);
    }

    #[test]
    fn inconsistent_width() {
        let err = GridMap::parse("...\n..").unwrap_err();
        assert_eq!(
            err,
            MapError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            }
        );
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn invalid_char_reports_position() {
        let err = GridMap::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn duplicate_marker() {
        let err = GridMap::parse("S.S").unwrap_err();
        assert!(matches!(err, MapError::DuplicateMarker { marker: 'S', .. }));
        assert_eq!(GridMap::parse("  \n ").unwrap_err(), MapError::Empty);
    }

    #[test]
    fn set_and_render() {
        let mut m = GridMap::new(3, 2);
        assert!(m.set(Point::new(1, 0), Tile::Wall));
        assert!(!m.set(Point::new(3, 0), Tile::Wall));
        let out = m.render(&[Point::new(0, 0), Point::new(1, 1), Point::new(2, 0)]);
        assert_eq!(out, "*#*\n.*.");
    }

    #[test]
    fn render_keeps_markers() {
        let m = GridMap::parse(ROOM).unwrap();
        let path = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 1),
            Point::new(3, 2),
        ];
        assert_eq!(m.render(&path), "S*.#\n.#*#\n...G");
    }
}
