use wayfind_core::Point;

const CARDINAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

/// Append the 4 cardinal neighbors of `p` (up, right, down, left) to `buf`,
/// keeping only those for which `keep` returns `true`.
pub fn push_cardinal(p: Point, buf: &mut Vec<Point>, keep: impl Fn(Point) -> bool) {
    for d in CARDINAL {
        let n = p + d;
        if keep(n) {
            buf.push(n);
        }
    }
}

/// Append the 8 neighbors of `p` to `buf` in row-major order (row above
/// first, left to right), keeping only those for which `keep` returns
/// `true`.
pub fn push_all(p: Point, buf: &mut Vec<Point>, keep: impl Fn(Point) -> bool) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            let n = p.shift(dx, dy);
            if keep(n) {
                buf.push(n);
            }
        }
    }
}

/// Cached neighbor computation helper.
///
/// Owns a small buffer so closures passed to
/// [`find_path`](crate::find_path) can enumerate grid neighbors without
/// allocating per call.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return 4-directional (cardinal) neighbors of `p`, keeping only those
    /// for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        push_cardinal(p, &mut self.buf, keep);
        &self.buf
    }

    /// Return 8-directional neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        push_all(p, &mut self.buf, keep);
        &self.buf
    }
}
