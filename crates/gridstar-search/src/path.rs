use gridstar_core::Point;

/// A partial route from the start cell to [`current`](Path::current).
///
/// Paths are never modified once built; extending one produces a new value.
/// Invariants: `locs` is non-empty, holds no repeated point, consecutive
/// points are orthogonal neighbours, `current` is its last element and
/// `f == g + h(current)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    locs: Vec<Point>,
    current: Point,
    g: u32,
    f: u32,
}

impl Path {
    /// The trivial path sitting on `start`, with heuristic value `h`.
    pub fn start(start: Point, h: u32) -> Self {
        Self {
            locs: vec![start],
            current: start,
            g: 0,
            f: h,
        }
    }

    /// A new path that takes one more unit step to `next`, whose heuristic
    /// value is `h`.
    pub fn extend(&self, next: Point, h: u32) -> Self {
        debug_assert!(self.current.is_adjacent(next));
        let mut locs = Vec::with_capacity(self.locs.len() + 1);
        locs.extend_from_slice(&self.locs);
        locs.push(next);
        let g = self.g + 1;
        Self {
            locs,
            current: next,
            g,
            f: g + h,
        }
    }

    /// Leading point of the path.
    #[inline]
    pub fn current(&self) -> Point {
        self.current
    }

    /// First point of the path.
    #[inline]
    pub fn origin(&self) -> Point {
        self.locs[0]
    }

    /// All points from start to `current`, inclusive.
    #[inline]
    pub fn locs(&self) -> &[Point] {
        &self.locs
    }

    /// Cost so far: the number of steps taken.
    #[inline]
    pub fn g(&self) -> u32 {
        self.g
    }

    /// Estimated total cost, `g + h(current)`.
    #[inline]
    pub fn f(&self) -> u32 {
        self.f
    }

    pub fn into_locs(self) -> Vec<Point> {
        self.locs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_path_is_a_single_point() {
        let p = Path::start(Point::new(1, 1), 6);
        assert_eq!(p.locs(), &[Point::new(1, 1)]);
        assert_eq!(p.current(), Point::new(1, 1));
        assert_eq!(p.origin(), Point::new(1, 1));
        assert_eq!(p.g(), 0);
        assert_eq!(p.f(), 6);
    }

    #[test]
    fn extend_leaves_parent_untouched() {
        let root = Path::start(Point::new(0, 0), 2);
        let a = root.extend(Point::new(1, 0), 1);
        let b = a.extend(Point::new(1, 1), 0);
        assert_eq!(root.locs().len(), 1);
        assert_eq!(a.locs(), &[Point::new(0, 0), Point::new(1, 0)]);
        assert_eq!(b.g(), 2);
        assert_eq!(b.f(), 2);
        assert_eq!(b.current(), Point::new(1, 1));
        assert_eq!(b.into_locs().len(), 3);
    }
}
