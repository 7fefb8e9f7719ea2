use gridstar_core::{GridMap, Point};

/// Traversability lookup the search runs over.
pub trait Traversable {
    /// Whether `p` may be entered. Off-map points must report `false`.
    fn is_open(&self, p: Point) -> bool;
}

/// Distance estimate used to order the frontier.
pub trait Heuristic {
    /// Estimated remaining cost from `from` to `goal`.
    /// Must never overestimate the true cost (admissible) and must satisfy
    /// `estimate(a) <= 1 + estimate(b)` for adjacent `a`, `b` (consistent).
    fn estimate(&self, from: Point, goal: Point) -> u32;
}

impl Traversable for GridMap {
    #[inline]
    fn is_open(&self, p: Point) -> bool {
        GridMap::is_open(self, p)
    }
}

impl<T: Traversable + ?Sized> Traversable for &T {
    #[inline]
    fn is_open(&self, p: Point) -> bool {
        (**self).is_open(p)
    }
}
