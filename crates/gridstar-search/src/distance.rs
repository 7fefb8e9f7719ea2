use gridstar_core::Point;

use crate::traits::Heuristic;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// The Manhattan-distance heuristic for unit-cost 4-connected grids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, goal: Point) -> u32 {
        manhattan(from, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_sums_axes() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(2, 2)), 4);
        assert_eq!(manhattan(Point::new(3, -1), Point::new(-2, 4)), 10);
        assert_eq!(manhattan(Point::new(5, 5), Point::new(5, 5)), 0);
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(7, 1);
        let b = Point::new(-4, 9);
        assert_eq!(manhattan(a, b), manhattan(b, a));
    }

    #[test]
    fn manhattan_is_consistent_across_steps() {
        let goal = Point::new(3, 2);
        for p in gridstar_core::Range::new(-2, -2, 6, 6) {
            for n in p.neighbors_4() {
                assert!(Manhattan.estimate(p, goal) <= 1 + Manhattan.estimate(n, goal));
            }
        }
    }
}
