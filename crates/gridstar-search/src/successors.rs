use gridstar_core::{Direction, Point};

use crate::path::Path;
use crate::traits::{Heuristic, Traversable};
use crate::visited::VisitedSet;

/// Expands a [`Path`] into its legal one-step extensions.
///
/// Neighbours are tried in [`Direction::CARDINALS`] order (north, south,
/// east, west). A neighbour is skipped if the map reports it closed (walls
/// and off-map points alike) or if it has already been visited.
pub struct Successors<'a, M: ?Sized, H> {
    map: &'a M,
    heuristic: H,
    goal: Point,
}

impl<'a, M: Traversable + ?Sized, H: Heuristic> Successors<'a, M, H> {
    pub fn new(map: &'a M, heuristic: H, goal: Point) -> Self {
        Self {
            map,
            heuristic,
            goal,
        }
    }

    /// The goal every estimate is measured against.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The trivial path on `start`. `start` itself is not checked against
    /// the map.
    pub fn root(&self, start: Point) -> Path {
        Path::start(start, self.heuristic.estimate(start, self.goal))
    }

    /// Append the extensions of `path` to `out`. The caller clears `out`
    /// before calling if needed.
    pub fn expand_into(&self, path: &Path, visited: &VisitedSet, out: &mut Vec<Path>) {
        let current = path.current();
        for dir in Direction::CARDINALS {
            let next = current.neighbor(dir);
            if !self.map.is_open(next) || visited.contains(next) {
                continue;
            }
            out.push(path.extend(next, self.heuristic.estimate(next, self.goal)));
        }
    }

    /// The extensions of `path`, in direction order.
    pub fn expand(&self, path: &Path, visited: &VisitedSet) -> Vec<Path> {
        let mut out = Vec::with_capacity(4);
        self.expand_into(path, visited, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Manhattan;
    use gridstar_core::GridMap;

    #[test]
    fn open_interior_yields_four_in_order() {
        let map = GridMap::new(3, 3).unwrap();
        let succ = Successors::new(&map, Manhattan, Point::new(2, 2));
        let root = succ.root(Point::new(1, 1));
        let next: Vec<Point> = succ
            .expand(&root, &VisitedSet::new())
            .iter()
            .map(Path::current)
            .collect();
        assert_eq!(
            next,
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(0, 1),
            ]
        );
    }

    #[test]
    fn costs_and_estimates_are_updated() {
        let map = GridMap::new(3, 3).unwrap();
        let succ = Successors::new(&map, Manhattan, Point::new(2, 2));
        let root = succ.root(Point::new(0, 0));
        assert_eq!(root.f(), 4);
        for p in succ.expand(&root, &VisitedSet::new()) {
            assert_eq!(p.g(), 1);
            assert_eq!(p.f(), 1 + Manhattan.estimate(p.current(), Point::new(2, 2)));
            assert_eq!(p.locs()[0], Point::new(0, 0));
            assert_eq!(p.locs().len(), 2);
        }
    }

    #[test]
    fn walls_edges_and_visited_are_skipped() {
        let map: GridMap = "
            .#.
            ...
        "
        .parse()
        .unwrap();
        let succ = Successors::new(&map, Manhattan, Point::new(2, 0));
        let root = succ.root(Point::new(0, 0));
        // North and west are off-map, east is a wall.
        let next = succ.expand(&root, &VisitedSet::new());
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].current(), Point::new(0, 1));

        let mut visited = VisitedSet::new();
        visited.insert(Point::new(0, 1));
        assert!(succ.expand(&root, &visited).is_empty());
    }

    #[test]
    fn expand_into_appends() {
        let map = GridMap::new(2, 1).unwrap();
        let succ = Successors::new(&map, Manhattan, Point::new(1, 0));
        let root = succ.root(Point::new(0, 0));
        let mut out = vec![root.clone()];
        succ.expand_into(&root, &VisitedSet::new(), &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].current(), Point::new(1, 0));
    }
}
