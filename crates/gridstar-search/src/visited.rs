use gridstar_core::Point;
use rustc_hash::FxHashSet;

/// Points that have been expanded and must not be expanded again.
///
/// The set only ever grows during a search and is used purely for pruning.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    points: FxHashSet<Point>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `p` as visited. Returns `false` if it already was.
    #[inline]
    pub fn insert(&mut self, p: Point) -> bool {
        self.points.insert(p)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
