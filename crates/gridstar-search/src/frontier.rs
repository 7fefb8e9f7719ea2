use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::path::Path;

/// Heap entry ordered by `f`, then by insertion sequence.
struct Entry {
    f: u32,
    seq: u64,
    path: Path,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest insertion among equal f.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Candidate paths waiting to be expanded, cheapest estimate first.
///
/// Ties on `f` are broken by insertion order, so a search over identical
/// input always expands paths in the same order.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single candidate.
    pub fn push(&mut self, path: Path) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            f: path.f(),
            seq,
            path,
        });
    }

    /// Add a batch of candidates, in iteration order.
    pub fn insert_all(&mut self, paths: impl IntoIterator<Item = Path>) {
        for path in paths {
            self.push(path);
        }
    }

    /// Remove and return the path with the smallest `f`.
    pub fn pop_best(&mut self) -> Option<Path> {
        self.heap.pop().map(|e| e.path)
    }

    /// The smallest `f` currently held.
    pub fn peek_f(&self) -> Option<u32> {
        self.heap.peek().map(|e| e.f)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
