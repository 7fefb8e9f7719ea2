//! The A* expand/select/terminate loop.
//!
//! [`SearchEngine`] is an explicit state machine: each call to
//! [`step`](SearchEngine::step) pops the cheapest candidate from the
//! [`Frontier`] and either finishes the search or expands that candidate by
//! one cell in every open direction. A point is marked visited when it is
//! expanded, and candidates whose leading point was already expanded are
//! dropped when popped. With a consistent heuristic this makes the first
//! path popped at the goal a cheapest one.

use gridstar_core::{GridMap, Point};
use log::{debug, trace};

use crate::distance::Manhattan;
use crate::frontier::Frontier;
use crate::path::Path;
use crate::successors::Successors;
use crate::traits::{Heuristic, Traversable};
use crate::visited::VisitedSet;

/// Where a search currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Running,
    /// Terminal: the contained path ends at the goal and is optimal.
    Succeeded(Path),
    /// Terminal: no route exists, or the expansion budget ran out.
    Failed,
}

impl SearchState {
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, SearchState::Running)
    }
}

/// Counters gathered while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Paths popped and expanded.
    pub expansions: usize,
    /// Paths pushed onto the frontier by expansion.
    pub generated: usize,
    /// Paths popped and dropped because their point was already expanded.
    pub stale: usize,
    /// Largest frontier size seen.
    pub peak_frontier: usize,
}

/// One A* search from `start` to `goal` over a map.
///
/// The engine owns its frontier and visited set; both are discarded with it.
pub struct SearchEngine<'a, M: ?Sized = GridMap, H = Manhattan> {
    successors: Successors<'a, M, H>,
    start: Point,
    frontier: Frontier,
    visited: VisitedSet,
    state: SearchState,
    stats: SearchStats,
    budget: Option<usize>,
    buf: Vec<Path>,
}

impl<'a, M: Traversable + ?Sized, H: Heuristic> SearchEngine<'a, M, H> {
    /// Prepare a search. The frontier starts with the single-point path on
    /// `start`; `start` is not checked against the map.
    pub fn new(map: &'a M, heuristic: H, start: Point, goal: Point) -> Self {
        let successors = Successors::new(map, heuristic, goal);
        let mut frontier = Frontier::new();
        frontier.push(successors.root(start));
        Self {
            successors,
            start,
            frontier,
            visited: VisitedSet::new(),
            state: SearchState::Running,
            stats: SearchStats {
                peak_frontier: 1,
                ..SearchStats::default()
            },
            budget: None,
            buf: Vec::with_capacity(4),
        }
    }

    /// Cap the number of expansions. Once spent, the next step that would
    /// expand a path fails the search instead.
    pub fn with_budget(mut self, max_expansions: usize) -> Self {
        self.budget = Some(max_expansions);
        self
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.successors.goal()
    }

    #[inline]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Points expanded so far.
    #[inline]
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Number of candidates waiting in the frontier.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Perform one transition and return the resulting state.
    ///
    /// Terminal states are sticky: stepping a finished search is a no-op.
    pub fn step(&mut self) -> &SearchState {
        if !self.state.is_running() {
            return &self.state;
        }

        let Some(path) = self.frontier.pop_best() else {
            debug!(
                "no path from {} to {} ({} expansions)",
                self.start,
                self.goal(),
                self.stats.expansions
            );
            self.state = SearchState::Failed;
            return &self.state;
        };

        let current = path.current();
        if current == self.goal() {
            debug!(
                "reached {} from {} with cost {} ({} expansions)",
                current,
                path.origin(),
                path.g(),
                self.stats.expansions
            );
            self.state = SearchState::Succeeded(path);
            return &self.state;
        }

        if self.visited.contains(current) {
            self.stats.stale += 1;
            return &self.state;
        }

        if self
            .budget
            .is_some_and(|max| self.stats.expansions >= max)
        {
            debug!(
                "expansion budget of {} spent before reaching {}",
                self.stats.expansions,
                self.goal()
            );
            self.state = SearchState::Failed;
            return &self.state;
        }

        self.visited.insert(current);
        self.stats.expansions += 1;

        self.buf.clear();
        self.successors
            .expand_into(&path, &self.visited, &mut self.buf);
        let count = self.buf.len();
        self.stats.generated += count;
        self.frontier.insert_all(self.buf.drain(..));
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        trace!(
            "expand {} g={} f={} -> {} successors, next best f={:?}",
            current,
            path.g(),
            path.f(),
            count,
            self.frontier.peek_f()
        );
        &self.state
    }

    /// Step until the search reaches a terminal state.
    pub fn run(&mut self) -> &SearchState {
        while self.state.is_running() {
            self.step();
        }
        &self.state
    }

    /// Run to completion and return the terminal state.
    pub fn finish(mut self) -> SearchState {
        self.run();
        self.into_state()
    }

    /// Consume the engine and return its current state without stepping.
    pub fn into_state(self) -> SearchState {
        self.state
    }
}
