//! One-call search entry point driven by an explicit configuration value.

use gridstar_core::{GridMap, Point};
use log::debug;

use crate::distance::Manhattan;
use crate::engine::{SearchEngine, SearchState};
use crate::path::Path;

/// Everything a single search needs: the map, both endpoints, and an
/// optional cap on how many paths may be expanded.
///
/// `start` and `goal` are expected to be on the map and open. Neither is
/// validated; a goal that cannot be entered simply yields
/// [`SearchOutcome::Failed`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub grid: GridMap,
    pub start: Point,
    pub goal: Point,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn new(grid: GridMap, start: Point, goal: Point) -> Self {
        Self {
            grid,
            start,
            goal,
            max_expansions: None,
        }
    }

    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}

/// A complete route from start to goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Every cell visited, start and goal included.
    pub points: Vec<Point>,
    /// Number of unit steps taken.
    pub cost: u32,
}

impl From<Path> for Route {
    fn from(path: Path) -> Self {
        let cost = path.g();
        Self {
            points: path.into_locs(),
            cost,
        }
    }
}

/// Result of [`find_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    Succeeded(Route),
    Failed,
}

impl SearchOutcome {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Succeeded(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            SearchOutcome::Succeeded(r) => Some(r),
            SearchOutcome::Failed => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            SearchOutcome::Succeeded(r) => Some(r),
            SearchOutcome::Failed => None,
        }
    }
}

/// Find a minimum-cost 4-connected route described by `config`.
pub fn find_path(config: &SearchConfig) -> SearchOutcome {
    debug!(
        "searching {} -> {} on a {}x{} map",
        config.start,
        config.goal,
        config.grid.width(),
        config.grid.height()
    );
    let mut engine = SearchEngine::new(&config.grid, Manhattan, config.start, config.goal);
    if let Some(max) = config.max_expansions {
        engine = engine.with_budget(max);
    }
    engine.run();
    let stats = engine.stats();
    debug!(
        "search finished: {} expansions, {} generated, {} stale, peak frontier {}",
        stats.expansions, stats.generated, stats.stale, stats.peak_frontier
    );
    match engine.into_state() {
        SearchState::Succeeded(path) => SearchOutcome::Succeeded(path.into()),
        _ => SearchOutcome::Failed,
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_reads_map_literal() {
        let json = r#"{
            "grid": [[1, 1, 1], [0, 0, 1], [1, 1, 1]],
            "start": {"x": 0, "y": 0},
            "goal": {"x": 0, "y": 2}
        }"#;
        let cfg: SearchConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.max_expansions, None);
        assert_eq!(cfg.grid.width(), 3);
        let route = find_path(&cfg).into_route().unwrap();
        assert_eq!(route.cost, 6);
    }

    #[test]
    fn outcome_round_trip() {
        let outcome = SearchOutcome::Succeeded(Route {
            points: vec![Point::new(0, 0), Point::new(0, 1)],
            cost: 1,
        });
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
