//! Building a [`SearchConfig`] from files, command-line overrides, or the
//! built-in demo map.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use gridstar_core::{GridError, GridMap, Point};
use gridstar_search::SearchConfig;
use log::{info, warn};
use thiserror::Error;

/// Errors raised while assembling a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid map: {0}")]
    Grid(#[from] GridError),
    #[error("invalid point {0:?}, expected \"x,y\"")]
    Point(String),
    #[error("invalid size {0:?}, expected \"WIDTHxHEIGHT\"")]
    Size(String),
}

/// The map used when no scenario is given.
pub const DEMO_MAP: &str = "
    ..........
    .######...
    ......#...
    .####.#.##
    .#....#...
    .#.####.#.
    .#......#.
    .######.#.
    ........#.
    ..........
";

/// Start and goal of the demo map.
pub const DEMO_START: Point = Point::new(0, 0);
pub const DEMO_GOAL: Point = Point::new(2, 4);

/// The built-in demo scenario.
pub fn demo() -> Result<SearchConfig, ScenarioError> {
    let grid: GridMap = DEMO_MAP.parse()?;
    Ok(SearchConfig::new(grid, DEMO_START, DEMO_GOAL))
}

/// Parse a JSON scenario (the serialised form of [`SearchConfig`]).
pub fn parse_json(json: &str) -> Result<SearchConfig, ScenarioError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a text map. Start defaults to the top-left corner and goal to the
/// bottom-right corner.
pub fn parse_text(text: &str) -> Result<SearchConfig, ScenarioError> {
    let grid: GridMap = text.parse()?;
    let goal = Point::new(grid.width() - 1, grid.height() - 1);
    Ok(SearchConfig::new(grid, Point::ZERO, goal))
}

/// Load a scenario file. Files ending in `.json` hold a full
/// [`SearchConfig`]; anything else is read as a text map.
pub fn load(path: &Path) -> Result<SearchConfig, ScenarioError> {
    let contents = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let cfg = if is_json {
        parse_json(&contents)?
    } else {
        parse_text(&contents)?
    };
    info!(
        "loaded {}x{} map from {}",
        cfg.grid.width(),
        cfg.grid.height(),
        path.display()
    );
    Ok(cfg)
}

/// Parse a point written as `x,y`.
pub fn parse_point(s: &str) -> Result<Point, ScenarioError> {
    let err = || ScenarioError::Point(s.to_string());
    let (x, y) = s.split_once(',').ok_or_else(err)?;
    let x = x.trim().parse().map_err(|_| err())?;
    let y = y.trim().parse().map_err(|_| err())?;
    Ok(Point::new(x, y))
}

/// Parse a map size written as `WIDTHxHEIGHT`.
pub fn parse_size(s: &str) -> Result<(i32, i32), ScenarioError> {
    let err = || ScenarioError::Size(s.to_string());
    let (w, h) = s.split_once(['x', 'X']).ok_or_else(err)?;
    let w: i32 = w.trim().parse().map_err(|_| err())?;
    let h: i32 = h.trim().parse().map_err(|_| err())?;
    if w <= 0 || h <= 0 {
        return Err(err());
    }
    Ok((w, h))
}

/// Log a warning for endpoints that cannot be part of a route. The search
/// still runs; a closed goal just fails.
pub fn warn_endpoints(cfg: &SearchConfig) {
    for (name, p) in [("start", cfg.start), ("goal", cfg.goal)] {
        match cfg.grid.at(p) {
            None => warn!("{name} {p} is outside the {} map", cfg.grid.bounds()),
            Some(t) if !t.is_open() => warn!("{name} {p} is a blocked cell"),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_search::find_path;

    #[test]
    fn demo_map_is_solvable() {
        let cfg = demo().unwrap();
        assert_eq!(cfg.grid.width(), 10);
        assert_eq!(cfg.grid.height(), 10);
        let route = find_path(&cfg).into_route().unwrap();
        assert_eq!(route.cost, 12);
    }

    #[test]
    fn points_parse_with_spaces() {
        assert_eq!(parse_point("3,4").unwrap(), Point::new(3, 4));
        assert_eq!(parse_point(" -1 , 2 ").unwrap(), Point::new(-1, 2));
        assert!(matches!(parse_point("3;4"), Err(ScenarioError::Point(_))));
        assert!(matches!(parse_point("a,1"), Err(ScenarioError::Point(_))));
    }

    #[test]
    fn sizes_parse() {
        assert_eq!(parse_size("20x10").unwrap(), (20, 10));
        assert_eq!(parse_size("4X3").unwrap(), (4, 3));
        assert!(matches!(parse_size("0x3"), Err(ScenarioError::Size(_))));
        assert!(matches!(parse_size("20"), Err(ScenarioError::Size(_))));
    }

    #[test]
    fn json_scenario() {
        let cfg = parse_json(
            r#"{"grid": [[1,1],[0,1]], "start": {"x":0,"y":0}, "goal": {"x":1,"y":1}, "max_expansions": 10}"#,
        )
        .unwrap();
        assert_eq!(cfg.max_expansions, Some(10));
        assert!(!cfg.grid.is_open(Point::new(0, 1)));
        assert_eq!(find_path(&cfg).into_route().unwrap().cost, 2);
    }

    #[test]
    fn json_errors_are_reported() {
        let err = parse_json(r#"{"grid": [[1,1],[1]], "start": {"x":0,"y":0}, "goal": {"x":1,"y":0}}"#)
            .unwrap_err();
        assert!(matches!(err, ScenarioError::Json(_)));
    }

    #[test]
    fn text_scenario_uses_corners() {
        let cfg = parse_text("...\n.#.\n").unwrap();
        assert_eq!(cfg.start, Point::new(0, 0));
        assert_eq!(cfg.goal, Point::new(2, 1));
        assert!(matches!(parse_text("..\n.?"), Err(ScenarioError::Grid(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load(Path::new("/nonexistent/gridstar/map.txt")).unwrap_err();
        assert!(matches!(err, ScenarioError::Io { .. }));
        assert!(err.to_string().contains("map.txt"));
    }
}
