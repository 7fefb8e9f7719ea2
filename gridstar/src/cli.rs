//! Command-line arguments and how they turn into a [`SearchConfig`].

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use gridstar_core::Point;
use gridstar_search::SearchConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::mapgen::MapGen;
use crate::scenario::{self, ScenarioError, parse_point, parse_size};

#[derive(Debug, Parser)]
#[command(
    name = "gridstar",
    version,
    about = "Find the shortest 4-connected route across a grid map"
)]
pub struct Args {
    /// Scenario file: a `.json` search config or a text map (`.` open, `#` blocked).
    /// The built-in demo map is used when neither this nor --random is given.
    #[arg(conflicts_with = "random")]
    pub file: Option<PathBuf>,

    /// Generate a random map of the given size, e.g. `40x20`.
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    pub random: Option<(i32, i32)>,

    /// Carve the random map as a cave instead of scattering walls.
    #[arg(long, requires = "random")]
    pub cave: bool,

    /// Seed for --random.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Wall density for --random, or open fraction with --cave.
    #[arg(long, default_value_t = 0.3)]
    pub density: f64,

    /// Start point as `x,y`.
    #[arg(long, value_parser = parse_point)]
    pub start: Option<Point>,

    /// Goal point as `x,y`.
    #[arg(long, value_parser = parse_point)]
    pub goal: Option<Point>,

    /// Give up after this many expansions.
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Print the outcome as JSON instead of drawing the map.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log filter matching the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Assemble the search configuration these arguments describe.
    pub fn config(&self) -> Result<SearchConfig, ScenarioError> {
        let mut cfg = if let Some((w, h)) = self.random {
            let start = self.start.unwrap_or(Point::ZERO);
            let goal = self.goal.unwrap_or(Point::new(w - 1, h - 1));
            let mut mg = MapGen::new(StdRng::seed_from_u64(self.seed));
            let grid = if self.cave {
                mg.walk_cave(w, h, self.density, &[start, goal])?
            } else {
                mg.noise(w, h, self.density, &[start, goal])?
            };
            SearchConfig::new(grid, start, goal)
        } else if let Some(path) = &self.file {
            scenario::load(path)?
        } else {
            scenario::demo()?
        };

        if let Some(start) = self.start {
            cfg.start = start;
        }
        if let Some(goal) = self.goal {
            cfg.goal = goal;
        }
        if self.max_expansions.is_some() {
            cfg.max_expansions = self.max_expansions;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_to_demo() {
        let args = Args::try_parse_from(["gridstar"]).unwrap();
        assert_eq!(args.log_level(), "warn");
        let cfg = args.config().unwrap();
        assert_eq!(cfg.start, scenario::DEMO_START);
        assert_eq!(cfg.goal, scenario::DEMO_GOAL);
        assert_eq!(cfg.max_expansions, None);
    }

    #[test]
    fn overrides_apply_to_demo() {
        let args = Args::try_parse_from([
            "gridstar",
            "--start",
            "9,0",
            "--goal",
            "9,9",
            "--max-expansions",
            "100",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.log_level(), "debug");
        let cfg = args.config().unwrap();
        assert_eq!(cfg.start, Point::new(9, 0));
        assert_eq!(cfg.goal, Point::new(9, 9));
        assert_eq!(cfg.max_expansions, Some(100));
    }

    #[test]
    fn random_maps_use_corners_and_seed() {
        let args =
            Args::try_parse_from(["gridstar", "--random", "12x8", "--seed", "5"]).unwrap();
        let a = args.config().unwrap();
        let b = args.config().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.grid.width(), 12);
        assert_eq!(a.grid.height(), 8);
        assert_eq!(a.start, Point::new(0, 0));
        assert_eq!(a.goal, Point::new(11, 7));
        assert!(a.grid.is_open(a.start));
        assert!(a.grid.is_open(a.goal));
    }

    #[test]
    fn cave_requires_random() {
        assert!(Args::try_parse_from(["gridstar", "--cave"]).is_err());
        let args = Args::try_parse_from([
            "gridstar", "--random", "10x10", "--cave", "--density", "0.5",
        ])
        .unwrap();
        let cfg = args.config().unwrap();
        assert!(cfg.grid.open_count() >= 50);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(Args::try_parse_from(["gridstar", "--start", "1"]).is_err());
        assert!(Args::try_parse_from(["gridstar", "--random", "0x5"]).is_err());
        assert!(Args::try_parse_from(["gridstar", "map.txt", "--random", "5x5"]).is_err());
    }
}
