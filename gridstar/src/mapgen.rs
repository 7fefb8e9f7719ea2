//! Random map generation for trying the search on fresh layouts.
//!
//! Two generators are provided:
//! - **Noise**: every cell is independently blocked with a given chance.
//! - **Random walk cave**: a drunk walk from the centre carves open space out
//!   of solid rock until enough of the map is open.

use gridstar_core::{Direction, GridMap, Point, Tile};
use rand::Rng;

use crate::scenario::ScenarioError;

/// Map generator driven by a caller-supplied random source.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Block each cell with probability `density` (clamped to 0.0–1.0).
    /// Points in `keep_open` are always open.
    pub fn noise(
        &mut self,
        width: i32,
        height: i32,
        density: f64,
        keep_open: &[Point],
    ) -> Result<GridMap, ScenarioError> {
        let density = density.clamp(0.0, 1.0);
        let grid = GridMap::from_fn(width, height, |p| {
            if !keep_open.contains(&p) && self.rng.random_bool(density) {
                Tile::Blocked
            } else {
                Tile::Open
            }
        })?;
        Ok(grid)
    }

    /// Carve a cave by walking randomly from the centre of a solid map until
    /// at least `fill_pct` (0.0–1.0) of the cells are open. Points in
    /// `keep_open` are always open, but may not be connected to the cave.
    pub fn walk_cave(
        &mut self,
        width: i32,
        height: i32,
        fill_pct: f64,
        keep_open: &[Point],
    ) -> Result<GridMap, ScenarioError> {
        // Validates the size before the buffer below is allocated.
        let bounds = GridMap::new(width, height)?.bounds();
        let area = bounds.len();
        let target = ((area as f64) * fill_pct.clamp(0.0, 1.0)).ceil() as usize;
        let max_steps = area.saturating_mul(50);

        let mut open = vec![false; area];
        let idx = |p: Point| cell_index(width, p);
        let mut pos = Point::new(width / 2, height / 2);
        open[idx(pos)] = true;
        let mut carved = 1;

        for _ in 0..max_steps {
            if carved >= target {
                break;
            }
            let dir = Direction::CARDINALS[self.rng.random_range(0..4)];
            let next = pos.neighbor(dir);
            if !bounds.contains(next) {
                continue;
            }
            pos = next;
            if !open[idx(pos)] {
                open[idx(pos)] = true;
                carved += 1;
            }
        }

        let grid = GridMap::from_fn(width, height, |p| {
            if open[idx(p)] || keep_open.contains(&p) {
                Tile::Open
            } else {
                Tile::Blocked
            }
        })?;
        Ok(grid)
    }
}

/// Row-major index of an in-bounds `p` on a map `width` cells wide.
#[inline]
fn cell_index(width: i32, p: Point) -> usize {
    p.y as usize * width as usize + p.x as usize
}
