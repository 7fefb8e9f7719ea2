//! Text rendering of a map with an optional route drawn over it.

use gridstar_core::GridMap;
use gridstar_search::Route;

/// Marker drawn on every cell of a route.
pub const PATH_MARK: char = '*';

/// Render `grid` one row per line, drawing `route` cells with
/// [`PATH_MARK`] and every other cell with its tile character. Route points
/// outside the map are ignored.
pub fn render(grid: &GridMap, route: Option<&Route>) -> String {
    let width = grid.width() as usize;
    let mut canvas: Vec<Vec<char>> = grid
        .rows()
        .map(|row| row.iter().map(|t| t.as_char()).collect())
        .collect();
    for p in route.map_or(&[][..], |r| r.points.as_slice()) {
        if grid.contains(*p) {
            canvas[p.y as usize][p.x as usize] = PATH_MARK;
        }
    }
    let mut out = String::with_capacity((width + 1) * canvas.len());
    for row in canvas {
        out.extend(row);
        out.push('\n');
    }
    out
}
