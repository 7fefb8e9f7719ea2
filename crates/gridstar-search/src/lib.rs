//! A* shortest-path search on 4-connected grids.
//!
//! The search is split into small parts that mirror the algorithm:
//!
//! - [`Heuristic`] / [`Manhattan`] — admissible distance estimate
//! - [`Successors`] — one-step extensions of a [`Path`] in N, S, E, W order
//! - [`Frontier`] — candidates ordered by `f`, ties by insertion order
//! - [`VisitedSet`] — points already expanded
//! - [`SearchEngine`] — the step-wise state machine tying them together
//!
//! Most callers only need [`find_path`] with a [`SearchConfig`]:
//!
//! ```
//! use gridstar_core::{GridMap, Point};
//! use gridstar_search::{find_path, SearchConfig};
//!
//! let grid: GridMap = "...\n.#.\n...".parse().unwrap();
//! let cfg = SearchConfig::new(grid, Point::new(0, 0), Point::new(2, 2));
//! let route = find_path(&cfg).into_route().unwrap();
//! assert_eq!(route.cost, 4);
//! ```

mod distance;
mod engine;
mod frontier;
mod path;
mod search;
mod successors;
mod traits;
mod visited;

pub use distance::{Manhattan, manhattan};
pub use engine::{SearchEngine, SearchState, SearchStats};
pub use frontier::Frontier;
pub use path::Path;
pub use search::{Route, SearchConfig, SearchOutcome, find_path};
pub use successors::Successors;
pub use traits::{Heuristic, Traversable};
pub use visited::VisitedSet;
