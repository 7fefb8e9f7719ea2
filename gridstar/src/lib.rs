//! Library half of the `gridstar` command: argument handling, scenario
//! loading, random maps, and text rendering around the search crates.

pub mod cli;
pub mod mapgen;
pub mod render;
pub mod scenario;

pub use cli::Args;
pub use render::render;
pub use scenario::ScenarioError;
