//! **gridstar-core** — geometry and map types shared by the *gridstar*
//! crates.
//!
//! This crate provides integer grid points, orthogonal directions,
//! half-open rectangles and the immutable [`GridMap`] traversability table
//! that searches run over.

pub mod geom;
pub mod map;
pub mod tile;

pub use geom::{Direction, Point, Range};
pub use map::{GridError, GridMap};
pub use tile::Tile;
