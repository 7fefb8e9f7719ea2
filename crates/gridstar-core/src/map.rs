//! The [`GridMap`] type — an immutable 2D table of [`Tile`]s.
//!
//! Unlike a drawing surface, a map never changes once built: every
//! constructor validates its input up front and the result only answers
//! queries. Points outside the map read as blocked, so callers never need a
//! separate bounds check before asking whether a cell can be entered.

use std::str::FromStr;

use thiserror::Error;

use crate::geom::{Point, Range, RangeIter};
use crate::tile::Tile;

/// Errors raised while building a [`GridMap`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown map character {ch:?} at ({x}, {y})")]
    InvalidChar { ch: char, x: usize, y: usize },
    #[error("grid dimensions {width}x{height} exceed the coordinate range")]
    TooLarge { width: usize, height: usize },
}

/// A fixed-size rectangular traversability map.
///
/// Row index is `y`, column index is `x`; `(0, 0)` is the top-left cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    cells: Vec<Tile>,
    width: i32,
    height: i32,
}

impl GridMap {
    /// Create a fully open map of the given size.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Self::from_fn(width, height, |_| Tile::Open)
    }

    /// Create a map by evaluating `f` for every point, row by row.
    pub fn from_fn(
        width: i32,
        height: i32,
        f: impl FnMut(Point) -> Tile,
    ) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::Empty);
        }
        let cells = Range::new(0, 0, width, height).iter().map(f).collect();
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a map from rows of tiles. All rows must have the same length.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }
        let too_large = || GridError::TooLarge { width, height };
        let w = i32::try_from(width).map_err(|_| too_large())?;
        let h = i32::try_from(height).map_err(|_| too_large())?;
        if width.checked_mul(height).is_none() {
            return Err(too_large());
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            width: w,
            height: h,
        })
    }

    /// Build a map from integer rows: `0` is blocked, anything else is open.
    pub fn from_values<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let rows: Vec<Vec<Tile>> = rows
            .iter()
            .map(|r| r.as_ref().iter().map(|&v| Tile::from(v)).collect())
            .collect();
        Self::from_rows(&rows)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The rectangle covered by the map.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` lies on the map.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// The tile at `p`, or `None` if `p` is off the map.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is on the map and open. Off-map points are never open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_open)
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|t| t.is_open()).count()
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> GridMapIter<'_> {
        GridMapIter {
            map: self,
            inner: self.bounds().iter(),
        }
    }

    /// The map as rows of tiles, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.width as usize)
    }
}

impl FromStr for GridMap {
    type Err = GridError;

    /// Parse newline-separated rows of map characters (see
    /// [`Tile::from_char`]). Surrounding whitespace and blank lines are
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let y = rows.len();
            let row = line
                .chars()
                .enumerate()
                .map(|(x, ch)| Tile::from_char(ch).ok_or(GridError::InvalidChar { ch, x, y }))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(&rows)
    }
}

/// Iterator over `(Point, Tile)` pairs in a [`GridMap`].
pub struct GridMapIter<'a> {
    map: &'a GridMap,
    inner: RangeIter,
}

impl Iterator for GridMapIter<'_> {
    type Item = (Point, Tile);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        self.map.at(p).map(|t| (p, t))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GridMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GridMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<Tile>>::deserialize(deserializer)?;
        GridMap::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn map_round_trip() {
        let m = GridMap::from_values(&[[1, 0], [1, 1]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1,0],[1,1]]");
        let back: GridMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn ragged_json_is_an_error() {
        let res: Result<GridMap, _> = serde_json::from_str("[[1,1],[1]]");
        assert!(res.is_err());
    }
}
