//! The traversability state of a single map cell.

use std::fmt;

/// A map cell: either walkable or a wall.
///
/// Numerically a tile is `0` when blocked and `1` when open, matching the
/// conventional map literal format. Any non-zero value reads as open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u8", into = "u8")
)]
pub enum Tile {
    #[default]
    Open,
    Blocked,
}

impl Tile {
    /// Whether the tile can be stepped on.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Tile::Open)
    }

    /// Decode a tile from its map character, if recognised.
    ///
    /// `.`, `1` and space are open; `#` and `0` are blocked.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' | '1' | ' ' => Some(Tile::Open),
            '#' | '0' => Some(Tile::Blocked),
            _ => None,
        }
    }

    /// The canonical map character for this tile.
    pub const fn as_char(self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Blocked => '#',
        }
    }
}

impl From<u8> for Tile {
    fn from(v: u8) -> Self {
        if v == 0 { Tile::Blocked } else { Tile::Open }
    }
}

impl From<i32> for Tile {
    fn from(v: i32) -> Self {
        if v == 0 { Tile::Blocked } else { Tile::Open }
    }
}

impl From<Tile> for u8 {
    fn from(t: Tile) -> Self {
        match t {
            Tile::Open => 1,
            Tile::Blocked => 0,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_encoding() {
        assert_eq!(Tile::from(0u8), Tile::Blocked);
        assert_eq!(Tile::from(1u8), Tile::Open);
        assert_eq!(Tile::from(7i32), Tile::Open);
        assert_eq!(u8::from(Tile::Blocked), 0);
        assert_eq!(u8::from(Tile::Open), 1);
    }

    #[test]
    fn char_encoding() {
        assert_eq!(Tile::from_char('.'), Some(Tile::Open));
        assert_eq!(Tile::from_char('0'), Some(Tile::Blocked));
        assert_eq!(Tile::from_char(' '), Some(Tile::Open));
        assert_eq!(Tile::from_char('x'), None);
        assert_eq!(Tile::Blocked.to_string(), "#");
    }
}
