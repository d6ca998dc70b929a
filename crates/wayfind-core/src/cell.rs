//! The [`Cell`] type — one addressable grid position with its terrain.

use std::fmt;

use crate::geom::Pos;

/// Cost of entering a normal, start or finish cell.
pub const NORMAL_COST: u32 = 1;

/// Default cost of entering a weighted cell.
pub const WEIGHT_COST: u32 = 10;

/// What occupies a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Normal,
    Start,
    Finish,
    /// A wall. Never entered or expanded.
    Blocked,
    /// Passable, but costs more to enter than a normal cell.
    Weighted,
}

impl CellKind {
    /// Whether this is the start or finish marker.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::Finish)
    }

    /// The ASCII character used by [`Grid::parse`](crate::Grid::parse).
    pub const fn to_char(self) -> char {
        match self {
            Self::Normal => '.',
            Self::Start => 'S',
            Self::Finish => 'F',
            Self::Blocked => '#',
            Self::Weighted => 'w',
        }
    }

    /// Inverse of [`to_char`](Self::to_char).
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Normal),
            'S' => Some(Self::Start),
            'F' => Some(Self::Finish),
            '#' => Some(Self::Blocked),
            'w' => Some(Self::Weighted),
            _ => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Start => "start",
            Self::Finish => "finish",
            Self::Blocked => "blocked",
            Self::Weighted => "weighted",
        };
        f.write_str(name)
    }
}

/// A grid cell. `pos` is fixed when the grid is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Pos,
    pub kind: CellKind,
    cost: u32,
}

impl Cell {
    /// Create a cell. `weight_cost` is only used when `kind` is
    /// [`CellKind::Weighted`].
    #[inline]
    pub const fn new(pos: Pos, kind: CellKind, weight_cost: u32) -> Self {
        let cost = match kind {
            CellKind::Weighted => weight_cost,
            _ => NORMAL_COST,
        };
        Self { pos, kind, cost }
    }

    /// Whether the cell is a wall.
    #[inline]
    pub const fn is_blocked(&self) -> bool {
        matches!(self.kind, CellKind::Blocked)
    }

    /// Cost of entering this cell, or `None` for a blocked cell.
    #[inline]
    pub const fn traversal_cost(&self) -> Option<u32> {
        if self.is_blocked() {
            None
        } else {
            Some(self.cost)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_by_kind() {
        let p = Pos::ZERO;
        assert_eq!(Cell::new(p, CellKind::Normal, 10).traversal_cost(), Some(1));
        assert_eq!(Cell::new(p, CellKind::Start, 10).traversal_cost(), Some(1));
        assert_eq!(Cell::new(p, CellKind::Finish, 10).traversal_cost(), Some(1));
        assert_eq!(Cell::new(p, CellKind::Weighted, 10).traversal_cost(), Some(10));
        assert_eq!(Cell::new(p, CellKind::Weighted, 4).traversal_cost(), Some(4));
        assert_eq!(Cell::new(p, CellKind::Blocked, 10).traversal_cost(), None);
    }

    #[test]
    fn char_mapping() {
        for kind in [
            CellKind::Normal,
            CellKind::Start,
            CellKind::Finish,
            CellKind::Blocked,
            CellKind::Weighted,
        ] {
            assert_eq!(CellKind::from_char(kind.to_char()), Some(kind));
        }
        assert_eq!(CellKind::from_char('x'), None);
    }
}
