//! Errors raised while building or editing a [`Grid`](crate::Grid).

use std::fmt;

use crate::cell::CellKind;
use crate::geom::Pos;

/// Errors that can occur when constructing or editing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input has no rows or no columns.
    Empty,
    /// A side exceeds [`Dims::MAX_SIDE`](crate::Dims::MAX_SIDE).
    TooLarge { rows: usize, cols: usize },
    /// A row's width differs from the first row's.
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the map alphabet was found.
    InvalidRune { ch: char, pos: Pos },
    /// No cell carries the given endpoint kind.
    MissingEndpoint(CellKind),
    /// More than one cell carries the given endpoint kind.
    DuplicateEndpoint {
        kind: CellKind,
        first: Pos,
        second: Pos,
    },
    /// A position lies outside the grid.
    OutOfBounds(Pos),
    /// Start and finish were given the same position.
    CoincidentEndpoints(Pos),
    /// The start or finish cell cannot be toggled.
    EndpointCell(Pos),
    /// An endpoint cannot be moved onto an occupied cell.
    Occupied { pos: Pos, kind: CellKind },
    /// Weighted cells must cost more than a normal cell, and a path made
    /// only of weighted cells must still have a finite `u32` cost.
    InvalidCost(u32),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::TooLarge { rows, cols } => {
                write!(f, "grid: {rows}x{cols} exceeds the addressable size")
            }
            Self::Jagged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingEndpoint(kind) => write!(f, "grid: no {kind} cell"),
            Self::DuplicateEndpoint {
                kind,
                first,
                second,
            } => write!(f, "grid: duplicate {kind} cell at {first} and {second}"),
            Self::OutOfBounds(pos) => write!(f, "grid: {pos} is out of bounds"),
            Self::CoincidentEndpoints(pos) => {
                write!(f, "grid: start and finish both at {pos}")
            }
            Self::EndpointCell(pos) => write!(f, "grid: cannot toggle endpoint at {pos}"),
            Self::Occupied { pos, kind } => {
                write!(f, "grid: cannot move endpoint onto {kind} cell at {pos}")
            }
            Self::InvalidCost(cost) => {
                write!(
                    f,
                    "grid: weight cost {cost} must be at least 2 and keep path costs below u32::MAX"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
