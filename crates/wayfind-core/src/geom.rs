//! Geometry primitives: [`Pos`] and [`Dims`].
//!
//! A `Pos` names a cell by `(row, col)`. Rows grow downwards and columns
//! grow to the right. `Dims` describes the rectangular extent of a grid and
//! owns the row-major mapping between positions and flat arena indices.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell coordinate. Signed so that neighbour arithmetic can step off the
/// grid and be rejected by [`Dims::contains`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by `(drow, dcol)`.
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours in search order: up, down, left, right.
    ///
    /// Some of them may lie outside any given grid.
    #[inline]
    pub const fn neighbors_4(self) -> [Pos; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub const fn manhattan(self, other: Pos) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is one of the four cardinal neighbours of `self`.
    #[inline]
    pub const fn is_adjacent(self, other: Pos) -> bool {
        self.manhattan(other) == 1
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order, matching arena layout.
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid extent: `rows` × `cols` cells, anchored at (0, 0).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: u32,
    pub cols: u32,
}

impl Dims {
    /// Largest side whose coordinates still fit in a [`Pos`].
    pub const MAX_SIDE: u32 = i32::MAX as u32;

    /// Create new dimensions.
    #[inline]
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Whether every position in the extent is representable as a [`Pos`].
    #[inline]
    pub const fn is_addressable(self) -> bool {
        self.rows <= Self::MAX_SIDE && self.cols <= Self::MAX_SIDE
    }

    /// Whether the extent holds no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub const fn contains(self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as u32) < self.rows && (p.col as u32) < self.cols
    }

    /// Convert a position to a flat row-major index. Returns `None` if out
    /// of bounds.
    #[inline]
    pub const fn index(self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols as usize + p.col as usize)
    }

    /// Convert a flat index back to a position.
    ///
    /// The result is only meaningful for `idx < self.len()` on an
    /// [addressable](Self::is_addressable) extent.
    #[inline]
    pub const fn pos(self, idx: usize) -> Pos {
        let cols = self.cols as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> DimsIter {
        DimsIter {
            dims: self,
            next: 0,
        }
    }
}

impl IntoIterator for Dims {
    type Item = Pos;
    type IntoIter = DimsIter;
    #[inline]
    fn into_iter(self) -> DimsIter {
        self.iter()
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// DimsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions of a [`Dims`].
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    next: usize,
}

impl Iterator for DimsIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.next >= self.dims.len() {
            return None;
        }
        let p = self.dims.pos(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.dims.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DimsIter {}
