//! The [`Grid`] type — a fixed-shape arena of [`Cell`]s.
//!
//! Cells are stored row-major in a single `Vec` and addressed by [`Pos`].
//! A grid always holds exactly one start and one finish cell; every
//! constructor and editing operation preserves that.
//!
//! Searches only ever borrow a grid immutably. Per-run state (distances,
//! visited flags, predecessor links) lives outside the grid.

use std::fmt;

use crate::cell::{Cell, CellKind, WEIGHT_COST};
use crate::error::GridError;
use crate::geom::{Dims, Pos};

/// What [`Grid::toggle`] paints onto a normal cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawMode {
    #[default]
    Wall,
    Weight,
}

impl DrawMode {
    /// The cell kind this mode paints.
    #[inline]
    pub const fn kind(self) -> CellKind {
        match self {
            Self::Wall => CellKind::Blocked,
            Self::Weight => CellKind::Weighted,
        }
    }
}

/// Reject extents and weight costs the searches cannot represent, before
/// anything is allocated.
///
/// A shortest path enters each cell at most once, so its cost is bounded by
/// `len * weight_cost`; an A* key adds at most `rows + cols` on top. Both
/// must stay strictly below `u32::MAX`, which marks unreachable cells.
fn check_shape(dims: Dims, weight_cost: u32) -> Result<(), GridError> {
    if dims.is_empty() {
        return Err(GridError::Empty);
    }
    if !dims.is_addressable() {
        return Err(GridError::TooLarge {
            rows: dims.rows as usize,
            cols: dims.cols as usize,
        });
    }
    if weight_cost < 2 {
        return Err(GridError::InvalidCost(weight_cost));
    }
    let cells = u64::from(dims.rows) * u64::from(dims.cols);
    let worst = cells
        .saturating_mul(u64::from(weight_cost))
        .saturating_add(u64::from(dims.rows) + u64::from(dims.cols));
    if worst >= u64::from(u32::MAX) {
        return Err(GridError::InvalidCost(weight_cost));
    }
    Ok(())
}

/// A rectangular grid of weighted or blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: Dims,
    cells: Vec<Cell>,
    start: Pos,
    finish: Pos,
    weight_cost: u32,
}

impl Grid {
    /// Create an all-normal grid with the given endpoints.
    pub fn new(dims: Dims, start: Pos, finish: Pos) -> Result<Self, GridError> {
        Self::with_weight_cost(dims, start, finish, WEIGHT_COST)
    }

    pub(crate) fn with_weight_cost(
        dims: Dims,
        start: Pos,
        finish: Pos,
        weight_cost: u32,
    ) -> Result<Self, GridError> {
        check_shape(dims, weight_cost)?;
        let mut kinds = vec![CellKind::Normal; dims.len()];
        let si = dims.index(start).ok_or(GridError::OutOfBounds(start))?;
        let fi = dims.index(finish).ok_or(GridError::OutOfBounds(finish))?;
        if si == fi {
            return Err(GridError::CoincidentEndpoints(start));
        }
        kinds[si] = CellKind::Start;
        kinds[fi] = CellKind::Finish;
        Self::from_kinds(dims, kinds, weight_cost)
    }

    /// Build a grid from rows of cell kinds.
    ///
    /// Rows must all have the same, non-zero width, and exactly one cell
    /// each must be [`CellKind::Start`] and [`CellKind::Finish`].
    pub fn from_rows<R: AsRef<[CellKind]>>(rows: &[R]) -> Result<Self, GridError> {
        Self::from_rows_with(rows, WEIGHT_COST)
    }

    pub(crate) fn from_rows_with<R: AsRef<[CellKind]>>(
        rows: &[R],
        weight_cost: u32,
    ) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if width == 0 {
            return Err(GridError::Empty);
        }
        let too_large = GridError::TooLarge {
            rows: rows.len(),
            cols: width,
        };
        let dims = match (u32::try_from(rows.len()), u32::try_from(width)) {
            (Ok(r), Ok(c)) => Dims::new(r, c),
            _ => return Err(too_large),
        };
        check_shape(dims, weight_cost)?;
        let mut kinds = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Jagged {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            kinds.extend_from_slice(row);
        }
        Self::from_kinds(dims, kinds, weight_cost)
    }

    /// Parse an ASCII map.
    ///
    /// `.` normal, `#` blocked, `w` weighted, `S` start, `F` finish. One
    /// line per row.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        Self::parse_with(text, WEIGHT_COST)
    }

    pub(crate) fn parse_with(text: &str, weight_cost: u32) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<CellKind>> = Vec::new();
        for (r, line) in text.lines().enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(c, ch)| {
                    CellKind::from_char(ch).ok_or(GridError::InvalidRune {
                        ch,
                        pos: Pos::new(r as i32, c as i32),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows_with(&rows, weight_cost)
    }

    fn from_kinds(dims: Dims, kinds: Vec<CellKind>, weight_cost: u32) -> Result<Self, GridError> {
        let mut start = None;
        let mut finish = None;
        let mut cells = Vec::with_capacity(kinds.len());
        for (i, kind) in kinds.into_iter().enumerate() {
            let pos = dims.pos(i);
            let slot = match kind {
                CellKind::Start => Some(&mut start),
                CellKind::Finish => Some(&mut finish),
                _ => None,
            };
            if let Some(slot) = slot {
                if let Some(first) = *slot {
                    return Err(GridError::DuplicateEndpoint {
                        kind,
                        first,
                        second: pos,
                    });
                }
                *slot = Some(pos);
            }
            cells.push(Cell::new(pos, kind, weight_cost));
        }
        Ok(Self {
            dims,
            cells,
            start: start.ok_or(GridError::MissingEndpoint(CellKind::Start))?,
            finish: finish.ok_or(GridError::MissingEndpoint(CellKind::Finish))?,
            weight_cost,
        })
    }

    /// Grid extent.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Position of the start cell.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// Position of the finish cell.
    #[inline]
    pub fn finish(&self) -> Pos {
        self.finish
    }

    /// Cost of entering a weighted cell on this grid.
    #[inline]
    pub fn weight_cost(&self) -> u32 {
        self.weight_cost
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.dims.contains(p)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<&Cell> {
        self.dims.index(p).map(|i| &self.cells[i])
    }

    /// The cell at flat index `idx`. Panics if `idx` is out of range.
    #[inline]
    pub fn at_index(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Kind of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn kind(&self, p: Pos) -> Option<CellKind> {
        self.at(p).map(|c| c.kind)
    }

    /// In-bounds cardinal neighbours of `p`, in the order up, down, left,
    /// right. Blocked cells are included; callers filter them.
    pub fn neighbors(&self, p: Pos) -> impl Iterator<Item = Pos> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter(move |&q| self.dims.contains(q))
    }

    /// Row-major iterator over all cells.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    fn index_of(&self, p: Pos) -> Result<usize, GridError> {
        self.dims.index(p).ok_or(GridError::OutOfBounds(p))
    }

    fn set_kind(&mut self, idx: usize, kind: CellKind) {
        let pos = self.dims.pos(idx);
        self.cells[idx] = Cell::new(pos, kind, self.weight_cost);
    }

    /// Toggle an obstacle at `p` and return the cell's new kind.
    ///
    /// Walls and weights are cleared back to normal; a normal cell takes the
    /// kind painted by `mode`.
    pub fn toggle(&mut self, p: Pos, mode: DrawMode) -> Result<CellKind, GridError> {
        let idx = self.index_of(p)?;
        let kind = match self.cells[idx].kind {
            CellKind::Start | CellKind::Finish => return Err(GridError::EndpointCell(p)),
            CellKind::Blocked | CellKind::Weighted => CellKind::Normal,
            CellKind::Normal => mode.kind(),
        };
        self.set_kind(idx, kind);
        log::trace!("toggle {p}: now {kind}");
        Ok(kind)
    }

    /// Move the start cell to `p`. The old start becomes normal.
    pub fn move_start(&mut self, p: Pos) -> Result<(), GridError> {
        self.start = self.move_endpoint(self.start, p, CellKind::Start)?;
        Ok(())
    }

    /// Move the finish cell to `p`. The old finish becomes normal.
    pub fn move_finish(&mut self, p: Pos) -> Result<(), GridError> {
        self.finish = self.move_endpoint(self.finish, p, CellKind::Finish)?;
        Ok(())
    }

    fn move_endpoint(&mut self, from: Pos, to: Pos, kind: CellKind) -> Result<Pos, GridError> {
        let to_idx = self.index_of(to)?;
        if to == from {
            return Ok(from);
        }
        let occupant = self.cells[to_idx].kind;
        if occupant != CellKind::Normal {
            return Err(GridError::Occupied {
                pos: to,
                kind: occupant,
            });
        }
        let from_idx = self.index_of(from)?;
        self.set_kind(from_idx, CellKind::Normal);
        self.set_kind(to_idx, kind);
        log::trace!("move {kind} {from} -> {to}");
        Ok(to)
    }

    /// Turn every blocked and weighted cell back into a normal cell.
    pub fn clear_obstacles(&mut self) {
        for idx in 0..self.cells.len() {
            if matches!(self.cells[idx].kind, CellKind::Blocked | CellKind::Weighted) {
                self.set_kind(idx, CellKind::Normal);
            }
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes the map in the format accepted by [`Grid::parse`].
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.dims.cols as usize).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.kind.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    weight_cost: u32,
    map: String,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr {
            weight_cost: self.weight_cost,
            map: self.to_string(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GridRepr::deserialize(deserializer)?;
        Grid::parse_with(&repr.map, repr.weight_cost).map_err(serde::de::Error::custom)
    }
}
