//! Grid construction settings.

use crate::cell::WEIGHT_COST;
use crate::error::GridError;
use crate::geom::{Dims, Pos};
use crate::grid::Grid;

/// Configuration for building a [`Grid`].
///
/// The defaults describe the 22×58 board with the start and finish halfway
/// down, a little in from the left and right edges.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// Number of rows and columns.
    pub dims: Dims,
    /// Initial start position.
    pub start: Pos,
    /// Initial finish position.
    pub finish: Pos,
    /// Cost of entering a weighted cell. Must be at least 2, and small
    /// enough that `rows * cols * weight_cost + rows + cols < u32::MAX`.
    pub weight_cost: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dims: Dims::new(22, 58),
            start: Pos::new(11, 14),
            finish: Pos::new(11, 45),
            weight_cost: WEIGHT_COST,
        }
    }
}

impl GridConfig {
    /// Set the grid extent (builder).
    pub fn with_dims(mut self, rows: u32, cols: u32) -> Self {
        self.dims = Dims::new(rows, cols);
        self
    }

    /// Set the start position (builder).
    pub fn with_start(mut self, start: Pos) -> Self {
        self.start = start;
        self
    }

    /// Set the finish position (builder).
    pub fn with_finish(mut self, finish: Pos) -> Self {
        self.finish = finish;
        self
    }

    /// Set the weighted-cell cost (builder).
    pub fn with_weight_cost(mut self, cost: u32) -> Self {
        self.weight_cost = cost;
        self
    }

    /// Build an all-normal grid with the configured extent and endpoints.
    pub fn build(&self) -> Result<Grid, GridError> {
        Grid::with_weight_cost(self.dims, self.start, self.finish, self.weight_cost)
    }

    /// Parse an ASCII map using the configured weight cost.
    ///
    /// The extent and endpoints come from the map itself.
    pub fn parse(&self, text: &str) -> Result<Grid, GridError> {
        Grid::parse_with(text, self.weight_cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellKind;

    #[test]
    fn default_board() {
        let g = GridConfig::default().build().unwrap();
        assert_eq!(g.dims(), Dims::new(22, 58));
        assert_eq!(g.start(), Pos::new(11, 14));
        assert_eq!(g.finish(), Pos::new(11, 45));
        assert_eq!(g.weight_cost(), 10);
    }

    #[test]
    fn builder_overrides() {
        let g = GridConfig::default()
            .with_dims(4, 4)
            .with_start(Pos::new(0, 0))
            .with_finish(Pos::new(3, 3))
            .with_weight_cost(5)
            .build()
            .unwrap();
        assert_eq!(g.dims(), Dims::new(4, 4));
        assert_eq!(g.kind(Pos::new(3, 3)), Some(CellKind::Finish));
        assert_eq!(g.weight_cost(), 5);
    }

    #[test]
    fn parse_uses_weight_cost() {
        let g = GridConfig::default()
            .with_weight_cost(3)
            .parse("Sw.\n..F")
            .unwrap();
        assert_eq!(g.at(Pos::new(0, 1)).and_then(|c| c.traversal_cost()), Some(3));
    }

    #[test]
    fn start_outside_default_board_rejected() {
        let cfg = GridConfig::default().with_dims(5, 5);
        assert_eq!(cfg.build(), Err(GridError::OutOfBounds(Pos::new(11, 14))));
    }

    #[test]
    fn weight_cost_must_exceed_normal() {
        let cfg = GridConfig::default().with_weight_cost(1);
        assert_eq!(cfg.build(), Err(GridError::InvalidCost(1)));
    }

    #[test]
    fn weight_cost_must_fit_path_sums() {
        let cfg = GridConfig::default().with_weight_cost(u32::MAX);
        assert_eq!(cfg.parse("SwF"), Err(GridError::InvalidCost(u32::MAX)));
        assert_eq!(cfg.build(), Err(GridError::InvalidCost(u32::MAX)));
        let cfg = GridConfig::default().with_weight_cost(u32::MAX / 2);
        assert_eq!(cfg.parse("SwwF"), Err(GridError::InvalidCost(u32::MAX / 2)));
    }
}
