//! **wayfind-core** — weighted grid model for the *wayfind* pathfinding
//! engine.
//!
//! This crate provides the types shared by the search algorithms: geometry
//! primitives, cells with traversal costs, an arena-backed grid with
//! editing operations, grid configuration, and construction errors.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellKind, NORMAL_COST, WEIGHT_COST};
pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Dims, DimsIter, Pos};
pub use grid::{DrawMode, Grid};
