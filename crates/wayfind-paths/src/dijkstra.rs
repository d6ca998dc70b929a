use wayfind_core::{Grid, Pos};

use crate::error::SearchError;
use crate::heuristic::Uniform;
use crate::search::{SearchRun, search_with};

/// Uniform-cost search from `start` to `finish`.
///
/// Cells are expanded in order of their cost from the start, earliest
/// inserted first on ties. Expansion stops once `finish` is extracted; if
/// it is unreachable every cell reachable from `start` is visited.
pub fn dijkstra(grid: &Grid, start: Pos, finish: Pos) -> Result<SearchRun, SearchError> {
    search_with(grid, start, finish, Uniform)
}
