use wayfind_core::{Grid, Pos};

use crate::error::{Endpoint, EndpointIssue, SearchError};
use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::path::reconstruct;
use crate::scratch::{Scratch, UNREACHABLE};

/// What a presentation layer needs from a finished search: the expansion
/// order, the start → finish path (empty if unreachable) and its cost.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub visited: Vec<Pos>,
    pub path: Vec<Pos>,
    pub cost: Option<u32>,
}

/// Result of one search over a grid.
///
/// Owns the run's [`Scratch`] state, so it can be queried at any time
/// after the search without touching the grid.
#[derive(Clone, Debug)]
pub struct SearchRun {
    start: Pos,
    finish: Pos,
    visited: Vec<Pos>,
    scratch: Scratch,
}

impl SearchRun {
    /// Start position of the run.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// Finish position of the run.
    #[inline]
    pub fn finish(&self) -> Pos {
        self.finish
    }

    /// Cells in the order they were expanded, start first. Ends with the
    /// finish when it was reached.
    #[inline]
    pub fn visited_order(&self) -> &[Pos] {
        &self.visited
    }

    /// Whether the finish was reached.
    #[inline]
    pub fn found(&self) -> bool {
        self.scratch.is_visited(self.finish)
    }

    /// Shortest path ordered start → finish, or empty if the finish was not
    /// reached.
    pub fn path(&self) -> Vec<Pos> {
        if !self.found() {
            return Vec::new();
        }
        reconstruct(&self.scratch, self.finish)
    }

    /// Sum of entry costs along [`path`](Self::path), excluding the start.
    pub fn path_cost(&self) -> Option<u32> {
        self.found().then(|| self.scratch.distance(self.finish))
    }

    /// Best known cost from the start to `p`.
    #[inline]
    pub fn distance(&self, p: Pos) -> u32 {
        self.scratch.distance(p)
    }

    /// The cell `p` was reached from.
    #[inline]
    pub fn predecessor(&self, p: Pos) -> Option<Pos> {
        self.scratch.predecessor(p)
    }

    /// Whether `p` was expanded.
    #[inline]
    pub fn is_visited(&self, p: Pos) -> bool {
        self.scratch.is_visited(p)
    }

    /// The run's per-cell state.
    #[inline]
    pub fn scratch(&self) -> &Scratch {
        &self.scratch
    }

    /// Package the expansion order and path.
    pub fn into_route(self) -> Route {
        let path = self.path();
        let cost = self.path_cost();
        Route {
            visited: self.visited,
            path,
            cost,
        }
    }
}

fn check_endpoint(grid: &Grid, role: Endpoint, pos: Pos) -> Result<usize, SearchError> {
    let invalid = |reason| SearchError::InvalidEndpoint { role, pos, reason };
    let idx = grid
        .dims()
        .index(pos)
        .ok_or(invalid(EndpointIssue::OutOfBounds))?;
    let kind = grid.at_index(idx).kind;
    if kind != role.kind() {
        return Err(invalid(EndpointIssue::WrongKind(kind)));
    }
    Ok(idx)
}

/// Best-first search from `start` to `finish`, ordering the frontier by
/// `distance + heuristic.estimate(cell, finish)`.
///
/// Each extracted cell is marked visited and appended to the visitation
/// order; the search stops as soon as `finish` is extracted. Equal keys are
/// expanded in insertion order, so runs are deterministic.
///
/// `start` and `finish` must be the grid's start and finish cells.
pub fn search_with<H: Heuristic>(
    grid: &Grid,
    start: Pos,
    finish: Pos,
    heuristic: H,
) -> Result<SearchRun, SearchError> {
    let si = check_endpoint(grid, Endpoint::Start, start)?;
    let fi = check_endpoint(grid, Endpoint::Finish, finish)?;

    let dims = grid.dims();
    let mut scratch = Scratch::new(dims);
    let mut frontier = Frontier::new(dims.len());
    let mut visited = Vec::new();

    scratch.nodes[si].distance = 0;
    frontier.insert_or_update(si, heuristic.estimate(start, finish));

    while let Some((ui, key)) = frontier.extract_min() {
        let cell = grid.at_index(ui);
        if cell.is_blocked() {
            continue;
        }
        let u = cell.pos;
        scratch.nodes[ui].visited = true;
        visited.push(u);
        log::trace!("{}: expand {u} key {key}", heuristic.name());
        if ui == fi {
            break;
        }

        let du = scratch.nodes[ui].distance;
        for v in grid.neighbors(u) {
            let Some(vi) = dims.index(v) else {
                continue;
            };
            let Some(cost) = grid.at_index(vi).traversal_cost() else {
                continue;
            };
            let node = &mut scratch.nodes[vi];
            if node.visited {
                continue;
            }
            let candidate = du.saturating_add(cost);
            if candidate < node.distance {
                node.distance = candidate;
                node.parent = Some(ui);
                let f = candidate.saturating_add(heuristic.estimate(v, finish));
                frontier.insert_or_update(vi, f);
            }
        }
    }

    let cost = scratch.nodes[fi].distance;
    if scratch.nodes[fi].visited {
        log::debug!(
            "{}: {start} -> {finish} cost {cost}, visited {} of {} cells",
            heuristic.name(),
            visited.len(),
            dims.len()
        );
    } else {
        debug_assert_eq!(cost, UNREACHABLE);
        log::debug!(
            "{}: {finish} unreachable from {start}, visited {} of {} cells",
            heuristic.name(),
            visited.len(),
            dims.len()
        );
    }

    Ok(SearchRun {
        start,
        finish,
        visited,
        scratch,
    })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let g = Grid::parse("S.w\n..F").unwrap();
        let route = search_with(&g, g.start(), g.finish(), crate::Manhattan)
            .unwrap()
            .into_route();
        let json = serde_json::to_string(&route).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(route, back);
    }
}
