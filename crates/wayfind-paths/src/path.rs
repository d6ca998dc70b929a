//! Shortest-path reconstruction from predecessor links.

use wayfind_core::Pos;

use crate::scratch::Scratch;

/// Walk predecessor links back from `finish` and return the chain ordered
/// start → finish.
///
/// The walk stops at the first cell without a predecessor. If `finish`
/// itself has none the result is `[finish]`; an out-of-bounds `finish`
/// yields an empty vector. Use [`SearchRun::path`](crate::SearchRun::path)
/// to get an empty path for an unreachable goal.
///
/// The walk is capped at the grid's cell count.
pub fn reconstruct(scratch: &Scratch, finish: Pos) -> Vec<Pos> {
    let dims = scratch.dims();
    let Some(mut idx) = dims.index(finish) else {
        return Vec::new();
    };
    let limit = dims.len();
    let mut path = vec![finish];
    while let Some(parent) = scratch.parent(idx) {
        if path.len() >= limit {
            log::warn!("predecessor chain from {finish} exceeds {limit} cells, truncating");
            break;
        }
        path.push(dims.pos(parent));
        idx = parent;
    }
    path.reverse();
    path
}
