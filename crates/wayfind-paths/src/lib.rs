//! Shortest-path search on weighted grids, with traversal tracing.
//!
//! This crate runs two searches over a [`wayfind_core::Grid`]:
//!
//! - **Dijkstra** uniform-cost search ([`dijkstra`])
//! - **A\*** informed search with a Manhattan heuristic ([`astar`])
//!
//! Both return a [`SearchRun`] that records the order in which cells were
//! expanded and can rebuild the shortest path from the finish back to the
//! start ([`SearchRun::path`], [`reconstruct`]). Unreachable goals are not
//! errors: the run simply reports an empty path.
//!
//! The grid is only borrowed. Each run owns its own [`Scratch`] state and
//! [`Frontier`], so any number of searches can share one grid.
//!
//! # Building blocks
//!
//! | Item | Role |
//! |---|---|
//! | [`Frontier`] | indexed min-heap, FIFO on equal keys |
//! | [`Scratch`] | per-run distance / visited / predecessor map |
//! | [`Heuristic`] | frontier bias; [`Uniform`] for Dijkstra, [`Manhattan`] for A* |
//! | [`search_with`] | the shared best-first loop |
//! | [`Algorithm`] | runtime selection between the two searches |

mod algorithm;
mod astar;
mod dijkstra;
mod error;
mod frontier;
mod heuristic;
mod path;
mod scratch;
mod search;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::astar;
pub use dijkstra::dijkstra;
pub use error::{Endpoint, EndpointIssue, SearchError};
pub use frontier::Frontier;
pub use heuristic::{Heuristic, Manhattan, Uniform};
pub use path::reconstruct;
pub use scratch::{Scratch, UNREACHABLE};
pub use search::{Route, SearchRun, search_with};
