use std::fmt;

use wayfind_core::{CellKind, Pos};

/// Which endpoint a [`SearchError`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Finish,
}

impl Endpoint {
    /// The cell kind an endpoint of this role must carry.
    pub const fn kind(self) -> CellKind {
        match self {
            Self::Start => CellKind::Start,
            Self::Finish => CellKind::Finish,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Finish => f.write_str("finish"),
        }
    }
}

/// Why an endpoint was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndpointIssue {
    OutOfBounds,
    /// The cell exists but carries the wrong kind.
    WrongKind(CellKind),
}

/// Errors that can occur when starting a search.
///
/// An unreachable finish is not an error; it shows up as an empty path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    InvalidEndpoint {
        role: Endpoint,
        pos: Pos,
        reason: EndpointIssue,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint { role, pos, reason } => match reason {
                EndpointIssue::OutOfBounds => {
                    write!(f, "search: {role} {pos} is out of bounds")
                }
                EndpointIssue::WrongKind(kind) => {
                    write!(f, "search: {role} {pos} is a {kind} cell")
                }
            },
        }
    }
}

impl std::error::Error for SearchError {}
