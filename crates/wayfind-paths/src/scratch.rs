use wayfind_core::{Dims, Pos};

/// Sentinel distance meaning "not reached".
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Internal per-cell search state
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) distance: u32,
    pub(crate) visited: bool,
    pub(crate) parent: Option<usize>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            distance: UNREACHABLE,
            visited: false,
            parent: None,
        }
    }
}

/// Per-run search state for every cell of a grid: tentative distance,
/// visited flag and predecessor link.
///
/// A `Scratch` belongs to one search call; the grid it describes is never
/// written to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scratch {
    dims: Dims,
    pub(crate) nodes: Vec<Node>,
}

impl Scratch {
    /// Fresh state for a grid of the given extent.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            nodes: vec![Node::default(); dims.len()],
        }
    }

    /// Grid extent this state covers.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Restore every cell to distance [`UNREACHABLE`], not visited, no
    /// predecessor.
    pub fn reset(&mut self) {
        for n in self.nodes.iter_mut() {
            *n = Node::default();
        }
    }

    /// Best known cost from the start to `p`, or [`UNREACHABLE`].
    #[inline]
    pub fn distance(&self, p: Pos) -> u32 {
        match self.dims.index(p) {
            Some(i) => self.nodes[i].distance,
            None => UNREACHABLE,
        }
    }

    /// Whether `p` was expanded.
    #[inline]
    pub fn is_visited(&self, p: Pos) -> bool {
        self.dims.index(p).is_some_and(|i| self.nodes[i].visited)
    }

    /// The cell `p` was reached from.
    #[inline]
    pub fn predecessor(&self, p: Pos) -> Option<Pos> {
        let i = self.dims.index(p)?;
        self.parent(i).map(|j| self.dims.pos(j))
    }

    #[inline]
    pub(crate) fn parent(&self, idx: usize) -> Option<usize> {
        self.nodes[idx].parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state() {
        let s = Scratch::new(Dims::new(2, 3));
        for p in Dims::new(2, 3) {
            assert_eq!(s.distance(p), UNREACHABLE);
            assert!(!s.is_visited(p));
            assert_eq!(s.predecessor(p), None);
        }
        assert_eq!(s.distance(Pos::new(5, 5)), UNREACHABLE);
        assert!(!s.is_visited(Pos::new(-1, 0)));
    }

    #[test]
    fn reset_clears_every_field() {
        let mut s = Scratch::new(Dims::new(2, 2));
        s.nodes[3] = Node {
            distance: 2,
            visited: true,
            parent: Some(1),
        };
        assert_eq!(s.predecessor(Pos::new(1, 1)), Some(Pos::new(0, 1)));
        s.reset();
        assert_eq!(s, Scratch::new(Dims::new(2, 2)));
    }
}
