use wayfind_core::Pos;

/// Estimate of the remaining cost from a cell to the goal.
///
/// The frontier orders cells by `distance + estimate`. Implementations must
/// never overestimate the true cost (admissible) and must satisfy
/// `estimate(a) <= cost(a -> b) + estimate(b)` for adjacent cells
/// (consistent), so that the first extraction of a cell is final.
pub trait Heuristic {
    /// Heuristic estimate of the cost from `from` to `to`.
    fn estimate(&self, from: Pos, to: Pos) -> u32;

    /// Short name used in log output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Zero estimate. Turns the search into Dijkstra's uniform-cost search.
#[derive(Copy, Clone, Debug, Default)]
pub struct Uniform;

impl Heuristic for Uniform {
    #[inline]
    fn estimate(&self, _from: Pos, _to: Pos) -> u32 {
        0
    }

    fn name(&self) -> &'static str {
        "dijkstra"
    }
}

/// Manhattan (L1) distance. Consistent on 4-connected grids where every
/// step costs at least 1.
#[derive(Copy, Clone, Debug, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Pos, to: Pos) -> u32 {
        from.manhattan(to)
    }

    fn name(&self) -> &'static str {
        "astar"
    }
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    #[inline]
    fn estimate(&self, from: Pos, to: Pos) -> u32 {
        (**self).estimate(from, to)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
