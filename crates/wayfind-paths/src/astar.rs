use wayfind_core::{Grid, Pos};

use crate::error::SearchError;
use crate::heuristic::Manhattan;
use crate::search::{SearchRun, search_with};

/// A* search from `start` to `finish` guided by the Manhattan distance.
///
/// Same relaxation, visited marking and termination as
/// [`dijkstra`](crate::dijkstra); only the frontier key differs
/// (`distance + manhattan(cell, finish)`). The path cost always matches
/// Dijkstra's, usually after fewer expansions.
pub fn astar(grid: &Grid, start: Pos, finish: Pos) -> Result<SearchRun, SearchError> {
    search_with(grid, start, finish, Manhattan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra;
    use wayfind_core::Dims;

    fn p(row: i32, col: i32) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn open_three_by_three() {
        let g = Grid::new(Dims::new(3, 3), p(0, 0), p(2, 2)).unwrap();
        let run = astar(&g, g.start(), g.finish()).unwrap();
        let path = run.path();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&p(0, 0)));
        assert_eq!(path.last(), Some(&p(2, 2)));
        assert_eq!(run.path_cost(), Some(4));
    }

    #[test]
    fn straight_corridor_expands_only_the_line() {
        let g = Grid::new(Dims::new(5, 5), p(2, 0), p(2, 4)).unwrap();
        let a = astar(&g, g.start(), g.finish()).unwrap();
        assert_eq!(
            a.visited_order(),
            &[p(2, 0), p(2, 1), p(2, 2), p(2, 3), p(2, 4)]
        );
        let d = dijkstra(&g, g.start(), g.finish()).unwrap();
        assert!(d.visited_order().len() > a.visited_order().len());
        assert_eq!(d.path_cost(), a.path_cost());
    }

    #[test]
    fn detours_around_weight() {
        let g = Grid::parse("SwF\n...").unwrap();
        let run = astar(&g, g.start(), g.finish()).unwrap();
        assert_eq!(run.path(), vec![p(0, 0), p(1, 0), p(1, 1), p(1, 2), p(0, 2)]);
        assert_eq!(run.path_cost(), Some(4));
    }

    #[test]
    fn wall_splits_grid() {
        let g = Grid::parse(
            "\
S.#..
..#.F
..#..",
        )
        .unwrap();
        let run = astar(&g, g.start(), g.finish()).unwrap();
        assert!(!run.found());
        assert!(run.path().is_empty());
        assert_eq!(run.visited_order().len(), 6);
    }

    #[test]
    fn maze() {
        let g = Grid::parse(
            "\
S.#.....
.##.###.
....#F#.
.####.#.
......#.",
        )
        .unwrap();
        let a = astar(&g, g.start(), g.finish()).unwrap();
        let d = dijkstra(&g, g.start(), g.finish()).unwrap();
        assert!(a.found());
        assert_eq!(a.path_cost(), d.path_cost());
        assert_eq!(a.path_cost(), Some(a.path().len() as u32 - 1));
    }
}
