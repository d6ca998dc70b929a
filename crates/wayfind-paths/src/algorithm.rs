use std::fmt;
use std::str::FromStr;

use wayfind_core::{Grid, Pos};

use crate::error::SearchError;
use crate::search::SearchRun;
use crate::{astar, dijkstra};

/// Selectable search algorithm.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::AStar];

    /// Canonical lowercase name, accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }

    /// Search between explicit endpoints.
    pub fn search(self, grid: &Grid, start: Pos, finish: Pos) -> Result<SearchRun, SearchError> {
        match self {
            Self::Dijkstra => dijkstra(grid, start, finish),
            Self::AStar => astar(grid, start, finish),
        }
    }

    /// Search from the grid's own start to its own finish.
    pub fn run(self, grid: &Grid) -> Result<SearchRun, SearchError> {
        self.search(grid, grid.start(), grid.finish())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dijkstra => f.write_str("Dijkstra's Algorithm"),
            Self::AStar => f.write_str("A* Search"),
        }
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!("Dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!("aStar".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(
            "bfs".parse::<Algorithm>(),
            Err(ParseAlgorithmError("bfs".into()))
        );
        for algo in Algorithm::ALL {
            assert_eq!(algo.name().parse::<Algorithm>(), Ok(algo));
        }
    }

    #[test]
    fn display() {
        assert_eq!(Algorithm::Dijkstra.to_string(), "Dijkstra's Algorithm");
        assert_eq!(Algorithm::AStar.to_string(), "A* Search");
    }

    #[test]
    fn run_uses_grid_endpoints() {
        let g = Grid::parse("S..\n.#.\n..F").unwrap();
        for algo in Algorithm::ALL {
            let run = algo.run(&g).unwrap();
            assert_eq!(run.start(), g.start());
            assert_eq!(run.finish(), g.finish());
            assert_eq!(run.path_cost(), Some(4));
        }
    }

    #[test]
    fn default_board_end_to_end() {
        let mut g = wayfind_core::GridConfig::default().build().unwrap();
        // Wall off the direct row between the endpoints except for one gap.
        for row in 0..22 {
            if row != 2 {
                g.toggle(Pos::new(row, 30), wayfind_core::DrawMode::Wall)
                    .unwrap();
            }
        }
        let d = Algorithm::Dijkstra.run(&g).unwrap();
        let a = Algorithm::AStar.run(&g).unwrap();
        assert_eq!(d.path_cost(), a.path_cost());
        assert!(d.path().contains(&Pos::new(2, 30)));
        assert!(a.visited_order().len() < d.visited_order().len());
    }
}
