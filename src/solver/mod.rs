use crate::{error::GridError, pathing_grid::PathingGrid, reconstruct_path};
use core::fmt;
use grid_util::point::Point;
use log::debug;
use std::str::FromStr;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

/// A search strategy over a [PathingGrid]. Implementations only differ in the order in which
/// they expand cells; they all write visitation, distance and predecessor state onto the grid's
/// nodes as they go.
pub trait GridSolver {
    fn algorithm(&self) -> Algorithm;

    /// Runs the search on a grid whose traversal state is already reset and returns the cells
    /// in the order they were expanded.
    fn explore(&self, grid: &mut PathingGrid, start: Point, end: Point) -> Vec<Point>;

    /// Checks the endpoints, clears the traversal state left by earlier searches and runs
    /// [explore](Self::explore). The predecessor links written onto `grid` can be turned into a
    /// path with [reconstruct_path].
    fn search(
        &self,
        grid: &mut PathingGrid,
        start: Point,
        end: Point,
    ) -> Result<Vec<Point>, GridError> {
        grid.check_endpoint(start)?;
        grid.check_endpoint(end)?;
        grid.reset_traversal();
        debug!("{} search from {} to {}", self.algorithm(), start, end);
        let visited = self.explore(grid, start, end);
        debug!("{} expanded {} cells", self.algorithm(), visited.len());
        Ok(visited)
    }

    /// Searches from the grid's start to its end on a copy of the grid, leaving `grid` untouched.
    fn solve(&self, grid: &PathingGrid) -> Result<SearchOutcome, GridError> {
        let mut scratch = grid.clone();
        let (start, end) = (grid.start(), grid.end());
        let visited = self.search(&mut scratch, start, end)?;
        let path = reconstruct_path(&scratch, end);
        let path = (path.first() == Some(&start)).then_some(path);
        if path.is_none() {
            debug!("{} found no path from {} to {}", self.algorithm(), start, end);
        }
        Ok(SearchOutcome {
            algorithm: self.algorithm(),
            visited,
            path,
        })
    }
}

/// The result of [GridSolver::solve]: everything a visualiser needs to replay a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    /// Cells in the order they were expanded.
    pub visited: Vec<Point>,
    /// The route from start to end, both included. [None] if the end cannot be reached.
    pub path: Option<Vec<Point>>,
}

impl SearchOutcome {
    pub fn found_path(&self) -> bool {
        self.path.is_some()
    }
    /// Number of cells on the path.
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

/// Solves the same grid with each of the given algorithms, every one on its own copy.
pub fn compare(
    grid: &PathingGrid,
    algorithms: &[Algorithm],
) -> Result<Vec<SearchOutcome>, GridError> {
    algorithms
        .iter()
        .map(|algorithm| algorithm.solver().solve(grid))
        .collect()
}

/// The available search strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    #[default]
    Dijkstra,
    Astar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::Astar,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// A solver with default settings.
    pub fn solver(self) -> Box<dyn GridSolver> {
        match self {
            Algorithm::Bfs => Box::new(BfsSolver),
            Algorithm::Dfs => Box::new(DfsSolver),
            Algorithm::Dijkstra => Box::new(DijkstraSolver),
            Algorithm::Astar => Box::new(AstarSolver::new()),
        }
    }

    /// One-line summary for user interfaces.
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra: Weighted, guarantees shortest path.",
            Algorithm::Astar => "A*: Weighted, faster using heuristics.",
            Algorithm::Bfs => "BFS: Unweighted, guarantees shortest path.",
            Algorithm::Dfs => "DFS: Unweighted, may not give shortest path.",
        }
    }

    /// Whether the paths found are guaranteed to be shortest.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Astar => "A*",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::Astar),
            _ => Err(GridError::UnknownAlgorithm(s.to_owned())),
        }
    }
}
