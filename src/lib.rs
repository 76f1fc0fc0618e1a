//! # grid_search
//!
//! Step-by-step search on a 4-connected grid for pathfinding visualisers. The four solvers in
//! [solver] ([breadth-first](solver::bfs), [depth-first](solver::dfs),
//! [Dijkstra](solver::dijkstra) and [A*](solver::astar)) share the [solver::GridSolver] contract:
//! they expand cells of a [PathingGrid] in a deterministic order, return that order as a trace to
//! be replayed, and leave predecessor links on the grid from which [reconstruct_path] recovers
//! the route. All moves have unit cost and diagonal moves are not allowed.
//!
//! ```
//! use grid_search::{cell, solver::Algorithm, PathingGrid};
//!
//! let grid: PathingGrid = "S.#.\n..#.\n...E".parse().unwrap();
//! let outcome = Algorithm::Bfs.solver().solve(&grid).unwrap();
//! assert_eq!(outcome.path_len(), Some(6));
//! assert_eq!(outcome.visited[0], cell(0, 0));
//! ```
pub mod error;
mod frontier;
pub mod node;
pub mod pathing_grid;
pub mod solver;

pub use error::GridError;
pub use node::{Node, UNREACHABLE};
pub use pathing_grid::PathingGrid;

use grid_util::point::Point;

/// Rows of the [default](PathingGrid::default) board.
pub const DEFAULT_ROWS: usize = 20;
/// Columns of the [default](PathingGrid::default) board.
pub const DEFAULT_COLS: usize = 50;
/// Start cell of the default board as `(row, col)`.
pub const DEFAULT_START: (usize, usize) = (5, 5);
/// End cell of the default board as `(row, col)`.
pub const DEFAULT_END: (usize, usize) = (15, 35);

/// The [Point] of the cell at `row` and `col`.
///
/// # Panics
///
/// If `row` or `col` exceeds [i32::MAX].
pub fn cell(row: usize, col: usize) -> Point {
    match (i32::try_from(col), i32::try_from(row)) {
        (Ok(x), Ok(y)) => Point::new(x, y),
        _ => panic!("cell ({row}, {col}) does not fit an i32 coordinate"),
    }
}

/// Follows the predecessor links a search left on the grid from `end` back to the node without
/// a predecessor and returns the cells from there to `end`. If `end` was never reached this is
/// just `[end]`, so a single-cell result for an `end` other than the start means there is no
/// path. An `end` outside the grid gives an empty path.
pub fn reconstruct_path(grid: &PathingGrid, end: Point) -> Vec<Point> {
    let mut path: Vec<Point> = std::iter::successors(grid.get(end).map(|_| end), |p| {
        grid.node(*p).previous()
    })
    .collect();
    path.reverse();
    path
}
