use grid_util::point::Point;

use crate::{
    pathing_grid::PathingGrid,
    solver::{Algorithm, GridSolver},
};

/// Depth-first search with an explicit stack. Like [BfsSolver](super::bfs::BfsSolver) it marks
/// cells visited when they are pushed; the last neighbour pushed is explored first, so paths are
/// connected but usually not shortest.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn explore(&self, grid: &mut PathingGrid, start: Point, end: Point) -> Vec<Point> {
        let mut visited = Vec::new();
        let mut stack = vec![start];
        grid.node_mut(start).discover(0, None);
        while let Some(current) = stack.pop() {
            if grid.node(current).is_wall() {
                continue;
            }
            visited.push(current);
            if current == end {
                break;
            }
            let distance = grid.node(current).distance() + 1;
            for neighbour in grid.neighbors(current) {
                grid.node_mut(neighbour).discover(distance, Some(current));
                stack.push(neighbour);
            }
        }
        visited
    }
}
