use std::collections::VecDeque;

use grid_util::point::Point;

use crate::{
    pathing_grid::PathingGrid,
    solver::{Algorithm, GridSolver},
};

/// Breadth-first search. Cells are marked visited when they are queued, so each cell enters the
/// queue at most once and the first predecessor recorded is final.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn explore(&self, grid: &mut PathingGrid, start: Point, end: Point) -> Vec<Point> {
        let mut visited = Vec::new();
        let mut queue = VecDeque::from([start]);
        grid.node_mut(start).discover(0, None);
        while let Some(current) = queue.pop_front() {
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
                queue.push_back(neighbour);
            }
        }
        visited
    }
}
