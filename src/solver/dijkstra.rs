use grid_util::point::Point;

use crate::{
    frontier::Frontier,
    pathing_grid::PathingGrid,
    solver::{Algorithm, GridSolver},
};

/// Uniform-cost search. Each step expands the open cell with the smallest distance, taking the
/// earliest discovered one on ties. Cells count as visited once expanded, and an expanded cell
/// is never relaxed again.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn explore(&self, grid: &mut PathingGrid, start: Point, end: Point) -> Vec<Point> {
        let mut visited = Vec::new();
        grid.node_mut(start).relax(0, 0, None);
        let mut frontier = Frontier::new(start);
        while let Some(current) = frontier.pop_min_by_scan(|p| grid.node(*p).distance()) {
            if grid.node(current).is_wall() {
                continue;
            }
            if current == end {
                break;
            }
            grid.node_mut(current).mark_visited();
            visited.push(current);
            let distance = grid.node(current).distance() + 1;
            for neighbour in grid.neighbors(current) {
                if distance < grid.node(neighbour).distance() {
                    grid.node_mut(neighbour).relax(distance, distance, Some(current));
                    frontier.push(neighbour);
                }
            }
        }
        visited
    }
}
