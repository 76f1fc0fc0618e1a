use grid_util::point::Point;

use crate::{
    frontier::Frontier,
    pathing_grid::PathingGrid,
    solver::{Algorithm, GridSolver},
};

/// A* search guided by the Manhattan distance to the end. Before every expansion the open set is
/// stably sorted by `f = distance + heuristic`, so cells with equal `f` keep their relative order.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the heuristic. Values above 1.0 overestimate the remaining cost, which expands fewer
    /// cells but no longer guarantees a shortest path.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }

    /// The Manhattan distance times the heuristic factor, saturating at [u32::MAX].
    pub fn heuristic(&self, p1: &Point, p2: &Point) -> u32 {
        (p1.manhattan_distance(p2) as f32 * self.heuristic_factor) as u32
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Astar
    }

    fn explore(&self, grid: &mut PathingGrid, start: Point, end: Point) -> Vec<Point> {
        let mut visited = Vec::new();
        let h = self.heuristic(&start, &end);
        grid.node_mut(start).relax(0, h, None);
        let mut frontier = Frontier::new(start);
        while let Some(current) = frontier.pop_min_by_sort(|p| grid.node(*p).f()) {
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
                    let f = distance.saturating_add(self.heuristic(&neighbour, &end));
                    grid.node_mut(neighbour).relax(distance, f, Some(current));
                    frontier.push(neighbour);
                }
            }
        }
        visited
    }
}
