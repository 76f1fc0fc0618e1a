use grid_search::{cell, solver::Algorithm, PathingGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// The algorithm can be picked with the first argument: bfs, dfs, dijkstra or astar.

fn main() {
    let algorithm: Algorithm = match std::env::args().nth(1) {
        Some(name) => name.parse().unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(2)
        }),
        None => Algorithm::default(),
    };
    let mut pathing_grid = PathingGrid::new(3, 3, cell(0, 0), cell(2, 2)).unwrap();
    pathing_grid.set_wall(cell(1, 1), true).unwrap();
    println!("{}", pathing_grid);
    println!("{}", algorithm.description());
    let outcome = algorithm.solver().solve(&pathing_grid).unwrap();
    println!("Visited:");
    for p in &outcome.visited {
        println!("{:?}", p);
    }
    println!("Path:");
    for p in outcome.path.iter().flatten() {
        println!("{:?}", p);
    }
}
