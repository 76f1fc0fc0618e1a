use grid_search::{reconstruct_path, solver::Algorithm, PathingGrid};

// The start is boxed in, so every search stops after expanding it and the end keeps no
// predecessor.

fn main() {
    let mut pathing_grid: PathingGrid = "\
        ..#.....\n\
        .#S#....\n\
        ..#.....\n\
        .......E"
        .parse()
        .unwrap();
    let (start, end) = (pathing_grid.start(), pathing_grid.end());
    println!("{}", pathing_grid);
    for algorithm in Algorithm::ALL {
        let visited = algorithm
            .solver()
            .search(&mut pathing_grid, start, end)
            .unwrap();
        let path = reconstruct_path(&pathing_grid, end);
        println!(
            "{}: visited {:?}, path {:?}, reachable: {}",
            algorithm,
            visited,
            path,
            path.len() > 1 || start == end
        );
    }
}
