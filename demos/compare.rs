use grid_search::{
    cell,
    solver::{compare, Algorithm},
    PathingGrid,
};

// Runs every algorithm on the default 20x50 board with a wall between start and end and prints
// how much of the board each one explored. `+` marks expanded cells and `*` the path.

fn main() {
    let mut pathing_grid = PathingGrid::default();
    for row in 0..16 {
        pathing_grid.set_wall(cell(row, 20), true).unwrap();
    }
    for row in 4..20 {
        pathing_grid.set_wall(cell(row, 28), true).unwrap();
    }
    pathing_grid.update();
    for outcome in compare(&pathing_grid, &Algorithm::ALL).unwrap() {
        println!(
            "{}: expanded {} cells, path of {} cells",
            outcome.algorithm,
            outcome.visited.len(),
            outcome.path_len().unwrap_or(0)
        );
        println!("{}\n", pathing_grid.render(&outcome));
    }
}
