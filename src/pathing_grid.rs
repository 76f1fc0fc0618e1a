use crate::error::GridError;
use crate::node::Node;
use crate::solver::SearchOutcome;
use crate::{cell, DEFAULT_COLS, DEFAULT_END, DEFAULT_ROWS, DEFAULT_START};
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::Itertools;
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::str::FromStr;

/// [PathingGrid] is the board the solvers run on: a row-major array of [Node] with a fixed start
/// and end cell. Besides the nodes it maintains information about connected components using a
/// [UnionFind] structure, which answers reachability queries without searching.
///
/// Points use `x` for the column and `y` for the row, see [cell].
#[derive(Clone, Debug)]
pub struct PathingGrid {
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
    start: Point,
    end: Point,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid::blank(
            DEFAULT_ROWS,
            DEFAULT_COLS,
            cell(DEFAULT_START.0, DEFAULT_START.1),
            cell(DEFAULT_END.0, DEFAULT_END.1),
        )
    }
}

impl PathingGrid {
    /// Creates a grid without walls. Fails if either dimension is zero or exceeds [i32::MAX], or
    /// if a marker lies outside.
    pub fn new(rows: usize, cols: usize, start: Point, end: Point) -> Result<PathingGrid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        if i32::try_from(rows).is_err() || i32::try_from(cols).is_err() {
            return Err(GridError::TooLarge { rows, cols });
        }
        for point in [start, end] {
            if !(point.x >= 0 && point.y >= 0 && (point.y as usize) < rows && (point.x as usize) < cols) {
                return Err(GridError::OutOfBounds { point, rows, cols });
            }
        }
        Ok(PathingGrid::blank(rows, cols, start, end))
    }

    fn blank(rows: usize, cols: usize, start: Point, end: Point) -> PathingGrid {
        let nodes = (0..rows)
            .cartesian_product(0..cols)
            .map(|(row, col)| {
                let p = cell(row, col);
                Node::new(p, p == start, p == end)
            })
            .collect();
        let mut grid = PathingGrid {
            rows,
            cols,
            nodes,
            start,
            end,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// Builds a grid from a [BoolGrid] in which `true` marks a wall, as loaded by other
    /// [grid_util] based tools.
    pub fn from_bool_grid(walls: &BoolGrid, start: Point, end: Point) -> Result<PathingGrid, GridError> {
        let mut grid = PathingGrid::new(walls.height(), walls.width(), start, end)?;
        for y in 0..grid.rows as i32 {
            for x in 0..grid.cols as i32 {
                if walls.get(x, y) {
                    grid.set_wall(Point::new(x, y), true)?;
                }
            }
        }
        grid.update();
        Ok(grid)
    }

    /// The walls of this grid as a [BoolGrid].
    pub fn wall_grid(&self) -> BoolGrid {
        let mut walls = BoolGrid::new(self.cols, self.rows, false);
        for node in self.nodes.iter().filter(|n| n.is_wall()) {
            walls.set(node.point().x, node.point().y, true);
        }
        walls
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn end(&self) -> Point {
        self.end
    }
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && (point.y as usize) < self.rows && (point.x as usize) < self.cols
    }
    fn get_ix_point(&self, point: &Point) -> usize {
        point.y as usize * self.cols + point.x as usize
    }

    pub fn get(&self, point: Point) -> Option<&Node> {
        if self.in_bounds(point) {
            Some(&self.nodes[self.get_ix_point(&point)])
        } else {
            None
        }
    }
    /// The node at `point`.
    ///
    /// # Panics
    ///
    /// If `point` is out of bounds.
    pub fn node(&self, point: Point) -> &Node {
        assert!(self.in_bounds(point), "{point} is outside the grid");
        &self.nodes[self.get_ix_point(&point)]
    }
    pub(crate) fn node_mut(&mut self, point: Point) -> &mut Node {
        assert!(self.in_bounds(point), "{point} is outside the grid");
        let ix = self.get_ix_point(&point);
        &mut self.nodes[ix]
    }
    /// All nodes in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
    pub fn is_wall(&self, point: Point) -> bool {
        self.get(point).is_some_and(Node::is_wall)
    }

    /// In-bounds 4-neighbours of `point` in the order up, down, left, right.
    pub fn neumann_neighborhood(&self, point: Point) -> SmallVec<[Point; 4]> {
        [
            Point::new(point.x, point.y - 1),
            Point::new(point.x, point.y + 1),
            Point::new(point.x - 1, point.y),
            Point::new(point.x + 1, point.y),
        ]
        .into_iter()
        .filter(|p| self.in_bounds(*p))
        .collect()
    }

    /// Neighbours the solvers may still step to: the [neumann_neighborhood](Self::neumann_neighborhood)
    /// without nodes already visited in the current search. Walls are kept; the solvers skip them
    /// when they come off the frontier.
    pub fn neighbors(&self, point: Point) -> SmallVec<[Point; 4]> {
        self.neumann_neighborhood(point)
            .into_iter()
            .filter(|p| !self.node(*p).is_visited())
            .collect()
    }

    /// Checks that `point` can serve as a search endpoint.
    pub(crate) fn check_endpoint(&self, point: Point) -> Result<(), GridError> {
        match self.get(point) {
            None => Err(GridError::OutOfBounds {
                point,
                rows: self.rows,
                cols: self.cols,
            }),
            Some(node) if node.is_wall() => Err(GridError::EndpointWall { point }),
            Some(_) => Ok(()),
        }
    }

    /// Places or removes a wall. Joins newly connected components and flags the components as
    /// dirty if components are (potentially) broken apart into multiple. Returns whether the cell
    /// changed.
    pub fn set_wall(&mut self, point: Point, blocked: bool) -> Result<bool, GridError> {
        let node = self.get(point).ok_or(GridError::OutOfBounds {
            point,
            rows: self.rows,
            cols: self.cols,
        })?;
        if blocked && (node.is_start() || node.is_end()) {
            warn!("Refusing to place a wall on endpoint {}", point);
            return Err(GridError::EndpointWall { point });
        }
        if node.is_wall() == blocked {
            return Ok(false);
        }
        if blocked {
            self.components_dirty = true;
        } else {
            let p_ix = self.get_ix_point(&point);
            for n in self.neumann_neighborhood(point) {
                if !self.is_wall(n) {
                    self.components.union(p_ix, self.get_ix_point(&n));
                }
            }
        }
        self.node_mut(point).is_wall = blocked;
        Ok(true)
    }

    /// Flips the wall flag of a cell and returns the new value.
    pub fn toggle_wall(&mut self, point: Point) -> Result<bool, GridError> {
        let blocked = !self.is_wall(point);
        self.set_wall(point, blocked)?;
        Ok(blocked)
    }

    /// Clears distance, visitation and predecessor of every node.
    pub fn reset_traversal(&mut self) {
        self.nodes.iter_mut().for_each(Node::reset_traversal);
    }

    /// Removes all walls and traversal state, keeping the start and end cells.
    pub fn clear_walls(&mut self) {
        for node in self.nodes.iter_mut() {
            node.is_wall = false;
            node.reset_traversal();
        }
        self.generate_components();
    }

    /// Returns the grid to the state it was constructed in.
    pub fn reset(&mut self) {
        *self = PathingGrid::blank(self.rows, self.cols, self.start, self.end);
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks if start and goal are open cells on the same component.
    ///
    /// Placing walls only flags the components as dirty, so call [update](Self::update) after
    /// editing walls. Asking while the components are dirty panics in debug builds.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        debug_assert!(
            !self.components_dirty,
            "components are stale, call update() after placing walls"
        );
        if self.in_bounds(*start) && self.in_bounds(*goal) {
            if self.is_wall(*start) || self.is_wall(*goal) {
                return true;
            }
            !self
                .components
                .equiv(self.get_ix_point(start), self.get_ix_point(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let point = cell(row, col);
                if self.is_wall(point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                // Linking down and right covers every edge once
                for p in [Point::new(point.x, point.y + 1), Point::new(point.x + 1, point.y)] {
                    if self.in_bounds(p) && !self.is_wall(p) {
                        let ix = self.get_ix_point(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }

    fn symbol(&self, node: &Node) -> char {
        if node.is_start() {
            'S'
        } else if node.is_end() {
            'E'
        } else if node.is_wall() {
            '#'
        } else {
            '.'
        }
    }

    /// Draws the grid with the visited cells of `outcome` as `+` and its path as `*`. Start, end
    /// and walls keep their usual symbols. Cells of `outcome` outside this grid are skipped.
    pub fn render(&self, outcome: &SearchOutcome) -> String {
        let mut canvas: Vec<Vec<char>> = self
            .nodes
            .chunks(self.cols)
            .map(|row| row.iter().map(|n| self.symbol(n)).collect())
            .collect();
        let path = outcome.path.iter().flatten();
        for (p, mark) in outcome
            .visited
            .iter()
            .map(|p| (p, '+'))
            .chain(path.map(|p| (p, '*')))
        {
            if !self.in_bounds(*p) {
                warn!("Skipping {} outside the {}x{} grid", p, self.rows, self.cols);
                continue;
            }
            let c = &mut canvas[p.y as usize][p.x as usize];
            if *c == '.' || *c == '+' {
                *c = mark;
            }
        }
        canvas
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .join("\n")
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.nodes.chunks(self.cols) {
            let line: String = row.iter().map(|n| self.symbol(n)).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses the format written by [Display](fmt::Display): one line per row with `.` for open
/// cells, `#` for walls, `S` for the start and `E` for the end. Blank lines and surrounding
/// whitespace are ignored.
impl FromStr for PathingGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        let mut start: Option<Point> = None;
        let mut end: Option<Point> = None;
        let mut walls = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let p = cell(row, col);
                match symbol {
                    '.' => {}
                    '#' => walls.push(p),
                    'S' | 'E' => {
                        let slot = if symbol == 'S' { &mut start } else { &mut end };
                        if let Some(first) = *slot {
                            return Err(GridError::DuplicateMarker {
                                marker: symbol,
                                first,
                                second: p,
                            });
                        }
                        *slot = Some(p);
                    }
                    _ => return Err(GridError::UnknownCell { symbol, row, col }),
                }
            }
        }
        let start = start.ok_or(GridError::MissingMarker { marker: 'S' })?;
        let end = end.ok_or(GridError::MissingMarker { marker: 'E' })?;
        let mut grid = PathingGrid::new(rows, cols, start, end)?;
        for p in walls {
            grid.set_wall(p, true)?;
        }
        grid.update();
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Algorithm;

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // S#.
        // .#E
        let pathing_grid: PathingGrid = "S#.\n.#E".parse().unwrap();
        let p1 = cell(0, 0);
        let p2 = cell(1, 1);
        let p3 = cell(1, 0);
        let p4 = cell(0, 2);
        assert!(pathing_grid.unreachable(&p1, &p2));
        assert!(pathing_grid.reachable(&p1, &p3));
        assert!(pathing_grid.unreachable(&p1, &p4));
        assert!(pathing_grid.reachable(&p4, &pathing_grid.end()));
    }

    /// Asserts that the two corners are connected around a central wall on a 4-grid.
    #[test]
    fn reachable_without_diagonals() {
        let mut pathing_grid = PathingGrid::new(3, 3, cell(0, 0), cell(2, 2)).unwrap();
        pathing_grid.set_wall(cell(1, 1), true).unwrap();
        pathing_grid.update();
        assert!(pathing_grid.reachable(&pathing_grid.start(), &pathing_grid.end()));
    }

    /// Diagonal gaps do not connect cells.
    #[test]
    fn diagonal_gap_is_unreachable() {
        let pathing_grid: PathingGrid = "S#\n#E".parse().unwrap();
        assert!(pathing_grid.unreachable(&cell(0, 0), &cell(1, 1)));
    }

    #[test]
    fn removing_a_wall_joins_components() {
        let mut pathing_grid: PathingGrid = "S#E".parse().unwrap();
        assert!(pathing_grid.unreachable(&cell(0, 0), &cell(0, 2)));
        assert!(pathing_grid.toggle_wall(cell(0, 1)).is_ok_and(|b| !b));
        assert!(!pathing_grid.components_dirty);
        assert!(pathing_grid.reachable(&cell(0, 0), &cell(0, 2)));
    }

    #[test]
    fn neighbour_order_is_up_down_left_right() {
        let mut pathing_grid = PathingGrid::new(3, 3, cell(0, 0), cell(2, 2)).unwrap();
        let expected = [cell(0, 1), cell(2, 1), cell(1, 0), cell(1, 2)];
        assert_eq!(pathing_grid.neighbors(cell(1, 1)).as_slice(), &expected);
        assert_eq!(
            pathing_grid.neighbors(cell(0, 0)).as_slice(),
            &[cell(1, 0), cell(0, 1)]
        );
        pathing_grid.node_mut(cell(2, 1)).mark_visited();
        assert_eq!(
            pathing_grid.neighbors(cell(1, 1)).as_slice(),
            &[cell(0, 1), cell(1, 0), cell(1, 2)]
        );
        assert_eq!(pathing_grid.neumann_neighborhood(cell(1, 1)).len(), 4);
    }

    #[test]
    fn walls_stay_in_neighbourhood() {
        let pathing_grid: PathingGrid = "S#E".parse().unwrap();
        assert_eq!(pathing_grid.neighbors(cell(0, 0)).as_slice(), &[cell(0, 1)]);
    }

    #[test]
    fn endpoints_cannot_become_walls() {
        let mut pathing_grid = PathingGrid::default();
        let start = pathing_grid.start();
        assert_eq!(
            pathing_grid.set_wall(start, true),
            Err(GridError::EndpointWall { point: start })
        );
        assert!(!pathing_grid.is_wall(start));
        assert!(matches!(
            pathing_grid.toggle_wall(Point::new(-1, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn stale_components_refresh_on_update() {
        let mut pathing_grid: PathingGrid = "S.E".parse().unwrap();
        assert!(pathing_grid.toggle_wall(cell(0, 1)).unwrap());
        assert!(pathing_grid.components_dirty);
        pathing_grid.update();
        assert!(pathing_grid.unreachable(&cell(0, 0), &cell(0, 2)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "components are stale")]
    fn reachable_panics_on_stale_components() {
        let mut pathing_grid: PathingGrid = "S.E".parse().unwrap();
        pathing_grid.set_wall(cell(0, 1), true).unwrap();
        pathing_grid.reachable(&cell(0, 0), &cell(0, 2));
    }

    #[test]
    fn render_skips_foreign_cells() {
        let outcome = Algorithm::Bfs.solver().solve(&PathingGrid::default()).unwrap();
        let small: PathingGrid = "S.\n.E".parse().unwrap();
        assert_eq!(small.render(&outcome), "S+\n+E");
    }

    #[test]
    fn rejects_oversized_dimensions() {
        let rows = i32::MAX as usize + 1;
        assert_eq!(
            PathingGrid::new(rows, 1, cell(0, 0), cell(0, 0)).unwrap_err(),
            GridError::TooLarge { rows, cols: 1 }
        );
    }

    #[test]
    fn rejects_empty_and_out_of_bounds() {
        assert_eq!(
            PathingGrid::new(0, 4, cell(0, 0), cell(0, 1)).unwrap_err(),
            GridError::EmptyGrid { rows: 0, cols: 4 }
        );
        assert!(matches!(
            PathingGrid::new(2, 2, cell(0, 0), cell(2, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "S.S\n..E".parse::<PathingGrid>(),
            Err(GridError::DuplicateMarker { marker: 'S', .. })
        ));
        assert_eq!(
            "S..\n...".parse::<PathingGrid>().unwrap_err(),
            GridError::MissingMarker { marker: 'E' }
        );
        assert_eq!(
            "S..\n.E".parse::<PathingGrid>().unwrap_err(),
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            "S.x\n..E".parse::<PathingGrid>().unwrap_err(),
            GridError::UnknownCell {
                symbol: 'x',
                row: 0,
                col: 2
            }
        );
        assert!(matches!(
            "\n\n".parse::<PathingGrid>(),
            Err(GridError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn display_matches_parse() {
        let text = "S.#.\n.##.\n...E\n";
        let pathing_grid: PathingGrid = text.parse().unwrap();
        assert_eq!(pathing_grid.to_string(), text);
        assert_eq!((pathing_grid.rows(), pathing_grid.cols()), (3, 4));
        assert!(pathing_grid.is_wall(cell(1, 2)));
    }

    #[test]
    fn default_board() {
        let pathing_grid = PathingGrid::default();
        assert_eq!((pathing_grid.rows(), pathing_grid.cols()), (20, 50));
        assert!(pathing_grid.node(cell(5, 5)).is_start());
        assert!(pathing_grid.node(cell(15, 35)).is_end());
        assert_eq!(pathing_grid.nodes().filter(|n| n.is_start()).count(), 1);
        assert_eq!(pathing_grid.nodes().filter(|n| n.is_end()).count(), 1);
    }

    #[test]
    fn clear_walls_and_reset_are_idempotent() {
        let mut pathing_grid: PathingGrid = "S#.\n.#.\n..E".parse().unwrap();
        pathing_grid.node_mut(cell(0, 0)).discover(0, None);
        pathing_grid.clear_walls();
        let once = pathing_grid.to_string();
        assert_eq!(once, "S..\n...\n..E\n");
        assert!(pathing_grid.nodes().all(|n| !n.is_visited() && !n.is_reached()));
        pathing_grid.clear_walls();
        assert_eq!(pathing_grid.to_string(), once);

        pathing_grid.set_wall(cell(1, 1), true).unwrap();
        pathing_grid.reset();
        assert_eq!(pathing_grid.to_string(), once);
        assert!(!pathing_grid.components_dirty);
        pathing_grid.reset();
        assert_eq!(pathing_grid.to_string(), once);
        assert_eq!(pathing_grid.start(), cell(0, 0));
    }

    #[test]
    fn bool_grid_interchange() {
        let pathing_grid: PathingGrid = "S#.\n.#E".parse().unwrap();
        let walls = pathing_grid.wall_grid();
        assert!(walls.get(1, 0) && walls.get(1, 1));
        assert!(!walls.get(0, 0));
        let copy = PathingGrid::from_bool_grid(&walls, pathing_grid.start(), pathing_grid.end())
            .unwrap();
        assert_eq!(copy.to_string(), pathing_grid.to_string());
    }
}
