use grid_util::point::Point;

/// Distance of a node no search has reached yet.
pub const UNREACHABLE: u32 = u32::MAX;

/// A single grid cell. Position and start/end markers are fixed when the grid is built; the
/// remaining fields are traversal state written by the solvers and cleared by
/// [reset_traversal](Node::reset_traversal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    point: Point,
    is_start: bool,
    is_end: bool,
    pub(crate) is_wall: bool,
    distance: u32,
    is_visited: bool,
    previous: Option<Point>,
    f: u32,
}

impl Node {
    pub(crate) fn new(point: Point, is_start: bool, is_end: bool) -> Node {
        Node {
            point,
            is_start,
            is_end,
            is_wall: false,
            distance: UNREACHABLE,
            is_visited: false,
            previous: None,
            f: UNREACHABLE,
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }
    pub fn row(&self) -> usize {
        self.point.y as usize
    }
    pub fn col(&self) -> usize {
        self.point.x as usize
    }
    pub fn is_start(&self) -> bool {
        self.is_start
    }
    pub fn is_end(&self) -> bool {
        self.is_end
    }
    pub fn is_wall(&self) -> bool {
        self.is_wall
    }
    /// Cost from the start of the last search, [UNREACHABLE] if the search never got here.
    pub fn distance(&self) -> u32 {
        self.distance
    }
    pub fn is_reached(&self) -> bool {
        self.distance != UNREACHABLE
    }
    pub fn is_visited(&self) -> bool {
        self.is_visited
    }
    /// The predecessor on the best known route from the start.
    pub fn previous(&self) -> Option<Point> {
        self.previous
    }
    /// Distance plus heuristic estimate, as used to order the A* frontier.
    pub fn f(&self) -> u32 {
        self.f
    }

    pub(crate) fn mark_visited(&mut self) {
        self.is_visited = true;
    }

    /// Marks the node as discovered from `previous`. Used by the unweighted searches, where the
    /// first discovery is final.
    pub(crate) fn discover(&mut self, distance: u32, previous: Option<Point>) {
        debug_assert!(!self.is_visited);
        self.is_visited = true;
        self.distance = distance;
        self.f = distance;
        self.previous = previous;
    }

    /// Records a strictly better route to this node.
    pub(crate) fn relax(&mut self, distance: u32, f: u32, previous: Option<Point>) {
        debug_assert!(distance < self.distance);
        self.distance = distance;
        self.f = f;
        self.previous = previous;
    }

    pub fn reset_traversal(&mut self) {
        self.distance = UNREACHABLE;
        self.is_visited = false;
        self.previous = None;
        self.f = UNREACHABLE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restores_initial_state() {
        let fresh = Node::new(Point::new(3, 1), false, false);
        let mut node = fresh;
        node.relax(4, 6, Some(Point::new(2, 1)));
        node.mark_visited();
        assert!(node.is_reached());
        node.reset_traversal();
        assert_eq!(node, fresh);
        assert_eq!((node.row(), node.col()), (1, 3));
    }
}
