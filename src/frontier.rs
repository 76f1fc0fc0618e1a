//! The open set used by the cost-ordered solvers.
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;
use itertools::Itertools;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Discovered points waiting to be expanded. Points keep their insertion order and are never held
/// twice; a point whose key improves keeps its slot.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    open: FxIndexSet<Point>,
}

impl Frontier {
    pub fn new(start: Point) -> Frontier {
        let mut frontier = Frontier::default();
        frontier.push(start);
        frontier
    }

    /// Adds a point unless it is already waiting. Returns whether it was added.
    pub fn push(&mut self, point: Point) -> bool {
        self.open.insert(point)
    }

    /// Removes the point with the smallest key by scanning the open set. Among equal keys the
    /// earliest inserted point wins.
    pub fn pop_min_by_scan<F>(&mut self, mut key: F) -> Option<Point>
    where
        F: FnMut(&Point) -> u32,
    {
        let ix = self.open.iter().position_min_by_key(|&p| key(p))?;
        self.open.shift_remove_index(ix)
    }

    /// Stably sorts the open set by key and removes its head. The sorted order is kept, so ties
    /// are broken by the order left behind by earlier sorts.
    pub fn pop_min_by_sort<F>(&mut self, mut key: F) -> Option<Point>
    where
        F: FnMut(&Point) -> u32,
    {
        self.open.sort_by(|a, b| key(a).cmp(&key(b)));
        self.open.shift_remove_index(0)
    }
}
