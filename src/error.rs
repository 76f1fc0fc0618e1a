use grid_util::point::Point;
use thiserror::Error;

/// Contract violations rejected by the grid and the solvers.
///
/// A search that finds no path is not an error; see
/// [SearchOutcome::path](crate::solver::SearchOutcome::path).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    /// A dimension does not fit the `i32` coordinates of a [Point].
    #[error("a {rows}x{cols} grid is too large to address")]
    TooLarge { rows: usize, cols: usize },

    #[error("cell {point} lies outside the {rows}x{cols} grid")]
    OutOfBounds { point: Point, rows: usize, cols: usize },

    /// The start or end cell is (or would become) a wall.
    #[error("cell {point} is a search endpoint and cannot be a wall")]
    EndpointWall { point: Point },

    #[error("marker '{marker}' appears more than once, at {first} and {second}")]
    DuplicateMarker {
        marker: char,
        first: Point,
        second: Point,
    },

    #[error("marker '{marker}' is missing")]
    MissingMarker { marker: char },

    #[error("unknown cell symbol '{symbol}' at row {row}, column {col}")]
    UnknownCell { symbol: char, row: usize, col: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown search algorithm: {0}")]
    UnknownAlgorithm(String),
}
