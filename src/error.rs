use thiserror::Error;

use crate::coord::Coord;

/// Reasons an edit of the [Grid](crate::grid::Grid) is rejected. A rejected edit never changes the
/// grid.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Coordinate {0} lies outside the grid")]
    OutOfBounds(Coord),
    #[error("Cell {0} is a wall and cannot hold an endpoint")]
    BlockedCell(Coord),
    #[error("Start and end must be distinct cells")]
    CoincidentEndpoints,
    #[error("Cell {0} holds an endpoint and cannot be walled")]
    EndpointProtected(Coord),
    #[error("Cell {0} is part of a revealed path, clear the grid first")]
    NotToggleable(Coord),
    #[error("A grid of {rows}x{cols} cannot hold two distinct endpoints")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Contract violations of the search. Not finding a path is not one of them, see
/// [SearchOutcome](crate::solver::SearchOutcome).
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Endpoint {coord} lies outside the {rows}x{cols} snapshot")]
    InvalidInput {
        coord: Coord,
        rows: usize,
        cols: usize,
    },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("A solve is in progress, no edits are accepted")]
    Locked,
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseSnapshotError {
    #[error("Snapshot has no cells")]
    Empty,
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unknown cell symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
}

pub type Result<T> = core::result::Result<T, GridError>;
