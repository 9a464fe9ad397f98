use crate::coord::Coord;
use crate::error::SolveError;
use crate::path::Path;
use crate::snapshot::Snapshot;
use log::warn;

pub mod breadth_first;

use breadth_first::BfsSolver;

/// Result of a search that received valid input. Not finding a path is an expected outcome and
/// is reported here rather than as an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Path),
    Unreachable,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::Unreachable => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::Unreachable => None,
        }
    }
}

pub trait GridSolver {
    /// Computes a path from `start` to `end` over a static snapshot. Walls are impassable, every
    /// other cell kind can be walked through. Endpoints outside the snapshot are reported as
    /// [SolveError::InvalidInput].
    fn find_path(
        &self,
        snapshot: &Snapshot,
        start: Coord,
        end: Coord,
    ) -> Result<SearchOutcome, SolveError>;
}

/// Rejects endpoints that lie outside `snapshot`.
pub(crate) fn check_endpoint(snapshot: &Snapshot, coord: Coord) -> Result<(), SolveError> {
    if snapshot.in_bounds(coord) {
        Ok(())
    } else {
        warn!(
            "Search endpoint {} outside of {}x{} snapshot",
            coord,
            snapshot.rows(),
            snapshot.cols()
        );
        Err(SolveError::InvalidInput {
            coord,
            rows: snapshot.rows(),
            cols: snapshot.cols(),
        })
    }
}

/// Shortest path by hop count using the default [BfsSolver].
pub fn find_path(
    snapshot: &Snapshot,
    start: Coord,
    end: Coord,
) -> Result<SearchOutcome, SolveError> {
    BfsSolver.find_path(snapshot, start, end)
}
