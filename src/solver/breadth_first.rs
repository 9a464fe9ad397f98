use grid_util::point::Point;
use log::info;

use crate::bfs::bfs;
use crate::coord::Coord;
use crate::error::SolveError;
use crate::path::Path;
use crate::snapshot::Snapshot;
use crate::solver::{check_endpoint, GridSolver, SearchOutcome};

/// Unweighted breadth-first search over the 4-neighbourhood. Neighbours are expanded east, south,
/// west, north, which fixes the choice between equally short paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn find_path(
        &self,
        snapshot: &Snapshot,
        start: Coord,
        end: Coord,
    ) -> Result<SearchOutcome, SolveError> {
        check_endpoint(snapshot, start)?;
        check_endpoint(snapshot, end)?;
        if start == end {
            return Ok(SearchOutcome::Found(Path::single(start)));
        }
        if !snapshot.is_passable(start) || !snapshot.is_passable(end) {
            info!("Endpoint {} or {} is a wall", start, end);
            return Ok(SearchOutcome::Unreachable);
        }
        let invalid = |coord| SolveError::InvalidInput {
            coord,
            rows: snapshot.rows(),
            cols: snapshot.cols(),
        };
        let start_point = start.to_point().ok_or_else(|| invalid(start))?;
        let end_point = end.to_point().ok_or_else(|| invalid(end))?;

        let points = bfs(
            &start_point,
            snapshot.rows() * snapshot.cols(),
            |point: &Point| snapshot.neighborhood_points(point),
            |point| *point == end_point,
        );
        let Some(points) = points else {
            info!("{} is not reachable from {}", end, start);
            return Ok(SearchOutcome::Unreachable);
        };
        let coords = points
            .into_iter()
            .filter_map(Coord::from_point)
            .collect::<Vec<_>>();
        info!("Found path of {} cells from {} to {}", coords.len(), start, end);
        Ok(SearchOutcome::Found(Path::from_coords(coords)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::find_path;

    fn coords(cells: &[(usize, usize)]) -> Vec<Coord> {
        cells.iter().map(|&c| Coord::from(c)).collect()
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let snapshot: Snapshot = ".".parse().unwrap();
        let start = Coord::new(0, 0);
        let path = find_path(&snapshot, start, start).unwrap().into_path().unwrap();
        assert!(path.len() == 1);
        assert_eq!(path.start(), start);
    }

    /// A single cell path is returned even if the cell itself is walled in.
    #[test]
    fn equal_start_goal_ignores_walls() {
        let snapshot: Snapshot = ".#.\n#.#\n.#.".parse().unwrap();
        let c = Coord::new(1, 1);
        let outcome = find_path(&snapshot, c, c).unwrap();
        assert_eq!(outcome, SearchOutcome::Found(Path::single(c)));
    }

    /// East is tried before south, so the path hugs the top row first.
    #[test]
    fn open_grid_path_follows_expansion_order() {
        let snapshot: Snapshot = "...\n...\n...".parse().unwrap();
        let path = find_path(&snapshot, Coord::new(0, 0), Coord::new(2, 2))
            .unwrap()
            .into_path()
            .unwrap();
        assert_eq!(
            path.coords(),
            coords(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]).as_slice()
        );
    }

    /// Asserts that the optimal 4 step solution is found around a center obstacle.
    #[test]
    fn solve_simple_problem() {
        //  ___
        // |S  |
        // | # |
        // |  E|
        //  ___
        let snapshot: Snapshot = "S..\n.#.\n..E".parse().unwrap();
        let path = find_path(&snapshot, Coord::new(0, 0), Coord::new(2, 2))
            .unwrap()
            .into_path()
            .unwrap();
        assert!(path.len() == 5);
        assert!(path.is_valid_on(&snapshot));
    }

    #[test]
    fn single_gap_is_used() {
        let snapshot: Snapshot = "...\n##.\n...".parse().unwrap();
        let start = Coord::new(0, 0);
        let end = Coord::new(2, 0);
        let path = find_path(&snapshot, start, end).unwrap().into_path().unwrap();
        assert_eq!(path.len(), 7);
        assert!(path.coords().contains(&Coord::new(1, 2)));
        assert!(path.is_valid_on(&snapshot));
        assert_eq!(path.start(), start);
        assert_eq!(path.end(), end);
    }

    #[test]
    fn walled_off_end_is_unreachable() {
        let snapshot: Snapshot = "S....\n###..\n..#..\nE.#..".parse().unwrap();
        let outcome = find_path(&snapshot, Coord::new(0, 0), Coord::new(3, 0)).unwrap();
        assert_eq!(outcome, SearchOutcome::Unreachable);
        assert!(outcome.path().is_none());
    }

    #[test]
    fn end_on_wall_is_unreachable() {
        let snapshot: Snapshot = "..\n.#".parse().unwrap();
        let outcome = find_path(&snapshot, Coord::new(0, 0), Coord::new(1, 1)).unwrap();
        assert_eq!(outcome, SearchOutcome::Unreachable);
    }

    /// A walled start blocks the search even when it has an open neighbour.
    #[test]
    fn walled_start_is_unreachable() {
        let snapshot: Snapshot = "#.".parse().unwrap();
        let start = Coord::new(0, 0);
        let end = Coord::new(0, 1);
        let outcome = find_path(&snapshot, start, end).unwrap();
        assert_eq!(outcome, SearchOutcome::Unreachable);
        assert!(!snapshot.reachable(start, end));

        let square: Snapshot = "#.\n..".parse().unwrap();
        let outcome = find_path(&square, start, Coord::new(1, 1)).unwrap();
        assert_eq!(outcome, SearchOutcome::Unreachable);
        assert!(!square.reachable(start, Coord::new(1, 1)));
    }

    #[test]
    fn walled_start_without_open_neighbour() {
        let snapshot: Snapshot = "##.\n#..".parse().unwrap();
        let outcome = find_path(&snapshot, Coord::new(0, 0), Coord::new(1, 2)).unwrap();
        assert_eq!(outcome, SearchOutcome::Unreachable);
    }

    /// Revealed cells from an earlier solve do not change the result.
    #[test]
    fn visited_cells_are_passable() {
        let fresh: Snapshot = "S..\n##.\nE..".parse().unwrap();
        let revealed: Snapshot = "S**\n##*\nE**".parse().unwrap();
        let start = Coord::new(0, 0);
        let end = Coord::new(2, 0);
        assert_eq!(
            find_path(&fresh, start, end).unwrap(),
            find_path(&revealed, start, end).unwrap()
        );
    }

    #[test]
    fn out_of_bounds_endpoints_are_invalid() {
        let snapshot: Snapshot = "..\n..".parse().unwrap();
        let outside = Coord::new(2, 0);
        assert_eq!(
            find_path(&snapshot, outside, Coord::new(0, 0)),
            Err(SolveError::InvalidInput {
                coord: outside,
                rows: 2,
                cols: 2
            })
        );
        assert_eq!(
            find_path(&snapshot, Coord::new(0, 0), outside),
            Err(SolveError::InvalidInput {
                coord: outside,
                rows: 2,
                cols: 2
            })
        );
        // Checked even when both endpoints coincide.
        assert!(find_path(&snapshot, outside, outside).is_err());
    }
}
