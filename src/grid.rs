use crate::cell::CellState;
use crate::coord::Coord;
use crate::error::{GridError, Result};
use crate::snapshot::{cell_count, Snapshot};
use core::fmt;

/// The editable grid. Holds exactly one [CellState::Start] and one [CellState::End] cell at all
/// times; every operation either applies fully or is rejected with a [GridError] and leaves the
/// grid as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
    start: Coord,
    end: Coord,
}

impl Grid {
    /// Creates an empty grid with the start in the top-left and the end in the bottom-right corner.
    pub fn new(rows: usize, cols: usize) -> Result<Grid> {
        let start = Coord::new(0, 0);
        let end = Coord::new(rows.saturating_sub(1), cols.saturating_sub(1));
        Grid::with_endpoints(rows, cols, start, end)
    }

    pub fn with_endpoints(rows: usize, cols: usize, start: Coord, end: Coord) -> Result<Grid> {
        let len = match cell_count(rows, cols) {
            Some(len) if len >= 2 => len,
            _ => return Err(GridError::InvalidDimensions { rows, cols }),
        };
        let mut grid = Grid {
            rows,
            cols,
            cells: vec![CellState::Empty; len],
            start,
            end,
        };
        let start_ix = grid.index(start).ok_or(GridError::OutOfBounds(start))?;
        let end_ix = grid.index(end).ok_or(GridError::OutOfBounds(end))?;
        if start == end {
            return Err(GridError::CoincidentEndpoints);
        }
        grid.cells[start_ix] = CellState::Start;
        grid.cells[end_ix] = CellState::End;
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn get(&self, coord: Coord) -> Option<CellState> {
        self.index(coord).map(|ix| self.cells[ix])
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord).then(|| coord.row * self.cols + coord.col)
    }

    fn checked_index(&self, coord: Coord) -> Result<usize> {
        self.index(coord).ok_or(GridError::OutOfBounds(coord))
    }

    /// Moves the start marker to `coord`. The previous start cell becomes empty.
    pub fn set_start(&mut self, coord: Coord) -> Result<()> {
        let ix = self.checked_index(coord)?;
        if coord == self.end {
            return Err(GridError::CoincidentEndpoints);
        }
        match self.cells[ix] {
            CellState::Wall => Err(GridError::BlockedCell(coord)),
            CellState::Start => Ok(()),
            _ => {
                let old = self.start;
                self.cells[old.row * self.cols + old.col] = CellState::Empty;
                self.cells[ix] = CellState::Start;
                self.start = coord;
                Ok(())
            }
        }
    }

    /// Moves the end marker to `coord`. The previous end cell becomes empty.
    pub fn set_end(&mut self, coord: Coord) -> Result<()> {
        let ix = self.checked_index(coord)?;
        if coord == self.start {
            return Err(GridError::CoincidentEndpoints);
        }
        match self.cells[ix] {
            CellState::Wall => Err(GridError::BlockedCell(coord)),
            CellState::End => Ok(()),
            _ => {
                let old = self.end;
                self.cells[old.row * self.cols + old.col] = CellState::Empty;
                self.cells[ix] = CellState::End;
                self.end = coord;
                Ok(())
            }
        }
    }

    /// Flips an empty cell to a wall and back.
    pub fn toggle_wall(&mut self, coord: Coord) -> Result<()> {
        let ix = self.checked_index(coord)?;
        self.cells[ix] = match self.cells[ix] {
            CellState::Empty => CellState::Wall,
            CellState::Wall => CellState::Empty,
            CellState::Start | CellState::End => return Err(GridError::EndpointProtected(coord)),
            CellState::Visited => return Err(GridError::NotToggleable(coord)),
        };
        Ok(())
    }

    /// Resets all cells to empty, keeping the endpoints where they are.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
        let (start, end) = (self.start, self.end);
        self.cells[start.row * self.cols + start.col] = CellState::Start;
        self.cells[end.row * self.cols + end.col] = CellState::End;
    }

    /// Marks an empty cell as part of a revealed path. Anything else, endpoints in particular, is
    /// left alone. Returns whether the cell changed.
    pub fn mark_visited(&mut self, coord: Coord) -> bool {
        match self.index(coord) {
            Some(ix) if self.cells[ix] == CellState::Empty => {
                self.cells[ix] = CellState::Visited;
                true
            }
            _ => false,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::build(self.rows, self.cols, self.cells.clone())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row.iter().map(|c| c.symbol()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
