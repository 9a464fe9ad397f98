use crate::cell::CellState;
use crate::coord::Coord;
use crate::error::ParseSnapshotError;
use crate::N_SMALLVEC_SIZE;
use core::fmt;
use core::str::FromStr;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::iproduct;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Axis offsets in expansion order: east, south, west, north. The order decides which of several
/// shortest paths the search returns.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Number of cells of a `rows x cols` grid. [None] if a side is zero, does not fit the `i32`
/// coordinates of [Point], or the product overflows.
pub(crate) fn cell_count(rows: usize, cols: usize) -> Option<usize> {
    let max = i32::MAX as usize;
    if rows == 0 || cols == 0 || rows > max || cols > max {
        return None;
    }
    rows.checked_mul(cols)
}

/// Immutable copy of the cell states of a grid, handed to the search. In addition to the raw
/// [CellState] values it keeps a [BoolGrid] of blocked cells ([true] for walls) for fast lookups
/// during search.
#[derive(Clone, Debug)]
pub struct Snapshot {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
    blocked: BoolGrid,
}

impl Snapshot {
    /// Builds a snapshot from row-major cells. Returns [None] if the cell count does not match
    /// `rows * cols`, the grid is empty, or a side exceeds `i32::MAX`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<CellState>) -> Option<Snapshot> {
        if cell_count(rows, cols) != Some(cells.len()) {
            return None;
        }
        Some(Snapshot::build(rows, cols, cells))
    }

    /// Callers guarantee `cells.len() == rows * cols` and that `cell_count` accepts the
    /// dimensions, so the `i32` casts below are lossless.
    pub(crate) fn build(rows: usize, cols: usize, cells: Vec<CellState>) -> Snapshot {
        let mut blocked = BoolGrid::new(cols, rows, false);
        for (ix, cell) in cells.iter().enumerate() {
            if !cell.is_passable() {
                blocked.set((ix % cols) as i32, (ix / cols) as i32, true);
            }
        }
        Snapshot {
            rows,
            cols,
            cells,
            blocked,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    pub fn get(&self, coord: Coord) -> Option<CellState> {
        if self.in_bounds(coord) {
            Some(self.cells[coord.row * self.cols + coord.col])
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn is_passable(&self, coord: Coord) -> bool {
        coord.to_point().is_some_and(|p| self.can_move_to(p))
    }

    pub(crate) fn can_move_to(&self, pos: Point) -> bool {
        self.blocked.point_in_bounds(pos) && !self.blocked.get_point(pos)
    }

    /// The passable axis neighbours of `point`, in expansion order.
    pub(crate) fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        NEUMANN_OFFSETS
            .iter()
            .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.can_move_to(*p))
            .collect()
    }

    /// Links up passable neighbours into connected components.
    pub fn generate_components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.rows * self.cols);
        for (y, x) in iproduct!(0..self.rows as i32, 0..self.cols as i32) {
            let point = Point::new(x, y);
            if !self.can_move_to(point) {
                continue;
            }
            let parent_ix = self.blocked.get_ix_point(&point);
            // East and south suffice, west and north are covered from the other side.
            for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                if self.can_move_to(p) {
                    components.union(parent_ix, self.blocked.get_ix_point(&p));
                }
            }
        }
        components
    }

    /// Checks if `start` and `goal` lie on the same connected component of passable cells.
    pub fn reachable(&self, start: Coord, goal: Coord) -> bool {
        let (Some(start), Some(goal)) = (start.to_point(), goal.to_point()) else {
            return false;
        };
        if !self.can_move_to(start) || !self.can_move_to(goal) {
            return false;
        }
        let components = self.generate_components();
        components.equiv(
            self.blocked.get_ix_point(&start),
            self.blocked.get_ix_point(&goal),
        )
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl Eq for Snapshot {}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row.iter().map(|c| c.symbol()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses one line per row using the symbols of [CellState::symbol]. Surrounding whitespace and
/// blank lines are ignored. No endpoint rules are enforced, a snapshot may hold any cells.
impl FromStr for Snapshot {
    type Err = ParseSnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        if cols == 0 {
            return Err(ParseSnapshotError::Empty);
        }
        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(ParseSnapshotError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = CellState::from_symbol(symbol)
                    .ok_or(ParseSnapshotError::UnknownSymbol { symbol, row, col })?;
                cells.push(cell);
            }
        }
        Snapshot::from_cells(lines.len(), cols, cells).ok_or(ParseSnapshotError::Empty)
    }
}
