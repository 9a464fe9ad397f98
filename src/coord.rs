use core::fmt;
use grid_util::point::Point;

/// A cell position given as `(row, col)`. Search internally works on [Point], with `x` the column
/// and `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Number of unit steps between two cells when only axis moves are allowed.
    pub fn manhattan_distance(&self, other: &Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether the two cells share an edge.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Converts to a search [Point]. Returns [None] if the coordinate does not fit in `i32`.
    pub fn to_point(self) -> Option<Point> {
        let x = i32::try_from(self.col).ok()?;
        let y = i32::try_from(self.row).ok()?;
        Some(Point::new(x, y))
    }

    /// Converts back from a search [Point], rejecting negative components.
    pub fn from_point(point: Point) -> Option<Coord> {
        let col = usize::try_from(point.x).ok()?;
        let row = usize::try_from(point.y).ok()?;
        Some(Coord { row, col })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
