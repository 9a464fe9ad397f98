use crate::coord::Coord;
use crate::snapshot::Snapshot;

/// Ordered cells from start to end, both included. Consecutive cells share an edge. Never empty: a
/// path whose start equals its end holds that single cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    coords: Vec<Coord>,
}

impl Path {
    /// Callers guarantee `coords` is non-empty.
    pub(crate) fn from_coords(coords: Vec<Coord>) -> Path {
        debug_assert!(!coords.is_empty());
        Path { coords }
    }

    pub fn single(coord: Coord) -> Path {
        Path {
            coords: vec![coord],
        }
    }

    pub fn start(&self) -> Coord {
        self.coords[0]
    }

    pub fn end(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    /// Number of cells on the path, endpoints included.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always [false], a path holds at least its start.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of moves needed to walk the path.
    pub fn hops(&self) -> usize {
        self.coords.len() - 1
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// The cells strictly between start and end.
    pub fn interior(&self) -> &[Coord] {
        if self.coords.len() <= 2 {
            &[]
        } else {
            &self.coords[1..self.coords.len() - 1]
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.coords.iter()
    }

    /// Checks that every cell is in bounds and passable on `snapshot` and that consecutive cells
    /// share an edge.
    pub fn is_valid_on(&self, snapshot: &Snapshot) -> bool {
        self.coords.iter().all(|&c| snapshot.is_passable(c))
            && self.coords.windows(2).all(|w| w[0].is_adjacent(&w[1]))
    }
}

impl IntoIterator for Path {
    type Item = Coord;
    type IntoIter = std::vec::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}
