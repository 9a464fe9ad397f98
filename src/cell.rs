use core::fmt;

/// What a grid position currently represents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    /// Revealed as part of a found path. Still traversable.
    Visited,
}

impl CellState {
    /// Everything except a wall can be walked through.
    pub fn is_passable(self) -> bool {
        self != CellState::Wall
    }

    pub fn is_endpoint(self) -> bool {
        matches!(self, CellState::Start | CellState::End)
    }

    /// The single character used when printing or parsing grids.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Wall => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Visited => '*',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<CellState> {
        match symbol {
            '.' => Some(CellState::Empty),
            '#' => Some(CellState::Wall),
            'S' => Some(CellState::Start),
            'E' => Some(CellState::End),
            '*' => Some(CellState::Visited),
            _ => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
