use crate::coord::Coord;
use crate::grid::Grid;
use crate::path::Path;
use std::collections::VecDeque;
use std::time::Duration;

/// One discrete step of a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStep {
    pub coord: Coord,
    /// Whether the cell was empty and is now [Visited](crate::cell::CellState::Visited). Cells
    /// revealed by an earlier solve are passed over unchanged.
    pub marked: bool,
}

/// Folds the interior of a found [Path] back into a grid one cell per step. The endpoints already
/// carry their own markers and are skipped. The host waits [delay](Self::delay) between steps.
#[derive(Clone, Debug)]
pub struct RevealSequencer {
    pending: VecDeque<Coord>,
    delay: Duration,
}

impl RevealSequencer {
    pub fn new(path: &Path, delay: Duration) -> RevealSequencer {
        RevealSequencer {
            pending: path.interior().iter().copied().collect(),
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of steps left.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    /// The coordinates still to be revealed, in order. Reading them does not advance the reveal.
    pub fn pending(&self) -> impl Iterator<Item = &Coord> + '_ {
        self.pending.iter()
    }

    /// Performs the next step on `grid`, or returns [None] once every cell has been revealed.
    pub fn step(&mut self, grid: &mut Grid) -> Option<RevealStep> {
        let coord = self.pending.pop_front()?;
        let marked = grid.mark_visited(coord);
        Some(RevealStep { coord, marked })
    }
}
