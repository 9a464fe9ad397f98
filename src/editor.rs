use crate::coord::Coord;
use crate::error::{EditorError, GridError};
use crate::grid::Grid;
use crate::path::Path;
use crate::reveal::{RevealSequencer, RevealStep};
use crate::solver::breadth_first::BfsSolver;
use crate::solver::{GridSolver, SearchOutcome};
use crate::ANIMATION_SPEED_MS;
use log::{debug, info};
use std::time::Duration;

/// What a click on a cell does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditorMode {
    #[default]
    SelectingStart,
    SelectingEnd,
    PaintingWalls,
    /// A reveal is in flight, no edits are accepted.
    Locked,
}

/// Mode the editor returns to once a reveal has completed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResumeMode {
    /// The mode that was active when solving started.
    #[default]
    Previous,
    SelectStart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    /// Time the host waits between two reveal steps.
    pub reveal_delay: Duration,
    pub resume: ResumeMode,
}

impl Default for EditorConfig {
    fn default() -> EditorConfig {
        EditorConfig {
            reveal_delay: Duration::from_millis(ANIMATION_SPEED_MS),
            resume: ResumeMode::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A path was found and its reveal has started.
    Found { path: Path },
    NoPath,
}

impl SolveOutcome {
    /// Informational message for the user, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SolveOutcome::Found { .. } => None,
            SolveOutcome::NoPath => Some("No path found"),
        }
    }
}

/// Result of advancing the editor by one scheduler tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Step(RevealStep),
    /// The reveal has completed during this tick and editing is possible again.
    Finished,
    /// No reveal in flight.
    Idle,
}

/// Owns the grid and applies edits according to the current [EditorMode]. Solving hands an
/// immutable snapshot to the solver and reveals the found path over subsequent [ticks](Self::tick).
#[derive(Clone, Debug)]
pub struct Editor<S = BfsSolver> {
    grid: Grid,
    mode: EditorMode,
    resume_to: EditorMode,
    reveal: Option<RevealSequencer>,
    solver: S,
    config: EditorConfig,
}

impl Editor<BfsSolver> {
    pub fn new(rows: usize, cols: usize) -> Result<Editor<BfsSolver>, GridError> {
        Ok(Editor::with_solver(
            Grid::new(rows, cols)?,
            BfsSolver,
            EditorConfig::default(),
        ))
    }
}

impl<S: GridSolver> Editor<S> {
    pub fn with_solver(grid: Grid, solver: S, config: EditorConfig) -> Editor<S> {
        Editor {
            grid,
            mode: EditorMode::default(),
            resume_to: EditorMode::default(),
            reveal: None,
            solver,
            config,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_locked(&self) -> bool {
        self.mode == EditorMode::Locked
    }

    /// Delay the host should wait before the next [tick](Self::tick).
    pub fn reveal_delay(&self) -> Duration {
        self.reveal
            .as_ref()
            .map_or(self.config.reveal_delay, RevealSequencer::delay)
    }

    fn ensure_unlocked(&self) -> Result<(), EditorError> {
        if self.is_locked() {
            debug!("Editor is locked, request ignored");
            Err(EditorError::Locked)
        } else {
            Ok(())
        }
    }

    fn set_mode(&mut self, mode: EditorMode) -> Result<(), EditorError> {
        self.ensure_unlocked()?;
        self.mode = mode;
        Ok(())
    }

    pub fn select_start(&mut self) -> Result<(), EditorError> {
        self.set_mode(EditorMode::SelectingStart)
    }

    pub fn select_end(&mut self) -> Result<(), EditorError> {
        self.set_mode(EditorMode::SelectingEnd)
    }

    pub fn paint_walls(&mut self) -> Result<(), EditorError> {
        self.set_mode(EditorMode::PaintingWalls)
    }

    /// Applies a click on `coord` according to the current mode. Rejected edits leave the grid
    /// unchanged.
    pub fn click(&mut self, coord: Coord) -> Result<(), EditorError> {
        let result = match self.mode {
            EditorMode::SelectingStart => self.grid.set_start(coord),
            EditorMode::SelectingEnd => self.grid.set_end(coord),
            EditorMode::PaintingWalls => self.grid.toggle_wall(coord),
            EditorMode::Locked => return Err(EditorError::Locked),
        };
        if let Err(e) = result {
            info!("Edit at {} rejected: {}", coord, e);
        }
        result.map_err(EditorError::from)
    }

    /// Searches the current grid. On success the editor locks and the path is revealed over the
    /// following ticks; without a path nothing changes.
    pub fn solve(&mut self) -> Result<SolveOutcome, EditorError> {
        self.ensure_unlocked()?;
        let snapshot = self.grid.snapshot();
        let outcome = self
            .solver
            .find_path(&snapshot, self.grid.start(), self.grid.end())?;
        match outcome {
            SearchOutcome::Found(path) => {
                info!(
                    "Revealing {} cells, {:?} between steps",
                    path.interior().len(),
                    self.config.reveal_delay
                );
                self.resume_to = self.mode;
                self.mode = EditorMode::Locked;
                self.reveal = Some(RevealSequencer::new(&path, self.config.reveal_delay));
                Ok(SolveOutcome::Found { path })
            }
            SearchOutcome::Unreachable => {
                info!("No path from {} to {}", self.grid.start(), self.grid.end());
                Ok(SolveOutcome::NoPath)
            }
        }
    }

    /// Advances an in-flight reveal by one step. The tick after the last step unlocks the editor.
    pub fn tick(&mut self) -> Tick {
        let Some(reveal) = self.reveal.as_mut() else {
            return Tick::Idle;
        };
        match reveal.step(&mut self.grid) {
            Some(step) => Tick::Step(step),
            None => {
                self.finish_reveal();
                Tick::Finished
            }
        }
    }

    /// Stops an in-flight reveal. Cells revealed so far stay marked. Returns whether a reveal was
    /// running.
    pub fn cancel(&mut self) -> bool {
        match &self.reveal {
            Some(reveal) => {
                info!("Reveal cancelled with {} steps left", reveal.remaining());
                self.finish_reveal();
                true
            }
            None => false,
        }
    }

    fn finish_reveal(&mut self) {
        self.reveal = None;
        self.mode = match self.config.resume {
            ResumeMode::Previous => self.resume_to,
            ResumeMode::SelectStart => EditorMode::SelectingStart,
        };
    }

    /// Resets the grid, keeping the endpoints, and switches back to start selection.
    pub fn clear(&mut self) -> Result<(), EditorError> {
        self.ensure_unlocked()?;
        self.grid.clear();
        self.mode = EditorMode::SelectingStart;
        Ok(())
    }
}
