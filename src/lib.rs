//! # grid_path_editor
//!
//! The core of a grid path visualizer. A user paints walls on a rectangular grid, places a start
//! and an end cell and watches the shortest path between them being revealed one cell at a time.
//!
//! - [Grid] keeps the cell states and enforces the edit rules (one start, one end, endpoints are
//!   never walled).
//! - [find_path] runs an unweighted
//!   [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) over an immutable
//!   [Snapshot] with 4-directional moves. Not finding a path is a regular
//!   [SearchOutcome::Unreachable], not an error.
//! - [RevealSequencer] folds a found [Path] back into the grid, one step per scheduler tick.
//! - [Editor] ties these together behind mode changes, clicks, solve and clear requests.
//!
//! ```
//! use grid_path_editor::{Coord, Editor, Tick};
//!
//! let mut editor = Editor::new(3, 3).unwrap();
//! editor.paint_walls().unwrap();
//! editor.click(Coord::new(1, 1)).unwrap();
//! editor.solve().unwrap();
//! while editor.tick() != Tick::Finished {
//!     // A real host sleeps editor.reveal_delay() here.
//! }
//! assert_eq!(editor.grid().to_string(), "S**\n.#*\n..E\n");
//! ```
mod bfs;
pub mod cell;
pub mod coord;
pub mod editor;
pub mod error;
pub mod grid;
pub mod path;
pub mod reveal;
pub mod snapshot;
pub mod solver;

pub use cell::CellState;
pub use coord::Coord;
pub use editor::{Editor, EditorConfig, EditorMode, ResumeMode, SolveOutcome, Tick};
pub use error::{EditorError, GridError, ParseSnapshotError, SolveError};
pub use grid::Grid;
pub use path::Path;
pub use reveal::{RevealSequencer, RevealStep};
pub use snapshot::Snapshot;
pub use solver::{breadth_first::BfsSolver, find_path, GridSolver, SearchOutcome};

/// Default time between two reveal steps in milliseconds.
pub const ANIMATION_SPEED_MS: u64 = 50;
/// Inline capacity for neighbourhoods, a cell has at most 4 axis neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
