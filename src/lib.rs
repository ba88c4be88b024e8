//! Sliding-tile puzzle grid engine
//!
//! An image is cut into a grid of tiles with one slot left empty. Selecting
//! a tile in the empty slot's row or column slides it, and every tile in
//! between, toward the empty slot. Shuffles are random walks of legal moves,
//! so every puzzle is solvable and records the moves that undo it.

#![forbid(unsafe_code)]

/// Pre-construction analysis such as grid size suggestions
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Mathematical utilities for tile animation
pub mod math;
/// Tiles, the grid, shuffling and replay
pub mod puzzle;
/// Slot and pixel coordinates and screen layout
pub mod spatial;

pub use analysis::{GridSize, suggest_grid_sizes};
pub use io::error::{PuzzleError, Result};
pub use puzzle::{Grid, MoveOutcome, Replay, ReplayState, SharedGrid, Tile};
pub use spatial::{Point, Slot};
