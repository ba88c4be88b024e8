//! Puzzle grid engine
//!
//! This module contains the playable puzzle including:
//! - Animated tiles
//! - The grid with cascading slide moves and completion queries
//! - Solvable shuffling with a recorded undo sequence
//! - Replay of that sequence and a lock-guarded shared handle

/// Slot table, slicing and move resolution
pub mod grid;
/// Tick-driven replay of reverse moves
pub mod replay;
/// Mutex-guarded grid handle
pub mod shared;
/// Random walk shuffling
pub mod shuffle;
/// Single animated tile
pub mod tile;

pub use grid::{Grid, MoveOutcome, TileId};
pub use replay::{Replay, ReplayState};
pub use shared::SharedGrid;
pub use shuffle::ShuffleWalk;
pub use tile::Tile;
