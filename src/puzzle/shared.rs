//! Grid handle shared between an input context and the frame tick
//!
//! Moves and updates touch the same slot table and tile state, so each
//! operation holds one lock over the whole grid for its duration.

use crate::puzzle::grid::{Grid, MoveOutcome};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, mutex-guarded grid
#[derive(Debug, Clone)]
pub struct SharedGrid {
    inner: Arc<Mutex<Grid>>,
}

impl SharedGrid {
    /// Wrap a grid for shared use
    pub fn new(grid: Grid) -> Self {
        Self {
            inner: Arc::new(Mutex::new(grid)),
        }
    }

    /// Forward a grid-relative pointer press
    pub fn move_at_pixel(&self, x: i32, y: i32) -> MoveOutcome {
        self.inner.lock().move_at_pixel(x, y)
    }

    /// Forward a slot selection
    pub fn move_at_slot(&self, column: usize, row: usize) -> MoveOutcome {
        self.inner.lock().move_at_slot(column, row)
    }

    /// Advance animations by `elapsed_ms` milliseconds
    pub fn update(&self, elapsed_ms: u32) {
        self.inner.lock().update(elapsed_ms);
    }

    /// Whether the puzzle is solved
    pub fn is_complete(&self) -> bool {
        self.inner.lock().is_complete()
    }

    /// Whether every tile is at rest
    pub fn is_not_moving(&self) -> bool {
        self.inner.lock().is_not_moving()
    }

    /// Run `f` with exclusive access to the grid
    pub fn with<T>(&self, f: impl FnOnce(&mut Grid) -> T) -> T {
        f(&mut *self.inner.lock())
    }
}

impl From<Grid> for SharedGrid {
    fn from(grid: Grid) -> Self {
        Self::new(grid)
    }
}
