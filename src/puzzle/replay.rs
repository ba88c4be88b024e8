//! Tick-driven playback of a grid's reverse-move record
//!
//! Used for idle-screen demos: the shuffled puzzle solves itself one cascade
//! at a time, each issued only after the previous slide has settled.

use crate::puzzle::grid::Grid;
use crate::spatial::Slot;
use log::debug;

/// Playback status after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    /// Moves remain to be issued
    Playing,
    /// Every move was issued or the grid is already solved
    Finished,
}

/// Replays recorded reverse moves into a grid
#[derive(Debug, Clone)]
pub struct Replay {
    moves: Vec<Slot>,
    next: usize,
    finished: bool,
}

impl Replay {
    /// Capture the reverse-move record of `grid`
    ///
    /// Playback starts at index 1; index 0 is the slot that is already empty.
    pub fn new(grid: &Grid) -> Self {
        Self::from_moves(grid.reverse_moves())
    }

    /// Replay an explicit reverse-move record
    pub const fn from_moves(moves: Vec<Slot>) -> Self {
        Self {
            moves,
            next: 1,
            finished: false,
        }
    }

    /// Advance animations and issue the next move once the grid is at rest
    pub fn tick(&mut self, grid: &mut Grid, elapsed_ms: u32) -> ReplayState {
        grid.update(elapsed_ms);

        if !self.finished && grid.is_not_moving() {
            match self.moves.get(self.next) {
                Some(slot) => {
                    self.next += 1;
                    grid.move_at_slot(slot.column, slot.row);
                    self.finished = grid.is_complete();
                }
                None => self.finished = true,
            }

            if self.finished {
                debug!("Replay finished after {} moves", self.issued());
            }
        }

        self.state()
    }

    /// Current playback status
    pub const fn state(&self) -> ReplayState {
        if self.finished {
            ReplayState::Finished
        } else {
            ReplayState::Playing
        }
    }

    /// Whether playback is over and the last slide has come to rest
    pub fn is_settled(&self, grid: &Grid) -> bool {
        self.finished && grid.is_not_moving()
    }

    /// Number of moves issued so far
    pub const fn issued(&self) -> usize {
        self.next.saturating_sub(1)
    }

    /// Number of moves the record can issue
    pub const fn total(&self) -> usize {
        self.moves.len().saturating_sub(1)
    }
}
