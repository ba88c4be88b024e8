//! Solvable shuffling by random walk of the empty slot
//!
//! The empty slot only ever travels the way a player could move it: along
//! its row, then along its column, strictly alternating. Every step is a
//! legal cascade move, so the shuffled arrangement is always reachable from,
//! and therefore solvable back to, the solved state. This sidesteps the
//! parity trap of shuffling by arbitrary permutation.

use crate::puzzle::grid::Grid;
use crate::spatial::Slot;
use log::debug;
use rand::Rng;

/// Random walk state of the empty slot during a shuffle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleWalk {
    /// Empty slot before the previous step
    pub last_empty: Slot,
    /// Empty slot now
    pub current_empty: Slot,
    /// Whether the previous step travelled along a column
    pub last_move_vertical: bool,
}

impl ShuffleWalk {
    /// Start a walk from the given empty slot
    ///
    /// The first step travels along the row.
    pub const fn new(empty: Slot) -> Self {
        Self {
            last_empty: empty,
            current_empty: empty,
            last_move_vertical: true,
        }
    }

    /// Slots the empty slot may travel to on the next step
    ///
    /// After a vertical step these are the slots of the current row, after a
    /// horizontal step the slots of the current column. The current slot and
    /// the slot visited just before are excluded so a step never undoes the
    /// previous one.
    pub fn candidates(&self, columns: usize, rows: usize) -> Vec<Slot> {
        let current = self.current_empty;
        let line: Vec<Slot> = if self.last_move_vertical {
            (0..columns)
                .map(|column| Slot::new(column, current.row))
                .collect()
        } else {
            (0..rows).map(|row| Slot::new(current.column, row)).collect()
        };

        line.into_iter()
            .filter(|&slot| slot != current && slot != self.last_empty)
            .collect()
    }

    /// Choose the next destination uniformly among the candidates
    ///
    /// Always flips the travel axis. Returns `None` when the axis offers no
    /// candidate, which only happens on single-row or single-column grids.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        columns: usize,
        rows: usize,
        rng: &mut R,
    ) -> Option<Slot> {
        let candidates = self.candidates(columns, rows);
        self.last_move_vertical = !self.last_move_vertical;

        if candidates.is_empty() {
            return None;
        }
        let chosen = candidates.get(rng.random_range(0..candidates.len())).copied()?;

        self.last_empty = self.current_empty;
        self.current_empty = chosen;
        Some(chosen)
    }
}

impl Grid {
    /// Randomize a solved grid with `moves` legal random-walk steps
    ///
    /// Tiles jump without animating. The reverse-move record restarts at
    /// `[(0, 0)]` and each destination of the empty slot is prepended to it.
    pub(super) fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, moves: usize) {
        debug_assert!(self.is_complete());
        self.reset_reverse_moves();
        let mut walk = ShuffleWalk::new(self.empty_slot());
        let mut taken = 0;

        for _ in 0..moves {
            let from = walk.current_empty;
            let Some(destination) = walk.step(self.columns(), self.rows(), rng) else {
                continue;
            };

            self.push_reverse_move(destination);
            self.slide_run_instantly(from, destination);
            taken += 1;
        }

        debug_assert!(self.is_consistent());
        debug!(
            "Shuffled {}x{} grid with {taken} of {moves} steps, empty slot now {}",
            self.columns(),
            self.rows(),
            self.empty_slot()
        );
    }

    // Pulls every tile from just past `empty` up to `destination` into the
    // empty slot in turn, leaving `destination` empty
    fn slide_run_instantly(&mut self, empty: Slot, destination: Slot) {
        let mut source = empty;
        while let Some(next) = source.step_toward(destination) {
            self.slide_to_empty_instantly(next);
            source = next;
        }
    }
}
