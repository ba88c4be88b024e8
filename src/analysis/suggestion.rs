//! Grid size suggestions for an image fitted to a screen
//!
//! A size is suggested when every tile stays at least [`MIN_TILE_SIZE`]
//! pixels wide and tall. Columns and rows are chosen independently, so the
//! result is the cross product of the acceptable counts on each axis.

use crate::io::configuration::{MAX_SUGGESTED_DIVISIONS, MIN_SUGGESTED_DIVISIONS, MIN_TILE_SIZE};
use crate::spatial::layout::{Dimensions, fit_within};
use std::fmt;

/// A column and row count for a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridSize {
    /// Number of columns
    pub columns: usize,
    /// Number of rows
    pub rows: usize,
}

impl GridSize {
    /// Create a grid size
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

// Division counts that keep each piece of `length` at least MIN_TILE_SIZE
fn acceptable_divisions(length: u32) -> Vec<usize> {
    (MIN_SUGGESTED_DIVISIONS..=MAX_SUGGESTED_DIVISIONS)
        .filter(|&count| {
            u32::try_from(count).is_ok_and(|divisor| length / divisor >= MIN_TILE_SIZE)
        })
        .collect()
}

/// Suggest grid sizes for an image already fitted to the screen
///
/// Ordered by columns, then rows. An empty result means the image is too
/// small for any suggested size on this screen.
pub fn suggest_grid_sizes(scaled_width: u32, scaled_height: u32) -> Vec<GridSize> {
    let columns = acceptable_divisions(scaled_width);
    let rows = acceptable_divisions(scaled_height);

    columns
        .iter()
        .flat_map(|&column_count| {
            rows.iter()
                .map(move |&row_count| GridSize::new(column_count, row_count))
        })
        .collect()
}

/// Suggest grid sizes for an image of any size shown on `screen`
///
/// The image size is first fitted to the screen the way it will be
/// displayed.
pub fn suggest_for_screen(image: Dimensions, screen: Dimensions) -> Vec<GridSize> {
    let fitted = fit_within(image, screen);
    suggest_grid_sizes(fitted.width, fitted.height)
}
