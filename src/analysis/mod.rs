//! Analysis of source images ahead of building a puzzle

/// Grid size suggestions based on minimum tile size
pub mod suggestion;

pub use suggestion::{GridSize, suggest_for_screen, suggest_grid_sizes};
