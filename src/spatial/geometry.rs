//! Slot addresses and pixel-space points
//!
//! Slots are discrete `(column, row)` cells of the grid. Points are
//! floating-point pixel coordinates relative to the grid's top-left corner.

use std::fmt;

/// A discrete grid cell address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Slot {
    /// Zero-based column
    pub column: usize,
    /// Zero-based row
    pub row: usize,
}

impl Slot {
    /// Create a slot from a column and row
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// The permanently empty slot of a freshly built grid
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Whether the slot lies inside a `columns` x `rows` grid
    pub const fn is_within(self, columns: usize, rows: usize) -> bool {
        self.column < columns && self.row < rows
    }

    /// Whether both slots lie in the same row
    pub const fn shares_row(self, other: Self) -> bool {
        self.row == other.row
    }

    /// Whether both slots lie in the same column
    pub const fn shares_column(self, other: Self) -> bool {
        self.column == other.column
    }

    /// Pixel position of the slot's top-left corner for the given tile size
    pub fn top_left(self, tile_width: u32, tile_height: u32) -> Point {
        Point::new(
            (self.column as u64 * u64::from(tile_width)) as f32,
            (self.row as u64 * u64::from(tile_height)) as f32,
        )
    }

    /// Step one slot along the axis toward `target`, on the axis they share
    ///
    /// Returns `None` once `self == target` or when the slots share
    /// neither row nor column.
    pub const fn step_toward(self, target: Self) -> Option<Self> {
        if self.row == target.row {
            if self.column < target.column {
                Some(Self::new(self.column + 1, self.row))
            } else if self.column > target.column {
                Some(Self::new(self.column - 1, self.row))
            } else {
                None
            }
        } else if self.column == target.column {
            if self.row < target.row {
                Some(Self::new(self.column, self.row + 1))
            } else {
                Some(Self::new(self.column, self.row - 1))
            }
        } else {
            None
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// A floating-point pixel coordinate or per-axis velocity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal component
    pub x: f32,
    /// Vertical component
    pub y: f32,
}

impl Point {
    /// Create a point from its components
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Whether both components are exactly zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
