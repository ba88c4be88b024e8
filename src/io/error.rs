//! Error types for grid construction, image handling and CLI operations
//!
//! Move requests never produce errors: input that does not correspond to a
//! legal slide is ignored by the grid. Everything here covers building a
//! puzzle and moving images in and out of the process.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Grid dimensions cannot hold a playable puzzle
    InvalidDimensions {
        /// Requested column count
        columns: usize,
        /// Requested row count
        rows: usize,
        /// Why the combination is rejected
        reason: String,
    },

    /// Image is too small to give every tile at least one pixel
    ImageTooSmall {
        /// Image size in pixels (width, height)
        image: (u32, u32),
        /// Requested grid (columns, rows)
        grid: (usize, usize),
    },

    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No grid size keeps tiles above the minimum tile size
    NoSuggestion {
        /// Fitted image size in pixels (width, height)
        scaled: (u32, u32),
        /// Minimum tile edge in pixels
        min_tile_size: u32,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                columns,
                rows,
                reason,
            } => {
                write!(f, "Invalid grid {columns}x{rows}: {reason}")
            }
            Self::ImageTooSmall { image, grid } => {
                write!(
                    f,
                    "Image {}x{} is too small for a {}x{} grid",
                    image.0, image.1, grid.0, grid.1
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoSuggestion {
                scaled,
                min_tile_size,
            } => {
                write!(
                    f,
                    "No grid size fits a {}x{} image with tiles of at least {min_tile_size}px",
                    scaled.0, scaled.1
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid grid dimensions error
pub fn invalid_dimensions(columns: usize, rows: usize, reason: &impl ToString) -> PuzzleError {
    PuzzleError::InvalidDimensions {
        columns,
        rows,
        reason: reason.to_string(),
    }
}
