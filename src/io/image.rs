//! Image loading for the CLI driver and PNG snapshots of a grid

use crate::io::configuration::EMPTY_SLOT_COLOR;
use crate::io::error::{PuzzleError, Result};
use crate::puzzle::Grid;
use crate::spatial::layout::{Dimensions, fit_within};
use image::imageops::{FilterType, overlay, resize};
use image::{Rgba, RgbaImage};
use log::info;
use std::path::Path;

/// Decode an image file into RGBA pixels
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let decoded = image::open(path).map_err(|e| PuzzleError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(decoded.to_rgba8())
}

/// Fit an image to the screen the way it will be displayed
///
/// Images that already fit are returned unchanged. The resampling itself is
/// delegated to the `image` crate.
pub fn fit_to_screen(image: RgbaImage, screen: Dimensions) -> RgbaImage {
    let original = Dimensions::new(image.width(), image.height());
    let fitted = fit_within(original, screen);
    if fitted == original {
        return image;
    }

    info!(
        "Fitting {}x{} image to {}x{}",
        original.width, original.height, fitted.width, fitted.height
    );
    resize(&image, fitted.width, fitted.height, FilterType::Triangle)
}

/// Draw every tile at its current animated position
///
/// The canvas covers the tiled area; the empty slot and any pixels not
/// covered by a tile show [`EMPTY_SLOT_COLOR`].
pub fn render_grid(grid: &Grid) -> RgbaImage {
    let width = u32::try_from(grid.pixel_width()).unwrap_or(u32::MAX);
    let height = u32::try_from(grid.pixel_height()).unwrap_or(u32::MAX);
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba(EMPTY_SLOT_COLOR));

    for tile in grid.tiles() {
        let position = tile.position();
        // Positions are truncated to whole pixels for drawing
        overlay(
            &mut canvas,
            tile.bitmap(),
            position.x as i64,
            position.y as i64,
        );
    }

    canvas
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
