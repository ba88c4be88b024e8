//! Frame capture and GIF generation for replay visualization

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::io::image::render_grid;
use crate::puzzle::Grid;
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Captures rendered grid frames during a replay
///
/// Frames beyond the capacity are dropped so long replays on large grids
/// keep memory bounded.
pub struct ReplayCapture {
    frames: Vec<RgbaImage>,
    max_frames: usize,
}

impl ReplayCapture {
    /// Create a capture holding at most `max_frames` frames
    pub fn new(max_frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(max_frames.min(256)),
            max_frames,
        }
    }

    /// Render the grid as it is drawn right now
    ///
    /// Returns `false` once the capture is full.
    pub fn record(&mut self, grid: &Grid) -> bool {
        if self.frames.len() >= self.max_frames {
            return false;
        }
        self.frames.push(render_grid(grid));
        true
    }

    /// Number of frames captured so far
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// When the requested delay is shorter than viewers reliably support,
    /// only every n-th frame is kept and shown for the longer delay, so the
    /// apparent animation speed is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"No frames captured for visualization",
            ));
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms)
        } else {
            1
        };
        let effective_delay_ms = frame_delay_ms * skip_factor;

        let last_index = self.frames.len() - 1;
        let frames = self
            .frames
            .iter()
            .enumerate()
            .filter(|(index, _)| index % skip_factor as usize == 0 || *index == last_index)
            .map(|(_, frame)| {
                Frame::from_parts(
                    frame.clone(),
                    0,
                    0,
                    Delay::from_numer_denom_ms(effective_delay_ms, 1),
                )
            });

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| PuzzleError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| PuzzleError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
