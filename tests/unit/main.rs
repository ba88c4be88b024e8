//! Unit tests mirroring the source tree, one file per source file

use image::{Rgba, RgbaImage};

mod io;

/// Image whose pixels encode their own coordinates, so carved tiles can be
/// traced back to the region they came from
fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    })
}
