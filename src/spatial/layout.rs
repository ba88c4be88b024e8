//! Screen layout arithmetic for fitting an image and mapping pointer input
//!
//! Only sizes are computed here. Producing the resized bitmap is left to the
//! image provider.

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Dimensions {
    /// Create dimensions from a width and height
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

// Keeps the aspect ratio while forcing one axis, truncating the other.
// Neither axis drops below one pixel.
fn scale_to_width(image: Dimensions, width: u32) -> Dimensions {
    let width = width.max(1);
    let height = u64::from(image.height) * u64::from(width) / u64::from(image.width.max(1));
    Dimensions::new(width, (height as u32).max(1))
}

fn scale_to_height(image: Dimensions, height: u32) -> Dimensions {
    let height = height.max(1);
    let width = u64::from(image.width) * u64::from(height) / u64::from(image.height.max(1));
    Dimensions::new((width as u32).max(1), height)
}

/// Size of `image` once fitted inside `screen`, preserving aspect ratio
///
/// Images that already fit are left unchanged. A wider image is scaled to
/// the screen width first and, if still too tall, to the screen height.
pub fn fit_within(image: Dimensions, screen: Dimensions) -> Dimensions {
    if image.width > screen.width {
        let by_width = scale_to_width(image, screen.width);
        if by_width.height > screen.height {
            scale_to_height(image, screen.height)
        } else {
            by_width
        }
    } else if image.height > screen.height {
        scale_to_height(image, screen.height)
    } else {
        image
    }
}

/// Offset that centers a fitted image on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Letterbox {
    /// Unused pixels left of the image
    pub left: u32,
    /// Unused pixels above the image
    pub top: u32,
    /// Fitted image size
    pub content: Dimensions,
}

impl Letterbox {
    /// Compute the centering padding for `content` on `screen`
    pub const fn new(content: Dimensions, screen: Dimensions) -> Self {
        Self {
            left: screen.width.saturating_sub(content.width) / 2,
            top: screen.height.saturating_sub(content.height) / 2,
            content,
        }
    }

    /// Translate a raw screen pointer into grid-relative pixels
    ///
    /// The result feeds [`Grid::move_at_pixel`](crate::puzzle::Grid::move_at_pixel)
    /// directly. Returns `None` when the pointer falls in the padding or the
    /// offset does not fit an `i32`.
    pub fn to_grid_space(&self, x: u32, y: u32) -> Option<(i32, i32)> {
        let gx = x.checked_sub(self.left)?;
        let gy = y.checked_sub(self.top)?;
        if gx >= self.content.width || gy >= self.content.height {
            return None;
        }
        Some((i32::try_from(gx).ok()?, i32::try_from(gy).ok()?))
    }
}
