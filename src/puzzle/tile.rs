//! A single sliding tile and its animation state

use crate::io::configuration::ANIMATION_SPEED;
use crate::math::motion::{advance, velocity_toward};
use crate::spatial::{Point, Slot};
use image::RgbaImage;

/// One carved piece of the puzzle image
///
/// The tile knows the slot it was cut from, the slot it currently occupies
/// and where it is drawn. Slot changes are issued by the grid; the tile then
/// animates itself toward the new slot on every [`Tile::update`].
#[derive(Debug, Clone)]
pub struct Tile {
    bitmap: RgbaImage,
    original_slot: Slot,
    current_slot: Slot,
    position: Point,
    target: Point,
    velocity: Point,
}

impl Tile {
    /// Create a resting tile in its original slot
    pub const fn new(bitmap: RgbaImage, slot: Slot, position: Point) -> Self {
        Self {
            bitmap,
            original_slot: slot,
            current_slot: slot,
            position,
            target: position,
            velocity: Point::ZERO,
        }
    }

    /// Assign a new slot and start animating toward `target`
    ///
    /// Each axis moves at [`ANIMATION_SPEED`] toward the target, starting
    /// from wherever the tile currently is, even mid-flight.
    pub fn move_to(&mut self, target: Point, slot: Slot) {
        self.current_slot = slot;
        self.target = target;
        self.velocity = Point::new(
            velocity_toward(self.position.x, target.x, ANIMATION_SPEED),
            velocity_toward(self.position.y, target.y, ANIMATION_SPEED),
        );
    }

    /// Assign a new slot and jump straight to `target` without animating
    pub const fn move_instantly(&mut self, target: Point, slot: Slot) {
        self.current_slot = slot;
        self.target = target;
        self.position = target;
        self.velocity = Point::ZERO;
    }

    /// Advance the animation by `elapsed_ms` milliseconds
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.velocity.is_zero() {
            return;
        }

        let elapsed = elapsed_ms as f32;
        let (x, vx) = advance(self.position.x, self.target.x, self.velocity.x, elapsed);
        let (y, vy) = advance(self.position.y, self.target.y, self.velocity.y, elapsed);
        self.position = Point::new(x, y);
        self.velocity = Point::new(vx, vy);
    }

    /// Whether the tile is still travelling on either axis
    pub fn is_moving(&self) -> bool {
        !self.velocity.is_zero()
    }

    /// Whether the tile sits in the slot it was cut from
    pub fn is_in_original_slot(&self) -> bool {
        self.current_slot == self.original_slot
    }

    /// Slot the tile was cut from
    pub const fn original_slot(&self) -> Slot {
        self.original_slot
    }

    /// Slot the tile currently occupies
    pub const fn current_slot(&self) -> Slot {
        self.current_slot
    }

    /// Current drawing position in grid pixels
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Position the tile is animating toward
    pub const fn target(&self) -> Point {
        self.target
    }

    /// Current per-axis velocity in pixels per millisecond
    pub const fn velocity(&self) -> Point {
        self.velocity
    }

    /// Image content of the tile
    pub const fn bitmap(&self) -> &RgbaImage {
        &self.bitmap
    }
}
