//! Spatial value types and screen layout
//!
//! This module contains spatial-related functionality including:
//! - Slot addresses and pixel points
//! - Fitting an image on a screen and translating pointer input

/// Slot and pixel coordinate types
pub mod geometry;
/// Image fitting and letterbox padding arithmetic
pub mod layout;

pub use geometry::{Point, Slot};
pub use layout::{Dimensions, Letterbox};
