//! Mathematical utilities for the engine

/// Per-axis constant-speed motion with exact arrival clamping
pub mod motion;
