//! Constant-speed motion along a single axis
//!
//! Each axis of a tile animates on its own: it advances at a fixed speed and
//! snaps exactly onto its target once it reaches or passes it.

/// Velocity for travelling from `from` to `to` at `speed`
///
/// Zero when the two coordinates are already equal.
pub fn velocity_toward(from: f32, to: f32, speed: f32) -> f32 {
    if to < from {
        -speed
    } else if to > from {
        speed
    } else {
        0.0
    }
}

/// Advance one axis by `velocity * elapsed_ms`, clamping onto `target`
///
/// Returns the new `(position, velocity)`. Once the step would reach or pass
/// the target the position is exactly `target` and the velocity is zero, so
/// an axis never overshoots regardless of the step size.
pub fn advance(position: f32, target: f32, velocity: f32, elapsed_ms: f32) -> (f32, f32) {
    if velocity == 0.0 {
        return (position, velocity);
    }

    let next = velocity.mul_add(elapsed_ms, position);
    let arrived = (velocity < 0.0 && next <= target) || (velocity > 0.0 && next >= target);

    if arrived {
        (target, 0.0)
    } else {
        (next, velocity)
    }
}
