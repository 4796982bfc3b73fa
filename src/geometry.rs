//! Heading and screen-space helpers
//!
//! Angles are in degrees. 0 points "up" (negative screen Y) and angles grow
//! clockwise, since screen Y grows downward.

use glam::Vec2;

#[inline]
pub fn to_radians(angle: f32) -> f32 {
    angle * std::f32::consts::PI / 180.0
}

#[inline]
pub fn to_degrees(angle: f32) -> f32 {
    angle * 180.0 / std::f32::consts::PI
}

/// Velocity vector for a heading and scalar speed
#[inline]
pub fn velocity_from_angle(angle: f32, speed: f32) -> Vec2 {
    let rad = to_radians(angle);
    Vec2::new(rad.sin() * speed, -rad.cos() * speed)
}

/// Rotate a point around the origin
#[inline]
pub fn rotate(point: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = to_radians(angle).sin_cos();
    Vec2::new(point.x * cos - point.y * sin, point.y * cos + point.x * sin)
}

/// Above `max` resets to `min`, below `min` resets to `max`.
///
/// This is a teleport to the opposite bound, not a modulo wrap: overshoot is
/// discarded.
#[inline]
pub fn wrap_to_range(n: f32, min: f32, max: f32) -> f32 {
    if n > max {
        min
    } else if n < min {
        max
    } else {
        n
    }
}

/// Apply [`wrap_to_range`] to each axis of a position inside `[0, arena]`
#[inline]
pub fn wrap_position(pos: Vec2, arena: Vec2) -> Vec2 {
    Vec2::new(
        wrap_to_range(pos.x, 0.0, arena.x),
        wrap_to_range(pos.y, 0.0, arena.y),
    )
}
