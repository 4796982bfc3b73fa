//! Shape helpers for vector-style entities

use glam::Vec2;

use super::RenderSurface;
use crate::geometry::rotate;

/// Ship outline in local space, nose up
pub const SHIP_OUTLINE: [Vec2; 3] = [
    Vec2::new(0.0, -20.0),
    Vec2::new(10.0, 10.0),
    Vec2::new(-10.0, 10.0),
];

/// Ship outline rotated by the heading and moved to `center`
pub fn ship_points(center: Vec2, rotation: f32) -> [Vec2; 3] {
    SHIP_OUTLINE.map(|p| center + rotate(p, rotation))
}

/// Top-left corner and size of the box around `center`
#[inline]
pub fn body_rect(center: Vec2, size: Vec2) -> (Vec2, Vec2) {
    (center - size / 2.0, size)
}

/// Fill the axis-aligned box around `center`
pub fn fill_body(surface: &mut (impl RenderSurface + ?Sized), center: Vec2, size: Vec2) {
    let (top_left, size) = body_rect(center, size);
    surface.fill_rect(top_left.x, top_left.y, size.x, size.y);
}

/// Trace a closed polygon and stroke it
pub fn stroke_polygon(surface: &mut (impl RenderSurface + ?Sized), points: &[Vec2]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    surface.begin_path();
    surface.move_to(first.x, first.y);
    for p in rest {
        surface.line_to(p.x, p.y);
    }
    surface.close_path();
    surface.stroke();
}
