//! Bullets fly straight until they hit something. They never wrap.

use super::entity::Entity;
use super::frame::FrameContext;
use crate::renderer::{RenderSurface, colors, shapes};

pub(super) fn update(bullet: &mut Entity) {
    bullet.center += bullet.velocity;
}

pub(super) fn on_collision(bullet: &mut Entity, other: &Entity, ctx: &mut FrameContext) {
    ctx.queue_removal(bullet.id);
    log::debug!("bullet {} hit {:?} {}", bullet.id, other.tag(), other.id);
}

pub(super) fn draw(bullet: &Entity, surface: &mut dyn RenderSurface) {
    surface.set_fill_style(colors::BULLET);
    shapes::fill_body(surface, bullet.center, bullet.size);
}
