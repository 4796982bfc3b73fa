//! Ship handling: fire, turn, thrust or coast, then move and wrap.

use glam::Vec2;

use super::entity::{Entity, EntityKind};
use super::frame::FrameContext;
use crate::geometry::{rotate, velocity_from_angle, wrap_position};
use crate::input::{Control, InputSource};
use crate::renderer::{RenderSurface, colors, shapes};

pub(super) fn update(ship: &mut Entity, input: &dyn InputSource, ctx: &mut FrameContext) {
    let EntityKind::Player { mut rotation } = ship.kind else {
        return;
    };
    let config = ctx.config;
    let tuning = &config.player;

    // Fire uses the heading from before this frame's turn
    if input.is_held(Control::Fire) {
        shoot(ship, rotation, ctx);
    }

    if input.is_held(Control::TurnRight) {
        rotation += tuning.rotation_step;
    } else if input.is_held(Control::TurnLeft) {
        rotation -= tuning.rotation_step;
    }

    // No speed cap while thrusting; coasting decays but never snaps to zero
    if input.is_held(Control::Thrust) {
        ship.velocity += velocity_from_angle(rotation, tuning.speed);
    } else {
        ship.velocity *= tuning.friction;
    }

    ship.center = wrap_position(ship.center + ship.velocity, ctx.arena);
    ship.kind = EntityKind::Player { rotation };
}

/// Spawn a bullet at the gun tip, heading where the ship points
fn shoot(ship: &Entity, rotation: f32, ctx: &mut FrameContext) {
    let config = ctx.config;
    let tip = rotate(Vec2::new(0.0, config.player.gun_offset), rotation);
    let velocity = velocity_from_angle(rotation, config.player.bullet_speed);
    let id = ctx.next_entity_id();
    ctx.spawn(Entity::bullet(id, ship.center - tip, velocity, config.bullet_size));
    log::trace!("ship fired bullet {id}");
}

// The ship cannot be destroyed; hits are only reported.
pub(super) fn on_collision(ship: &Entity, other: &Entity) {
    log::debug!("player {} collided with {:?} {}", ship.id, other.tag(), other.id);
}

pub(super) fn draw(ship: &Entity, rotation: f32, surface: &mut dyn RenderSurface) {
    surface.set_stroke_style(colors::SHIP);
    surface.set_line_width(1.0);
    shapes::stroke_polygon(surface, &shapes::ship_points(ship.center, rotation));
}
