//! Entity model
//!
//! Every simulated object shares a center, an axis-aligned box and a
//! velocity. Variant-specific state lives in [`EntityKind`], and behavior is
//! dispatched on it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::frame::FrameContext;
use super::{asteroid, bullet, player};
use crate::config::{GameConfig, PlayerTuning};
use crate::input::InputSource;
use crate::renderer::RenderSurface;

/// Variant-specific state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    /// The ship. Rotation is in degrees and unbounded.
    Player { rotation: f32 },
    Bullet,
    /// Power picks the box size and how many more splits remain
    Asteroid { power: u32 },
}

/// Discriminant of [`EntityKind`], used when reacting to "what hit me"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityTag {
    Player,
    Bullet,
    Asteroid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    /// World position, origin at the arena's top-left
    pub center: Vec2,
    /// Box width/height; never rotated for collisions
    pub size: Vec2,
    pub velocity: Vec2,
    pub kind: EntityKind,
}

impl Entity {
    /// Ship placed above the arena center, at rest and facing up
    pub fn player(id: u32, arena: Vec2, tuning: &PlayerTuning) -> Self {
        let size = Vec2::splat(tuning.size);
        Self {
            id,
            center: Vec2::new(arena.x / 2.0, arena.y / 2.0 - size.y * 2.0),
            size,
            velocity: Vec2::ZERO,
            kind: EntityKind::Player { rotation: 0.0 },
        }
    }

    pub fn bullet(id: u32, center: Vec2, velocity: Vec2, size: f32) -> Self {
        Self {
            id,
            center,
            size: Vec2::splat(size),
            velocity,
            kind: EntityKind::Bullet,
        }
    }

    /// Asteroid whose box comes from the size table
    pub fn asteroid(id: u32, center: Vec2, velocity: Vec2, power: u32, config: &GameConfig) -> Self {
        Self {
            id,
            center,
            size: Vec2::splat(config.asteroid_size(power)),
            velocity,
            kind: EntityKind::Asteroid { power },
        }
    }

    pub fn tag(&self) -> EntityTag {
        match self.kind {
            EntityKind::Player { .. } => EntityTag::Player,
            EntityKind::Bullet => EntityTag::Bullet,
            EntityKind::Asteroid { .. } => EntityTag::Asteroid,
        }
    }

    pub fn rotation(&self) -> Option<f32> {
        match self.kind {
            EntityKind::Player { rotation } => Some(rotation),
            _ => None,
        }
    }

    pub fn power(&self) -> Option<u32> {
        match self.kind {
            EntityKind::Asteroid { power } => Some(power),
            _ => None,
        }
    }

    /// Advance one frame
    pub fn update(&mut self, input: &dyn InputSource, ctx: &mut FrameContext) {
        match self.kind {
            EntityKind::Player { .. } => player::update(self, input, ctx),
            EntityKind::Bullet => bullet::update(self),
            EntityKind::Asteroid { .. } => asteroid::update(self, ctx.arena),
        }
    }

    /// React to overlapping `other` this frame
    pub fn on_collision(&mut self, other: &Entity, ctx: &mut FrameContext) {
        match self.kind {
            EntityKind::Player { .. } => player::on_collision(self, other),
            EntityKind::Bullet => bullet::on_collision(self, other, ctx),
            EntityKind::Asteroid { .. } => asteroid::on_collision(self, other, ctx),
        }
    }

    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        match self.kind {
            EntityKind::Player { rotation } => player::draw(self, rotation, surface),
            EntityKind::Bullet => bullet::draw(self, surface),
            EntityKind::Asteroid { .. } => asteroid::draw(self, surface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_spawn_position() {
        let arena = Vec2::new(800.0, 600.0);
        let ship = Entity::player(1, arena, &PlayerTuning::default());
        assert_eq!(ship.center, Vec2::new(400.0, 270.0));
        assert_eq!(ship.size, Vec2::splat(15.0));
        assert_eq!(ship.velocity, Vec2::ZERO);
        assert_eq!(ship.rotation(), Some(0.0));
        assert_eq!(ship.tag(), EntityTag::Player);
    }

    #[test]
    fn test_asteroid_size_from_power() {
        let config = GameConfig::default();
        for (power, expected) in [(1, 20.0), (2, 28.0), (3, 36.0), (4, 44.0)] {
            let rock = Entity::asteroid(1, Vec2::ZERO, Vec2::ZERO, power, &config);
            assert_eq!(rock.size, Vec2::splat(expected));
            assert_eq!(rock.power(), Some(power));
            assert_eq!(rock.rotation(), None);
        }
    }

    #[test]
    fn test_tags() {
        let bullet = Entity::bullet(3, Vec2::ZERO, Vec2::ZERO, 3.0);
        assert_eq!(bullet.tag(), EntityTag::Bullet);
        assert_eq!(bullet.power(), None);
        assert_eq!(bullet.size, Vec2::splat(3.0));
    }
}
