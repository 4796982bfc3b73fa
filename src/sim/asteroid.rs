//! Asteroids drift, wrap around the arena and split when something other
//! than another asteroid hits them.

use glam::Vec2;

use super::entity::{Entity, EntityKind, EntityTag};
use super::frame::FrameContext;
use crate::consts::ASTEROID_SPLIT_COUNT;
use crate::geometry::wrap_position;
use crate::renderer::{RenderSurface, colors, shapes};

pub(super) fn update(rock: &mut Entity, arena: Vec2) {
    rock.center = wrap_position(rock.center + rock.velocity, arena);
}

/// Asteroids pass through each other. Anything else destroys the asteroid,
/// and while power remains it breaks into fragments of the reduced power.
pub(super) fn on_collision(rock: &mut Entity, other: &Entity, ctx: &mut FrameContext) {
    let EntityKind::Asteroid { power } = rock.kind else {
        return;
    };
    if other.tag() == EntityTag::Asteroid {
        log::trace!("asteroid {} overlaps asteroid {}", rock.id, other.id);
        return;
    }

    ctx.queue_removal(rock.id);

    let power = power.saturating_sub(1);
    rock.kind = EntityKind::Asteroid { power };

    if power > 0 {
        let config = ctx.config;
        for _ in 0..ASTEROID_SPLIT_COUNT {
            let velocity = ctx.random_velocity(config.asteroid_max_speed);
            let id = ctx.next_entity_id();
            ctx.spawn(Entity::asteroid(id, rock.center, velocity, power, config));
        }
        log::debug!(
            "asteroid {} hit by {:?} {}, split into power {}",
            rock.id,
            other.tag(),
            other.id,
            power
        );
    } else {
        log::debug!("asteroid {} destroyed by {:?} {}", rock.id, other.tag(), other.id);
    }
}

pub(super) fn draw(rock: &Entity, surface: &mut dyn RenderSurface) {
    surface.set_fill_style(colors::ASTEROID);
    shapes::fill_body(surface, rock.center, rock.size);
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::config::GameConfig;

    struct Harness {
        config: GameConfig,
        rng: Pcg32,
        next_id: u32,
        removals: HashSet<u32>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                config: GameConfig::default(),
                rng: Pcg32::seed_from_u64(7),
                next_id: 100,
                removals: HashSet::new(),
            }
        }

        fn collide(&mut self, rock: &mut Entity, other: &Entity) -> Vec<Entity> {
            let mut ctx = FrameContext::new(
                Vec2::new(800.0, 600.0),
                &self.config,
                &mut self.rng,
                &mut self.next_id,
                &mut self.removals,
            );
            rock.on_collision(other, &mut ctx);
            ctx.finish()
        }
    }

    fn rock(id: u32, power: u32, config: &GameConfig) -> Entity {
        Entity::asteroid(id, Vec2::new(50.0, 60.0), Vec2::new(1.0, 2.0), power, config)
    }

    #[test]
    fn test_split_into_three_fragments() {
        let mut h = Harness::new();
        let mut target = rock(1, 3, &h.config);
        let bullet = Entity::bullet(2, Vec2::new(50.0, 60.0), Vec2::ZERO, 3.0);

        let fragments = h.collide(&mut target, &bullet);

        assert!(h.removals.contains(&1));
        assert_eq!(target.power(), Some(2));
        assert_eq!(fragments.len(), 3);
        for frag in &fragments {
            assert_eq!(frag.center, Vec2::new(50.0, 60.0));
            assert_eq!(frag.power(), Some(2));
            assert_eq!(frag.size, Vec2::splat(28.0));
            assert!(frag.velocity.x >= 0.0 && frag.velocity.x < 3.0);
            assert!(frag.velocity.y >= 0.0 && frag.velocity.y < 3.0);
        }
        let ids: HashSet<u32> = fragments.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(!ids.contains(&1));
    }

    #[test]
    fn test_last_power_leaves_no_fragments() {
        let mut h = Harness::new();
        let mut target = rock(1, 1, &h.config);
        let ship = Entity::player(2, Vec2::new(800.0, 600.0), &h.config.player);

        let fragments = h.collide(&mut target, &ship);

        assert!(h.removals.contains(&1));
        assert!(fragments.is_empty());
        assert_eq!(target.power(), Some(0));
    }

    #[test]
    fn test_asteroids_ignore_each_other() {
        let mut h = Harness::new();
        let mut a = rock(1, 3, &h.config);
        let b = rock(2, 2, &h.config);
        let before = a.clone();

        let fragments = h.collide(&mut a, &b);

        assert!(fragments.is_empty());
        assert!(h.removals.is_empty());
        assert_eq!(a, before);
    }

    #[test]
    fn test_update_wraps_to_opposite_edge() {
        let config = GameConfig::default();
        let mut a = Entity::asteroid(1, Vec2::new(799.0, 10.0), Vec2::new(2.5, -11.0), 2, &config);
        update(&mut a, Vec2::new(800.0, 600.0));
        assert_eq!(a.center, Vec2::new(0.0, 600.0));
    }
}
