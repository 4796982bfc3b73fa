//! Per-phase context handed to entity hooks
//!
//! Entities never touch the live collection. They spawn into a buffer that the
//! game appends after the phase, and queue removals that the game drains at
//! the end of the frame.

use std::collections::HashSet;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::entity::Entity;
use crate::config::GameConfig;

/// Random velocity in `[0, max_speed)` per axis
pub fn random_velocity(rng: &mut impl Rng, max_speed: f32) -> Vec2 {
    let x = rng.random::<f32>() * max_speed;
    let y = rng.random::<f32>() * max_speed;
    Vec2::new(x, y)
}

/// Random position inside the arena
pub fn random_position(rng: &mut impl Rng, arena: Vec2) -> Vec2 {
    let x = rng.random::<f32>() * arena.x;
    let y = rng.random::<f32>() * arena.y;
    Vec2::new(x, y)
}

/// Random starting power within the configured range
pub fn random_power(rng: &mut impl Rng, config: &GameConfig) -> u32 {
    let lo = config.initial_power_min;
    let hi = config.initial_power_max.max(lo);
    rng.random_range(lo..=hi)
}

pub struct FrameContext<'a> {
    pub arena: Vec2,
    pub config: &'a GameConfig,
    rng: &'a mut Pcg32,
    next_id: &'a mut u32,
    removals: &'a mut HashSet<u32>,
    spawned: Vec<Entity>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        arena: Vec2,
        config: &'a GameConfig,
        rng: &'a mut Pcg32,
        next_id: &'a mut u32,
        removals: &'a mut HashSet<u32>,
    ) -> Self {
        Self {
            arena,
            config,
            rng,
            next_id,
            removals,
            spawned: Vec::new(),
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = *self.next_id;
        *self.next_id += 1;
        id
    }

    /// Add an entity once the current phase completes
    pub fn spawn(&mut self, entity: Entity) {
        self.spawned.push(entity);
    }

    /// Mark an entity for removal at the end of the frame. Queuing twice is
    /// harmless.
    pub fn queue_removal(&mut self, id: u32) {
        self.removals.insert(id);
    }

    pub fn is_queued_for_removal(&self, id: u32) -> bool {
        self.removals.contains(&id)
    }

    pub fn random_velocity(&mut self, max_speed: f32) -> Vec2 {
        random_velocity(&mut *self.rng, max_speed)
    }

    /// Entities spawned during this phase, in spawn order
    pub fn finish(self) -> Vec<Entity> {
        self.spawned
    }
}
