//! Frame loop
//!
//! One call to [`Game::frame`] per display refresh: update every entity,
//! resolve collisions, drop what was destroyed, then draw.

use std::collections::HashSet;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::{colliding_pairs, pair_mut};
use super::entity::{Entity, EntityTag};
use super::frame::{FrameContext, random_position, random_power, random_velocity};
use crate::config::GameConfig;
use crate::input::InputSource;
use crate::renderer::RenderSurface;

/// Serializable view of the live collection
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot<'a> {
    pub frame: u64,
    pub arena: Vec2,
    pub entities: &'a [Entity],
}

/// A game session bound to its render surface
pub struct Game<S: RenderSurface> {
    surface: S,
    arena: Vec2,
    config: GameConfig,
    rng: Pcg32,
    /// Live entities; order is update order and draw order
    entities: Vec<Entity>,
    pending_removal: HashSet<u32>,
    next_id: u32,
    frame_count: u64,
}

impl<S: RenderSurface> Game<S> {
    /// Start a session: one ship plus the configured number of asteroids.
    /// The arena takes the surface's size.
    pub fn new(surface: S, config: GameConfig) -> Self {
        let mut game = Self::empty(surface, config);
        game.add_player();
        for _ in 0..game.config.asteroid_count {
            game.add_random_asteroid();
        }
        log::info!(
            "Game started: arena {}x{}, {} asteroids, seed {}",
            game.arena.x,
            game.arena.y,
            game.asteroid_count(),
            game.config.seed
        );
        game
    }

    /// A session with no entities
    pub fn empty(surface: S, config: GameConfig) -> Self {
        let arena = surface.size();
        let rng = Pcg32::seed_from_u64(config.seed);
        Self {
            surface,
            arena,
            config,
            rng,
            entities: Vec::new(),
            pending_removal: HashSet::new(),
            next_id: 1,
            frame_count: 0,
        }
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a ship at the start position
    pub fn add_player(&mut self) -> u32 {
        let id = self.next_entity_id();
        self.entities
            .push(Entity::player(id, self.arena, &self.config.player));
        id
    }

    pub fn add_asteroid(&mut self, center: Vec2, velocity: Vec2, power: u32) -> u32 {
        let id = self.next_entity_id();
        self.entities
            .push(Entity::asteroid(id, center, velocity, power, &self.config));
        id
    }

    pub fn add_bullet(&mut self, center: Vec2, velocity: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.entities
            .push(Entity::bullet(id, center, velocity, self.config.bullet_size));
        id
    }

    /// Asteroid at a random position with random velocity and power
    pub fn add_random_asteroid(&mut self) -> u32 {
        let center = random_position(&mut self.rng, self.arena);
        let velocity = random_velocity(&mut self.rng, self.config.asteroid_max_speed);
        let power = random_power(&mut self.rng, &self.config);
        self.add_asteroid(center, velocity, power)
    }

    /// Mark an entity for removal at the end of the next step
    pub fn queue_removal(&mut self, id: u32) {
        self.pending_removal.insert(id);
    }

    /// Run one full frame: simulate, then draw
    pub fn frame(&mut self, input: &impl InputSource) {
        self.step(input);
        self.draw();
    }

    /// Advance the simulation one frame without drawing
    pub fn step(&mut self, input: &impl InputSource) {
        self.update_entities(input);
        self.resolve_collisions();
        self.drain_removals();
        self.frame_count += 1;
        log::trace!(
            "frame {}: {} entities",
            self.frame_count,
            self.entities.len()
        );
    }

    /// Update phase. Entities spawned here join after every existing entity
    /// has updated, so they first move next frame.
    fn update_entities(&mut self, input: &dyn InputSource) {
        let mut ctx = FrameContext::new(
            self.arena,
            &self.config,
            &mut self.rng,
            &mut self.next_id,
            &mut self.pending_removal,
        );
        for entity in &mut self.entities {
            entity.update(input, &mut ctx);
        }
        let spawned = ctx.finish();
        self.entities.extend(spawned);
    }

    /// Collision phase. Both sides of each overlapping pair react, first `i`
    /// then `j`. Fragments join after the scan, so they cannot be hit in the
    /// frame that created them.
    fn resolve_collisions(&mut self) {
        let pairs = colliding_pairs(&self.entities);
        if pairs.is_empty() {
            return;
        }
        let mut ctx = FrameContext::new(
            self.arena,
            &self.config,
            &mut self.rng,
            &mut self.next_id,
            &mut self.pending_removal,
        );
        for (i, j) in pairs {
            let (a, b) = pair_mut(&mut self.entities, i, j);
            a.on_collision(b, &mut ctx);
            b.on_collision(a, &mut ctx);
        }
        let spawned = ctx.finish();
        self.entities.extend(spawned);
    }

    /// Remove everything queued this frame. IDs queued twice or already gone
    /// are ignored.
    fn drain_removals(&mut self) {
        if self.pending_removal.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending_removal);
        self.entities.retain(|e| !pending.contains(&e.id));
    }

    /// Clear the surface and draw entities in collection order
    pub fn draw(&mut self) {
        self.surface.clear(self.arena.x, self.arena.y);
        for entity in &self.entities {
            entity.draw(&mut self.surface);
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: u32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn player(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag() == EntityTag::Player)
    }

    pub fn asteroid_count(&self) -> usize {
        self.count(EntityTag::Asteroid)
    }

    pub fn count(&self, tag: EntityTag) -> usize {
        self.entities.iter().filter(|e| e.tag() == tag).count()
    }

    pub fn arena(&self) -> Vec2 {
        self.arena
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            frame: self.frame_count,
            arena: self.arena,
            entities: &self.entities,
        }
    }
}
