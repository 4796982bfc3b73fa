//! Rock Splitter - a minimal vector arcade game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entities, collisions, game loop)
//! - `renderer`: Render surface abstraction and a recording surface
//! - `input`: Held-control queries and keyboard mapping
//! - `config`: Data-driven tuning loaded from JSON
//! - `geometry`: Heading, rotation and screen-wrap helpers

pub mod config;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig, PlayerTuning};
pub use geometry::{rotate, velocity_from_angle, wrap_position, wrap_to_range};
pub use input::{Control, ControlState, InputSource};
pub use renderer::{Color, CommandRecorder, DrawCommand, RenderSurface};
pub use sim::{Entity, EntityKind, EntityTag, Game};

/// Game configuration constants
pub mod consts {
    /// Asteroids spawned at game start
    pub const ASTEROID_COUNT: u32 = 3;
    /// Upper bound (exclusive) of random asteroid speed, per axis
    pub const ASTEROID_MAX_SPEED: f32 = 3.0;
    /// Asteroid box size indexed by power
    pub const ASTEROID_SIZES: [f32; 5] = [15.0, 20.0, 28.0, 36.0, 44.0];
    /// Initial asteroid power range (inclusive)
    pub const ASTEROID_POWER_MIN: u32 = 2;
    pub const ASTEROID_POWER_MAX: u32 = 4;
    /// Fragments produced when an asteroid splits
    pub const ASTEROID_SPLIT_COUNT: usize = 3;

    /// Ship thrust per frame
    pub const PLAYER_SPEED: f32 = 0.2;
    /// Velocity multiplier per frame while coasting
    pub const PLAYER_FRICTION: f32 = 0.98;
    /// Degrees turned per frame
    pub const PLAYER_ROTATION_STEP: f32 = 5.0;
    /// Ship bounding box edge
    pub const PLAYER_SIZE: f32 = 15.0;
    /// Distance from ship center to the gun tip
    pub const PLAYER_GUN_OFFSET: f32 = 20.0;

    /// Bullet speed along the ship heading
    pub const BULLET_SPEED: f32 = 10.0;
    /// Bullet bounding box edge
    pub const BULLET_SIZE: f32 = 3.0;

    /// Default RNG seed
    pub const DEFAULT_SEED: u64 = 0x5EED;
}
