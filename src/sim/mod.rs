//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only, so a seed and an input sequence replay exactly
//! - Stable iteration order (collection order)
//! - Drawing goes through `RenderSurface`, never a concrete canvas

mod asteroid;
mod bullet;
pub mod collision;
pub mod entity;
pub mod frame;
pub mod game;
mod player;

pub use collision::{aabb_overlap, colliding, colliding_pairs};
pub use entity::{Entity, EntityKind, EntityTag};
pub use frame::FrameContext;
pub use game::{Game, GameSnapshot};
