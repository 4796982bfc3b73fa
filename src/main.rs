//! Rock Splitter headless runner
//!
//! Plays a scripted session against a recording surface and logs how the
//! field evolves. Set `ROCK_SPLITTER_CONFIG` to a JSON file to override
//! tuning, and `RUST_LOG=debug` to see collisions.

use rock_splitter::sim::EntityTag;
use rock_splitter::{Control, ControlState, CommandRecorder, ConfigError, Game, GameConfig};

const ARENA_WIDTH: f32 = 800.0;
const ARENA_HEIGHT: f32 = 600.0;
/// About ten seconds at 60 Hz
const FRAMES: u64 = 600;

/// Controls held on a given frame: sweep the gun around while firing in
/// bursts, with occasional thrust.
fn scripted_input(frame: u64) -> ControlState {
    let mut input = ControlState::new();
    input.set(Control::TurnRight, frame % 120 < 40);
    input.set(Control::TurnLeft, (60..80).contains(&(frame % 120)));
    input.set(Control::Thrust, (90..100).contains(&(frame % 120)));
    input.set(Control::Fire, frame % 8 == 0);
    input
}

fn load_config() -> Result<GameConfig, ConfigError> {
    match std::env::var_os("ROCK_SPLITTER_CONFIG") {
        Some(path) => GameConfig::load(path),
        None => Ok(GameConfig::default()),
    }
}

fn main() -> Result<(), ConfigError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Rock Splitter (headless) starting...");

    let config = load_config()?;
    let mut game = Game::new(CommandRecorder::new(ARENA_WIDTH, ARENA_HEIGHT), config);

    for frame in 0..FRAMES {
        game.frame(&scripted_input(frame));

        if (frame + 1) % 60 == 0 {
            log::info!(
                "frame {}: {} asteroids, {} bullets in flight, {} draw calls",
                game.frame_count(),
                game.asteroid_count(),
                game.count(EntityTag::Bullet),
                game.surface().commands().len()
            );
        }
    }

    if let Some(ship) = game.player() {
        log::info!(
            "ship at ({:.1}, {:.1}) heading {:.0} deg",
            ship.center.x,
            ship.center.y,
            ship.rotation().unwrap_or_default()
        );
    }
    match serde_json::to_string(&game.snapshot()) {
        Ok(json) => log::debug!("final snapshot: {json}"),
        Err(e) => log::warn!("could not serialize snapshot: {e}"),
    }

    Ok(())
}
