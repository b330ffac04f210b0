//! Shadewalk headless harness.
//!
//! A 2D top-down stealth game core built on:
//! - **bevy_ecs** for the entity-component-system architecture
//! - **serde/serde_json** for level persistence
//! - **crossbeam-channel** for the audio mixer bridge
//!
//! This executable runs the simulation without a window: it loads a level,
//! steps the world a fixed number of frames and reports what happened.
//! Useful for validating levels and soak-testing detection behavior; the
//! playable build wraps the same library with a windowing shell.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level assets/levels/demo.json --frames 600
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;

use shadewalk::game;
use shadewalk::resources::gameconfig::GameConfig;
use shadewalk::resources::input::{InputSample, InputState};
use shadewalk::resources::level::load_level_file;
use shadewalk::resources::renderqueue::RenderQueue;
use shadewalk::resources::worldsignals::WorldSignals;
use shadewalk::systems::time::update_world_time;

/// Shadewalk stealth core, headless simulation harness
#[derive(Parser)]
#[command(version, about = "Shadewalk: top-down stealth core (headless harness)")]
struct Cli {
    /// Level JSON to load.
    #[arg(long, default_value = "assets/levels/demo.json")]
    level: PathBuf,

    /// Number of fixed-step frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Config INI path (defaults to ./config.ini).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Parse and validate the level, then exit.
    #[arg(long)]
    validate: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path.clone()),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    let level = match load_level_file(&cli.level) {
        Ok(level) => level,
        Err(e) => {
            log::error!("cannot load level: {}", e);
            std::process::exit(1);
        }
    };

    if cli.validate {
        log::info!(
            "level ok: {} solid tiles, {} tile stamps, {} walls, {} enemies",
            level.grid_collision.len(),
            level.grid_tiles.len(),
            level.walls.len(),
            level.enemies.len()
        );
        return;
    }

    let mut world = World::new();
    let audio_rx = game::setup(&mut world, config, &level);

    let mut update = game::build_schedule();
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    let dt = 1.0 / 60.0;
    for _ in 0..cli.frames {
        // The harness has no keyboard; feed an idle sample each frame.
        world
            .resource_mut::<InputState>()
            .apply_sample(&InputSample::default());
        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();

        for cmd in audio_rx.try_iter() {
            log::debug!("audio: {:?}", cmd);
        }
    }

    let signals = world.resource::<WorldSignals>();
    let captures = signals.get_integer("captures").unwrap_or(0);
    let queue_len = world.resource::<RenderQueue>().len();
    log::info!(
        "simulated {} frames: {} capture(s), {} primitives in the last frame",
        cli.frames,
        captures,
        queue_len
    );
}
