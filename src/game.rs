//! High-level scene setup.
//!
//! Builds the world from a parsed level document: inserts every resource,
//! registers the animation tables, spawns the enemy entities described by
//! the level, places the player at the starting checkpoint, and wires the
//! capture observer. Also assembles the per-frame update schedule.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;
use glam::Vec2;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::patrol::{
    PATROL_HITBOX, PATROL_SIGHT_ANGLE, PATROL_SIGHT_RADIUS, PATROL_SIGHT_Z, Patrol,
};
use crate::components::player::{PLAYER_HITBOX_H, PLAYER_HITBOX_W, Player};
use crate::components::rigidbody::RigidBody;
use crate::components::securitycamera::{
    CAMERA_SIGHT_ANGLE, CAMERA_SIGHT_RADIUS, CAMERA_SIGHT_Z, SecurityCamera,
};
use crate::components::sightcone::SightCone;
use crate::components::spotlight::Spotlight;
use crate::components::sprite::Sprite;
use crate::components::terraincutoff::TerrainCutoff;
use crate::components::trigger::{
    BUTTON_HITBOX, Button, CHECKPOINT_HITBOX, CameraBoundary, Checkpoint,
};
use crate::components::zombie::{ZOMBIE_HITBOX, Zombie};
use crate::events::audio::AudioCmd;
use crate::events::caught::caught_observer;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::audio::setup_audio;
use crate::resources::camera::GameCamera;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::level::{EnemySpec, LevelData, build_geometry};
use crate::resources::renderqueue::RenderQueue;
use crate::resources::screensize::ScreenSize;
use crate::resources::timers::Timers;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::audio::{forward_audio_cmds, update_bevy_audio_cmds};
use crate::systems::culling::{active_window, camera_follow};
use crate::systems::movement::movement;
use crate::systems::patrol::patrol_system;
use crate::systems::playercontroller::player_controller;
use crate::systems::render::render_system;
use crate::systems::reset::scene_reset;
use crate::systems::securitycamera::securitycamera_system;
use crate::systems::spotlight::spotlight_system;
use crate::systems::timers::update_timers;
use crate::systems::trigger::trigger_system;
use crate::systems::zombie::zombie_system;

const RENDER_WIDTH: i32 = 640;
const RENDER_HEIGHT: i32 = 360;

/// Initialize the world for a level and return the audio command receiver
/// for the shell.
pub fn setup(world: &mut World, config: GameConfig, level: &LevelData) -> Receiver<AudioCmd> {
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WorldSignals::default());
    world.insert_resource(Timers::default());
    world.insert_resource(InputState::default());
    world.insert_resource(RenderQueue::default());
    world.insert_resource(ScreenSize {
        w: RENDER_WIDTH,
        h: RENDER_HEIGHT,
    });
    world.insert_resource(GameCamera {
        offset: Vec2::new(RENDER_WIDTH as f32 * 0.5, RENDER_HEIGHT as f32 * 0.5),
        ..Default::default()
    });

    let audio_rx = setup_audio(world);

    let mut store = AnimationStore::new();
    register_animations(&mut store);
    world.insert_resource(store);

    if config.debug_hitboxes {
        world.insert_resource(DebugMode);
    }

    let (grid, walls, tiles) = build_geometry(level, config.tile_size);
    world.insert_resource(grid);
    world.insert_resource(walls);
    world.insert_resource(tiles);
    world.insert_resource(config);

    for spec in &level.enemies {
        spawn_enemy(world, spec);
    }

    // The player starts at the first authored checkpoint, which doubles as
    // the initial respawn point.
    let start = level
        .enemies
        .iter()
        .find_map(|spec| match spec {
            EnemySpec::Checkpoint { x, y, .. } => Some(Vec2::new(*x, *y)),
            _ => None,
        })
        .unwrap_or(Vec2::ZERO);
    {
        let mut signals = world.resource_mut::<WorldSignals>();
        signals.set_scalar("respawn_x", start.x);
        signals.set_scalar("respawn_y", start.y);
    }
    spawn_player(world, start);

    world.spawn(Observer::new(caught_observer));
    world.flush();

    // Preload the cues the core emits; the mixer resolves the paths.
    let mut audio_msgs = world.resource_mut::<Messages<AudioCmd>>();
    audio_msgs.write(AudioCmd::LoadFx {
        id: "alert".into(),
        path: "./assets/audio/alert.wav".into(),
    });
    audio_msgs.write(AudioCmd::LoadFx {
        id: "zombie_growl".into(),
        path: "./assets/audio/growl.wav".into(),
    });
    audio_msgs.write(AudioCmd::LoadFx {
        id: "zombie_calm".into(),
        path: "./assets/audio/calm.wav".into(),
    });

    audio_rx
}

/// The per-frame update schedule, in dependency order.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(player_controller);
    update.add_systems(camera_follow.after(player_controller));
    update.add_systems(active_window.after(camera_follow));
    update.add_systems(patrol_system.after(active_window));
    update.add_systems(spotlight_system.after(active_window));
    update.add_systems(securitycamera_system.after(active_window));
    update.add_systems(zombie_system.after(active_window));
    update.add_systems(
        movement
            .after(patrol_system)
            .after(spotlight_system)
            .after(securitycamera_system)
            .after(zombie_system),
    );
    update.add_systems(trigger_system.after(movement));
    update.add_systems(update_timers.after(trigger_system));
    update.add_systems(scene_reset.after(update_timers));
    update.add_systems(animation.after(scene_reset));
    update.add_systems(render_system.after(animation));
    update.add_systems(
        // audio systems must stay together: advance the queue, then forward
        (update_bevy_audio_cmds, forward_audio_cmds)
            .chain()
            .after(zombie_system)
            .after(scene_reset),
    );
    update
}

/// Spawn one enemy entity from its serialized spec.
pub fn spawn_enemy(world: &mut World, spec: &EnemySpec) {
    match spec {
        EnemySpec::Patrol { x, y, path, facing } => {
            let spawn = Vec2::new(*x, *y);
            world.spawn((
                MapPosition::new(*x, *y),
                RigidBody::new(),
                BoxCollider::centered(PATROL_HITBOX, PATROL_HITBOX),
                Patrol::new(
                    spawn,
                    path.iter().map(|&(px, py)| Vec2::new(px, py)),
                    *facing,
                ),
                SightCone::new(PATROL_SIGHT_RADIUS, PATROL_SIGHT_ANGLE, PATROL_SIGHT_Z),
                Animation::new("guard_idle/s"),
                Sprite::actor("guard", 16.0, 20.0),
                TerrainCutoff::new(2.0),
            ));
        }
        EnemySpec::Spotlight { x, y, path, radius } => {
            let spawn = Vec2::new(*x, *y);
            world.spawn((
                MapPosition::new(*x, *y),
                RigidBody::new(),
                Spotlight::new(spawn, path.iter().map(|&(px, py)| Vec2::new(px, py)), *radius),
            ));
        }
        EnemySpec::SecurityCamera {
            x,
            y,
            facing,
            swivel,
        } => {
            world.spawn((
                MapPosition::new(*x, *y),
                SecurityCamera::new(*facing, *swivel),
                SightCone::new(CAMERA_SIGHT_RADIUS, CAMERA_SIGHT_ANGLE, CAMERA_SIGHT_Z),
                Sprite::actor("camera", 12.0, 12.0),
                TerrainCutoff::new(-4.0),
            ));
        }
        EnemySpec::Zombie { x, y, leash } => {
            world.spawn((
                MapPosition::new(*x, *y),
                RigidBody::new(),
                BoxCollider::centered(ZOMBIE_HITBOX, ZOMBIE_HITBOX),
                Zombie::new(Vec2::new(*x, *y), *leash),
                Animation::new("zombie_idle/s"),
                Sprite::actor("zombie", 16.0, 20.0),
                TerrainCutoff::new(2.0),
            ));
        }
        EnemySpec::Button { x, y, id } => {
            world.spawn((
                MapPosition::new(*x, *y),
                BoxCollider::centered(BUTTON_HITBOX, BUTTON_HITBOX),
                Button::new(id.clone()),
            ));
        }
        EnemySpec::Checkpoint { x, y, id } => {
            world.spawn((
                MapPosition::new(*x, *y),
                BoxCollider::centered(CHECKPOINT_HITBOX, CHECKPOINT_HITBOX),
                Checkpoint::new(id.clone()),
            ));
        }
        EnemySpec::CameraBoundary { x, y, w, h } => {
            world.spawn((
                MapPosition::new(*x, *y),
                CameraBoundary::new(Vec2::new(*w, *h)),
            ));
        }
    }
}

/// Spawn the player entity at a world position.
pub fn spawn_player(world: &mut World, at: Vec2) -> Entity {
    world
        .spawn((
            Player::default(),
            MapPosition::new(at.x, at.y),
            RigidBody::new(),
            BoxCollider::new(PLAYER_HITBOX_W, PLAYER_HITBOX_H)
                .with_offset(Vec2::new(-PLAYER_HITBOX_W * 0.5, -PLAYER_HITBOX_H)),
            Animation::new("player_idle/s"),
            Sprite::actor("player", 16.0, 24.0),
            TerrainCutoff::default(),
        ))
        .id()
}

/// Register the built-in animation tables.
///
/// Actor sheets are laid out one cardinal direction per row (N, E, S, W);
/// diagonals reuse the adjacent cardinal via the 4-entry expansion.
pub fn register_animations(store: &mut AnimationStore) {
    let directional = |tex_key: &str, first_row: f32, frame_count: usize, fps: f32| {
        (0..4)
            .map(|row| AnimationResource {
                tex_key: tex_key.to_string(),
                position: Vec2::new(0.0, first_row + row as f32 * 24.0),
                displacement: 16.0,
                frame_count,
                fps,
                looped: true,
            })
            .collect::<Vec<_>>()
    };

    store.insert_directional("player_walk", directional("player", 0.0, 6, 10.0));
    store.insert_directional("player_idle", directional("player", 96.0, 2, 3.0));
    store.insert_directional("guard_walk", directional("guard", 0.0, 6, 8.0));
    store.insert_directional("guard_idle", directional("guard", 96.0, 2, 2.0));
    store.insert_directional("zombie_walk", directional("zombie", 0.0, 4, 6.0));
    store.insert_directional("zombie_idle", directional("zombie", 96.0, 2, 2.0));
}
