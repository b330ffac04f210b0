//! Scene reset.
//!
//! Consumes the `scene_reset` flag raised by the capture countdown (or by
//! the shell) and restores the scene: every enemy variant returns to its
//! authored pose, sight cones are invalidated so they recompile at the
//! restored pose, and the player respawns at the last checkpoint. Runs as
//! an exclusive system because it touches most of the world at once.
//!
//! Progression survives the reset on purpose: pressed buttons, activated
//! checkpoints and camera bounds are player progress, not enemy state.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::mapposition::MapPosition;
use crate::components::patrol::Patrol;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::securitycamera::SecurityCamera;
use crate::components::sightcone::SightCone;
use crate::components::spotlight::Spotlight;
use crate::components::zombie::Zombie;
use crate::resources::worldsignals::WorldSignals;

pub fn scene_reset(world: &mut World) {
    let due = world.resource::<WorldSignals>().has_flag("scene_reset");
    if !due {
        return;
    }
    {
        let mut signals = world.resource_mut::<WorldSignals>();
        signals.clear_flag("scene_reset");
        signals.clear_flag("player_caught");
    }
    let respawn = {
        let signals = world.resource::<WorldSignals>();
        Vec2::new(
            signals.get_scalar("respawn_x").unwrap_or(0.0),
            signals.get_scalar("respawn_y").unwrap_or(0.0),
        )
    };
    log::info!("scene reset, respawning player at {:?}", respawn);

    let mut players = world.query_filtered::<(&mut MapPosition, &mut RigidBody), With<Player>>();
    for (mut pos, mut rb) in players.iter_mut(world) {
        pos.pos = respawn;
        rb.velocity = Vec2::ZERO;
        rb.unfreeze();
    }

    let mut patrols =
        world.query::<(&mut Patrol, &mut MapPosition, &mut RigidBody, &mut SightCone)>();
    for (mut patrol, mut pos, mut rb, mut cone) in patrols.iter_mut(world) {
        patrol.reset();
        pos.pos = patrol.spawn;
        rb.velocity = Vec2::ZERO;
        cone.invalidate();
    }

    let mut spotlights = world.query::<(&mut Spotlight, &mut MapPosition, &mut RigidBody)>();
    for (mut spotlight, mut pos, mut rb) in spotlights.iter_mut(world) {
        spotlight.reset();
        pos.pos = spotlight.spawn;
        rb.velocity = Vec2::ZERO;
    }

    let mut cameras = world.query::<(&mut SecurityCamera, &mut SightCone)>();
    for (mut camera, mut cone) in cameras.iter_mut(world) {
        camera.reset();
        cone.invalidate();
    }

    let mut zombies = world.query::<(&mut Zombie, &mut MapPosition, &mut RigidBody)>();
    for (mut zombie, mut pos, mut rb) in zombies.iter_mut(world) {
        zombie.reset();
        pos.pos = zombie.home;
        rb.velocity = Vec2::ZERO;
    }
}
