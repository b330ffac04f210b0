//! Security camera update.
//!
//! Cameras are stationary: the per-frame work is sweeping the facing
//! between the swivel extremes, recompiling the sight cone, and testing
//! the player point. Unlike patrols, the cone recompiles every frame --
//! the sweep moves it even though the camera does not.

use bevy_ecs::prelude::*;

use crate::components::active::Active;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::securitycamera::SecurityCamera;
use crate::components::sightcone::SightCone;
use crate::events::caught::{CaughtEvent, DetectionCause};
use crate::resources::gameconfig::GameConfig;
use crate::resources::occupancy::OccupancyGrid;
use crate::resources::worldtime::WorldTime;

pub fn securitycamera_system(
    time: Res<WorldTime>,
    grid: Res<OccupancyGrid>,
    config: Res<GameConfig>,
    mut commands: Commands,
    mut query: Query<
        (Entity, &mut SecurityCamera, &MapPosition, &mut SightCone),
        (With<Active>, Without<Player>),
    >,
    player: Query<(&MapPosition, &BoxCollider), With<Player>>,
) {
    let Ok((player_pos, player_box)) = player.single() else {
        return;
    };
    let player_center = player_box.center(player_pos.pos);
    let tuning = config.sight_tuning();

    for (entity, mut camera, pos, mut cone) in query.iter_mut() {
        camera.sweep(time.delta);

        cone.center = pos.pos;
        cone.facing = camera.facing;
        cone.compile(&grid, &tuning);

        if cone.sees(player_center) {
            commands.trigger(CaughtEvent {
                enemy: entity,
                cause: DetectionCause::Sight,
            });
        }
    }
}
