//! Active-entity window.
//!
//! Marks every enemy and trigger inside the camera's view rectangle (plus
//! margin) with [`Active`]; the variant update systems only process marked
//! entities. The margin is sized so an enemy whose sight cone could reach
//! the screen keeps updating slightly off-screen.

use bevy_ecs::prelude::*;

use crate::components::active::Active;
use crate::components::mapposition::MapPosition;
use crate::components::patrol::Patrol;
use crate::components::securitycamera::SecurityCamera;
use crate::components::spotlight::Spotlight;
use crate::components::trigger::{Button, CameraBoundary, Checkpoint};
use crate::components::zombie::Zombie;
use crate::resources::camera::GameCamera;
use crate::resources::screensize::ScreenSize;

/// Extra world units around the view rect kept active.
pub const ACTIVE_MARGIN: f32 = 128.0;

#[allow(clippy::type_complexity)]
pub fn active_window(
    mut commands: Commands,
    camera: Res<GameCamera>,
    screen: Res<ScreenSize>,
    query: Query<
        (Entity, &MapPosition),
        Or<(
            With<Patrol>,
            With<Spotlight>,
            With<SecurityCamera>,
            With<Zombie>,
            With<Button>,
            With<Checkpoint>,
            With<CameraBoundary>,
        )>,
    >,
) {
    let (min, max) = camera.view_rect(screen.w as f32, screen.h as f32);
    for (entity, pos) in query.iter() {
        let inside = pos.pos.x >= min.x - ACTIVE_MARGIN
            && pos.pos.x <= max.x + ACTIVE_MARGIN
            && pos.pos.y >= min.y - ACTIVE_MARGIN
            && pos.pos.y <= max.y + ACTIVE_MARGIN;
        if inside {
            commands.entity(entity).insert(Active);
        } else {
            commands.entity(entity).remove::<Active>();
        }
    }
}

/// Keep the camera target on the player, honoring installed clamp bounds.
pub fn camera_follow(
    mut camera: ResMut<GameCamera>,
    player: Query<&MapPosition, With<crate::components::player::Player>>,
) {
    if let Ok(pos) = player.single() {
        camera.target = pos.pos;
        camera.apply_bounds();
    }
}
