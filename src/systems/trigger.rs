//! Trigger updates: buttons, checkpoints, camera boundaries.
//!
//! All three act only on the false->true transition of "the player overlaps
//! me" (edge-triggered), and mutate progression state instead of capturing:
//! buttons raise `button_<id>` flags, checkpoints move the respawn point,
//! camera boundaries install camera clamp bounds.

use bevy_ecs::prelude::*;

use crate::components::active::Active;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::trigger::{Button, CameraBoundary, Checkpoint};
use crate::resources::camera::GameCamera;
use crate::resources::worldsignals::WorldSignals;

pub fn trigger_system(
    mut signals: ResMut<WorldSignals>,
    mut camera: ResMut<GameCamera>,
    player: Query<(&MapPosition, &BoxCollider), With<Player>>,
    mut buttons: Query<(&mut Button, &MapPosition, &BoxCollider), (With<Active>, Without<Player>)>,
    mut checkpoints: Query<
        (&mut Checkpoint, &MapPosition, &BoxCollider),
        (With<Active>, Without<Player>),
    >,
    mut boundaries: Query<(&mut CameraBoundary, &MapPosition), (With<Active>, Without<Player>)>,
) {
    let Ok((player_pos, player_box)) = player.single() else {
        return;
    };

    for (mut button, pos, collider) in buttons.iter_mut() {
        let overlapping = collider.overlaps(pos.pos, player_box, player_pos.pos);
        if overlapping && !button.was_overlapping {
            button.pressed = true;
            signals.set_flag(format!("button_{}", button.id));
            log::debug!("button '{}' pressed", button.id);
        }
        button.was_overlapping = overlapping;
    }

    for (mut checkpoint, pos, collider) in checkpoints.iter_mut() {
        let overlapping = collider.overlaps(pos.pos, player_box, player_pos.pos);
        if overlapping && !checkpoint.was_overlapping {
            checkpoint.activated = true;
            signals.set_scalar("respawn_x", pos.pos.x);
            signals.set_scalar("respawn_y", pos.pos.y);
            signals.set_string("checkpoint", checkpoint.id.clone());
            log::info!("checkpoint '{}' reached", checkpoint.id);
        }
        checkpoint.was_overlapping = overlapping;
    }

    let (player_min, player_max) = player_box.aabb(player_pos.pos);
    for (mut boundary, pos) in boundaries.iter_mut() {
        let (min, max) = boundary.bounds(pos.pos);
        let overlapping = player_min.x < max.x
            && player_max.x > min.x
            && player_min.y < max.y
            && player_max.y > min.y;
        if overlapping && !boundary.was_overlapping {
            camera.bounds = Some((min, max));
        }
        boundary.was_overlapping = overlapping;
    }
}
