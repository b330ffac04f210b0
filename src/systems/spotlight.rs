//! Spotlight update.
//!
//! Spotlights move straight toward the current waypoint (no turning) and
//! catch the player when their center enters the light circle. No grid
//! raycasting is involved.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::active::Active;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::spotlight::{SPOTLIGHT_ARRIVE_RADIUS, Spotlight};
use crate::events::caught::{CaughtEvent, DetectionCause};

pub fn spotlight_system(
    mut commands: Commands,
    mut query: Query<
        (Entity, &mut Spotlight, &MapPosition, &mut RigidBody),
        (With<Active>, Without<Player>),
    >,
    player: Query<(&MapPosition, &BoxCollider), With<Player>>,
) {
    let Ok((player_pos, player_box)) = player.single() else {
        return;
    };
    let player_center = player_box.center(player_pos.pos);

    for (entity, mut spotlight, pos, mut rb) in query.iter_mut() {
        rb.velocity = Vec2::ZERO;

        if let Some(target) = spotlight.path.target() {
            let to_target = target - pos.pos;
            if to_target.length() <= SPOTLIGHT_ARRIVE_RADIUS {
                spotlight.path.advance();
            } else {
                rb.velocity = to_target.normalize() * spotlight.speed;
            }
        }

        if pos.pos.distance(player_center) < spotlight.radius {
            commands.trigger(CaughtEvent {
                enemy: entity,
                cause: DetectionCause::Light,
            });
        }
    }
}
