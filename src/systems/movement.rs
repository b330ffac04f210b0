//! Kinematic integration for non-player bodies.
//!
//! The player is excluded: the player controller resolves its motion one
//! axis at a time against the wall list and owns its own integration.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

pub fn movement(
    mut query: Query<(&mut MapPosition, &mut RigidBody), Without<Player>>,
    time: Res<WorldTime>,
) {
    for (mut position, mut rigidbody) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        let delta = rigidbody.integrate(time.delta);
        position.pos += delta;
    }
}
