//! Patrol guard update.
//!
//! Per frame, for every in-window guard: steer toward the current waypoint
//! (turn first at the capped rate, translate once roughly aligned), switch
//! the walk/idle animation by movement magnitude, keep the sight cone
//! anchored to the hitbox center, recompile it while moving or if it has
//! never been compiled, and raise the caught condition on hitbox overlap
//! or cone visibility.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::active::Active;
use crate::components::animation::{Animation, Direction8, switch_animation};
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::patrol::{PATROL_ALIGN_TOLERANCE, PATROL_ARRIVE_RADIUS, Patrol};
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sightcone::{SightCone, wrap_degrees};
use crate::events::caught::{CaughtEvent, DetectionCause};
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::occupancy::OccupancyGrid;
use crate::resources::worldtime::WorldTime;

pub fn patrol_system(
    time: Res<WorldTime>,
    grid: Res<OccupancyGrid>,
    config: Res<GameConfig>,
    store: Res<AnimationStore>,
    mut commands: Commands,
    mut query: Query<
        (
            Entity,
            &mut Patrol,
            &MapPosition,
            &mut RigidBody,
            &mut SightCone,
            &mut Animation,
            &BoxCollider,
        ),
        (With<Active>, Without<Player>),
    >,
    player: Query<(&MapPosition, &BoxCollider), With<Player>>,
) {
    let Ok((player_pos, player_box)) = player.single() else {
        return;
    };
    let player_center = player_box.center(player_pos.pos);
    let tuning = config.sight_tuning();

    for (entity, mut patrol, pos, mut rb, mut cone, mut anim, collider) in query.iter_mut() {
        rb.velocity = Vec2::ZERO;

        if let Some(target) = patrol.path.target() {
            let to_target = target - pos.pos;
            if to_target.length() <= PATROL_ARRIVE_RADIUS {
                patrol.path.advance();
            } else {
                let bearing = to_target.y.atan2(to_target.x).to_degrees();
                let diff = wrap_degrees(bearing - patrol.facing);
                let max_turn = patrol.turn_rate * time.delta;
                if diff.abs() <= max_turn {
                    patrol.facing = bearing;
                } else {
                    patrol.facing = wrap_degrees(patrol.facing + max_turn.copysign(diff));
                }
                // translate only once the turn has (almost) finished
                if wrap_degrees(bearing - patrol.facing).abs() <= PATROL_ALIGN_TOLERANCE {
                    let rad = patrol.facing.to_radians();
                    rb.velocity = Vec2::new(rad.cos(), rad.sin()) * patrol.speed;
                }
            }
        }

        let moving = rb.velocity.length_squared() > f32::EPSILON;
        let base = if moving { "guard_walk" } else { "guard_idle" };
        let dir = Direction8::from_angle(patrol.facing);
        let key = format!("{}/{}", base, dir.suffix());
        switch_animation(&mut anim, &store, &key);

        cone.center = collider.center(pos.pos);
        cone.facing = patrol.facing;
        if moving || !cone.compiled() {
            cone.compile(&grid, &tuning);
        }

        if collider.overlaps(pos.pos, player_box, player_pos.pos) {
            commands.trigger(CaughtEvent {
                enemy: entity,
                cause: DetectionCause::Contact,
            });
        } else if cone.sees(player_center) {
            commands.trigger(CaughtEvent {
                enemy: entity,
                cause: DetectionCause::Sight,
            });
        }
    }
}
