//! Zombie chaser update.
//!
//! Two-mode state machine: CHASING walks toward the player while the zombie
//! stays within its leash radius of home; RETURNING walks back home once
//! the leash is exceeded. Reaching home flips back to chasing. Every mode
//! switch re-rolls the walk speed and plays a cue through the audio bridge.
//! Capture is direct hitbox overlap only.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::active::Active;
use crate::components::animation::{Animation, Direction8, switch_animation};
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::zombie::{ZOMBIE_ARRIVE_RADIUS, Zombie, ZombieMode};
use crate::events::audio::AudioCmd;
use crate::events::caught::{CaughtEvent, DetectionCause};
use crate::resources::animationstore::AnimationStore;

pub fn zombie_system(
    store: Res<AnimationStore>,
    mut commands: Commands,
    mut audio: MessageWriter<AudioCmd>,
    mut query: Query<
        (
            Entity,
            &mut Zombie,
            &MapPosition,
            &mut RigidBody,
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

    for (entity, mut zombie, pos, mut rb, mut anim, collider) in query.iter_mut() {
        rb.velocity = Vec2::ZERO;
        let from_home = pos.pos.distance(zombie.home);

        match zombie.mode {
            ZombieMode::Chasing => {
                if from_home > zombie.leash {
                    zombie.switch_mode();
                    audio.write(AudioCmd::PlayFx {
                        id: "zombie_calm".into(),
                    });
                } else {
                    let to_player = player_center - pos.pos;
                    if to_player.length() > ZOMBIE_ARRIVE_RADIUS {
                        rb.velocity = to_player.normalize() * zombie.speed;
                    }
                }
            }
            ZombieMode::Returning => {
                let to_home = zombie.home - pos.pos;
                if to_home.length() <= ZOMBIE_ARRIVE_RADIUS {
                    zombie.switch_mode();
                    audio.write(AudioCmd::PlayFx {
                        id: "zombie_growl".into(),
                    });
                } else {
                    rb.velocity = to_home.normalize() * zombie.speed;
                }
            }
        }

        let moving = rb.velocity.length_squared() > f32::EPSILON;
        let dir = Direction8::from_vector(rb.velocity).unwrap_or(Direction8::South);
        let base = if moving { "zombie_walk" } else { "zombie_idle" };
        switch_animation(&mut anim, &store, &format!("{}/{}", base, dir.suffix()));

        if collider.overlaps(pos.pos, player_box, player_pos.pos) {
            commands.trigger(CaughtEvent {
                enemy: entity,
                cause: DetectionCause::Contact,
            });
        }
    }
}
