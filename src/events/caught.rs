//! Player capture event and its observer.
//!
//! Any enemy whose detection condition holds triggers a [`CaughtEvent`].
//! The observer is the single place the capture state machine lives:
//! while the capture countdown is already running, further events are
//! ignored; otherwise it freezes the player, starts the countdown toward
//! the scene reset, and fires the alert cue.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::events::audio::AudioCmd;
use crate::resources::gameconfig::GameConfig;
use crate::resources::timers::Timers;
use crate::resources::worldsignals::WorldSignals;

/// How the player was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionCause {
    /// Hitbox overlap with the enemy.
    Contact,
    /// Point landed inside a compiled sight cone.
    Sight,
    /// Center entered a spotlight circle.
    Light,
}

/// Event fired when an enemy's capture condition is met.
#[derive(Event, Debug, Clone, Copy)]
pub struct CaughtEvent {
    pub enemy: Entity,
    pub cause: DetectionCause,
}

/// Observer applying a [`CaughtEvent`] to the player.
///
/// Idempotent while a capture countdown is active: the `player_caught`
/// flag is the countdown's "running" state, and events arriving while it
/// is set are dropped. Expiry of the scheduled timer raises `scene_reset`,
/// which the reset system consumes exactly once.
pub fn caught_observer(
    trigger: On<CaughtEvent>,
    mut signals: ResMut<WorldSignals>,
    mut timers: ResMut<Timers>,
    config: Res<GameConfig>,
    mut audio: MessageWriter<AudioCmd>,
    mut player: Query<&mut RigidBody, With<Player>>,
) {
    if signals.has_flag("player_caught") {
        return;
    }
    let event = trigger.event();
    log::info!("player caught by {:?} ({:?})", event.enemy, event.cause);

    signals.set_flag("player_caught");
    let captures = signals.get_integer("captures").unwrap_or(0);
    signals.set_integer("captures", captures + 1);
    timers.schedule(config.caught_duration, "scene_reset");
    audio.write(AudioCmd::PlayFx { id: "alert".into() });

    if let Ok(mut rb) = player.single_mut() {
        rb.velocity = glam::Vec2::ZERO;
        rb.freeze();
    }
}
