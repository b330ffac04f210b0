//! Player marker component.
//!
//! Movement, collision and capture handling live in the player controller
//! system; this component carries the controller's per-frame state. The
//! capture countdown itself runs through the world signal flag
//! `player_caught` plus a one-shot timer, so any enemy can raise the caught
//! condition without touching the player entity directly.

use bevy_ecs::prelude::Component;

use super::animation::Direction8;

pub const PLAYER_HITBOX_W: f32 = 10.0;
pub const PLAYER_HITBOX_H: f32 = 12.0;

#[derive(Component, Debug, Clone)]
pub struct Player {
    /// Last movement direction, kept while standing still so the idle
    /// animation faces the right way.
    pub facing: Direction8,
    pub moving: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            facing: Direction8::South,
            moving: false,
        }
    }
}
