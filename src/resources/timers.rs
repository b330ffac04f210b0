//! One-shot delayed signals.
//!
//! Counts down a number of seconds and then raises a flag on
//! [`WorldSignals`](super::worldsignals::WorldSignals). Timers are advanced
//! every frame in list order and removed eagerly on expiry; the update pass
//! rebuilds the list instead of mutating it while iterating, so a timer
//! scheduled from an expiry handler lands safely at the end of the list.

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, PartialEq)]
pub struct DelayedSignal {
    pub remaining: f32,
    pub signal: String,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct Timers {
    pub pending: Vec<DelayedSignal>,
}

impl Timers {
    /// Raise `signal` as a world flag after `seconds`.
    pub fn schedule(&mut self, seconds: f32, signal: impl Into<String>) {
        self.pending.push(DelayedSignal {
            remaining: seconds,
            signal: signal.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
