//! Delayed-signal timer advancement.
//!
//! Advances every pending one-shot timer in list order, removing expired
//! entries eagerly and raising their flags on
//! [`WorldSignals`](crate::resources::worldsignals::WorldSignals). The list
//! is rebuilt rather than mutated in place while iterating, so timers
//! scheduled during this frame append safely.

use bevy_ecs::prelude::*;

use crate::resources::timers::Timers;
use crate::resources::worldsignals::WorldSignals;

pub fn update_timers(
    time: Res<crate::resources::worldtime::WorldTime>,
    mut timers: ResMut<Timers>,
    mut signals: ResMut<WorldSignals>,
) {
    if timers.pending.is_empty() {
        return;
    }
    let pending = std::mem::take(&mut timers.pending);
    let mut keep = Vec::with_capacity(pending.len());
    let mut fired = Vec::new();
    for mut timer in pending {
        timer.remaining -= time.delta;
        if timer.remaining <= 0.0 {
            fired.push(timer.signal);
        } else {
            keep.push(timer);
        }
    }
    // anything scheduled while we held the taken list would be lost; splice
    // the rebuilt list in front of late arrivals
    keep.append(&mut timers.pending);
    timers.pending = keep;
    for signal in fired {
        log::debug!("timer fired: {}", signal);
        signals.set_flag(signal);
    }
}
