//! Audio command plumbing.
//!
//! Gameplay systems write [`AudioCmd`] messages; these two systems advance
//! the message queue and forward everything over the crossbeam channel the
//! external mixer listens on.

use bevy_ecs::prelude::Messages;
use bevy_ecs::prelude::{MessageReader, Res, ResMut};

use crate::events::audio::AudioCmd;
use crate::resources::audio::AudioBridge;

/// Forward ECS AudioCmd messages to the mixer via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send errors on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can
/// observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}
