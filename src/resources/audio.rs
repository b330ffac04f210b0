//! ECS resource that bridges the game core with the external audio mixer.
//!
//! Mixing itself happens outside the core; systems emit
//! [`AudioCmd`](crate::events::audio::AudioCmd) messages, and
//! [`forward_audio_cmds`](crate::systems::audio::forward_audio_cmds) pushes
//! them over a lock-free channel whose receiving end the shell owns. Use
//! [`setup_audio`] once during initialization.

use crate::events::audio::AudioCmd;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Shared bridge between the ECS world and the audio mixer.
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> mixer).
    pub tx_cmd: Sender<AudioCmd>,
}

/// Create the command channel and register bridge resources.
///
/// Returns the receiving end for the shell (or, in the headless harness,
/// for draining into the log).
pub fn setup_audio(world: &mut World) -> Receiver<AudioCmd> {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    world.insert_resource(AudioBridge { tx_cmd });
    world.insert_resource(Messages::<AudioCmd>::default());
    rx_cmd
}
