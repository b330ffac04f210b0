//! Animation playback.
//!
//! Advances each entity's [`Animation`] against its track in the
//! [`AnimationStore`] and updates the sprite's sheet offset to the current
//! frame.
//!
//! The advance is deliberately at most one frame per call, with the elapsed
//! accumulator reset to zero rather than carried forward: a dt spanning
//! several frame durations still advances a single frame. Lag spikes slow
//! animations down instead of skipping frames, matching long-standing
//! observed behavior.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim, mut sprite) in query.iter_mut() {
        let Some(track) = store.get(&anim.animation_key) else {
            continue;
        };
        if track.frame_count == 0 {
            continue;
        }
        anim.elapsed_time += time.delta;
        let frame_duration = 1.0 / track.fps;
        if anim.elapsed_time >= frame_duration {
            anim.elapsed_time = 0.0;
            if anim.frame_index + 1 >= track.frame_count {
                if track.looped {
                    anim.frame_index = 0;
                }
                // non-looping tracks hold the last frame
            } else {
                anim.frame_index += 1;
            }
        }
        sprite.offset = Vec2::new(
            track.position.x + anim.frame_index as f32 * track.displacement,
            track.position.y,
        );
    }
}
