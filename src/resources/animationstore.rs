//! Animation definition store.
//!
//! Maps string keys to [`AnimationResource`] definitions. Entities reference
//! a definition via their
//! [`Animation`](crate::components::animation::Animation) component; the
//! animation system looks the key up here every frame.
//!
//! [`AnimationStore::insert_directional`] expands a base name plus a list of
//! 4 or 8 tracks into the full 8-compass-direction key set used by actors
//! that face around.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::components::animation::Direction8;

/// One animation track inside a spritesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    pub tex_key: String,
    /// Top-left of the first frame inside the sheet, in pixels.
    pub position: Vec2,
    /// Horizontal distance between consecutive frames, in pixels.
    pub displacement: f32,
    pub frame_count: usize,
    /// Playback speed; the per-frame duration is `1.0 / fps`.
    pub fps: f32,
    pub looped: bool,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.animations.contains_key(key)
    }

    /// Expand `tracks` into the 8 compass-direction keys `base/n` .. `base/nw`.
    ///
    /// An 8-entry list maps 1:1 in compass order (N, NE, E, SE, S, SW, W,
    /// NW). A 4-entry list holds the cardinals (N, E, S, W); diagonals reuse
    /// the adjacent cardinal: NE/SE take the E entry (index 1), SW/NW take
    /// the W entry (index 3). Any other length is a content-authoring error:
    /// it is logged and the whole entry is skipped.
    pub fn insert_directional(&mut self, base: &str, tracks: Vec<AnimationResource>) {
        let pick = |compass_index: usize| -> usize {
            match tracks.len() {
                8 => compass_index,
                // 4 cardinals: N E S W
                _ => {
                    if compass_index % 2 == 0 {
                        compass_index / 2
                    } else if compass_index == 1 || compass_index == 3 {
                        1
                    } else {
                        3
                    }
                }
            }
        };
        if tracks.len() != 4 && tracks.len() != 8 {
            log::error!(
                "directional animation '{}' needs 4 or 8 tracks, got {}; skipped",
                base,
                tracks.len()
            );
            return;
        }
        for (i, dir) in Direction8::ALL.iter().enumerate() {
            self.insert(
                format!("{}/{}", base, dir.suffix()),
                tracks[pick(i)].clone(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(row: f32) -> AnimationResource {
        AnimationResource {
            tex_key: "sheet".into(),
            position: Vec2::new(0.0, row),
            displacement: 16.0,
            frame_count: 4,
            fps: 8.0,
            looped: true,
        }
    }

    #[test]
    fn test_directional_four_entry_rule() {
        let mut store = AnimationStore::new();
        // Cardinal rows: N=0, E=16, S=32, W=48
        store.insert_directional("walk", vec![track(0.0), track(16.0), track(32.0), track(48.0)]);

        assert_eq!(store.get("walk/n").unwrap().position.y, 0.0);
        assert_eq!(store.get("walk/e").unwrap().position.y, 16.0);
        assert_eq!(store.get("walk/s").unwrap().position.y, 32.0);
        assert_eq!(store.get("walk/w").unwrap().position.y, 48.0);
        // Diagonals reuse the adjacent cardinal
        assert_eq!(store.get("walk/ne").unwrap().position.y, 16.0);
        assert_eq!(store.get("walk/se").unwrap().position.y, 16.0);
        assert_eq!(store.get("walk/sw").unwrap().position.y, 48.0);
        assert_eq!(store.get("walk/nw").unwrap().position.y, 48.0);
    }

    #[test]
    fn test_directional_eight_entry_maps_one_to_one() {
        let mut store = AnimationStore::new();
        let tracks: Vec<_> = (0..8).map(|i| track(i as f32 * 16.0)).collect();
        store.insert_directional("walk", tracks);
        for (i, dir) in Direction8::ALL.iter().enumerate() {
            let key = format!("walk/{}", dir.suffix());
            assert_eq!(store.get(&key).unwrap().position.y, i as f32 * 16.0);
        }
    }

    #[test]
    fn test_directional_wrong_length_is_skipped() {
        let mut store = AnimationStore::new();
        store.insert_directional("walk", vec![track(0.0); 5]);
        assert!(store.animations.is_empty());
    }
}
