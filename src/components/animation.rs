//! Per-entity animation state and direction helpers.
//!
//! An entity's [`Animation`] component points into the
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore) by
//! string key; the animation system advances `frame_index`/`elapsed_time`
//! and updates the sprite frame. [`Direction8`] maps movement vectors and
//! facing angles onto the eight compass directions used to pick directional
//! animation tracks.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::resources::animationstore::AnimationStore;

#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }
}

/// Switch an entity's animation to `key`.
///
/// Switching to the already-active key is a no-op (frame index is kept).
/// Switching to a key the store does not know is a content error: it is
/// logged and the current state is left unchanged. On success the frame
/// index and elapsed time reset to zero.
pub fn switch_animation(anim: &mut Animation, store: &AnimationStore, key: &str) {
    if anim.animation_key == key {
        return;
    }
    if !store.contains(key) {
        log::warn!(
            "unknown animation key '{}', keeping '{}'",
            key,
            anim.animation_key
        );
        return;
    }
    anim.animation_key = key.to_string();
    anim.frame_index = 0;
    anim.elapsed_time = 0.0;
}

/// The eight compass directions, in the order used by directional animation
/// tables: N, NE, E, SE, S, SW, W, NW.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction8 {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction8 {
    pub const ALL: [Direction8; 8] = [
        Direction8::North,
        Direction8::NorthEast,
        Direction8::East,
        Direction8::SouthEast,
        Direction8::South,
        Direction8::SouthWest,
        Direction8::West,
        Direction8::NorthWest,
    ];

    /// Key suffix for directional animation lookup, e.g. `"walk/ne"`.
    pub fn suffix(&self) -> &'static str {
        match self {
            Direction8::North => "n",
            Direction8::NorthEast => "ne",
            Direction8::East => "e",
            Direction8::SouthEast => "se",
            Direction8::South => "s",
            Direction8::SouthWest => "sw",
            Direction8::West => "w",
            Direction8::NorthWest => "nw",
        }
    }

    /// Nearest compass direction for a facing angle in degrees.
    ///
    /// Angles follow screen coordinates (y grows downward): 0 = east,
    /// 90 = south, +-180 = west, -90 = north.
    pub fn from_angle(degrees: f32) -> Self {
        let octant = ((degrees / 45.0).round().rem_euclid(8.0)) as usize;
        match octant {
            0 => Direction8::East,
            1 => Direction8::SouthEast,
            2 => Direction8::South,
            3 => Direction8::SouthWest,
            4 => Direction8::West,
            5 => Direction8::NorthWest,
            6 => Direction8::North,
            _ => Direction8::NorthEast,
        }
    }

    /// Compass direction of a movement vector, or `None` for a vector too
    /// small to have a meaningful direction.
    pub fn from_vector(v: Vec2) -> Option<Self> {
        if v.length_squared() < 1e-6 {
            return None;
        }
        Some(Self::from_angle(v.y.atan2(v.x).to_degrees()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::animationstore::AnimationResource;

    fn store_with(keys: &[&str]) -> AnimationStore {
        let mut store = AnimationStore::new();
        for key in keys {
            store.insert(
                *key,
                AnimationResource {
                    tex_key: "sheet".into(),
                    position: Vec2::ZERO,
                    displacement: 16.0,
                    frame_count: 4,
                    fps: 8.0,
                    looped: true,
                },
            );
        }
        store
    }

    #[test]
    fn test_switch_to_same_key_is_noop() {
        let store = store_with(&["walk"]);
        let mut anim = Animation::new("walk");
        anim.frame_index = 2;
        anim.elapsed_time = 0.05;
        switch_animation(&mut anim, &store, "walk");
        assert_eq!(anim.frame_index, 2);
        assert!(anim.elapsed_time > 0.0);
    }

    #[test]
    fn test_switch_to_unknown_key_keeps_state() {
        let store = store_with(&["walk"]);
        let mut anim = Animation::new("walk");
        anim.frame_index = 3;
        switch_animation(&mut anim, &store, "does_not_exist");
        assert_eq!(anim.animation_key, "walk");
        assert_eq!(anim.frame_index, 3);
    }

    #[test]
    fn test_switch_resets_frame_and_elapsed() {
        let store = store_with(&["walk", "idle"]);
        let mut anim = Animation::new("walk");
        anim.frame_index = 3;
        anim.elapsed_time = 0.1;
        switch_animation(&mut anim, &store, "idle");
        assert_eq!(anim.animation_key, "idle");
        assert_eq!(anim.frame_index, 0);
        assert_eq!(anim.elapsed_time, 0.0);
    }

    #[test]
    fn test_direction_from_angle_cardinals() {
        assert_eq!(Direction8::from_angle(0.0), Direction8::East);
        assert_eq!(Direction8::from_angle(90.0), Direction8::South);
        assert_eq!(Direction8::from_angle(180.0), Direction8::West);
        assert_eq!(Direction8::from_angle(-180.0), Direction8::West);
        assert_eq!(Direction8::from_angle(-90.0), Direction8::North);
    }

    #[test]
    fn test_direction_from_angle_diagonals() {
        assert_eq!(Direction8::from_angle(45.0), Direction8::SouthEast);
        assert_eq!(Direction8::from_angle(-45.0), Direction8::NorthEast);
        assert_eq!(Direction8::from_angle(135.0), Direction8::SouthWest);
        assert_eq!(Direction8::from_angle(-135.0), Direction8::NorthWest);
    }

    #[test]
    fn test_direction_from_vector() {
        assert_eq!(
            Direction8::from_vector(Vec2::new(1.0, 0.0)),
            Some(Direction8::East)
        );
        assert_eq!(
            Direction8::from_vector(Vec2::new(0.0, -1.0)),
            Some(Direction8::North)
        );
        assert_eq!(
            Direction8::from_vector(Vec2::new(1.0, 1.0)),
            Some(Direction8::SouthEast)
        );
        assert_eq!(Direction8::from_vector(Vec2::ZERO), None);
    }
}
