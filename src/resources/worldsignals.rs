//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource provides a world-wide signal map for
//! cross-system communication: progression flags raised by triggers, the
//! capture state, the respawn point, counters for the end-of-run report.
//!
//! Use cases include:
//! - `player_caught` / `scene_reset` flags during the capture flow
//! - `respawn_x` / `respawn_y` scalars written by checkpoints
//! - `button_<id>` flags raised by pressure buttons

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Floating-point numeric signals addressed by string keys.
    pub scalars: FxHashMap<String, f32>,
    /// Integer numeric signals addressed by string keys.
    pub integers: FxHashMap<String, i32>,
    /// String signals addressed by string keys.
    pub strings: FxHashMap<String, String>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }
    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }
    pub fn get_string(&self, key: &str) -> Option<&String> {
        self.strings.get(key)
    }
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    pub fn clear_flag(&mut self, key: impl Into<String>) {
        self.flags.remove(&key.into());
    }
    pub fn has_flag(&self, key: impl Into<String>) -> bool {
        self.flags.contains(&key.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_roundtrip() {
        let mut signals = WorldSignals::default();
        assert!(!signals.has_flag("player_caught"));
        signals.set_flag("player_caught");
        assert!(signals.has_flag("player_caught"));
        signals.clear_flag("player_caught");
        assert!(!signals.has_flag("player_caught"));
    }

    #[test]
    fn test_scalars_and_strings() {
        let mut signals = WorldSignals::default();
        signals.set_scalar("respawn_x", 42.0);
        signals.set_string("checkpoint", "vault");
        assert_eq!(signals.get_scalar("respawn_x"), Some(42.0));
        assert_eq!(signals.get_string("checkpoint").map(String::as_str), Some("vault"));
        assert_eq!(signals.get_scalar("missing"), None);
    }
}
