//! Per-frame logical input resource.
//!
//! The windowing shell owns the physical keyboard; once per frame it feeds
//! the pressed state of each logical action into [`InputState::apply_sample`],
//! which derives the per-frame edge flags the gameplay systems consume.

use bevy_ecs::prelude::Resource;

/// Boolean action state for the current frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolState {
    /// Whether the action is currently held.
    pub active: bool,
    /// Whether the action was pressed this frame.
    pub just_pressed: bool,
    /// Whether the action was released this frame.
    pub just_released: bool,
}

impl BoolState {
    fn update(&mut self, held: bool) {
        self.just_pressed = held && !self.active;
        self.just_released = !held && self.active;
        self.active = held;
    }
}

/// Raw held-state of every logical action, sampled by the shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub interact: bool,
    pub back: bool,
    pub debug: bool,
}

/// Resource capturing the per-frame logical input state.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    pub move_up: BoolState,
    pub move_down: BoolState,
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub action_interact: BoolState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
}

impl InputState {
    /// Fold this frame's raw sample into held/edge state. Call exactly once
    /// per frame, before the update schedule runs.
    pub fn apply_sample(&mut self, sample: &InputSample) {
        self.move_up.update(sample.up);
        self.move_down.update(sample.down);
        self.move_left.update(sample.left);
        self.move_right.update(sample.right);
        self.action_interact.update(sample.interact);
        self.action_back.update(sample.back);
        self.mode_debug.update(sample.debug);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_single_frame() {
        let mut input = InputState::default();
        input.apply_sample(&InputSample {
            right: true,
            ..Default::default()
        });
        assert!(input.move_right.active);
        assert!(input.move_right.just_pressed);

        input.apply_sample(&InputSample {
            right: true,
            ..Default::default()
        });
        assert!(input.move_right.active);
        assert!(!input.move_right.just_pressed);

        input.apply_sample(&InputSample::default());
        assert!(!input.move_right.active);
        assert!(input.move_right.just_released);
    }
}
