use bevy_ecs::prelude::Component;

/// Vertical draw-order threshold for actors.
///
/// An actor's cutoff line is `position.y + offset`; the renderer sorts actors
/// by that line so entities lower on screen occlude the ones behind them,
/// giving the pseudo-3D layering of a top-down perspective.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct TerrainCutoff {
    /// Offset added to the entity's y position to obtain the cutoff line.
    pub offset: f32,
}

impl TerrainCutoff {
    pub fn new(offset: f32) -> Self {
        Self { offset }
    }
}

impl Default for TerrainCutoff {
    fn default() -> Self {
        Self { offset: 0.0 }
    }
}
