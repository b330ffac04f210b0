use bevy_ecs::prelude::Component;

/// Marker inserted by the culling system on entities inside the camera's
/// activity window. Enemy update systems only process `Active` entities.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Active;
