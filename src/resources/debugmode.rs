use bevy_ecs::prelude::Resource;

/// Presence of this resource enables debug overlays (collider outlines,
/// sight polygons, wall rectangles) in the render pass.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DebugMode;
