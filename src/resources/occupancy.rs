//! Sparse occupancy grid.
//!
//! The set of solid tile coordinates shared read-only by all sight and
//! movement queries during a frame. Only the level loader (and, at edit
//! time, the external editor) mutates it, never mid-frame.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use rustc_hash::FxHashSet;

#[derive(Resource, Debug, Clone)]
pub struct OccupancyGrid {
    /// Side length of a tile in world units.
    pub tile_size: f32,
    solid: FxHashSet<(i32, i32)>,
}

impl OccupancyGrid {
    pub fn new(tile_size: f32) -> Self {
        Self {
            tile_size,
            solid: FxHashSet::default(),
        }
    }

    pub fn from_pairs(tile_size: f32, pairs: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self {
            tile_size,
            solid: pairs.into_iter().collect(),
        }
    }

    pub fn set_solid(&mut self, x: i32, y: i32) {
        self.solid.insert((x, y));
    }

    pub fn clear_solid(&mut self, x: i32, y: i32) {
        self.solid.remove(&(x, y));
    }

    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.solid.contains(&(x, y))
    }

    pub fn len(&self) -> usize {
        self.solid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solid.is_empty()
    }

    /// Tile coordinates containing a world-space point.
    pub fn world_to_tile(&self, p: Vec2) -> (i32, i32) {
        (
            (p.x / self.tile_size).floor() as i32,
            (p.y / self.tile_size).floor() as i32,
        )
    }

    /// Whether the tile under a world-space point is solid.
    pub fn solid_at_world(&self, p: Vec2) -> bool {
        let (x, y) = self.world_to_tile(p);
        self.is_solid(x, y)
    }

    /// Iterate the solid tile coordinates (for persistence).
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.solid.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_tile_floors_negative_coordinates() {
        let grid = OccupancyGrid::new(16.0);
        assert_eq!(grid.world_to_tile(Vec2::new(0.0, 0.0)), (0, 0));
        assert_eq!(grid.world_to_tile(Vec2::new(15.9, 15.9)), (0, 0));
        assert_eq!(grid.world_to_tile(Vec2::new(16.0, 0.0)), (1, 0));
        assert_eq!(grid.world_to_tile(Vec2::new(-0.1, -0.1)), (-1, -1));
    }

    #[test]
    fn test_solid_membership() {
        let mut grid = OccupancyGrid::new(16.0);
        grid.set_solid(2, -3);
        assert!(grid.is_solid(2, -3));
        assert!(grid.solid_at_world(Vec2::new(40.0, -33.0)));
        assert!(!grid.solid_at_world(Vec2::new(0.0, 0.0)));
        grid.clear_solid(2, -3);
        assert!(grid.is_empty());
    }
}
