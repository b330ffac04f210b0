//! Cone-of-sight raycaster.
//!
//! A [`SightCone`] is a discretized visibility fan owned by a vision-capable
//! enemy. [`SightCone::compile`] casts one ray per angular sample against the
//! sparse [`OccupancyGrid`](crate::resources::occupancy::OccupancyGrid),
//! recording the normalized depth at which each ray is truncated and a
//! polygon outline for rendering. [`SightCone::query`] then answers
//! point-membership questions against the compiled fan.
//!
//! Compilation is a full recompute every time; nothing is updated
//! incrementally, so recompiling with identical inputs yields identical
//! depths. The owning entity mutates `center`/`facing` every frame and
//! decides when to recompile (patrols skip it while standing still, cameras
//! recompile every frame).
//!
//! The query is a membership test against the *discretized* fan, consistent
//! with what is rendered; its error is bounded by the sample density, which
//! the [`SightTuning`] parameters keep adjustable.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::resources::occupancy::OccupancyGrid;

/// Distance shaved off the accepted depth so points sitting exactly on the
/// fan boundary do not flicker in and out of visibility.
pub const DEPTH_EPSILON: f32 = 0.5;

/// Density knobs for cone compilation.
///
/// Compilation cost is the dominant per-frame cost of vision-capable
/// enemies, so both densities are read from the game configuration rather
/// than being baked in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SightTuning {
    /// Angular samples per (world unit of radius x degree of aperture).
    pub sample_density: f32,
    /// Ray steps per world unit of radius.
    pub step_density: f32,
}

impl Default for SightTuning {
    fn default() -> Self {
        Self {
            sample_density: 0.01,
            step_density: 0.25,
        }
    }
}

/// Result of a cone membership query.
///
/// `NotCompiled` keeps "you asked before compile()" distinguishable from a
/// legitimate miss; callers that only care about detection collapse it via
/// [`SightCone::sees`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConeQuery {
    /// The cone has never been compiled; no visibility data exists.
    NotCompiled,
    /// The point is outside the compiled fan.
    Outside,
    /// The point is inside the compiled fan.
    Visible,
}

/// Discretized cone of sight.
#[derive(Component, Debug, Clone)]
pub struct SightCone {
    /// Maximum view distance in world units.
    pub radius: f32,
    /// Full aperture of the cone in degrees.
    pub angle: f32,
    /// Vertical offset of the ray origin above the nominal center. Raised
    /// origins skip their first few ray steps to avoid self-intersection.
    pub z_offset: f32,
    /// World-space apex of the cone; updated every frame by the owner.
    pub center: Vec2,
    /// Facing direction in degrees; updated every frame by the owner.
    pub facing: f32,
    compiled: bool,
    samples: usize,
    depths: Vec<f32>,
    polygon: Vec<Vec2>,
}

impl SightCone {
    pub fn new(radius: f32, angle: f32, z_offset: f32) -> Self {
        Self {
            radius,
            angle,
            z_offset,
            center: Vec2::ZERO,
            facing: 0.0,
            compiled: false,
            samples: 0,
            depths: Vec::new(),
            polygon: Vec::new(),
        }
    }

    pub fn compiled(&self) -> bool {
        self.compiled
    }

    /// Drop compiled visibility data, forcing a recompile on next use.
    pub fn invalidate(&mut self) {
        self.compiled = false;
        self.depths.clear();
        self.polygon.clear();
    }

    /// Normalized collision depth per angular sample, in (0, 1]; 1 means the
    /// ray reached full radius without hitting a solid tile.
    pub fn depths(&self) -> &[f32] {
        &self.depths
    }

    /// Fan outline for rendering: the (lifted) center followed by each
    /// sample's endpoint at its compiled depth.
    pub fn polygon(&self) -> &[Vec2] {
        &self.polygon
    }

    /// Recompute the visibility fan against the occupancy grid.
    ///
    /// One ray is cast per angular sample, stepped outward from the center;
    /// the first solid tile truncates the ray and its fractional depth is
    /// recorded. The whole fan is rebuilt from scratch, so compiling twice
    /// with the same inputs gives the same result.
    pub fn compile(&mut self, grid: &OccupancyGrid, tuning: &SightTuning) {
        let samples = ((self.radius * self.angle * tuning.sample_density).ceil() as usize).max(2);
        let steps = ((self.radius * tuning.step_density).ceil() as usize).max(1);
        self.samples = samples;
        self.depths.clear();
        self.polygon.clear();
        self.polygon.push(self.lifted(self.center));

        let facing_rad = self.facing.to_radians();
        // Raised origins start the march a few steps out so the ray does not
        // clip the tile the owner is standing on.
        let skip = (((self.z_offset * facing_rad.sin() - self.z_offset) / 4.0).floor() as i32 + 2)
            .max(0) as usize;

        for i in 0..samples {
            let theta = self.sample_angle(i).to_radians();
            let dir = Vec2::new(theta.cos(), theta.sin());
            let mut depth = 1.0_f32;
            for step in skip..=steps {
                let t = step as f32 / steps as f32;
                let probe = self.lifted(self.center + dir * (self.radius * t));
                if grid.solid_at_world(probe) {
                    depth = t;
                    break;
                }
            }
            self.depths.push(depth);
            self.polygon
                .push(self.lifted(self.center + dir * (self.radius * depth)));
        }
        self.compiled = true;
    }

    /// Membership test against the compiled fan.
    ///
    /// The point is accepted only if its bearing lies within one sample
    /// width of the nearest angular sample AND its distance is below that
    /// sample's compiled depth (minus [`DEPTH_EPSILON`]).
    pub fn query(&self, point: Vec2) -> ConeQuery {
        if !self.compiled {
            return ConeQuery::NotCompiled;
        }
        let delta = point - self.center;
        let dist = delta.length();
        if dist > self.radius {
            return ConeQuery::Outside;
        }
        // A point sitting on the apex has no bearing; it is trivially seen.
        if dist <= DEPTH_EPSILON {
            return ConeQuery::Visible;
        }
        let bearing = delta.y.atan2(delta.x).to_degrees();
        let sample_width = self.angle / (self.samples - 1) as f32;
        let rel = wrap_degrees(bearing - (self.facing - self.angle * 0.5));
        let nearest = (rel / sample_width)
            .round()
            .clamp(0.0, (self.samples - 1) as f32) as usize;
        let diff = wrap_degrees(bearing - self.sample_angle(nearest)).abs();
        if diff > sample_width {
            return ConeQuery::Outside;
        }
        if dist < self.radius * self.depths[nearest] - DEPTH_EPSILON {
            ConeQuery::Visible
        } else {
            ConeQuery::Outside
        }
    }

    /// Boolean convenience over [`SightCone::query`]; an uncompiled cone
    /// sees nothing.
    pub fn sees(&self, point: Vec2) -> bool {
        self.query(point) == ConeQuery::Visible
    }

    fn sample_angle(&self, i: usize) -> f32 {
        self.facing - self.angle * 0.5 + self.angle * i as f32 / (self.samples - 1) as f32
    }

    fn lifted(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x, p.y - self.z_offset)
    }
}

/// Wrap an angle in degrees to [-180, 180].
pub fn wrap_degrees(mut a: f32) -> f32 {
    while a > 180.0 {
        a -= 360.0;
    }
    while a < -180.0 {
        a += 360.0;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid() -> OccupancyGrid {
        OccupancyGrid::new(16.0)
    }

    #[test]
    fn test_query_before_compile_is_not_ready() {
        let cone = SightCone::new(100.0, 60.0, 0.0);
        assert_eq!(cone.query(Vec2::new(10.0, 0.0)), ConeQuery::NotCompiled);
        assert!(!cone.sees(Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn test_open_grid_full_depths() {
        let mut cone = SightCone::new(100.0, 60.0, 0.0);
        cone.compile(&open_grid(), &SightTuning::default());
        assert!(cone.compiled());
        assert!(cone.depths().iter().all(|d| (*d - 1.0).abs() < f32::EPSILON));
        // center + one endpoint per sample
        assert_eq!(cone.polygon().len(), cone.depths().len() + 1);
    }

    #[test]
    fn test_round_trip_inside_and_outside_radius() {
        let mut cone = SightCone::new(100.0, 60.0, 0.0);
        cone.facing = 0.0;
        cone.compile(&open_grid(), &SightTuning::default());
        // 90% of radius on the facing bearing is visible
        assert_eq!(cone.query(Vec2::new(90.0, 0.0)), ConeQuery::Visible);
        // 150% of radius on the same bearing is not
        assert_eq!(cone.query(Vec2::new(150.0, 0.0)), ConeQuery::Outside);
    }

    #[test]
    fn test_point_behind_cone_rejected() {
        let mut cone = SightCone::new(100.0, 60.0, 0.0);
        cone.facing = 0.0;
        cone.compile(&open_grid(), &SightTuning::default());
        assert_eq!(cone.query(Vec2::new(-50.0, 0.0)), ConeQuery::Outside);
        assert_eq!(cone.query(Vec2::new(0.0, 60.0)), ConeQuery::Outside);
    }

    #[test]
    fn test_apex_point_visible() {
        let mut cone = SightCone::new(100.0, 60.0, 0.0);
        cone.facing = 90.0;
        cone.center = Vec2::new(40.0, 40.0);
        cone.compile(&open_grid(), &SightTuning::default());
        assert_eq!(cone.query(Vec2::new(40.0, 40.0)), ConeQuery::Visible);
    }

    #[test]
    fn test_occluding_tile_truncates_depth() {
        let mut grid = open_grid();
        // Solid tile two tiles east of the cone center: covers x in [32, 48).
        grid.set_solid(2, 0);

        let mut cone = SightCone::new(64.0, 40.0, 0.0);
        cone.center = Vec2::new(8.0, 8.0);
        cone.facing = 0.0;
        cone.compile(&grid, &SightTuning::default());

        // The central samples must have been truncated below full depth.
        let min_depth = cone.depths().iter().cloned().fold(f32::INFINITY, f32::min);
        assert!(min_depth < 1.0);

        // Before the tile: visible. Beyond the tile on the same bearing: not.
        assert_eq!(cone.query(Vec2::new(28.0, 8.0)), ConeQuery::Visible);
        assert_eq!(cone.query(Vec2::new(60.0, 8.0)), ConeQuery::Outside);
    }

    #[test]
    fn test_recompilation_is_idempotent() {
        let mut grid = open_grid();
        grid.set_solid(3, 1);
        let mut cone = SightCone::new(80.0, 50.0, 4.0);
        cone.center = Vec2::new(12.0, 20.0);
        cone.facing = 30.0;
        cone.compile(&grid, &SightTuning::default());
        let first = cone.depths().to_vec();
        cone.compile(&grid, &SightTuning::default());
        assert_eq!(first, cone.depths());
    }

    #[test]
    fn test_invalidate_drops_compiled_state() {
        let mut cone = SightCone::new(100.0, 60.0, 0.0);
        cone.compile(&open_grid(), &SightTuning::default());
        cone.invalidate();
        assert!(!cone.compiled());
        assert_eq!(cone.query(Vec2::new(10.0, 0.0)), ConeQuery::NotCompiled);
    }

    #[test]
    fn test_large_z_offset_does_not_panic() {
        // Negative raw skip values clamp to zero instead of underflowing.
        let mut cone = SightCone::new(60.0, 45.0, 32.0);
        cone.facing = -90.0;
        cone.compile(&open_grid(), &SightTuning::default());
        assert!(cone.compiled());
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(190.0), -170.0);
        assert_eq!(wrap_degrees(-190.0), 170.0);
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(540.0), 180.0);
    }
}
