use glam::Vec2;
use smallvec::SmallVec;

/// Ordered waypoint loop followed by patrolling entities.
///
/// Not a component on its own; embedded in the variant components that
/// walk a route. The editor reads it back for path visualization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub points: SmallVec<[Vec2; 8]>,
    pub current: usize,
}

impl Path {
    pub fn new(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            points: points.into_iter().collect(),
            current: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Waypoint currently steered toward, if any.
    pub fn target(&self) -> Option<Vec2> {
        self.points.get(self.current).copied()
    }

    /// Advance to the next waypoint, wrapping at the end of the loop.
    pub fn advance(&mut self) {
        if !self.points.is_empty() {
            self.current = (self.current + 1) % self.points.len();
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_and_advance_wraps() {
        let mut path = Path::new([Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)]);
        assert_eq!(path.target(), Some(Vec2::new(0.0, 0.0)));
        path.advance();
        assert_eq!(path.target(), Some(Vec2::new(10.0, 0.0)));
        path.advance();
        assert_eq!(path.target(), Some(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_empty_path_is_inert() {
        let mut path = Path::default();
        assert!(path.is_empty());
        assert_eq!(path.target(), None);
        path.advance(); // must not panic
        assert_eq!(path.current, 0);
    }

    #[test]
    fn test_reset_restores_first_waypoint() {
        let mut path = Path::new([Vec2::ZERO, Vec2::ONE, Vec2::new(2.0, 2.0)]);
        path.advance();
        path.advance();
        path.reset();
        assert_eq!(path.current, 0);
    }
}
