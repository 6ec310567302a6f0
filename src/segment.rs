/*
 * Segment Module
 *
 * A single disc of a boid's body or tail chain. The radius is fixed at
 * construction; only the position moves.
 */

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub pos: Vec2,
    radius: f32,
}

impl Segment {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    // Re-anchor this segment `spacing` away from `leader`, keeping the side
    // of the leader it was already on. Returns the heading it now trails along.
    pub fn follow(&mut self, leader: Vec2, spacing: f32) -> Vec2 {
        let trail = crate::geometry::heading(leader, self.pos);
        self.pos = leader + trail * spacing;
        trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_keeps_fixed_spacing() {
        let mut segment = Segment::new(Vec2::new(0.0, 40.0), 5.0);
        let trail = segment.follow(Vec2::new(0.0, 0.0), 10.0);

        assert!((segment.pos - Vec2::new(0.0, 10.0)).length() < 1e-5);
        assert!((trail - Vec2::new(0.0, 1.0)).length() < 1e-5);
        assert_eq!(segment.radius(), 5.0);
    }

    #[test]
    fn test_follow_pulls_toward_moved_leader() {
        let mut segment = Segment::new(Vec2::new(-10.0, 0.0), 3.0);
        segment.follow(Vec2::new(2.0, 0.0), 10.0);

        assert!((segment.pos - Vec2::new(-8.0, 0.0)).length() < 1e-5);
    }
}
