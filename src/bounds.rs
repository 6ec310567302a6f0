/*
 * Bounds Module
 *
 * The fixed viewport the school swims in and the edge check used for
 * boundary avoidance. Coordinates start at the top-left corner with y
 * growing downward.
 */

use glam::Vec2;

use crate::segment::Segment;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

// Which edges a segment touches: -1 for the near edge (0), +1 for the far
// edge, 0 for neither. Never both zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeCrossing {
    pub x: i8,
    pub y: i8,
}

pub fn out_of_bounds(segment: &Segment, viewport: Viewport) -> Option<EdgeCrossing> {
    let x = axis_crossing(segment.pos.x, segment.radius(), viewport.width);
    let y = axis_crossing(segment.pos.y, segment.radius(), viewport.height);

    if x == 0 && y == 0 {
        None
    } else {
        Some(EdgeCrossing { x, y })
    }
}

// The far edge wins when a segment is wider than the viewport
fn axis_crossing(center: f32, radius: f32, extent: f32) -> i8 {
    if center + radius >= extent {
        1
    } else if center - radius <= 0.0 {
        -1
    } else {
        0
    }
}
