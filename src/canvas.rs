/*
 * Canvas Module
 *
 * The drawing surface a boid paints itself onto. The simulation only
 * needs four primitives, so any backend (a nannou window, a recorder for
 * headless runs and tests) plugs in by implementing `Canvas`.
 *
 * Coordinates are viewport pixels: origin top-left, y downward. Ellipse
 * rotations are radians.
 */

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Gray,
    White,
    Black,
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Gray => (128, 128, 128),
            Color::White => (255, 255, 255),
            Color::Black => (0, 0, 0),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }

    // White fish get gray eyes so they stay visible
    pub fn eye_color(self) -> Color {
        match self {
            Color::White => Color::Gray,
            _ => Color::White,
        }
    }
}

pub trait Canvas {
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_ellipse(&mut self, center: Vec2, radius_x: f32, radius_y: f32, rotation: f32, color: Color);

    // Closed shape through `points` with quadratic curves between
    // midpoints, see `smooth_outline`.
    fn fill_smooth_polygon(&mut self, points: &[Vec2], color: Color);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Ellipse {
        center: Vec2,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        color: Color,
    },
    SmoothPolygon {
        points: Vec<Vec2>,
        color: Color,
    },
}

// Records one frame of draw calls. `clear` starts a new frame.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    calls: Vec<DrawCall>,
    frames: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    // Number of times the list has been cleared
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Canvas for DrawList {
    fn clear(&mut self) {
        self.calls.clear();
        self.frames += 1;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle { center, radius, color });
    }

    fn fill_ellipse(&mut self, center: Vec2, radius_x: f32, radius_y: f32, rotation: f32, color: Color) {
        self.calls.push(DrawCall::Ellipse {
            center,
            radius_x,
            radius_y,
            rotation,
            color,
        });
    }

    fn fill_smooth_polygon(&mut self, points: &[Vec2], color: Color) {
        self.calls.push(DrawCall::SmoothPolygon {
            points: points.to_vec(),
            color,
        });
    }
}

/*
 * Flatten the smooth closed path through `points` into a polyline.
 *
 * The path starts at point 0. Every interior point is the control point
 * of a quadratic curve ending halfway to its successor, and the last point
 * controls the curve that closes back onto point 0. Each curve is sampled
 * `steps` times. Fewer than three points are returned unchanged.
 */
pub fn smooth_outline(points: &[Vec2], steps: usize) -> Vec<Vec2> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let steps = steps.max(1);
    let last = points.len() - 1;
    let mut outline = Vec::with_capacity(last * steps + 1);
    let mut cursor = points[0];
    outline.push(cursor);

    for i in 1..last {
        let end = points[i].lerp(points[i + 1], 0.5);
        push_quadratic(&mut outline, cursor, points[i], end, steps);
        cursor = end;
    }

    push_quadratic(&mut outline, cursor, points[last], points[0], steps);
    outline
}

fn push_quadratic(out: &mut Vec<Vec2>, start: Vec2, control: Vec2, end: Vec2, steps: usize) {
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        let u = 1.0 - t;
        out.push(start * (u * u) + control * (2.0 * u * t) + end * (t * t));
    }
}
