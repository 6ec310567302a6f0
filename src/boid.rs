/*
 * Boid Module
 *
 * This module defines the Boid struct and its per-frame behavior.
 * A boid is a fish-like creature made of a chain of body discs plus a
 * thinner tail chain. Every frame it:
 * 1. Swims its head forward along its heading
 * 2. Drags each body and tail segment behind the one in front of it
 * 3. Paints tail, fins, body and blinking eyes from the chain geometry
 * 4. Turns away from viewport edges, or wanders on an idle timer
 *
 * Boids never look at each other; there is no flocking here.
 */

use std::collections::VecDeque;
use std::ops::Range;

use glam::Vec2;
use rand::Rng;

use crate::bounds::{out_of_bounds, EdgeCrossing, Viewport};
use crate::canvas::{Canvas, Color};
use crate::geometry::{angle, clamp, heading, point_at_radius, rotate};
use crate::params::BoidParams;
use crate::segment::Segment;

// Body proportions, relative to the head (r0) or the first body disc (r1)
pub const SEPARATION_RATIO: f32 = 1.5; // r0
const EYE_DISTANCE_RATIO: f32 = 0.75; // r0
const EYE_WIDTH_RATIO: f32 = 1.0 / 12.0; // r0
const EYE_ASPECT: f32 = 3.0;
const FIN_DISTANCE_RATIO: f32 = 0.8; // r1
const FIN_WIDTH_RATIO: f32 = 0.25; // r0
const FIN_ASPECT: f32 = 3.0;
const BLINK_STEPS: f32 = 8.0;

// Outline samples around the head, appended and prepended respectively
const HEAD_APPEND: [f32; 3] = [0.0, -45.0, -90.0];
const HEAD_PREPEND: [f32; 2] = [45.0, 90.0];
const EYE_ANGLE: f32 = 75.0;
const FIN_ANGLE: f32 = 90.0;
const FLANK_ANGLE: f32 = 90.0;

#[derive(Clone, Debug)]
pub struct Boid {
    direction: Vec2,
    speed: f32,
    body: Vec<Segment>,
    tail: Vec<Segment>,
    color: Color,
    eye_color: Color,

    // Derived once from the first two body radii
    eye_distance: f32,
    initial_eye_radius_x: f32,
    eye_radius_y: f32,
    fin_distance: f32,
    fin_radius_x: f32,
    fin_radius_y: f32,
    separation: f32,
    tail_separation: f32,

    // Steering
    rotation_angle: f32,
    rotation_interval: Range<u32>,
    rotation_timer: u32,
    rotation_timer_counter: u32,

    // Blinking
    blink_interval: Range<u32>,
    blink_timer: u32,
    blink_timer_counter: u32,
    blink_direction: i8,
    blink_step: f32,
    eye_radius_x: f32,
}

impl Boid {
    // Chains come from the factory already laid out; `body` has at least two
    // segments and `tail` at least one.
    pub(crate) fn assemble<R: Rng + ?Sized>(
        color: Color,
        direction: Vec2,
        speed: f32,
        body: Vec<Segment>,
        tail: Vec<Segment>,
        params: &BoidParams,
        rng: &mut R,
    ) -> Self {
        let head_radius = body[0].radius();
        let neck_radius = body[1].radius();

        let initial_eye_radius_x = head_radius * EYE_WIDTH_RATIO;
        let fin_radius_x = head_radius * FIN_WIDTH_RATIO;
        let separation = head_radius * SEPARATION_RATIO;

        Self {
            direction,
            speed,
            body,
            tail,
            color,
            eye_color: color.eye_color(),
            eye_distance: head_radius * EYE_DISTANCE_RATIO,
            initial_eye_radius_x,
            eye_radius_y: initial_eye_radius_x * EYE_ASPECT,
            fin_distance: neck_radius * FIN_DISTANCE_RATIO,
            fin_radius_x,
            fin_radius_y: fin_radius_x * FIN_ASPECT,
            separation,
            tail_separation: separation / 2.0,
            rotation_angle: params.rotation_angle,
            rotation_interval: params.rotation_interval.clone(),
            rotation_timer: rng.gen_range(params.rotation_interval.clone()),
            rotation_timer_counter: 0,
            blink_interval: params.blink_interval.clone(),
            blink_timer: rng.gen_range(params.blink_interval.clone()),
            blink_timer_counter: 0,
            blink_direction: -1,
            blink_step: initial_eye_radius_x / BLINK_STEPS,
            eye_radius_x: initial_eye_radius_x,
        }
    }

    // Advance one frame and paint the result onto `canvas`
    pub fn update<R, C>(&mut self, viewport: Viewport, rng: &mut R, canvas: &mut C)
    where
        R: Rng + ?Sized,
        C: Canvas + ?Sized,
    {
        let head = self.advance_head();

        let mut outline = self.head_outline(head);
        self.propagate_body(&mut outline);

        let body_heading = heading(self.body[1].pos, head);
        let tail_points = self.propagate_tail(body_heading);

        canvas.fill_smooth_polygon(&tail_points, self.color);
        self.draw_fins(canvas, head, body_heading);
        canvas.fill_smooth_polygon(outline.make_contiguous(), self.color);

        self.update_blink(rng);
        self.draw_eyes(canvas, head, body_heading);

        self.steer(viewport, rng);
    }

    fn advance_head(&mut self) -> Vec2 {
        let head = self.body[0].pos + self.direction * self.speed;
        self.body[0].pos = head;
        head
    }

    fn head_outline(&self, head: Vec2) -> VecDeque<Vec2> {
        let radius = self.body[0].radius();
        let mut outline = VecDeque::with_capacity(2 * self.body.len() + 4);

        for degrees in HEAD_APPEND {
            outline.push_back(point_at_radius(head, self.direction, degrees, radius));
        }
        for degrees in HEAD_PREPEND {
            outline.push_front(point_at_radius(head, self.direction, degrees, radius));
        }
        outline
    }

    // Each body segment trails its (already moved) predecessor. Flank points
    // go on opposite ends of the outline so it stays one continuous loop.
    fn propagate_body(&mut self, outline: &mut VecDeque<Vec2>) {
        let separation = self.separation;
        let last = self.body.len() - 1;

        for i in 1..=last {
            let leader = self.body[i - 1].pos;
            let segment = &mut self.body[i];
            let trail = segment.follow(leader, separation);
            let (pos, radius) = (segment.pos, segment.radius());

            outline.push_back(point_at_radius(pos, trail, FLANK_ANGLE, radius));
            outline.push_front(point_at_radius(pos, trail, -FLANK_ANGLE, radius));

            if i == last {
                outline.push_front(point_at_radius(pos, trail, 0.0, radius));
            }
        }
    }

    // Returns the tail shape: last body disc, every tail disc, then a
    // pointed tip one head radius further back.
    fn propagate_tail(&mut self, body_heading: Vec2) -> Vec<Vec2> {
        let spacing = self.tail_separation;
        let tip_length = self.body[0].radius();
        let mut leader = self.body[self.body.len() - 1].pos;

        let mut points = Vec::with_capacity(self.tail.len() + 2);
        points.push(leader);

        for segment in &mut self.tail {
            segment.follow(leader, spacing);
            leader = segment.pos;
            points.push(leader);
        }

        points.push(leader - body_heading * tip_length);
        points
    }

    // The pairing is crossed on purpose: the fin on the +90 side is drawn
    // with the angle measured from the -90 anchor and vice versa.
    fn draw_fins<C: Canvas + ?Sized>(&self, canvas: &mut C, head: Vec2, body_heading: Vec2) {
        let pivot = self.body[1].pos;
        let minus = point_at_radius(pivot, body_heading, -FIN_ANGLE, self.fin_distance);
        let plus = point_at_radius(pivot, body_heading, FIN_ANGLE, self.fin_distance);

        let angle_from_minus = angle(minus, head);
        let angle_from_plus = angle(plus, head);

        canvas.fill_ellipse(plus, self.fin_radius_x, self.fin_radius_y, angle_from_minus, self.color);
        canvas.fill_ellipse(minus, self.fin_radius_x, self.fin_radius_y, angle_from_plus, self.color);
    }

    fn draw_eyes<C: Canvas + ?Sized>(&self, canvas: &mut C, head: Vec2, body_heading: Vec2) {
        for degrees in [-EYE_ANGLE, EYE_ANGLE] {
            let eye = point_at_radius(head, body_heading, degrees, self.eye_distance);
            canvas.fill_ellipse(eye, self.eye_radius_x, self.eye_radius_y, angle(head, eye), self.eye_color);
        }
    }

    // Once the blink timer is due the eye narrows a step per frame until
    // shut, then widens back; fully open again restarts the timer.
    fn update_blink<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.blink_timer_counter = self.blink_timer_counter.saturating_add(1);

        if self.blink_timer_counter < self.blink_timer {
            return;
        }

        let step = f32::from(self.blink_direction) * self.blink_step;
        self.eye_radius_x = clamp(self.eye_radius_x + step, 0.0, self.initial_eye_radius_x);

        if self.eye_radius_x == 0.0 {
            self.blink_direction = 1;
        }

        if self.eye_radius_x == self.initial_eye_radius_x {
            self.blink_direction = -1;
            self.blink_timer_counter = 0;
            self.blink_timer = rng.gen_range(self.blink_interval.clone());
        }
    }

    fn steer<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.rotation_timer_counter = self.rotation_timer_counter.saturating_add(1);

        if let Some(edge) = out_of_bounds(&self.body[0], viewport) {
            let degrees = boundary_turn(edge, self.direction);
            log::trace!(
                "Boid at ({:.1}, {:.1}) touching edge {:?}, turning {}°",
                self.body[0].pos.x,
                self.body[0].pos.y,
                edge,
                degrees
            );
            self.rotate_direction(degrees, rng);
            return;
        }

        if self.rotation_timer_counter >= self.rotation_timer {
            let half = self.rotation_angle / 2.0;
            let degrees = if half > 0.0 { rng.gen_range(-half..half) } else { 0.0 };
            self.rotate_direction(degrees, rng);
        }
    }

    // Every heading change goes through here so the idle timer always restarts
    pub fn rotate_direction<R: Rng + ?Sized>(&mut self, degrees: f32, rng: &mut R) {
        self.direction = rotate(self.direction, degrees);
        self.rotation_timer_counter = 0;
        self.rotation_timer = rng.gen_range(self.rotation_interval.clone());
    }

    pub fn head(&self) -> Vec2 {
        self.body[0].pos
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn body(&self) -> &[Segment] {
        &self.body
    }

    pub fn tail(&self) -> &[Segment] {
        &self.tail
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn eye_color(&self) -> Color {
        self.eye_color
    }

    pub fn separation(&self) -> f32 {
        self.separation
    }

    pub fn tail_separation(&self) -> f32 {
        self.tail_separation
    }

    pub fn eye_radius_x(&self) -> f32 {
        self.eye_radius_x
    }

    pub fn initial_eye_radius_x(&self) -> f32 {
        self.initial_eye_radius_x
    }

    pub fn blink_direction(&self) -> i8 {
        self.blink_direction
    }
}

/*
 * Degrees to turn when the head touches an edge.
 *
 * This is a cheap sign rule rather than a true inward normal: a horizontal
 * crossing turns by one degree whose sign depends on whether the boid is
 * heading up or down, a vertical crossing on whether it heads left or right.
 * Repeated every frame it is enough to swing the boid back inside.
 */
pub fn boundary_turn(edge: EdgeCrossing, direction: Vec2) -> f32 {
    if edge.x != 0 {
        let x = f32::from(edge.x);
        if direction.y <= 0.0 {
            -x
        } else {
            x
        }
    } else {
        let y = f32::from(edge.y);
        if direction.x <= 0.0 {
            y
        } else {
            -y
        }
    }
}
