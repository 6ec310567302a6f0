/*
 * Factory Module
 *
 * Lays out a new boid in a straight line through the viewport center:
 * head first, each body disc one separation further back along a random
 * heading, then the tail at half that spacing.
 */

use glam::Vec2;
use rand::Rng;

use crate::boid::{Boid, SEPARATION_RATIO};
use crate::bounds::Viewport;
use crate::canvas::Color;
use crate::error::BuildError;
use crate::geometry::random_direction;
use crate::params::BoidParams;
use crate::segment::Segment;

// A usable profile has a head, at least one body disc, and only positive radii
pub fn check_profile(radii: &[f32]) -> Result<(), BuildError> {
    if radii.len() < 2 {
        return Err(BuildError::ProfileTooShort(radii.len()));
    }

    for (index, &radius) in radii.iter().enumerate() {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(BuildError::InvalidRadius { index, radius });
        }
    }

    Ok(())
}

pub fn build<R: Rng + ?Sized>(
    color: Color,
    radii: &[f32],
    params: &BoidParams,
    viewport: Viewport,
    rng: &mut R,
) -> Result<Boid, BuildError> {
    check_profile(radii)?;
    params.validate()?;

    let direction = random_direction(rng);
    let backward = -direction;
    let separation = radii[0] * SEPARATION_RATIO;

    let body = lay_out(viewport.center(), backward, separation, radii.iter().copied());

    let tail_radius = radii[radii.len() - 1];
    let tail_start = body[body.len() - 1].pos;
    let tail = lay_out(
        tail_start + backward * (separation / 2.0),
        backward,
        separation / 2.0,
        std::iter::repeat(tail_radius).take(params.tail_segments),
    );

    let speed = params.base_speed + pick_speed_step(params.speed_steps, rng);

    Ok(Boid::assemble(color, direction, speed, body, tail, params, rng))
}

// One segment per radius, the first at `start`, each next `spacing` further along `step`
fn lay_out(start: Vec2, step: Vec2, spacing: f32, radii: impl Iterator<Item = f32>) -> Vec<Segment> {
    radii
        .enumerate()
        .map(|(i, radius)| Segment::new(start + step * (spacing * i as f32), radius))
        .collect()
}

// Tenths of a pixel per frame on top of the base speed
fn pick_speed_step<R: Rng + ?Sized>(steps: u32, rng: &mut R) -> f32 {
    if steps == 0 {
        return 0.0;
    }
    rng.gen_range(0..steps) as f32 / 10.0
}
