/*
 * Geometry Module
 *
 * Small vector helpers used by the kinematic chain: distances, headings,
 * rotations in degrees and anchor placement around a pivot.
 *
 * All angles passed in are degrees; all angles returned are radians
 * (they go straight to the renderer as ellipse rotations).
 */

use glam::Vec2;
use rand::Rng;

// Rotated components are rounded to this many steps per unit so repeated
// turns cannot drift the heading away from unit length.
const ROTATION_ROUNDING: f32 = 10_000.0;

pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

// Angle of the line from `a` to `b`, in radians
pub fn angle(a: Vec2, b: Vec2) -> f32 {
    (b.y - a.y).atan2(b.x - a.x)
}

// Unit vector pointing from `a` toward `b`, or from `b` toward `a` when
// `positive` is false.
pub fn direction(a: Vec2, b: Vec2, positive: bool) -> Vec2 {
    let (sin, cos) = angle(a, b).sin_cos();

    if positive {
        Vec2::new(cos, sin)
    } else {
        Vec2::new(-cos, -sin)
    }
}

// Shorthand for the common forward case
pub fn heading(from: Vec2, to: Vec2) -> Vec2 {
    direction(from, to, true)
}

pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let x = non_zero_unit(rng);
    let y = non_zero_unit(rng);

    heading(Vec2::ZERO, Vec2::new(x, y))
}

// Uniform draw in (-1, 1) that is never exactly zero
fn non_zero_unit<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    loop {
        let value: f32 = rng.gen::<f32>() * 2.0 - 1.0;
        if value != 0.0 {
            return value;
        }
    }
}

pub fn rotate(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();

    Vec2::new(
        round_component(v.x * cos - v.y * sin),
        round_component(v.x * sin + v.y * cos),
    )
}

#[inline]
fn round_component(value: f32) -> f32 {
    (value * ROTATION_ROUNDING).round() / ROTATION_ROUNDING
}

// Point `radius` away from `pivot`, along `direction` turned by `degrees`
pub fn point_at_radius(pivot: Vec2, direction: Vec2, degrees: f32, radius: f32) -> Vec2 {
    pivot + rotate(direction, degrees) * radius
}

// Inclusive at both ends: `min` is returned for anything at or below it
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value <= min {
        return min;
    }
    if value >= max {
        return max;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPSILON: f32 = 1e-5;

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            actual.distance(expected) < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_distance_and_angle() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);

        assert!((distance(a, b) - 5.0).abs() < EPSILON);
        assert!((angle(Vec2::ZERO, Vec2::new(0.0, 2.0)) - std::f32::consts::FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_direction_positive_and_negative() {
        assert_close(direction(Vec2::ZERO, Vec2::new(1.0, 0.0), true), Vec2::new(1.0, 0.0));
        assert_close(direction(Vec2::ZERO, Vec2::new(1.0, 0.0), false), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_direction_is_unit_length() {
        let d = heading(Vec2::new(-3.0, 7.0), Vec2::new(12.0, -40.0));
        assert!((d.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        assert_close(rotate(Vec2::new(1.0, 0.0), 90.0), Vec2::new(0.0, 1.0));
        assert_close(rotate(Vec2::new(1.0, 0.0), -90.0), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_rotate_rounds_to_four_decimals() {
        let v = rotate(Vec2::new(1.0, 0.0), 33.3);
        for component in [v.x, v.y] {
            let scaled = component * ROTATION_ROUNDING;
            assert!((scaled - scaled.round()).abs() < 1e-2);
        }
    }

    fn spin(seed: u64, turns: usize) -> Vec2 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut v = random_direction(&mut rng);

        for i in 0..turns {
            let degrees = if i % 3 == 0 { 1.0 } else { rng.gen_range(-30.0..30.0) };
            v = rotate(v, degrees);
        }
        v
    }

    #[test]
    fn test_repeated_rotation_stays_unit_length() {
        let v = spin(7, 100);
        assert!((v.length() - 1.0).abs() < 1e-3, "drifted to {}", v.length());

        // Rounding noise is a slow random walk, never a runaway
        let v = spin(11, 1_000);
        assert!((v.length() - 1.0).abs() < 5e-3, "drifted to {}", v.length());
    }

    #[test]
    fn test_point_at_radius() {
        let p = point_at_radius(Vec2::new(10.0, 10.0), Vec2::new(1.0, 0.0), 90.0, 5.0);
        assert_close(p, Vec2::new(10.0, 15.0));
    }

    #[test]
    fn test_random_direction_is_unit() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let d = random_direction(&mut rng);
            assert!((d.length() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-1.0, 0.0, 2.0), 0.0);
        assert_eq!(clamp(3.0, 0.0, 2.0), 2.0);
        assert_eq!(clamp(1.5, 0.0, 2.0), 1.5);
    }
}
