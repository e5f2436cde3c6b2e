//! Angle and arc math.
//!
//! Two angle conventions appear here. Compass headings (0 = North,
//! clockwise) are what the host reports and what the agent steers by.
//! [`bearing_radians`] and [`rotate_around`] use the standard mathematical
//! orientation (0 = East, counter-clockwise).

use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, GeometryResult};
use crate::types::Vector2D;

pub fn translate(v: &Vector2D, dx: f64, dy: f64) -> Vector2D {
    v.translate(dx, dy)
}

/// Standard 2D rotation of `v` about `pivot`.
pub fn rotate_around(v: &Vector2D, pivot: &Vector2D, angle_radians: f64) -> Vector2D {
    v.rotate_around(pivot, angle_radians)
}

pub fn distance(a: &Vector2D, b: &Vector2D) -> f64 {
    a.distance_to(b)
}

/// Mathematical angle of the segment `from -> to`, `atan2(dy, dx)`.
pub fn bearing_radians(from: &Vector2D, to: &Vector2D) -> f64 {
    let d = *to - *from;
    d.y.atan2(d.x)
}

/// Compass heading from `from` to `to`; undefined for coincident points.
pub fn heading_to(from: &Vector2D, to: &Vector2D) -> GeometryResult<f64> {
    if from == to {
        return Err(GeometryError::ZeroDistanceBearing);
    }
    Ok(from.heading_to(to))
}

/// Point `distance` away from `from` along a compass heading.
pub fn project(from: &Vector2D, distance: f64, heading: f64) -> Vector2D {
    from.project(distance, heading)
}

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_radians(radians: f64) -> f64 {
    let mut normalized = radians % TAU;
    if normalized < 0.0 {
        normalized += TAU;
    }
    // Tiny negative remainders round up to exactly TAU.
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}

/// Wrap an angle into `(-π, π]`.
pub fn normalize_relative(radians: f64) -> f64 {
    let normalized = normalize_radians(radians);
    if normalized > PI {
        normalized - TAU
    } else {
        normalized
    }
}

pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

pub fn rad_to_deg(radians: f64) -> f64 {
    (180.0 * radians) / PI
}

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Smallest absolute difference between two angles in degrees, in `[0, 180]`.
pub fn angular_difference_degrees(a: f64, b: f64) -> f64 {
    let diff = normalize_degrees(a - b);
    diff.min(360.0 - diff)
}

/// Angle subtended at `center` by the chord `point1 -> point2`, where the
/// circle's radius is `|center - point1|`.
pub fn arc_angle_radians(
    center: &Vector2D,
    point1: &Vector2D,
    point2: &Vector2D,
) -> GeometryResult<f64> {
    let radius = distance(center, point1);
    if radius == 0.0 {
        return Err(GeometryError::ZeroRadiusArc);
    }
    let chord = distance(point1, point2);
    let cos_angle = 1.0 - (chord * chord) / (2.0 * radius * radius);
    Ok(cos_angle.clamp(-1.0, 1.0).acos())
}

pub fn arc_length(angle_radians: f64, radius: f64) -> f64 {
    (angle_radians * radius).abs()
}

pub fn equals_within(a: f64, b: f64, delta: f64) -> bool {
    (a - b).abs() <= delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalize_radians_range_and_congruence() {
        let samples = [
            -1e-17, -TAU, -7.5 * PI, -1.0, 0.0, 0.5, PI, TAU, TAU + 0.25, 123.456, -987.654,
        ];
        for theta in samples {
            let n = normalize_radians(theta);
            assert!((0.0..TAU).contains(&n), "{theta} normalized to {n}");
            let turns = (theta - n) / TAU;
            assert_abs_diff_eq!(turns, turns.round(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_normalize_radians_known_values() {
        assert_abs_diff_eq!(normalize_radians(deg_to_rad(-45.0)), deg_to_rad(315.0), epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_radians(deg_to_rad(-405.0)), deg_to_rad(315.0), epsilon = 1e-12);
        assert_eq!(normalize_radians(0.0), 0.0);
    }

    #[test]
    fn test_normalize_relative_half_open() {
        assert_abs_diff_eq!(normalize_relative(PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_relative(-PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_relative(deg_to_rad(270.0)), deg_to_rad(-90.0), epsilon = 1e-12);
    }

    #[test]
    fn test_degree_round_trip() {
        for d in [-720.0, -360.0, -45.5, 0.0, 1e-6, 30.0, 90.0, 359.99, 12345.678] {
            assert_abs_diff_eq!(rad_to_deg(deg_to_rad(d)), d, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(deg_to_rad(180.0), PI, epsilon = 1e-15);
    }

    #[test]
    fn test_arc_angle() {
        let c = Vector2D::ZERO;
        let leg = c.distance_to(&Vector2D::new(5.0, 5.0));
        let cases = [
            (Vector2D::new(0.0, 10.0), Vector2D::new(10.0, 0.0), 90.0),
            (Vector2D::new(0.0, 10.0), Vector2D::new(leg, leg), 45.0),
            (Vector2D::new(0.0, 10.0), Vector2D::new(-10.0, 0.0), 90.0),
            (Vector2D::new(0.0, 10.0), Vector2D::new(0.0, -10.0), 180.0),
        ];
        for (p1, p2, expected) in cases {
            let actual = arc_angle_radians(&c, &p1, &p2).unwrap();
            assert_abs_diff_eq!(actual, deg_to_rad(expected), epsilon = 1e-7);
        }
    }

    #[test]
    fn test_arc_angle_zero_radius_fails() {
        let p = Vector2D::new(3.0, 4.0);
        assert_eq!(
            arc_angle_radians(&p, &p, &Vector2D::ZERO),
            Err(GeometryError::ZeroRadiusArc)
        );
    }

    #[test]
    fn test_arc_length() {
        let circumference = TAU * 10.0;
        assert_eq!(arc_length(0.0, 10.0), 0.0);
        assert_abs_diff_eq!(arc_length(deg_to_rad(90.0), 10.0), circumference / 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(arc_length(-deg_to_rad(45.0), 10.0), circumference / 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bearing_uses_math_orientation() {
        let from = Vector2D::new(-10.0, 0.0);
        assert_abs_diff_eq!(bearing_radians(&from, &Vector2D::new(-5.0, 5.0)), deg_to_rad(45.0), epsilon = 1e-9);
        assert_abs_diff_eq!(bearing_radians(&from, &Vector2D::new(0.0, 10.0)), deg_to_rad(45.0), epsilon = 1e-9);
    }

    #[test]
    fn test_heading_to_compass() {
        let o = Vector2D::ZERO;
        assert_abs_diff_eq!(heading_to(&o, &Vector2D::new(0.0, 10.0)).unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(heading_to(&o, &Vector2D::new(10.0, 0.0)).unwrap(), PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(heading_to(&o, &Vector2D::new(-10.0, 0.0)).unwrap(), 1.5 * PI, epsilon = 1e-12);
        assert_eq!(heading_to(&o, &o), Err(GeometryError::ZeroDistanceBearing));
    }

    #[test]
    fn test_angular_difference_wraps() {
        assert_eq!(angular_difference_degrees(350.0, 10.0), 20.0);
        assert_eq!(angular_difference_degrees(90.0, 270.0), 180.0);
        assert_eq!(angular_difference_degrees(45.0, 45.0), 0.0);
    }
}
