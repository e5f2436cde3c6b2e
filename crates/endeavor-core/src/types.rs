//! Fundamental geometric and kinematic types.

use std::ops::{Add, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Point (or offset) in arena space.
/// x = East, y = North. Compared and copied by value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

/// One predicted (or observed) kinematic sample of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub x: f64,
    pub y: f64,
    /// Compass heading in radians (0 = North, clockwise).
    pub heading: f64,
    /// Signed scalar velocity; negative means moving backward.
    pub velocity: f64,
    pub tick: i64,
}

/// Dimensions of the rectangular arena. The south-west corner is the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaSize {
    pub width: f64,
    pub height: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this point by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Rotate counter-clockwise (standard orientation) about `pivot`.
    pub fn rotate_around(&self, pivot: &Vector2D, angle_radians: f64) -> Self {
        let offset = DVec2::from(*self) - DVec2::from(*pivot);
        let rotated = DVec2::from_angle(angle_radians).rotate(offset);
        (rotated + DVec2::from(*pivot)).into()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Vector2D) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }

    /// Compass heading from this point to `other` in `[0, 2π)`.
    pub fn heading_to(&self, other: &Vector2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        crate::geometry::normalize_radians(dx.atan2(dy))
    }

    /// Point `distance` away along a compass heading.
    pub fn project(&self, distance: f64, heading: f64) -> Self {
        self.translate(distance * heading.sin(), distance * heading.cos())
    }

    pub fn midpoint(&self, other: &Vector2D) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        self.translate(rhs.x, rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        self.translate(-rhs.x, -rhs.y)
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl KinematicState {
    pub fn new(position: Vector2D, heading: f64, velocity: f64, tick: i64) -> Self {
        Self {
            x: position.x,
            y: position.y,
            heading,
            velocity,
            tick,
        }
    }

    pub fn position(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }
}

impl ArenaSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vector2D {
        Vector2D::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `point` lies inside the arena (edges included).
    pub fn contains(&self, point: &Vector2D) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

impl Default for ArenaSize {
    fn default() -> Self {
        Self::new(
            crate::constants::ARENA_WIDTH,
            crate::constants::ARENA_HEIGHT,
        )
    }
}
