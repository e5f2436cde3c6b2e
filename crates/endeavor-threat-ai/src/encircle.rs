//! Encircling movement planner.
//!
//! Per-target state machine: `Idle` (no committed direction) moves to
//! `Orbiting(direction, remaining)` when a direction is committed, and back
//! to `Idle` once the waypoint budget runs out. A wall hit flips the
//! direction and refills the budget. Pure functions over a
//! [`TrackedTarget`]; the caller owns the record and the random source.

use endeavor_core::boundary::wall_clearance;
use endeavor_core::config::EncircleConfig;
use endeavor_core::enums::RotationDirection;
use endeavor_core::geometry::{angular_difference_degrees, deg_to_rad, normalize_degrees, rad_to_deg};
use endeavor_core::types::{ArenaSize, Vector2D};

use crate::random::RandomSource;
use crate::tracker::TrackedTarget;

/// A candidate orbit waypoint. Recomputed every planning cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncirclePoint {
    pub point: Vector2D,
    /// Compass angle from the orbit center to `point`, in `[0, 360)`.
    pub angle_degrees: f64,
    pub distance_from_agent: f64,
}

/// Planner view of a target's orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitState {
    Idle,
    Orbiting {
        direction: RotationDirection,
        remaining: u32,
    },
}

/// Stateless orbit planner for one arena and one set of tunables.
#[derive(Debug, Clone)]
pub struct EncirclePlanner {
    config: EncircleConfig,
    arena: ArenaSize,
}

impl OrbitState {
    pub fn of(target: &TrackedTarget) -> Self {
        match target.rotation_direction() {
            Some(direction) if target.waypoints_remaining() > 0 => OrbitState::Orbiting {
                direction,
                remaining: target.waypoints_remaining(),
            },
            _ => OrbitState::Idle,
        }
    }
}

impl EncirclePlanner {
    pub fn new(config: EncircleConfig, arena: ArenaSize) -> Self {
        Self { config, arena }
    }

    pub fn config(&self) -> &EncircleConfig {
        &self.config
    }

    /// Orbit point at a compass angle around `center`.
    pub fn orbit_point(center: &Vector2D, radius: f64, angle_degrees: f64) -> Vector2D {
        center.project(radius, deg_to_rad(angle_degrees))
    }

    /// Compass angle (degrees) of `agent` as seen from `center`; 0 when they coincide.
    fn base_angle(center: &Vector2D, agent: &Vector2D) -> f64 {
        if center == agent {
            return 0.0;
        }
        rad_to_deg(center.heading_to(agent))
    }

    /// `count` waypoints stepping away from `start_degrees` in `direction`,
    /// starting with `start_degrees` itself.
    pub fn progression(
        &self,
        agent: &Vector2D,
        center: &Vector2D,
        radius: f64,
        start_degrees: f64,
        direction: RotationDirection,
        count: u32,
    ) -> Vec<EncirclePoint> {
        (0..count)
            .map(|k| {
                let angle =
                    normalize_degrees(start_degrees + direction.sign() * k as f64 * self.config.step_degrees);
                let point = Self::orbit_point(center, radius, angle);
                EncirclePoint {
                    point,
                    angle_degrees: angle,
                    distance_from_agent: agent.distance_to(&point),
                }
            })
            .collect()
    }

    /// One full rotation of candidates starting at the agent's own angle.
    pub fn candidates(
        &self,
        agent: &Vector2D,
        center: &Vector2D,
        radius: f64,
        direction: RotationDirection,
    ) -> Vec<EncirclePoint> {
        let start = Self::base_angle(center, agent);
        self.progression(agent, center, radius, start, direction, self.config.full_rotation_steps())
    }

    /// Mean wall clearance of the `waypoints` orbit points the agent would
    /// visit in `direction`.
    pub fn average_clearance(
        &self,
        agent: &Vector2D,
        center: &Vector2D,
        radius: f64,
        direction: RotationDirection,
        waypoints: u32,
    ) -> f64 {
        let start = Self::base_angle(center, agent);
        let visited: Vec<EncirclePoint> = self
            .progression(agent, center, radius, start, direction, waypoints + 1)
            .into_iter()
            .skip(1)
            .collect();
        if visited.is_empty() {
            return 0.0;
        }
        let total: f64 = visited.iter().map(|p| wall_clearance(&p.point, &self.arena)).sum();
        total / visited.len() as f64
    }

    /// Direction whose orbit stays farther from the walls. Ties go clockwise.
    pub fn choose_direction(
        &self,
        agent: &Vector2D,
        center: &Vector2D,
        radius: f64,
        waypoints: u32,
    ) -> RotationDirection {
        let clockwise =
            self.average_clearance(agent, center, radius, RotationDirection::Clockwise, waypoints);
        let counter = self.average_clearance(
            agent,
            center,
            radius,
            RotationDirection::CounterClockwise,
            waypoints,
        );
        if counter > clockwise {
            RotationDirection::CounterClockwise
        } else {
            RotationDirection::Clockwise
        }
    }

    /// Fresh waypoint budget: a random multiple of one full rotation.
    pub fn waypoint_budget(&self, random: &mut dyn RandomSource) -> u32 {
        let count = random.encircle_count(
            self.config.encircle_count_min,
            self.config.encircle_count_max,
            self.config.encircle_count_step,
        );
        let budget = (self.config.full_rotation_steps() as f64 * count).round();
        (budget as u32).max(1)
    }

    /// Idle -> Orbiting. Draws a radius and budget, then picks the direction.
    /// Returns `false` when the target has no known position.
    pub fn commit(
        &self,
        target: &mut TrackedTarget,
        agent: &Vector2D,
        random: &mut dyn RandomSource,
    ) -> bool {
        let Some(center) = target.last_known_position else {
            return false;
        };
        let radius =
            random.safe_distance(self.config.safe_distance_min, self.config.safe_distance_max);
        let budget = self.waypoint_budget(random);
        let direction = self.choose_direction(agent, &center, radius, budget);
        target.commit(direction, budget, radius);
        log::debug!(
            "orbiting {} {:?} at radius {:.0} for {} waypoints",
            target.name,
            direction,
            radius,
            budget
        );
        true
    }

    /// Next waypoint in the committed progression, or `None` while idle.
    ///
    /// Skips candidates the agent is already standing on and the angle it
    /// last committed to, then takes the first candidate (in progression
    /// order) whose distance is within the distance delta of the nearest.
    pub fn next_point(&self, target: &TrackedTarget, agent: &Vector2D) -> Option<EncirclePoint> {
        let OrbitState::Orbiting { direction, .. } = OrbitState::of(target) else {
            return None;
        };
        let center = target.last_known_position?;
        let radius = target.orbit_radius()?;

        let delta = self.config.distance_delta;
        let eligible: Vec<EncirclePoint> = self
            .candidates(agent, &center, radius, direction)
            .into_iter()
            .filter(|p| p.distance_from_agent > delta)
            .filter(|p| match target.last_committed_angle_degrees {
                Some(last) => {
                    angular_difference_degrees(p.angle_degrees, last) > self.config.angle_delta
                }
                None => true,
            })
            .collect();

        let nearest = eligible
            .iter()
            .map(|p| p.distance_from_agent)
            .fold(f64::INFINITY, f64::min);

        eligible
            .into_iter()
            .find(|p| p.distance_from_agent - nearest <= delta)
    }

    /// Mark `point` as the waypoint being driven to. Returns to `Idle` when
    /// the budget is spent.
    pub fn consume(&self, target: &mut TrackedTarget, point: &EncirclePoint) {
        target.last_committed_angle_degrees = Some(point.angle_degrees);
        target.decrement_waypoints();
        if target.waypoints_remaining() == 0 {
            log::debug!("orbit around {} complete", target.name);
            target.release();
        }
    }

    /// Reverse the orbit after bumping into a wall. No-op while idle.
    pub fn on_wall_hit(&self, target: &mut TrackedTarget, random: &mut dyn RandomSource) {
        let (Some(direction), Some(radius)) = (target.rotation_direction(), target.orbit_radius())
        else {
            return;
        };
        let flipped = direction.opposite();
        let budget = self.waypoint_budget(random);
        target.commit(flipped, budget, radius);
        log::debug!(
            "wall hit: orbit around {} now {:?} for {} waypoints",
            target.name,
            flipped,
            budget
        );
    }
}
