//! Threat tracker: one record per named enemy.
//!
//! A record is created on the first sighting of a name, overwritten on every
//! later sighting, and dropped when the host reports that enemy's death.
//! Which sightings are accepted at all is governed by [`TargetPolicy`].

use std::collections::BTreeMap;

use endeavor_core::enums::{RotationDirection, TargetPolicy};
use endeavor_core::types::Vector2D;

/// Everything the agent remembers about one enemy.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedTarget {
    pub name: String,
    pub last_known_position: Option<Vector2D>,
    /// Compass heading of the enemy at its last sighting.
    pub last_known_heading: Option<f64>,
    pub last_seen_tick: i64,
    /// Orbit angle (degrees) of the waypoint most recently committed to.
    pub last_committed_angle_degrees: Option<f64>,
    rotation_direction: Option<RotationDirection>,
    waypoints_remaining: u32,
    orbit_radius: Option<f64>,
}

/// Result of feeding one sighting to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SightingOutcome {
    /// First sighting of this name; a record was created.
    Acquired,
    /// Existing record updated.
    Updated,
    /// Dropped by the single-target policy.
    Ignored,
}

/// All tracked enemies, keyed by name.
#[derive(Debug, Clone)]
pub struct ThreatTracker {
    policy: TargetPolicy,
    targets: BTreeMap<String, TrackedTarget>,
    focus: Option<String>,
}

impl TrackedTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_known_position: None,
            last_known_heading: None,
            last_seen_tick: 0,
            last_committed_angle_degrees: None,
            rotation_direction: None,
            waypoints_remaining: 0,
            orbit_radius: None,
        }
    }

    pub fn rotation_direction(&self) -> Option<RotationDirection> {
        self.rotation_direction
    }

    pub fn waypoints_remaining(&self) -> u32 {
        self.waypoints_remaining
    }

    pub fn orbit_radius(&self) -> Option<f64> {
        self.orbit_radius
    }

    /// Whether an orbit is committed and has waypoints left.
    pub fn is_orbiting(&self) -> bool {
        self.rotation_direction.is_some() && self.waypoints_remaining > 0
    }

    /// Commit to orbiting in `direction` for `waypoints` waypoints at `radius`.
    /// A zero budget is raised to one so a committed orbit is never empty.
    pub fn commit(&mut self, direction: RotationDirection, waypoints: u32, radius: f64) {
        self.rotation_direction = Some(direction);
        self.waypoints_remaining = waypoints.max(1);
        self.orbit_radius = Some(radius);
    }

    /// Drop the committed direction; the next cycle re-evaluates it.
    pub fn release(&mut self) {
        self.rotation_direction = None;
        self.waypoints_remaining = 0;
    }

    /// Consume one waypoint. Returns false if none were left.
    pub fn decrement_waypoints(&mut self) -> bool {
        if self.waypoints_remaining == 0 {
            return false;
        }
        self.waypoints_remaining -= 1;
        true
    }
}

impl ThreatTracker {
    pub fn new(policy: TargetPolicy) -> Self {
        Self {
            policy,
            targets: BTreeMap::new(),
            focus: None,
        }
    }

    pub fn policy(&self) -> TargetPolicy {
        self.policy
    }

    /// Record a sighting of `name` at `position`.
    pub fn observe(
        &mut self,
        name: &str,
        position: Vector2D,
        heading: f64,
        tick: i64,
    ) -> SightingOutcome {
        if self.policy == TargetPolicy::SingleTarget {
            match &self.focus {
                Some(focus) if focus != name => return SightingOutcome::Ignored,
                Some(_) => {}
                None => self.focus = Some(name.to_string()),
            }
        }

        let mut outcome = SightingOutcome::Updated;
        let target = self.targets.entry(name.to_string()).or_insert_with(|| {
            outcome = SightingOutcome::Acquired;
            TrackedTarget::new(name)
        });
        target.last_known_position = Some(position);
        target.last_known_heading = Some(heading);
        target.last_seen_tick = tick;

        if outcome == SightingOutcome::Acquired {
            log::info!("acquired target {name} at ({:.1}, {:.1})", position.x, position.y);
            if self.focus.is_none() {
                self.focus = Some(name.to_string());
            }
        }
        outcome
    }

    /// Forget a destroyed enemy. Returns its final record, if it was tracked.
    pub fn remove(&mut self, name: &str) -> Option<TrackedTarget> {
        let removed = self.targets.remove(name);
        if self.focus.as_deref() == Some(name) {
            self.focus = None;
        }
        if removed.is_some() {
            log::info!("target {name} destroyed, {} remaining", self.targets.len());
        }
        removed
    }

    /// Name of the enemy currently pursued.
    pub fn focus(&self) -> Option<&str> {
        self.focus.as_deref()
    }

    /// Redirect pursuit. Ignored under the single-target policy once a focus
    /// exists, and for names that are not tracked.
    pub fn set_focus(&mut self, name: &str) {
        if self.policy == TargetPolicy::SingleTarget && self.focus.is_some() {
            return;
        }
        if self.targets.contains_key(name) {
            self.focus = Some(name.to_string());
        }
    }

    pub fn focused_mut(&mut self) -> Option<&mut TrackedTarget> {
        let name = self.focus.as_deref()?;
        self.targets.get_mut(name)
    }

    pub fn get(&self, name: &str) -> Option<&TrackedTarget> {
        self.targets.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut TrackedTarget> {
        self.targets.get_mut(name)
    }

    /// Records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &TrackedTarget> {
        self.targets.values()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
