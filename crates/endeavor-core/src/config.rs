//! Agent configuration.
//!
//! Every field has a default taken from [`crate::constants`], so a host only
//! needs to supply what differs from the standard arena rules.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::TargetPolicy;
use crate::error::ConfigError;
use crate::geometry::deg_to_rad;
use crate::types::ArenaSize;

/// Body motion rules of the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub max_velocity: f64,
    pub acceleration: f64,
    pub deceleration: f64,
    pub max_turn_rate_degrees: f64,
    pub turn_rate_velocity_penalty: f64,
}

/// Gun and bullet rules of the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub gun_turn_rate_degrees: f64,
    pub min_power: f64,
    pub max_power: f64,
    pub power_distance_factor: f64,
    pub bullet_base_speed: f64,
    pub bullet_speed_power_factor: f64,
}

/// Orbit shape and waypoint selection tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncircleConfig {
    pub step_degrees: f64,
    pub distance_delta: f64,
    pub angle_delta: f64,
    pub safe_distance_min: f64,
    pub safe_distance_max: f64,
    pub encircle_count_min: f64,
    pub encircle_count_max: f64,
    pub encircle_count_step: f64,
}

/// Complete configuration for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub arena: ArenaSize,
    pub physics: PhysicsConfig,
    pub weapon: WeaponConfig,
    pub encircle: EncircleConfig,
    pub target_policy: TargetPolicy,
    pub radar_sweep_degrees: f64,
    pub escape_distance: f64,
    /// RNG seed. Same seed and same events = same decisions.
    pub seed: u64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            max_velocity: MAX_VELOCITY,
            acceleration: ACCELERATION,
            deceleration: DECELERATION,
            max_turn_rate_degrees: MAX_TURN_RATE_DEGREES,
            turn_rate_velocity_penalty: TURN_RATE_VELOCITY_PENALTY,
        }
    }
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            gun_turn_rate_degrees: GUN_TURN_RATE_DEGREES,
            min_power: MIN_FIRE_POWER,
            max_power: MAX_FIRE_POWER,
            power_distance_factor: FIRE_POWER_DISTANCE_FACTOR,
            bullet_base_speed: BULLET_BASE_SPEED,
            bullet_speed_power_factor: BULLET_SPEED_POWER_FACTOR,
        }
    }
}

impl Default for EncircleConfig {
    fn default() -> Self {
        Self {
            step_degrees: ENCIRCLING_STEP_DEGREES,
            distance_delta: DISTANCE_DELTA,
            angle_delta: ANGLE_DELTA,
            safe_distance_min: SAFE_DISTANCE_MIN,
            safe_distance_max: SAFE_DISTANCE_MAX,
            encircle_count_min: ENCIRCLE_COUNT_MIN,
            encircle_count_max: ENCIRCLE_COUNT_MAX,
            encircle_count_step: ENCIRCLE_COUNT_STEP,
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            arena: ArenaSize::default(),
            physics: PhysicsConfig::default(),
            weapon: WeaponConfig::default(),
            encircle: EncircleConfig::default(),
            target_policy: TargetPolicy::default(),
            radar_sweep_degrees: RADAR_SWEEP_DEGREES,
            escape_distance: ESCAPE_DISTANCE,
            seed: 42,
        }
    }
}

impl PhysicsConfig {
    /// Body turn budget for one tick at the given velocity (radians).
    pub fn max_turn_rate(&self, velocity: f64) -> f64 {
        deg_to_rad(self.max_turn_rate_degrees - self.turn_rate_velocity_penalty * velocity.abs())
    }
}

impl WeaponConfig {
    pub fn gun_turn_rate(&self) -> f64 {
        deg_to_rad(self.gun_turn_rate_degrees)
    }

    pub fn bullet_speed(&self, power: f64) -> f64 {
        self.bullet_base_speed - self.bullet_speed_power_factor * power
    }
}

impl EncircleConfig {
    /// Waypoints in one full rotation, counting both 0° and 360°.
    pub fn full_rotation_steps(&self) -> u32 {
        1 + (360.0 / self.step_degrees) as u32
    }
}

impl AgentConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig = serde_json::from_str(json).map_err(|err| {
            log::warn!("agent config rejected: {err}");
            ConfigError::from(err)
        })?;
        if let Err(err) = config.validate() {
            log::warn!("agent config rejected: {err}");
            return Err(err);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "arena must have positive size, got {}x{}",
                self.arena.width, self.arena.height
            )));
        }
        if self.physics.max_velocity <= 0.0
            || self.physics.acceleration <= 0.0
            || self.physics.deceleration <= 0.0
        {
            return Err(ConfigError::Invalid(
                "velocity, acceleration and deceleration must be positive".into(),
            ));
        }
        if self.weapon.min_power <= 0.0 || self.weapon.min_power > self.weapon.max_power {
            return Err(ConfigError::Invalid(format!(
                "fire power range [{}, {}] is empty",
                self.weapon.min_power, self.weapon.max_power
            )));
        }
        if self.weapon.gun_turn_rate_degrees <= 0.0 {
            return Err(ConfigError::Invalid("gun turn rate must be positive".into()));
        }
        let e = &self.encircle;
        if e.step_degrees <= 0.0 || e.step_degrees > 360.0 {
            return Err(ConfigError::Invalid(format!(
                "encircling step {} is outside (0, 360]",
                e.step_degrees
            )));
        }
        if e.safe_distance_min <= 0.0 || e.safe_distance_min > e.safe_distance_max {
            return Err(ConfigError::Invalid(format!(
                "safe distance range [{}, {}] is empty",
                e.safe_distance_min, e.safe_distance_max
            )));
        }
        if e.encircle_count_min <= 0.0
            || e.encircle_count_min > e.encircle_count_max
            || e.encircle_count_step <= 0.0
        {
            return Err(ConfigError::Invalid(format!(
                "encircle count range [{}, {}] step {} is unusable",
                e.encircle_count_min, e.encircle_count_max, e.encircle_count_step
            )));
        }
        Ok(())
    }
}
