//! Host physics constants and agent tuning parameters.

// --- Arena ---

/// Default arena width.
pub const ARENA_WIDTH: f64 = 800.0;

/// Default arena height.
pub const ARENA_HEIGHT: f64 = 600.0;

// --- Body physics ---

/// Maximum absolute body velocity (units per tick).
pub const MAX_VELOCITY: f64 = 8.0;

/// Speed gained per tick while accelerating.
pub const ACCELERATION: f64 = 1.0;

/// Speed lost per tick while braking.
pub const DECELERATION: f64 = 2.0;

/// Body turn rate at standstill (degrees per tick).
pub const MAX_TURN_RATE_DEGREES: f64 = 10.0;

/// Turn rate lost per unit of speed (degrees per tick).
pub const TURN_RATE_VELOCITY_PENALTY: f64 = 0.75;

// --- Weapon ---

/// Gun turret turn rate (degrees per tick).
pub const GUN_TURN_RATE_DEGREES: f64 = 20.0;

/// Smallest power the gun accepts.
pub const MIN_FIRE_POWER: f64 = 0.1;

/// Largest power the gun accepts.
pub const MAX_FIRE_POWER: f64 = 3.0;

/// Fire power is `FIRE_POWER_DISTANCE_FACTOR / distance`, capped at max power.
pub const FIRE_POWER_DISTANCE_FACTOR: f64 = 400.0;

/// Bullet speed at zero power (units per tick).
pub const BULLET_BASE_SPEED: f64 = 20.0;

/// Bullet speed lost per unit of power.
pub const BULLET_SPEED_POWER_FACTOR: f64 = 3.0;

// --- Radar ---

/// Radar sweep per decision (degrees).
pub const RADAR_SWEEP_DEGREES: f64 = 45.0;

// --- Encircling ---

/// Angular step between orbit waypoints (degrees).
pub const ENCIRCLING_STEP_DEGREES: f64 = 45.0;

/// Two distances closer than this are considered equal.
pub const DISTANCE_DELTA: f64 = 5.0;

/// Two orbit angles closer than this (degrees) are considered the same waypoint.
pub const ANGLE_DELTA: f64 = ENCIRCLING_STEP_DEGREES / 2.0;

/// Orbit radius range.
pub const SAFE_DISTANCE_MIN: f64 = 100.0;
pub const SAFE_DISTANCE_MAX: f64 = 300.0;

/// Range of full rotations per orbit commitment.
pub const ENCIRCLE_COUNT_MIN: f64 = 0.25;
pub const ENCIRCLE_COUNT_MAX: f64 = 2.0;

/// Granularity of the randomized encircle count.
pub const ENCIRCLE_COUNT_STEP: f64 = 0.25;

// --- Collisions ---

/// Distance driven away after bumping into a wall or another agent.
pub const ESCAPE_DISTANCE: f64 = 20.0;
