//! Movement predictor.
//!
//! Tick-by-tick forecast of a body driving toward a goal heading under the
//! host's turn and speed rules. Pure functions: the caller supplies the
//! starting state and the physics, nothing is read from or written to the
//! agent.

use std::f64::consts::PI;

use endeavor_core::config::PhysicsConfig;
use endeavor_core::geometry::{normalize_radians, normalize_relative};
use endeavor_core::types::KinematicState;

/// Velocity after one tick of driving toward a point `distance_remaining`
/// away (negative = behind us).
pub fn next_velocity(
    current: f64,
    max_velocity: f64,
    distance_remaining: f64,
    physics: &PhysicsConfig,
) -> f64 {
    if distance_remaining < 0.0 {
        return -next_velocity(-current, max_velocity, -distance_remaining, physics);
    }

    let accel = physics.acceleration;
    let decel = physics.deceleration;
    let max_speed = max_velocity.abs();
    let current_speed = current.abs();
    let mut direction = current;

    let new_speed = if current < 0.0 || current_speed > max_speed {
        let slowed = current_speed - decel;
        if slowed < 0.0 {
            // Stops partway through the tick and spends the rest accelerating.
            let decel_time = current_speed / decel;
            let accel_time = 1.0 - decel_time;
            direction = -direction;
            max_speed
                .min(distance_remaining)
                .min(decel * decel_time * decel_time + accel * accel_time * accel_time)
        } else {
            slowed
        }
    } else {
        let decel_time = current_speed / decel;
        let decel_distance = 0.5 * decel * decel_time * decel_time + decel_time;
        if distance_remaining <= decel_distance {
            let time = distance_remaining / (decel_time + 1.0);
            if time <= 1.0 {
                (current_speed - decel).max(distance_remaining)
            } else {
                let target = time * decel;
                if current_speed < target {
                    current_speed
                } else if current_speed - target > decel {
                    current_speed - decel
                } else {
                    target
                }
            }
        } else {
            (current_speed + accel).min(max_speed)
        }
    };

    if direction < 0.0 {
        -new_speed
    } else {
        new_speed
    }
}

/// Advance one tick toward `goal_heading` with no distance limit.
///
/// Goals behind us are reached by reversing, so the body never turns more
/// than a quarter circle to line up with one.
pub fn predict_tick(
    state: &KinematicState,
    goal_heading: f64,
    max_velocity: f64,
    physics: &PhysicsConfig,
) -> KinematicState {
    let distance = if (goal_heading - state.heading).cos() < 0.0 {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    step(state, goal_heading, max_velocity, distance, physics)
}

fn step(
    state: &KinematicState,
    goal_heading: f64,
    max_velocity: f64,
    distance_remaining: f64,
    physics: &PhysicsConfig,
) -> KinematicState {
    let mut turn = goal_heading - state.heading;
    if turn.cos() < 0.0 {
        turn += PI;
    }
    let turn = normalize_relative(turn);

    let max_turn = physics.max_turn_rate(state.velocity).max(0.0);
    let heading = normalize_radians(state.heading + turn.clamp(-max_turn, max_turn));
    let velocity = next_velocity(state.velocity, max_velocity, distance_remaining, physics);

    KinematicState {
        x: state.x + heading.sin() * velocity,
        y: state.y + heading.cos() * velocity,
        heading,
        velocity,
        tick: state.tick + 1,
    }
}

/// States from `state` until `distance` has been covered, inclusive of the
/// start. A zero distance yields just `[state]`.
pub fn predict_until_distance_exhausted(
    state: &KinematicState,
    goal_heading: f64,
    max_velocity: f64,
    distance: f64,
    physics: &PhysicsConfig,
) -> Vec<KinematicState> {
    predict_bounded(state, goal_heading, max_velocity, distance, u32::MAX, physics)
}

/// Exactly `ticks` steps after `state`, inclusive of the start.
pub fn predict_n_ticks(
    state: &KinematicState,
    goal_heading: f64,
    max_velocity: f64,
    ticks: u32,
    physics: &PhysicsConfig,
) -> Vec<KinematicState> {
    let mut states = Vec::with_capacity(ticks as usize + 1);
    states.push(*state);
    let mut current = *state;
    for _ in 0..ticks {
        current = predict_tick(&current, goal_heading, max_velocity, physics);
        states.push(current);
    }
    states
}

/// Steps until `distance` is covered or `ticks` run out, whichever comes
/// first. Inclusive of the start.
pub fn predict_bounded(
    state: &KinematicState,
    goal_heading: f64,
    max_velocity: f64,
    distance: f64,
    ticks: u32,
    physics: &PhysicsConfig,
) -> Vec<KinematicState> {
    let mut states = vec![*state];
    let mut current = *state;
    let mut remaining = distance;
    let mut ticks_left = ticks;

    while remaining > 0.0 && ticks_left > 0 {
        let previous = current;
        current = step(&current, goal_heading, max_velocity, remaining, physics);
        states.push(current);
        ticks_left -= 1;

        // Standing still two ticks in a row: the speed cap allows no progress.
        if current.velocity == 0.0 && previous.velocity == 0.0 {
            break;
        }
        remaining -= current.velocity;
    }
    states
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use endeavor_core::types::Vector2D;

    fn physics() -> PhysicsConfig {
        PhysicsConfig::default()
    }

    fn at_rest() -> KinematicState {
        KinematicState::new(Vector2D::new(100.0, 100.0), 0.0, 0.0, 0)
    }

    #[test]
    fn test_zero_distance_is_identity() {
        let state = KinematicState::new(Vector2D::new(3.0, 4.0), 1.0, 5.0, 17);
        let states = predict_until_distance_exhausted(&state, 2.5, 8.0, 0.0, &physics());
        assert_eq!(states, vec![state]);
    }

    #[test]
    fn test_accelerates_to_cap() {
        let states = predict_n_ticks(&at_rest(), 0.0, 8.0, 12, &physics());
        assert_eq!(states.len(), 13);
        let velocities: Vec<f64> = states.iter().map(|s| s.velocity).collect();
        assert_eq!(
            velocities,
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 8.0, 8.0, 8.0, 8.0]
        );
        for pair in states.windows(2) {
            assert_eq!(pair[1].tick, pair[0].tick + 1);
        }
    }

    #[test]
    fn test_straight_north_moves_y() {
        let states = predict_n_ticks(&at_rest(), 0.0, 8.0, 3, &physics());
        let last = states[3];
        assert_abs_diff_eq!(last.x, 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(last.y, 106.0, epsilon = 1e-12);
    }

    #[test]
    fn test_turn_is_clamped() {
        let next = predict_tick(&at_rest(), PI / 2.0, 8.0, &physics());
        assert_abs_diff_eq!(next.heading, 10f64.to_radians(), epsilon = 1e-12);

        let moving = KinematicState::new(Vector2D::ZERO, 0.0, 8.0, 0);
        let next = predict_tick(&moving, PI / 2.0, 8.0, &physics());
        assert_abs_diff_eq!(next.heading, 4f64.to_radians(), epsilon = 1e-12);
    }

    #[test]
    fn test_goal_behind_reverses() {
        let next = predict_tick(&at_rest(), PI, 8.0, &physics());
        assert_abs_diff_eq!(next.heading, 0.0, epsilon = 1e-12);
        assert_eq!(next.velocity, -1.0);
        assert_abs_diff_eq!(next.y, 99.0, epsilon = 1e-12);
    }

    #[test]
    fn test_speed_law() {
        let p = physics();
        assert_eq!(next_velocity(0.0, 8.0, 100.0, &p), 1.0);
        assert_eq!(next_velocity(8.0, 8.0, 100.0, &p), 8.0);
        // Over the cap: decelerate.
        assert_eq!(next_velocity(8.0, 4.0, 100.0, &p), 6.0);
        // Moving the wrong way: brake, then accelerate for the rest of the tick.
        assert_eq!(next_velocity(-1.0, 8.0, 100.0, &p), 0.75);
        assert_eq!(next_velocity(-4.0, 8.0, 100.0, &p), -2.0);
        // Mirrored for targets behind.
        assert_eq!(next_velocity(0.0, 8.0, -100.0, &p), -1.0);
        // Almost there: brake onto the target.
        assert_eq!(next_velocity(2.0, 8.0, 1.5, &p), 1.5);
    }

    #[test]
    fn test_distance_exhausted_stops() {
        let states = predict_until_distance_exhausted(&at_rest(), 0.0, 8.0, 50.0, &physics());
        let travelled: f64 = states.iter().skip(1).map(|s| s.velocity).sum();
        assert!(travelled >= 50.0);
        assert!(states.iter().all(|s| s.velocity <= 8.0));
        let before_last: f64 = states[1..states.len() - 1].iter().map(|s| s.velocity).sum();
        assert!(before_last < 50.0);
    }

    #[test]
    fn test_reverse_start_brakes_then_covers_distance() {
        for start_velocity in [-2.0, -8.0] {
            let start = KinematicState::new(Vector2D::new(100.0, 100.0), 0.0, start_velocity, 0);
            let states = predict_until_distance_exhausted(&start, 0.0, 8.0, 50.0, &physics());

            let net: f64 = states.iter().skip(1).map(|s| s.velocity).sum();
            assert!(net >= 50.0, "net travel {net} from v={start_velocity}");
            let last = states[states.len() - 1];
            assert_abs_diff_eq!(last.y - start.y, net, epsilon = 1e-9);
            assert!(last.velocity > 0.0);
        }
    }

    #[test]
    fn test_bounded_by_ticks() {
        let states = predict_bounded(&at_rest(), 0.0, 8.0, 1000.0, 4, &physics());
        assert_eq!(states.len(), 5);
        assert_eq!(states[4].tick, 4);
    }

    #[test]
    fn test_zero_speed_cap_terminates() {
        let states = predict_until_distance_exhausted(&at_rest(), 0.0, 0.0, 10.0, &physics());
        assert_eq!(states.len(), 2);
    }
}
