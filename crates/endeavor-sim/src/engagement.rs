//! Engagement planner: gun rotation, fire power, and time of impact.
//!
//! Orders are recomputed every decision cycle from the latest sightings;
//! nothing is cached between cycles.

use std::f64::consts::TAU;

use endeavor_core::config::WeaponConfig;
use endeavor_core::geometry::{arc_angle_radians, arc_length};
use endeavor_core::types::Vector2D;

/// Firing solution against one target.
#[derive(Debug, Clone, PartialEq)]
pub struct EngagementOrder {
    pub target_name: String,
    pub fire_power: f64,
    /// Signed gun rotation, compass radians (positive = clockwise).
    pub rotation_radians: f64,
    /// Tick at which the bullet is expected to arrive.
    pub time_of_impact: f64,
}

/// Where the shot is fired from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shooter {
    pub position: Vector2D,
    pub body_heading: f64,
    pub gun_heading: f64,
    pub tick: i64,
}

/// Signed rotation that turns `current_heading` at `origin` to face
/// `destination` along the shorter arc. Zero when the two points coincide.
pub fn shortest_rotation(origin: &Vector2D, current_heading: f64, destination: &Vector2D) -> f64 {
    let radius = origin.distance_to(destination);
    let facing = origin.project(radius, current_heading);
    let theta = match arc_angle_radians(origin, &facing, destination) {
        Ok(theta) => theta,
        // Only a zero radius can fail here: we are already on the destination.
        Err(_) => return 0.0,
    };

    let candidates = [-theta, -(TAU - theta), theta, TAU - theta];
    let mut best = candidates[0];
    let mut best_key = rotation_key(origin, current_heading, radius, best, destination);
    for &candidate in &candidates[1..] {
        let key = rotation_key(origin, current_heading, radius, candidate, destination);
        if key < best_key {
            best = candidate;
            best_key = key;
        }
    }
    best
}

/// (arc length, miss distance) of turning by `rotation`.
fn rotation_key(
    origin: &Vector2D,
    heading: f64,
    radius: f64,
    rotation: f64,
    destination: &Vector2D,
) -> (f64, f64) {
    let end = origin.project(radius, heading + rotation);
    (arc_length(rotation, radius), end.distance_to(destination))
}

/// Power for a shot over `distance`: heavier up close, floored at the
/// minimum when the target sits on top of us.
pub fn fire_power(distance: f64, weapon: &WeaponConfig) -> f64 {
    if distance <= 0.0 {
        return weapon.min_power;
    }
    (weapon.power_distance_factor / distance)
        .min(weapon.max_power)
        .clamp(weapon.min_power, weapon.max_power)
}

/// Firing solution against `target`, or `None` when the bullet would never
/// close the distance.
pub fn engagement_order(
    shooter: &Shooter,
    target_name: &str,
    target: &Vector2D,
    weapon: &WeaponConfig,
) -> Option<EngagementOrder> {
    let distance = shooter.position.distance_to(target);
    let power = fire_power(distance, weapon);
    let rotation = shortest_rotation(&shooter.position, shooter.gun_heading, target);
    let turns_to_rotate = rotation.abs() / weapon.gun_turn_rate();

    let divisor = weapon.bullet_speed(power) * shooter.body_heading.cos();
    if divisor == 0.0 {
        log::debug!("no firing solution on {target_name}: bullet makes no headway");
        return None;
    }
    let turns_to_travel = distance / divisor.abs();

    Some(EngagementOrder {
        target_name: target_name.to_string(),
        fire_power: power,
        rotation_radians: rotation,
        time_of_impact: shooter.tick as f64 + turns_to_rotate + turns_to_travel,
    })
}

/// The order that lands soonest. Earlier orders win ties.
pub fn priority_order(orders: Vec<EngagementOrder>) -> Option<EngagementOrder> {
    orders.into_iter().fold(None, |best, order| match best {
        Some(b) if b.time_of_impact <= order.time_of_impact => Some(b),
        _ => Some(order),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn shooter_at(x: f64, y: f64) -> Shooter {
        Shooter {
            position: Vector2D::new(x, y),
            body_heading: 0.0,
            gun_heading: 0.0,
            tick: 0,
        }
    }

    #[test]
    fn test_straight_ahead() {
        let order =
            engagement_order(&shooter_at(0.0, 0.0), "t", &Vector2D::new(0.0, 10.0), &WeaponConfig::default())
                .unwrap();
        assert_eq!(order.rotation_radians, 0.0);
        assert_eq!(order.fire_power, 3.0);
        // 10 units at bullet speed 20 - 3*3 = 11.
        assert_abs_diff_eq!(order.time_of_impact, 10.0 / 11.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_distance_uses_min_power() {
        let order =
            engagement_order(&shooter_at(5.0, 5.0), "t", &Vector2D::new(5.0, 5.0), &WeaponConfig::default())
                .unwrap();
        assert_eq!(order.fire_power, 0.1);
        assert_eq!(order.rotation_radians, 0.0);
        assert_eq!(order.time_of_impact, 0.0);
    }

    #[test]
    fn test_power_falls_with_distance() {
        let weapon = WeaponConfig::default();
        assert_eq!(fire_power(100.0, &weapon), 3.0);
        assert_eq!(fire_power(200.0, &weapon), 2.0);
        assert_eq!(fire_power(8000.0, &weapon), 0.1);
    }

    #[test]
    fn test_stalled_bullet_has_no_solution() {
        let weapon = WeaponConfig {
            bullet_base_speed: 0.0,
            bullet_speed_power_factor: 0.0,
            ..WeaponConfig::default()
        };
        assert!(engagement_order(&shooter_at(0.0, 0.0), "t", &Vector2D::new(0.0, 10.0), &weapon).is_none());
    }

    #[test]
    fn test_rotation_direction_and_size() {
        let origin = Vector2D::new(0.0, 0.0);
        // East of us while facing north: quarter turn clockwise.
        assert_abs_diff_eq!(shortest_rotation(&origin, 0.0, &Vector2D::new(10.0, 0.0)), PI / 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(shortest_rotation(&origin, 0.0, &Vector2D::new(-10.0, 0.0)), -PI / 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(shortest_rotation(&origin, PI / 2.0, &Vector2D::new(0.0, 10.0)), -PI / 2.0, epsilon = 1e-9);
        assert_eq!(shortest_rotation(&origin, 1.0, &origin), 0.0);
    }

    #[test]
    fn test_rotation_never_exceeds_half_turn() {
        let origin = Vector2D::new(50.0, 50.0);
        for i in 0..36 {
            let heading = i as f64 * 10f64.to_radians();
            for target in [
                Vector2D::new(60.0, 50.0),
                Vector2D::new(10.0, 90.0),
                Vector2D::new(50.0, 0.0),
                Vector2D::new(-20.0, 20.0),
            ] {
                let d = origin.distance_to(&target);
                let rotation = shortest_rotation(&origin, heading, &target);
                assert!(arc_length(rotation, d) <= PI * d + 1e-9);
            }
        }
    }

    #[test]
    fn test_priority_is_soonest_impact() {
        let weapon = WeaponConfig::default();
        let shooter = shooter_at(0.0, 0.0);
        let orders = vec![
            engagement_order(&shooter, "far", &Vector2D::new(0.0, 300.0), &weapon).unwrap(),
            engagement_order(&shooter, "behind", &Vector2D::new(0.0, -50.0), &weapon).unwrap(),
            engagement_order(&shooter, "near", &Vector2D::new(0.0, 50.0), &weapon).unwrap(),
        ];
        assert_eq!(priority_order(orders).unwrap().target_name, "near");
        assert!(priority_order(Vec::new()).is_none());
    }
}
