//! Arena wall clearance and wall selection.

use crate::enums::{HeadingSet, Wall};
use crate::error::{BoundaryError, BoundaryResult};
use crate::geometry::{deg_to_rad, normalize_radians};
use crate::types::{ArenaSize, Vector2D};

/// Straight-line distance from `point` to one wall.
pub fn distance_to_wall(point: &Vector2D, wall: Wall, arena: &ArenaSize) -> f64 {
    match wall {
        Wall::North => (arena.height - point.y).abs(),
        Wall::South => point.y.abs(),
        Wall::East => (arena.width - point.x).abs(),
        Wall::West => point.x.abs(),
    }
}

/// Distance to each distinct candidate wall, in candidate order.
pub fn wall_distances(point: &Vector2D, arena: &ArenaSize, walls: &[Wall]) -> Vec<(Wall, f64)> {
    let mut distances: Vec<(Wall, f64)> = Vec::with_capacity(walls.len());
    for &wall in walls {
        if distances.iter().any(|(seen, _)| *seen == wall) {
            continue;
        }
        distances.push((wall, distance_to_wall(point, wall, arena)));
    }
    distances
}

/// Candidate wall with the smallest clearance. Earlier candidates win ties.
pub fn nearest_wall(point: &Vector2D, arena: &ArenaSize, walls: &[Wall]) -> BoundaryResult<Wall> {
    select_wall(point, arena, walls, |candidate, best| candidate < best)
}

/// Candidate wall with the largest clearance. Earlier candidates win ties.
pub fn farthest_wall(point: &Vector2D, arena: &ArenaSize, walls: &[Wall]) -> BoundaryResult<Wall> {
    select_wall(point, arena, walls, |candidate, best| candidate > best)
}

fn select_wall(
    point: &Vector2D,
    arena: &ArenaSize,
    walls: &[Wall],
    better: impl Fn(f64, f64) -> bool,
) -> BoundaryResult<Wall> {
    wall_distances(point, arena, walls)
        .into_iter()
        .fold(None, |best: Option<(Wall, f64)>, (wall, d)| match best {
            Some((_, best_d)) if !better(d, best_d) => best,
            _ => Some((wall, d)),
        })
        .map(|(wall, _)| wall)
        .ok_or(BoundaryError::EmptyCandidateSet)
}

/// Distance from `point` to the closest of all four walls.
/// Points outside the arena have no clearance.
pub fn wall_clearance(point: &Vector2D, arena: &ArenaSize) -> f64 {
    if !arena.contains(point) {
        return 0.0;
    }
    Wall::ALL
        .iter()
        .map(|&wall| distance_to_wall(point, wall, arena))
        .fold(f64::INFINITY, f64::min)
}

/// Walls on the side where another agent touched us.
///
/// `bearing` is relative to our `heading`; both are compass radians.
pub fn hit_edges(heading: f64, bearing: f64) -> HeadingSet {
    let other_heading = normalize_radians(bearing + heading);

    let other_is_above = !(deg_to_rad(90.0)..=deg_to_rad(270.0)).contains(&other_heading);
    let other_is_right = (0.0..=deg_to_rad(180.0)).contains(&other_heading);

    HeadingSet::from_sides(other_is_above, other_is_right)
}
