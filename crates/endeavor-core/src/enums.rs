//! Enumeration types used throughout the agent.

use serde::{Deserialize, Serialize};

use crate::error::BoundaryError;
use crate::geometry::deg_to_rad;

/// Sense of travel around an orbit, as seen on a compass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// A compass heading, also naming the arena wall in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wall {
    North,
    South,
    East,
    West,
}

/// Exactly one vertical and one horizontal wall, e.g. the two walls
/// nearest to where a collision happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHeadingSet")]
pub struct HeadingSet {
    vertical: Wall,
    horizontal: Wall,
}

/// Unchecked wire form of [`HeadingSet`].
#[derive(Deserialize)]
struct RawHeadingSet {
    vertical: Wall,
    horizontal: Wall,
}

impl TryFrom<RawHeadingSet> for HeadingSet {
    type Error = BoundaryError;

    fn try_from(raw: RawHeadingSet) -> Result<Self, Self::Error> {
        HeadingSet::new(raw.vertical, raw.horizontal)
    }
}

/// Which sightings the threat tracker accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetPolicy {
    /// Pursue one enemy until it dies; sightings of others are ignored.
    SingleTarget,
    /// Track every sighted enemy and engage the soonest kill.
    #[default]
    MultiTarget,
}

impl RotationDirection {
    pub fn opposite(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }

    /// +1 for clockwise (compass angles increase), -1 otherwise.
    pub fn sign(self) -> f64 {
        match self {
            RotationDirection::Clockwise => 1.0,
            RotationDirection::CounterClockwise => -1.0,
        }
    }
}

impl Wall {
    /// Candidate order used by wall selection; earlier entries win ties.
    pub const ALL: [Wall; 4] = [Wall::East, Wall::West, Wall::North, Wall::South];

    pub fn opposite(self) -> Self {
        match self {
            Wall::North => Wall::South,
            Wall::South => Wall::North,
            Wall::East => Wall::West,
            Wall::West => Wall::East,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Wall::North | Wall::South)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Wall::East | Wall::West)
    }

    /// Compass heading pointing at this wall.
    pub fn radians(self) -> f64 {
        match self {
            Wall::North => 0.0,
            Wall::East => deg_to_rad(90.0),
            Wall::South => deg_to_rad(180.0),
            Wall::West => deg_to_rad(270.0),
        }
    }
}

impl HeadingSet {
    /// Fails unless `vertical` is North/South and `horizontal` is East/West.
    pub fn new(vertical: Wall, horizontal: Wall) -> Result<Self, BoundaryError> {
        if !vertical.is_vertical() || !horizontal.is_horizontal() {
            return Err(BoundaryError::MismatchedHeadingSet {
                vertical,
                horizontal,
            });
        }
        Ok(Self {
            vertical,
            horizontal,
        })
    }

    /// Total constructor: North when `north`, else South; East when `east`, else West.
    pub fn from_sides(north: bool, east: bool) -> Self {
        Self {
            vertical: if north { Wall::North } else { Wall::South },
            horizontal: if east { Wall::East } else { Wall::West },
        }
    }

    pub fn vertical(&self) -> Wall {
        self.vertical
    }

    pub fn horizontal(&self) -> Wall {
        self.horizontal
    }

    pub fn opposite(&self) -> Self {
        Self {
            vertical: self.vertical.opposite(),
            horizontal: self.horizontal.opposite(),
        }
    }

    pub fn contains(&self, wall: Wall) -> bool {
        self.vertical == wall || self.horizontal == wall
    }

    /// Vertical member first, then horizontal.
    pub fn walls(&self) -> [Wall; 2] {
        [self.vertical, self.horizontal]
    }
}

impl IntoIterator for HeadingSet {
    type Item = Wall;
    type IntoIter = std::array::IntoIter<Wall, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.walls().into_iter()
    }
}
