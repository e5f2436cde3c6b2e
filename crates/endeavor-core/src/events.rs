//! Events delivered by the host to the agent.

use serde::{Deserialize, Serialize};

use crate::types::{KinematicState, Vector2D};

/// The agent's own state at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OwnStatus {
    pub position: Vector2D,
    /// Body heading, compass radians.
    pub heading: f64,
    pub gun_heading: f64,
    pub radar_heading: f64,
    pub velocity: f64,
    pub tick: i64,
}

/// Radar contact with another agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub name: String,
    /// Relative to our body heading, radians.
    pub bearing: f64,
    pub distance: f64,
    /// The other agent's own heading, compass radians.
    pub heading: f64,
}

/// All host notifications the agent reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AgentEvent {
    Status(OwnStatus),
    Sighting(Sighting),
    /// We drove into a wall; bearing of the wall relative to our heading.
    WallHit { bearing: f64 },
    /// We touched another agent; bearing relative to our heading.
    AgentCollision { bearing: f64 },
    /// Another agent was destroyed.
    Death { name: String },
}

impl OwnStatus {
    pub fn kinematic_state(&self) -> KinematicState {
        KinematicState::new(self.position, self.heading, self.velocity, self.tick)
    }
}
