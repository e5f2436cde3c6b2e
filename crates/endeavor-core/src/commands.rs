//! Commands the agent issues to the host each decision cycle.

use serde::{Deserialize, Serialize};

/// One actuator instruction. Angles are compass radians, positive = clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AgentCommand {
    /// Rotate the body by a signed angle.
    TurnBody { radians: f64 },
    /// Drive forward (positive) or backward (negative).
    Advance { distance: f64 },
    /// Rotate the gun turret by a signed angle.
    TurnGun { radians: f64 },
    /// Fire with the given power.
    Fire { power: f64 },
    /// Sweep the radar by a signed angle.
    SweepRadar { radians: f64 },
}

impl AgentCommand {
    pub fn is_movement(&self) -> bool {
        matches!(self, AgentCommand::TurnBody { .. } | AgentCommand::Advance { .. })
    }
}
