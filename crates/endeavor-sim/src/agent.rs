//! The agent: tracker, orbit planner, and gun, driven by host events.
//!
//! `AgentState` owns everything the agent remembers. Event handlers update
//! it; `decide_next_action` reads it and produces this cycle's commands.
//! Locking is the caller's business (see [`crate::shared`]).

use endeavor_core::boundary::{farthest_wall, hit_edges, nearest_wall};
use endeavor_core::commands::AgentCommand;
use endeavor_core::config::AgentConfig;
use endeavor_core::enums::{RotationDirection, TargetPolicy, Wall};
use endeavor_core::events::{AgentEvent, OwnStatus, Sighting};
use endeavor_core::geometry::{deg_to_rad, normalize_relative};
use endeavor_threat_ai::encircle::EncirclePlanner;
use endeavor_threat_ai::random::{RandomSource, SeededRandom};
use endeavor_threat_ai::tracker::{SightingOutcome, ThreatTracker};

use crate::engagement::{engagement_order, priority_order, shortest_rotation, Shooter};

/// Turn-then-drive maneuver queued by a collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeManeuver {
    pub turn_radians: f64,
    pub distance: f64,
}

/// Complete agent state.
pub struct AgentState {
    config: AgentConfig,
    planner: EncirclePlanner,
    tracker: ThreatTracker,
    random: Box<dyn RandomSource + Send>,
    status: Option<OwnStatus>,
    radar_direction: Option<RotationDirection>,
    pending_escape: Option<EscapeManeuver>,
}

impl AgentState {
    pub fn new(config: AgentConfig, random: Box<dyn RandomSource + Send>) -> Self {
        Self {
            planner: EncirclePlanner::new(config.encircle, config.arena),
            tracker: ThreatTracker::new(config.target_policy),
            config,
            random,
            status: None,
            radar_direction: None,
            pending_escape: None,
        }
    }

    /// Agent whose orbits are drawn from `config.seed`.
    pub fn seeded(config: AgentConfig) -> Self {
        let random = Box::new(SeededRandom::new(config.seed));
        Self::new(config, random)
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn tracker(&self) -> &ThreatTracker {
        &self.tracker
    }

    pub fn status(&self) -> Option<&OwnStatus> {
        self.status.as_ref()
    }

    pub fn pending_escape(&self) -> Option<EscapeManeuver> {
        self.pending_escape
    }

    /// Dispatch one host event to its handler.
    pub fn handle(&mut self, event: AgentEvent) {
        match event {
            AgentEvent::Status(status) => self.on_status(status),
            AgentEvent::Sighting(sighting) => self.on_sighting(&sighting),
            AgentEvent::WallHit { bearing } => self.on_wall_hit(bearing),
            AgentEvent::AgentCollision { bearing } => self.on_agent_collision(bearing),
            AgentEvent::Death { name } => self.on_death(&name),
        }
    }

    pub fn on_status(&mut self, status: OwnStatus) {
        self.status = Some(status);
    }

    /// Place the sighted enemy and, if it is the one we pursue and we have
    /// no orbit around it yet, commit to one.
    pub fn on_sighting(&mut self, sighting: &Sighting) {
        let Some(own) = self.status else {
            log::debug!("sighting of {} before any status, dropped", sighting.name);
            return;
        };
        let position = own.position.project(sighting.distance, own.heading + sighting.bearing);
        let outcome = self
            .tracker
            .observe(&sighting.name, position, sighting.heading, own.tick);
        if outcome == SightingOutcome::Ignored {
            return;
        }

        if self.tracker.focus() != Some(sighting.name.as_str()) {
            return;
        }
        if let Some(target) = self.tracker.focused_mut() {
            if !target.is_orbiting() {
                self.planner.commit(target, &own.position, self.random.as_mut());
            }
        }
    }

    /// We drove into a wall: back off from it and reverse the orbit around
    /// the pursued enemy.
    pub fn on_wall_hit(&mut self, bearing: f64) {
        if let Some(own) = self.status {
            match nearest_wall(&own.position, &self.config.arena, &Wall::ALL) {
                Ok(wall) => {
                    log::info!(
                        "hit {wall:?} wall at ({:.1}, {:.1}), bearing {:.2}",
                        own.position.x,
                        own.position.y,
                        bearing
                    );
                    self.pending_escape = Some(self.escape_toward(&own, wall.opposite()));
                }
                Err(err) => log::warn!("wall hit: {err}"),
            }
        }
        if let Some(target) = self.tracker.focused_mut() {
            self.planner.on_wall_hit(target, self.random.as_mut());
        }
    }

    /// We touched another agent: queue a run at the wall away from it.
    pub fn on_agent_collision(&mut self, bearing: f64) {
        let Some(own) = self.status else {
            return;
        };
        let edges = hit_edges(own.heading, bearing);
        let wall = match farthest_wall(&own.position, &self.config.arena, &edges.walls()) {
            Ok(wall) => wall,
            Err(err) => {
                log::warn!("agent collision: {err}");
                return;
            }
        };
        log::debug!("collision on the {edges:?} side, escaping {:?}", wall.opposite());
        self.pending_escape = Some(self.escape_toward(&own, wall.opposite()));
    }

    /// Turn to face `wall` and drive the escape distance.
    fn escape_toward(&self, own: &OwnStatus, wall: Wall) -> EscapeManeuver {
        EscapeManeuver {
            turn_radians: normalize_relative(wall.radians() - own.heading),
            distance: self.config.escape_distance,
        }
    }

    pub fn on_death(&mut self, name: &str) {
        self.tracker.remove(name);
    }

    /// Commands for this cycle. Never empty: a radar sweep closes every cycle.
    pub fn decide_next_action(&mut self) -> Vec<AgentCommand> {
        let mut commands = Vec::new();

        if let Some(escape) = self.pending_escape.take() {
            commands.push(AgentCommand::TurnBody {
                radians: escape.turn_radians,
            });
            commands.push(AgentCommand::Advance {
                distance: escape.distance,
            });
        } else {
            commands.extend(self.next_movement());
        }
        commands.extend(self.engage());
        commands.push(self.sweep_radar());
        commands
    }

    /// Turn-then-advance toward the next orbit waypoint. Empty while idle.
    fn next_movement(&mut self) -> Vec<AgentCommand> {
        let Some(own) = self.status else {
            return Vec::new();
        };
        let Some(target) = self.tracker.focused_mut() else {
            return Vec::new();
        };
        let Some(waypoint) = self.planner.next_point(target, &own.position) else {
            return Vec::new();
        };
        self.planner.consume(target, &waypoint);

        vec![
            AgentCommand::TurnBody {
                radians: shortest_rotation(&own.position, own.heading, &waypoint.point),
            },
            AgentCommand::Advance {
                distance: own.position.distance_to(&waypoint.point),
            },
        ]
    }

    /// Aim and fire at whichever known enemy a bullet would reach first.
    fn engage(&mut self) -> Vec<AgentCommand> {
        let Some(own) = self.status else {
            return Vec::new();
        };
        let shooter = Shooter {
            position: own.position,
            body_heading: own.heading,
            gun_heading: own.gun_heading,
            tick: own.tick,
        };
        let orders = self
            .tracker
            .iter()
            .filter_map(|target| {
                let position = target.last_known_position?;
                engagement_order(&shooter, &target.name, &position, &self.config.weapon)
            })
            .collect();
        let Some(order) = priority_order(orders) else {
            return Vec::new();
        };

        if self.tracker.policy() == TargetPolicy::MultiTarget
            && self.tracker.focus() != Some(order.target_name.as_str())
        {
            self.tracker.set_focus(&order.target_name);
            if let Some(target) = self.tracker.focused_mut() {
                if !target.is_orbiting() {
                    self.planner.commit(target, &own.position, self.random.as_mut());
                }
            }
        }
        vec![
            AgentCommand::TurnGun {
                radians: order.rotation_radians,
            },
            AgentCommand::Fire {
                power: order.fire_power,
            },
        ]
    }

    /// Radar turns one sweep per cycle, always the same way. The way is
    /// picked on the first sweep with a known position: toward the arena
    /// center along the shorter arc.
    fn sweep_radar(&mut self) -> AgentCommand {
        let direction = match (self.radar_direction, self.status) {
            (Some(direction), _) => direction,
            (None, Some(own)) => {
                let center = self.config.arena.center();
                let direction = if shortest_rotation(&own.position, own.radar_heading, &center) < 0.0 {
                    RotationDirection::CounterClockwise
                } else {
                    RotationDirection::Clockwise
                };
                self.radar_direction = Some(direction);
                direction
            }
            (None, None) => RotationDirection::Clockwise,
        };
        AgentCommand::SweepRadar {
            radians: direction.sign() * deg_to_rad(self.config.radar_sweep_degrees),
        }
    }
}
