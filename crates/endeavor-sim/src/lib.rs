//! Agent runtime for ENDEAVOR.
//!
//! Movement prediction, firing solutions, and the agent that ties the
//! tracker and orbit planner to host events and commands.

pub mod agent;
pub mod engagement;
pub mod predictor;
pub mod shared;

pub use endeavor_core as core;
pub use agent::AgentState;
pub use shared::SharedAgent;
