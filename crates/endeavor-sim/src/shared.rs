//! Thread-safe handle around [`AgentState`].
//!
//! Host callbacks and the decision loop may run on different threads. One
//! mutex serializes them, so a handler never interleaves with a decision
//! cycle's read-modify-write of the tracker.

use std::sync::Arc;

use parking_lot::Mutex;

use endeavor_core::commands::AgentCommand;
use endeavor_core::events::AgentEvent;

use crate::agent::AgentState;

#[derive(Clone)]
pub struct SharedAgent {
    state: Arc<Mutex<AgentState>>,
}

impl SharedAgent {
    pub fn new(state: AgentState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn handle(&self, event: AgentEvent) {
        self.state.lock().handle(event);
    }

    pub fn decide(&self) -> Vec<AgentCommand> {
        self.state.lock().decide_next_action()
    }

    /// Read the state under the lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&AgentState) -> R) -> R {
        f(&self.state.lock())
    }
}
