#[cfg(test)]
#[path = "agents_test.rs"]
mod agents_test;

use crate::net::types::Agent;

/// Agent selection and right-panel visibility.
///
/// `is_agents_right_panel_open` is flipped by controls outside the layout
/// (the mobile header button, the panel's own close button).
///
/// Agent loads carry a generation like `ToolsState`; only the newest one may
/// write `agent`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AgentsState {
    pub is_agents_right_panel_open: bool,
    pub agent: Option<Agent>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl AgentsState {
    pub fn toggle_right_panel(&mut self) {
        self.is_agents_right_panel_open = !self.is_agents_right_panel_open;
    }

    pub fn set_right_panel_open(&mut self, open: bool) {
        self.is_agents_right_panel_open = open;
    }

    /// Start loading a new agent; the previous one is cleared immediately.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.agent = None;
        self.error = None;
        self.loading = true;
        self.generation
    }

    /// Switch to "no agent", abandoning any load still in flight.
    pub fn clear_agent(&mut self) {
        self.generation += 1;
        self.agent = None;
        self.error = None;
        self.loading = false;
    }

    /// Apply a fetched agent unless a newer load superseded it.
    pub fn finish_load(&mut self, generation: u64, result: Result<Agent, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(agent) => self.agent = Some(agent),
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Agent id used to scope tool listing, if an agent is active.
    pub fn agent_id(&self) -> Option<&str> {
        self.agent.as_ref().map(|agent| agent.id.as_str()).filter(|id| !id.is_empty())
    }
}
