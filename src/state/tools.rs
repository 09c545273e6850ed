//! Managed tool cache and the available/unauthed partition.
//!
//! DESIGN
//! ======
//! The partition is a pure function of `(agent, managed_tools)` so the tools
//! panel can recompute it on every render and tests can enumerate it.
//! One exclusion rule applies: when the agent pins a tool list, managed tools
//! outside that list are dropped. Every other input entry lands in exactly
//! one group, in input order.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use crate::net::types::{Agent, ManagedTool};

/// Managed tool list for the active agent.
///
/// Each load is stamped with a generation; a response carrying an older
/// generation belongs to an agent the user already left and is dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToolsState {
    pub items: Option<Vec<ManagedTool>>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

/// What the tools panel should show for the current load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolsLoad {
    Loading,
    Failed(String),
    Ready,
}

impl ToolsState {
    /// Start a new load: forget the previous agent's tools and return the
    /// generation the response must carry.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.items = None;
        self.error = None;
        self.loading = true;
        self.generation
    }

    /// Apply a response. Returns `false` (and changes nothing) when a newer
    /// load has started since `generation` was issued.
    pub fn finish_load(&mut self, generation: u64, result: Result<Vec<ManagedTool>, String>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = Some(items),
            Err(message) => self.error = Some(message),
        }
        true
    }

    pub fn status(&self) -> ToolsLoad {
        if self.loading {
            return ToolsLoad::Loading;
        }
        match (&self.items, &self.error) {
            (Some(_), _) => ToolsLoad::Ready,
            (None, Some(message)) => ToolsLoad::Failed(message.clone()),
            (None, None) => ToolsLoad::Loading,
        }
    }
}

/// Tools split into "usable now" and "needs the user to connect first".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AvailableTools {
    pub available: Vec<ManagedTool>,
    pub unauthed: Vec<ManagedTool>,
}

pub fn partition_tools(agent: Option<&Agent>, managed_tools: &[ManagedTool]) -> AvailableTools {
    let pinned = agent.and_then(|a| a.tools.as_deref());
    let mut out = AvailableTools::default();
    for tool in managed_tools {
        if let Some(pinned) = pinned {
            let name = tool.name.as_deref().unwrap_or_default();
            if !pinned.iter().any(|p| p == name) {
                continue;
            }
        }
        if tool.is_auth_required {
            out.unauthed.push(tool.clone());
        } else {
            out.available.push(tool.clone());
        }
    }
    out
}
