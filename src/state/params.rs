//! Chat request parameters shared by the layout, tool panel and composer.
//!
//! DESIGN
//! ======
//! Mutations go through `ParamsState::merge` with a sparse `ParamsPatch`, so
//! sibling controls that each own one field never clobber each other.

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;

use crate::net::types::ToolRef;

/// Parameters sent with the next chat request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamsState {
    pub deployment: Option<String>,
    pub tools: Option<Vec<ToolRef>>,
}

/// Sparse update: `None` fields leave the current value untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamsPatch {
    pub deployment: Option<String>,
    pub tools: Option<Vec<ToolRef>>,
}

impl ParamsState {
    pub fn merge(&mut self, patch: ParamsPatch) {
        if let Some(deployment) = patch.deployment {
            self.deployment = Some(deployment);
        }
        if let Some(tools) = patch.tools {
            self.tools = Some(tools);
        }
    }

    /// The selected deployment, treating an empty name as unset.
    pub fn selected_deployment(&self) -> Option<&str> {
        self.deployment.as_deref().filter(|name| !name.is_empty())
    }

    pub fn enabled_tools(&self) -> &[ToolRef] {
        self.tools.as_deref().unwrap_or_default()
    }

    pub fn is_tool_enabled(&self, name: &str) -> bool {
        self.enabled_tools().iter().any(|tool| tool.name == name)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Enabled-tools list after switching `name` on or off.
///
/// Turning on appends `{name}` when absent; turning off drops every entry
/// with that name. Order of the remaining entries is preserved.
pub fn toggle_tool(enabled: &[ToolRef], name: &str, checked: bool) -> Vec<ToolRef> {
    if checked {
        let mut next = enabled.to_vec();
        if !next.iter().any(|tool| tool.name == name) {
            next.push(ToolRef::new(name));
        }
        next
    } else {
        enabled.iter().filter(|tool| tool.name != name).cloned().collect()
    }
}
