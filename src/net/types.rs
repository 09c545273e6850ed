//! Wire DTOs for the assistants REST API.
//!
//! DESIGN
//! ======
//! Every field the backend may omit is optional or defaulted so a partially
//! populated payload still decodes; rendering code picks safe fallbacks.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A named backend/model configuration the client can target.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub name: String,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub env_vars: Vec<String>,
}

/// A capability the assistant may invoke, as listed by `/v1/tools`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ManagedTool {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    /// External authorization link for tools that need the user to connect.
    #[serde(default)]
    pub auth_url: Option<String>,
    #[serde(default)]
    pub is_auth_required: bool,
}

/// Per-tool artifacts attached to an agent (e.g. pinned folders or files).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentToolMetadata {
    #[serde(default)]
    pub id: Option<String>,
    pub tool_name: String,
    #[serde(default)]
    pub artifacts: Vec<serde_json::Value>,
}

/// A configured assistant persona.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub preamble: Option<String>,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub deployment: Option<String>,
    /// When present, the agent pins this exact tool set.
    #[serde(default)]
    pub tools: Option<Vec<String>>,
    #[serde(default)]
    pub tools_metadata: Vec<AgentToolMetadata>,
}

impl Agent {
    /// Whether the tool set is fixed by the agent definition.
    pub fn pins_tools(&self) -> bool {
        self.tools.is_some()
    }
}

/// One entry of the enabled-tools parameter list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRef {
    pub name: String,
}

impl ToolRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
