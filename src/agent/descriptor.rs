//! Agent descriptor and tool schema types
//!
//! These are the records handed to the host runtime. Field names serialize in
//! camelCase to match what the realtime host expects:
//!
//! ```json
//! {
//!   "name": "returns",
//!   "publicDescription": "...",
//!   "instructions": "...",
//!   "tools": [{ "type": "function", "name": "...", "description": "...", "parameters": {} }],
//!   "toolLogic": {},
//!   "downstreamAgents": [{ "name": "sales", "publicDescription": "..." }]
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A named persona with its prompt, declared tools and transfer targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDescriptor {
    /// Agent name, unique within a graph (e.g., "listener", "returns")
    pub name: String,

    /// Short description shown to peers when they consider a transfer
    #[serde(default)]
    pub public_description: String,

    /// Opaque prompt text for the model
    #[serde(default)]
    pub instructions: String,

    /// Declared tool schemas, in presentation order
    #[serde(default)]
    pub tools: Vec<ToolSchema>,

    /// Tool name to host-side handler id. Populated by the host, empty here.
    #[serde(default)]
    pub tool_logic: IndexMap<String, String>,

    /// Agents this one may hand the conversation to
    #[serde(default)]
    pub downstream_agents: Vec<AgentRef>,
}

impl AgentDescriptor {
    pub fn new(name: impl Into<String>, public_description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            public_description: public_description.into(),
            instructions: String::new(),
            tools: Vec::new(),
            tool_logic: IndexMap::new(),
            downstream_agents: Vec::new(),
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_tool(mut self, tool: ToolSchema) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn with_tools(mut self, tools: impl IntoIterator<Item = ToolSchema>) -> Self {
        self.tools.extend(tools);
        self
    }

    /// Weak, name-based reference to this agent
    pub fn to_ref(&self) -> AgentRef {
        AgentRef {
            name: self.name.clone(),
            public_description: self.public_description.clone(),
        }
    }

    /// Look up a declared tool by name
    pub fn tool(&self, name: &str) -> Option<&ToolSchema> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tool(name).is_some()
    }

    /// Names of the downstream agents, in order
    pub fn downstream_names(&self) -> Vec<&str> {
        self.downstream_agents.iter().map(|a| a.name.as_str()).collect()
    }
}

/// Reference to another agent by name
///
/// Downstream links form a cycle (every persona points at the others), so they
/// are stored as names and resolved through the graph's lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRef {
    pub name: String,

    #[serde(default)]
    pub public_description: String,
}

impl AgentRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            public_description: String::new(),
        }
    }
}

/// Tool kind understood by the host. Only functions exist today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Function,
}

/// Declarative description of a callable capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    #[serde(rename = "type", default)]
    pub kind: ToolKind,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// JSON-Schema object describing the arguments
    #[serde(default = "empty_object_schema")]
    pub parameters: Value,
}

impl ToolSchema {
    pub fn function(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            kind: ToolKind::Function,
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Names listed under `parameters.required`
    pub fn required_params(&self) -> Vec<&str> {
        self.parameters
            .get("required")
            .and_then(|r| r.as_array())
            .map(|arr| arr.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }

    /// The `enum` list of a string property, if it declares one
    pub fn enum_values(&self, property: &str) -> Option<Vec<&str>> {
        self.parameters
            .get("properties")?
            .get(property)?
            .get("enum")?
            .as_array()
            .map(|arr| arr.iter().filter_map(|v| v.as_str()).collect())
    }
}

fn empty_object_schema() -> Value {
    serde_json::json!({ "type": "object", "properties": {} })
}
