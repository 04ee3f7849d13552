//! Errors raised while composing an agent graph

use thiserror::Error;

/// Precondition violations found while linking or injecting agents
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("duplicate agent name '{0}' in agent set")]
    DuplicateAgentName(String),

    #[error("agent '{agent}' already declares a tool named '{tool}'")]
    DuplicateToolName { agent: String, tool: String },

    #[error("agent '{0}' cannot list itself as a downstream agent")]
    SelfReference(String),

    #[error("unknown agent '{0}'")]
    UnknownAgent(String),

    #[error("agent name must not be empty")]
    EmptyName,
}

impl GraphError {
    /// Agent the error is about, empty for unnamed agents
    pub fn agent(&self) -> &str {
        match self {
            GraphError::DuplicateAgentName(name) | GraphError::SelfReference(name) | GraphError::UnknownAgent(name) => {
                name
            }
            GraphError::DuplicateToolName { agent, .. } => agent,
            GraphError::EmptyName => "",
        }
    }
}
