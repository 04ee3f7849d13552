//! Agent descriptors and the transfer graph between them
//!
//! Agents are named personas with a prompt and declared tools. Composing a set
//! of agents:
//! - links each agent to its downstream peers ([`AgentGraph`])
//! - appends a transfer tool naming those peers ([`inject_transfer_tools`])
//!
//! Nothing here executes a tool or talks to a model. The result is handed to a
//! host runtime as data.

pub mod descriptor;
pub mod error;
pub mod graph;
pub mod loader;
pub mod transfer;

pub use descriptor::{AgentDescriptor, AgentRef, ToolKind, ToolSchema};
pub use error::GraphError;
pub use graph::{AgentGraph, Finding, Severity, validate};
pub use transfer::{DEFAULT_TRANSFER_TOOL, DESTINATION_PARAM, TransferOptions, inject_transfer_tools, transfer_tool};
