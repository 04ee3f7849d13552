//! Customer-service-retail personas and the composition that wires them
//!
//! The four built-in personas are plain literals. [`customer_service_retail`]
//! links them into a complete transfer graph and injects transfer tools; that
//! list is what the host runtime receives.

mod listener;
mod returns;
mod sales;
mod simulated_human;

pub use listener::listener;
pub use returns::returns;
pub use sales::sales;
pub use simulated_human::simulated_human;

use log::info;

use crate::agent::{AgentDescriptor, AgentGraph, GraphError, TransferOptions, inject_transfer_tools};

/// Scenario name used in logs and CLI output
pub const SCENARIO: &str = "customerServiceRetail";

/// Built-in personas, in graph order
pub fn builtin() -> Vec<AgentDescriptor> {
    vec![listener(), returns(), sales(), simulated_human()]
}

/// Names of the built-in personas, in graph order
pub fn builtin_names() -> [&'static str; 4] {
    [listener::NAME, returns::NAME, sales::NAME, simulated_human::NAME]
}

/// Link `personas` as a complete graph and inject transfer tools
pub fn compose(personas: Vec<AgentDescriptor>, options: &TransferOptions) -> Result<Vec<AgentDescriptor>, GraphError> {
    let graph = AgentGraph::new(personas)?.link_complete();
    let agents = inject_transfer_tools(graph.agents(), options)?;
    info!("Composed {} agent(s): {}", agents.len(), graph.names().join(", "));
    Ok(agents)
}

/// The exported customer-service-retail agent set
///
/// Built-ins have unique names and no tool called `transfer_agent`, so with
/// default options this cannot fail.
pub fn customer_service_retail() -> Result<Vec<AgentDescriptor>, GraphError> {
    compose(builtin(), &TransferOptions::default())
}
