//! Downstream wiring between agents
//!
//! An [`AgentGraph`] owns an ordered set of uniquely named descriptors plus a
//! name lookup table. Linking consumes the graph and returns a new one, so
//! descriptors are never shared while their downstream lists change.

use lazy_regex::regex_is_match;
use log::{debug, warn};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::descriptor::{AgentDescriptor, AgentRef};
use super::error::GraphError;
use super::transfer::DESTINATION_PARAM;

/// Ordered, uniquely named set of agents
#[derive(Debug, Clone)]
pub struct AgentGraph {
    agents: Vec<AgentDescriptor>,
    index: HashMap<String, usize>,
}

impl AgentGraph {
    /// Build a graph, rejecting empty or repeated names
    pub fn new(agents: Vec<AgentDescriptor>) -> Result<Self, GraphError> {
        let mut index = HashMap::with_capacity(agents.len());
        for (i, agent) in agents.iter().enumerate() {
            if agent.name.trim().is_empty() {
                return Err(GraphError::EmptyName);
            }
            if index.insert(agent.name.clone(), i).is_some() {
                return Err(GraphError::DuplicateAgentName(agent.name.clone()));
            }
        }
        Ok(Self { agents, index })
    }

    /// Point every agent at every other agent, in graph order
    pub fn link_complete(mut self) -> Self {
        let refs: Vec<AgentRef> = self.agents.iter().map(AgentDescriptor::to_ref).collect();
        for agent in &mut self.agents {
            agent.downstream_agents = refs.iter().filter(|r| r.name != agent.name).cloned().collect();
            debug!("Linked '{}' -> [{}]", agent.name, agent.downstream_names().join(", "));
        }
        self
    }

    /// Replace one agent's downstream list with the named targets
    pub fn link(mut self, from: &str, to: &[&str]) -> Result<Self, GraphError> {
        let from_idx = *self
            .index
            .get(from)
            .ok_or_else(|| GraphError::UnknownAgent(from.to_string()))?;

        let mut targets = Vec::with_capacity(to.len());
        for name in to {
            if *name == from {
                return Err(GraphError::SelfReference(from.to_string()));
            }
            let target = self.get(name).ok_or_else(|| GraphError::UnknownAgent(name.to_string()))?;
            targets.push(target.to_ref());
        }

        self.agents[from_idx].downstream_agents = targets;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&AgentDescriptor> {
        self.index.get(name).map(|&i| &self.agents[i])
    }

    /// Resolve a downstream reference to the agent it names
    pub fn resolve(&self, reference: &AgentRef) -> Option<&AgentDescriptor> {
        self.get(&reference.name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn agents(&self) -> &[AgentDescriptor] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn into_agents(self) -> Vec<AgentDescriptor> {
        self.agents
    }
}

/// How bad a validation finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single problem found in an agent set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub agent: String,
    pub message: String,
}

impl Finding {
    pub fn error(agent: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            agent: agent.to_string(),
            message: message.into(),
        }
    }

    pub fn warning(agent: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            agent: agent.to_string(),
            message: message.into(),
        }
    }
}

impl From<&GraphError> for Finding {
    fn from(err: &GraphError) -> Self {
        Finding::error(err.agent(), err.to_string())
    }
}

/// Check an agent set for naming and wiring problems
///
/// Unlike [`AgentGraph::new`] this reports everything it finds instead of
/// stopping at the first problem. A transfer tool whose `enum` no longer
/// matches the downstream list is reported as stale.
pub fn validate(agents: &[AgentDescriptor], transfer_tool: &str) -> Vec<Finding> {
    let mut findings = Vec::new();
    let names: HashSet<&str> = agents.iter().map(|a| a.name.as_str()).collect();

    let mut seen = HashSet::new();
    for agent in agents {
        if agent.name.trim().is_empty() {
            findings.push(Finding::error("", "agent name is empty"));
        } else if !seen.insert(agent.name.as_str()) {
            findings.push(Finding::error(&agent.name, "duplicate agent name"));
        }

        if agent.public_description.trim().is_empty() {
            findings.push(Finding::warning(&agent.name, "missing public description"));
        }

        for peer in &agent.downstream_agents {
            if peer.name == agent.name {
                findings.push(Finding::error(&agent.name, "lists itself as a downstream agent"));
            } else if !names.contains(peer.name.as_str()) {
                findings.push(Finding::error(
                    &agent.name,
                    format!("downstream agent '{}' is not in the set", peer.name),
                ));
            }
        }

        let mut tool_names = HashSet::new();
        for tool in &agent.tools {
            if !tool_names.insert(tool.name.as_str()) {
                findings.push(Finding::error(&agent.name, format!("duplicate tool name '{}'", tool.name)));
            }
            if !regex_is_match!(r"^[a-zA-Z0-9_-]{1,64}$", &tool.name) {
                findings.push(Finding::error(&agent.name, format!("invalid tool name '{}'", tool.name)));
            }
            if tool.parameters.get("type").and_then(|t| t.as_str()) != Some("object") {
                findings.push(Finding::warning(
                    &agent.name,
                    format!("tool '{}' parameters are not an object schema", tool.name),
                ));
            }
        }

        match agent.tool(transfer_tool) {
            Some(tool) => {
                let declared = tool.enum_values(DESTINATION_PARAM).unwrap_or_default();
                if declared != agent.downstream_names() {
                    findings.push(Finding::error(
                        &agent.name,
                        format!(
                            "stale {}: enum [{}] but downstream is [{}]",
                            transfer_tool,
                            declared.join(", "),
                            agent.downstream_names().join(", ")
                        ),
                    ));
                }
            }
            None if !agent.downstream_agents.is_empty() => {
                findings.push(Finding::warning(
                    &agent.name,
                    format!("has downstream agents but no {} tool", transfer_tool),
                ));
            }
            None => {}
        }
    }

    for finding in &findings {
        if finding.severity == Severity::Error {
            warn!("Validation error in '{}': {}", finding.agent, finding.message);
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::transfer::{DEFAULT_TRANSFER_TOOL, TransferOptions, inject_transfer_tools};

    fn named(names: &[&str]) -> Vec<AgentDescriptor> {
        names
            .iter()
            .map(|n| AgentDescriptor::new(*n, format!("{} persona", n)))
            .collect()
    }

    #[test]
    fn test_new_rejects_duplicate_names() {
        let err = AgentGraph::new(named(&["a", "b", "a"])).unwrap_err();
        assert_eq!(err, GraphError::DuplicateAgentName("a".to_string()));
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let err = AgentGraph::new(named(&["a", " "])).unwrap_err();
        assert_eq!(err, GraphError::EmptyName);
    }

    #[test]
    fn test_link_complete_excludes_self_and_keeps_order() {
        let graph = AgentGraph::new(named(&["a", "b", "c", "d"])).unwrap().link_complete();

        assert_eq!(graph.get("a").unwrap().downstream_names(), vec!["b", "c", "d"]);
        assert_eq!(graph.get("c").unwrap().downstream_names(), vec!["a", "b", "d"]);
        for agent in graph.agents() {
            assert_eq!(agent.downstream_agents.len(), 3);
            assert!(!agent.downstream_names().contains(&agent.name.as_str()));
        }
    }

    #[test]
    fn test_link_complete_single_agent() {
        let graph = AgentGraph::new(named(&["solo"])).unwrap().link_complete();
        assert!(graph.get("solo").unwrap().downstream_agents.is_empty());
    }

    #[test]
    fn test_link_carries_public_description() {
        let graph = AgentGraph::new(named(&["a", "b"])).unwrap().link("a", &["b"]).unwrap();

        let a = graph.get("a").unwrap();
        assert_eq!(a.downstream_agents[0].public_description, "b persona");
        assert_eq!(graph.resolve(&a.downstream_agents[0]).unwrap().name, "b");
        assert!(graph.get("b").unwrap().downstream_agents.is_empty());
    }

    #[test]
    fn test_link_rejects_self_and_unknown() {
        let graph = AgentGraph::new(named(&["a", "b"])).unwrap();

        assert_eq!(
            graph.clone().link("a", &["a"]).unwrap_err(),
            GraphError::SelfReference("a".to_string())
        );
        assert_eq!(
            graph.clone().link("a", &["z"]).unwrap_err(),
            GraphError::UnknownAgent("z".to_string())
        );
        assert_eq!(graph.link("z", &["a"]).unwrap_err(), GraphError::UnknownAgent("z".to_string()));
    }

    #[test]
    fn test_validate_clean_graph() {
        let linked = AgentGraph::new(named(&["a", "b", "c"])).unwrap().link_complete().into_agents();
        let injected = inject_transfer_tools(&linked, &TransferOptions::default()).unwrap();

        let findings = validate(&injected, DEFAULT_TRANSFER_TOOL);

        assert!(findings.is_empty(), "unexpected findings: {:?}", findings);
    }

    #[test]
    fn test_validate_reports_stale_transfer_tool() {
        let linked = AgentGraph::new(named(&["a", "b", "c"])).unwrap().link_complete().into_agents();
        let mut injected = inject_transfer_tools(&linked, &TransferOptions::default()).unwrap();
        injected[0].downstream_agents.pop();

        let findings = validate(&injected, DEFAULT_TRANSFER_TOOL);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].agent, "a");
        assert!(findings[0].message.starts_with("stale"));
    }

    #[test]
    fn test_finding_from_graph_error() {
        let err = GraphError::DuplicateToolName {
            agent: "warranty".to_string(),
            tool: DEFAULT_TRANSFER_TOOL.to_string(),
        };

        let finding = Finding::from(&err);

        assert_eq!(finding.severity, Severity::Error);
        assert_eq!(finding.agent, "warranty");
        assert_eq!(finding.message, "agent 'warranty' already declares a tool named 'transfer_agent'");
    }

    #[test]
    fn test_validate_reports_everything() {
        let mut agents = named(&["a", "a"]);
        agents[0].downstream_agents.push(AgentRef::named("a"));
        agents[0].downstream_agents.push(AgentRef::named("ghost"));
        agents[1].tools.push(crate::agent::ToolSchema::function(
            "bad name!",
            "",
            serde_json::json!({ "type": "object" }),
        ));

        let findings = validate(&agents, DEFAULT_TRANSFER_TOOL);
        let errors: Vec<&str> = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .map(|f| f.message.as_str())
            .collect();

        assert!(errors.contains(&"duplicate agent name"));
        assert!(errors.contains(&"lists itself as a downstream agent"));
        assert!(errors.contains(&"downstream agent 'ghost' is not in the set"));
        assert!(errors.contains(&"invalid tool name 'bad name!'"));
        assert!(findings.iter().any(|f| f.severity == Severity::Warning));
    }
}
