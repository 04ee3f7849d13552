//! Transfer tool synthesis
//!
//! Every agent with downstream peers gets one extra function tool whose
//! `destination_agent` argument is restricted to those peers' names. The model
//! calls it to hand the conversation off; the host performs the switch.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;

use super::descriptor::{AgentDescriptor, AgentRef, ToolSchema};
use super::error::GraphError;

/// Default name of the synthesized tool
pub const DEFAULT_TRANSFER_TOOL: &str = "transfer_agent";

/// Argument carrying the chosen peer
pub const DESTINATION_PARAM: &str = "destination_agent";

const TRANSFER_GUIDANCE: &str = "Triggers a transfer of the user to a more specialized agent.
Calls escalate to a more specialized LLM agent or to a human agent, with additional context.
Only call this function if one of the available agents is appropriate. Don't transfer to your own agent type.

Let the user know you're about to transfer them before doing so.

Available Agents:";

/// Options for transfer tool synthesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferOptions {
    /// Name given to the synthesized tool
    pub tool_name: String,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            tool_name: DEFAULT_TRANSFER_TOOL.to_string(),
        }
    }
}

/// Build the transfer tool schema for a list of downstream peers
pub fn transfer_tool(tool_name: &str, downstream: &[AgentRef]) -> ToolSchema {
    let available = downstream
        .iter()
        .map(|peer| {
            let description = if peer.public_description.is_empty() {
                "No description"
            } else {
                peer.public_description.as_str()
            };
            format!("- {}: {}", peer.name, description)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let names: Vec<&str> = downstream.iter().map(|peer| peer.name.as_str()).collect();

    ToolSchema::function(
        tool_name,
        format!("{}\n{}", TRANSFER_GUIDANCE, available),
        json!({
            "type": "object",
            "properties": {
                "rationale_for_transfer": {
                    "type": "string",
                    "description": "The reasoning why this transfer is needed."
                },
                "conversation_context": {
                    "type": "string",
                    "description": "Relevant context from the conversation that will help the recipient perform the correct action."
                },
                DESTINATION_PARAM: {
                    "type": "string",
                    "description": "The more specialized destination_agent that should handle the user's intended request.",
                    "enum": names
                }
            },
            "required": ["rationale_for_transfer", "conversation_context", DESTINATION_PARAM],
            "additionalProperties": false
        }),
    )
}

/// Append a transfer tool to every agent that has downstream peers
///
/// Returns new descriptors; `agents` is left as it was. Agents without peers
/// come back unchanged. Downstream names are not checked against the input set.
///
/// Fails on duplicate agent names, or when an agent already declares a tool
/// with the transfer tool's name.
pub fn inject_transfer_tools(
    agents: &[AgentDescriptor],
    options: &TransferOptions,
) -> Result<Vec<AgentDescriptor>, GraphError> {
    let mut seen = HashSet::new();
    for agent in agents {
        if !seen.insert(agent.name.as_str()) {
            return Err(GraphError::DuplicateAgentName(agent.name.clone()));
        }
    }

    agents
        .iter()
        .map(|agent| {
            let mut out = agent.clone();
            if agent.downstream_agents.is_empty() {
                return Ok(out);
            }

            if agent.has_tool(&options.tool_name) {
                return Err(GraphError::DuplicateToolName {
                    agent: agent.name.clone(),
                    tool: options.tool_name.clone(),
                });
            }

            debug!(
                "Injecting {} into '{}' -> [{}]",
                options.tool_name,
                agent.name,
                agent.downstream_names().join(", ")
            );
            out.tools.push(transfer_tool(&options.tool_name, &agent.downstream_agents));
            Ok(out)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(name: &str, peers: &[&str]) -> AgentDescriptor {
        let mut a = AgentDescriptor::new(name, format!("{} agent", name)).with_tool(ToolSchema::function(
            format!("{}_lookup", name),
            "Looks things up",
            json!({ "type": "object", "properties": {} }),
        ));
        a.downstream_agents = peers
            .iter()
            .map(|p| AgentRef {
                name: p.to_string(),
                public_description: format!("{} agent", p),
            })
            .collect();
        a
    }

    #[test]
    fn test_three_agent_scenario() {
        let input = vec![agent("A", &["B", "C"]), agent("B", &["A", "C"]), agent("C", &["A", "B"])];

        let out = inject_transfer_tools(&input, &TransferOptions::default()).unwrap();

        let expected = [("A", vec!["B", "C"]), ("B", vec!["A", "C"]), ("C", vec!["A", "B"])];
        for (agent, (name, peers)) in out.iter().zip(expected.iter()) {
            assert_eq!(agent.name, *name);
            let tool = agent.tool(DEFAULT_TRANSFER_TOOL).unwrap();
            assert_eq!(tool.enum_values(DESTINATION_PARAM).unwrap(), *peers);
        }
    }

    #[test]
    fn test_existing_tools_preserved_and_transfer_appended_last() {
        let input = vec![agent("A", &["B"]), agent("B", &["A"])];

        let out = inject_transfer_tools(&input, &TransferOptions::default()).unwrap();

        assert_eq!(out[0].tools.len(), 2);
        assert_eq!(out[0].tools[0], input[0].tools[0]);
        assert_eq!(out[0].tools[1].name, DEFAULT_TRANSFER_TOOL);
    }

    #[test]
    fn test_input_not_mutated() {
        let input = vec![agent("A", &["B"]), agent("B", &["A"])];
        let before = input.clone();

        let _ = inject_transfer_tools(&input, &TransferOptions::default()).unwrap();

        assert_eq!(input, before);
        assert_eq!(input[0].tools.len(), 1);
    }

    #[test]
    fn test_no_peers_no_tool() {
        let input = vec![agent("solo", &[])];

        let out = inject_transfer_tools(&input, &TransferOptions::default()).unwrap();

        assert_eq!(out, input);
    }

    #[test]
    fn test_empty_input() {
        let out = inject_transfer_tools(&[], &TransferOptions::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_dangling_peer_is_not_checked() {
        let input = vec![agent("A", &["ghost"])];

        let out = inject_transfer_tools(&input, &TransferOptions::default()).unwrap();

        let tool = out[0].tool(DEFAULT_TRANSFER_TOOL).unwrap();
        assert_eq!(tool.enum_values(DESTINATION_PARAM).unwrap(), vec!["ghost"]);
    }

    #[test]
    fn test_duplicate_agent_name_rejected() {
        let input = vec![agent("A", &["B"]), agent("A", &["B"])];

        let err = inject_transfer_tools(&input, &TransferOptions::default()).unwrap_err();

        assert_eq!(err, GraphError::DuplicateAgentName("A".to_string()));
    }

    #[test]
    fn test_tool_name_collision_rejected() {
        let input = vec![agent("A", &["B"]), agent("B", &["A"])];
        let options = TransferOptions {
            tool_name: "A_lookup".to_string(),
        };

        let err = inject_transfer_tools(&input, &options).unwrap_err();

        assert!(matches!(err, GraphError::DuplicateToolName { ref agent, .. } if agent == "A"));
    }

    #[test]
    fn test_custom_tool_name() {
        let input = vec![agent("A", &["B"]), agent("B", &["A"])];
        let options = TransferOptions {
            tool_name: "transferAgents".to_string(),
        };

        let out = inject_transfer_tools(&input, &options).unwrap();

        assert!(out[0].has_tool("transferAgents"));
        assert!(!out[0].has_tool(DEFAULT_TRANSFER_TOOL));
    }

    #[test]
    fn test_transfer_tool_description_lists_peers() {
        let peers = vec![
            AgentRef {
                name: "sales".to_string(),
                public_description: "Sells snowboards".to_string(),
            },
            AgentRef::named("human"),
        ];

        let tool = transfer_tool(DEFAULT_TRANSFER_TOOL, &peers);

        assert!(tool.description.contains("Available Agents:"));
        assert!(tool.description.contains("- sales: Sells snowboards"));
        assert!(tool.description.contains("- human: No description"));
        assert_eq!(
            tool.required_params(),
            vec!["rationale_for_transfer", "conversation_context", "destination_agent"]
        );
    }
}
