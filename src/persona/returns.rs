use serde_json::json;

use crate::agent::{AgentDescriptor, ToolSchema};

pub const NAME: &str = "returns";

pub fn returns() -> AgentDescriptor {
    AgentDescriptor::new(
        NAME,
        "Customer Service Agent specialized in order lookups, policy checks, and return initiations.",
    )
    .with_instructions(include_str!("prompts/returns.md"))
    .with_tools([
        ToolSchema::function(
            "lookup_orders",
            "Retrieve detailed order information by using the user's phone number, including shipping status and \
             item details. Please be concise and only provide the minimum information needed to the user.",
            json!({
                "type": "object",
                "properties": {
                    "phone_number": {
                        "type": "string",
                        "description": "The user's phone number tied to their order(s)."
                    }
                },
                "required": ["phone_number"],
                "additionalProperties": false
            }),
        ),
        ToolSchema::function(
            "retrieve_policy",
            "Retrieve and present the store's policies, including eligibility for returns. Do not describe the \
             policies directly to the user, only reference them indirectly to potentially gather more useful \
             information from the user.",
            json!({
                "type": "object",
                "properties": {
                    "region": {
                        "type": "string",
                        "description": "The region where the user is located."
                    },
                    "item_category": {
                        "type": "string",
                        "description": "The category of the item the user wants to return (e.g., snowboard, bindings, boots)."
                    }
                },
                "required": ["region", "item_category"],
                "additionalProperties": false
            }),
        ),
        ToolSchema::function(
            "check_eligibility_and_possibly_initiate_return",
            "Check the eligibility of a proposed action for a given order, providing approval or denial with \
             reasons. Initiates the return when eligible. Ask for confirmation before calling.",
            json!({
                "type": "object",
                "properties": {
                    "user_desired_action": {
                        "type": "string",
                        "description": "The proposed action the user wishes to be taken."
                    },
                    "question": {
                        "type": "string",
                        "description": "The question you'd like help with from the policy reviewer."
                    }
                },
                "required": ["user_desired_action", "question"],
                "additionalProperties": false
            }),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_tools() {
        let agent = returns();
        assert_eq!(agent.tools.len(), 3);
        assert_eq!(agent.tool("lookup_orders").unwrap().required_params(), vec!["phone_number"]);
        assert!(agent.tool_logic.is_empty());
    }
}
