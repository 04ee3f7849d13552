use serde_json::json;

use crate::agent::{AgentDescriptor, ToolSchema};

pub const NAME: &str = "listener";

pub fn listener() -> AgentDescriptor {
    AgentDescriptor::new(
        NAME,
        "The agent that connects to the live call and is actively listening to the conversation between CSR and \
         the customer, it knows it is not talking directly to either parties andlistens for actionable requests.",
    )
    .with_instructions(include_str!("prompts/listener.md"))
    .with_tools([
        ToolSchema::function(
            "process_refund",
            "Processes a refund for a specified order after CSR approval. Provides a confirmation code upon completion.",
            json!({
                "type": "object",
                "properties": {
                    "order_id": {
                        "type": "string",
                        "description": "The unique identifier for the order to be refunded."
                    },
                    "refund_reason": {
                        "type": "string",
                        "description": "Reason for the refund as specified by the CSR."
                    },
                    "amount": {
                        "type": "number",
                        "description": "The total amount to be refunded in USD."
                    }
                },
                "required": ["order_id", "refund_reason", "amount"],
                "additionalProperties": false
            }),
        ),
        ToolSchema::function(
            "track_order",
            "Retrieves tracking information for a customer's order and provides the details to the CSR.",
            json!({
                "type": "object",
                "properties": {
                    "order_id": {
                        "type": "string",
                        "description": "The unique identifier for the order to track."
                    }
                },
                "required": ["order_id"],
                "additionalProperties": false
            }),
        ),
        ToolSchema::function(
            "check_inventory",
            "Checks the inventory for a specific product and provides availability details to the CSR.",
            json!({
                "type": "object",
                "properties": {
                    "product_id": {
                        "type": "string",
                        "description": "The unique identifier for the product."
                    },
                    "quantity": {
                        "type": "number",
                        "description": "The number of units the customer or CSR is checking for availability."
                    }
                },
                "required": ["product_id", "quantity"],
                "additionalProperties": false
            }),
        ),
        ToolSchema::function(
            "generate_alternative_suggestions",
            "Suggests alternative products to the CSR based on the customer's inquiry or unavailable products.",
            json!({
                "type": "object",
                "properties": {
                    "current_product_id": {
                        "type": "string",
                        "description": "The unique identifier of the product the customer inquired about."
                    },
                    "reason": {
                        "type": "string",
                        "description": "The reason for generating alternatives, e.g., 'Out of Stock' or 'Customer Request'."
                    }
                },
                "required": ["current_product_id", "reason"],
                "additionalProperties": false
            }),
        ),
        ToolSchema::function(
            "log_escalation_case",
            "Logs a case that requires escalation to higher management or specialized departments.",
            json!({
                "type": "object",
                "properties": {
                    "case_id": {
                        "type": "string",
                        "description": "A unique identifier for the escalation case."
                    },
                    "reason": {
                        "type": "string",
                        "description": "Reason for the escalation as specified by the CSR."
                    },
                    "customer_contact": {
                        "type": "string",
                        "description": "Contact information for the customer, if applicable."
                    }
                },
                "required": ["case_id", "reason"],
                "additionalProperties": false
            }),
        ),
        ToolSchema::function(
            "provide_customer_invoice",
            "Generates and sends an invoice for a customer's order to the CSR for delivery to the customer.",
            json!({
                "type": "object",
                "properties": {
                    "order_id": {
                        "type": "string",
                        "description": "The unique identifier for the order."
                    },
                    "email_address": {
                        "type": "string",
                        "description": "The email address where the invoice should be sent.",
                        "pattern": r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"
                    }
                },
                "required": ["order_id", "email_address"],
                "additionalProperties": false
            }),
        ),
    ])
}
