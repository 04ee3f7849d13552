use serde_json::json;

use crate::agent::{AgentDescriptor, ToolSchema};

pub const NAME: &str = "sales";

pub fn sales() -> AgentDescriptor {
    AgentDescriptor::new(
        NAME,
        "Handles sales-related inquiries, including new product details, recommendations, promotions, and \
         purchase flows. Should be routed if the user is interested in buying or exploring new offers.",
    )
    .with_instructions(include_str!("prompts/sales.md"))
    .with_tools([
        ToolSchema::function(
            "lookup_new_sales",
            "Checks for current promotions, discounts, or special deals. Respond with available offers relevant to \
             the user's query.",
            json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "enum": ["snowboard", "apparel", "boots", "accessories", "any"],
                        "description": "The product category or general area the user is interested in (optional)."
                    }
                },
                "required": ["category"],
                "additionalProperties": false
            }),
        ),
        ToolSchema::function(
            "add_to_cart",
            "Adds an item to the user's shopping cart.",
            json!({
                "type": "object",
                "properties": {
                    "item_id": {
                        "type": "string",
                        "description": "The ID of the item to add to the cart."
                    }
                },
                "required": ["item_id"],
                "additionalProperties": false
            }),
        ),
        ToolSchema::function(
            "checkout",
            "Initiates a checkout process with the user's selected items.",
            json!({
                "type": "object",
                "properties": {
                    "item_ids": {
                        "type": "array",
                        "description": "An array of item IDs the user intends to purchase.",
                        "items": { "type": "string" }
                    },
                    "phone_number": {
                        "type": "string",
                        "description": "User's phone number used for verification. Formatted like '(111) 222-3333'",
                        "pattern": r"^\(\d{3}\) \d{3}-\d{4}$"
                    }
                },
                "required": ["item_ids", "phone_number"],
                "additionalProperties": false
            }),
        ),
    ])
}
