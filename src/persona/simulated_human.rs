use crate::agent::AgentDescriptor;

pub const NAME: &str = "simulatedHuman";

/// Human escalation target. Declares no tools of its own.
pub fn simulated_human() -> AgentDescriptor {
    AgentDescriptor::new(
        NAME,
        "Placeholder, simulated human agent that can provide more advanced help to the user. Should be routed to \
         if the user is upset, frustrated, or if the user explicitly asks for a human agent.",
    )
    .with_instructions(include_str!("prompts/simulated_human.md"))
}
