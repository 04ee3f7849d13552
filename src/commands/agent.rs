//! Agent inspection commands

use colored::*;
use eyre::Result;
use serde::Serialize;

use retail_agents::config::Config;

use crate::cli::{AgentAction, OutputFormat};

pub fn run(action: AgentAction, config: &Config) -> Result<()> {
    match action {
        AgentAction::List { format, with_custom } => list_agents(OutputFormat::resolve(format), with_custom, config),
        AgentAction::Show {
            name,
            format,
            with_custom,
        } => show_agent(&name, OutputFormat::resolve(format), with_custom, config),
        AgentAction::Prompt { name, with_custom } => show_prompt(&name, with_custom, config),
        AgentAction::Tools {
            name,
            format,
            with_custom,
        } => list_tools(&name, OutputFormat::resolve(format), with_custom, config),
    }
}

fn list_agents(format: OutputFormat, with_custom: bool, config: &Config) -> Result<()> {
    let agents = super::composed(config, with_custom)?;

    #[derive(Serialize)]
    struct AgentSummary<'a> {
        name: &'a str,
        description: &'a str,
        tools: Vec<&'a str>,
        downstream: Vec<&'a str>,
    }

    let summaries: Vec<AgentSummary> = agents
        .iter()
        .map(|a| AgentSummary {
            name: &a.name,
            description: &a.public_description,
            tools: a.tools.iter().map(|t| t.name.as_str()).collect(),
            downstream: a.downstream_names(),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&summaries)?),
        OutputFormat::Text => {
            println!("{}", "Available Agents:".bold());
            println!();

            for summary in &summaries {
                println!("  {} {}", "●".green(), summary.name.bold());
                println!("    {}", summary.description.dimmed());
                println!("    Tools: {}", summary.tools.join(", ").cyan());
                if !summary.downstream.is_empty() {
                    println!("    Transfers to: {}", summary.downstream.join(", ").magenta());
                }
                println!();
            }
        }
    }

    Ok(())
}

fn show_agent(name: &str, format: OutputFormat, with_custom: bool, config: &Config) -> Result<()> {
    let agents = super::composed(config, with_custom)?;
    let agent = super::find(&agents, name)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(agent)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(agent)?),
        OutputFormat::Text => {
            println!("{} {}", "Agent:".bold(), agent.name.green().bold());
            println!();
            println!("{} {}", "Description:".bold(), agent.public_description);

            println!();
            println!("{}", "Tools:".bold());
            for tool in &agent.tools {
                println!("  {} {}", "•".cyan(), tool.name.bold());
            }

            if !agent.downstream_agents.is_empty() {
                println!();
                println!("{}", "Downstream Agents:".bold());
                for peer in &agent.downstream_agents {
                    println!("  {} {}", "→".blue(), peer.name.magenta());
                }
            }

            let lines = agent.instructions.lines().count();
            println!();
            println!(
                "{} {} lines (see {})",
                "Instructions:".bold(),
                lines,
                format!("retail-agents agents prompt {}", agent.name).cyan()
            );
        }
    }

    Ok(())
}

fn show_prompt(name: &str, with_custom: bool, config: &Config) -> Result<()> {
    let agents = super::composed(config, with_custom)?;
    let agent = super::find(&agents, name)?;

    println!("{}", agent.instructions);

    Ok(())
}

fn list_tools(name: &str, format: OutputFormat, with_custom: bool, config: &Config) -> Result<()> {
    let agents = super::composed(config, with_custom)?;
    let agent = super::find(&agents, name)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&agent.tools)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&agent.tools)?),
        OutputFormat::Text => {
            println!("{} {}", "Tools for".bold(), agent.name.green().bold());
            println!();

            for tool in &agent.tools {
                let marker = if tool.name == config.transfer.tool_name { "⇄".magenta() } else { "•".cyan() };
                println!("  {} {}", marker, tool.name.bold());

                // Transfer descriptions carry the full peer list; first line is enough here
                let desc = tool.description.lines().next().unwrap_or_default();
                let short_desc = if desc.chars().count() > 90 {
                    format!("{}...", desc.chars().take(87).collect::<String>())
                } else {
                    desc.to_string()
                };
                println!("    {}", short_desc.dimmed());

                let required = tool.required_params();
                if !required.is_empty() {
                    println!("    Required: {}", required.join(", "));
                }
                if let Some(targets) = tool.enum_values(retail_agents::agent::DESTINATION_PARAM) {
                    println!("    Targets: {}", targets.join(", ").magenta());
                }
                println!();
            }
        }
    }

    Ok(())
}
