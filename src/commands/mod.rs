pub mod agent;
pub mod completions;
pub mod config;
pub mod export;
pub mod graph;
pub mod validate;

use eyre::{Context, Result};

use retail_agents::agent::AgentDescriptor;
use retail_agents::agent::loader::AgentLoader;
use retail_agents::config::Config;
use retail_agents::persona;

/// Built-in personas, plus persona files when `with_custom` is set
pub fn personas(config: &Config, with_custom: bool) -> Result<Vec<AgentDescriptor>> {
    let mut personas = persona::builtin();
    if with_custom {
        let loader = AgentLoader::new(config.agents_dir());
        personas.extend(loader.load_all()?);
    }
    Ok(personas)
}

/// Composed agent set, transfer tools injected
pub fn composed(config: &Config, with_custom: bool) -> Result<Vec<AgentDescriptor>> {
    let personas = personas(config, with_custom)?;
    persona::compose(personas, &config.transfer).context("Failed to compose agent graph")
}

/// Find one composed agent by name
pub fn find<'a>(agents: &'a [AgentDescriptor], name: &str) -> Result<&'a AgentDescriptor> {
    agents.iter().find(|a| a.name == name).ok_or_else(|| {
        let known: Vec<&str> = agents.iter().map(|a| a.name.as_str()).collect();
        eyre::eyre!("Agent '{}' not found (known: {})", name, known.join(", "))
    })
}
