//! Mermaid rendering of the transfer graph

use eyre::Result;

use retail_agents::agent::AgentDescriptor;
use retail_agents::config::Config;

pub fn run(with_custom: bool, direction: &str, config: &Config) -> Result<()> {
    let agents = super::composed(config, with_custom)?;
    print!("{}", flowchart(&agents, direction));
    Ok(())
}

/// Mermaid node ids cannot contain most punctuation
fn node_id(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn flowchart(agents: &[AgentDescriptor], direction: &str) -> String {
    let mut out = format!("flowchart {}\n", direction);

    for agent in agents {
        out.push_str(&format!("    {}[\"{}\"]\n", node_id(&agent.name), agent.name.replace('"', "'")));
    }
    for agent in agents {
        for peer in &agent.downstream_agents {
            out.push_str(&format!("    {} --> {}\n", node_id(&agent.name), node_id(&peer.name)));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use retail_agents::persona;

    #[test]
    fn test_flowchart_has_all_edges() {
        let agents = persona::customer_service_retail().unwrap();

        let chart = flowchart(&agents, "LR");

        assert!(chart.starts_with("flowchart LR\n"));
        assert!(chart.contains("    simulatedHuman[\"simulatedHuman\"]\n"));
        assert!(chart.contains("    listener --> returns\n"));
        assert!(chart.contains("    sales --> simulatedHuman\n"));
        assert_eq!(chart.matches(" --> ").count(), 12);
    }

    #[test]
    fn test_node_id_sanitizes() {
        assert_eq!(node_id("tier-2 support"), "tier_2_support");
    }
}
