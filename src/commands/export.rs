//! Export the composed agent set for the host runtime

use colored::*;
use eyre::{Context, Result};
use std::fs;
use std::path::PathBuf;

use retail_agents::config::Config;
use retail_agents::persona::SCENARIO;

use crate::cli::ExportFormat;

pub fn run(format: ExportFormat, output: Option<PathBuf>, with_custom: bool, config: &Config) -> Result<()> {
    let agents = super::composed(config, with_custom)?;

    let rendered = match format {
        ExportFormat::Json => serde_json::to_string_pretty(&agents).context("Failed to serialize agents as JSON")?,
        ExportFormat::Yaml => serde_yaml::to_string(&agents).context("Failed to serialize agents as YAML")?,
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
            fs::write(&path, &rendered).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Exported {} agent(s) to {}", agents.len(), path.display());
            eprintln!(
                "{} Exported {} {} agent(s) to {}",
                "✓".green(),
                agents.len(),
                SCENARIO,
                path.display()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
