//! Loading extra persona descriptors from YAML files

use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::descriptor::AgentDescriptor;

/// Discovers and loads persona files from a directory
pub struct AgentLoader {
    agents_dir: PathBuf,
}

impl AgentLoader {
    pub fn new(agents_dir: PathBuf) -> Self {
        Self { agents_dir }
    }

    /// Load every `*.yaml` / `*.yml` descriptor in the directory
    ///
    /// Unreadable files are skipped with a warning. A missing directory yields
    /// an empty list.
    pub fn load_all(&self) -> Result<Vec<AgentDescriptor>> {
        let mut agents = Vec::new();

        if !self.agents_dir.exists() {
            log::debug!("Agents directory {} does not exist", self.agents_dir.display());
            return Ok(agents);
        }

        let entries = fs::read_dir(&self.agents_dir)
            .with_context(|| format!("Failed to read agents directory: {}", self.agents_dir.display()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map(|e| e == "yaml" || e == "yml").unwrap_or(false) {
                match self.load_agent(&path) {
                    Ok(agent) => agents.push(agent),
                    Err(e) => {
                        log::warn!("Failed to load agent from {}: {:#}", path.display(), e);
                    }
                }
            }
        }

        // read_dir order is platform dependent
        agents.sort_by(|a, b| a.name.cmp(&b.name));

        log::info!("Loaded {} agent(s) from {}", agents.len(), self.agents_dir.display());
        Ok(agents)
    }

    /// Load a single descriptor file
    pub fn load_agent(&self, path: &Path) -> Result<AgentDescriptor> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read agent file: {}", path.display()))?;

        let agent: AgentDescriptor = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse agent file: {}", path.display()))?;

        Ok(agent)
    }

    pub fn agents_dir(&self) -> &Path {
        &self.agents_dir
    }
}
