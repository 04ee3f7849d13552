use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Resolve the effective output format.
    /// If user specified a format, use it.
    /// Otherwise: TTY → Text, non-TTY (pipe) → Json
    pub fn resolve(user_choice: Option<OutputFormat>) -> OutputFormat {
        match user_choice {
            Some(fmt) => fmt,
            None => {
                if std::io::stdout().is_terminal() {
                    OutputFormat::Text
                } else {
                    OutputFormat::Json
                }
            }
        }
    }
}

/// Serialization format for the exported agent set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Parser)]
#[command(
    name = "retail-agents",
    about = "Customer-service-retail agent personas and transfer wiring for a realtime model host",
    version = env!("GIT_DESCRIBE"),
    after_help = "Logs are written to: ~/.local/share/retail-agents/logs/retail-agents.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to retail-agents.yaml config file")]
    pub config: Option<PathBuf>,

    /// Log debug detail to the log file
    #[arg(short, long, global = true, help = "Log debug detail to the log file")]
    pub verbose: bool,

    /// Only log errors to the log file
    #[arg(short, long, global = true, help = "Only log errors to the log file (stdout is unaffected)")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect composed agents
    Agents {
        #[command(subcommand)]
        action: AgentAction,
    },

    /// Write the composed agent set for the host runtime
    Export {
        /// Serialization format
        #[arg(long, short = 'o', value_enum, default_value = "json")]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Include persona files from the agents directory
        #[arg(long)]
        with_custom: bool,
    },

    /// Check the agent set for naming and wiring problems
    Validate {
        /// Include persona files from the agents directory
        #[arg(long)]
        with_custom: bool,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the transfer graph as a Mermaid flowchart
    Graph {
        /// Include persona files from the agents directory
        #[arg(long)]
        with_custom: bool,

        /// Flowchart direction (LR, TD, ...)
        #[arg(long, default_value = "LR")]
        direction: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum AgentAction {
    /// List agents with their transfer targets
    List {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,

        /// Include persona files from the agents directory
        #[arg(long)]
        with_custom: bool,
    },

    /// Show one agent in full
    Show {
        /// Agent name
        name: String,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,

        /// Include persona files from the agents directory
        #[arg(long)]
        with_custom: bool,
    },

    /// Print an agent's instructions verbatim
    Prompt {
        /// Agent name
        name: String,

        /// Include persona files from the agents directory
        #[arg(long)]
        with_custom: bool,
    },

    /// List an agent's tool schemas, including the transfer tool
    Tools {
        /// Agent name
        name: String,

        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,

        /// Include persona files from the agents directory
        #[arg(long)]
        with_custom: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (default: text for TTY, json for pipes)
        #[arg(long, short = 'o', value_enum)]
        format: Option<OutputFormat>,
    },

    /// Get a configuration value
    Get {
        /// Configuration key (dot notation)
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::parse_from(["retail-agents", "export", "-o", "yaml", "--with-custom"]);
        match cli.command {
            Commands::Export {
                format,
                output,
                with_custom,
            } => {
                assert_eq!(format, ExportFormat::Yaml);
                assert!(output.is_none());
                assert!(with_custom);
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_parse_agents_show_with_global_config() {
        let cli = Cli::parse_from(["retail-agents", "agents", "show", "sales", "-c", "/tmp/x.yaml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.yaml")));
        assert!(matches!(
            cli.command,
            Commands::Agents {
                action: AgentAction::Show { ref name, .. }
            } if name == "sales"
        ));
    }

    #[test]
    fn test_log_flags_describe_log_file() {
        let cmd = Cli::command();
        for id in ["quiet", "verbose"] {
            let help = cmd
                .get_arguments()
                .find(|a| a.get_id() == id)
                .and_then(|a| a.get_help())
                .map(|h| h.to_string())
                .unwrap();
            assert!(help.contains("log file"), "{} help: {}", id, help);
        }
    }

    #[test]
    fn test_output_format_explicit_wins() {
        assert_eq!(OutputFormat::resolve(Some(OutputFormat::Yaml)), OutputFormat::Yaml);
    }
}
