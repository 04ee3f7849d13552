use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod commands;

use cli::{Cli, Commands};
use retail_agents::config::{Config, LogLevel};

fn setup_logging(log_level: LogLevel) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("retail-agents")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("retail-agents.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(log_level.to_level_filter());
    }

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!(
        "Log level: {} (from {})",
        log_level.as_filter(),
        if std::env::var("RUST_LOG").is_ok() { "RUST_LOG env" } else { "config" }
    );
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Agents { action } => commands::agent::run(action, &config),
        Commands::Export {
            format,
            output,
            with_custom,
        } => commands::export::run(format, output, with_custom, &config),
        Commands::Validate { with_custom, format } => {
            commands::validate::run(with_custom, cli::OutputFormat::resolve(format), &config)
        }
        Commands::Graph { with_custom, direction } => commands::graph::run(with_custom, &direction, &config),
        Commands::Config { action } => commands::config::run(action, &config),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration before logging, so log messages in Config::load are silent
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    let log_level = match (cli.verbose, cli.quiet) {
        (true, _) => LogLevel::Debug,
        (false, true) => LogLevel::Error,
        _ => config.log_level,
    };
    setup_logging(log_level).context("Failed to setup logging")?;

    info!("Starting retail-agents with config from: {:?}", cli.config);

    run(cli, config).context("Command failed")?;

    Ok(())
}
