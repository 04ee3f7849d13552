//! Agent set validation

use colored::*;
use eyre::Result;
use serde::Serialize;

use retail_agents::agent::{Finding, Severity, validate};
use retail_agents::config::Config;

use crate::cli::OutputFormat;

#[derive(Serialize)]
struct Report {
    agents: usize,
    errors: usize,
    warnings: usize,
    findings: Vec<Finding>,
}

pub fn run(with_custom: bool, format: OutputFormat, config: &Config) -> Result<()> {
    // Validate the composed set; if composition fails, check the raw personas and keep the compose error
    let personas = super::personas(config, with_custom)?;
    let (agents, findings) = match retail_agents::persona::compose(personas.clone(), &config.transfer) {
        Ok(agents) => {
            let findings = validate(&agents, &config.transfer.tool_name);
            (agents, findings)
        }
        Err(e) => {
            log::warn!("Composition failed, validating raw personas: {}", e);
            let mut findings = validate(&personas, &config.transfer.tool_name);
            if !findings.iter().any(|f| f.severity == Severity::Error) {
                findings.push(Finding::from(&e));
            }
            (personas, findings)
        }
    };

    let errors = findings.iter().filter(|f| f.severity == Severity::Error).count();
    let report = Report {
        agents: agents.len(),
        errors,
        warnings: findings.len() - errors,
        findings,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&report)?),
        OutputFormat::Text => print_report(&report),
    }

    if report.errors > 0 {
        eyre::bail!("{} validation error(s)", report.errors);
    }

    Ok(())
}

fn print_report(report: &Report) {
    for finding in &report.findings {
        let marker = match finding.severity {
            Severity::Error => "✗".red(),
            Severity::Warning => "!".yellow(),
        };
        println!("  {} {} {}", marker, finding.agent.bold(), finding.message);
    }

    if report.findings.is_empty() {
        println!("{} {} agent(s), no problems found", "✓".green(), report.agents);
    } else {
        println!();
        println!(
            "{} agent(s): {} error(s), {} warning(s)",
            report.agents, report.errors, report.warnings
        );
    }
}
