// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

//! Configuration management commands
//!
//! Commands: show, validate, generate

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;

use ect_core::config::EctConfig;
use ect_core::infrastructure::db::redact;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show config file paths checked
        #[arg(long)]
        paths: bool,
    },

    /// Validate configuration file
    Validate {
        /// Path to config file (default: discover)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Generate sample configuration
    Generate {
        /// Output path
        #[arg(short, long, default_value = "./ect-config.yaml")]
        output: PathBuf,
    },
}

/// `loaded` is the configuration resolved at startup. A load failure is
/// only reported by the commands that read it.
pub async fn handle_command(
    command: ConfigCommand,
    config_override: Option<PathBuf>,
    loaded: Result<EctConfig>,
) -> Result<()> {
    match command {
        ConfigCommand::Show { paths } => {
            let config = loaded.context("Failed to load configuration")?;
            show(&config, config_override, paths).await
        }
        ConfigCommand::Validate { file: Some(file) } => {
            let config = EctConfig::load_or_default(Some(file)).context("Failed to load configuration")?;
            validate(&config).await
        }
        ConfigCommand::Validate { file: None } => {
            validate(&loaded.context("Failed to load configuration")?).await
        }
        ConfigCommand::Generate { output } => generate(output).await,
    }
}

async fn show(config: &EctConfig, config_override: Option<PathBuf>, show_paths: bool) -> Result<()> {

    if show_paths {
        println!("{}", "Configuration discovery paths:".bold());
        match &config_override {
            Some(path) => println!("  1. --config flag: {}", path.display()),
            None => println!("  1. --config flag: {}", "(not set)".dimmed()),
        }
        for (n, path) in EctConfig::search_paths().iter().enumerate() {
            let marker = if path.exists() { "✓".green() } else { "-".dimmed() };
            println!("  {}. {} {}", n + 2, path.display(), marker);
        }
        println!();
    }

    let spec = &config.spec;
    println!("{}", "Current configuration:".bold());
    println!("  Name: {}", config.metadata.name);
    println!();

    println!("{}", "Workflow Service:".bold());
    println!("  Endpoint: {}", spec.service.endpoint);
    println!("  Connect timeout: {}s", spec.service.connect_timeout_seconds);
    println!("  Call timeout: {}s", spec.service.timeout_seconds);
    println!();

    println!("{}", "Retry:".bold());
    println!("  Max retry attempts: {}", spec.retry.max_retry_attempts);
    println!(
        "  Backoff: {} ms doubling, capped at {} ms",
        spec.retry.base_delay_ms, spec.retry.max_delay_ms
    );
    println!();

    println!("{}", "Database:".bold());
    println!("  URL: {}", redact(&spec.database.url));
    println!("  Max connections: {}", spec.database.max_connections);
    println!();

    println!("{}", "Observability:".bold());
    println!(
        "  Logging: {} ({})",
        spec.observability.logging.level, spec.observability.logging.format
    );
    if spec.observability.metrics.enabled {
        println!("  Metrics: port {}", spec.observability.metrics.port);
    } else {
        println!("  Metrics: {}", "disabled".dimmed());
    }
    match (
        spec.observability.tracing.enabled,
        spec.observability.tracing.otlp_endpoint.as_deref(),
    ) {
        (true, Some(endpoint)) => println!("  OTLP logs: {}", endpoint),
        _ => println!("  OTLP logs: {}", "disabled".dimmed()),
    }

    Ok(())
}

async fn validate(config: &EctConfig) -> Result<()> {
    println!("Validating configuration...");

    config.validate().context("Configuration validation failed")?;

    println!("{}", "✓ Configuration is valid".green());

    Ok(())
}

async fn generate(output: PathBuf) -> Result<()> {
    let sample = include_str!("../../templates/config-minimal.yaml");

    // The template must stay loadable
    EctConfig::from_yaml_str(sample).context("Bundled configuration template is invalid")?;

    std::fs::write(&output, sample)
        .with_context(|| format!("Failed to write config to {:?}", output))?;

    println!(
        "{}",
        format!("✓ Configuration generated: {}", output.display()).green()
    );

    Ok(())
}
