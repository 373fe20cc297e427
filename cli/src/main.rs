// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

//! # ECT Data Layer CLI
//!
//! The `ect` binary is the operator surface of the ECT Line-of-Duty data
//! layer: configuration, database schema, application warm-up and case
//! status lookups against the workflow service.
//!
//! ## Commands
//!
//! - `ect config show|validate|generate` - Configuration management
//! - `ect schema list|ddl|apply` - Mapped tables and their DDL
//! - `ect warmup run|logs` - Application warm-up
//! - `ect workstatus history` - Case status history
//!
//! A `.env` file in the working directory is loaded before arguments are
//! parsed, so every `ECT_*` variable can live there.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use ect_cli::commands::{self, ConfigCommand, SchemaCommand, WarmupCommand, WorkstatusCommand};
use ect_cli::telemetry;
use ect_core::config::EctConfig;

/// ECT data layer - entity storage and workflow service client
#[derive(Parser)]
#[command(name = "ect")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(
        short,
        long,
        global = true,
        env = "ECT_CONFIG_PATH",
        value_name = "FILE"
    )]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); defaults to the configured level
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration management
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Database schema
    #[command(name = "schema")]
    Schema {
        #[command(subcommand)]
        command: SchemaCommand,
    },

    /// Application warm-up
    #[command(name = "warmup")]
    Warmup {
        #[command(subcommand)]
        command: WarmupCommand,
    },

    /// Case work status
    #[command(name = "workstatus")]
    Workstatus {
        #[command(subcommand)]
        command: WorkstatusCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // The configuration is loaded once, before the real subscriber exists,
    // so its discovery and override messages go to a plain stderr logger.
    let bootstrap_level = cli.log_level.clone().unwrap_or_else(|| "info".to_string());
    let loaded = tracing::subscriber::with_default(telemetry::bootstrap_subscriber(&bootstrap_level), || {
        EctConfig::load_or_default(cli.config.clone())
    });

    // A broken file falls back to default logging here and is reported by
    // the command that needs it.
    let observability = loaded
        .as_ref()
        .map(|config| config.spec.observability.clone())
        .unwrap_or_default();
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| observability.logging.level.clone());
    let _telemetry = telemetry::init(&level, &observability)?;
    debug!(level = %level, "Logging initialized");

    match cli.command {
        Some(Commands::Config { command }) => {
            commands::config::handle_command(command, cli.config, loaded).await
        }
        Some(Commands::Schema { command }) => {
            let config = loaded.context("Failed to load configuration")?;
            commands::schema::handle_command(command, &config).await
        }
        Some(Commands::Warmup { command }) => {
            let config = loaded.context("Failed to load configuration")?;
            commands::warmup::handle_command(command, &config).await
        }
        Some(Commands::Workstatus { command }) => {
            let config = loaded.context("Failed to load configuration")?;
            commands::workstatus::handle_command(command, &config).await
        }
        None => {
            // No command provided - show help
            eprintln!("{}", "No command specified. Use --help for usage.".yellow());
            std::process::exit(1);
        }
    }
}
