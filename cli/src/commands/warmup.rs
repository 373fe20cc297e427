// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

//! Application warm-up commands
//!
//! Commands: run, logs

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::sync::Arc;

use ect_core::application::ApplicationWarmupService;
use ect_core::config::EctConfig;
use ect_core::entities::WarmupOutcome;
use ect_core::infrastructure::db::Database;
use ect_core::infrastructure::migrator::SchemaMigrator;
use ect_core::infrastructure::repositories::{EntityStore, SqlWarmupRepository};
use ect_core::infrastructure::workflow_client::{RetryPolicy, TracingAuditSink, WorkflowClient};

#[derive(Subcommand)]
pub enum WarmupCommand {
    /// Execute the service's warm-up processes and log the outcomes
    Run {
        /// Include inactive processes
        #[arg(long)]
        all: bool,
    },

    /// Show the most recent log entries for a process
    Logs {
        /// Warm-up process name
        #[arg(value_name = "PROCESS_NAME")]
        name: String,

        /// Maximum entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,
    },
}

pub async fn handle_command(command: WarmupCommand, config: &EctConfig) -> Result<()> {
    let service = build_service(config).await?;

    match command {
        WarmupCommand::Run { all } => run(&service, !all).await,
        WarmupCommand::Logs { name, limit } => logs(&service, &name, limit).await,
    }
}

async fn build_service(config: &EctConfig) -> Result<ApplicationWarmupService> {
    let db = Database::from_config(&config.spec.database).await?;
    SchemaMigrator::new()
        .apply(&db)
        .await
        .context("Failed to prepare warm-up tables")?;

    let client = WorkflowClient::connect_lazy(
        &config.spec.service,
        RetryPolicy::from(&config.spec.retry),
        Arc::new(TracingAuditSink),
    )?;

    Ok(ApplicationWarmupService::new(
        Arc::new(client.application_warmup().clone()),
        Arc::new(SqlWarmupRepository::new(EntityStore::new(db))),
    ))
}

async fn run(service: &ApplicationWarmupService, active_only: bool) -> Result<()> {
    let report = service.run(active_only).await?;

    for entry in &report.entries {
        let marker = match entry.outcome {
            WarmupOutcome::Succeeded => "✓".green(),
            WarmupOutcome::Failed => "✗".red(),
        };
        println!(
            "{} {:<40} {:>6} ms  {}",
            marker,
            entry.name,
            entry.duration_ms,
            entry.message.as_deref().unwrap_or_default().dimmed()
        );
    }

    let summary = format!(
        "{} executed, {} succeeded, {} failed",
        report.executed, report.succeeded, report.failed
    );
    if report.failed == 0 {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.yellow());
    }
    Ok(())
}

async fn logs(service: &ApplicationWarmupService, name: &str, limit: usize) -> Result<()> {
    let logs = service.recent_logs(name, limit).await?;
    if logs.is_empty() {
        println!("{}", format!("No log entries for '{}'", name).dimmed());
        return Ok(());
    }

    println!("{}", format!("Warm-up log: {}", name).bold());
    for log in logs {
        let outcome = match log.outcome {
            WarmupOutcome::Succeeded => log.outcome.as_str().green(),
            WarmupOutcome::Failed => log.outcome.as_str().red(),
        };
        println!(
            "  {}  {:<9}  {:>6} ms  {}",
            log.execution_date.format("%Y-%m-%d %H:%M:%S"),
            outcome,
            log.duration_ms.unwrap_or_default(),
            log.message.as_deref().unwrap_or_default()
        );
    }
    Ok(())
}
