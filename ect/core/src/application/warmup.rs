// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

//! Application Warm-up Use Case
//!
//! Runs the cache warm-up processes hosted by the workflow service and keeps a
//! local record of every execution.
//!
//! # DDD Pattern: Application Service
//!
//! - **Layer:** Application
//! - **Responsibility:** Orchestrate remote warm-up execution and local logging
//! - **Collaborators:**
//!   - Infrastructure: `ApplicationWarmupApi` (workflow service)
//!   - Domain: `WarmupRepository` (ApplicationWarmupProcess / ApplicationWarmupProcessLog)
//!
//! # Flow
//!
//! 1. Stream the remote warm-up processes
//! 2. Ensure each has a local `ApplicationWarmupProcess` row, keyed by name
//! 3. Execute it remotely
//! 4. Append an `ApplicationWarmupProcessLog` row with the outcome; an RPC
//!    failure is logged as `Failed` and the run moves on to the next process
//! 5. Return a `WarmupReport`
//!
//! # Error Handling
//!
//! Listing the remote processes and local persistence are fatal and returned
//! as `anyhow::Error` with context. Individual execution failures are not.

use anyhow::{Context, Result};
use chrono::Utc;
use futures::TryStreamExt;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::domain::entities::{ApplicationWarmupProcess, ApplicationWarmupProcessLog, WarmupOutcome};
use crate::domain::repository::WarmupRepository;
use crate::infrastructure::workflow_client::api::ApplicationWarmupApi;
use crate::infrastructure::workflow_client::proto::{
    ExecuteWarmupProcessRequest, GetWarmupProcessesRequest, WarmupProcess,
};

#[derive(Debug, Clone, Serialize)]
pub struct WarmupReportEntry {
    pub name: String,
    pub process_id: i64,
    pub remote_process_id: i64,
    pub outcome: WarmupOutcome,
    pub message: Option<String>,
    pub duration_ms: i64,
}

/// Summary of one warm-up run
#[derive(Debug, Clone, Default, Serialize)]
pub struct WarmupReport {
    pub executed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub entries: Vec<WarmupReportEntry>,
}

pub struct ApplicationWarmupService {
    api: Arc<dyn ApplicationWarmupApi>,
    repository: Arc<dyn WarmupRepository>,
}

impl ApplicationWarmupService {
    pub fn new(api: Arc<dyn ApplicationWarmupApi>, repository: Arc<dyn WarmupRepository>) -> Self {
        Self { api, repository }
    }

    /// Execute every remote warm-up process (only active ones when
    /// `active_only`) and record the outcomes.
    pub async fn run(&self, active_only: bool) -> Result<WarmupReport> {
        let processes: Vec<WarmupProcess> = self
            .api
            .get_warmup_processes(GetWarmupProcessesRequest { active_only })
            .try_collect()
            .await
            .context("Failed to list warm-up processes from the workflow service")?;

        info!(count = processes.len(), active_only, "Starting application warm-up");

        let mut report = WarmupReport::default();
        for remote in processes.into_iter().filter(|p| p.active || !active_only) {
            let entry = self.execute(&remote).await?;
            report.executed += 1;
            match entry.outcome {
                WarmupOutcome::Succeeded => report.succeeded += 1,
                WarmupOutcome::Failed => report.failed += 1,
            }
            report.entries.push(entry);
        }

        info!(
            executed = report.executed,
            succeeded = report.succeeded,
            failed = report.failed,
            "Application warm-up finished"
        );
        Ok(report)
    }

    async fn execute(&self, remote: &WarmupProcess) -> Result<WarmupReportEntry> {
        let process_id = self.ensure_registered(remote).await?;
        let timer = Instant::now();

        let (outcome, message, duration_ms) = match self
            .api
            .execute_warmup_process(ExecuteWarmupProcessRequest {
                process_id: remote.process_id,
            })
            .await
        {
            Ok(execution) => {
                let outcome = if execution.succeeded {
                    WarmupOutcome::Succeeded
                } else {
                    WarmupOutcome::Failed
                };
                (outcome, non_empty(execution.message), execution.duration_ms)
            }
            Err(status) => {
                warn!(
                    process = %remote.name,
                    code = ?status.code(),
                    "Warm-up process failed: {}",
                    status.message()
                );
                (
                    WarmupOutcome::Failed,
                    Some(format!("{:?}: {}", status.code(), status.message())),
                    timer.elapsed().as_millis() as i64,
                )
            }
        };

        let log = ApplicationWarmupProcessLog {
            id: None,
            process_id,
            execution_date: Utc::now(),
            outcome,
            message: message.clone(),
            duration_ms: Some(duration_ms),
            remote_process_id: Some(remote.process_id),
        };
        self.repository
            .append_log(&log)
            .await
            .with_context(|| format!("Failed to record warm-up log for '{}'", remote.name))?;

        Ok(WarmupReportEntry {
            name: remote.name.clone(),
            process_id,
            remote_process_id: remote.process_id,
            outcome,
            message,
            duration_ms,
        })
    }

    /// Local id of the process with the remote process's name, registering it
    /// on first sight.
    async fn ensure_registered(&self, remote: &WarmupProcess) -> Result<i64> {
        if let Some(existing) = self
            .repository
            .find_process_by_name(&remote.name)
            .await
            .context("Failed to look up warm-up process")?
        {
            return existing
                .id
                .with_context(|| format!("Stored warm-up process '{}' has no id", remote.name));
        }

        let process = ApplicationWarmupProcess::new(
            remote.name.clone(),
            non_empty(remote.description.clone()),
            remote.active,
        );
        let id = self
            .repository
            .save_process(&process)
            .await
            .with_context(|| format!("Failed to register warm-up process '{}'", remote.name))?;
        info!(process = %remote.name, id, "Registered warm-up process");
        Ok(id)
    }

    /// Most recent log rows for a process, newest first.
    pub async fn recent_logs(&self, name: &str, limit: usize) -> Result<Vec<ApplicationWarmupProcessLog>> {
        let process = self
            .repository
            .find_process_by_name(name)
            .await?
            .with_context(|| format!("Unknown warm-up process '{}'", name))?;
        let id = process
            .id
            .with_context(|| format!("Stored warm-up process '{}' has no id", name))?;

        Ok(self.repository.logs_for_process(id, limit).await?)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
