// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

//! Work status commands

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use futures::TryStreamExt;
use std::sync::Arc;

use ect_core::config::EctConfig;
use ect_core::infrastructure::workflow_client::proto::RefIdRequest;
use ect_core::infrastructure::workflow_client::{
    RetryPolicy, TracingAuditSink, WorkflowClient, WorkstatusApi,
};

#[derive(Subcommand)]
pub enum WorkstatusCommand {
    /// Stream the status history of a case
    History {
        /// Case reference id
        #[arg(value_name = "REF_ID")]
        ref_id: i32,

        /// Module the case belongs to
        #[arg(long, default_value_t = 2)]
        module_id: i32,

        /// Print entries as JSON lines
        #[arg(long)]
        json: bool,
    },
}

pub async fn handle_command(command: WorkstatusCommand, config: &EctConfig) -> Result<()> {
    let client = WorkflowClient::connect(
        &config.spec.service,
        RetryPolicy::from(&config.spec.retry),
        Arc::new(TracingAuditSink),
    )
    .await?;

    match command {
        WorkstatusCommand::History { ref_id, module_id, json } => {
            history(&client, ref_id, module_id, json).await
        }
    }
}

async fn history(client: &WorkflowClient, ref_id: i32, module_id: i32, json: bool) -> Result<()> {
    let mut entries = client
        .workstatus()
        .get_workstatus_history(RefIdRequest { ref_id, module_id });

    if !json {
        println!("{}", format!("Status history for case {}", ref_id).bold());
    }

    let mut count = 0usize;
    while let Some(entry) = entries
        .try_next()
        .await
        .with_context(|| format!("Failed to read status history for case {}", ref_id))?
    {
        count += 1;
        if json {
            println!("{}", serde_json::to_string(&entry)?);
        } else {
            println!(
                "  {:<25} {:<40} {:<20} {:>4} days",
                entry.changed_date,
                entry.status_description,
                entry.changed_by.dimmed(),
                entry.days_in_status
            );
        }
    }

    if count == 0 && !json {
        println!("{}", "  (no history)".dimmed());
    }
    Ok(())
}
