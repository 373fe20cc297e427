// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Application Warm-up Entities
//!
//! Registered warm-up processes and the log of their executions. Deleting a
//! process removes its log rows through the `ProcessId` cascade.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Keyed records used by the warm-up use case

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::any::AnyRow;
use sqlx::{FromRow, Row};
use std::fmt;
use std::str::FromStr;

use super::{decode_timestamp, encode_timestamp, Entity, KeyedEntity, SqlValue};
use crate::domain::schema::{
    ColumnDef, EntityConfig, ForeignKeyDef, IndexDef, KeyDef, DEFAULT_SCHEMA,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationWarmupProcess {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl ApplicationWarmupProcess {
    pub const CONFIG: EntityConfig = EntityConfig {
        table: "ApplicationWarmupProcess",
        schema: DEFAULT_SCHEMA,
        key: KeyDef::Identity("Id"),
        columns: &[
            ColumnDef::big_int("Id").required(),
            ColumnDef::text("Name", 100).required(),
            ColumnDef::text("Description", 500).unicode(),
            ColumnDef::big_int("Active").required(),
            ColumnDef::timestamp("CreatedAt").required(),
        ],
        indexes: &[IndexDef::non_clustered("IX_ApplicationWarmupProcess_Name", &["Name"]).unique()],
        foreign_keys: &[],
    };

    pub fn new(name: impl Into<String>, description: Option<String>, active: bool) -> Self {
        Self {
            id: None,
            name: name.into(),
            description,
            active,
            created_at: Utc::now(),
        }
    }
}

impl<'r> FromRow<'r, AnyRow> for ApplicationWarmupProcess {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: Some(row.try_get("Id")?),
            name: row.try_get("Name")?,
            description: row.try_get("Description")?,
            active: row.try_get::<i64, _>("Active")? != 0,
            created_at: decode_timestamp(&row.try_get::<String, _>("CreatedAt")?)?,
        })
    }
}

impl Entity for ApplicationWarmupProcess {
    fn config() -> &'static EntityConfig {
        &Self::CONFIG
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(Some(self.name.clone())),
            SqlValue::Text(self.description.clone()),
            SqlValue::BigInt(Some(i64::from(self.active))),
            SqlValue::Text(Some(encode_timestamp(&self.created_at))),
        ]
    }
}

impl KeyedEntity for ApplicationWarmupProcess {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

/// Result of one warm-up execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarmupOutcome {
    Succeeded,
    Failed,
}

impl WarmupOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarmupOutcome::Succeeded => "Succeeded",
            WarmupOutcome::Failed => "Failed",
        }
    }
}

impl fmt::Display for WarmupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WarmupOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Succeeded" => Ok(WarmupOutcome::Succeeded),
            "Failed" => Ok(WarmupOutcome::Failed),
            other => Err(format!("unknown warm-up outcome '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationWarmupProcessLog {
    pub id: Option<i64>,
    pub process_id: i64,
    pub execution_date: DateTime<Utc>,
    pub outcome: WarmupOutcome,
    pub message: Option<String>,
    pub duration_ms: Option<i64>,
    /// Identifier the remote service reported for the process, when it ran.
    pub remote_process_id: Option<i64>,
}

impl ApplicationWarmupProcessLog {
    pub const CONFIG: EntityConfig = EntityConfig {
        table: "ApplicationWarmupProcessLog",
        schema: DEFAULT_SCHEMA,
        key: KeyDef::Identity("Id"),
        columns: &[
            ColumnDef::big_int("Id").required(),
            ColumnDef::big_int("ProcessId").required(),
            ColumnDef::timestamp("ExecutionDate").required(),
            ColumnDef::text("Outcome", 16).required(),
            ColumnDef::text_max("Message").unicode(),
            ColumnDef::big_int("DurationMs"),
            ColumnDef::big_int("RemoteProcessId"),
        ],
        indexes: &[IndexDef::non_clustered(
            "IX_ApplicationWarmupProcessLog_ProcessId",
            &["ProcessId"],
        )],
        foreign_keys: &[ForeignKeyDef::cascade("ProcessId", "ApplicationWarmupProcess", "Id")],
    };
}

impl<'r> FromRow<'r, AnyRow> for ApplicationWarmupProcessLog {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        let outcome: String = row.try_get("Outcome")?;
        Ok(Self {
            id: Some(row.try_get("Id")?),
            process_id: row.try_get("ProcessId")?,
            execution_date: decode_timestamp(&row.try_get::<String, _>("ExecutionDate")?)?,
            outcome: outcome.parse().map_err(|e: String| sqlx::Error::ColumnDecode {
                index: "Outcome".to_string(),
                source: e.into(),
            })?,
            message: row.try_get("Message")?,
            duration_ms: row.try_get("DurationMs")?,
            remote_process_id: row.try_get("RemoteProcessId")?,
        })
    }
}

impl Entity for ApplicationWarmupProcessLog {
    fn config() -> &'static EntityConfig {
        &Self::CONFIG
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(Some(self.process_id)),
            SqlValue::Text(Some(encode_timestamp(&self.execution_date))),
            SqlValue::Text(Some(self.outcome.to_string())),
            SqlValue::Text(self.message.clone()),
            SqlValue::BigInt(self.duration_ms),
            SqlValue::BigInt(self.remote_process_id),
        ]
    }
}

impl KeyedEntity for ApplicationWarmupProcessLog {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_skip_identity() {
        let process = ApplicationWarmupProcess::new("cache-users", None, true);
        assert_eq!(
            process.values().len(),
            ApplicationWarmupProcess::config().insertable_columns().len()
        );
        assert_eq!(process.values()[2], SqlValue::BigInt(Some(1)));
        assert_eq!(process.with_id(7).id(), Some(7));
    }

    #[test]
    fn test_outcome_parsing() {
        assert_eq!("Failed".parse::<WarmupOutcome>(), Ok(WarmupOutcome::Failed));
        assert_eq!(WarmupOutcome::Succeeded.to_string(), "Succeeded");
        assert!("failed".parse::<WarmupOutcome>().is_err());
    }

    #[test]
    fn test_log_references_process() {
        let fk = &ApplicationWarmupProcessLog::config().foreign_keys[0];
        assert_eq!(fk.references_table, ApplicationWarmupProcess::config().table);
        assert!(fk.cascade_delete);
    }
}
