// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! # Domain Repository Interfaces
//!
//! Persistence contracts used by the application layer, defined here and
//! implemented in `crate::infrastructure::repositories`.
//!
//! | Trait | Records | Implementations |
//! |-------|---------|----------------|
//! | `WarmupRepository` | `ApplicationWarmupProcess`, `ApplicationWarmupProcessLog` | `InMemoryWarmupRepository`, `SqlWarmupRepository` |
//!
//! Generic keyed CRUD and keyless bulk access over any mapped entity are
//! provided directly by `EntityStore` and `StagingTable`.

use async_trait::async_trait;

use crate::domain::entities::{ApplicationWarmupProcess, ApplicationWarmupProcessLog};
use crate::domain::schema::SchemaError;

/// Storage for warm-up processes and their execution log.
#[async_trait]
pub trait WarmupRepository: Send + Sync {
    /// Find a process by its unique name
    async fn find_process_by_name(
        &self,
        name: &str,
    ) -> Result<Option<ApplicationWarmupProcess>, RepositoryError>;

    /// Insert a new process and return its generated id
    async fn save_process(&self, process: &ApplicationWarmupProcess) -> Result<i64, RepositoryError>;

    /// List processes, optionally only the active ones
    async fn list_processes(
        &self,
        active_only: bool,
    ) -> Result<Vec<ApplicationWarmupProcess>, RepositoryError>;

    /// Append an execution log row and return its generated id
    async fn append_log(&self, log: &ApplicationWarmupProcessLog) -> Result<i64, RepositoryError>;

    /// Log rows for a process, newest first
    async fn logs_for_process(
        &self,
        process_id: i64,
        limit: usize,
    ) -> Result<Vec<ApplicationWarmupProcessLog>, RepositoryError>;

    /// Delete a process and its log rows; returns false when it did not exist
    async fn delete_process(&self, process_id: i64) -> Result<bool, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound("Row not found".to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                RepositoryError::Serialization(err.to_string())
            }
            _ => RepositoryError::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Serialization(err.to_string())
    }
}
