// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::EntityStore;
use crate::domain::entities::{
    ApplicationWarmupProcess, ApplicationWarmupProcessLog, Entity, KeyedEntity, SqlValue,
};
use crate::domain::repository::{RepositoryError, WarmupRepository};

/// `WarmupRepository` backed by the SQL entity store.
#[derive(Clone)]
pub struct SqlWarmupRepository {
    store: EntityStore,
}

impl SqlWarmupRepository {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WarmupRepository for SqlWarmupRepository {
    async fn find_process_by_name(
        &self,
        name: &str,
    ) -> Result<Option<ApplicationWarmupProcess>, RepositoryError> {
        let mut found = self
            .store
            .find_where::<ApplicationWarmupProcess>("Name", SqlValue::Text(Some(name.to_string())))
            .await?;
        Ok(found.pop())
    }

    async fn save_process(&self, process: &ApplicationWarmupProcess) -> Result<i64, RepositoryError> {
        self.store.insert(process).await
    }

    async fn list_processes(
        &self,
        active_only: bool,
    ) -> Result<Vec<ApplicationWarmupProcess>, RepositoryError> {
        let processes = self.store.list::<ApplicationWarmupProcess>().await?;
        Ok(processes
            .into_iter()
            .filter(|p| p.active || !active_only)
            .collect())
    }

    async fn append_log(&self, log: &ApplicationWarmupProcessLog) -> Result<i64, RepositoryError> {
        self.store.insert(log).await
    }

    async fn logs_for_process(
        &self,
        process_id: i64,
        limit: usize,
    ) -> Result<Vec<ApplicationWarmupProcessLog>, RepositoryError> {
        self.store
            .find_latest_where::<ApplicationWarmupProcessLog>(
                "ProcessId",
                SqlValue::BigInt(Some(process_id)),
                limit,
            )
            .await
    }

    async fn delete_process(&self, process_id: i64) -> Result<bool, RepositoryError> {
        self.store.delete::<ApplicationWarmupProcess>(process_id).await
    }
}

#[derive(Default)]
struct WarmupState {
    processes: BTreeMap<i64, ApplicationWarmupProcess>,
    logs: BTreeMap<i64, ApplicationWarmupProcessLog>,
    next_process_id: i64,
    next_log_id: i64,
}

/// In-memory `WarmupRepository` with the same uniqueness and cascade rules
/// as the SQL tables.
#[derive(Clone, Default)]
pub struct InMemoryWarmupRepository {
    state: Arc<RwLock<WarmupState>>,
}

impl InMemoryWarmupRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WarmupRepository for InMemoryWarmupRepository {
    async fn find_process_by_name(
        &self,
        name: &str,
    ) -> Result<Option<ApplicationWarmupProcess>, RepositoryError> {
        let state = self.state.read();
        Ok(state.processes.values().find(|p| p.name == name).cloned())
    }

    async fn save_process(&self, process: &ApplicationWarmupProcess) -> Result<i64, RepositoryError> {
        let mut state = self.state.write();
        if state.processes.values().any(|p| p.name == process.name) {
            return Err(RepositoryError::Database(format!(
                "unique index IX_ApplicationWarmupProcess_Name violated by '{}'",
                process.name
            )));
        }
        state.next_process_id += 1;
        let id = state.next_process_id;
        state.processes.insert(id, process.clone().with_id(id));
        Ok(id)
    }

    async fn list_processes(
        &self,
        active_only: bool,
    ) -> Result<Vec<ApplicationWarmupProcess>, RepositoryError> {
        let state = self.state.read();
        Ok(state
            .processes
            .values()
            .filter(|p| p.active || !active_only)
            .cloned()
            .collect())
    }

    async fn append_log(&self, log: &ApplicationWarmupProcessLog) -> Result<i64, RepositoryError> {
        let mut state = self.state.write();
        if !state.processes.contains_key(&log.process_id) {
            return Err(RepositoryError::Database(format!(
                "{} references missing process {}",
                ApplicationWarmupProcessLog::config().table,
                log.process_id
            )));
        }
        state.next_log_id += 1;
        let id = state.next_log_id;
        state.logs.insert(id, log.clone().with_id(id));
        Ok(id)
    }

    async fn logs_for_process(
        &self,
        process_id: i64,
        limit: usize,
    ) -> Result<Vec<ApplicationWarmupProcessLog>, RepositoryError> {
        let state = self.state.read();
        Ok(state
            .logs
            .values()
            .rev()
            .filter(|l| l.process_id == process_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn delete_process(&self, process_id: i64) -> Result<bool, RepositoryError> {
        let mut state = self.state.write();
        if state.processes.remove(&process_id).is_none() {
            return Ok(false);
        }
        state.logs.retain(|_, l| l.process_id != process_id);
        Ok(true)
    }
}
