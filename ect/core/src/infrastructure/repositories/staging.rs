// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Keyless staging table access.
//!
//! Import tables have no key, so rows are only ever handled as a set: loaded
//! in bulk, read back, counted and cleared.

use std::marker::PhantomData;

use sqlx::Row;

use super::{bind_value, map_rows};
use crate::domain::entities::Entity;
use crate::domain::repository::RepositoryError;
use crate::infrastructure::db::Database;
use crate::infrastructure::ddl::Dml;

/// Bind parameters per statement; the lowest limit among supported SQLite builds.
const MAX_BIND_PARAMETERS: usize = 999;

/// Upper bound on rows per INSERT regardless of width.
const MAX_ROWS_PER_STATEMENT: usize = 500;

pub struct StagingTable<T> {
    db: Database,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for StagingTable<T> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Entity> StagingTable<T> {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            _marker: PhantomData,
        }
    }

    fn dml(&self) -> Dml {
        Dml::new(self.db.dialect())
    }

    /// Rows per multi-row INSERT for this table's width.
    pub fn rows_per_statement() -> usize {
        let width = T::config().insertable_columns().len().max(1);
        (MAX_BIND_PARAMETERS / width).clamp(1, MAX_ROWS_PER_STATEMENT)
    }

    /// Insert every row in one transaction, chunked into multi-row
    /// statements. Either all rows land or none do.
    pub async fn bulk_insert(&self, rows: &[T]) -> Result<u64, RepositoryError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let config = T::config();
        let chunk_size = Self::rows_per_statement();
        let mut inserted = 0;

        let mut tx = self.db.get_pool().begin().await?;
        for chunk in rows.chunks(chunk_size) {
            let sql = self.dml().insert(config, chunk.len());
            let query = chunk
                .iter()
                .flat_map(|row| row.values())
                .fold(sqlx::query(&sql), bind_value);
            inserted += query.execute(&mut *tx).await?.rows_affected();
        }
        tx.commit().await?;

        tracing::info!(table = config.table, rows = inserted, "Bulk insert complete");
        Ok(inserted)
    }

    pub async fn fetch_all(&self) -> Result<Vec<T>, RepositoryError> {
        let sql = self.dml().select_all(T::config());
        let rows = sqlx::query(&sql).fetch_all(self.db.get_pool()).await?;
        map_rows(rows)
    }

    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let sql = self.dml().count(T::config());
        let row = sqlx::query(&sql).fetch_one(self.db.get_pool()).await?;
        Ok(row.try_get("Total")?)
    }

    /// Remove every row; returns how many were deleted.
    pub async fn clear(&self) -> Result<u64, RepositoryError> {
        let config = T::config();
        let sql = self.dml().delete_all(config);
        let result = sqlx::query(&sql).execute(self.db.get_pool()).await?;
        tracing::info!(table = config.table, rows = result.rows_affected(), "Staging table cleared");
        Ok(result.rows_affected())
    }
}
