// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! # Repository Implementations
//!
//! Concrete persistence over the mapped entities.
//!
//! # Available Implementations
//!
//! - **EntityStore** - Keyed CRUD for any [`KeyedEntity`], SQL rendered from its configuration
//! - **StagingTable** - Bulk insert, query and clear for keyless import tables
//! - **SqlWarmupRepository** - `WarmupRepository` over `EntityStore`
//! - **InMemoryWarmupRepository** - Lock-protected map storage for tests and dry runs
//!
//! # Usage
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use ect_core::entities::{ApplicationWarmupProcess, KeyedEntity};
//! use ect_core::infrastructure::db::Database;
//! use ect_core::infrastructure::repositories::EntityStore;
//!
//! let db = Database::connect("sqlite::memory:", 1).await?;
//! let store = EntityStore::new(db);
//! let id = store.insert(&ApplicationWarmupProcess::new("cache-users", None, true)).await?;
//! let found: Option<ApplicationWarmupProcess> = store.find_by_id(id).await?;
//! # Ok(())
//! # }
//! ```

pub mod staging;
pub mod warmup;

pub use staging::StagingTable;
pub use warmup::{InMemoryWarmupRepository, SqlWarmupRepository};

use sqlx::any::{Any, AnyArguments, AnyRow};
use sqlx::query::Query;
use sqlx::Row;

use crate::domain::entities::{Entity, KeyedEntity, SqlValue};
use crate::domain::repository::RepositoryError;
use crate::infrastructure::db::Database;
use crate::infrastructure::ddl::Dml;

pub(crate) type AnyQuery<'q> = Query<'q, Any, AnyArguments<'q>>;

pub(crate) fn bind_value(query: AnyQuery<'_>, value: SqlValue) -> AnyQuery<'_> {
    match value {
        SqlValue::Text(text) => query.bind(text),
        SqlValue::BigInt(number) => query.bind(number),
    }
}

pub(crate) fn map_rows<T: Entity>(rows: Vec<AnyRow>) -> Result<Vec<T>, RepositoryError> {
    rows.iter()
        .map(|row| T::from_row(row).map_err(RepositoryError::from))
        .collect()
}

/// Metadata-driven keyed CRUD.
#[derive(Clone)]
pub struct EntityStore {
    db: Database,
}

impl EntityStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn dml(&self) -> Dml {
        Dml::new(self.db.dialect())
    }

    fn identity<T: KeyedEntity>() -> Result<&'static str, RepositoryError> {
        let config = T::config();
        config.identity_column().ok_or_else(|| {
            RepositoryError::Database(format!("{} has no identity column", config.table))
        })
    }

    /// Insert a row and return its generated id. Any id already set is ignored.
    pub async fn insert<T: KeyedEntity>(&self, entity: &T) -> Result<i64, RepositoryError> {
        let config = T::config();
        let identity = Self::identity::<T>()?;
        let sql = self.dml().insert(config, 1);

        let query = entity
            .values()
            .into_iter()
            .fold(sqlx::query(&sql), bind_value);
        let row = query.fetch_one(self.db.get_pool()).await?;
        let id: i64 = row.try_get(identity)?;

        tracing::debug!(table = config.table, id, "Inserted row");
        Ok(id)
    }

    pub async fn find_by_id<T: KeyedEntity>(&self, id: i64) -> Result<Option<T>, RepositoryError> {
        let identity = Self::identity::<T>()?;
        let mut found = self.find_where::<T>(identity, SqlValue::BigInt(Some(id))).await?;
        Ok(found.pop())
    }

    /// Every row, ordered by id.
    pub async fn list<T: KeyedEntity>(&self) -> Result<Vec<T>, RepositoryError> {
        let sql = self.dml().select_all(T::config());
        let rows = sqlx::query(&sql).fetch_all(self.db.get_pool()).await?;
        map_rows(rows)
    }

    /// Rows whose `column` equals `value`.
    pub async fn find_where<T: Entity>(
        &self,
        column: &str,
        value: SqlValue,
    ) -> Result<Vec<T>, RepositoryError> {
        let sql = self.dml().select_where(T::config(), column);
        let rows = bind_value(sqlx::query(&sql), value)
            .fetch_all(self.db.get_pool())
            .await?;
        map_rows(rows)
    }

    /// Up to `limit` rows whose `column` equals `value`, newest id first.
    pub async fn find_latest_where<T: KeyedEntity>(
        &self,
        column: &str,
        value: SqlValue,
        limit: usize,
    ) -> Result<Vec<T>, RepositoryError> {
        let identity = Self::identity::<T>()?;
        let sql = self.dml().select_latest_where(T::config(), column, identity, limit);
        let rows = bind_value(sqlx::query(&sql), value)
            .fetch_all(self.db.get_pool())
            .await?;
        map_rows(rows)
    }

    /// Delete by id; dependent rows go with it through cascading keys.
    /// Returns false when no row matched.
    pub async fn delete<T: KeyedEntity>(&self, id: i64) -> Result<bool, RepositoryError> {
        let config = T::config();
        let identity = Self::identity::<T>()?;
        let sql = self.dml().delete_where(config, identity);
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(self.db.get_pool())
            .await?;

        tracing::debug!(table = config.table, id, deleted = result.rows_affected(), "Deleted row");
        Ok(result.rows_affected() > 0)
    }
}
