// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! # Connection Pool
//!
//! Wraps an `sqlx::AnyPool` in a thin `Database` handle that carries the
//! [`Dialect`] the pool speaks, so the entity store can render matching SQL.
//!
//! PostgreSQL and SQLite URLs are accepted. In-memory SQLite databases are
//! pinned to a single long-lived connection, since every new connection
//! would otherwise open an empty database.

use anyhow::{Context, Result};
use sqlx::any::AnyPoolOptions;
use sqlx::{AnyPool, Executor};

use crate::domain::config::DatabaseConfig;
use crate::infrastructure::ddl::Dialect;

#[derive(Clone)]
pub struct Database {
    pool: AnyPool,
    dialect: Dialect,
}

impl Database {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let dialect = Dialect::from_url(url)
            .with_context(|| format!("Unsupported database URL scheme: {}", redact(url)))?;
        if dialect == Dialect::SqlServer {
            anyhow::bail!("SQL Server is supported for DDL export only; use postgres:// or sqlite:");
        }

        sqlx::any::install_default_drivers();

        let mut options = AnyPoolOptions::new().max_connections(max_connections);
        if dialect == Dialect::Sqlite && url.contains(":memory:") {
            options = options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }
        if dialect == Dialect::Sqlite {
            options = options.after_connect(|conn, _meta| {
                Box::pin(async move {
                    conn.execute("PRAGMA foreign_keys = ON").await?;
                    Ok(())
                })
            });
        }

        let pool = options
            .connect(url)
            .await
            .with_context(|| format!("Failed to connect to {}", redact(url)))?;

        tracing::debug!(dialect = %dialect, "Database pool ready");
        Ok(Self { pool, dialect })
    }

    pub async fn from_config(config: &DatabaseConfig) -> Result<Self> {
        Self::connect(&config.url, config.max_connections).await
    }

    pub fn get_pool(&self) -> &AnyPool {
        &self.pool
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Strip credentials from a connection URL before logging it.
pub fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}
