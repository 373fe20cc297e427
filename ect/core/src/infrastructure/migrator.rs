// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! # Schema Migrator
//!
//! Renders and applies the DDL for a set of entity configurations. Output is
//! ordered (schemas, then tables in registry order, then indexes) and every
//! statement is idempotent, so applying twice is a no-op.

use std::collections::BTreeSet;

use crate::domain::entities;
use crate::domain::repository::RepositoryError;
use crate::domain::schema::EntityConfig;
use crate::infrastructure::db::Database;
use crate::infrastructure::ddl::{Ddl, Dialect};

pub struct SchemaMigrator {
    entities: Vec<&'static EntityConfig>,
}

impl SchemaMigrator {
    /// Migrator over every registered entity.
    pub fn new() -> Self {
        Self::with_entities(entities::registry())
    }

    pub fn with_entities(entities: Vec<&'static EntityConfig>) -> Self {
        Self { entities }
    }

    pub fn entities(&self) -> &[&'static EntityConfig] {
        &self.entities
    }

    /// Validate every configuration, then render the full script.
    pub fn statements(&self, dialect: Dialect) -> Result<Vec<String>, RepositoryError> {
        for config in &self.entities {
            config.validate()?;
        }

        let ddl = Ddl::new(dialect);
        let schemas: BTreeSet<&str> = self.entities.iter().map(|c| c.schema).collect();

        let mut statements: Vec<String> = schemas
            .into_iter()
            .filter_map(|schema| ddl.create_schema(schema))
            .collect();
        statements.extend(self.entities.iter().map(|c| ddl.create_table(c)));
        statements.extend(self.entities.iter().flat_map(|c| ddl.create_indexes(c)));

        Ok(statements)
    }

    /// Apply the script in one transaction.
    pub async fn apply(&self, db: &Database) -> Result<usize, RepositoryError> {
        let statements = self.statements(db.dialect())?;

        let mut tx = db.get_pool().begin().await?;
        for statement in &statements {
            tracing::debug!(statement = %statement, "Applying DDL");
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        tx.commit().await?;

        tracing::info!(
            tables = self.entities.len(),
            statements = statements.len(),
            "Schema applied"
        );
        Ok(statements.len())
    }
}

impl Default for SchemaMigrator {
    fn default() -> Self {
        Self::new()
    }
}
