// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Entity Schema Metadata
//!
//! Declarative description of how a record type maps onto a relational table:
//! table and schema names, key strategy, column types and lengths, indexes and
//! cascading foreign keys. The metadata is static and dialect-neutral; DDL and
//! DML rendering lives in `infrastructure::ddl`.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Table mapping model shared by every entity

use std::collections::HashSet;
use thiserror::Error;

/// Schema every mapped table lives in unless configured otherwise.
pub const DEFAULT_SCHEMA: &str = "dbo";

/// Storage type of a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Character data. `max_len: None` means unbounded.
    Text {
        max_len: Option<u32>,
        /// Fixed-width (CHAR) rather than varying (VARCHAR)
        fixed: bool,
        /// Unicode-capable (NVARCHAR) storage
        unicode: bool,
    },
    BigInt,
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub nullable: bool,
}

impl ColumnDef {
    /// Nullable varying-length, non-unicode text column.
    pub const fn text(name: &'static str, max_len: u32) -> Self {
        Self {
            name,
            column_type: ColumnType::Text {
                max_len: Some(max_len),
                fixed: false,
                unicode: false,
            },
            nullable: true,
        }
    }

    /// Nullable unbounded text column.
    pub const fn text_max(name: &'static str) -> Self {
        Self {
            name,
            column_type: ColumnType::Text {
                max_len: None,
                fixed: false,
                unicode: false,
            },
            nullable: true,
        }
    }

    pub const fn big_int(name: &'static str) -> Self {
        Self {
            name,
            column_type: ColumnType::BigInt,
            nullable: true,
        }
    }

    pub const fn timestamp(name: &'static str) -> Self {
        Self {
            name,
            column_type: ColumnType::Timestamp,
            nullable: true,
        }
    }

    /// Switch a text column to fixed width.
    pub const fn fixed(self) -> Self {
        match self.column_type {
            ColumnType::Text { max_len, unicode, .. } => Self {
                column_type: ColumnType::Text {
                    max_len,
                    fixed: true,
                    unicode,
                },
                ..self
            },
            _ => self,
        }
    }

    /// Switch a text column to unicode storage.
    pub const fn unicode(self) -> Self {
        match self.column_type {
            ColumnType::Text { max_len, fixed, .. } => Self {
                column_type: ColumnType::Text {
                    max_len,
                    fixed,
                    unicode: true,
                },
                ..self
            },
            _ => self,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            nullable: false,
            ..self
        }
    }
}

/// Primary key strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDef {
    /// Staging/import shape: rows are never addressed individually.
    Keyless,
    /// Database-generated integer identity on the named column.
    Identity(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexDef {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub unique: bool,
}

impl IndexDef {
    pub const fn non_clustered(name: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            name,
            columns,
            unique: false,
        }
    }

    pub const fn unique(self) -> Self {
        Self {
            unique: true,
            ..self
        }
    }
}

/// Reference from a child column to a parent table's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKeyDef {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
    /// Deleting the parent removes dependent rows.
    pub cascade_delete: bool,
}

impl ForeignKeyDef {
    pub const fn cascade(
        column: &'static str,
        references_table: &'static str,
        references_column: &'static str,
    ) -> Self {
        Self {
            column,
            references_table,
            references_column,
            cascade_delete: true,
        }
    }
}

/// Complete mapping of one record type onto one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityConfig {
    pub table: &'static str,
    pub schema: &'static str,
    pub key: KeyDef,
    pub columns: &'static [ColumnDef],
    pub indexes: &'static [IndexDef],
    pub foreign_keys: &'static [ForeignKeyDef],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("table name is empty")]
    EmptyTable,

    #[error("{table}: column '{column}' is declared more than once")]
    DuplicateColumn { table: String, column: String },

    #[error("{table}: '{context}' references unknown column '{column}'")]
    UnknownColumn {
        table: String,
        context: String,
        column: String,
    },

    #[error("{table}: column '{column}' has a zero maximum length")]
    ZeroLength { table: String, column: String },

    #[error("{table}: identity column '{column}' must be a non-null BIGINT column")]
    MissingIdentityColumn { table: String, column: String },

    #[error("{table}: index '{index}' has no columns")]
    EmptyIndex { table: String, index: String },
}

impl EntityConfig {
    /// Check internal consistency of the mapping.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let table = self.table.to_string();
        if self.table.trim().is_empty() {
            return Err(SchemaError::EmptyTable);
        }

        let mut seen = HashSet::new();
        for column in self.columns {
            if !seen.insert(column.name) {
                return Err(SchemaError::DuplicateColumn {
                    table,
                    column: column.name.to_string(),
                });
            }
            if let ColumnType::Text { max_len: Some(0), .. } = column.column_type {
                return Err(SchemaError::ZeroLength {
                    table,
                    column: column.name.to_string(),
                });
            }
        }

        if let KeyDef::Identity(name) = self.key {
            let valid = self
                .column(name)
                .map(|c| c.column_type == ColumnType::BigInt && !c.nullable)
                .unwrap_or(false);
            if !valid {
                return Err(SchemaError::MissingIdentityColumn {
                    table,
                    column: name.to_string(),
                });
            }
        }

        for index in self.indexes {
            if index.columns.is_empty() {
                return Err(SchemaError::EmptyIndex {
                    table,
                    index: index.name.to_string(),
                });
            }
            for column in index.columns {
                if !seen.contains(column) {
                    return Err(SchemaError::UnknownColumn {
                        table,
                        context: index.name.to_string(),
                        column: column.to_string(),
                    });
                }
            }
        }

        for fk in self.foreign_keys {
            if !seen.contains(fk.column) {
                return Err(SchemaError::UnknownColumn {
                    table,
                    context: format!("FK -> {}", fk.references_table),
                    column: fk.column.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn identity_column(&self) -> Option<&'static str> {
        match self.key {
            KeyDef::Identity(name) => Some(name),
            KeyDef::Keyless => None,
        }
    }

    /// Columns written on insert; the identity column is generated by the database.
    pub fn insertable_columns(&self) -> Vec<&'static ColumnDef> {
        let identity = self.identity_column();
        self.columns
            .iter()
            .filter(|c| Some(c.name) != identity)
            .collect()
    }
}
