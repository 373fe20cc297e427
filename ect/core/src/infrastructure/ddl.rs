// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! # SQL Rendering
//!
//! Turns static [`EntityConfig`] metadata into dialect-specific statements.
//!
//! - [`Ddl`] renders idempotent schema, table and index creation.
//! - [`Dml`] renders the parameterised statements used by the entity store.
//!
//! PostgreSQL and SQLite are runtime backends. SQL Server output is for
//! exporting scripts to the legacy database and is never executed here.
//!
//! # Architecture
//!
//! - **Layer:** Infrastructure Layer
//! - **Purpose:** Dialect-aware SQL text generation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::schema::{ColumnDef, ColumnType, EntityConfig, KeyDef};

/// Width of the text column holding an RFC 3339 timestamp.
pub const TIMESTAMP_TEXT_LEN: u32 = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Postgres,
    Sqlite,
    SqlServer,
}

impl Dialect {
    /// Infer the dialect from a connection URL scheme.
    pub fn from_url(url: &str) -> Option<Self> {
        let scheme = url.split(':').next()?.to_ascii_lowercase();
        match scheme.as_str() {
            "postgres" | "postgresql" => Some(Dialect::Postgres),
            "sqlite" => Some(Dialect::Sqlite),
            "mssql" | "sqlserver" => Some(Dialect::SqlServer),
            _ => None,
        }
    }

    pub fn quote(&self, ident: &str) -> String {
        match self {
            Dialect::SqlServer => format!("[{}]", ident.replace(']', "]]")),
            _ => format!("\"{}\"", ident.replace('"', "\"\"")),
        }
    }

    /// Qualified table name. SQLite has no schemas, so the schema is dropped.
    pub fn table_name(&self, config: &EntityConfig) -> String {
        self.qualified(config.schema, config.table)
    }

    fn qualified(&self, schema: &str, table: &str) -> String {
        match self {
            Dialect::Sqlite => self.quote(table),
            _ => format!("{}.{}", self.quote(schema), self.quote(table)),
        }
    }

    /// Positional bind parameter, 1-based.
    pub fn placeholder(&self, n: usize) -> String {
        match self {
            Dialect::SqlServer => format!("@p{}", n),
            _ => format!("${}", n),
        }
    }

    pub fn column_type(&self, column: &ColumnDef) -> String {
        match (self, column.column_type) {
            (Dialect::Sqlite, ColumnType::BigInt) => "INTEGER".to_string(),
            (Dialect::Sqlite, _) => "TEXT".to_string(),
            (_, ColumnType::BigInt) => "BIGINT".to_string(),
            (_, ColumnType::Timestamp) => format!("VARCHAR({})", TIMESTAMP_TEXT_LEN),
            (Dialect::Postgres, ColumnType::Text { max_len: None, .. }) => "TEXT".to_string(),
            // No CHAR(n) here: bpchar has no mapping in the Any driver
            (Dialect::Postgres, ColumnType::Text { max_len: Some(n), .. }) => format!("VARCHAR({})", n),
            (Dialect::SqlServer, ColumnType::Text { max_len, fixed, unicode }) => {
                let base = match (fixed && max_len.is_some(), unicode) {
                    (true, true) => "NCHAR",
                    (true, false) => "CHAR",
                    (false, true) => "NVARCHAR",
                    (false, false) => "VARCHAR",
                };
                match max_len {
                    Some(n) => format!("{}({})", base, n),
                    None => format!("{}(MAX)", base),
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
            Dialect::SqlServer => "sqlserver",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "sqlite" => Ok(Dialect::Sqlite),
            "sqlserver" | "mssql" => Ok(Dialect::SqlServer),
            other => Err(format!(
                "unknown dialect '{}' (expected postgres, sqlite or sqlserver)",
                other
            )),
        }
    }
}

/// Schema definition statements.
#[derive(Debug, Clone, Copy)]
pub struct Ddl {
    dialect: Dialect,
}

impl Ddl {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// `None` for SQLite, which has no schemas.
    pub fn create_schema(&self, schema: &str) -> Option<String> {
        let d = self.dialect;
        match d {
            Dialect::Postgres => Some(format!("CREATE SCHEMA IF NOT EXISTS {}", d.quote(schema))),
            Dialect::Sqlite => None,
            Dialect::SqlServer => Some(format!(
                "IF SCHEMA_ID(N'{}') IS NULL EXEC('CREATE SCHEMA {}')",
                schema,
                d.quote(schema)
            )),
        }
    }

    pub fn create_table(&self, config: &EntityConfig) -> String {
        let d = self.dialect;
        let table = d.table_name(config);
        let identity = config.identity_column();

        let mut lines: Vec<String> = config
            .columns
            .iter()
            .map(|column| {
                let name = d.quote(column.name);
                if Some(column.name) == identity {
                    return match d {
                        Dialect::Postgres => {
                            format!("{} BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY", name)
                        }
                        Dialect::Sqlite => format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", name),
                        Dialect::SqlServer => format!("{} BIGINT IDENTITY(1,1) NOT NULL", name),
                    };
                }
                let null = if column.nullable { "NULL" } else { "NOT NULL" };
                format!("{} {} {}", name, d.column_type(column), null)
            })
            .collect();

        if let (Dialect::SqlServer, KeyDef::Identity(key)) = (d, config.key) {
            lines.push(format!(
                "CONSTRAINT {} PRIMARY KEY CLUSTERED ({})",
                d.quote(&format!("PK_{}", config.table)),
                d.quote(key)
            ));
        }

        for fk in config.foreign_keys {
            let on_delete = if fk.cascade_delete { " ON DELETE CASCADE" } else { "" };
            lines.push(format!(
                "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({}){}",
                d.quote(&format!("FK_{}_{}_{}", config.table, fk.references_table, fk.column)),
                d.quote(fk.column),
                d.qualified(config.schema, fk.references_table),
                d.quote(fk.references_column),
                on_delete
            ));
        }

        let body = lines.join(",\n    ");
        match d {
            Dialect::SqlServer => format!(
                "IF OBJECT_ID(N'{}', N'U') IS NULL\nCREATE TABLE {} (\n    {}\n)",
                table, table, body
            ),
            _ => format!("CREATE TABLE IF NOT EXISTS {} (\n    {}\n)", table, body),
        }
    }

    pub fn create_indexes(&self, config: &EntityConfig) -> Vec<String> {
        let d = self.dialect;
        let table = d.table_name(config);

        config
            .indexes
            .iter()
            .map(|index| {
                let columns = index
                    .columns
                    .iter()
                    .map(|c| d.quote(c))
                    .collect::<Vec<_>>()
                    .join(", ");
                let unique = if index.unique { "UNIQUE " } else { "" };
                match d {
                    Dialect::SqlServer => format!(
                        "IF NOT EXISTS (SELECT 1 FROM sys.indexes WHERE name = N'{}' AND object_id = OBJECT_ID(N'{}'))\nCREATE {}NONCLUSTERED INDEX {} ON {} ({})",
                        index.name,
                        table,
                        unique,
                        d.quote(index.name),
                        table,
                        columns
                    ),
                    _ => format!(
                        "CREATE {}INDEX IF NOT EXISTS {} ON {} ({})",
                        unique,
                        d.quote(index.name),
                        table,
                        columns
                    ),
                }
            })
            .collect()
    }
}

/// Parameterised data statements.
#[derive(Debug, Clone, Copy)]
pub struct Dml {
    dialect: Dialect,
}

impl Dml {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    fn column_list(&self, columns: &[&ColumnDef]) -> String {
        columns
            .iter()
            .map(|c| self.dialect.quote(c.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn all_columns(&self, config: &EntityConfig) -> String {
        self.column_list(&config.columns.iter().collect::<Vec<_>>())
    }

    /// Multi-row insert of `rows` rows over the insertable columns. Keyed
    /// tables return the generated identity.
    pub fn insert(&self, config: &EntityConfig, rows: usize) -> String {
        let d = self.dialect;
        let columns = config.insertable_columns();
        let width = columns.len();

        let values = (0..rows)
            .map(|row| {
                let params = (1..=width)
                    .map(|col| d.placeholder(row * width + col))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("({})", params)
            })
            .collect::<Vec<_>>()
            .join(", ");

        let identity = config.identity_column();
        let output = match (d, identity) {
            (Dialect::SqlServer, Some(id)) => format!(" OUTPUT INSERTED.{}", d.quote(id)),
            _ => String::new(),
        };
        let returning = match (d, identity) {
            (Dialect::SqlServer, _) | (_, None) => String::new(),
            (_, Some(id)) => format!(" RETURNING {}", d.quote(id)),
        };

        format!(
            "INSERT INTO {} ({}){} VALUES {}{}",
            d.table_name(config),
            self.column_list(&columns),
            output,
            values,
            returning
        )
    }

    /// Every column of every row; keyed tables are ordered by identity.
    pub fn select_all(&self, config: &EntityConfig) -> String {
        let d = self.dialect;
        let order = config
            .identity_column()
            .map(|id| format!(" ORDER BY {}", d.quote(id)))
            .unwrap_or_default();
        format!(
            "SELECT {} FROM {}{}",
            self.all_columns(config),
            d.table_name(config),
            order
        )
    }

    pub fn select_where(&self, config: &EntityConfig, column: &str) -> String {
        let d = self.dialect;
        format!(
            "SELECT {} FROM {} WHERE {} = {}",
            self.all_columns(config),
            d.table_name(config),
            d.quote(column),
            d.placeholder(1)
        )
    }

    /// Rows matching `column`, ordered by `order_by` descending and capped at `limit`.
    pub fn select_latest_where(
        &self,
        config: &EntityConfig,
        column: &str,
        order_by: &str,
        limit: usize,
    ) -> String {
        let d = self.dialect;
        let (top, tail) = match d {
            Dialect::SqlServer => (format!("TOP ({}) ", limit), String::new()),
            _ => (String::new(), format!(" LIMIT {}", limit)),
        };
        format!(
            "SELECT {}{} FROM {} WHERE {} = {} ORDER BY {} DESC{}",
            top,
            self.all_columns(config),
            d.table_name(config),
            d.quote(column),
            d.placeholder(1),
            d.quote(order_by),
            tail
        )
    }

    pub fn delete_where(&self, config: &EntityConfig, column: &str) -> String {
        let d = self.dialect;
        format!(
            "DELETE FROM {} WHERE {} = {}",
            d.table_name(config),
            d.quote(column),
            d.placeholder(1)
        )
    }

    pub fn delete_all(&self, config: &EntityConfig) -> String {
        format!("DELETE FROM {}", self.dialect.table_name(config))
    }

    pub fn count(&self, config: &EntityConfig) -> String {
        format!(
            "SELECT COUNT(*) AS {} FROM {}",
            self.dialect.quote("Total"),
            self.dialect.table_name(config)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        ApplicationWarmupProcess, ApplicationWarmupProcessLog, Entity, MilpdsMemberData, PalData,
    };

    #[test]
    fn test_dialect_parsing() {
        assert_eq!(Dialect::from_url("postgres://ect@db/ect"), Some(Dialect::Postgres));
        assert_eq!(Dialect::from_url("postgresql://ect@db/ect"), Some(Dialect::Postgres));
        assert_eq!(Dialect::from_url("sqlite::memory:"), Some(Dialect::Sqlite));
        assert_eq!(Dialect::from_url("mssql://sa@db"), Some(Dialect::SqlServer));
        assert_eq!(Dialect::from_url("mysql://db"), None);
        assert_eq!("SqlServer".parse::<Dialect>(), Ok(Dialect::SqlServer));
        assert!("oracle".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_column_types() {
        let pal = PalData::config();
        let ssn = pal.column("SSN").unwrap();
        let name = MilpdsMemberData::config().column("NAME").unwrap();

        assert_eq!(Dialect::Postgres.column_type(ssn), "VARCHAR(9)");
        assert_eq!(Dialect::SqlServer.column_type(ssn), "CHAR(9)");
        assert_eq!(Dialect::Sqlite.column_type(ssn), "TEXT");
        assert_eq!(Dialect::Postgres.column_type(name), "VARCHAR(100)");
        assert_eq!(Dialect::SqlServer.column_type(name), "NVARCHAR(100)");

        let message = ApplicationWarmupProcessLog::config().column("Message").unwrap();
        assert_eq!(Dialect::SqlServer.column_type(message), "NVARCHAR(MAX)");
        assert_eq!(Dialect::Postgres.column_type(message), "TEXT");

        let date = ApplicationWarmupProcessLog::config().column("ExecutionDate").unwrap();
        assert_eq!(Dialect::Postgres.column_type(date), "VARCHAR(35)");
    }

    #[test]
    fn test_postgres_keyed_table() {
        let sql = Ddl::new(Dialect::Postgres).create_table(ApplicationWarmupProcessLog::config());
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"dbo\".\"ApplicationWarmupProcessLog\""));
        assert!(sql.contains("\"Id\" BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY"));
        assert!(sql.contains("\"ProcessId\" BIGINT NOT NULL"));
        assert!(sql.contains(
            "FOREIGN KEY (\"ProcessId\") REFERENCES \"dbo\".\"ApplicationWarmupProcess\" (\"Id\") ON DELETE CASCADE"
        ));
    }

    #[test]
    fn test_sqlite_drops_schema() {
        let ddl = Ddl::new(Dialect::Sqlite);
        assert_eq!(ddl.create_schema("dbo"), None);
        let sql = ddl.create_table(ApplicationWarmupProcess::config());
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"ApplicationWarmupProcess\""));
        assert!(sql.contains("\"Id\" INTEGER PRIMARY KEY AUTOINCREMENT"));
    }

    #[test]
    fn test_sqlserver_export() {
        let ddl = Ddl::new(Dialect::SqlServer);
        let sql = ddl.create_table(ApplicationWarmupProcess::config());
        assert!(sql.contains("IF OBJECT_ID(N'[dbo].[ApplicationWarmupProcess]', N'U') IS NULL"));
        assert!(sql.contains("[Id] BIGINT IDENTITY(1,1) NOT NULL"));
        assert!(sql.contains("[Description] NVARCHAR(500) NULL"));
        assert!(sql.contains("CONSTRAINT [PK_ApplicationWarmupProcess] PRIMARY KEY CLUSTERED ([Id])"));

        let indexes = ddl.create_indexes(ApplicationWarmupProcess::config());
        assert_eq!(indexes.len(), 1);
        assert!(indexes[0].contains(
            "CREATE UNIQUE NONCLUSTERED INDEX [IX_ApplicationWarmupProcess_Name] ON [dbo].[ApplicationWarmupProcess] ([Name])"
        ));
    }

    #[test]
    fn test_keyless_indexes() {
        let indexes = Ddl::new(Dialect::Postgres).create_indexes(PalData::config());
        assert_eq!(
            indexes,
            vec![
                "CREATE INDEX IF NOT EXISTS \"IX_PAL_DATA_SSN\" ON \"dbo\".\"PAL_DATA\" (\"SSN\")",
                "CREATE INDEX IF NOT EXISTS \"IX_PAL_DATA_PAS_CODE\" ON \"dbo\".\"PAL_DATA\" (\"PAS_CODE\")",
            ]
        );
    }

    #[test]
    fn test_insert_statements() {
        let dml = Dml::new(Dialect::Postgres);
        assert_eq!(
            dml.insert(ApplicationWarmupProcess::config(), 1),
            "INSERT INTO \"dbo\".\"ApplicationWarmupProcess\" (\"Name\", \"Description\", \"Active\", \"CreatedAt\") VALUES ($1, $2, $3, $4) RETURNING \"Id\""
        );

        let sql = Dml::new(Dialect::Sqlite).insert(PalData::config(), 2);
        assert!(sql.starts_with("INSERT INTO \"PAL_DATA\" (\"SSN\", "));
        assert!(sql.contains("($1, $2, $3, $4, $5, $6, $7, $8, $9, $10), ($11, "));
        assert!(sql.ends_with("$20)"));

        let sql = Dml::new(Dialect::SqlServer).insert(ApplicationWarmupProcess::config(), 1);
        assert!(sql.contains("OUTPUT INSERTED.[Id] VALUES (@p1, @p2, @p3, @p4)"));
    }

    #[test]
    fn test_query_statements() {
        let dml = Dml::new(Dialect::Sqlite);
        let config = ApplicationWarmupProcess::config();
        assert_eq!(
            dml.select_where(config, "Name"),
            "SELECT \"Id\", \"Name\", \"Description\", \"Active\", \"CreatedAt\" FROM \"ApplicationWarmupProcess\" WHERE \"Name\" = $1"
        );
        assert!(dml.select_all(config).ends_with("ORDER BY \"Id\""));
        assert!(!dml.select_all(PalData::config()).contains("ORDER BY"));
        assert_eq!(dml.delete_all(PalData::config()), "DELETE FROM \"PAL_DATA\"");
        assert_eq!(
            dml.select_latest_where(ApplicationWarmupProcessLog::config(), "ProcessId", "Id", 5),
            "SELECT \"Id\", \"ProcessId\", \"ExecutionDate\", \"Outcome\", \"Message\", \"DurationMs\", \"RemoteProcessId\" FROM \"ApplicationWarmupProcessLog\" WHERE \"ProcessId\" = $1 ORDER BY \"Id\" DESC LIMIT 5"
        );
        assert!(Dml::new(Dialect::SqlServer)
            .select_latest_where(ApplicationWarmupProcessLog::config(), "ProcessId", "Id", 5)
            .starts_with("SELECT TOP (5) [Id], "));
        assert_eq!(
            dml.count(PalData::config()),
            "SELECT COUNT(*) AS \"Total\" FROM \"PAL_DATA\""
        );
    }
}
