// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

//! Schema commands: list mapped tables, render DDL, apply it to a database.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;

use ect_core::config::EctConfig;
use ect_core::infrastructure::db::{redact, Database};
use ect_core::infrastructure::ddl::Dialect;
use ect_core::infrastructure::migrator::SchemaMigrator;
use ect_core::schema::KeyDef;

#[derive(Subcommand)]
pub enum SchemaCommand {
    /// List every mapped table
    List,

    /// Print the DDL script for a dialect
    Ddl {
        /// Target dialect: postgres, sqlite or sqlserver
        #[arg(long, default_value = "postgres")]
        dialect: Dialect,
    },

    /// Create missing tables and indexes
    Apply {
        /// Database URL (default: spec.database.url)
        #[arg(long, env = "ECT_DATABASE_URL")]
        database_url: Option<String>,
    },
}

pub async fn handle_command(command: SchemaCommand, config: &EctConfig) -> Result<()> {
    match command {
        SchemaCommand::List => list(),
        SchemaCommand::Ddl { dialect } => ddl(dialect),
        SchemaCommand::Apply { database_url } => apply(config, database_url).await,
    }
}

fn list() -> Result<()> {
    let migrator = SchemaMigrator::new();
    println!("{}", "Mapped tables:".bold());
    for config in migrator.entities() {
        let key = match config.key {
            KeyDef::Identity(column) => format!("identity {}", column),
            KeyDef::Keyless => "keyless".dimmed().to_string(),
        };
        println!(
            "  {}.{:<32} {:>2} columns  {}",
            config.schema,
            config.table.bold(),
            config.columns.len(),
            key
        );
    }
    Ok(())
}

fn ddl(dialect: Dialect) -> Result<()> {
    let statements = SchemaMigrator::new()
        .statements(dialect)
        .context("Entity configuration is invalid")?;

    let terminator = match dialect {
        Dialect::SqlServer => "\nGO\n",
        _ => ";\n",
    };
    for statement in statements {
        print!("{}{}", statement, terminator);
        println!();
    }
    Ok(())
}

async fn apply(config: &EctConfig, database_url: Option<String>) -> Result<()> {
    let url = database_url.unwrap_or_else(|| config.spec.database.url.clone());

    let db = Database::connect(&url, config.spec.database.max_connections).await?;
    let applied = SchemaMigrator::new()
        .apply(&db)
        .await
        .with_context(|| format!("Failed to apply schema to {}", redact(&url)))?;
    db.close().await;

    println!(
        "{}",
        format!("✓ Schema applied to {} ({} statements)", redact(&url), applied).green()
    );
    Ok(())
}
