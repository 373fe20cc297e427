// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

pub mod db;
pub mod ddl;
pub mod migrator;
pub mod repositories;
pub mod workflow_client;

pub use db::Database;
pub use ddl::{Ddl, Dialect, Dml};
pub use migrator::SchemaMigrator;
pub use repositories::{EntityStore, InMemoryWarmupRepository, SqlWarmupRepository, StagingTable};
pub use workflow_client::{ClientError, WorkflowClient};
