// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

//! Command implementations for the ECT CLI

pub mod config;
pub mod schema;
pub mod warmup;
pub mod workstatus;

pub use self::config::ConfigCommand;
pub use self::schema::SchemaCommand;
pub use self::warmup::WarmupCommand;
pub use self::workstatus::WorkstatusCommand;
