// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Domain
//!
//! Configuration manifest, entity metadata, mapped record shapes and the
//! repository contracts the infrastructure layer implements.
//!
//! # Architecture
//!
//! - **Layer:** Domain Layer
//! - **Purpose:** Pure types with no I/O beyond configuration file loading

pub mod config;
pub mod schema;
pub mod entities;
pub mod repository;
