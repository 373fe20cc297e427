// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! ECT Core
//!
//! Data and service layer of the ECT Line-of-Duty case-management system.
//!
//! # Architecture
//!
//! - **Layer:** Core System
//! - **Purpose:** Entity configuration, storage runtime and the workflow
//!   service client
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`domain`] | configuration manifest, entity metadata, record shapes, repository contracts |
//! | [`application`] | warm-up use case |
//! | [`infrastructure`] | SQL store, DDL rendering, gRPC workflow client |

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use domain::*;
