// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

pub mod warmup;

// Re-export use cases for convenience
pub use warmup::{ApplicationWarmupService, WarmupReport, WarmupReportEntry};
