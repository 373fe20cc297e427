// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! # Workflow Call Audit
//!
//! Every workflow client call, unary or streaming, produces exactly one
//! [`AuditEvent`] when it completes: the method, its correlation id, timing,
//! the number of invocations it took, whether it succeeded and the request
//! payload as JSON.
//!
//! Events are handed to an [`AuditSink`]. [`TracingAuditSink`] writes them to
//! the structured log under the `ect::audit` target; [`InMemoryAuditSink`]
//! keeps them for inspection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    /// Fully qualified RPC name, e.g. `CoreUser/GetUserById`
    pub method: &'static str,
    pub correlation_id: String,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub success: bool,
    /// Invocations made; always 1 for streams
    pub attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Items yielded, streams only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<u64>,
    pub payload: serde_json::Value,
}

#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn record(&self, event: &AuditEvent);
}

/// Writes audit events to the tracing log.
#[derive(Debug, Clone, Default)]
pub struct TracingAuditSink;

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn record(&self, event: &AuditEvent) {
        if event.success {
            tracing::info!(
                target: "ect::audit",
                method = event.method,
                correlation_id = %event.correlation_id,
                duration_ms = event.duration_ms,
                attempts = event.attempts,
                items = event.items,
                payload = %event.payload,
                "Workflow call succeeded"
            );
        } else {
            tracing::warn!(
                target: "ect::audit",
                method = event.method,
                correlation_id = %event.correlation_id,
                duration_ms = event.duration_ms,
                attempts = event.attempts,
                error_code = event.error_code.as_deref().unwrap_or_default(),
                error = event.error_message.as_deref().unwrap_or_default(),
                payload = %event.payload,
                "Workflow call failed"
            );
        }
    }
}

/// Keeps every event in memory, in completion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditSink {
    events: Arc<Mutex<Vec<AuditEvent>>>,
}

impl InMemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditSink {
    async fn record(&self, event: &AuditEvent) {
        self.events.lock().push(event.clone());
    }
}
