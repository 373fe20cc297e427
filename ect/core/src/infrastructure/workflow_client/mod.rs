// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

//! Workflow Service gRPC Client
//!
//! Strongly-typed facade over the remote ECT workflow service.
//!
//! # Architecture
//!
//! - **Layer:** Infrastructure
//! - **Purpose:** gRPC communication with the workflow service
//! - **Integration:** ECT data layer → `ect.workflow.v1` services
//!
//! # Client Features
//!
//! - **Functional areas**: one sub-client per service (`CoreUser`,
//!   `CoreWorkflow`, `Workflow`, `Workstatus`, `ApplicationWarmup`,
//!   `AuditLogging`), each implementing its area trait from [`api`]
//! - **Call envelope**: correlation id, local timer, retry on transient codes,
//!   per-call timeout and one audit event per call ([`envelope`])
//! - **Shared channel**: every sub-client clones one `tonic` channel, so the
//!   facade is cheap to clone and safe to share across tasks
//!
//! # Usage
//!
//! ```ignore
//! use ect_core::infrastructure::workflow_client::{WorkflowClient, RetryPolicy, TracingAuditSink};
//!
//! let client = WorkflowClient::connect(
//!     &config.spec.service,
//!     RetryPolicy::from(&config.spec.retry),
//!     Arc::new(TracingAuditSink),
//! ).await?;
//!
//! let user = client.core_user().get_user_by_id(GetUserByIdRequest { user_id: 42 }).await?;
//! let mut history = client.workstatus().get_workstatus_history(RefIdRequest { ref_id: 1001, module_id: 2 });
//! while let Some(entry) = history.next().await { /* ... */ }
//! ```

pub mod api;
pub mod application_warmup;
pub mod audit;
pub mod audit_logging;
pub mod core_user;
pub mod core_workflow;
pub mod envelope;
pub mod proto;
pub mod retry;
pub mod workflow;
pub mod workstatus;

pub use api::{
    ApplicationWarmupApi, AuditLoggingApi, CoreUserApi, CoreWorkflowApi, RpcStream, WorkflowApi,
    WorkstatusApi,
};
pub use application_warmup::ApplicationWarmupClient;
pub use audit::{AuditEvent, AuditSink, InMemoryAuditSink, TracingAuditSink};
pub use audit_logging::AuditLoggingClient;
pub use core_user::CoreUserClient;
pub use core_workflow::CoreWorkflowClient;
pub use envelope::{CallEnvelope, CORRELATION_HEADER};
pub use retry::RetryPolicy;
pub use workflow::WorkflowCaseClient;
pub use workstatus::WorkstatusClient;

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tonic::transport::{Channel, Endpoint};

use crate::domain::config::ServiceConfig;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid workflow service endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Failed to connect to workflow service at {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },
}

/// Facade composing every functional-area client over one channel.
#[derive(Clone)]
pub struct WorkflowClient {
    core_user: CoreUserClient,
    core_workflow: CoreWorkflowClient,
    workflow: WorkflowCaseClient,
    workstatus: WorkstatusClient,
    application_warmup: ApplicationWarmupClient,
    audit_logging: AuditLoggingClient,
    envelope: CallEnvelope,
}

impl WorkflowClient {
    /// Connect eagerly to the configured endpoint.
    pub async fn connect(
        config: &ServiceConfig,
        retry: RetryPolicy,
        audit: Arc<dyn AuditSink>,
    ) -> Result<Self, ClientError> {
        let endpoint = Self::endpoint(config)?;
        let address = endpoint.uri().to_string();

        let channel = endpoint
            .connect()
            .await
            .map_err(|source| ClientError::Connect {
                endpoint: address.clone(),
                source,
            })?;

        tracing::info!(endpoint = %address, "Connected to workflow service");
        Ok(Self::from_channel(channel, retry, Some(Duration::from_secs(config.timeout_seconds)), audit))
    }

    /// Build a client whose channel connects on first use.
    pub fn connect_lazy(
        config: &ServiceConfig,
        retry: RetryPolicy,
        audit: Arc<dyn AuditSink>,
    ) -> Result<Self, ClientError> {
        let channel = Self::endpoint(config)?.connect_lazy();
        Ok(Self::from_channel(channel, retry, Some(Duration::from_secs(config.timeout_seconds)), audit))
    }

    pub fn from_channel(
        channel: Channel,
        retry: RetryPolicy,
        timeout: Option<Duration>,
        audit: Arc<dyn AuditSink>,
    ) -> Self {
        let envelope = CallEnvelope::new(retry, timeout, audit);
        Self {
            core_user: CoreUserClient::new(channel.clone(), envelope.clone()),
            core_workflow: CoreWorkflowClient::new(channel.clone(), envelope.clone()),
            workflow: WorkflowCaseClient::new(channel.clone(), envelope.clone()),
            workstatus: WorkstatusClient::new(channel.clone(), envelope.clone()),
            application_warmup: ApplicationWarmupClient::new(channel.clone(), envelope.clone()),
            audit_logging: AuditLoggingClient::new(channel, envelope.clone()),
            envelope,
        }
    }

    fn endpoint(config: &ServiceConfig) -> Result<Endpoint, ClientError> {
        // Ensure address has scheme
        let address = if config.endpoint.contains("://") {
            config.endpoint.clone()
        } else {
            format!("http://{}", config.endpoint)
        };

        let endpoint = Channel::from_shared(address.clone()).map_err(|e| {
            ClientError::InvalidEndpoint {
                endpoint: address,
                reason: e.to_string(),
            }
        })?;

        Ok(endpoint.connect_timeout(Duration::from_secs(config.connect_timeout_seconds)))
    }

    pub fn core_user(&self) -> &CoreUserClient {
        &self.core_user
    }

    pub fn core_workflow(&self) -> &CoreWorkflowClient {
        &self.core_workflow
    }

    pub fn workflow(&self) -> &WorkflowCaseClient {
        &self.workflow
    }

    pub fn workstatus(&self) -> &WorkstatusClient {
        &self.workstatus
    }

    pub fn application_warmup(&self) -> &ApplicationWarmupClient {
        &self.application_warmup
    }

    pub fn audit_logging(&self) -> &AuditLoggingClient {
        &self.audit_logging
    }

    pub fn envelope(&self) -> &CallEnvelope {
        &self.envelope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(endpoint: &str) -> ServiceConfig {
        ServiceConfig {
            endpoint: endpoint.to_string(),
            ..ServiceConfig::default()
        }
    }

    #[tokio::test]
    async fn test_scheme_is_added() {
        let endpoint = WorkflowClient::endpoint(&service("localhost:50051")).unwrap();
        assert_eq!(endpoint.uri().scheme_str(), Some("http"));
        assert_eq!(endpoint.uri().authority().map(|a| a.as_str()), Some("localhost:50051"));
    }

    #[tokio::test]
    async fn test_invalid_endpoint() {
        let result = WorkflowClient::connect_lazy(
            &service("http://bad host"),
            RetryPolicy::default(),
            Arc::new(InMemoryAuditSink::new()),
        );
        assert!(matches!(result, Err(ClientError::InvalidEndpoint { .. })));
    }

    #[tokio::test]
    async fn test_lazy_client_shares_configuration() {
        let client = WorkflowClient::connect_lazy(
            &service("http://127.0.0.1:1"),
            RetryPolicy::none(),
            Arc::new(InMemoryAuditSink::new()),
        )
        .unwrap();
        assert_eq!(client.envelope().timeout(), Some(Duration::from_secs(30)));
        assert_eq!(client.envelope().retry_policy().max_retry_attempts, 0);
    }
}
