// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Server-side audit and user action trail.

use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Status;

use super::api::{AuditLoggingApi, RpcStream};
use super::envelope::CallEnvelope;
use super::proto::audit_logging_service_client::AuditLoggingServiceClient;
use super::proto::{
    Ack, AuditEventRecord, GetAuditEventsByCorrelationIdRequest, GetUserActionsRequest,
    RecordAuditEventRequest, RecordUserActionRequest, UserActionRecord,
};

#[derive(Clone)]
pub struct AuditLoggingClient {
    client: AuditLoggingServiceClient<Channel>,
    envelope: CallEnvelope,
}

impl AuditLoggingClient {
    pub fn new(channel: Channel, envelope: CallEnvelope) -> Self {
        Self {
            client: AuditLoggingServiceClient::new(channel),
            envelope,
        }
    }
}

#[async_trait]
impl AuditLoggingApi for AuditLoggingClient {
    async fn record_audit_event(&self, request: RecordAuditEventRequest) -> Result<Ack, Status> {
        self.envelope
            .unary("AuditLoggingService/RecordAuditEvent", request, |request| {
                let mut client = self.client.clone();
                async move { client.record_audit_event(request).await }
            })
            .await
    }

    async fn record_user_action(&self, request: RecordUserActionRequest) -> Result<Ack, Status> {
        self.envelope
            .unary("AuditLoggingService/RecordUserAction", request, |request| {
                let mut client = self.client.clone();
                async move { client.record_user_action(request).await }
            })
            .await
    }

    fn get_audit_events_by_correlation_id(
        &self,
        request: GetAuditEventsByCorrelationIdRequest,
    ) -> RpcStream<AuditEventRecord> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "AuditLoggingService/GetAuditEventsByCorrelationId",
            request,
            move |request| async move { client.get_audit_events_by_correlation_id(request).await },
        )
    }

    fn get_user_actions(&self, request: GetUserActionsRequest) -> RpcStream<UserActionRecord> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "AuditLoggingService/GetUserActions",
            request,
            move |request| async move { client.get_user_actions(request).await },
        )
    }
}
