// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Remote cache warm-up processes.

use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Status;

use super::api::{ApplicationWarmupApi, RpcStream};
use super::envelope::CallEnvelope;
use super::proto::application_warmup_service_client::ApplicationWarmupServiceClient;
use super::proto::{
    DeleteWarmupLogsRequest, DeleteWarmupLogsResponse, ExecuteWarmupProcessRequest,
    GetWarmupLogsRequest, GetWarmupProcessesRequest, WarmupExecution, WarmupLogEntry,
    WarmupProcess,
};

#[derive(Clone)]
pub struct ApplicationWarmupClient {
    client: ApplicationWarmupServiceClient<Channel>,
    envelope: CallEnvelope,
}

impl ApplicationWarmupClient {
    pub fn new(channel: Channel, envelope: CallEnvelope) -> Self {
        Self {
            client: ApplicationWarmupServiceClient::new(channel),
            envelope,
        }
    }
}

#[async_trait]
impl ApplicationWarmupApi for ApplicationWarmupClient {
    fn get_warmup_processes(&self, request: GetWarmupProcessesRequest) -> RpcStream<WarmupProcess> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "ApplicationWarmupService/GetWarmupProcesses",
            request,
            move |request| async move { client.get_warmup_processes(request).await },
        )
    }

    async fn execute_warmup_process(
        &self,
        request: ExecuteWarmupProcessRequest,
    ) -> Result<WarmupExecution, Status> {
        self.envelope
            .unary("ApplicationWarmupService/ExecuteWarmupProcess", request, |request| {
                let mut client = self.client.clone();
                async move { client.execute_warmup_process(request).await }
            })
            .await
    }

    fn get_warmup_logs(&self, request: GetWarmupLogsRequest) -> RpcStream<WarmupLogEntry> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "ApplicationWarmupService/GetWarmupLogs",
            request,
            move |request| async move { client.get_warmup_logs(request).await },
        )
    }

    async fn delete_warmup_logs(
        &self,
        request: DeleteWarmupLogsRequest,
    ) -> Result<DeleteWarmupLogsResponse, Status> {
        self.envelope
            .unary("ApplicationWarmupService/DeleteWarmupLogs", request, |request| {
                let mut client = self.client.clone();
                async move { client.delete_warmup_logs(request).await }
            })
            .await
    }
}
