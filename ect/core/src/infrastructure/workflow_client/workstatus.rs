// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Work statuses, options and status history.

use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Status;

use super::api::{WorkstatusApi, RpcStream};
use super::envelope::CallEnvelope;
use super::proto::workstatus_service_client::WorkstatusServiceClient;
use super::proto::{
    ChangeWorkstatusRequest, ChangeWorkstatusResponse, GetStatusCodesRequest,
    GetWorkstatusByIdRequest, GetWorkstatusByStatusCodeRequest, GetWorkstatusOptionsRequest,
    RefIdRequest, WorkStatusCode, WorkflowByIdRequest, Workstatus, WorkstatusHistoryEntry,
    WorkstatusOption,
};

#[derive(Clone)]
pub struct WorkstatusClient {
    client: WorkstatusServiceClient<Channel>,
    envelope: CallEnvelope,
}

impl WorkstatusClient {
    pub fn new(channel: Channel, envelope: CallEnvelope) -> Self {
        Self {
            client: WorkstatusServiceClient::new(channel),
            envelope,
        }
    }
}

#[async_trait]
impl WorkstatusApi for WorkstatusClient {
    async fn get_workstatus_by_id(
        &self,
        request: GetWorkstatusByIdRequest,
    ) -> Result<Workstatus, Status> {
        self.envelope
            .unary("WorkstatusService/GetWorkstatusById", request, |request| {
                let mut client = self.client.clone();
                async move { client.get_workstatus_by_id(request).await }
            })
            .await
    }

    async fn get_workstatus_by_status_code(
        &self,
        request: GetWorkstatusByStatusCodeRequest,
    ) -> Result<Workstatus, Status> {
        self.envelope
            .unary("WorkstatusService/GetWorkstatusByStatusCode", request, |request| {
                let mut client = self.client.clone();
                async move { client.get_workstatus_by_status_code(request).await }
            })
            .await
    }

    fn get_workstatuses_by_workflow(&self, request: WorkflowByIdRequest) -> RpcStream<Workstatus> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "WorkstatusService/GetWorkstatusesByWorkflow",
            request,
            move |request| async move { client.get_workstatuses_by_workflow(request).await },
        )
    }

    fn get_status_codes(&self, request: GetStatusCodesRequest) -> RpcStream<WorkStatusCode> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "WorkstatusService/GetStatusCodes",
            request,
            move |request| async move { client.get_status_codes(request).await },
        )
    }

    fn get_workstatus_options(
        &self,
        request: GetWorkstatusOptionsRequest,
    ) -> RpcStream<WorkstatusOption> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "WorkstatusService/GetWorkstatusOptions",
            request,
            move |request| async move { client.get_workstatus_options(request).await },
        )
    }

    async fn change_workstatus(
        &self,
        request: ChangeWorkstatusRequest,
    ) -> Result<ChangeWorkstatusResponse, Status> {
        self.envelope
            .unary("WorkstatusService/ChangeWorkstatus", request, |request| {
                let mut client = self.client.clone();
                async move { client.change_workstatus(request).await }
            })
            .await
    }

    fn get_workstatus_history(&self, request: RefIdRequest) -> RpcStream<WorkstatusHistoryEntry> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "WorkstatusService/GetWorkstatusHistory",
            request,
            move |request| async move { client.get_workstatus_history(request).await },
        )
    }
}
