// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Workflow definitions, steps, actions and reason lists.

use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Status;

use super::api::{CoreWorkflowApi, RpcStream};
use super::envelope::CallEnvelope;
use super::proto::core_workflow_service_client::CoreWorkflowServiceClient;
use super::proto::{
    GetCancelReasonsRequest, GetStepActionsRequest, GetWorkflowInitialStatusCodeRequest,
    GetWorkflowTitleRequest, GetWorkflowsByModuleRequest, ReturnReason, WorkStatusCode,
    WorkflowAction, WorkflowByIdRequest, WorkflowDefinition, WorkflowStep, WorkflowTitle,
};

#[derive(Clone)]
pub struct CoreWorkflowClient {
    client: CoreWorkflowServiceClient<Channel>,
    envelope: CallEnvelope,
}

impl CoreWorkflowClient {
    pub fn new(channel: Channel, envelope: CallEnvelope) -> Self {
        Self {
            client: CoreWorkflowServiceClient::new(channel),
            envelope,
        }
    }
}

#[async_trait]
impl CoreWorkflowApi for CoreWorkflowClient {
    async fn get_workflow_by_id(
        &self,
        request: WorkflowByIdRequest,
    ) -> Result<WorkflowDefinition, Status> {
        self.envelope
            .unary("CoreWorkflowService/GetWorkflowById", request, |request| {
                let mut client = self.client.clone();
                async move { client.get_workflow_by_id(request).await }
            })
            .await
    }

    async fn get_workflow_title(
        &self,
        request: GetWorkflowTitleRequest,
    ) -> Result<WorkflowTitle, Status> {
        self.envelope
            .unary("CoreWorkflowService/GetWorkflowTitle", request, |request| {
                let mut client = self.client.clone();
                async move { client.get_workflow_title(request).await }
            })
            .await
    }

    async fn get_workflow_initial_status_code(
        &self,
        request: GetWorkflowInitialStatusCodeRequest,
    ) -> Result<WorkStatusCode, Status> {
        self.envelope
            .unary("CoreWorkflowService/GetWorkflowInitialStatusCode", request, |request| {
                let mut client = self.client.clone();
                async move { client.get_workflow_initial_status_code(request).await }
            })
            .await
    }

    fn get_workflows_by_module(
        &self,
        request: GetWorkflowsByModuleRequest,
    ) -> RpcStream<WorkflowDefinition> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "CoreWorkflowService/GetWorkflowsByModule",
            request,
            move |request| async move { client.get_workflows_by_module(request).await },
        )
    }

    fn get_workflow_steps(&self, request: WorkflowByIdRequest) -> RpcStream<WorkflowStep> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "CoreWorkflowService/GetWorkflowSteps",
            request,
            move |request| async move { client.get_workflow_steps(request).await },
        )
    }

    fn get_step_actions(&self, request: GetStepActionsRequest) -> RpcStream<WorkflowAction> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "CoreWorkflowService/GetStepActions",
            request,
            move |request| async move { client.get_step_actions(request).await },
        )
    }

    fn get_return_reasons(&self, request: WorkflowByIdRequest) -> RpcStream<ReturnReason> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "CoreWorkflowService/GetReturnReasons",
            request,
            move |request| async move { client.get_return_reasons(request).await },
        )
    }

    fn get_rwoa_reasons(&self, request: WorkflowByIdRequest) -> RpcStream<ReturnReason> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "CoreWorkflowService/GetRwoaReasons",
            request,
            move |request| async move { client.get_rwoa_reasons(request).await },
        )
    }

    fn get_cancel_reasons(&self, request: GetCancelReasonsRequest) -> RpcStream<ReturnReason> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "CoreWorkflowService/GetCancelReasons",
            request,
            move |request| async move { client.get_cancel_reasons(request).await },
        )
    }
}
