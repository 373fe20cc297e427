// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Case signatures, findings, RWOA and comments.

use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Status;

use super::api::{WorkflowApi, RpcStream};
use super::envelope::CallEnvelope;
use super::proto::workflow_service_client::WorkflowServiceClient;
use super::proto::{
    Ack, AddCaseCommentRequest, CaseComment, Finding, GetFindingsRequest,
    GetSignatureRequest, RefIdRequest, ReturnCaseWithoutActionRequest, RwoaEntry,
    RwoaResult, SaveFindingRequest, SaveFindingResponse, SignCaseRequest, Signature,
};

#[derive(Clone)]
pub struct WorkflowCaseClient {
    client: WorkflowServiceClient<Channel>,
    envelope: CallEnvelope,
}

impl WorkflowCaseClient {
    pub fn new(channel: Channel, envelope: CallEnvelope) -> Self {
        Self {
            client: WorkflowServiceClient::new(channel),
            envelope,
        }
    }
}

#[async_trait]
impl WorkflowApi for WorkflowCaseClient {
    async fn get_signature(&self, request: GetSignatureRequest) -> Result<Signature, Status> {
        self.envelope
            .unary("WorkflowService/GetSignature", request, |request| {
                let mut client = self.client.clone();
                async move { client.get_signature(request).await }
            })
            .await
    }

    async fn sign_case(&self, request: SignCaseRequest) -> Result<Signature, Status> {
        self.envelope
            .unary("WorkflowService/SignCase", request, |request| {
                let mut client = self.client.clone();
                async move { client.sign_case(request).await }
            })
            .await
    }

    fn get_findings(&self, request: GetFindingsRequest) -> RpcStream<Finding> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "WorkflowService/GetFindings",
            request,
            move |request| async move { client.get_findings(request).await },
        )
    }

    async fn save_finding(
        &self,
        request: SaveFindingRequest,
    ) -> Result<SaveFindingResponse, Status> {
        self.envelope
            .unary("WorkflowService/SaveFinding", request, |request| {
                let mut client = self.client.clone();
                async move { client.save_finding(request).await }
            })
            .await
    }

    async fn return_case_without_action(
        &self,
        request: ReturnCaseWithoutActionRequest,
    ) -> Result<RwoaResult, Status> {
        self.envelope
            .unary("WorkflowService/ReturnCaseWithoutAction", request, |request| {
                let mut client = self.client.clone();
                async move { client.return_case_without_action(request).await }
            })
            .await
    }

    fn get_rwoa_history(&self, request: RefIdRequest) -> RpcStream<RwoaEntry> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "WorkflowService/GetRwoaHistory",
            request,
            move |request| async move { client.get_rwoa_history(request).await },
        )
    }

    async fn add_case_comment(&self, request: AddCaseCommentRequest) -> Result<Ack, Status> {
        self.envelope
            .unary("WorkflowService/AddCaseComment", request, |request| {
                let mut client = self.client.clone();
                async move { client.add_case_comment(request).await }
            })
            .await
    }

    fn get_case_comments(&self, request: RefIdRequest) -> RpcStream<CaseComment> {
        let mut client = self.client.clone();
        self.envelope.server_streaming(
            "WorkflowService/GetCaseComments",
            request,
            move |request| async move { client.get_case_comments(request).await },
        )
    }
}
