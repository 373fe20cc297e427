// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! Functional-area contracts of the workflow service.
//!
//! Each trait mirrors one gRPC service. Unary methods return the response
//! message; server-streaming methods return a lazy [`RpcStream`]. Errors are
//! the transport's `Status`, unchanged.

use async_trait::async_trait;
use futures::stream::BoxStream;
use tonic::Status;

use super::proto::*;

/// Lazy stream of server-streamed items.
pub type RpcStream<T> = BoxStream<'static, Result<T, Status>>;

/// Users, roles and alternate titles.
#[async_trait]
pub trait CoreUserApi: Send + Sync {
    async fn get_user_by_id(&self, request: GetUserByIdRequest) -> Result<User, Status>;
    async fn get_user_by_edipin(&self, request: GetUserByEdipinRequest) -> Result<User, Status>;
    async fn get_user_roles(&self, request: GetUserRolesRequest) -> Result<UserRoleList, Status>;
    async fn update_user_login(&self, request: UpdateUserLoginRequest) -> Result<Ack, Status>;
    async fn get_user_alt_title(&self, request: GetUserAltTitleRequest) -> Result<UserAltTitle, Status>;
    async fn update_user_alt_title(&self, request: UpdateUserAltTitleRequest) -> Result<Ack, Status>;
    fn search_users(&self, request: SearchUsersRequest) -> RpcStream<User>;
    fn get_managed_users(&self, request: GetManagedUsersRequest) -> RpcStream<ManagedUser>;
}

/// Workflow definitions, steps, actions and reason lists.
#[async_trait]
pub trait CoreWorkflowApi: Send + Sync {
    async fn get_workflow_by_id(&self, request: WorkflowByIdRequest) -> Result<WorkflowDefinition, Status>;
    async fn get_workflow_title(&self, request: GetWorkflowTitleRequest) -> Result<WorkflowTitle, Status>;
    async fn get_workflow_initial_status_code(
        &self,
        request: GetWorkflowInitialStatusCodeRequest,
    ) -> Result<WorkStatusCode, Status>;
    fn get_workflows_by_module(&self, request: GetWorkflowsByModuleRequest) -> RpcStream<WorkflowDefinition>;
    fn get_workflow_steps(&self, request: WorkflowByIdRequest) -> RpcStream<WorkflowStep>;
    fn get_step_actions(&self, request: GetStepActionsRequest) -> RpcStream<WorkflowAction>;
    fn get_return_reasons(&self, request: WorkflowByIdRequest) -> RpcStream<ReturnReason>;
    fn get_rwoa_reasons(&self, request: WorkflowByIdRequest) -> RpcStream<ReturnReason>;
    fn get_cancel_reasons(&self, request: GetCancelReasonsRequest) -> RpcStream<ReturnReason>;
}

/// Case-level operations: signatures, findings, RWOA and comments.
#[async_trait]
pub trait WorkflowApi: Send + Sync {
    async fn get_signature(&self, request: GetSignatureRequest) -> Result<Signature, Status>;
    async fn sign_case(&self, request: SignCaseRequest) -> Result<Signature, Status>;
    fn get_findings(&self, request: GetFindingsRequest) -> RpcStream<Finding>;
    async fn save_finding(&self, request: SaveFindingRequest) -> Result<SaveFindingResponse, Status>;
    async fn return_case_without_action(
        &self,
        request: ReturnCaseWithoutActionRequest,
    ) -> Result<RwoaResult, Status>;
    fn get_rwoa_history(&self, request: RefIdRequest) -> RpcStream<RwoaEntry>;
    async fn add_case_comment(&self, request: AddCaseCommentRequest) -> Result<Ack, Status>;
    fn get_case_comments(&self, request: RefIdRequest) -> RpcStream<CaseComment>;
}

/// Work statuses, their options and case status history.
#[async_trait]
pub trait WorkstatusApi: Send + Sync {
    async fn get_workstatus_by_id(&self, request: GetWorkstatusByIdRequest) -> Result<Workstatus, Status>;
    async fn get_workstatus_by_status_code(
        &self,
        request: GetWorkstatusByStatusCodeRequest,
    ) -> Result<Workstatus, Status>;
    fn get_workstatuses_by_workflow(&self, request: WorkflowByIdRequest) -> RpcStream<Workstatus>;
    fn get_status_codes(&self, request: GetStatusCodesRequest) -> RpcStream<WorkStatusCode>;
    fn get_workstatus_options(&self, request: GetWorkstatusOptionsRequest) -> RpcStream<WorkstatusOption>;
    async fn change_workstatus(&self, request: ChangeWorkstatusRequest) -> Result<ChangeWorkstatusResponse, Status>;
    fn get_workstatus_history(&self, request: RefIdRequest) -> RpcStream<WorkstatusHistoryEntry>;
}

/// Cache warm-up processes hosted by the service.
#[async_trait]
pub trait ApplicationWarmupApi: Send + Sync {
    fn get_warmup_processes(&self, request: GetWarmupProcessesRequest) -> RpcStream<WarmupProcess>;
    async fn execute_warmup_process(
        &self,
        request: ExecuteWarmupProcessRequest,
    ) -> Result<WarmupExecution, Status>;
    fn get_warmup_logs(&self, request: GetWarmupLogsRequest) -> RpcStream<WarmupLogEntry>;
    async fn delete_warmup_logs(&self, request: DeleteWarmupLogsRequest) -> Result<DeleteWarmupLogsResponse, Status>;
}

/// Server-side audit and user action trail.
#[async_trait]
pub trait AuditLoggingApi: Send + Sync {
    async fn record_audit_event(&self, request: RecordAuditEventRequest) -> Result<Ack, Status>;
    async fn record_user_action(&self, request: RecordUserActionRequest) -> Result<Ack, Status>;
    fn get_audit_events_by_correlation_id(
        &self,
        request: GetAuditEventsByCorrelationIdRequest,
    ) -> RpcStream<AuditEventRecord>;
    fn get_user_actions(&self, request: GetUserActionsRequest) -> RpcStream<UserActionRecord>;
}
