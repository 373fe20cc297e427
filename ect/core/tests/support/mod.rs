// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

//! In-process workflow service used by the integration tests.
//!
//! Serves all six `ect.workflow.v1` services on an ephemeral local port,
//! records every call with its correlation header and lets a test queue
//! failures or a delay per method.

#![allow(dead_code)]

use futures::stream::{self, BoxStream, StreamExt};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::{Channel, Endpoint, Server};
use tonic::{Request, Response, Status};

use ect_core::infrastructure::workflow_client::proto::application_warmup_service_server::{
    ApplicationWarmupService, ApplicationWarmupServiceServer,
};
use ect_core::infrastructure::workflow_client::proto::audit_logging_service_server::{
    AuditLoggingService, AuditLoggingServiceServer,
};
use ect_core::infrastructure::workflow_client::proto::core_user_service_server::{
    CoreUserService, CoreUserServiceServer,
};
use ect_core::infrastructure::workflow_client::proto::core_workflow_service_server::{
    CoreWorkflowService, CoreWorkflowServiceServer,
};
use ect_core::infrastructure::workflow_client::proto::workflow_service_server::{
    WorkflowService, WorkflowServiceServer,
};
use ect_core::infrastructure::workflow_client::proto::workstatus_service_server::{
    WorkstatusService, WorkstatusServiceServer,
};
use ect_core::infrastructure::workflow_client::proto::*;
use ect_core::infrastructure::workflow_client::CORRELATION_HEADER;

type MockStream<T> = BoxStream<'static, Result<T, Status>>;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub correlation_id: Option<String>,
}

#[derive(Default)]
struct MockState {
    calls: Mutex<Vec<RecordedCall>>,
    failures: Mutex<HashMap<String, VecDeque<Status>>>,
    delays: Mutex<HashMap<String, Duration>>,
    warmup_processes: Mutex<Vec<WarmupProcess>>,
    failing_warmups: Mutex<HashSet<i64>>,
}

#[derive(Clone, Default)]
pub struct MockWorkflowService {
    state: Arc<MockState>,
}

impl MockWorkflowService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next invocation of `method` with `status`. Queued failures
    /// are consumed in order.
    pub fn fail_next(&self, method: &str, status: Status) {
        self.state
            .failures
            .lock()
            .entry(method.to_string())
            .or_default()
            .push_back(status);
    }

    pub fn delay(&self, method: &str, delay: Duration) {
        self.state.delays.lock().insert(method.to_string(), delay);
    }

    pub fn with_warmup_processes(&self, processes: Vec<WarmupProcess>) {
        *self.state.warmup_processes.lock() = processes;
    }

    /// Make `ExecuteWarmupProcess` return UNAVAILABLE for `process_id`.
    pub fn fail_warmup(&self, process_id: i64) {
        self.state.failing_warmups.lock().insert(process_id);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().clone()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.state
            .calls
            .lock()
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    async fn enter<T>(&self, method: &str, request: &Request<T>) -> Result<(), Status> {
        let correlation_id = request
            .metadata()
            .get(CORRELATION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        self.state.calls.lock().push(RecordedCall {
            method: method.to_string(),
            correlation_id,
        });

        let delay = self.state.delays.lock().get(method).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self
            .state
            .failures
            .lock()
            .get_mut(method)
            .and_then(VecDeque::pop_front);
        match failure {
            Some(status) => Err(status),
            None => Ok(()),
        }
    }

    /// Serve every service on 127.0.0.1 and return a connected channel.
    pub async fn spawn(&self) -> (SocketAddr, Channel) {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let incoming = TcpListenerStream::new(listener);

        let service = self.clone();
        tokio::spawn(async move {
            Server::builder()
                .add_service(CoreUserServiceServer::new(service.clone()))
                .add_service(CoreWorkflowServiceServer::new(service.clone()))
                .add_service(WorkflowServiceServer::new(service.clone()))
                .add_service(WorkstatusServiceServer::new(service.clone()))
                .add_service(ApplicationWarmupServiceServer::new(service.clone()))
                .add_service(AuditLoggingServiceServer::new(service))
                .serve_with_incoming(incoming)
                .await
                .unwrap();
        });

        let channel = Endpoint::from_shared(format!("http://{}", addr))
            .unwrap()
            .connect()
            .await
            .unwrap();
        (addr, channel)
    }
}

fn items<T: Send + 'static>(values: Vec<T>) -> MockStream<T> {
    stream::iter(values.into_iter().map(Ok)).boxed()
}

pub fn user(user_id: i32) -> User {
    User {
        user_id,
        username: format!("user{}", user_id),
        edipin: format!("{:010}", user_id),
        first_name: "Jordan".to_string(),
        last_name: "Rivera".to_string(),
        rank: "MSgt".to_string(),
        pas_code: "KX1A".to_string(),
        email: format!("user{}@example.mil", user_id),
        current_role_id: 7,
        account_status: "Active".to_string(),
    }
}

fn ack() -> Ack {
    Ack {
        success: true,
        message: String::new(),
    }
}

fn reasons(kind: &str) -> Vec<ReturnReason> {
    (1..=2)
        .map(|reason_id| ReturnReason {
            reason_id,
            description: format!("{} reason {}", kind, reason_id),
            reason_type: kind.to_string(),
        })
        .collect()
}

#[tonic::async_trait]
impl CoreUserService for MockWorkflowService {
    async fn get_user_by_id(&self, request: Request<GetUserByIdRequest>) -> Result<Response<User>, Status> {
        self.enter("GetUserById", &request).await?;
        let user_id = request.into_inner().user_id;
        if user_id <= 0 {
            return Err(Status::not_found(format!("user {} does not exist", user_id)));
        }
        Ok(Response::new(user(user_id)))
    }

    async fn get_user_by_edipin(
        &self,
        request: Request<GetUserByEdipinRequest>,
    ) -> Result<Response<User>, Status> {
        self.enter("GetUserByEdipin", &request).await?;
        let edipin = request.into_inner().edipin;
        let mut found = user(edipin.parse().unwrap_or(1));
        found.edipin = edipin;
        Ok(Response::new(found))
    }

    async fn get_user_roles(
        &self,
        request: Request<GetUserRolesRequest>,
    ) -> Result<Response<UserRoleList>, Status> {
        self.enter("GetUserRoles", &request).await?;
        let roles = vec![
            UserRole {
                user_role_id: 1,
                group_id: 2,
                group_name: "Medical Officer".to_string(),
                status: "Approved".to_string(),
                active: true,
            },
            UserRole {
                user_role_id: 2,
                group_id: 5,
                group_name: "Unit Commander".to_string(),
                status: "Pending".to_string(),
                active: false,
            },
        ];
        Ok(Response::new(UserRoleList { roles }))
    }

    async fn update_user_login(
        &self,
        request: Request<UpdateUserLoginRequest>,
    ) -> Result<Response<Ack>, Status> {
        self.enter("UpdateUserLogin", &request).await?;
        Ok(Response::new(ack()))
    }

    async fn get_user_alt_title(
        &self,
        request: Request<GetUserAltTitleRequest>,
    ) -> Result<Response<UserAltTitle>, Status> {
        self.enter("GetUserAltTitle", &request).await?;
        Ok(Response::new(UserAltTitle {
            title: "Acting Wing Surgeon".to_string(),
        }))
    }

    async fn update_user_alt_title(
        &self,
        request: Request<UpdateUserAltTitleRequest>,
    ) -> Result<Response<Ack>, Status> {
        self.enter("UpdateUserAltTitle", &request).await?;
        Ok(Response::new(ack()))
    }

    type SearchUsersStream = MockStream<User>;

    async fn search_users(
        &self,
        request: Request<SearchUsersRequest>,
    ) -> Result<Response<Self::SearchUsersStream>, Status> {
        self.enter("SearchUsers", &request).await?;
        Ok(Response::new(items((1..=3).map(user).collect())))
    }

    type GetManagedUsersStream = MockStream<ManagedUser>;

    async fn get_managed_users(
        &self,
        request: Request<GetManagedUsersRequest>,
    ) -> Result<Response<Self::GetManagedUsersStream>, Status> {
        self.enter("GetManagedUsers", &request).await?;
        let managed = (10..12)
            .map(|user_id| ManagedUser {
                user_id,
                name: format!("Member {}", user_id),
                role: "Unit Commander".to_string(),
                status: "Active".to_string(),
                pas_code: "KX1A".to_string(),
            })
            .collect();
        Ok(Response::new(items(managed)))
    }
}

#[tonic::async_trait]
impl CoreWorkflowService for MockWorkflowService {
    async fn get_workflow_by_id(
        &self,
        request: Request<WorkflowByIdRequest>,
    ) -> Result<Response<WorkflowDefinition>, Status> {
        self.enter("GetWorkflowById", &request).await?;
        let workflow_id = request.into_inner().workflow_id;
        Ok(Response::new(WorkflowDefinition {
            workflow_id,
            module_id: 2,
            title: "Line of Duty".to_string(),
            compo: "6".to_string(),
            is_formal: false,
            initial_status: 1,
            active: true,
        }))
    }

    async fn get_workflow_title(
        &self,
        request: Request<GetWorkflowTitleRequest>,
    ) -> Result<Response<WorkflowTitle>, Status> {
        self.enter("GetWorkflowTitle", &request).await?;
        Ok(Response::new(WorkflowTitle {
            title: "Informal LOD".to_string(),
        }))
    }

    async fn get_workflow_initial_status_code(
        &self,
        request: Request<GetWorkflowInitialStatusCodeRequest>,
    ) -> Result<Response<WorkStatusCode>, Status> {
        self.enter("GetWorkflowInitialStatusCode", &request).await?;
        let module_id = request.into_inner().module_id;
        Ok(Response::new(WorkStatusCode {
            status_id: 1,
            description: "Medical Technician Review".to_string(),
            module_id,
            ..Default::default()
        }))
    }

    type GetWorkflowsByModuleStream = MockStream<WorkflowDefinition>;

    async fn get_workflows_by_module(
        &self,
        request: Request<GetWorkflowsByModuleRequest>,
    ) -> Result<Response<Self::GetWorkflowsByModuleStream>, Status> {
        self.enter("GetWorkflowsByModule", &request).await?;
        let module_id = request.into_inner().module_id;
        let workflows = (1..=2)
            .map(|workflow_id| WorkflowDefinition {
                workflow_id,
                module_id,
                title: format!("Workflow {}", workflow_id),
                active: true,
                ..Default::default()
            })
            .collect();
        Ok(Response::new(items(workflows)))
    }

    type GetWorkflowStepsStream = MockStream<WorkflowStep>;

    async fn get_workflow_steps(
        &self,
        request: Request<WorkflowByIdRequest>,
    ) -> Result<Response<Self::GetWorkflowStepsStream>, Status> {
        self.enter("GetWorkflowSteps", &request).await?;
        let workflow_id = request.into_inner().workflow_id;
        let steps = (1..=3)
            .map(|step_id| WorkflowStep {
                step_id,
                workflow_id,
                ws_status_in: step_id,
                ws_status_out: step_id + 1,
                display_text: format!("Step {}", step_id),
                active: true,
                display_order: step_id,
                ..Default::default()
            })
            .collect();
        Ok(Response::new(items(steps)))
    }

    type GetStepActionsStream = MockStream<WorkflowAction>;

    async fn get_step_actions(
        &self,
        request: Request<GetStepActionsRequest>,
    ) -> Result<Response<Self::GetStepActionsStream>, Status> {
        self.enter("GetStepActions", &request).await?;
        let step_id = request.into_inner().step_id;
        Ok(Response::new(items(vec![WorkflowAction {
            action_id: 1,
            step_id,
            action_type: 3,
            target: 0,
            data: 0,
        }])))
    }

    type GetReturnReasonsStream = MockStream<ReturnReason>;

    async fn get_return_reasons(
        &self,
        request: Request<WorkflowByIdRequest>,
    ) -> Result<Response<Self::GetReturnReasonsStream>, Status> {
        self.enter("GetReturnReasons", &request).await?;
        Ok(Response::new(items(reasons("return"))))
    }

    type GetRwoaReasonsStream = MockStream<ReturnReason>;

    async fn get_rwoa_reasons(
        &self,
        request: Request<WorkflowByIdRequest>,
    ) -> Result<Response<Self::GetRwoaReasonsStream>, Status> {
        self.enter("GetRwoaReasons", &request).await?;
        Ok(Response::new(items(reasons("rwoa"))))
    }

    type GetCancelReasonsStream = MockStream<ReturnReason>;

    async fn get_cancel_reasons(
        &self,
        request: Request<GetCancelReasonsRequest>,
    ) -> Result<Response<Self::GetCancelReasonsStream>, Status> {
        self.enter("GetCancelReasons", &request).await?;
        Ok(Response::new(items(reasons("cancel"))))
    }
}

#[tonic::async_trait]
impl WorkflowService for MockWorkflowService {
    async fn get_signature(
        &self,
        request: Request<GetSignatureRequest>,
    ) -> Result<Response<Signature>, Status> {
        self.enter("GetSignature", &request).await?;
        let request = request.into_inner();
        Ok(Response::new(Signature {
            signature_id: 900,
            ref_id: request.ref_id,
            ptype: request.ptype,
            signed_by_name: "Maj Avery Chen".to_string(),
            ..Default::default()
        }))
    }

    async fn sign_case(&self, request: Request<SignCaseRequest>) -> Result<Response<Signature>, Status> {
        self.enter("SignCase", &request).await?;
        let request = request.into_inner();
        Ok(Response::new(Signature {
            signature_id: 901,
            ref_id: request.ref_id,
            user_group: request.user_group,
            signed_by: request.user_id,
            signature_block: request.signature_block,
            ptype: request.ptype,
            ..Default::default()
        }))
    }

    type GetFindingsStream = MockStream<Finding>;

    async fn get_findings(
        &self,
        request: Request<GetFindingsRequest>,
    ) -> Result<Response<Self::GetFindingsStream>, Status> {
        self.enter("GetFindings", &request).await?;
        let ref_id = request.into_inner().ref_id;
        let findings = (1..=2)
            .map(|finding_id| Finding {
                finding_id,
                ref_id,
                ptype: finding_id,
                finding: 1,
                ..Default::default()
            })
            .collect();
        Ok(Response::new(items(findings)))
    }

    async fn save_finding(
        &self,
        request: Request<SaveFindingRequest>,
    ) -> Result<Response<SaveFindingResponse>, Status> {
        self.enter("SaveFinding", &request).await?;
        let finding = request
            .into_inner()
            .finding
            .ok_or_else(|| Status::invalid_argument("finding is required"))?;
        let finding_id = if finding.finding_id == 0 { 77 } else { finding.finding_id };
        Ok(Response::new(SaveFindingResponse { finding_id }))
    }

    async fn return_case_without_action(
        &self,
        request: Request<ReturnCaseWithoutActionRequest>,
    ) -> Result<Response<RwoaResult>, Status> {
        self.enter("ReturnCaseWithoutAction", &request).await?;
        Ok(Response::new(RwoaResult {
            rwoa_id: 12,
            new_status: 4,
        }))
    }

    type GetRwoaHistoryStream = MockStream<RwoaEntry>;

    async fn get_rwoa_history(
        &self,
        request: Request<RefIdRequest>,
    ) -> Result<Response<Self::GetRwoaHistoryStream>, Status> {
        self.enter("GetRwoaHistory", &request).await?;
        Ok(Response::new(items(Vec::new())))
    }

    async fn add_case_comment(
        &self,
        request: Request<AddCaseCommentRequest>,
    ) -> Result<Response<Ack>, Status> {
        self.enter("AddCaseComment", &request).await?;
        if request.get_ref().comment.trim().is_empty() {
            return Err(Status::invalid_argument("comment is empty"));
        }
        Ok(Response::new(ack()))
    }

    type GetCaseCommentsStream = MockStream<CaseComment>;

    async fn get_case_comments(
        &self,
        request: Request<RefIdRequest>,
    ) -> Result<Response<Self::GetCaseCommentsStream>, Status> {
        self.enter("GetCaseComments", &request).await?;
        let ref_id = request.into_inner().ref_id;
        Ok(Response::new(items(vec![CaseComment {
            comment_id: 1,
            ref_id,
            comment: "Forwarded to board".to_string(),
            ..Default::default()
        }])))
    }
}

#[tonic::async_trait]
impl WorkstatusService for MockWorkflowService {
    async fn get_workstatus_by_id(
        &self,
        request: Request<GetWorkstatusByIdRequest>,
    ) -> Result<Response<Workstatus>, Status> {
        self.enter("GetWorkstatusById", &request).await?;
        let ws_id = request.into_inner().ws_id;
        Ok(Response::new(Workstatus {
            ws_id,
            workflow_id: 1,
            status_id: 3,
            description: "Wing JA Review".to_string(),
            ..Default::default()
        }))
    }

    async fn get_workstatus_by_status_code(
        &self,
        request: Request<GetWorkstatusByStatusCodeRequest>,
    ) -> Result<Response<Workstatus>, Status> {
        self.enter("GetWorkstatusByStatusCode", &request).await?;
        let request = request.into_inner();
        Ok(Response::new(Workstatus {
            ws_id: 30 + request.status_id,
            workflow_id: request.workflow_id,
            status_id: request.status_id,
            ..Default::default()
        }))
    }

    type GetWorkstatusesByWorkflowStream = MockStream<Workstatus>;

    async fn get_workstatuses_by_workflow(
        &self,
        request: Request<WorkflowByIdRequest>,
    ) -> Result<Response<Self::GetWorkstatusesByWorkflowStream>, Status> {
        self.enter("GetWorkstatusesByWorkflow", &request).await?;
        let workflow_id = request.into_inner().workflow_id;
        let statuses = (1..=4)
            .map(|ws_id| Workstatus {
                ws_id,
                workflow_id,
                display_order: ws_id,
                ..Default::default()
            })
            .collect();
        Ok(Response::new(items(statuses)))
    }

    type GetStatusCodesStream = MockStream<WorkStatusCode>;

    async fn get_status_codes(
        &self,
        request: Request<GetStatusCodesRequest>,
    ) -> Result<Response<Self::GetStatusCodesStream>, Status> {
        self.enter("GetStatusCodes", &request).await?;
        let module_id = request.into_inner().module_id;
        let codes = (1..=2)
            .map(|status_id| WorkStatusCode {
                status_id,
                module_id,
                ..Default::default()
            })
            .collect();
        Ok(Response::new(items(codes)))
    }

    type GetWorkstatusOptionsStream = MockStream<WorkstatusOption>;

    async fn get_workstatus_options(
        &self,
        request: Request<GetWorkstatusOptionsRequest>,
    ) -> Result<Response<Self::GetWorkstatusOptionsStream>, Status> {
        self.enter("GetWorkstatusOptions", &request).await?;
        let ws_id = request.into_inner().ws_id;
        Ok(Response::new(items(vec![WorkstatusOption {
            option_id: 1,
            ws_id,
            ws_id_out: ws_id + 1,
            display_text: "Forward to Approving Authority".to_string(),
            active: true,
            ..Default::default()
        }])))
    }

    async fn change_workstatus(
        &self,
        request: Request<ChangeWorkstatusRequest>,
    ) -> Result<Response<ChangeWorkstatusResponse>, Status> {
        self.enter("ChangeWorkstatus", &request).await?;
        let request = request.into_inner();
        Ok(Response::new(ChangeWorkstatusResponse {
            changed: true,
            ws_id: request.new_ws_id,
            status_description: "Approving Authority Review".to_string(),
            tracking_id: 5001,
        }))
    }

    type GetWorkstatusHistoryStream = MockStream<WorkstatusHistoryEntry>;

    async fn get_workstatus_history(
        &self,
        request: Request<RefIdRequest>,
    ) -> Result<Response<Self::GetWorkstatusHistoryStream>, Status> {
        self.enter("GetWorkstatusHistory", &request).await?;
        let ref_id = request.into_inner().ref_id;
        let history: Vec<Result<WorkstatusHistoryEntry, Status>> = (1..=3)
            .map(|tracking_id| {
                Ok(WorkstatusHistoryEntry {
                    tracking_id,
                    ref_id,
                    ws_id: tracking_id,
                    status_description: format!("Status {}", tracking_id),
                    changed_by: "user42".to_string(),
                    changed_date: format!("2026-01-0{}T08:00:00Z", tracking_id),
                    days_in_status: tracking_id,
                })
            })
            .collect();

        // A negative reference id ends the stream with an error after the data
        let stream = if ref_id < 0 {
            stream::iter(history)
                .chain(stream::once(async { Err(Status::data_loss("history truncated")) }))
                .boxed()
        } else {
            stream::iter(history).boxed()
        };
        Ok(Response::new(stream))
    }
}

#[tonic::async_trait]
impl ApplicationWarmupService for MockWorkflowService {
    type GetWarmupProcessesStream = MockStream<WarmupProcess>;

    async fn get_warmup_processes(
        &self,
        request: Request<GetWarmupProcessesRequest>,
    ) -> Result<Response<Self::GetWarmupProcessesStream>, Status> {
        self.enter("GetWarmupProcesses", &request).await?;
        let active_only = request.into_inner().active_only;
        let processes = self
            .state
            .warmup_processes
            .lock()
            .iter()
            .filter(|process| process.active || !active_only)
            .cloned()
            .collect();
        Ok(Response::new(items(processes)))
    }

    async fn execute_warmup_process(
        &self,
        request: Request<ExecuteWarmupProcessRequest>,
    ) -> Result<Response<WarmupExecution>, Status> {
        self.enter("ExecuteWarmupProcess", &request).await?;
        let process_id = request.into_inner().process_id;
        if self.state.failing_warmups.lock().contains(&process_id) {
            return Err(Status::unavailable(format!("warm-up {} unreachable", process_id)));
        }
        Ok(Response::new(WarmupExecution {
            process_id,
            succeeded: true,
            message: "cache primed".to_string(),
            duration_ms: 15,
            executed_at: "2026-03-01T06:00:00Z".to_string(),
        }))
    }

    type GetWarmupLogsStream = MockStream<WarmupLogEntry>;

    async fn get_warmup_logs(
        &self,
        request: Request<GetWarmupLogsRequest>,
    ) -> Result<Response<Self::GetWarmupLogsStream>, Status> {
        self.enter("GetWarmupLogs", &request).await?;
        let request = request.into_inner();
        let logs = (1..=request.max_entries.max(0) as i64)
            .map(|log_id| WarmupLogEntry {
                log_id,
                process_id: request.process_id,
                succeeded: true,
                ..Default::default()
            })
            .collect();
        Ok(Response::new(items(logs)))
    }

    async fn delete_warmup_logs(
        &self,
        request: Request<DeleteWarmupLogsRequest>,
    ) -> Result<Response<DeleteWarmupLogsResponse>, Status> {
        self.enter("DeleteWarmupLogs", &request).await?;
        Ok(Response::new(DeleteWarmupLogsResponse { deleted: 4 }))
    }
}

#[tonic::async_trait]
impl AuditLoggingService for MockWorkflowService {
    async fn record_audit_event(
        &self,
        request: Request<RecordAuditEventRequest>,
    ) -> Result<Response<Ack>, Status> {
        self.enter("RecordAuditEvent", &request).await?;
        Ok(Response::new(ack()))
    }

    async fn record_user_action(
        &self,
        request: Request<RecordUserActionRequest>,
    ) -> Result<Response<Ack>, Status> {
        self.enter("RecordUserAction", &request).await?;
        Ok(Response::new(ack()))
    }

    type GetAuditEventsByCorrelationIdStream = MockStream<AuditEventRecord>;

    async fn get_audit_events_by_correlation_id(
        &self,
        request: Request<GetAuditEventsByCorrelationIdRequest>,
    ) -> Result<Response<Self::GetAuditEventsByCorrelationIdStream>, Status> {
        self.enter("GetAuditEventsByCorrelationId", &request).await?;
        let correlation_id = request.into_inner().correlation_id;
        Ok(Response::new(items(vec![AuditEventRecord {
            audit_id: 1,
            correlation_id,
            method: "WorkstatusService/ChangeWorkstatus".to_string(),
            success: true,
            ..Default::default()
        }])))
    }

    type GetUserActionsStream = MockStream<UserActionRecord>;

    async fn get_user_actions(
        &self,
        request: Request<GetUserActionsRequest>,
    ) -> Result<Response<Self::GetUserActionsStream>, Status> {
        self.enter("GetUserActions", &request).await?;
        let user_id = request.into_inner().user_id;
        let actions = (1..=2)
            .map(|action_log_id| UserActionRecord {
                action_log_id,
                user_id,
                action_name: "Sign".to_string(),
                ..Default::default()
            })
            .collect();
        Ok(Response::new(items(actions)))
    }
}
