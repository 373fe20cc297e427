// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0
//! # Call Envelope
//!
//! The cross-cutting wrapper every workflow client method goes through.
//!
//! ## Unary calls
//!
//! 1. A fresh correlation id (UUID v4) is generated and sent as the
//!    `x-correlation-id` request header.
//! 2. A local timer starts.
//! 3. The call is invoked under the [`RetryPolicy`]; each invocation is
//!    bounded by the per-call timeout, and an elapsed timeout counts as
//!    `DEADLINE_EXCEEDED`.
//! 4. One [`AuditEvent`] is recorded with the outcome.
//! 5. The response, or the last `Status` exactly as the transport returned
//!    it, is handed back to the caller.
//!
//! ## Server-streaming calls
//!
//! Nothing is sent until the returned stream is first polled. Items are
//! yielded in transport order inside a `workflow_client.stream` span. There
//! is no retry; the timeout only bounds opening the stream. One audit event
//! is recorded when the stream ends or fails. Dropping the stream cancels the
//! call.

use chrono::Utc;
use futures::stream::BoxStream;
use futures::{Stream, StreamExt};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tonic::metadata::AsciiMetadataValue;
use tonic::{Response, Status};
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use super::audit::{AuditEvent, AuditSink};
use super::retry::RetryPolicy;

/// Request header carrying the per-call correlation id.
pub const CORRELATION_HEADER: &str = "x-correlation-id";

#[derive(Clone)]
pub struct CallEnvelope {
    retry: Arc<RetryPolicy>,
    timeout: Option<Duration>,
    audit: Arc<dyn AuditSink>,
}

impl CallEnvelope {
    pub fn new(retry: RetryPolicy, timeout: Option<Duration>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            retry: Arc::new(retry),
            timeout,
            audit,
        }
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Run a unary call through retry, timeout and audit.
    ///
    /// `call` is invoked once per attempt with a freshly tagged request.
    pub async fn unary<Req, Resp, F, Fut>(
        &self,
        method: &'static str,
        request: Req,
        mut call: F,
    ) -> Result<Resp, Status>
    where
        Req: Clone + Serialize + Send + Sync,
        Resp: Send,
        F: FnMut(tonic::Request<Req>) -> Fut + Send,
        Fut: Future<Output = Result<Response<Resp>, Status>> + Send,
    {
        let correlation_id = new_correlation_id();
        let started_at = Utc::now();
        let timer = Instant::now();
        let mut attempts = 0u32;

        let span = info_span!("workflow_client.call", rpc.method = method, correlation_id = %correlation_id);
        let result = async {
            loop {
                attempts += 1;
                // No grpc-timeout header: tonic's own deadline would fire as
                // CANCELLED and race the local timer below.
                let outgoing = tagged_request(request.clone(), &correlation_id);

                match self.bounded(call(outgoing)).await {
                    Ok(response) => break Ok(response.into_inner()),
                    Err(status) if self.retry.should_retry(&status, attempts) => {
                        let delay = self.retry.backoff(attempts - 1);
                        warn!(
                            attempt = attempts,
                            code = ?status.code(),
                            delay_ms = delay.as_millis() as u64,
                            "Transient workflow call failure, retrying: {}",
                            status.message()
                        );
                        tokio::time::sleep(delay).await;
                    }
                    Err(status) => break Err(status),
                }
            }
        }
        .instrument(span)
        .await;

        let event = AuditEvent {
            method,
            correlation_id,
            started_at,
            duration_ms: timer.elapsed().as_millis() as u64,
            success: result.is_ok(),
            attempts,
            error_code: None,
            error_message: None,
            items: None,
            payload: payload_json(&request),
        };
        self.complete(event, result.as_ref().err(), timer.elapsed()).await;

        result
    }

    /// Wrap a server-streaming call. The returned stream is lazy.
    pub fn server_streaming<Req, T, S, F, Fut>(
        &self,
        method: &'static str,
        request: Req,
        call: F,
    ) -> BoxStream<'static, Result<T, Status>>
    where
        Req: Serialize + Send + 'static,
        T: Send + 'static,
        S: Stream<Item = Result<T, Status>> + Send + Unpin + 'static,
        F: FnOnce(tonic::Request<Req>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Response<S>, Status>> + Send + 'static,
    {
        let envelope = self.clone();
        let correlation_id = new_correlation_id();
        let span = info_span!("workflow_client.stream", rpc.method = method, correlation_id = %correlation_id);

        let stream = async_stream::stream! {
            let started_at = Utc::now();
            let timer = Instant::now();
            let payload = payload_json(&request);

            let opened = envelope
                .bounded(call(tagged_request(request, &correlation_id)))
                .instrument(span.clone())
                .await;

            let mut items = 0u64;
            let mut failure = None;
            match opened {
                Ok(response) => {
                    let mut inner = response.into_inner();
                    loop {
                        match inner.next().instrument(span.clone()).await {
                            Some(Ok(item)) => {
                                items += 1;
                                yield Ok(item);
                            }
                            Some(Err(status)) => {
                                failure = Some(status);
                                break;
                            }
                            None => break,
                        }
                    }
                }
                Err(status) => failure = Some(status),
            }

            let event = AuditEvent {
                method,
                correlation_id,
                started_at,
                duration_ms: timer.elapsed().as_millis() as u64,
                success: failure.is_none(),
                attempts: 1,
                error_code: None,
                error_message: None,
                items: Some(items),
                payload,
            };
            envelope.complete(event, failure.as_ref(), timer.elapsed()).await;

            if let Some(status) = failure {
                yield Err(status);
            }
        };

        Box::pin(stream)
    }

    async fn bounded<T>(&self, call: impl Future<Output = Result<T, Status>>) -> Result<T, Status> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call).await.unwrap_or_else(|_| {
                Err(Status::deadline_exceeded(format!(
                    "workflow call exceeded {} ms",
                    limit.as_millis()
                )))
            }),
            None => call.await,
        }
    }

    async fn complete(&self, mut event: AuditEvent, failure: Option<&Status>, elapsed: Duration) {
        if let Some(status) = failure {
            event.error_code = Some(format!("{:?}", status.code()));
            event.error_message = Some(status.message().to_string());
        }

        let outcome = if event.success { "success" } else { "failure" };
        metrics::counter!(
            "ect_workflow_client_calls_total",
            "method" => event.method,
            "outcome" => outcome
        )
        .increment(1);
        metrics::histogram!(
            "ect_workflow_client_call_duration_seconds",
            "method" => event.method
        )
        .record(elapsed.as_secs_f64());

        self.audit.record(&event).await;
    }
}

pub fn new_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

fn tagged_request<T>(message: T, correlation_id: &str) -> tonic::Request<T> {
    let mut request = tonic::Request::new(message);
    if let Ok(value) = correlation_id.parse::<AsciiMetadataValue>() {
        request.metadata_mut().insert(CORRELATION_HEADER, value);
    }
    request
}

fn payload_json<T: Serialize>(request: &T) -> serde_json::Value {
    serde_json::to_value(request).unwrap_or(serde_json::Value::Null)
}
