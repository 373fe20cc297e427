// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

//! Logging and metrics setup for the `ect` binary.
//!
//! - `RUST_LOG` wins over the configured or `--log-level` filter
//! - `observability.logging.format: json` switches to JSON lines on stderr
//! - `observability.tracing.enabled` bridges log records to an OTLP collector
//! - `observability.metrics.enabled` serves Prometheus metrics on the
//!   configured port

use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusBuilder;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::{LogExporter, WithExportConfig};
use opentelemetry_sdk::logs::SdkLoggerProvider;
use opentelemetry_sdk::Resource;
use std::net::{Ipv4Addr, SocketAddr};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use ect_core::config::ObservabilityConfig;

const SERVICE_NAME: &str = "ect";

/// Flushes exporters on drop.
pub struct TelemetryGuard {
    logger_provider: Option<SdkLoggerProvider>,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.logger_provider.take() {
            if let Err(e) = provider.shutdown() {
                eprintln!("Failed to flush OTLP logs: {}", e);
            }
        }
    }
}

/// Plain stderr subscriber for the work that has to happen before [`init`],
/// namely loading the configuration [`init`] is built from. Use it through
/// `tracing::subscriber::with_default`.
pub fn bootstrap_subscriber(level: &str) -> impl tracing::Subscriber + Send + Sync {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact(),
    )
}

/// Install the global subscriber and, when enabled, the metrics recorder.
///
/// `level` is the fallback filter directive when `RUST_LOG` is unset.
pub fn init(level: &str, config: &ObservabilityConfig) -> Result<TelemetryGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    let json = config.logging.format.eq_ignore_ascii_case("json");
    let json_layer = json.then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!json).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
    });

    let logger_provider = if config.tracing.enabled {
        Some(otlp_logger_provider(config.tracing.otlp_endpoint.as_deref())?)
    } else {
        None
    };
    let otel_layer = logger_provider.as_ref().map(OpenTelemetryTracingBridge::new);

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .with(otel_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if config.metrics.enabled {
        install_prometheus(config.metrics.port)?;
    }

    Ok(TelemetryGuard { logger_provider })
}

fn otlp_logger_provider(endpoint: Option<&str>) -> Result<SdkLoggerProvider> {
    let endpoint = endpoint.context("observability.tracing.otlp_endpoint is required when tracing is enabled")?;

    let exporter = LogExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .context("Failed to build OTLP log exporter")?;

    Ok(SdkLoggerProvider::builder()
        .with_resource(Resource::builder().with_service_name(SERVICE_NAME).build())
        .with_batch_exporter(exporter)
        .build())
}

fn install_prometheus(port: u16) -> Result<()> {
    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    PrometheusBuilder::new()
        .with_http_listener(address)
        .install()
        .with_context(|| format!("Failed to start Prometheus exporter on {}", address))?;

    metrics::describe_counter!(
        "ect_workflow_client_calls_total",
        "Workflow service calls by method and outcome"
    );
    metrics::describe_histogram!(
        "ect_workflow_client_call_duration_seconds",
        metrics::Unit::Seconds,
        "Workflow service call duration, retries included"
    );

    tracing::info!(%address, "Prometheus metrics endpoint listening");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_subscriber_honours_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        tracing::subscriber::with_default(bootstrap_subscriber("warn"), || {
            assert!(tracing::enabled!(tracing::Level::WARN));
            assert!(!tracing::enabled!(tracing::Level::INFO));
        });
    }
}
