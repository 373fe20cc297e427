// Copyright (c) 2026 ECT Development Team
// SPDX-License-Identifier: AGPL-3.0

// Client Configuration Types
//
// Defines the configuration schema for ECT service clients, including:
// - Kubernetes-style manifest format (apiVersion/kind/metadata/spec)
// - Workflow service endpoint and per-call timeout
// - Retry policy bounds for transient RPC failures
// - Database connection for the staging/production tables
// - Logging, metrics and tracing settings

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const API_VERSION: &str = "ect/v1";
pub const KIND: &str = "ClientConfig";

/// Top-level Kubernetes-style client configuration manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EctConfig {
    /// API version (must be "ect/v1")
    #[serde(rename = "apiVersion")]
    pub api_version: String,

    /// Resource kind (must be "ClientConfig")
    pub kind: String,

    /// Client metadata (name, labels)
    pub metadata: ManifestMetadata,

    /// Client configuration specification
    #[serde(default)]
    pub spec: EctConfigSpec,
}

/// Manifest metadata (Kubernetes-style)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Human-readable client name
    pub name: String,

    /// Optional: Labels for categorization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

/// Client configuration specification (content under spec:)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EctConfigSpec {
    /// Remote workflow service
    #[serde(default)]
    pub service: ServiceConfig,

    /// Retry policy for unary calls
    #[serde(default)]
    pub retry: RetryConfig,

    /// Relational database holding the mapped tables
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// gRPC endpoint of the workflow service (e.g. "http://localhost:50051")
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Connection establishment timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,

    /// Per-call timeout in seconds, applied to every attempt
    #[serde(default = "default_call_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            connect_timeout_seconds: default_connect_timeout(),
            timeout_seconds: default_call_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt (total invocations = max_retry_attempts + 1)
    #[serde(default = "default_max_retries")]
    pub max_retry_attempts: u32,

    /// Delay before the first retry in milliseconds; doubles on every retry
    #[serde(default = "default_base_delay")]
    pub base_delay_ms: u64,

    /// Upper bound for a single backoff delay in milliseconds
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retry_attempts: default_max_retries(),
            base_delay_ms: default_base_delay(),
            max_delay_ms: default_max_delay(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL (postgres://... or sqlite:...)
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Metrics configuration
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Tracing configuration
    #[serde(default)]
    pub tracing: TracingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (e.g., "info", "debug", "trace")
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format ("json" or "text")
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Enable the Prometheus exposition endpoint
    #[serde(default)]
    pub enabled: bool,

    /// Metrics endpoint port
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            port: default_metrics_port(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TracingConfig {
    /// Enable OTLP export of log records
    #[serde(default)]
    pub enabled: bool,

    /// OpenTelemetry collector endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otlp_endpoint: Option<String>,
}

// Default value functions
fn default_endpoint() -> String {
    "http://localhost:50051".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_call_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_base_delay() -> u64 {
    200
}

fn default_max_delay() -> u64 {
    5000
}

fn default_database_url() -> String {
    "sqlite::memory:".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_metrics_port() -> u16 {
    9090
}

impl Default for EctConfig {
    fn default() -> Self {
        let hostname = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "ect-client".to_string());

        Self {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata: ManifestMetadata {
                name: hostname,
                labels: None,
            },
            spec: EctConfigSpec::default(),
        }
    }
}

impl EctConfig {
    /// Load configuration from YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to YAML file
    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Parse configuration from YAML string
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Candidate configuration files, in precedence order
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(path) = std::env::var("ECT_CONFIG_PATH") {
            paths.push(PathBuf::from(path));
        }

        paths.push(PathBuf::from("./ect-config.yaml"));

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".ect").join("config.yaml"));
        }

        #[cfg(unix)]
        paths.push(PathBuf::from("/etc/ect/config.yaml"));
        #[cfg(windows)]
        paths.push(PathBuf::from("C:\\ProgramData\\Ect\\config.yaml"));

        paths
    }

    /// Discover configuration file using precedence order
    /// 1. ECT_CONFIG_PATH environment variable
    /// 2. ./ect-config.yaml (working directory)
    /// 3. ~/.ect/config.yaml (user home)
    /// 4. /etc/ect/config.yaml (system, Unix) or C:\ProgramData\Ect\config.yaml (Windows)
    pub fn discover_config() -> Option<PathBuf> {
        Self::search_paths().into_iter().find(|path| path.exists())
    }

    /// Load configuration with discovery, fallback to default
    pub fn load_or_default(cli_path: Option<PathBuf>) -> anyhow::Result<Self> {
        // 1. Explicit CLI path (Fail if missing/invalid)
        if let Some(path) = cli_path {
            tracing::info!("Loading configuration from explicit path: {:?}", path);
            let mut config = Self::from_yaml_file(&path).map_err(|e| {
                anyhow::anyhow!("Failed to load config at {:?}: {}", path, e)
            })?;
            config.apply_env_overrides();
            return Ok(config);
        }

        // 2. Discovery (Env -> Cwd -> Home -> System)
        if let Some(config_path) = Self::discover_config() {
            tracing::info!("Loading configuration from discovered path: {:?}", config_path);
            let mut config = Self::from_yaml_file(config_path)?;
            config.apply_env_overrides();
            Ok(config)
        } else {
            tracing::warn!("No configuration file found in standard locations. Using defaults.");
            let mut config = Self::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }

    /// Apply environment variable overrides to configuration
    /// This allows container deployments to override config via env vars
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = lookup("ECT_SERVICE_ENDPOINT") {
            tracing::info!("Environment override: ECT_SERVICE_ENDPOINT={}", endpoint);
            self.spec.service.endpoint = endpoint;
        }

        if let Some(url) = lookup("ECT_DATABASE_URL") {
            tracing::info!("Environment override: ECT_DATABASE_URL set");
            self.spec.database.url = url;
        }

        if let Some(level) = lookup("ECT_LOG_LEVEL") {
            self.spec.observability.logging.level = level;
        }

        if let Some(val) = lookup("ECT_MAX_RETRY_ATTEMPTS") {
            match val.parse::<u32>() {
                Ok(attempts) => {
                    tracing::info!("Environment override: ECT_MAX_RETRY_ATTEMPTS={}", attempts);
                    self.spec.retry.max_retry_attempts = attempts;
                }
                Err(_) => {
                    tracing::warn!(
                        "Invalid value for ECT_MAX_RETRY_ATTEMPTS: '{}'. Expected an integer. Ignoring.",
                        val
                    );
                }
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_version != API_VERSION {
            anyhow::bail!(
                "Invalid apiVersion: '{}'. Must be '{}'",
                self.api_version,
                API_VERSION
            );
        }

        if self.kind != KIND {
            anyhow::bail!("Invalid kind: '{}'. Must be '{}'", self.kind, KIND);
        }

        if self.metadata.name.is_empty() {
            anyhow::bail!("metadata.name cannot be empty");
        }

        let service = &self.spec.service;
        if service.endpoint.is_empty() {
            anyhow::bail!("spec.service.endpoint cannot be empty");
        }
        if !service.endpoint.contains("://") {
            anyhow::bail!(
                "spec.service.endpoint must include a scheme (http:// or https://): {}",
                service.endpoint
            );
        }
        if service.timeout_seconds == 0 {
            anyhow::bail!("spec.service.timeout_seconds must be greater than zero");
        }

        let retry = &self.spec.retry;
        if retry.base_delay_ms > retry.max_delay_ms {
            anyhow::bail!(
                "spec.retry.base_delay_ms ({}) cannot exceed max_delay_ms ({})",
                retry.base_delay_ms,
                retry.max_delay_ms
            );
        }

        if self.spec.database.max_connections == 0 {
            anyhow::bail!("spec.database.max_connections must be greater than zero");
        }

        if self.spec.observability.tracing.enabled
            && self.spec.observability.tracing.otlp_endpoint.is_none()
        {
            anyhow::bail!("spec.observability.tracing.otlp_endpoint is required when tracing is enabled");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manifest() {
        let config = EctConfig::default();
        assert_eq!(config.api_version, "ect/v1");
        assert_eq!(config.kind, "ClientConfig");
        assert!(!config.metadata.name.is_empty());
        assert_eq!(config.spec.retry.max_retry_attempts, 3);
        assert_eq!(config.spec.service.endpoint, "http://localhost:50051");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
apiVersion: ect/v1
kind: ClientConfig
metadata:
  name: lod-board
spec:
  service:
    endpoint: "https://workflow.example.mil:443"
  retry:
    max_retry_attempts: 5
"#;
        let config = EctConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.metadata.name, "lod-board");
        assert_eq!(config.spec.service.endpoint, "https://workflow.example.mil:443");
        assert_eq!(config.spec.service.timeout_seconds, 30);
        assert_eq!(config.spec.retry.max_retry_attempts, 5);
        assert_eq!(config.spec.retry.base_delay_ms, 200);
        assert_eq!(config.spec.database.max_connections, 5);
        assert_eq!(config.spec.observability.logging.format, "text");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = EctConfig::default();
        config.metadata.name = "ect-test".to_string();
        config.metadata.labels = Some(HashMap::from([(
            "environment".to_string(),
            "test".to_string(),
        )]));
        config.spec.database.url = "postgres://ect@localhost/ect".to_string();
        config.spec.observability.metrics.enabled = true;

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: EctConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.metadata.name, "ect-test");
        assert_eq!(parsed.spec.database.url, "postgres://ect@localhost/ect");
        assert!(parsed.spec.observability.metrics.enabled);
        assert_eq!(parsed.spec.observability.metrics.port, 9090);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ect-config.yaml");

        let mut config = EctConfig::default();
        config.spec.retry.max_delay_ms = 8000;
        config.to_yaml_file(&path).unwrap();

        let loaded = EctConfig::load_or_default(Some(path)).unwrap();
        assert_eq!(loaded.spec.retry.max_delay_ms, 8000);
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = EctConfig::load_or_default(Some(dir.path().join("absent.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = EctConfig::default();
        let env = HashMap::from([
            ("ECT_SERVICE_ENDPOINT", "http://10.0.0.5:50051"),
            ("ECT_DATABASE_URL", "postgres://ect@db/ect"),
            ("ECT_LOG_LEVEL", "debug"),
            ("ECT_MAX_RETRY_ATTEMPTS", "not-a-number"),
        ]);

        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.spec.observability.logging.level, "debug");
        assert_eq!(config.spec.service.endpoint, "http://10.0.0.5:50051");
        assert_eq!(config.spec.database.url, "postgres://ect@db/ect");
        // Invalid values are ignored
        assert_eq!(config.spec.retry.max_retry_attempts, 3);
    }

    #[test]
    fn test_validation() {
        let mut config = EctConfig::default();
        assert!(config.validate().is_ok());

        config.api_version = "wrong/v1".to_string();
        assert!(config.validate().is_err());
        config.api_version = API_VERSION.to_string();

        config.kind = "NodeConfig".to_string();
        assert!(config.validate().is_err());
        config.kind = KIND.to_string();

        config.spec.service.endpoint = "localhost:50051".to_string();
        assert!(config.validate().is_err());
        config.spec.service.endpoint = default_endpoint();

        config.spec.service.timeout_seconds = 0;
        assert!(config.validate().is_err());
        config.spec.service.timeout_seconds = 30;

        config.spec.retry.base_delay_ms = 10_000;
        assert!(config.validate().is_err());
        config.spec.retry.base_delay_ms = 200;

        config.spec.database.max_connections = 0;
        assert!(config.validate().is_err());
        config.spec.database.max_connections = 5;

        config.spec.observability.tracing.enabled = true;
        assert!(config.validate().is_err());
        config.spec.observability.tracing.otlp_endpoint = Some("http://otel:4317".to_string());
        assert!(config.validate().is_ok());
    }
}
