//! Request and response models for the admin backend.
//!
//! The backend schema is owned by another team, so decoding is lenient:
//! fields the dashboard actually renders are typed, everything else is kept
//! in a flattened `extra` map so responses round-trip without loss.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// === Health & Status ===

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatusReport {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub uptime_seconds: Option<f64>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

// === AI Providers ===

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderList {
    #[serde(default)]
    pub providers: Vec<ProviderInfo>,
    #[serde(default)]
    pub active_provider: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Per-provider health payloads keyed by provider name. The backend shape
/// varies per provider, so values stay untyped.
pub type ProviderHealthMap = HashMap<String, Value>;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderStats {
    #[serde(default)]
    pub total_requests: u64,
    #[serde(default)]
    pub total_tokens: u64,
    #[serde(default)]
    pub total_cost_usd: f64,
    #[serde(default)]
    pub by_provider: HashMap<String, Value>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct ProviderConfig {
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct TestProviderRequest {
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TestProviderResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub latency_ms: Option<f64>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct SwitchProviderRequest {
    pub provider: String,
}

// === Usage, Costs & Cache Stats ===

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UsageReport {
    #[serde(default)]
    pub total_requests: u64,
    #[serde(default)]
    pub total_tokens: u64,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CostReport {
    #[serde(default)]
    pub total_cost_usd: f64,
    #[serde(default)]
    pub by_provider: HashMap<String, f64>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CacheStats {
    #[serde(default)]
    pub hits: u64,
    #[serde(default)]
    pub misses: u64,
    #[serde(default)]
    pub hit_rate: f64,
    #[serde(default)]
    pub entries: u64,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

// === Jobs ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
    #[serde(other)]
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Job {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JobList {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub total: u64,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Filter parameters for the job list. Also contributes the parameter part
/// of the `jobs` cache key, so encoding must be deterministic.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct JobFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl JobFilter {
    /// Stable token identifying this filter inside a cache key.
    pub fn cache_token(&self) -> String {
        format!(
            "status={};limit={};offset={}",
            self.status.as_deref().unwrap_or("-"),
            self.limit.map_or_else(|| "-".to_string(), |v| v.to_string()),
            self.offset.map_or_else(|| "-".to_string(), |v| v.to_string()),
        )
    }
}

// === Logs ===

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub logger: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogPage {
    #[serde(default)]
    pub logs: Vec<LogEntry>,
    #[serde(default)]
    pub total: u64,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct LogFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl LogFilter {
    pub fn cache_token(&self) -> String {
        format!(
            "level={};limit={}",
            self.level.as_deref().unwrap_or("-"),
            self.limit.map_or_else(|| "-".to_string(), |v| v.to_string()),
        )
    }
}

// === Secrets ===

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SecretInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SecretList {
    #[serde(default)]
    pub secrets: Vec<SecretInfo>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SecretValue {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct CreateSecretRequest {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct UpdateSecretRequest {
    pub value: String,
}

// === Environment Variables ===

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EnvVars {
    #[serde(flatten)]
    pub vars: HashMap<String, Value>,
}

// === Blog Generation ===

#[derive(Debug, Clone, Serialize, Default)]
pub struct BlogGenerateRequest {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
