use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::env;

/// Development backend used when `NEXT_PUBLIC_API_URL` is unset and no
/// config file overrides `api.base_url`.
pub const DEFAULT_BASE_URL: &str =
    "https://blog-writer-api-dev-613248238610.europe-west9.run.app";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Optional token to seed the token store with at construction.
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            auth_token: None,
        }
    }
}

fn default_health_seconds() -> u64 {
    30
}
fn default_status_seconds() -> u64 {
    10
}
fn default_providers_seconds() -> u64 {
    60
}
fn default_provider_health_seconds() -> u64 {
    30
}
fn default_provider_stats_seconds() -> u64 {
    10
}
fn default_usage_seconds() -> u64 {
    30
}
fn default_costs_seconds() -> u64 {
    30
}
fn default_ai_cache_stats_seconds() -> u64 {
    10
}
fn default_jobs_seconds() -> u64 {
    5
}
fn default_job_seconds() -> u64 {
    2
}
fn default_logs_seconds() -> u64 {
    5
}
fn default_service_cache_stats_seconds() -> u64 {
    10
}

/// Per-query stale windows, in seconds.
///
/// Within the window a cached result is served without a network call; the
/// first use after it refetches. Defaults mirror how volatile each data set
/// is: job status polls fastest (2 s), the provider list is stable (60 s).
/// Secrets and environment variables refetch on every use (zero window) but
/// are still deduplicated while a fetch is in flight.
#[derive(Debug, Deserialize, Clone)]
pub struct StaleWindows {
    #[serde(default = "default_health_seconds")]
    pub health_seconds: u64,
    #[serde(default = "default_status_seconds")]
    pub status_seconds: u64,
    #[serde(default = "default_providers_seconds")]
    pub providers_seconds: u64,
    #[serde(default = "default_provider_health_seconds")]
    pub provider_health_seconds: u64,
    #[serde(default = "default_provider_stats_seconds")]
    pub provider_stats_seconds: u64,
    #[serde(default = "default_usage_seconds")]
    pub usage_seconds: u64,
    #[serde(default = "default_costs_seconds")]
    pub costs_seconds: u64,
    #[serde(default = "default_ai_cache_stats_seconds")]
    pub ai_cache_stats_seconds: u64,
    #[serde(default = "default_jobs_seconds")]
    pub jobs_seconds: u64,
    #[serde(default = "default_job_seconds")]
    pub job_seconds: u64,
    #[serde(default = "default_logs_seconds")]
    pub logs_seconds: u64,
    #[serde(default)]
    pub secrets_seconds: u64,
    #[serde(default)]
    pub env_vars_seconds: u64,
    #[serde(default = "default_service_cache_stats_seconds")]
    pub service_cache_stats_seconds: u64,
}

impl Default for StaleWindows {
    fn default() -> Self {
        Self {
            health_seconds: default_health_seconds(),
            status_seconds: default_status_seconds(),
            providers_seconds: default_providers_seconds(),
            provider_health_seconds: default_provider_health_seconds(),
            provider_stats_seconds: default_provider_stats_seconds(),
            usage_seconds: default_usage_seconds(),
            costs_seconds: default_costs_seconds(),
            ai_cache_stats_seconds: default_ai_cache_stats_seconds(),
            jobs_seconds: default_jobs_seconds(),
            job_seconds: default_job_seconds(),
            logs_seconds: default_logs_seconds(),
            secrets_seconds: 0,
            env_vars_seconds: 0,
            service_cache_stats_seconds: default_service_cache_stats_seconds(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub stale: StaleWindows,
    #[serde(default)]
    pub log: LogSettings,
}

impl Settings {
    /// Load settings from an optional `Config.toml`, then apply environment
    /// overrides: `NEXT_PUBLIC_API_URL` (base URL, kept for parity with the
    /// dashboard deployment), `ADMIN_AUTH_TOKEN` and `ADMIN_TIMEOUT_SECONDS`.
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name("Config.toml").required(false))
            .build()?;

        let mut settings: Self = s.try_deserialize()?;

        if let Ok(url) = env::var("NEXT_PUBLIC_API_URL") {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                settings.api.base_url = trimmed.to_string();
            }
        }
        if let Ok(token) = env::var("ADMIN_AUTH_TOKEN") {
            let trimmed = token.trim();
            if !trimmed.is_empty() {
                settings.api.auth_token = Some(trimmed.to_string());
            }
        }
        if let Ok(raw) = env::var("ADMIN_TIMEOUT_SECONDS") {
            if let Ok(seconds) = raw.trim().parse::<u64>() {
                if seconds > 0 {
                    settings.api.timeout_seconds = seconds;
                }
            }
        }

        Ok(settings)
    }
}
