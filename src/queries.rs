use crate::client::ApiClient;
use crate::error::ApiError;
use crate::query_cache::QueryCache;
use crate::settings::StaleWindows;
use crate::types::*;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Cache key constructors, one per named query. Keys are what ties queries
/// and mutation invalidation sets together, so they live in one place.
pub mod keys {
    use crate::query_cache::QueryKey;
    use crate::types::{JobFilter, LogFilter};

    pub fn health() -> QueryKey {
        QueryKey::new("health")
    }
    pub fn status() -> QueryKey {
        QueryKey::new("status")
    }
    pub fn providers() -> QueryKey {
        QueryKey::new("providers")
    }
    pub fn provider_health() -> QueryKey {
        QueryKey::new("provider-health")
    }
    pub fn provider_stats() -> QueryKey {
        QueryKey::new("provider-stats")
    }
    pub fn usage() -> QueryKey {
        QueryKey::new("usage")
    }
    pub fn costs() -> QueryKey {
        QueryKey::new("costs")
    }
    pub fn ai_cache_stats() -> QueryKey {
        QueryKey::new("cache-stats")
    }
    /// Prefix covering every job list and per-id job entry.
    pub fn jobs_prefix() -> QueryKey {
        QueryKey::new("jobs")
    }
    pub fn jobs(filter: &JobFilter) -> QueryKey {
        jobs_prefix().with_part(filter.cache_token())
    }
    pub fn job(job_id: &str) -> QueryKey {
        jobs_prefix().with_part("id").with_part(job_id)
    }
    pub fn logs(filter: &LogFilter) -> QueryKey {
        QueryKey::new("logs").with_part(filter.cache_token())
    }
    pub fn secrets() -> QueryKey {
        QueryKey::new("secrets")
    }
    pub fn env_vars() -> QueryKey {
        QueryKey::new("env-vars")
    }
    pub fn service_cache_stats() -> QueryKey {
        QueryKey::new("service-cache-stats")
    }
}

/// Named read queries: each binds a cache key, a client call and a stale
/// window. Two uses inside the window cost one network call; concurrent
/// uses of the same key share one in-flight fetch.
#[derive(Clone)]
pub struct Queries {
    client: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    windows: StaleWindows,
}

impl Queries {
    pub fn new(client: Arc<ApiClient>, cache: Arc<QueryCache>, windows: StaleWindows) -> Self {
        Self {
            client,
            cache,
            windows,
        }
    }

    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.cache
    }

    fn window(seconds: u64) -> Duration {
        Duration::from_secs(seconds)
    }

    pub async fn health(&self) -> Result<Value, ApiError> {
        let client = Arc::clone(&self.client);
        self.cache
            .get_or_fetch(keys::health(), Self::window(self.windows.health_seconds), move || async move {
                client.health().await
            })
            .await
    }

    pub async fn status(&self) -> Result<StatusReport, ApiError> {
        let client = Arc::clone(&self.client);
        self.cache
            .get_or_fetch(keys::status(), Self::window(self.windows.status_seconds), move || async move {
                client.status().await
            })
            .await
    }

    pub async fn providers(&self) -> Result<ProviderList, ApiError> {
        let client = Arc::clone(&self.client);
        self.cache
            .get_or_fetch(
                keys::providers(),
                Self::window(self.windows.providers_seconds),
                move || async move { client.list_providers().await },
            )
            .await
    }

    pub async fn provider_health(&self) -> Result<ProviderHealthMap, ApiError> {
        let client = Arc::clone(&self.client);
        self.cache
            .get_or_fetch(
                keys::provider_health(),
                Self::window(self.windows.provider_health_seconds),
                move || async move { client.provider_health().await },
            )
            .await
    }

    pub async fn provider_stats(&self) -> Result<ProviderStats, ApiError> {
        let client = Arc::clone(&self.client);
        self.cache
            .get_or_fetch(
                keys::provider_stats(),
                Self::window(self.windows.provider_stats_seconds),
                move || async move { client.provider_stats().await },
            )
            .await
    }

    pub async fn usage(&self) -> Result<UsageReport, ApiError> {
        let client = Arc::clone(&self.client);
        self.cache
            .get_or_fetch(keys::usage(), Self::window(self.windows.usage_seconds), move || async move {
                client.usage().await
            })
            .await
    }

    pub async fn costs(&self) -> Result<CostReport, ApiError> {
        let client = Arc::clone(&self.client);
        self.cache
            .get_or_fetch(keys::costs(), Self::window(self.windows.costs_seconds), move || async move {
                client.costs().await
            })
            .await
    }

    pub async fn ai_cache_stats(&self) -> Result<CacheStats, ApiError> {
        let client = Arc::clone(&self.client);
        self.cache
            .get_or_fetch(
                keys::ai_cache_stats(),
                Self::window(self.windows.ai_cache_stats_seconds),
                move || async move { client.ai_cache_stats().await },
            )
            .await
    }

    pub async fn jobs(&self, filter: &JobFilter) -> Result<JobList, ApiError> {
        let client = Arc::clone(&self.client);
        let filter_owned = filter.clone();
        self.cache
            .get_or_fetch(
                keys::jobs(filter),
                Self::window(self.windows.jobs_seconds),
                move || async move { client.list_jobs(&filter_owned).await },
            )
            .await
    }

    pub async fn job(&self, job_id: &str) -> Result<Job, ApiError> {
        let client = Arc::clone(&self.client);
        let id = job_id.to_string();
        self.cache
            .get_or_fetch(keys::job(job_id), Self::window(self.windows.job_seconds), move || async move {
                client.get_job(&id).await
            })
            .await
    }

    pub async fn logs(&self, filter: &LogFilter) -> Result<LogPage, ApiError> {
        let client = Arc::clone(&self.client);
        let filter_owned = filter.clone();
        self.cache
            .get_or_fetch(
                keys::logs(filter),
                Self::window(self.windows.logs_seconds),
                move || async move { client.logs(&filter_owned).await },
            )
            .await
    }

    pub async fn secrets(&self) -> Result<SecretList, ApiError> {
        let client = Arc::clone(&self.client);
        self.cache
            .get_or_fetch(
                keys::secrets(),
                Self::window(self.windows.secrets_seconds),
                move || async move { client.list_secrets().await },
            )
            .await
    }

    pub async fn env_vars(&self) -> Result<EnvVars, ApiError> {
        let client = Arc::clone(&self.client);
        self.cache
            .get_or_fetch(
                keys::env_vars(),
                Self::window(self.windows.env_vars_seconds),
                move || async move { client.env_vars().await },
            )
            .await
    }

    pub async fn service_cache_stats(&self) -> Result<CacheStats, ApiError> {
        let client = Arc::clone(&self.client);
        self.cache
            .get_or_fetch(
                keys::service_cache_stats(),
                Self::window(self.windows.service_cache_stats_seconds),
                move || async move { client.service_cache_stats().await },
            )
            .await
    }
}
