//! Demo-mode fallback: serve static sample data when the backend errors.
//!
//! A single decorator wraps every dashboard read query. On success the real
//! data flows through untouched; on any error the query's sample data set is
//! substituted and flagged, so one unreachable backend degrades every page
//! the same way instead of each page improvising its own fallback.

use crate::error::ApiError;
use crate::mock_data;
use crate::queries::Queries;
use crate::types::*;
use log::warn;
use serde_json::Value;

/// A query result annotated with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoView<T> {
    pub data: T,
    /// True when `data` is sample data served after a backend error.
    pub demo_mode: bool,
}

impl<T> DemoView<T> {
    fn live(data: T) -> Self {
        Self {
            data,
            demo_mode: false,
        }
    }

    fn demo(data: T) -> Self {
        Self {
            data,
            demo_mode: true,
        }
    }
}

/// [`Queries`] with the fallback decorator applied to every read.
///
/// When demo mode is off the wrapper is a passthrough and errors surface
/// unchanged. Secrets and environment variables have no sample data and are
/// deliberately not wrapped; use [`Queries`] directly for those.
#[derive(Clone)]
pub struct DemoQueries {
    queries: Queries,
    enabled: bool,
}

impl DemoQueries {
    pub fn new(queries: Queries, enabled: bool) -> Self {
        Self { queries, enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn queries(&self) -> &Queries {
        &self.queries
    }

    /// The one fallback point: every wrapped query funnels through here.
    fn demo_or<T>(
        &self,
        query: &str,
        result: Result<T, ApiError>,
        sample: impl FnOnce() -> T,
    ) -> Result<DemoView<T>, ApiError> {
        match result {
            Ok(data) => Ok(DemoView::live(data)),
            Err(err) if self.enabled => {
                warn!(
                    "serving sample data for '{}' after backend error: {}",
                    query,
                    err.detail()
                );
                Ok(DemoView::demo(sample()))
            }
            Err(err) => Err(err),
        }
    }

    pub async fn health(&self) -> Result<DemoView<Value>, ApiError> {
        self.demo_or("health", self.queries.health().await, mock_data::sample_health)
    }

    pub async fn status(&self) -> Result<DemoView<StatusReport>, ApiError> {
        self.demo_or("status", self.queries.status().await, mock_data::sample_status)
    }

    pub async fn providers(&self) -> Result<DemoView<ProviderList>, ApiError> {
        self.demo_or(
            "providers",
            self.queries.providers().await,
            mock_data::sample_providers,
        )
    }

    pub async fn provider_health(&self) -> Result<DemoView<ProviderHealthMap>, ApiError> {
        self.demo_or(
            "provider-health",
            self.queries.provider_health().await,
            mock_data::sample_provider_health,
        )
    }

    pub async fn provider_stats(&self) -> Result<DemoView<ProviderStats>, ApiError> {
        self.demo_or(
            "provider-stats",
            self.queries.provider_stats().await,
            mock_data::sample_provider_stats,
        )
    }

    pub async fn usage(&self) -> Result<DemoView<UsageReport>, ApiError> {
        self.demo_or("usage", self.queries.usage().await, mock_data::sample_usage)
    }

    pub async fn costs(&self) -> Result<DemoView<CostReport>, ApiError> {
        self.demo_or("costs", self.queries.costs().await, mock_data::sample_costs)
    }

    pub async fn ai_cache_stats(&self) -> Result<DemoView<CacheStats>, ApiError> {
        self.demo_or(
            "cache-stats",
            self.queries.ai_cache_stats().await,
            mock_data::sample_cache_stats,
        )
    }

    pub async fn service_cache_stats(&self) -> Result<DemoView<CacheStats>, ApiError> {
        self.demo_or(
            "service-cache-stats",
            self.queries.service_cache_stats().await,
            mock_data::sample_cache_stats,
        )
    }

    pub async fn jobs(&self, filter: &JobFilter) -> Result<DemoView<JobList>, ApiError> {
        self.demo_or("jobs", self.queries.jobs(filter).await, mock_data::sample_jobs)
    }

    pub async fn logs(&self, filter: &LogFilter) -> Result<DemoView<LogPage>, ApiError> {
        self.demo_or("logs", self.queries.logs(filter).await, mock_data::sample_logs)
    }
}
