use crate::client::ApiClient;
use crate::error::ApiError;
use crate::notify::{LogNotifier, Notify};
use crate::queries::keys;
use crate::query_cache::QueryCache;
use crate::types::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// State-changing operations with their cache-invalidation sets and user
/// notifications.
///
/// Every mutation executes its backend call, then on success marks its
/// declared query keys stale and emits one success notification; on failure
/// it emits one error notification carrying the backend detail message (or
/// the transport error text) and propagates the error. Mutations never
/// retry.
pub struct Mutations {
    client: Arc<ApiClient>,
    cache: Arc<QueryCache>,
    notifier: Arc<dyn Notify>,
}

impl Mutations {
    pub fn new(client: Arc<ApiClient>, cache: Arc<QueryCache>) -> Self {
        Self {
            client,
            cache,
            notifier: Arc::new(LogNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notify>) -> Self {
        self.notifier = notifier;
        self
    }

    pub async fn configure_provider(&self, config: ProviderConfig) -> Result<Value, ApiError> {
        match self.client.configure_provider(&config).await {
            Ok(out) => {
                self.cache.invalidate(&keys::providers());
                self.cache.invalidate(&keys::provider_health());
                self.notifier.success("Provider configured successfully");
                Ok(out)
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to configure provider: {}", err.detail()));
                Err(err)
            }
        }
    }

    /// No invalidation: a test is read-only. Success is decided by the
    /// response body's `success` flag, not just the HTTP status.
    pub async fn test_provider(
        &self,
        request: TestProviderRequest,
    ) -> Result<TestProviderResponse, ApiError> {
        match self.client.test_provider(&request).await {
            Ok(response) => {
                if response.success {
                    self.notifier.success("Provider test successful");
                } else {
                    let reason = response
                        .error_message
                        .clone()
                        .unwrap_or_else(|| "unknown error".to_string());
                    self.notifier
                        .error(&format!("Provider test failed: {reason}"));
                }
                Ok(response)
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Provider test error: {}", err.detail()));
                Err(err)
            }
        }
    }

    pub async fn switch_provider(&self, provider: impl Into<String>) -> Result<Value, ApiError> {
        let request = SwitchProviderRequest {
            provider: provider.into(),
        };
        match self.client.switch_provider(&request).await {
            Ok(out) => {
                self.cache.invalidate(&keys::providers());
                self.cache.invalidate(&keys::provider_stats());
                self.notifier.success("Provider switched successfully");
                Ok(out)
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to switch provider: {}", err.detail()));
                Err(err)
            }
        }
    }

    pub async fn cancel_job(&self, job_id: &str) -> Result<Value, ApiError> {
        match self.client.cancel_job(job_id).await {
            Ok(out) => {
                self.cache.invalidate_prefix(&keys::jobs_prefix());
                self.notifier.success("Job cancelled");
                Ok(out)
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to cancel job: {}", err.detail()));
                Err(err)
            }
        }
    }

    pub async fn retry_job(&self, job_id: &str) -> Result<Value, ApiError> {
        match self.client.retry_job(job_id).await {
            Ok(out) => {
                self.cache.invalidate_prefix(&keys::jobs_prefix());
                self.notifier.success("Job retried");
                Ok(out)
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to retry job: {}", err.detail()));
                Err(err)
            }
        }
    }

    pub async fn create_secret(&self, request: CreateSecretRequest) -> Result<Value, ApiError> {
        match self.client.create_secret(&request).await {
            Ok(out) => {
                self.cache.invalidate(&keys::secrets());
                self.notifier.success("Secret created");
                Ok(out)
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to create secret: {}", err.detail()));
                Err(err)
            }
        }
    }

    pub async fn update_secret(
        &self,
        name: &str,
        request: UpdateSecretRequest,
    ) -> Result<Value, ApiError> {
        match self.client.update_secret(name, &request).await {
            Ok(out) => {
                self.cache.invalidate(&keys::secrets());
                self.notifier.success("Secret updated");
                Ok(out)
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to update secret: {}", err.detail()));
                Err(err)
            }
        }
    }

    pub async fn delete_secret(&self, name: &str) -> Result<Value, ApiError> {
        match self.client.delete_secret(name).await {
            Ok(out) => {
                self.cache.invalidate(&keys::secrets());
                self.notifier.success("Secret deleted");
                Ok(out)
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to delete secret: {}", err.detail()));
                Err(err)
            }
        }
    }

    pub async fn sync_secrets(&self) -> Result<Value, ApiError> {
        match self.client.sync_secrets().await {
            Ok(out) => {
                self.cache.invalidate(&keys::secrets());
                self.notifier.success("Secrets synced");
                Ok(out)
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to sync secrets: {}", err.detail()));
                Err(err)
            }
        }
    }

    pub async fn update_env_vars(
        &self,
        vars: HashMap<String, Value>,
    ) -> Result<Value, ApiError> {
        match self.client.update_env_vars(&vars).await {
            Ok(out) => {
                self.cache.invalidate(&keys::env_vars());
                self.notifier.success("Environment variables updated");
                Ok(out)
            }
            Err(err) => {
                self.notifier.error(&format!(
                    "Failed to update environment variables: {}",
                    err.detail()
                ));
                Err(err)
            }
        }
    }

    /// Clearing the backend cache makes every cached query suspect, so the
    /// whole client-side cache is marked stale.
    pub async fn clear_cache(&self) -> Result<Value, ApiError> {
        match self.client.clear_service_cache().await {
            Ok(out) => {
                self.cache.invalidate_all();
                self.notifier.success("Cache cleared successfully");
                Ok(out)
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to clear cache: {}", err.detail()));
                Err(err)
            }
        }
    }

    pub async fn generate_blog(
        &self,
        request: BlogGenerateRequest,
        async_mode: bool,
    ) -> Result<Value, ApiError> {
        match self.client.generate_blog(&request, async_mode).await {
            Ok(out) => {
                self.cache.invalidate_prefix(&keys::jobs_prefix());
                self.notifier.success("Blog generation started");
                Ok(out)
            }
            Err(err) => {
                self.notifier.error(&format!(
                    "Failed to start blog generation: {}",
                    err.detail()
                ));
                Err(err)
            }
        }
    }
}
