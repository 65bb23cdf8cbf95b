use crate::auth::TokenStore;
use crate::error::ApiError;
use crate::metrics;
use crate::settings::Settings;
use crate::types::*;
use log::warn;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Authenticated HTTP client for the admin backend.
///
/// One method per backend endpoint, each a direct passthrough: build the
/// request, attach the bearer token when the store holds one, send, and
/// surface the decoded response. Failures are never recovered here: no
/// retries, no backoff. A 401 is logged as a warning and then propagated
/// like any other error (current dashboard behavior: no redirect, the
/// session is left intact).
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<TokenStore>,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let base_url = settings.api.base_url.trim_end_matches('/').to_string();
        if let Err(source) = Url::parse(&base_url) {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url,
                source,
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_seconds))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url,
            tokens: Arc::new(TokenStore::seeded(settings.api.auth_token.clone())),
        })
    }

    /// Replace the token store, e.g. to share one across several clients.
    pub fn with_token_store(mut self, tokens: Arc<TokenStore>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn token_store(&self) -> Arc<TokenStore> {
        Arc::clone(&self.tokens)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = match self.tokens.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            warn!("API returned 401 - authentication may be required");
        }

        if status.is_success() {
            return Ok(response);
        }

        let detail = extract_detail(response).await;
        Err(ApiError::Status { status, detail })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        metrics::increment_api_request(path);
        let response = self.send(self.http.get(self.url(path))).await?;
        Ok(response.json::<T>().await?)
    }

    async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        metrics::increment_api_request(path);
        let response = self.send(self.http.get(self.url(path)).query(query)).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        metrics::increment_api_request(path);
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post_json_value<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        metrics::increment_api_request(path);
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        into_value(response).await
    }

    async fn post_value(&self, path: &str) -> Result<Value, ApiError> {
        metrics::increment_api_request(path);
        let response = self.send(self.http.post(self.url(path))).await?;
        into_value(response).await
    }

    async fn put_json_value<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        metrics::increment_api_request(path);
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        into_value(response).await
    }

    async fn delete_value(&self, path: &str) -> Result<Value, ApiError> {
        metrics::increment_api_request(path);
        let response = self.send(self.http.delete(self.url(path))).await?;
        into_value(response).await
    }

    // === Health & Status ===

    pub async fn health(&self) -> Result<Value, ApiError> {
        self.get_json("/").await
    }

    pub async fn status(&self) -> Result<StatusReport, ApiError> {
        self.get_json("/api/v1/admin/status").await
    }

    // === AI Providers ===

    pub async fn list_providers(&self) -> Result<ProviderList, ApiError> {
        self.get_json("/api/v1/ai/providers/list").await
    }

    pub async fn configure_provider(&self, config: &ProviderConfig) -> Result<Value, ApiError> {
        self.post_json_value("/api/v1/ai/providers/configure", config)
            .await
    }

    pub async fn test_provider(
        &self,
        request: &TestProviderRequest,
    ) -> Result<TestProviderResponse, ApiError> {
        self.post_json("/api/v1/ai/providers/test", request).await
    }

    pub async fn provider_health(&self) -> Result<ProviderHealthMap, ApiError> {
        self.get_json("/api/v1/ai/providers/health").await
    }

    pub async fn provider_stats(&self) -> Result<ProviderStats, ApiError> {
        self.get_json("/api/v1/ai/providers/stats").await
    }

    pub async fn switch_provider(
        &self,
        request: &SwitchProviderRequest,
    ) -> Result<Value, ApiError> {
        self.post_json_value("/api/v1/ai/providers/switch", request)
            .await
    }

    pub async fn get_provider(&self, provider: &str) -> Result<Value, ApiError> {
        self.get_json(&format!("/api/v1/ai/providers/{provider}"))
            .await
    }

    // === Usage & Costs ===

    pub async fn usage(&self) -> Result<UsageReport, ApiError> {
        self.get_json("/api/v1/admin/ai/usage").await
    }

    pub async fn costs(&self) -> Result<CostReport, ApiError> {
        self.get_json("/api/v1/admin/ai/costs").await
    }

    pub async fn ai_cache_stats(&self) -> Result<CacheStats, ApiError> {
        self.get_json("/api/v1/admin/ai/cache-stats").await
    }

    // === Jobs ===

    pub async fn list_jobs(&self, filter: &JobFilter) -> Result<JobList, ApiError> {
        self.get_json_with_query("/api/v1/admin/jobs", filter).await
    }

    pub async fn get_job(&self, job_id: &str) -> Result<Job, ApiError> {
        self.get_json(&format!("/api/v1/admin/jobs/{job_id}")).await
    }

    pub async fn cancel_job(&self, job_id: &str) -> Result<Value, ApiError> {
        self.post_value(&format!("/api/v1/admin/jobs/{job_id}/cancel"))
            .await
    }

    pub async fn retry_job(&self, job_id: &str) -> Result<Value, ApiError> {
        self.post_value(&format!("/api/v1/admin/jobs/{job_id}/retry"))
            .await
    }

    // === Logs ===

    pub async fn logs(&self, filter: &LogFilter) -> Result<LogPage, ApiError> {
        self.get_json_with_query("/api/v1/admin/logs", filter).await
    }

    /// Plain GET passthrough; the streaming transport itself is out of scope.
    pub async fn logs_stream(&self) -> Result<Value, ApiError> {
        self.get_json("/api/v1/admin/logs/stream").await
    }

    // === Secrets ===

    pub async fn list_secrets(&self) -> Result<SecretList, ApiError> {
        self.get_json("/api/v1/admin/secrets").await
    }

    pub async fn get_secret(&self, name: &str) -> Result<SecretValue, ApiError> {
        self.get_json(&format!("/api/v1/admin/secrets/{name}")).await
    }

    pub async fn create_secret(&self, request: &CreateSecretRequest) -> Result<Value, ApiError> {
        self.post_json_value("/api/v1/admin/secrets", request).await
    }

    pub async fn update_secret(
        &self,
        name: &str,
        request: &UpdateSecretRequest,
    ) -> Result<Value, ApiError> {
        self.put_json_value(&format!("/api/v1/admin/secrets/{name}"), request)
            .await
    }

    pub async fn delete_secret(&self, name: &str) -> Result<Value, ApiError> {
        self.delete_value(&format!("/api/v1/admin/secrets/{name}"))
            .await
    }

    pub async fn sync_secrets(&self) -> Result<Value, ApiError> {
        self.post_value("/api/v1/admin/secrets/sync").await
    }

    // === Environment Variables ===

    pub async fn env_vars(&self) -> Result<EnvVars, ApiError> {
        self.get_json("/api/v1/admin/env-vars").await
    }

    pub async fn update_env_vars(
        &self,
        vars: &HashMap<String, Value>,
    ) -> Result<Value, ApiError> {
        self.put_json_value("/api/v1/admin/env-vars", vars).await
    }

    // === Service Cache ===

    pub async fn service_cache_stats(&self) -> Result<CacheStats, ApiError> {
        self.get_json("/api/v1/cache/stats").await
    }

    pub async fn clear_service_cache(&self) -> Result<Value, ApiError> {
        self.post_value("/api/v1/cache/clear").await
    }

    // === Blog Generation ===

    pub async fn generate_blog(
        &self,
        request: &BlogGenerateRequest,
        async_mode: bool,
    ) -> Result<Value, ApiError> {
        let path = "/api/v1/blog/generate-enhanced";
        metrics::increment_api_request(path);
        let response = self
            .send(
                self.http
                    .post(self.url(path))
                    .query(&[("async_mode", async_mode)])
                    .json(request),
            )
            .await?;
        into_value(response).await
    }

    pub async fn blog_job(&self, job_id: &str) -> Result<Job, ApiError> {
        self.get_json(&format!("/api/v1/blog/jobs/{job_id}")).await
    }
}

/// Backend error bodies carry `{"detail": "..."}`; fall back to the HTTP
/// reason phrase when the body is missing or unstructured.
async fn extract_detail(response: Response) -> String {
    let status = response.status();
    let fallback = || {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    };
    match response.json::<Value>().await {
        Ok(body) => body
            .get("detail")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(fallback),
        Err(_) => fallback(),
    }
}

/// Lenient body decoding for mutation endpoints: some return JSON, some an
/// empty body, some plain text.
async fn into_value(response: Response) -> Result<Value, ApiError> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}
