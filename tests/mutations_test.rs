//! Mutation tests against a local HTTP server: invalidation sets and the
//! exact notification messages.

use admin_console_sdk::settings::{Settings, StaleWindows};
use admin_console_sdk::types::{JobFilter, ProviderConfig, TestProviderRequest};
use admin_console_sdk::{
    ApiClient, MemoryNotifier, Mutations, NotificationKind, Queries, QueryCache,
};
use std::sync::{Arc, Mutex};
use std::thread;
use tiny_http::{Header, Response, Server};

struct TestBackend {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestBackend {
    fn hits(&self, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|url| url.split('?').next() == Some(path))
            .count()
    }
}

fn spawn_backend<F>(responder: F) -> TestBackend
where
    F: Fn(&str) -> (u16, String) + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);

    thread::spawn(move || {
        for request in server.incoming_requests() {
            log.lock().unwrap().push(request.url().to_string());
            let (status, body) = responder(request.url());
            let content_type =
                Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
            let _ = request.respond(
                Response::from_string(body)
                    .with_status_code(status)
                    .with_header(content_type),
            );
        }
    });

    TestBackend {
        base_url: format!("http://{}", addr),
        requests,
    }
}

fn sdk(backend: &TestBackend) -> (Queries, Mutations, Arc<MemoryNotifier>) {
    let mut settings = Settings::default();
    settings.api.base_url = backend.base_url.clone();
    let client = Arc::new(ApiClient::new(&settings).unwrap());
    let cache = Arc::new(QueryCache::new());
    let queries = Queries::new(Arc::clone(&client), Arc::clone(&cache), StaleWindows::default());
    let notifier = Arc::new(MemoryNotifier::new());
    let mutations = Mutations::new(client, cache).with_notifier(notifier.clone());
    (queries, mutations, notifier)
}

fn ok_everything(url: &str) -> (u16, String) {
    let body = match url.split('?').next().unwrap_or_default() {
        "/api/v1/ai/providers/list" => r#"{"providers": [], "active_provider": null}"#,
        "/api/v1/ai/providers/stats" => r#"{"total_requests": 1}"#,
        "/api/v1/admin/status" => r#"{"status": "healthy"}"#,
        "/api/v1/admin/jobs" => r#"{"jobs": [], "total": 0}"#,
        _ => "{}",
    };
    (200, body.to_string())
}

#[tokio::test]
async fn switch_provider_invalidates_providers_and_stats_only() {
    let backend = spawn_backend(ok_everything);
    let (queries, mutations, notifier) = sdk(&backend);

    // Warm the cache.
    queries.providers().await.unwrap();
    queries.provider_stats().await.unwrap();
    queries.status().await.unwrap();
    assert_eq!(backend.hits("/api/v1/ai/providers/list"), 1);

    mutations.switch_provider("anthropic").await.unwrap();

    // Invalidated queries refetch, the untouched one is still cached.
    queries.providers().await.unwrap();
    queries.provider_stats().await.unwrap();
    queries.status().await.unwrap();
    assert_eq!(backend.hits("/api/v1/ai/providers/list"), 2);
    assert_eq!(backend.hits("/api/v1/ai/providers/stats"), 2);
    assert_eq!(backend.hits("/api/v1/admin/status"), 1);

    let events = notifier.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, NotificationKind::Success);
    assert_eq!(events[0].message, "Provider switched successfully");
}

#[tokio::test]
async fn clear_cache_invalidates_every_cached_query() {
    let backend = spawn_backend(ok_everything);
    let (queries, mutations, notifier) = sdk(&backend);

    queries.providers().await.unwrap();
    queries.provider_stats().await.unwrap();
    queries.status().await.unwrap();

    mutations.clear_cache().await.unwrap();

    queries.providers().await.unwrap();
    queries.provider_stats().await.unwrap();
    queries.status().await.unwrap();
    assert_eq!(backend.hits("/api/v1/ai/providers/list"), 2);
    assert_eq!(backend.hits("/api/v1/ai/providers/stats"), 2);
    assert_eq!(backend.hits("/api/v1/admin/status"), 2);
    assert_eq!(notifier.events()[0].message, "Cache cleared successfully");
}

#[tokio::test]
async fn repeated_job_lists_within_window_hit_the_backend_once() {
    let backend = spawn_backend(ok_everything);
    let (queries, _, _) = sdk(&backend);
    let filter = JobFilter {
        status: Some("running".to_string()),
        ..Default::default()
    };

    queries.jobs(&filter).await.unwrap();
    queries.jobs(&filter).await.unwrap();
    assert_eq!(backend.hits("/api/v1/admin/jobs"), 1);

    // A different filter is a different cache entry.
    queries.jobs(&JobFilter::default()).await.unwrap();
    assert_eq!(backend.hits("/api/v1/admin/jobs"), 2);
}

#[tokio::test]
async fn cancel_and_retry_invalidate_the_whole_jobs_prefix() {
    let backend = spawn_backend(ok_everything);
    let (queries, mutations, notifier) = sdk(&backend);
    let filter = JobFilter::default();

    queries.jobs(&filter).await.unwrap();
    mutations.cancel_job("j-1").await.unwrap();
    queries.jobs(&filter).await.unwrap();
    assert_eq!(backend.hits("/api/v1/admin/jobs"), 2);

    mutations.retry_job("j-1").await.unwrap();
    queries.jobs(&filter).await.unwrap();
    assert_eq!(backend.hits("/api/v1/admin/jobs"), 3);

    let events = notifier.events();
    let messages: Vec<&str> = events.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["Job cancelled", "Job retried"]);
}

#[tokio::test]
async fn failed_cancel_carries_the_backend_detail() {
    let backend = spawn_backend(|url| {
        if url.contains("/cancel") {
            (409, r#"{"detail": "job already completed"}"#.to_string())
        } else {
            (200, "{}".to_string())
        }
    });
    let (_, mutations, notifier) = sdk(&backend);

    let err = mutations.cancel_job("j-done").await.unwrap_err();
    assert_eq!(err.detail(), "job already completed");

    let events = notifier.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, NotificationKind::Error);
    assert_eq!(events[0].message, "Failed to cancel job: job already completed");
}

#[tokio::test]
async fn configure_provider_notifies_and_invalidates_health() {
    let backend = spawn_backend(ok_everything);
    let (queries, mutations, notifier) = sdk(&backend);

    queries.providers().await.unwrap();
    queries.provider_health().await.unwrap();

    let config = ProviderConfig {
        provider: "openai".to_string(),
        model: Some("gpt-4o".to_string()),
        ..Default::default()
    };
    mutations.configure_provider(config).await.unwrap();

    queries.providers().await.unwrap();
    queries.provider_health().await.unwrap();
    assert_eq!(backend.hits("/api/v1/ai/providers/list"), 2);
    assert_eq!(backend.hits("/api/v1/ai/providers/health"), 2);
    assert_eq!(notifier.events()[0].message, "Provider configured successfully");
}

#[tokio::test]
async fn provider_test_reports_body_level_failure() {
    let backend = spawn_backend(|url| {
        if url.starts_with("/api/v1/ai/providers/test") {
            (
                200,
                r#"{"success": false, "error_message": "invalid API key"}"#.to_string(),
            )
        } else {
            (200, "{}".to_string())
        }
    });
    let (_, mutations, notifier) = sdk(&backend);

    let response = mutations
        .test_provider(TestProviderRequest {
            provider: "openai".to_string(),
            model: None,
        })
        .await
        .unwrap();
    assert!(!response.success);

    let events = notifier.events();
    assert_eq!(events[0].kind, NotificationKind::Error);
    assert_eq!(events[0].message, "Provider test failed: invalid API key");
}

#[tokio::test]
async fn blog_generation_invalidates_job_lists() {
    let backend = spawn_backend(ok_everything);
    let (queries, mutations, notifier) = sdk(&backend);
    let filter = JobFilter::default();

    queries.jobs(&filter).await.unwrap();
    mutations
        .generate_blog(
            admin_console_sdk::types::BlogGenerateRequest {
                topic: "rust caching".to_string(),
                ..Default::default()
            },
            true,
        )
        .await
        .unwrap();
    queries.jobs(&filter).await.unwrap();

    assert_eq!(backend.hits("/api/v1/admin/jobs"), 2);
    assert_eq!(notifier.events()[0].message, "Blog generation started");
}
