//! Demo-mode fallback tests: sample data on error, passthrough on success.

use admin_console_sdk::settings::{Settings, StaleWindows};
use admin_console_sdk::{ApiClient, DemoQueries, Queries, QueryCache};
use std::sync::Arc;
use std::thread;
use tiny_http::{Header, Response, Server};

fn spawn_backend<F>(responder: F) -> String
where
    F: Fn(&str) -> (u16, String) + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    thread::spawn(move || {
        for request in server.incoming_requests() {
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
    format!("http://{}", addr)
}

fn queries(base_url: String) -> Queries {
    let mut settings = Settings::default();
    settings.api.base_url = base_url;
    let client = Arc::new(ApiClient::new(&settings).unwrap());
    let cache = Arc::new(QueryCache::new());
    Queries::new(client, cache, StaleWindows::default())
}

#[tokio::test]
async fn live_data_passes_through_with_the_flag_clear() {
    let base_url = spawn_backend(|url| match url {
        "/api/v1/ai/providers/list" => (
            200,
            r#"{"providers": [{"name": "openai", "is_active": true}], "active_provider": "openai"}"#
                .to_string(),
        ),
        _ => (200, "{}".to_string()),
    });
    let demo = DemoQueries::new(queries(base_url), true);

    let view = demo.providers().await.unwrap();
    assert!(!view.demo_mode);
    assert_eq!(view.data.providers.len(), 1);
    assert_eq!(view.data.active_provider.as_deref(), Some("openai"));
}

#[tokio::test]
async fn backend_errors_are_replaced_by_sample_data() {
    let base_url = spawn_backend(|_| (503, r#"{"detail": "upstream down"}"#.to_string()));
    let demo = DemoQueries::new(queries(base_url), true);

    let providers = demo.providers().await.unwrap();
    assert!(providers.demo_mode);
    assert!(!providers.data.providers.is_empty());

    let status = demo.status().await.unwrap();
    assert!(status.demo_mode);
    assert_eq!(status.data.status, "healthy");

    let jobs = demo.jobs(&Default::default()).await.unwrap();
    assert!(jobs.demo_mode);
    assert_eq!(jobs.data.total, jobs.data.jobs.len() as u64);

    let logs = demo.logs(&Default::default()).await.unwrap();
    assert!(logs.demo_mode);
    assert!(!logs.data.logs.is_empty());
}

#[tokio::test]
async fn disabled_demo_mode_surfaces_the_error() {
    let base_url = spawn_backend(|_| (503, r#"{"detail": "upstream down"}"#.to_string()));
    let demo = DemoQueries::new(queries(base_url), false);

    let err = demo.providers().await.unwrap_err();
    assert_eq!(err.detail(), "upstream down");
}
