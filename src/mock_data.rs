//! Static sample data served in demo mode when the backend is unreachable.
//!
//! One sample set per dashboard query, shaped like real backend responses so
//! pages render identically with and without a backend.

use crate::types::*;
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use std::collections::HashMap;

pub fn sample_health() -> Value {
    json!({ "status": "ok", "service": "blog-writer-api" })
}

pub fn sample_status() -> StatusReport {
    StatusReport {
        status: "healthy".to_string(),
        version: Some("1.4.2".to_string()),
        environment: Some("demo".to_string()),
        uptime_seconds: Some(86_400.0),
        ..Default::default()
    }
}

pub fn sample_providers() -> ProviderList {
    ProviderList {
        providers: vec![
            ProviderInfo {
                name: "openai".to_string(),
                model: Some("gpt-4o".to_string()),
                enabled: true,
                is_active: true,
                ..Default::default()
            },
            ProviderInfo {
                name: "anthropic".to_string(),
                model: Some("claude-sonnet".to_string()),
                enabled: true,
                is_active: false,
                ..Default::default()
            },
            ProviderInfo {
                name: "gemini".to_string(),
                model: Some("gemini-pro".to_string()),
                enabled: false,
                is_active: false,
                ..Default::default()
            },
        ],
        active_provider: Some("openai".to_string()),
        ..Default::default()
    }
}

pub fn sample_provider_health() -> ProviderHealthMap {
    let mut health = HashMap::new();
    health.insert(
        "openai".to_string(),
        json!({ "healthy": true, "latency_ms": 240 }),
    );
    health.insert(
        "anthropic".to_string(),
        json!({ "healthy": true, "latency_ms": 310 }),
    );
    health.insert(
        "gemini".to_string(),
        json!({ "healthy": false, "error": "provider disabled" }),
    );
    health
}

pub fn sample_provider_stats() -> ProviderStats {
    let mut by_provider = HashMap::new();
    by_provider.insert(
        "openai".to_string(),
        json!({ "requests": 1120, "tokens": 2_431_000, "cost_usd": 38.12 }),
    );
    by_provider.insert(
        "anthropic".to_string(),
        json!({ "requests": 304, "tokens": 789_500, "cost_usd": 11.47 }),
    );
    ProviderStats {
        total_requests: 1424,
        total_tokens: 3_220_500,
        total_cost_usd: 49.59,
        by_provider,
        ..Default::default()
    }
}

pub fn sample_usage() -> UsageReport {
    UsageReport {
        total_requests: 1424,
        total_tokens: 3_220_500,
        period: Some("last_30_days".to_string()),
        ..Default::default()
    }
}

pub fn sample_costs() -> CostReport {
    let mut by_provider = HashMap::new();
    by_provider.insert("openai".to_string(), 38.12);
    by_provider.insert("anthropic".to_string(), 11.47);
    CostReport {
        total_cost_usd: 49.59,
        by_provider,
        ..Default::default()
    }
}

pub fn sample_cache_stats() -> CacheStats {
    CacheStats {
        hits: 8_412,
        misses: 1_733,
        hit_rate: 0.829,
        entries: 512,
        ..Default::default()
    }
}

pub fn sample_jobs() -> JobList {
    let now = Utc::now();
    JobList {
        jobs: vec![
            Job {
                id: "job-demo-001".to_string(),
                status: JobStatus::Running,
                job_type: Some("blog_generation".to_string()),
                created_at: Some(now - Duration::minutes(3)),
                updated_at: Some(now - Duration::seconds(20)),
                ..Default::default()
            },
            Job {
                id: "job-demo-002".to_string(),
                status: JobStatus::Completed,
                job_type: Some("blog_generation".to_string()),
                created_at: Some(now - Duration::hours(2)),
                updated_at: Some(now - Duration::hours(1)),
                result: Some(json!({ "post_id": "p-8841" })),
                ..Default::default()
            },
            Job {
                id: "job-demo-003".to_string(),
                status: JobStatus::Failed,
                job_type: Some("blog_generation".to_string()),
                created_at: Some(now - Duration::hours(6)),
                updated_at: Some(now - Duration::hours(6)),
                error: Some("provider quota exceeded".to_string()),
                ..Default::default()
            },
        ],
        total: 3,
        ..Default::default()
    }
}

pub fn sample_logs() -> LogPage {
    let now = Utc::now();
    LogPage {
        logs: vec![
            LogEntry {
                timestamp: Some(now - Duration::seconds(12)),
                level: "INFO".to_string(),
                message: "blog generation job job-demo-001 started".to_string(),
                logger: Some("jobs.worker".to_string()),
                ..Default::default()
            },
            LogEntry {
                timestamp: Some(now - Duration::minutes(4)),
                level: "WARNING".to_string(),
                message: "provider gemini disabled, skipping health probe".to_string(),
                logger: Some("providers.health".to_string()),
                ..Default::default()
            },
            LogEntry {
                timestamp: Some(now - Duration::minutes(9)),
                level: "ERROR".to_string(),
                message: "job job-demo-003 failed: provider quota exceeded".to_string(),
                logger: Some("jobs.worker".to_string()),
                ..Default::default()
            },
        ],
        total: 3,
        ..Default::default()
    }
}
