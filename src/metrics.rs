// Cache and request counters, exported via the `metrics` facade when the
// `observability` feature is enabled, stubbed to no-ops otherwise.

#[cfg(feature = "observability")]
pub use metrics::{describe_counter, describe_gauge, gauge, increment_counter};

#[cfg(not(feature = "observability"))]
#[macro_export]
macro_rules! increment_counter {
    ($name:expr $(, $label:expr => $label_value:expr)* $(,)?) => {{
        let _ = $name;
        $(let _ = $label_value;)*
    }};
}

#[cfg(not(feature = "observability"))]
#[macro_export]
macro_rules! gauge {
    ($name:expr, $value:expr $(, $label:expr => $label_value:expr)* $(,)?) => {{
        let _ = $name;
        let _ = $value;
    }};
}

#[cfg(not(feature = "observability"))]
#[macro_export]
macro_rules! describe_counter {
    ($name:expr, $desc:expr) => {};
}

#[cfg(not(feature = "observability"))]
#[macro_export]
macro_rules! describe_gauge {
    ($name:expr, $desc:expr) => {};
}

#[cfg(not(feature = "observability"))]
use crate::{describe_counter, describe_gauge, gauge, increment_counter};

/// Initializes metric descriptions. Call once at startup.
pub fn describe_metrics() {
    describe_counter!(
        "sdk_query_cache_hits_total",
        "Query results served from the client-side cache."
    );
    describe_counter!(
        "sdk_query_cache_misses_total",
        "Query results that required a backend fetch."
    );
    describe_counter!(
        "sdk_api_requests_total",
        "HTTP requests issued to the admin backend."
    );
    describe_gauge!("sdk_query_cache_entries", "Entries held in the query cache.");
}

pub fn increment_cache_hit(query: &str) {
    increment_counter!("sdk_query_cache_hits_total", "query" => query.to_string());
}

pub fn increment_cache_miss(query: &str) {
    increment_counter!("sdk_query_cache_misses_total", "query" => query.to_string());
}

pub fn increment_api_request(path: &str) {
    increment_counter!("sdk_api_requests_total", "path" => path.to_string());
}

pub fn set_cache_entries(count: f64) {
    gauge!("sdk_query_cache_entries", count);
}
