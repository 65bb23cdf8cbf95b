use crate::error::ApiError;
use crate::metrics;
use dashmap::DashMap;
use log::{debug, warn};
use std::any::Any;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Stable identifier for a cached query result: an ordered sequence of
/// string parts, the first naming the query and the rest carrying filter
/// parameters. Invalidation matches either the exact key or a prefix of it
/// (so invalidating `["jobs"]` covers every filtered job list).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    pub fn with_part(mut self, part: impl Into<String>) -> Self {
        self.0.push(part.into());
        self
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(":"))
    }
}

struct CachedValue {
    data: Arc<dyn Any + Send + Sync>,
    fetched_at: Instant,
    /// Generation of the slot when the fetch started. A manual invalidation
    /// bumps the slot generation, so a value written by an already in-flight
    /// fetch is immediately stale for the next reader (last write wins).
    generation: u64,
}

#[derive(Default)]
struct Slot {
    value: Option<CachedValue>,
    last_error: Option<String>,
}

#[derive(Default)]
struct SlotState {
    generation: AtomicU64,
    /// Count of successful writes to this slot. Lets a caller that queued
    /// behind an in-flight fetch recognize the value that fetch wrote.
    writes: AtomicU64,
    inner: Mutex<Slot>,
}

/// Shared client-side query cache.
///
/// An explicit, injectable store (no ambient module state): create one at
/// application start, hand `Arc`s to the query/mutation layers, and `reset`
/// it between tests. Entries are created on first use of a key and persist
/// for the session.
///
/// ## Invariants
///
/// - At most one fetch is in flight per key: the per-key mutex is held across
///   the fetch, so concurrent requesters wait and then observe the fresh
///   entry instead of refetching.
/// - Errors are never cached; they are recorded as the entry's last error and
///   surfaced to the caller.
#[derive(Default)]
pub struct QueryCache {
    slots: DashMap<QueryKey, Arc<SlotState>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `key` from cache when inside `stale_window`, otherwise run
    /// `fetch` and cache its result. A zero window always refetches but still
    /// deduplicates concurrent callers.
    pub async fn get_or_fetch<T, F, Fut>(
        &self,
        key: QueryKey,
        stale_window: Duration,
        fetch: F,
    ) -> Result<T, ApiError>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let state = self.slots.entry(key.clone()).or_default().clone();
        let query = key.parts().first().cloned().unwrap_or_default();

        let writes_before = state.writes.load(Ordering::Acquire);
        let mut slot = state.inner.lock().await;

        let current_gen = state.generation.load(Ordering::Acquire);
        if let Some(value) = &slot.value {
            // A write that landed while this caller waited on the lock is the
            // outcome of the fetch it queued behind; adopt it even when the
            // stale window is zero.
            let written_while_waiting = state.writes.load(Ordering::Acquire) != writes_before;
            if value.generation == current_gen
                && (written_while_waiting || value.fetched_at.elapsed() < stale_window)
            {
                if let Some(data) = value.data.downcast_ref::<T>() {
                    metrics::increment_cache_hit(&query);
                    debug!("query cache hit: {}", key);
                    return Ok(data.clone());
                }
            }
        }

        metrics::increment_cache_miss(&query);
        debug!("query cache miss: {}, fetching", key);

        let started_gen = state.generation.load(Ordering::Acquire);
        match fetch().await {
            Ok(data) => {
                slot.value = Some(CachedValue {
                    data: Arc::new(data.clone()),
                    fetched_at: Instant::now(),
                    generation: started_gen,
                });
                slot.last_error = None;
                state.writes.fetch_add(1, Ordering::AcqRel);
                metrics::set_cache_entries(self.slots.len() as f64);
                Ok(data)
            }
            Err(err) => {
                warn!("query {} failed: {}", key, err.detail());
                slot.last_error = Some(err.detail());
                Err(err)
            }
        }
    }

    /// Mark the entry for `key` stale; the next use refetches.
    pub fn invalidate(&self, key: &QueryKey) {
        if let Some(state) = self.slots.get(key) {
            state.generation.fetch_add(1, Ordering::AcqRel);
            debug!("invalidated query {}", key);
        }
    }

    /// Mark every entry whose key starts with `prefix` stale.
    pub fn invalidate_prefix(&self, prefix: &QueryKey) {
        for entry in self.slots.iter() {
            if entry.key().starts_with(prefix) {
                entry.value().generation.fetch_add(1, Ordering::AcqRel);
                debug!("invalidated query {}", entry.key());
            }
        }
    }

    /// Mark every cached entry stale.
    pub fn invalidate_all(&self) {
        for entry in self.slots.iter() {
            entry.value().generation.fetch_add(1, Ordering::AcqRel);
        }
        debug!("invalidated all {} cached queries", self.slots.len());
    }

    /// Drop every entry. Intended for tests and session teardown.
    pub fn reset(&self) {
        self.slots.clear();
        metrics::set_cache_entries(0.0);
    }

    /// Last error recorded for `key`, if the entry exists and is not busy.
    pub fn last_error(&self, key: &QueryKey) -> Option<String> {
        let state = self.slots.get(key)?.clone();
        let slot = state.inner.try_lock().ok()?;
        slot.last_error.clone()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
