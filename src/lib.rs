//! # Admin Console SDK
//!
//! A Rust client library for the blog-writer admin backend. This SDK provides
//! the data-fetching layer an admin console embeds: authenticated HTTP access,
//! client-side query caching with request deduplication, declarative cache
//! invalidation for mutations, and a demo-mode fallback.
//!
//! ## Overview
//!
//! The SDK separates reads from writes and routes both through one shared
//! cache. It focuses on:
//!
//! - **Client**: one typed method per backend endpoint, bearer-token auth
//! - **Queries**: named reads, each bound to a cache key and a stale window
//! - **Mutations**: state changes with declared invalidation sets and
//!   user notifications
//! - **Fallback**: centralized sample-data substitution when the backend is
//!   unreachable
//!
//! ## Architecture
//!
//! ### Transport Layer
//! [`ApiClient`] wraps `reqwest` with the base URL, a uniform 30 s timeout and
//! per-request bearer injection from a shared [`TokenStore`]. Errors are never
//! recovered here; a 401 is logged and propagated.
//!
//! ### Cache Layer
//! [`QueryCache`] holds one slot per [`QueryKey`]. A per-key lock held across
//! the fetch gives the single-flight guarantee: concurrent requesters for one
//! key share a single network call. Invalidation marks entries stale by exact
//! key, by prefix, or wholesale.
//!
//! ### Query & Mutation Layer
//! [`Queries`] binds each read endpoint to its key and stale window;
//! [`Mutations`] runs each write and then invalidates the query keys it
//! affects, emitting a success or error notification through [`Notify`].
//!
//! ## Example
//!
//! ```no_run
//! use admin_console_sdk::{ApiClient, Mutations, Queries, QueryCache, Settings};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::new()?;
//! let client = Arc::new(ApiClient::new(&settings)?);
//! let cache = Arc::new(QueryCache::new());
//!
//! let queries = Queries::new(Arc::clone(&client), Arc::clone(&cache), settings.stale);
//! let status = queries.status().await?;
//! println!("backend status: {}", status.status);
//! # Ok(())
//! # }
//! ```

// Transport Layer
/// Authenticated HTTP client, one method per backend endpoint
pub mod client;
/// Shared bearer-token storage
pub mod auth;
/// Request and response models
pub mod types;
/// Library error type
pub mod error;

// Cache Layer
/// Keyed stale-window cache with single-flight fetches
pub mod query_cache;

// Query & Mutation Layer
/// Named read queries and their cache keys
pub mod queries;
/// Mutation helpers with invalidation sets and notifications
pub mod mutations;
/// Notification sink trait and default implementations
pub mod notify;

// Demo Mode
/// Centralized stale-while-error fallback
pub mod fallback;
/// Static sample data for demo mode
pub mod mock_data;

// Ambient
/// Settings loaded from file and environment
pub mod settings;
/// Metric helpers, active behind the `observability` feature
pub mod metrics;

pub use auth::TokenStore;
pub use client::ApiClient;
pub use error::ApiError;
pub use fallback::{DemoQueries, DemoView};
pub use mutations::Mutations;
pub use notify::{LogNotifier, MemoryNotifier, Notification, NotificationKind, Notify};
pub use queries::Queries;
pub use query_cache::{QueryCache, QueryKey};
pub use settings::{Settings, StaleWindows, DEFAULT_BASE_URL};
