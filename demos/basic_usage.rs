//! Basic SDK setup: load settings, build the client, run a few cached
//! queries and one mutation.
//!
//! Run with a reachable backend (or none, to see the demo-mode fallback):
//!
//! ```bash
//! NEXT_PUBLIC_API_URL=http://localhost:8000 cargo run --example basic_usage
//! ```

use admin_console_sdk::{
    ApiClient, DemoQueries, Mutations, Queries, QueryCache, Settings,
};
use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    println!("1. Loading settings...");
    let settings = Settings::new()?;
    println!("   base URL: {}", settings.api.base_url);

    println!("2. Building client and cache...");
    let client = Arc::new(ApiClient::new(&settings)?);
    let cache = Arc::new(QueryCache::new());
    let queries = Queries::new(Arc::clone(&client), Arc::clone(&cache), settings.stale.clone());
    let mutations = Mutations::new(Arc::clone(&client), Arc::clone(&cache));

    println!("3. Fetching system status (cached for {} s)...", settings.stale.status_seconds);
    match queries.status().await {
        Ok(status) => println!("   status: {}", status.status),
        Err(err) => println!("   status query failed: {}", err.detail()),
    }

    println!("4. Fetching providers twice; the second use is a cache hit...");
    match queries.providers().await {
        Ok(list) => println!("   {} providers configured", list.providers.len()),
        Err(err) => println!("   provider query failed: {}", err.detail()),
    }
    if let Ok(list) = queries.providers().await {
        println!("   active provider: {:?}", list.active_provider);
    }

    println!("5. Switching the active provider (invalidates providers + stats)...");
    if let Err(err) = mutations.switch_provider("openai").await {
        println!("   switch failed: {}", err.detail());
    }

    println!("6. Same queries through the demo-mode fallback...");
    let demo = DemoQueries::new(queries, true);
    let providers = demo.providers().await?;
    println!(
        "   {} providers ({})",
        providers.data.providers.len(),
        if providers.demo_mode { "sample data" } else { "live" }
    );

    println!("Done. Cached entries: {}", cache.len());
    Ok(())
}
