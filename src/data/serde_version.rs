#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::Utc;

use crate::data::cache_file::CacheFile;
use crate::data::market::{CreateMarketData, MarketSnapshot};

fn how_many_seconds_ago(timestamp_ms: i64) -> i64 {
    (Utc::now().timestamp_millis() - timestamp_ms) / 1000
}

pub fn check_local_data_validity(recency_required_secs: i64, version_required: f64) -> Result<()> {
    let full_path = CacheFile::default_cache_path();

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_serde {
        log::info!("Checking validity of local cache at {:?}...", full_path);
    }
    let cache = CacheFile::load_from_path(&full_path)?;

    // Check version
    if cache.version != version_required {
        bail!(
            "Cache version mismatch: file v{} vs required v{}",
            cache.version,
            version_required
        );
    }

    // Check recency
    let seconds_ago = how_many_seconds_ago(cache.timestamp_ms);
    if seconds_ago > recency_required_secs {
        bail!(
            "Cache too old: created {} seconds ago (limit: {} seconds)",
            seconds_ago,
            recency_required_secs
        );
    }

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_serde {
        log::info!(
            "✅ Cache valid: v{}, {}s old (limit {}s)",
            cache.version,
            seconds_ago,
            recency_required_secs
        );
    }

    Ok(())
}

/// Write the snapshot to the binary cache file.
/// Only webhook-sourced snapshots are worth persisting.
pub fn write_market_data_locally(
    snapshot_signature: &'static str,
    snapshot: &MarketSnapshot,
) -> Result<()> {
    if snapshot_signature != "Market Webhook" {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_serde {
            log::info!("Skipping cache write (data not from the webhook)");
        }
        return Ok(());
    }

    let full_path = CacheFile::default_cache_path();

    let cache = CacheFile::new(snapshot.clone(), crate::config::LISTINGS_CACHE_VERSION);
    cache.save_to_path(&full_path)?;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_serde {
        log::info!(
            "✅ Cache written: {:?} ({} listings)",
            full_path,
            snapshot.len()
        );
    }

    Ok(())
}

/// Async wrapper for write_market_data_locally
/// Spawns blocking task to avoid freezing UI
pub async fn write_market_data_async(
    snapshot_signature: &'static str,
    snapshot: MarketSnapshot,
) -> Result<()> {
    tokio::task::spawn_blocking(move || write_market_data_locally(snapshot_signature, &snapshot))
        .await
        .context("Cache write task panicked")?
}

pub struct SerdeVersion;

#[async_trait]
impl CreateMarketData for SerdeVersion {
    fn signature(&self) -> &'static str {
        "Local Cache"
    }

    async fn create_market_data(&self) -> Result<MarketSnapshot> {
        let full_path = CacheFile::default_cache_path();

        #[cfg(debug_assertions)]
        let start_time = DEBUG_FLAGS.print_serde.then(|| {
            log::info!("Reading cache from: {:?}...", full_path);
            std::time::Instant::now()
        });

        let cache = tokio::task::spawn_blocking(move || CacheFile::load_from_path(&full_path))
            .await
            .context("Deserialization task panicked")?
            .context("Failed to load cache file")?;

        #[cfg(debug_assertions)]
        if let Some(start) = start_time {
            let elapsed = start.elapsed();
            log::info!(
                "✅ Cache loaded: {} listings in {:.2}s",
                cache.data.len(),
                elapsed.as_secs_f64()
            );
        }

        Ok(cache.data)
    }
}
