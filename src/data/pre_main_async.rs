// Async code to run in main before egui starts up

use anyhow::Result;

use crate::Cli;
use crate::config::{LISTINGS_CACHE_VERSION, resolve_webhook_url};
use crate::data::market::{CreateMarketData, MarketSnapshot, get_market_data_async};
use crate::data::serde_version::{SerdeVersion, check_local_data_validity};
use crate::data::webhook_version::WebhookVersion;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

// The async function to load the initial snapshot before the GUI starts at
// all (so can't rely on gui app state)
pub async fn fetch_market_data(
    listings_acceptable_age_secs: i64,
    args: &Cli,
) -> Result<(MarketSnapshot, &'static str)> {
    // Loading logic: if `check_local_data_validity` fails, the only choice is
    // the webhook. Otherwise both providers are available and we prioritize
    // whatever the user asked for (--prefer-api skips straight to the webhook).
    let url = resolve_webhook_url(args.webhook_url.as_deref());

    let providers: Vec<Box<dyn CreateMarketData>> = {
        let api_first = args.prefer_api;
        match (
            api_first,
            check_local_data_validity(listings_acceptable_age_secs, LISTINGS_CACHE_VERSION),
        ) {
            (false, Ok(_)) => vec![
                Box::new(SerdeVersion),
                Box::new(WebhookVersion::new(url)),
            ], // local first
            (true, Ok(_)) => vec![
                Box::new(WebhookVersion::new(url)),
                Box::new(SerdeVersion),
            ], // webhook first
            (_, Err(e)) => {
                log::warn!("⚠️  Local cache validation failed: {:#}", e);
                log::warn!("⚠️  Falling back to the market webhook...");
                vec![Box::new(WebhookVersion::new(url))] // webhook only
            }
        }
    };

    let (snapshot, snapshot_signature) = get_market_data_async(&providers).await?;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_serde {
        log::info!(
            "Successfully retrieved market data using: {}.",
            snapshot_signature
        );
        log::info!("Data fetch complete.");
    }
    Ok((snapshot, snapshot_signature))
}
