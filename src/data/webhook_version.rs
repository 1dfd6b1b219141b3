use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio::time::Instant;

use crate::config::WEBHOOK;
use crate::data::market::{CreateMarketData, MarketSnapshot, snapshot_from_json};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Webhook provider: one GET against the upstream automation workflow.
///
/// Filter settings ride along as query parameters. The workflow is free to
/// ignore them; callers re-apply filters locally to whatever comes back.
pub struct WebhookVersion {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl WebhookVersion {
    pub fn new(url: String) -> Self {
        Self {
            url,
            query: Vec::new(),
        }
    }

    pub fn with_query(url: String, query: Vec<(String, String)>) -> Self {
        Self { url, query }
    }
}

#[async_trait]
impl CreateMarketData for WebhookVersion {
    fn signature(&self) -> &'static str {
        "Market Webhook"
    }

    async fn create_market_data(&self) -> Result<MarketSnapshot> {
        let start_time = Instant::now();

        let client = Client::builder()
            .timeout(Duration::from_millis(WEBHOOK.client.timeout_ms))
            .user_agent(WEBHOOK.client.user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_progress {
            log::info!("GET {} with {} query params", self.url, self.query.len());
        }

        let response = client
            .get(&self.url)
            .query(&self.query)
            .send()
            .await
            .with_context(|| format!("Webhook request to {} failed", self.url))?
            .error_for_status()
            .context("Webhook returned a non-success status")?;

        let body: serde_json::Value = response
            .json()
            .await
            .context("Webhook response body is not valid JSON")?;

        let snapshot = snapshot_from_json(&body)?;

        log::info!(
            "Fetched {} listings from webhook in {:?}",
            snapshot.len(),
            start_time.elapsed()
        );

        Ok(snapshot)
    }
}
