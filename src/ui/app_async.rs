use chrono::Local;
use eframe::egui;
use poll_promise::Promise;
use std::time::{Duration, Instant};

use crate::analysis::FilterParams;
use crate::data::MarketSnapshot;
use crate::data::market::CreateMarketData;
use crate::data::serde_version::write_market_data_locally;
use crate::data::webhook_version::WebhookVersion;
use crate::ui::app::{AppError, EstateLensApp};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub(super) struct AsyncFetchResult {
    pub(super) result: Result<MarketSnapshot, AppError>,
    pub(super) params: FilterParams,
    elapsed_time: Duration,
}

impl AsyncFetchResult {
    pub(super) fn elapsed_time(&self) -> Duration {
        self.elapsed_time
    }
}

impl EstateLensApp {
    pub(super) fn start_async_fetch(&mut self, params: FilterParams) {
        if self.fetch_promise.is_some() {
            return;
        }

        if self.webhook_url.is_empty() {
            self.data_state.last_error = Some(AppError::DataNotAvailable);
            return;
        }

        self.fetch_trigger.on_job_scheduled();

        let url = self.webhook_url.clone();
        let params_clone = params.clone();

        let promise =
            Promise::spawn_thread("webhook_fetch", move || run_webhook_fetch(url, params_clone));

        self.fetch_promise = Some(promise);
    }

    pub(super) fn poll_async_fetch(&mut self, ctx: &egui::Context) {
        let outcome = self.fetch_promise.as_ref().and_then(|promise| {
            promise.ready().map(|fetch_result| {
                let result = fetch_result
                    .result
                    .as_ref()
                    .map(|snapshot| snapshot.clone())
                    .map_err(|err| err.clone());
                let params = fetch_result.params.clone();
                let elapsed = fetch_result.elapsed_time();
                (result, params, elapsed)
            })
        });

        if let Some((result, params, elapsed)) = outcome {
            self.fetch_promise = None;

            match result {
                Ok(snapshot) => {
                    // A fresh snapshot wholly replaces the previous one
                    self.data_state.snapshot = snapshot;
                    self.data_state.source_signature = Some("Market Webhook");
                    self.data_state.fetched_at = Some(Local::now());
                    self.data_state.last_error = None;
                    self.last_fetched_params = Some(params);

                    self.recompute_display();

                    if self.fetch_trigger.on_job_success() {
                        // Filters moved while the fetch was in flight
                        self.mark_filters_stale("filters changed during fetch");
                    }

                    if elapsed.as_millis() > 100 {
                        #[cfg(debug_assertions)]
                        log::info!("✅ Webhook fetch completed in {:.2}s", elapsed.as_secs_f32());
                    }
                }
                Err(error) => {
                    // Error state replaces the charts until a retry succeeds
                    self.data_state.last_error = Some(error.clone());
                    self.fetch_trigger.on_job_failure(error.to_string());

                    #[cfg(debug_assertions)]
                    log::error!("❌ Webhook fetch failed: {}", error);
                }
            }

            self.drain_fetch_trigger();
        } else if self.fetch_promise.is_some() {
            ctx.request_repaint();
        }
    }

    pub(super) fn is_fetching(&self) -> bool {
        self.fetch_promise.is_some()
    }
}

fn run_webhook_fetch(url: String, params: FilterParams) -> AsyncFetchResult {
    let fetch_start = Instant::now();

    let result = fetch_snapshot_blocking(&url, &params).map_err(|e| {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_progress {
            log::info!("Webhook fetch error detail: {:#}", e);
        }
        AppError::FetchFailed(format!("{:#}", e))
    });

    AsyncFetchResult {
        result,
        params,
        elapsed_time: fetch_start.elapsed(),
    }
}

/// Runs on the promise's worker thread: a private current-thread runtime
/// drives the async HTTP client to completion, then the snapshot is cached
/// for the next session.
fn fetch_snapshot_blocking(url: &str, params: &FilterParams) -> anyhow::Result<MarketSnapshot> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let provider = WebhookVersion::with_query(url.to_string(), params.to_query());
    let snapshot = rt.block_on(provider.create_market_data())?;

    if let Err(e) = write_market_data_locally(provider.signature(), &snapshot) {
        log::error!("⚠️  Failed to write cache: {:#}", e);
    }

    Ok(snapshot)
}
