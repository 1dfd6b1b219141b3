#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use estate_lens::{AppBootstrap, Cli, fetch_market_data, run_app};

use clap::Parser;
use eframe::NativeOptions;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use estate_lens::config::{APP_STATE_PATH, LISTINGS_ACCEPTABLE_AGE_SECONDS, resolve_webhook_url};
use estate_lens::data::write_market_data_async;

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    let webhook_url = resolve_webhook_url(args.webhook_url.as_deref());

    // C. Data Loading (Blocking)
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let bootstrap = match rt.block_on(fetch_market_data(LISTINGS_ACCEPTABLE_AGE_SECONDS, &args)) {
        Ok((snapshot, signature)) => {
            // D. Background Cache Write
            let cache_data = snapshot.clone();
            rt.spawn(async move {
                if let Err(e) = write_market_data_async(signature, cache_data).await {
                    log::error!("⚠️  Failed to write cache: {}", e);
                }
            });

            AppBootstrap {
                snapshot,
                signature: Some(signature),
                startup_error: None,
                webhook_url,
            }
        }
        Err(e) => {
            // The session still opens; the error panel offers a retry
            log::error!("Initial market data fetch failed: {:#}", e);
            AppBootstrap {
                snapshot: Default::default(),
                signature: None,
                startup_error: Some(format!("{:#}", e)),
                webhook_url,
            }
        }
    };

    // E. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        "Estate Lens - Fetch. Filter. Focus.",
        options,
        Box::new(move |cc| Ok(run_app(cc, bootstrap))),
    )
}
