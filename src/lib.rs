#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod export;
pub mod ui;

// Re-export commonly used types
pub use analysis::{FilterParams, MarketSummary, SortKey};
pub use data::{MarketSnapshot, fetch_market_data};
pub use domain::Listing;
pub use ui::{AppBootstrap, EstateLensApp};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the webhook as primary source instead of the local cache
    #[arg(long, default_value_t = false)]
    pub prefer_api: bool,

    /// Override the market webhook URL for this run
    #[arg(long)]
    pub webhook_url: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, bootstrap: AppBootstrap) -> Box<dyn eframe::App> {
    let app = ui::EstateLensApp::new(cc, bootstrap);
    Box::new(app)
}
