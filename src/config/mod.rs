//! Configuration module for the estate-lens application.

pub mod analysis;
pub mod charts;
pub mod webhook;

mod debug; // Private; forces files to use crate::config::DEBUG_FLAGS not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use analysis::{ANALYSIS, LISTINGS_ACCEPTABLE_AGE_SECONDS};
pub use persistence::{
    APP_STATE_PATH, EXPORT_DIR, LISTINGS_CACHE_DIR, LISTINGS_CACHE_VERSION,
    listings_cache_filename,
};
pub use webhook::{WEBHOOK, WEBHOOK_URL_ENV, resolve_webhook_url};
