// Data loading, caching, and webhook access
pub mod cache_file;
pub mod market;
pub mod pre_main_async;
pub mod serde_version;
pub mod webhook_version;

// Re-export commonly used types
pub use market::{CreateMarketData, MarketSnapshot, get_market_data_async, snapshot_from_json};
pub use pre_main_async::fetch_market_data;
pub use serde_version::write_market_data_async;
pub use webhook_version::WebhookVersion;
