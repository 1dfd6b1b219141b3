//! File persistence and serialization configuration

/// Directory path for the cached market snapshot
pub const LISTINGS_CACHE_DIR: &str = "listings_data";

/// Base filename for snapshot cache files (without extension)
pub const LISTINGS_CACHE_FILENAME_WITHOUT_EXT: &str = "listings";

/// Current version of the snapshot serialization format
pub const LISTINGS_CACHE_VERSION: f64 = 1.0;

/// Generate version-specific cache filename
/// Example: "listings_v1.bin"
pub fn listings_cache_filename() -> String {
    format!(
        "{}_v{}.bin",
        LISTINGS_CACHE_FILENAME_WITHOUT_EXT, LISTINGS_CACHE_VERSION
    )
}

/// Directory where CSV exports are written
pub const EXPORT_DIR: &str = "exports";

// App state persistence
/// Path for saving/loading application UI state
pub const APP_STATE_PATH: &str = ".states.json";
