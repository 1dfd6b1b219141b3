use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::{LISTINGS_CACHE_DIR, listings_cache_filename};
use crate::data::market::MarketSnapshot;

/// Serialized cache wrapper for the last successfully fetched snapshot.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheFile {
    pub version: f64,
    pub timestamp_ms: i64,
    pub data: MarketSnapshot,
}

impl CacheFile {
    pub fn new(data: MarketSnapshot, version: f64) -> Self {
        Self {
            version,
            timestamp_ms: Utc::now().timestamp_millis(),
            data,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open cache file: {:?}", path))?;
        let mut reader = BufReader::new(file);
        let cache = bincode::deserialize_from(&mut reader)
            .context(format!("Failed to deserialize cache: {:?}", path))?;
        Ok(cache)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)
            .context(format!("Failed to serialize cache to: {}", path.display()))
    }

    pub fn default_cache_path() -> PathBuf {
        PathBuf::from(LISTINGS_CACHE_DIR).join(listings_cache_filename())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Listing;

    fn sample_snapshot() -> MarketSnapshot {
        MarketSnapshot {
            name: "Market Webhook Snapshot".to_string(),
            version: 1.0,
            listings: vec![
                Listing {
                    address: "Fremont, Seattle".to_string(),
                    price_display: "$1,900".to_string(),
                    price: Some(1900.0),
                    bedrooms: Some(1.0),
                    bathrooms: Some(1.0),
                    sqft: Some(640.0),
                    property_type: Some("Apartment".to_string()),
                    neighbourhood: Some("Fremont".to_string()),
                },
                Listing::default(),
            ],
            analysis: Some("Steady month.".to_string()),
        }
    }

    #[test]
    fn test_cache_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings_test.bin");

        let cache = CacheFile::new(sample_snapshot(), 1.0);
        cache.save_to_path(&path).unwrap();

        let loaded = CacheFile::load_from_path(&path).unwrap();
        assert_eq!(loaded.version, 1.0);
        assert_eq!(loaded.timestamp_ms, cache.timestamp_ms);
        assert_eq!(loaded.data.listings.len(), 2);
        assert_eq!(loaded.data.listings[0].price, Some(1900.0));
        assert_eq!(loaded.data.analysis.as_deref(), Some("Steady month."));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.bin");
        assert!(CacheFile::load_from_path(&path).is_err());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cache.bin");
        CacheFile::new(sample_snapshot(), 1.0)
            .save_to_path(&path)
            .unwrap();
        assert!(path.exists());
    }
}
