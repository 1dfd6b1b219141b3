use anyhow::{Context, Result};
use estate_lens::config::LISTINGS_CACHE_VERSION;
use estate_lens::data::cache_file::CacheFile;
use estate_lens::data::snapshot_from_json;
use serde_json::json;

fn main() -> Result<()> {
    build_demo_cache()
}

/// Write a small synthetic snapshot into the cache path so the dashboard can
/// be driven without reaching the live webhook.
fn build_demo_cache() -> Result<()> {
    let body = json!({
        "listings": [
            {"address": "Capitol Hill, Seattle, WA", "price": "$2,450", "bedrooms": 2, "bathrooms": 1, "sqft": 870, "property_type": "Apartment"},
            {"address": "Capitol Hill, Seattle, WA", "price": "$2,950", "bedrooms": 2, "bathrooms": 2, "sqft": 1010, "property_type": "Condo"},
            {"address": "Capitol Hill, Seattle, WA", "price": "$1,850", "bedrooms": 1, "bathrooms": 1, "sqft": 640, "property_type": "Apartment"},
            {"address": "Ballard, Seattle, WA", "price": "$2,100", "bedrooms": 1, "bathrooms": 1, "sqft": 700, "property_type": "Apartment"},
            {"address": "Ballard, Seattle, WA", "price": "$3,400", "bedrooms": 3, "bathrooms": 2, "sqft": 1450, "property_type": "House"},
            {"address": "Ballard, Seattle, WA", "price": "$2,750+", "bedrooms": 2, "bathrooms": 1.5, "sqft": 980, "property_type": "Townhouse"},
            {"address": "Fremont, Seattle, WA", "price": "$1,950", "bedrooms": 1, "bathrooms": 1, "property_type": "Apartment"},
            {"address": "Fremont, Seattle, WA", "price": "$4,200", "bedrooms": 4, "bathrooms": 3, "sqft": 2200, "property_type": "House"},
            {"address": "Fremont, Seattle, WA", "price": "$2,300", "bedrooms": "2", "bathrooms": "1", "sqft": "890", "property_type": "Condo"},
            {"address": "Queen Anne, Seattle, WA", "price": "$3,150", "bedrooms": 2, "bathrooms": 2, "sqft": 1120, "property_type": "Condo"},
            {"address": "Queen Anne, Seattle, WA", "price": "Call for price", "bedrooms": 5, "bathrooms": 4, "sqft": 3400, "property_type": "House"},
            {"address": "No Comma Plaza 12"}
        ],
        "analysis": "Demo snapshot: inventory skews toward 1-2 bedroom rentals; Ballard and Fremont carry the widest price spread."
    });

    let snapshot = snapshot_from_json(&body).context("Demo payload failed to parse")?;

    let output_path = CacheFile::default_cache_path();
    let cache = CacheFile::new(snapshot, LISTINGS_CACHE_VERSION);
    cache.save_to_path(&output_path)?;

    println!(
        "✅ Demo cache written to {:?} with {} listings.",
        output_path,
        cache.data.len()
    );
    Ok(())
}
