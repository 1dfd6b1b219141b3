use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use crate::config::WEBHOOK;
use crate::domain::Listing;

#[async_trait]
pub trait CreateMarketData {
    // Either create a market snapshot OR return an anyhow::error
    async fn create_market_data(&self) -> Result<MarketSnapshot>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

pub async fn get_market_data_async(
    implementations: &[Box<dyn CreateMarketData>],
) -> Result<(MarketSnapshot, &'static str)> {
    for imp in implementations {
        match imp.create_market_data().await {
            Ok(data) => {
                let signature = imp.signature();
                return Ok((data, signature));
            }
            Err(e) => {
                log::info!("Error with an async implementation: {}", e);
                // Continue to the next implementation
            }
        }
    }
    Err(anyhow!("All async implementations failed to create data"))
}

/// One fetch cycle's worth of market data. Built fresh per fetch and never
/// mutated afterwards; a new fetch replaces the whole snapshot.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct MarketSnapshot {
    pub name: String, // Metadata e.g. "Market Webhook Snapshot".
    pub version: f64,
    pub listings: Vec<Listing>,
    /// AI-generated market narrative, when the workflow supplies one
    pub analysis: Option<String>,
}

impl MarketSnapshot {
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn unique_property_types(&self) -> Vec<String> {
        // BTreeSet maintains sorted order and ensures uniqueness
        self.listings
            .iter()
            .filter_map(|l| l.property_type.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn unique_bedroom_counts(&self) -> Vec<u64> {
        self.listings
            .iter()
            .filter_map(|l| l.bedroom_count())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Convert a parsed webhook response body into a snapshot.
///
/// Accepts the workflow's envelope shape `{"listings": [...], "analysis":
/// "..."}` as well as a bare top-level array. Every array element maps to
/// exactly one listing; per-field extraction is best effort.
pub fn snapshot_from_json(body: &Value) -> Result<MarketSnapshot> {
    let (records, analysis) = match body {
        Value::Array(records) => (records, None),
        Value::Object(map) => {
            let records = map
                .get("listings")
                .and_then(Value::as_array)
                .ok_or_else(|| anyhow!("Response object carries no listings array"))?;
            let analysis = map
                .get("analysis")
                .and_then(Value::as_str)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());
            (records, analysis)
        }
        _ => bail!("Response body is neither an object nor an array"),
    };

    let mut listings: Vec<Listing> = records.par_iter().map(Listing::from_value).collect();

    if listings.len() > WEBHOOK.max_listings {
        log::warn!(
            "Truncating response from {} to {} listings",
            listings.len(),
            WEBHOOK.max_listings
        );
        listings.truncate(WEBHOOK.max_listings);
    }

    Ok(MarketSnapshot {
        name: "Market Webhook Snapshot".to_string(),
        version: crate::config::LISTINGS_CACHE_VERSION,
        listings,
        analysis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shape_preserves_count() {
        let body = json!({
            "listings": [
                {"address": "A, Town", "price": "$100"},
                {"address": "B, Town", "price": "$200"},
                {"unrelated": true}
            ],
            "analysis": "Supply remains tight."
        });

        let snapshot = snapshot_from_json(&body).unwrap();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.analysis.as_deref(), Some("Supply remains tight."));
    }

    #[test]
    fn test_bare_array_preserves_count() {
        let body = json!([
            {"region": "X", "price": 100},
            {"region": "Y", "price": 200}
        ]);

        let snapshot = snapshot_from_json(&body).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.analysis.is_none());
    }

    #[test]
    fn test_non_object_elements_still_count() {
        let body = json!([{"price": 100}, "stray string", null]);
        let snapshot = snapshot_from_json(&body).unwrap();
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn test_malformed_bodies_fail() {
        assert!(snapshot_from_json(&json!("just text")).is_err());
        assert!(snapshot_from_json(&json!(42)).is_err());
        assert!(snapshot_from_json(&json!({"payload": []})).is_err());
    }

    #[test]
    fn test_empty_analysis_is_dropped() {
        let body = json!({"listings": [], "analysis": "   "});
        let snapshot = snapshot_from_json(&body).unwrap();
        assert!(snapshot.analysis.is_none());
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_unique_helpers() {
        let body = json!([
            {"bedrooms": 2, "property_type": "Condo"},
            {"bedrooms": 1, "property_type": "Apartment"},
            {"bedrooms": 2, "property_type": "Condo"}
        ]);
        let snapshot = snapshot_from_json(&body).unwrap();
        assert_eq!(snapshot.unique_bedroom_counts(), vec![1, 2]);
        assert_eq!(
            snapshot.unique_property_types(),
            vec!["Apartment".to_string(), "Condo".to_string()]
        );
    }
}
