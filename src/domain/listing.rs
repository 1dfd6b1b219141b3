use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::price::{extract_neighbourhood, parse_price_display};

// ============================================================================
// RawListing: one record exactly as the webhook sent it
// ============================================================================

/// Permissive wire shape. The upstream schema is not fixed, so every field is
/// optional and numeric-looking fields may arrive as strings or numbers.
/// Unknown keys are retained so nothing the workflow sends is rejected.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct RawListing {
    pub address: Option<Value>,
    pub price: Option<Value>,
    pub bedrooms: Option<Value>,
    pub bathrooms: Option<Value>,
    pub sqft: Option<Value>,
    pub property_type: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Coerce a JSON value to f64: numbers pass through, strings are parsed with
/// the same cleanup rules as price display strings. Anything else is absent.
pub fn value_as_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_price_display(s),
        _ => None,
    }
}

/// Coerce a JSON value to a display string. Numbers are rendered; nulls and
/// structured values are absent.
pub fn value_as_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ============================================================================
// Listing: normalized record the rest of the app consumes
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Listing {
    pub address: String,
    /// Raw price exactly as supplied, for display ("$1,200+")
    pub price_display: String,
    pub price: Option<f64>,
    pub bedrooms: Option<f64>,
    pub bathrooms: Option<f64>,
    pub sqft: Option<f64>,
    pub property_type: Option<String>,
    /// Segment of the address before the first comma
    pub neighbourhood: Option<String>,
}

impl From<RawListing> for Listing {
    fn from(raw: RawListing) -> Self {
        let address = value_as_string(raw.address.as_ref()).unwrap_or_default();
        let price_display = value_as_string(raw.price.as_ref()).unwrap_or_default();
        let neighbourhood = extract_neighbourhood(&address);

        Listing {
            price: value_as_f64(raw.price.as_ref()),
            bedrooms: value_as_f64(raw.bedrooms.as_ref()),
            bathrooms: value_as_f64(raw.bathrooms.as_ref()),
            sqft: value_as_f64(raw.sqft.as_ref()),
            property_type: value_as_string(raw.property_type.as_ref()),
            address,
            price_display,
            neighbourhood,
        }
    }
}

impl Listing {
    /// Bedrooms rounded to a whole count, for grouping.
    pub fn bedroom_count(&self) -> Option<u64> {
        self.bedrooms
            .filter(|b| b.is_finite() && *b >= 0.0)
            .map(|b| b.round() as u64)
    }

    /// One JSON array element, best effort. Objects are field-extracted;
    /// anything else becomes an empty record so the dataset keeps one row per
    /// payload element.
    pub fn from_value(value: &Value) -> Listing {
        match RawListing::deserialize(value) {
            Ok(raw) => raw.into(),
            Err(_) => Listing::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record_normalization() {
        let listing = Listing::from_value(&json!({
            "address": "Capitol Hill, Seattle, WA",
            "price": "$2,450+",
            "bedrooms": 2,
            "bathrooms": "1.5",
            "sqft": "1,050",
            "property_type": "Apartment"
        }));

        assert_eq!(listing.address, "Capitol Hill, Seattle, WA");
        assert_eq!(listing.price_display, "$2,450+");
        assert_eq!(listing.price, Some(2450.0));
        assert_eq!(listing.bedrooms, Some(2.0));
        assert_eq!(listing.bathrooms, Some(1.5));
        assert_eq!(listing.sqft, Some(1050.0));
        assert_eq!(listing.property_type.as_deref(), Some("Apartment"));
        assert_eq!(listing.neighbourhood.as_deref(), Some("Capitol Hill"));
        assert_eq!(listing.bedroom_count(), Some(2));
    }

    #[test]
    fn test_missing_fields_degrade_to_defaults() {
        let listing = Listing::from_value(&json!({ "address": "No Comma Street" }));
        assert_eq!(listing.address, "No Comma Street");
        assert!(listing.price.is_none());
        assert!(listing.bedrooms.is_none());
        assert!(listing.neighbourhood.is_none());
        assert_eq!(listing.price_display, "");
    }

    #[test]
    fn test_unknown_keys_are_tolerated() {
        let listing = Listing::from_value(&json!({
            "price": 1800,
            "listing_agent": {"name": "A. Broker"},
            "days_on_market": 12
        }));
        assert_eq!(listing.price, Some(1800.0));
        assert_eq!(listing.price_display, "1800");
    }

    #[test]
    fn test_non_object_element_becomes_empty_record() {
        let listing = Listing::from_value(&json!("not an object"));
        assert_eq!(listing, Listing::default());
    }

    #[test]
    fn test_unparseable_price_keeps_display_string() {
        let listing = Listing::from_value(&json!({"price": "Contact agent"}));
        assert_eq!(listing.price, None);
        assert_eq!(listing.price_display, "Contact agent");
    }
}
