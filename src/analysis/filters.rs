use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use strum_macros::{Display, EnumIter};

use crate::domain::Listing;

/// Parameters for one fetch-and-display cycle
///
/// This struct represents every filter setting that shapes the displayed
/// dataset. It implements PartialEq to enable efficient change detection, and
/// it travels to the webhook as query parameters.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FilterParams {
    /// Inclusive (min, max) bounds applied to listings with a numeric price
    pub price_range: Option<(f64, f64)>,
    /// Whole bedroom counts to keep; empty means no constraint
    pub bedrooms: BTreeSet<u64>,
    /// Property types to keep; empty means no constraint
    pub property_types: BTreeSet<String>,
}

// Manual PartialEq implementation to handle f64 comparison
impl PartialEq for FilterParams {
    fn eq(&self, other: &Self) -> bool {
        let range_eq = match (self.price_range, other.price_range) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.0.to_bits() == b.0.to_bits() && a.1.to_bits() == b.1.to_bits()
            }
            _ => false,
        };
        range_eq && self.bedrooms == other.bedrooms && self.property_types == other.property_types
    }
}

impl Eq for FilterParams {}

// Manual Hash implementation to handle f64 hashing
impl std::hash::Hash for FilterParams {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        if let Some((lo, hi)) = self.price_range {
            lo.to_bits().hash(state);
            hi.to_bits().hash(state);
        }
        self.bedrooms.hash(state);
        self.property_types.hash(state);
    }
}

impl FilterParams {
    /// Does this listing survive the current filter settings?
    ///
    /// Missing fields never disqualify a listing on their own: a record
    /// without a numeric price passes any price range, matching the
    /// "missing data is not an error" contract.
    pub fn matches(&self, listing: &Listing) -> bool {
        if let (Some((lo, hi)), Some(price)) = (self.price_range, listing.price) {
            if price < lo || price > hi {
                return false;
            }
        }

        if !self.bedrooms.is_empty() {
            match listing.bedroom_count() {
                Some(count) if self.bedrooms.contains(&count) => {}
                _ => return false,
            }
        }

        if !self.property_types.is_empty() {
            match listing.property_type.as_deref() {
                Some(pt) if self.property_types.contains(pt) => {}
                _ => return false,
            }
        }

        true
    }

    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        listings
            .iter()
            .filter(|l| self.matches(l))
            .cloned()
            .collect()
    }

    /// Encode the filter settings as webhook query parameters. The upstream
    /// workflow may honor or ignore them; local filtering runs either way.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();

        if let Some((lo, hi)) = self.price_range {
            query.push(("min_price".to_string(), format!("{:.0}", lo)));
            query.push(("max_price".to_string(), format!("{:.0}", hi)));
        }

        if !self.bedrooms.is_empty() {
            let csv = self
                .bedrooms
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(",");
            query.push(("bedrooms".to_string(), csv));
        }

        if !self.property_types.is_empty() {
            let csv = self
                .property_types
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(",");
            query.push(("property_types".to_string(), csv));
        }

        query
    }
}

/// Sort options for the listings table
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter,
)]
pub enum SortKey {
    #[default]
    #[strum(to_string = "Price")]
    Price,
    #[strum(to_string = "Bedrooms")]
    Bedrooms,
    #[strum(to_string = "Address")]
    Address,
}

/// Sort listings descending by the selected key. Listings missing the key
/// sort to the end.
pub fn sort_listings(listings: &mut [Listing], key: SortKey) {
    match key {
        SortKey::Price => listings.sort_by(|a, b| compare_desc(a.price, b.price)),
        SortKey::Bedrooms => listings.sort_by(|a, b| compare_desc(a.bedrooms, b.bedrooms)),
        SortKey::Address => listings.sort_by(|a, b| b.address.cmp(&a.address)),
    }
}

fn compare_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(price: Option<f64>, bedrooms: Option<f64>, property_type: Option<&str>) -> Listing {
        Listing {
            price,
            bedrooms,
            property_type: property_type.map(str::to_string),
            ..Listing::default()
        }
    }

    #[test]
    fn test_price_range_filter() {
        let params = FilterParams {
            price_range: Some((1000.0, 2000.0)),
            ..FilterParams::default()
        };
        assert!(params.matches(&listing(Some(1500.0), None, None)));
        assert!(!params.matches(&listing(Some(999.0), None, None)));
        assert!(!params.matches(&listing(Some(2001.0), None, None)));
        // Missing price is not a disqualifier
        assert!(params.matches(&listing(None, None, None)));
    }

    #[test]
    fn test_bedrooms_filter() {
        let params = FilterParams {
            bedrooms: BTreeSet::from([2, 3]),
            ..FilterParams::default()
        };
        assert!(params.matches(&listing(None, Some(2.0), None)));
        assert!(!params.matches(&listing(None, Some(4.0), None)));
        // An active bedrooms filter excludes listings without bedroom data
        assert!(!params.matches(&listing(None, None, None)));
    }

    #[test]
    fn test_property_type_filter() {
        let params = FilterParams {
            property_types: BTreeSet::from(["Condo".to_string()]),
            ..FilterParams::default()
        };
        assert!(params.matches(&listing(None, None, Some("Condo"))));
        assert!(!params.matches(&listing(None, None, Some("House"))));
        assert!(!params.matches(&listing(None, None, None)));
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let params = FilterParams::default();
        let all = vec![
            listing(Some(1.0), None, None),
            listing(None, Some(9.0), Some("Loft")),
        ];
        assert_eq!(params.apply(&all).len(), 2);
    }

    #[test]
    fn test_to_query_encoding() {
        let params = FilterParams {
            price_range: Some((800.0, 2600.0)),
            bedrooms: BTreeSet::from([1, 3]),
            property_types: BTreeSet::from(["Apartment".to_string(), "Condo".to_string()]),
        };
        let query = params.to_query();
        assert!(query.contains(&("min_price".to_string(), "800".to_string())));
        assert!(query.contains(&("max_price".to_string(), "2600".to_string())));
        assert!(query.contains(&("bedrooms".to_string(), "1,3".to_string())));
        assert!(query.contains(&("property_types".to_string(), "Apartment,Condo".to_string())));
    }

    #[test]
    fn test_default_params_encode_to_nothing() {
        assert!(FilterParams::default().to_query().is_empty());
    }

    #[test]
    fn test_change_detection_via_eq() {
        let a = FilterParams {
            price_range: Some((1000.0, 2000.0)),
            ..FilterParams::default()
        };
        let mut b = a.clone();
        assert_eq!(a, b);
        b.price_range = Some((1000.0, 2100.0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_sort_listings_descending() {
        let mut listings = vec![
            listing(Some(100.0), None, None),
            listing(None, None, None),
            listing(Some(300.0), None, None),
        ];
        sort_listings(&mut listings, SortKey::Price);
        assert_eq!(listings[0].price, Some(300.0));
        assert_eq!(listings[1].price, Some(100.0));
        assert_eq!(listings[2].price, None);
    }
}
