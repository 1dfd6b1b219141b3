use argminmax::ArgMinMax;
use itertools::Itertools;
use statrs::statistics::{Data, OrderStatistics, Statistics};
use std::collections::BTreeMap;

use crate::domain::Listing;

// ============================================================================
// MarketSummary: headline metrics over one (filtered) dataset
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketSummary {
    pub total_listings: usize,
    pub avg_price: Option<f64>,
    pub median_price: Option<f64>,
    pub avg_bedrooms: Option<f64>,
    /// (min, max) over listings that carry a numeric price
    pub price_range: Option<(f64, f64)>,
}

pub fn summarize(listings: &[Listing]) -> MarketSummary {
    let prices: Vec<f64> = listings.iter().filter_map(|l| l.price).collect();
    let bedrooms: Vec<f64> = listings.iter().filter_map(|l| l.bedrooms).collect();

    let price_range = if prices.is_empty() {
        None
    } else {
        let (min_idx, max_idx) = prices.argminmax();
        Some((prices[min_idx], prices[max_idx]))
    };

    let avg_price = (!prices.is_empty()).then(|| prices.iter().mean());
    let median_price = (!prices.is_empty()).then(|| Data::new(prices.clone()).median());
    let avg_bedrooms = (!bedrooms.is_empty()).then(|| bedrooms.iter().mean());

    MarketSummary {
        total_listings: listings.len(),
        avg_price,
        median_price,
        avg_bedrooms,
        price_range,
    }
}

// ============================================================================
// Price distribution histogram
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Bin the numeric prices into `bin_count` equal-width buckets spanning the
/// observed min..max. A flat dataset (all prices identical) collapses to a
/// single bucket.
pub fn price_histogram(listings: &[Listing], bin_count: usize) -> Vec<HistogramBin> {
    let prices: Vec<f64> = listings.iter().filter_map(|l| l.price).collect();
    if prices.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let (min_idx, max_idx) = prices.argminmax();
    let (min, max) = (prices[min_idx], prices[max_idx]);

    if max <= min {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: prices.len(),
        }];
    }

    let width = (max - min) / bin_count as f64;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for price in prices {
        // The max price lands in the last bucket rather than one past the end
        let idx = (((price - min) / width) as usize).min(bin_count - 1);
        bins[idx].count += 1;
    }

    bins
}

// ============================================================================
// Bedroom and neighbourhood aggregates
// ============================================================================

/// Listing counts per whole bedroom count, ascending by bedrooms.
pub fn bedroom_counts(listings: &[Listing]) -> Vec<(u64, usize)> {
    listings
        .iter()
        .filter_map(|l| l.bedroom_count())
        .counts()
        .into_iter()
        .sorted()
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct NeighbourhoodStat {
    pub name: String,
    /// Listings in the neighbourhood carrying a numeric price
    pub listing_count: usize,
    /// Mean price, rounded to whole currency units
    pub avg_price: f64,
}

/// Average price per neighbourhood, alphabetical, restricted to
/// neighbourhoods with at least `min_listings` priced listings and capped at
/// `max_charted` entries.
pub fn neighbourhood_stats(
    listings: &[Listing],
    min_listings: usize,
    max_charted: usize,
) -> Vec<NeighbourhoodStat> {
    let mut grouped: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for listing in listings {
        let (Some(name), Some(price)) = (listing.neighbourhood.as_deref(), listing.price) else {
            continue;
        };
        grouped.entry(name).or_default().push(price);
    }

    grouped
        .into_iter()
        .filter(|(_, prices)| prices.len() >= min_listings)
        .take(max_charted)
        .map(|(name, prices)| NeighbourhoodStat {
            name: name.to_string(),
            listing_count: prices.len(),
            avg_price: prices.iter().mean().round(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(price: Option<f64>, bedrooms: Option<f64>, address: &str) -> Listing {
        Listing {
            address: address.to_string(),
            price,
            bedrooms,
            neighbourhood: crate::domain::extract_neighbourhood(address),
            ..Listing::default()
        }
    }

    #[test]
    fn test_summary_two_listings() {
        // Webhook scenario: two records at 100 and 200 average out to 150
        let listings = vec![
            listing(Some(100.0), None, "X"),
            listing(Some(200.0), None, "Y"),
        ];
        let summary = summarize(&listings);
        assert_eq!(summary.total_listings, 2);
        assert_eq!(summary.avg_price, Some(150.0));
        assert_eq!(summary.median_price, Some(150.0));
        assert_eq!(summary.price_range, Some((100.0, 200.0)));
        assert!(summary.avg_bedrooms.is_none());
    }

    #[test]
    fn test_summary_empty_dataset() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_listings, 0);
        assert!(summary.avg_price.is_none());
        assert!(summary.price_range.is_none());
    }

    #[test]
    fn test_summary_ignores_unpriced_listings_in_averages() {
        let listings = vec![
            listing(Some(300.0), Some(2.0), "A"),
            listing(None, Some(4.0), "B"),
        ];
        let summary = summarize(&listings);
        assert_eq!(summary.total_listings, 2);
        assert_eq!(summary.avg_price, Some(300.0));
        assert_eq!(summary.avg_bedrooms, Some(3.0));
    }

    #[test]
    fn test_histogram_bins_cover_all_prices() {
        let listings: Vec<Listing> = (0..100)
            .map(|i| listing(Some(1000.0 + i as f64 * 10.0), None, "A"))
            .collect();
        let bins = price_histogram(&listings, 20);
        assert_eq!(bins.len(), 20);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 100);
        // The max price belongs to the final bucket
        assert!(bins.last().unwrap().count >= 1);
    }

    #[test]
    fn test_histogram_flat_prices_single_bin() {
        let listings = vec![
            listing(Some(500.0), None, "A"),
            listing(Some(500.0), None, "B"),
        ];
        let bins = price_histogram(&listings, 20);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 2);
    }

    #[test]
    fn test_histogram_no_prices() {
        let listings = vec![listing(None, None, "A")];
        assert!(price_histogram(&listings, 20).is_empty());
    }

    #[test]
    fn test_bedroom_counts_sorted() {
        let listings = vec![
            listing(None, Some(3.0), "A"),
            listing(None, Some(1.0), "B"),
            listing(None, Some(3.0), "C"),
            listing(None, None, "D"),
        ];
        assert_eq!(bedroom_counts(&listings), vec![(1, 1), (3, 2)]);
    }

    #[test]
    fn test_neighbourhood_stats_min_count_and_cap() {
        let mut listings = Vec::new();
        for _ in 0..3 {
            listings.push(listing(Some(1000.0), None, "Ballard, Seattle"));
        }
        for _ in 0..2 {
            listings.push(listing(Some(9000.0), None, "Queen Anne, Seattle"));
        }
        listings.push(listing(Some(2000.0), None, "No Comma Street"));

        let stats = neighbourhood_stats(&listings, 3, 10);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].name, "Ballard");
        assert_eq!(stats[0].listing_count, 3);
        assert_eq!(stats[0].avg_price, 1000.0);
    }

    #[test]
    fn test_neighbourhood_stats_alphabetical_cap() {
        let mut listings = Vec::new();
        for name in ["Delta", "Alpha", "Charlie", "Bravo"] {
            for _ in 0..3 {
                listings.push(listing(Some(100.0), None, &format!("{name}, Town")));
            }
        }
        let stats = neighbourhood_stats(&listings, 3, 2);
        let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Bravo"]);
    }
}
