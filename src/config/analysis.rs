//! Aggregation and display configuration

/// Configuration for the listings table
pub struct TableConfig {
    pub default_rows: usize,
    pub min_rows: usize,
}

/// Settings for the fetch trigger (filter changes schedule refetches)
pub struct FetchSettings {
    // Minimum debounce window between webhook fetches (in seconds)
    pub min_seconds_between_fetches: u64,
}

/// Rules for the average-price-by-neighbourhood chart
pub struct NeighbourhoodChartConfig {
    // Neighbourhoods with fewer listings than this are dropped from the chart
    pub min_listings: usize,
    // At most this many neighbourhoods are charted (alphabetical order)
    pub max_charted: usize,
}

/// The Master Aggregation Configuration
pub struct AnalysisConfig {
    // Number of bins in the price distribution histogram
    pub histogram_bins: usize,

    // Sub-groups
    pub table: TableConfig,
    pub fetch: FetchSettings,
    pub neighbourhood: NeighbourhoodChartConfig,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    histogram_bins: 20,

    table: TableConfig {
        default_rows: 20,
        min_rows: 1,
    },

    fetch: FetchSettings {
        min_seconds_between_fetches: 2,
    },

    neighbourhood: NeighbourhoodChartConfig {
        min_listings: 3,
        max_charted: 10,
    },
};

/// Maximum age of a cached snapshot before the webhook is consulted again.
/// 10 minutes (60 * 10), matching the upstream workflow's refresh cadence.
pub const LISTINGS_ACCEPTABLE_AGE_SECONDS: i64 = 600;
