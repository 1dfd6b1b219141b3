// Aggregation and filtering over listing datasets
// Pure business logic independent of UI/visualization

pub mod aggregate;
pub mod filters;

pub use aggregate::{
    HistogramBin, MarketSummary, NeighbourhoodStat, bedroom_counts, neighbourhood_stats,
    price_histogram, summarize,
};
pub use filters::{FilterParams, SortKey, sort_listings};
