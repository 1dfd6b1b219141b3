// Domain types for listing data
// Pure record-level logic independent of UI/visualization

pub mod listing;
pub mod price;

pub use listing::{Listing, RawListing, value_as_f64, value_as_string};
pub use price::{extract_neighbourhood, parse_price_display};
