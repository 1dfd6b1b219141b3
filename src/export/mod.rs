// CSV export of the currently displayed dataset

pub mod csv;

pub use csv::{listings_to_csv, write_csv_export};
