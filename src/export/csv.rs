use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

use crate::config::EXPORT_DIR;
use crate::domain::Listing;

const CSV_HEADER: &str =
    "address,price,price_numeric,bedrooms,bathrooms,sqft,property_type,neighbourhood";

/// Serialize listings to CSV: one header row plus one row per listing, in
/// display order. A pure format transform; values pass through unmodified.
pub fn listings_to_csv(listings: &[Listing]) -> String {
    let mut out = String::with_capacity(64 * (listings.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');

    for listing in listings {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{}",
            escape_field(&listing.address),
            escape_field(&listing.price_display),
            format_optional_number(listing.price),
            format_optional_number(listing.bedrooms),
            format_optional_number(listing.bathrooms),
            format_optional_number(listing.sqft),
            escape_field(listing.property_type.as_deref().unwrap_or("")),
            escape_field(listing.neighbourhood.as_deref().unwrap_or("")),
        );
    }

    out
}

/// Write the CSV to a timestamped file under the export directory and return
/// its path.
pub fn write_csv_export(listings: &[Listing]) -> Result<PathBuf> {
    let filename = format!(
        "real_estate_listings_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let dir = PathBuf::from(EXPORT_DIR);
    std::fs::create_dir_all(&dir)
        .context(format!("Failed to create export directory: {:?}", dir))?;

    let path = dir.join(filename);
    std::fs::write(&path, listings_to_csv(listings))
        .context(format!("Failed to write export file: {:?}", path))?;

    Ok(path)
}

/// RFC 4180 quoting: fields containing commas, quotes or newlines are wrapped
/// in double quotes with inner quotes doubled.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn format_optional_number(value: Option<f64>) -> String {
    match value {
        Some(v) => {
            if v.fract() == 0.0 {
                format!("{:.0}", v)
            } else {
                format!("{}", v)
            }
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(address: &str, price: Option<f64>) -> Listing {
        Listing {
            address: address.to_string(),
            price_display: price.map(|p| format!("${p}")).unwrap_or_default(),
            price,
            neighbourhood: crate::domain::extract_neighbourhood(address),
            ..Listing::default()
        }
    }

    #[test]
    fn test_row_count_matches_dataset() {
        let listings = vec![
            listing("A, Town", Some(100.0)),
            listing("B, Town", Some(200.0)),
            listing("C, Town", None),
        ];
        let csv = listings_to_csv(&listings);
        let rows: Vec<&str> = csv.lines().collect();
        // one header row plus one data row per listing
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], CSV_HEADER);
    }

    #[test]
    fn test_empty_dataset_is_header_only() {
        let csv = listings_to_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_comma_and_quote_escaping() {
        let mut l = listing("12 Elm St, Ballard, Seattle", Some(1500.0));
        l.property_type = Some("Duplex \"upper\"".to_string());
        let csv = listings_to_csv(&[l]);
        let data_row = csv.lines().nth(1).unwrap();
        assert!(data_row.starts_with("\"12 Elm St, Ballard, Seattle\","));
        assert!(data_row.contains("\"Duplex \"\"upper\"\"\""));
    }

    #[test]
    fn test_missing_values_render_empty() {
        let csv = listings_to_csv(&[Listing::default()]);
        let data_row = csv.lines().nth(1).unwrap();
        assert_eq!(data_row, ",,,,,,,");
    }

    #[test]
    fn test_numeric_formatting() {
        assert_eq!(format_optional_number(Some(1200.0)), "1200");
        assert_eq!(format_optional_number(Some(1.5)), "1.5");
        assert_eq!(format_optional_number(None), "");
    }
}
