/// Static UI strings, grouped so panels don't scatter literals everywhere.
pub struct UiText {
    // Side panel
    pub controls_heading: &'static str,
    pub refresh_button: &'static str,
    pub filters_heading: &'static str,
    pub price_range_heading: &'static str,
    pub price_min_label: &'static str,
    pub price_max_label: &'static str,
    pub bedrooms_heading: &'static str,
    pub property_type_heading: &'static str,
    pub display_heading: &'static str,
    pub sort_by_heading: &'static str,
    pub table_rows_heading: &'static str,
    pub export_heading: &'static str,
    pub export_button: &'static str,

    // Central panel
    pub overview_heading: &'static str,
    pub metric_total_listings: &'static str,
    pub metric_avg_price: &'static str,
    pub metric_avg_bedrooms: &'static str,
    pub metric_price_range: &'static str,
    pub metric_missing: &'static str,
    pub analysis_heading: &'static str,
    pub listings_heading: &'static str,
    pub ai_analysis_heading: &'static str,

    // Charts
    pub chart_price_distribution: &'static str,
    pub chart_price_x_axis: &'static str,
    pub chart_listing_count_axis: &'static str,
    pub chart_bedrooms: &'static str,
    pub chart_bedrooms_x_axis: &'static str,
    pub chart_neighbourhood: &'static str,
    pub chart_neighbourhood_y_axis: &'static str,

    // States
    pub error_heading: &'static str,
    pub error_hint: &'static str,
    pub empty_heading: &'static str,
    pub empty_hint: &'static str,
    pub fetching_heading: &'static str,
    pub fetching_hint: &'static str,

    // Status bar
    pub status_source_label: &'static str,
    pub status_last_updated: &'static str,
    pub status_fetching: &'static str,
    pub status_no_fetch_yet: &'static str,

    // Listing card details
    pub detail_bed: &'static str,
    pub detail_bath: &'static str,
    pub detail_sqft: &'static str,

    // Help window
    pub help_title: &'static str,
    pub help_refresh: &'static str,
    pub help_export: &'static str,
    pub help_toggle: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    controls_heading: "Controls",
    refresh_button: "🔄 Refresh Data",
    filters_heading: "Filters",
    price_range_heading: "Price Range ($)",
    price_min_label: "Min",
    price_max_label: "Max",
    bedrooms_heading: "Bedrooms",
    property_type_heading: "Property Type",
    display_heading: "Display",
    sort_by_heading: "Sort by",
    table_rows_heading: "Show listings",
    export_heading: "Export Data",
    export_button: "📥 Download CSV",

    overview_heading: "Market Overview",
    metric_total_listings: "Total Listings",
    metric_avg_price: "Average Price",
    metric_avg_bedrooms: "Avg Bedrooms",
    metric_price_range: "Price Range",
    metric_missing: "N/A",
    analysis_heading: "Market Analysis",
    listings_heading: "Property Listings",
    ai_analysis_heading: "AI Market Analysis",

    chart_price_distribution: "Price Distribution",
    chart_price_x_axis: "Price ($)",
    chart_listing_count_axis: "Number of Listings",
    chart_bedrooms: "Listings by Number of Bedrooms",
    chart_bedrooms_x_axis: "Bedrooms",
    chart_neighbourhood: "Average Price by Neighbourhood",
    chart_neighbourhood_y_axis: "Average Price ($)",

    error_heading: "⚠ Unable to Fetch Market Data",
    error_hint: "Check the webhook URL and refresh to try again.",
    empty_heading: "No listings found in the data",
    empty_hint: "The webhook responded, but the snapshot carries no listings.",
    fetching_heading: "Contacting market webhook...",
    fetching_hint: "Waiting for the automation workflow to assemble a snapshot",

    status_source_label: "Source",
    status_last_updated: "Last updated",
    status_fetching: "⚙ Fetching...",
    status_no_fetch_yet: "no fetch yet",

    detail_bed: "bed",
    detail_bath: "bath",
    detail_sqft: "Square Feet",

    help_title: "⌨️ Keyboard Shortcuts",
    help_refresh: "Refresh market data from the webhook",
    help_export: "Export the displayed listings to CSV",
    help_toggle: "Toggle this help panel",
};
