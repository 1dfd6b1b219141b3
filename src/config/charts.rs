//! Chart visualization configuration

use eframe::egui::Color32;

pub struct ChartConfig {
    // Gradient colors for histogram bar intensity (low count to high count)
    pub histogram_gradient_colors: &'static [&'static str],
    /// Flat fill for the bedrooms bar chart
    pub bedroom_bar_color: Color32,
    /// Flat fill for the neighbourhood bar chart
    pub neighbourhood_bar_color: Color32,
    /// Fraction of the bin width a histogram bar occupies
    pub bar_width_fraction: f64,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
    // From sparse (indigo) to dense (amber)
    histogram_gradient_colors: &[
        "#2b2d63", // Deep indigo
        "#4b0082", // Indigo
        "#667eea", // Periwinkle
        "#ffb703", // Amber
    ],
    bedroom_bar_color: Color32::from_rgb(102, 126, 234),
    neighbourhood_bar_color: Color32::from_rgb(118, 75, 162),
    bar_width_fraction: 0.9,
};
