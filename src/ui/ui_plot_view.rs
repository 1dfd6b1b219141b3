use colorgrad::Gradient;
use std::hash::{Hash, Hasher};

use eframe::egui::{self, Color32};
use egui_plot::{AxisHints, Bar, BarChart, HPlacement, Plot};

use crate::analysis::{
    HistogramBin, NeighbourhoodStat, bedroom_counts, neighbourhood_stats, price_histogram,
};
use crate::config::ANALYSIS;
use crate::config::charts::CHART_CONFIG;
use crate::domain::Listing;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::format_usd;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Pre-aggregated chart inputs for one filtered dataset.
#[derive(Clone)]
pub struct ChartCache {
    pub data_hash: u64,
    pub histogram: Vec<HistogramBin>,
    pub bedrooms: Vec<(u64, usize)>,
    pub neighbourhoods: Vec<NeighbourhoodStat>,
}

#[derive(Default)]
pub struct ChartView {
    cache: Option<ChartCache>,
}

impl ChartView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    pub fn has_cache(&self) -> bool {
        self.cache.is_some()
    }

    fn calculate_chart_data(&mut self, listings: &[Listing]) -> ChartCache {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        listings.len().hash(&mut hasher);
        for listing in listings {
            if let Some(price) = listing.price {
                price.to_bits().hash(&mut hasher);
            }
            if let Some(bedrooms) = listing.bedrooms {
                bedrooms.to_bits().hash(&mut hasher);
            }
            listing.neighbourhood.hash(&mut hasher);
        }
        let current_hash = hasher.finish();

        if let Some(cache) = &self.cache {
            if cache.data_hash == current_hash {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_chart_cache_stats {
                    log::info!("[charts] cache hit ({:#x})", current_hash);
                }
                return cache.clone();
            }
        }

        let cache = ChartCache {
            data_hash: current_hash,
            histogram: price_histogram(listings, ANALYSIS.histogram_bins),
            bedrooms: bedroom_counts(listings),
            neighbourhoods: neighbourhood_stats(
                listings,
                ANALYSIS.neighbourhood.min_listings,
                ANALYSIS.neighbourhood.max_charted,
            ),
        };

        self.cache = Some(cache.clone());
        cache
    }

    /// Histogram of listing prices, bar intensity scaling with bin count.
    pub fn show_price_distribution(&mut self, ui: &mut egui::Ui, listings: &[Listing]) {
        let cache = self.calculate_chart_data(listings);
        if cache.histogram.is_empty() {
            return;
        }

        let max_count = cache
            .histogram
            .iter()
            .map(|b| b.count)
            .max()
            .unwrap_or(1)
            .max(1);

        let grad = colorgrad::GradientBuilder::new()
            .html_colors(CHART_CONFIG.histogram_gradient_colors)
            .build::<colorgrad::CatmullRomGradient>()
            .expect("Failed to create color gradient");

        let bars: Vec<Bar> = cache
            .histogram
            .iter()
            .map(|bin| {
                let intensity = bin.count as f32 / max_count as f32;
                let color = to_egui_color(grad.at(intensity));
                let center = (bin.lower + bin.upper) / 2.0;
                let width = (bin.upper - bin.lower).max(1.0) * CHART_CONFIG.bar_width_fraction;
                Bar::new(center, bin.count as f64)
                    .width(width)
                    .fill(color)
                    .name(format!(
                        "{} - {}",
                        format_usd(bin.lower),
                        format_usd(bin.upper)
                    ))
            })
            .collect();

        let chart = BarChart::new(UI_TEXT.chart_price_distribution, bars);

        Plot::new("price_distribution_plot")
            .height(UI_CONFIG.chart_height)
            .custom_x_axes(vec![price_axis(UI_TEXT.chart_price_x_axis)])
            .custom_y_axes(vec![count_axis(UI_TEXT.chart_listing_count_axis)])
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    }

    /// Listing counts per bedroom count.
    pub fn show_bedroom_chart(&mut self, ui: &mut egui::Ui, listings: &[Listing]) {
        let cache = self.calculate_chart_data(listings);
        if cache.bedrooms.is_empty() {
            return;
        }

        let bars: Vec<Bar> = cache
            .bedrooms
            .iter()
            .map(|(bedrooms, count)| {
                Bar::new(*bedrooms as f64, *count as f64)
                    .width(0.6)
                    .fill(CHART_CONFIG.bedroom_bar_color)
                    .name(format!("{} {}", bedrooms, UI_TEXT.detail_bed))
            })
            .collect();

        let chart = BarChart::new(UI_TEXT.chart_bedrooms, bars);

        Plot::new("bedroom_count_plot")
            .height(UI_CONFIG.chart_height)
            .custom_x_axes(vec![integer_axis(UI_TEXT.chart_bedrooms_x_axis)])
            .custom_y_axes(vec![count_axis(UI_TEXT.chart_listing_count_axis)])
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    }

    /// Average price per neighbourhood (alphabetical, capped by config).
    pub fn show_neighbourhood_chart(&mut self, ui: &mut egui::Ui, listings: &[Listing]) {
        let cache = self.calculate_chart_data(listings);
        if cache.neighbourhoods.is_empty() {
            return;
        }

        let bars: Vec<Bar> = cache
            .neighbourhoods
            .iter()
            .enumerate()
            .map(|(idx, stat)| {
                Bar::new(idx as f64, stat.avg_price)
                    .width(0.6)
                    .fill(CHART_CONFIG.neighbourhood_bar_color)
                    .name(format!(
                        "{} ({} listings)",
                        stat.name, stat.listing_count
                    ))
            })
            .collect();

        let chart = BarChart::new(UI_TEXT.chart_neighbourhood, bars);

        let names: Vec<String> = cache
            .neighbourhoods
            .iter()
            .map(|stat| stat.name.clone())
            .collect();

        Plot::new("neighbourhood_price_plot")
            .height(UI_CONFIG.chart_height)
            .custom_x_axes(vec![name_axis(names)])
            .custom_y_axes(vec![price_axis_y(UI_TEXT.chart_neighbourhood_y_axis)])
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    }
}

// Helpers retained locally for the chart builders
fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

fn price_axis(label: &'static str) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(label)
        .formatter(|grid_mark, _range| format_usd(grid_mark.value))
}

fn price_axis_y(label: &'static str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label)
        .formatter(|grid_mark, _range| format_usd(grid_mark.value))
        .placement(HPlacement::Left)
}

fn count_axis(label: &'static str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label)
        .formatter(|grid_mark, _range| {
            // Counts are whole; suppress the fractional grid lines
            if grid_mark.value.fract() == 0.0 && grid_mark.value >= 0.0 {
                format!("{:.0}", grid_mark.value)
            } else {
                String::new()
            }
        })
        .placement(HPlacement::Left)
}

fn integer_axis(label: &'static str) -> AxisHints<'static> {
    AxisHints::new_x().label(label).formatter(|grid_mark, _range| {
        if grid_mark.value.fract() == 0.0 && grid_mark.value >= 0.0 {
            format!("{:.0}", grid_mark.value)
        } else {
            String::new()
        }
    })
}

fn name_axis(names: Vec<String>) -> AxisHints<'static> {
    AxisHints::new_x().formatter(move |grid_mark, _range| {
        let idx = grid_mark.value.round();
        if (grid_mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
            return String::new();
        }
        names.get(idx as usize).cloned().unwrap_or_default()
    })
}
