use eframe::egui::{
    CentralPanel, Color32, Context, Frame, Grid, Key, Margin, RichText, ScrollArea, SidePanel,
    Stroke, TopBottomPanel, Ui, Window,
};

use crate::domain::Listing;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    DisplayEventChanged, DisplayPanel, ExportRequested, FilterEventChanged, FiltersPanel, Panel,
};
use crate::ui::utils::{format_usd, section_heading, spaced_separator};

use super::app::EstateLensApp;

impl EstateLensApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(180.0)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                section_heading(ui, UI_TEXT.controls_heading);
                if ui.button(UI_TEXT.refresh_button).clicked() {
                    self.request_refresh("manual refresh");
                }
                if self.is_fetching() {
                    ui.label_warning(UI_TEXT.status_fetching);
                }
                spaced_separator(ui);

                let filter_events = self.filters_panel(ui);
                for event in filter_events {
                    self.handle_filter_event(event);
                }

                let display_events = self.display_panel(ui);
                for event in display_events {
                    self.handle_display_event(event);
                }

                let export_events = self.export_panel(ui);
                for _request in export_events {
                    self.handle_export();
                }
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(10.0);

                if let Some(error) = self.data_state.last_error.clone() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.heading(UI_TEXT.error_heading);
                        ui.add_space(10.0);
                        ui.label_error(format!("{}", error));
                        ui.add_space(20.0);
                        ui.label(UI_TEXT.error_hint);
                    });
                    return;
                }

                if self.data_state.snapshot.is_empty() {
                    if self.is_fetching() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.spinner();
                            ui.add_space(12.0);
                            ui.heading(UI_TEXT.fetching_heading);
                            ui.add_space(6.0);
                            ui.label(
                                RichText::new(UI_TEXT.fetching_hint)
                                    .color(Color32::from_gray(190)),
                            );
                        });
                    } else {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.heading(UI_TEXT.empty_heading);
                            ui.add_space(10.0);
                            ui.label(UI_TEXT.empty_hint);
                        });
                    }
                    return;
                }

                ScrollArea::vertical()
                    .id_salt("central_scroll")
                    .show(ui, |ui| {
                        self.render_overview_metrics(ui);
                        self.render_charts(ui);
                        self.render_listings_table(ui);
                        self.render_ai_analysis(ui);
                    });
            });
    }

    fn render_overview_metrics(&mut self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.overview_heading);

        let summary = &self.display.summary;
        let unfiltered = self.unfiltered_count();

        ui.horizontal(|ui| {
            let shown = summary.total_listings;
            let total_value = if shown == unfiltered {
                format!("{}", shown)
            } else {
                // Delta against the unfiltered snapshot, like the headline count
                format!("{} ({:+})", shown, shown as i64 - unfiltered as i64)
            };
            ui.metric(
                UI_TEXT.metric_total_listings,
                &total_value,
                UI_CONFIG.colors.positive,
            );
            ui.separator();

            let avg_price = summary
                .avg_price
                .map(format_usd)
                .unwrap_or_else(|| UI_TEXT.metric_missing.to_string());
            ui.metric(UI_TEXT.metric_avg_price, &avg_price, UI_CONFIG.colors.heading);
            ui.separator();

            let avg_bedrooms = summary
                .avg_bedrooms
                .map(|b| format!("{:.1}", b))
                .unwrap_or_else(|| UI_TEXT.metric_missing.to_string());
            ui.metric(
                UI_TEXT.metric_avg_bedrooms,
                &avg_bedrooms,
                UI_CONFIG.colors.heading,
            );
            ui.separator();

            let price_range = summary
                .price_range
                .map(|(lo, hi)| format!("{} - {}", format_usd(lo), format_usd(hi)))
                .unwrap_or_else(|| UI_TEXT.metric_missing.to_string());
            ui.metric(
                UI_TEXT.metric_price_range,
                &price_range,
                UI_CONFIG.colors.accent,
            );
        });
    }

    fn render_charts(&mut self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.analysis_heading);

        // Charts read the filtered view only; a snapshot swap re-aggregates
        // via the content hash inside ChartView.
        let listings = &self.display.listings;
        let chart_view = &mut self.chart_view;

        ui.columns(2, |columns| {
            columns[0].label(RichText::new(UI_TEXT.chart_price_distribution).strong());
            chart_view.show_price_distribution(&mut columns[0], listings);

            columns[1].label(RichText::new(UI_TEXT.chart_bedrooms).strong());
            chart_view.show_bedroom_chart(&mut columns[1], listings);
        });

        ui.add_space(10.0);
        ui.label(RichText::new(UI_TEXT.chart_neighbourhood).strong());
        chart_view.show_neighbourhood_chart(ui, listings);
    }

    fn render_listings_table(&mut self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.listings_heading);

        let shown = self.table_listings().to_vec();
        ui.label_subdued(format!(
            "{} of {} listings (sorted by {})",
            shown.len(),
            self.display.listings.len(),
            self.current_sort_key()
        ));
        ui.add_space(5.0);

        for listing in &shown {
            render_listing_card(ui, listing);
            ui.add_space(UI_CONFIG.listing_card_spacing);
        }
    }

    fn render_ai_analysis(&mut self, ui: &mut Ui) {
        let Some(analysis) = self.data_state.snapshot.analysis.clone() else {
            return;
        };

        section_heading(ui, UI_TEXT.ai_analysis_heading);
        Frame::group(ui.style())
            .stroke(Stroke::new(1.0, UI_CONFIG.colors.card_border))
            .show(ui, |ui| {
                ui.label(RichText::new(analysis).monospace());
            });
        ui.add_space(10.0);
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. Data source
                    match self.data_state.source_signature {
                        Some(signature) => {
                            let icon = if signature == "Local Cache" { "💾" } else { "📡" };
                            ui.metric(
                                UI_TEXT.status_source_label,
                                &format!("{} {}", icon, signature),
                                UI_CONFIG.colors.positive,
                            );
                        }
                        None => {
                            ui.label_subdued(format!(
                                "{}: {}",
                                UI_TEXT.status_source_label, UI_TEXT.status_no_fetch_yet
                            ));
                        }
                    }
                    ui.separator();

                    // 2. Dataset size
                    ui.label_subdued(format!(
                        "🏠 {} / {} listings",
                        self.display.summary.total_listings,
                        self.unfiltered_count()
                    ));
                    ui.separator();

                    // 3. Median price over the displayed listings
                    if let Some(median) = self.display.summary.median_price {
                        ui.metric("Median", &format_usd(median), UI_CONFIG.colors.heading);
                        ui.separator();
                    }

                    // 4. Freshness
                    if let Some(fetched_at) = self.data_state.fetched_at {
                        ui.label_subdued(format!(
                            "{}: {}",
                            UI_TEXT.status_last_updated,
                            fetched_at.format("%Y-%m-%d %H:%M:%S")
                        ));
                        ui.separator();
                    }

                    // 5. Fetch activity
                    if self.is_fetching() {
                        ui.label_warning(UI_TEXT.status_fetching);
                        ui.separator();
                    }

                    // 6. Last export
                    if let Some(path) = &self.last_export_path {
                        ui.label_subdued(format!("📥 {}", path.display()));
                    }
                });
            });
    }

    fn render_shortcut_rows(ui: &mut Ui, rows: &[(&str, &str)]) {
        for (key, description) in rows {
            ui.label(RichText::new(*key).monospace().strong());
            ui.label(*description);
            ui.end_row();
        }
    }

    pub(super) fn render_help_panel(&mut self, ctx: &Context) {
        Window::new(UI_TEXT.help_title)
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.label("Press any key to execute the command:");
                ui.add_space(5.0);

                let shortcuts = [
                    ("H", UI_TEXT.help_toggle),
                    ("R", UI_TEXT.help_refresh),
                    ("E", UI_TEXT.help_export),
                ];

                Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        Self::render_shortcut_rows(ui, &shortcuts);
                    });

                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);
            });
    }

    fn filters_panel(&mut self, ui: &mut Ui) -> Vec<FilterEventChanged> {
        // Filter options come from the unfiltered snapshot so deselected
        // values stay visible for re-selection
        let available_bedrooms = self.data_state.snapshot.unique_bedroom_counts();
        let available_property_types = self.data_state.snapshot.unique_property_types();
        let mut panel = FiltersPanel::new(
            self.price_bounds(),
            self.filter_params.price_range,
            available_bedrooms,
            &self.filter_params.bedrooms,
            available_property_types,
            &self.filter_params.property_types,
        );
        panel.render(ui)
    }

    fn display_panel(&mut self, ui: &mut Ui) -> Vec<DisplayEventChanged> {
        let mut panel = DisplayPanel::new(
            self.current_sort_key(),
            self.table_rows,
            self.display.listings.len(),
        );
        panel.render(ui)
    }

    fn export_panel(&mut self, ui: &mut Ui) -> Vec<ExportRequested> {
        let mut panel = crate::ui::ui_panels::ExportPanel::new(
            self.display.listings.len(),
            self.last_export_path.as_deref(),
        );
        panel.render(ui)
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        let mut refresh = false;
        let mut export = false;

        ctx.input(|i| {
            if i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }

            if i.key_pressed(Key::Escape) && self.show_help {
                self.show_help = false;
            }

            if i.key_pressed(Key::R) {
                refresh = true;
            }

            if i.key_pressed(Key::E) {
                export = true;
            }
        });

        if refresh {
            self.request_refresh("keyboard shortcut");
        }
        if export {
            self.handle_export();
        }
    }
}

fn render_listing_card(ui: &mut Ui, listing: &Listing) {
    Frame::group(ui.style())
        .stroke(Stroke::new(1.0, UI_CONFIG.colors.card_border))
        .show(ui, |ui| {
            let address = if listing.address.is_empty() {
                "(no address)"
            } else {
                listing.address.as_str()
            };
            ui.label(RichText::new(address).strong());

            if !listing.price_display.is_empty() {
                ui.label(
                    RichText::new(&listing.price_display).color(UI_CONFIG.colors.heading),
                );
            }

            let mut details = Vec::new();
            if let Some(bedrooms) = listing.bedrooms {
                details.push(format!("{:.0} {}", bedrooms, UI_TEXT.detail_bed));
            }
            if let Some(bathrooms) = listing.bathrooms {
                details.push(format!("{} {}", bathrooms, UI_TEXT.detail_bath));
            }
            if let Some(property_type) = &listing.property_type {
                details.push(property_type.clone());
            }
            if !details.is_empty() {
                ui.label_subdued(details.join(" • "));
            }

            if let Some(sqft) = listing.sqft {
                ui.label_subdued(format!("{}: {:.0}", UI_TEXT.detail_sqft, sqft));
            }
        });
}
