use eframe::egui::{Color32, ComboBox, RichText, ScrollArea, Slider, Ui};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;

use crate::analysis::SortKey;
use crate::config::ANALYSIS;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::{colored_subsection_heading, format_usd, section_heading, spaced_separator};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug)]
pub enum FilterEventChanged {
    PriceRange((f64, f64)),
    BedroomToggled(u64),
    PropertyTypeToggled(String),
}

/// Panel for the dataset filters (price range, bedrooms, property type)
pub struct FiltersPanel<'a> {
    price_bounds: (f64, f64),
    price_range: (f64, f64),
    available_bedrooms: Vec<u64>,
    selected_bedrooms: &'a BTreeSet<u64>,
    available_property_types: Vec<String>,
    selected_property_types: &'a BTreeSet<String>,
}

impl<'a> FiltersPanel<'a> {
    pub fn new(
        price_bounds: (f64, f64),
        price_range: Option<(f64, f64)>,
        available_bedrooms: Vec<u64>,
        selected_bedrooms: &'a BTreeSet<u64>,
        available_property_types: Vec<String>,
        selected_property_types: &'a BTreeSet<String>,
    ) -> Self {
        Self {
            price_bounds,
            price_range: price_range.unwrap_or(price_bounds),
            available_bedrooms,
            selected_bedrooms,
            available_property_types,
            selected_property_types,
        }
    }

    fn render_price_range(&mut self, ui: &mut Ui) -> Option<(f64, f64)> {
        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.price_range_heading));

        let (bound_lo, bound_hi) = self.price_bounds;
        let (mut lo, mut hi) = self.price_range;

        let lo_response = ui.add(
            Slider::new(&mut lo, bound_lo..=bound_hi)
                .text(UI_TEXT.price_min_label)
                .custom_formatter(|v, _| format_usd(v)),
        );
        let hi_response = ui.add(
            Slider::new(&mut hi, bound_lo..=bound_hi)
                .text(UI_TEXT.price_max_label)
                .custom_formatter(|v, _| format_usd(v)),
        );

        // Keep the bounds ordered even mid-drag
        if lo > hi {
            if lo_response.changed() {
                hi = lo;
            } else {
                lo = hi;
            }
        }

        let helper_text = format!("{} - {}", format_usd(lo), format_usd(hi));
        ui.label(RichText::new(helper_text).small().color(Color32::GRAY));

        if lo_response.changed() || hi_response.changed() {
            self.price_range = (lo, hi);
            Some((lo, hi))
        } else {
            None
        }
    }

    fn render_bedrooms(&mut self, ui: &mut Ui) -> Vec<u64> {
        let mut toggled = Vec::new();

        ui.label(colored_subsection_heading(UI_TEXT.bedrooms_heading));
        ui.horizontal_wrapped(|ui| {
            for count in &self.available_bedrooms {
                let is_selected = self.selected_bedrooms.contains(count);
                if ui
                    .selectable_label(is_selected, format!("{} {}", count, UI_TEXT.detail_bed))
                    .clicked()
                {
                    toggled.push(*count);
                }
            }
        });

        toggled
    }

    fn render_property_types(&mut self, ui: &mut Ui) -> Vec<String> {
        let mut toggled = Vec::new();

        ui.label(colored_subsection_heading(UI_TEXT.property_type_heading));
        ScrollArea::vertical()
            .max_height(120.)
            .id_salt("property_type_selector")
            .show(ui, |ui| {
                for property_type in &self.available_property_types {
                    let is_selected = self.selected_property_types.contains(property_type);
                    if ui.selectable_label(is_selected, property_type).clicked() {
                        toggled.push(property_type.clone());
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_ui_interactions {
                            log::info!("Property type toggled: {}", property_type);
                        }
                    }
                }
            });

        toggled
    }
}

impl<'a> Panel for FiltersPanel<'a> {
    type Event = FilterEventChanged;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.filters_heading);

        if let Some(range) = self.render_price_range(ui) {
            events.push(FilterEventChanged::PriceRange(range));
        }
        spaced_separator(ui);

        for count in self.render_bedrooms(ui) {
            events.push(FilterEventChanged::BedroomToggled(count));
        }
        spaced_separator(ui);

        for property_type in self.render_property_types(ui) {
            events.push(FilterEventChanged::PropertyTypeToggled(property_type));
        }
        ui.add_space(20.0);
        events
    }
}

#[derive(Debug)]
pub enum DisplayEventChanged {
    SortKey(SortKey),
    TableRows(usize),
}

/// Panel for table display options (sort order, row cap)
pub struct DisplayPanel {
    selected_sort_key: SortKey,
    table_rows: usize,
    max_rows: usize,
}

impl DisplayPanel {
    pub fn new(sort_key: SortKey, table_rows: usize, max_rows: usize) -> Self {
        Self {
            selected_sort_key: sort_key,
            table_rows,
            max_rows,
        }
    }
}

impl Panel for DisplayPanel {
    type Event = DisplayEventChanged;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.display_heading);

        ui.label(colored_subsection_heading(UI_TEXT.sort_by_heading));
        ComboBox::from_id_salt("Sort Key")
            .selected_text(self.selected_sort_key.to_string())
            .show_ui(ui, |ui| {
                for sort_key_variant in SortKey::iter() {
                    if ui
                        .selectable_value(
                            &mut self.selected_sort_key,
                            sort_key_variant,
                            sort_key_variant.to_string(),
                        )
                        .clicked()
                    {
                        events.push(DisplayEventChanged::SortKey(self.selected_sort_key));
                    }
                }
            });

        if self.max_rows > ANALYSIS.table.min_rows {
            ui.add_space(5.0);
            ui.label(colored_subsection_heading(UI_TEXT.table_rows_heading));

            let mut rows = self.table_rows.clamp(ANALYSIS.table.min_rows, self.max_rows) as f64;
            let response = ui.add(
                Slider::new(
                    &mut rows,
                    ANALYSIS.table.min_rows as f64..=self.max_rows as f64,
                )
                .integer(),
            );

            if response.changed() {
                events.push(DisplayEventChanged::TableRows(rows.round() as usize));
            }
        }

        ui.add_space(20.0);
        events
    }
}

/// The export action fired by the panel below
#[derive(Debug)]
pub struct ExportRequested;

/// Panel offering the CSV download of the displayed dataset
pub struct ExportPanel<'a> {
    listing_count: usize,
    last_export_path: Option<&'a std::path::Path>,
}

impl<'a> ExportPanel<'a> {
    pub fn new(listing_count: usize, last_export_path: Option<&'a std::path::Path>) -> Self {
        Self {
            listing_count,
            last_export_path,
        }
    }
}

impl<'a> Panel for ExportPanel<'a> {
    type Event = ExportRequested;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.export_heading);

        let label = format!("{} ({})", UI_TEXT.export_button, self.listing_count);
        if ui.button(label).clicked() {
            events.push(ExportRequested);
        }

        if let Some(path) = self.last_export_path {
            ui.label(
                RichText::new(format!("Saved: {}", path.display()))
                    .small()
                    .color(Color32::GRAY),
            );
        }

        ui.add_space(10.0);
        events
    }
}
