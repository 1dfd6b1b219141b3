use crate::analysis::{SortKey, sort_listings, summarize};
use crate::export::write_csv_export;
use crate::ui::app::{AppError, EstateLensApp};
use crate::ui::ui_panels::{DisplayEventChanged, FilterEventChanged};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl EstateLensApp {
    /// Rebuild the filtered/sorted view and its summary from the current
    /// snapshot. Cheap enough to run on every filter or sort edit.
    pub(super) fn recompute_display(&mut self) {
        let mut listings = self.filter_params.apply(&self.data_state.snapshot.listings);
        sort_listings(&mut listings, self.sort_key);

        self.display.summary = summarize(&listings);
        self.display.listings = listings;
    }

    pub(super) fn unfiltered_count(&self) -> usize {
        self.data_state.snapshot.len()
    }

    /// Slider bounds for the price range: observed dataset extremes, with the
    /// original dashboard's fallback when no listing carries a price.
    pub(super) fn price_bounds(&self) -> (f64, f64) {
        summarize(&self.data_state.snapshot.listings)
            .price_range
            .unwrap_or((0.0, 10_000.0))
    }

    /// Drop a persisted price range that no longer overlaps the dataset.
    pub(super) fn reseed_price_range_if_disjoint(&mut self) {
        let Some((lo, hi)) = self.filter_params.price_range else {
            return;
        };
        let (data_lo, data_hi) = self.price_bounds();
        if hi < data_lo || lo > data_hi {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!(
                    "Persisted price range {:.0}-{:.0} misses data {:.0}-{:.0}; reseeding",
                    lo,
                    hi,
                    data_lo,
                    data_hi
                );
            }
            self.filter_params.price_range = Some((data_lo, data_hi));
        }
    }

    pub(super) fn handle_filter_event(&mut self, event: FilterEventChanged) {
        let reason = match event {
            FilterEventChanged::PriceRange(range) => {
                self.filter_params.price_range = Some(range);
                "price range changed"
            }
            FilterEventChanged::BedroomToggled(count) => {
                if !self.filter_params.bedrooms.remove(&count) {
                    self.filter_params.bedrooms.insert(count);
                }
                "bedrooms selection changed"
            }
            FilterEventChanged::PropertyTypeToggled(property_type) => {
                if !self.filter_params.property_types.remove(&property_type) {
                    self.filter_params.property_types.insert(property_type);
                }
                "property type selection changed"
            }
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("[filters] {}: {:?}", reason, self.filter_params);
        }

        // Filter locally right away; the webhook refetch catches up behind the
        // debounce window.
        self.recompute_display();
        self.mark_filters_stale(reason);
    }

    pub(super) fn handle_display_event(&mut self, event: DisplayEventChanged) {
        match event {
            DisplayEventChanged::SortKey(key) => {
                if self.sort_key != key {
                    self.sort_key = key;
                    sort_listings(&mut self.display.listings, self.sort_key);
                }
            }
            DisplayEventChanged::TableRows(rows) => {
                self.table_rows = rows.max(crate::config::ANALYSIS.table.min_rows);
            }
        }
    }

    /// A filter edit only warrants a refetch when the effective params differ
    /// from the set the current snapshot was fetched with.
    pub(super) fn mark_filters_stale(&mut self, reason: &str) {
        let unchanged = self
            .last_fetched_params
            .as_ref()
            .map(|prev| prev == &self.filter_params)
            .unwrap_or(false);
        if unchanged {
            return;
        }
        self.fetch_trigger.mark_stale(reason);
    }

    /// Manual refresh: refetch regardless of filter changes or debounce.
    pub(super) fn request_refresh(&mut self, reason: &str) {
        self.fetch_trigger.force_stale(reason);
    }

    pub(super) fn drain_fetch_trigger(&mut self) {
        if self.fetch_trigger.ready_to_schedule() && self.fetch_promise.is_none() {
            self.start_async_fetch(self.filter_params.clone());
        }
    }

    pub(super) fn handle_export(&mut self) {
        match write_csv_export(&self.display.listings) {
            Ok(path) => {
                log::info!(
                    "Exported {} listings to {:?}",
                    self.display.listings.len(),
                    path
                );
                self.last_export_path = Some(path);
            }
            Err(e) => {
                log::error!("CSV export failed: {:#}", e);
                self.data_state.last_error = Some(AppError::ExportFailed(format!("{:#}", e)));
            }
        }
    }

    /// The sorted slice the table actually shows (row cap applied).
    pub(super) fn table_listings(&self) -> &[crate::domain::Listing] {
        let count = self.table_rows.min(self.display.listings.len());
        &self.display.listings[..count]
    }

    /// Effective sort, exposed for panels that need the current value.
    pub(super) fn current_sort_key(&self) -> SortKey {
        self.sort_key
    }
}
