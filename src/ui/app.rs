use chrono::{DateTime, Local};
use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::analysis::{FilterParams, MarketSummary, SortKey};
use crate::config::ANALYSIS;
use crate::data::MarketSnapshot;
use crate::domain::Listing;
use crate::ui::app_async::AsyncFetchResult;
use crate::ui::app_triggers::FetchTriggerState;
use crate::ui::ui_plot_view::ChartView;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Error types for application operations
#[derive(Debug, Clone)]
pub enum AppError {
    /// No data is available for the operation
    DataNotAvailable,
    /// The webhook fetch failed (network, status, or parse)
    FetchFailed(String),
    /// Writing the CSV export failed
    ExportFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DataNotAvailable => write!(f, "No data available"),
            AppError::FetchFailed(msg) => write!(f, "Fetch failed: {}", msg),
            AppError::ExportFailed(msg) => write!(f, "Export failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Everything `main` hands over when the GUI starts.
pub struct AppBootstrap {
    pub snapshot: MarketSnapshot,
    pub signature: Option<&'static str>,
    pub startup_error: Option<String>,
    pub webhook_url: String,
}

#[derive(Default)]
pub struct DataState {
    pub snapshot: MarketSnapshot,
    pub source_signature: Option<&'static str>,
    pub fetched_at: Option<DateTime<Local>>,
    pub last_error: Option<AppError>,
}

impl DataState {
    pub fn new(
        snapshot: MarketSnapshot,
        source_signature: Option<&'static str>,
        last_error: Option<AppError>,
    ) -> Self {
        Self {
            fetched_at: source_signature.map(|_| Local::now()),
            snapshot,
            source_signature,
            last_error,
        }
    }
}

/// The filtered, sorted view the central panel renders from. Rebuilt whenever
/// the snapshot or the filter/sort settings change; render paths only read it.
#[derive(Default)]
pub struct DisplayState {
    pub listings: Vec<Listing>,
    pub summary: MarketSummary,
}

#[derive(Deserialize, Serialize)]
pub struct EstateLensApp {
    // UI state (persisted between sessions)
    #[serde(default)]
    pub(super) filter_params: FilterParams,
    #[serde(default)]
    pub(super) sort_key: SortKey,
    #[serde(default = "default_table_rows")]
    pub(super) table_rows: usize,

    // Data state - skip serialization since it contains runtime-only data
    #[serde(skip)]
    pub(super) data_state: DataState,
    #[serde(skip)]
    pub(super) display: DisplayState,
    #[serde(skip)]
    pub(super) chart_view: ChartView,

    // Track the last fetched params to detect real changes
    #[serde(skip)]
    pub(super) last_fetched_params: Option<FilterParams>,

    // Async fetch state
    #[serde(skip)]
    pub(super) fetch_promise: Option<Promise<AsyncFetchResult>>,
    #[serde(skip)]
    pub(super) fetch_trigger: FetchTriggerState,

    // Where the webhook lives for this run (CLI/env resolved in main)
    #[serde(skip)]
    pub(super) webhook_url: String,

    // Most recent CSV export, for the status bar
    #[serde(skip)]
    pub(super) last_export_path: Option<PathBuf>,

    // Help panel visibility
    #[serde(skip)]
    pub(super) show_help: bool,
}

/// Default value for the table row cap - used by serde and initialization
fn default_table_rows() -> usize {
    ANALYSIS.table.default_rows
}

impl EstateLensApp {
    pub fn new(cc: &eframe::CreationContext<'_>, bootstrap: AppBootstrap) -> Self {
        let mut app: EstateLensApp;

        // Attempt to load the persisted state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Successfully loaded persisted state");
                }
                app = value;
            } else {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("Failed to get Estate Lens state from storage. Creating anew.");
                }
                app = EstateLensApp::new_with_initial_state();
            }
        } else {
            app = EstateLensApp::new_with_initial_state();
        }

        let startup_error = bootstrap.startup_error.map(AppError::FetchFailed);
        app.data_state = DataState::new(bootstrap.snapshot, bootstrap.signature, startup_error);
        app.webhook_url = bootstrap.webhook_url;
        app.chart_view = ChartView::new();

        // A persisted price range from an older dataset may not overlap the
        // fresh one; reseed it from the data rather than filtering everything out.
        app.reseed_price_range_if_disjoint();

        if app.table_rows < ANALYSIS.table.min_rows {
            app.table_rows = default_table_rows();
        }

        app.recompute_display();

        // The bootstrap fetch already honored --prefer-api; the in-app trigger
        // only fires on filter edits or manual refresh from here on.
        app.last_fetched_params = Some(app.filter_params.clone());

        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            filter_params: FilterParams::default(),
            sort_key: SortKey::default(),
            table_rows: default_table_rows(),
            data_state: DataState::default(),
            display: DisplayState::default(),
            chart_view: ChartView::new(),
            last_fetched_params: None,
            fetch_promise: None,
            fetch_trigger: FetchTriggerState::default(),
            webhook_url: String::new(),
            last_export_path: None,
            show_help: false,
        }
    }
}

impl eframe::App for EstateLensApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Cancel and clean up any ongoing async fetch
        if let Some(promise) = self.fetch_promise.take() {
            drop(promise);
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Poll the in-flight webhook fetch, if any
        self.poll_async_fetch(ctx);

        self.handle_global_shortcuts(ctx);

        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
        self.render_status_panel(ctx);
        if self.show_help {
            self.render_help_panel(ctx);
        }

        self.drain_fetch_trigger();
    }
}
