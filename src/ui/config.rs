use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub accent: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub card_border: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub listing_card_spacing: f32,
    pub chart_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(102, 126, 234), // Periwinkle header accent
        subsection_heading: Color32::from_rgb(158, 134, 220),
        central_panel: Color32::from_rgb(24, 26, 33),
        side_panel: Color32::from_rgb(18, 19, 24),
        accent: Color32::from_rgb(118, 75, 162),
        positive: Color32::from_rgb(100, 200, 100),
        negative: Color32::from_rgb(220, 120, 120),
        card_border: Color32::from_rgb(60, 63, 75),
    },
    listing_card_spacing: 6.0,
    chart_height: 220.0,
};
