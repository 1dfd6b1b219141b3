//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` by default
//! so debug builds stay readable.

pub struct DebugFlags {
    /// Emit detailed serialization/deserialization logs.
    pub print_serde: bool,
    /// Emit details of UI state serialization/deserialization logs.
    pub print_state_serde: bool,
    /// Emit UI interaction logs (e.g., filter changes, manual actions).
    pub print_ui_interactions: bool,
    /// Emit fetch trigger status updates (staleness, debouncing, follow-ups).
    pub print_trigger_updates: bool,
    /// Emit per-request webhook fetch progress.
    pub print_fetch_progress: bool,
    /// Emit chart cache hit/miss diagnostics while rendering.
    pub print_chart_cache_stats: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_serde: false,
    print_state_serde: false,
    print_ui_interactions: true,
    print_trigger_updates: true,
    print_fetch_progress: false,
    print_chart_cache_stats: false,
    print_shutdown: false,
};
