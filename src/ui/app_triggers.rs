use std::time::{Duration, Instant};

use crate::config::ANALYSIS;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trigger state for webhook fetches.
///
/// Filter edits mark the trigger stale; the update loop schedules at most one
/// fetch per staleness, debounced so a dragged slider doesn't hammer the
/// webhook. Changes arriving mid-fetch queue a single follow-up.
#[derive(Debug, Default, Clone)]
pub(super) struct FetchTriggerState {
    pub(super) is_stale: bool,
    pub(super) in_progress: bool,
    pub(super) pending_change: bool,
    pub(super) last_run_at: Option<Instant>,
    pub(super) stale_reason: Option<String>,
}

impl FetchTriggerState {
    pub(super) fn mark_stale(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_trigger_updates {
            log::info!("[trigger] fetch marked stale: {}", reason);
        }

        if self.in_progress {
            self.pending_change = true;
        } else {
            self.is_stale = true;
        }
        self.stale_reason = Some(reason);
    }

    /// Bypass the debounce window (manual Refresh).
    pub(super) fn force_stale(&mut self, reason: impl Into<String>) {
        self.last_run_at = None;
        self.mark_stale(reason);
    }

    pub(super) fn ready_to_schedule(&self) -> bool {
        if !self.is_stale || self.in_progress {
            return false;
        }
        match self.last_run_at {
            None => true,
            Some(last) => {
                last.elapsed()
                    >= Duration::from_secs(ANALYSIS.fetch.min_seconds_between_fetches)
            }
        }
    }

    pub(super) fn on_job_scheduled(&mut self) {
        self.in_progress = true;
        self.is_stale = false;
    }

    /// Returns true when filters changed during the fetch and another run is
    /// needed to catch up.
    pub(super) fn on_job_success(&mut self) -> bool {
        let follow_up = self.pending_change;
        self.pending_change = false;
        self.in_progress = false;
        self.last_run_at = Some(Instant::now());
        self.stale_reason = None;
        follow_up
    }

    pub(super) fn on_job_failure(&mut self, reason: impl Into<String>) {
        self.pending_change = false;
        self.in_progress = false;
        self.is_stale = false;
        self.last_run_at = Some(Instant::now());
        self.stale_reason = Some(reason.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_change_schedules_exactly_one_fetch() {
        let mut trigger = FetchTriggerState::default();
        assert!(!trigger.ready_to_schedule());

        trigger.mark_stale("price range changed");
        assert!(trigger.ready_to_schedule());

        trigger.on_job_scheduled();
        // In flight: no second schedule for the same change
        assert!(!trigger.ready_to_schedule());

        assert!(!trigger.on_job_success());
        assert!(!trigger.ready_to_schedule());
    }

    #[test]
    fn test_change_during_fetch_queues_one_follow_up() {
        let mut trigger = FetchTriggerState::default();
        trigger.mark_stale("bedrooms toggled");
        trigger.on_job_scheduled();

        // Two edits while the fetch runs collapse into one follow-up
        trigger.mark_stale("bedrooms toggled");
        trigger.mark_stale("property type toggled");
        assert!(!trigger.ready_to_schedule());

        assert!(trigger.on_job_success());
    }

    #[test]
    fn test_debounce_blocks_rapid_refetches() {
        let mut trigger = FetchTriggerState::default();
        trigger.mark_stale("initial");
        trigger.on_job_scheduled();
        trigger.on_job_success();

        // Immediately stale again, but the debounce window hasn't elapsed
        trigger.mark_stale("slider still moving");
        assert!(!trigger.ready_to_schedule());

        // A forced refresh ignores the window
        trigger.force_stale("manual refresh");
        assert!(trigger.ready_to_schedule());
    }

    #[test]
    fn test_failure_clears_in_progress() {
        let mut trigger = FetchTriggerState::default();
        trigger.mark_stale("initial");
        trigger.on_job_scheduled();
        trigger.on_job_failure("webhook 500");
        assert!(!trigger.in_progress);
        assert!(!trigger.ready_to_schedule());
        assert!(trigger.stale_reason.is_some());
    }
}
