//! Deadline-based auto-save debouncing

use std::time::{Duration, Instant};

/// Quiet period between the last edit and the auto-save write
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_secs(5);

/// Trailing-edge debouncer for auto-save.
///
/// Holds at most one pending deadline. Recording a change replaces any
/// pending deadline, so a burst of edits results in a single fire at
/// `last edit + quiet_period`. The event loop polls `fire_due` each tick;
/// firing disarms the deadline, so one armed period produces at most one
/// save. `cancel` disarms without firing and is called at teardown.
#[derive(Debug)]
pub struct AutoSaveDebouncer {
    quiet_period: Duration,
    deadline: Option<Instant>,
}

impl AutoSaveDebouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the deadline at `now + quiet_period`
    pub fn record_change(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet_period);
    }

    /// Disarm without firing
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Report (once) whether the deadline has passed, disarming when it has
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the pending deadline, zero if already due
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl Default for AutoSaveDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

/// Whether the current draft has been persisted since its last edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Saved,
    Dirty,
}

impl SaveStatus {
    /// Status-bar label
    pub fn label(self) -> &'static str {
        match self {
            SaveStatus::Saved => "Saved",
            SaveStatus::Dirty => "Unsaved changes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_unarmed_debouncer_never_fires() {
        let mut debouncer = AutoSaveDebouncer::default();
        let now = Instant::now();
        assert!(!debouncer.is_armed());
        assert!(!debouncer.fire_due(now + secs(60)));
    }

    #[test]
    fn test_fires_once_quiet_period_after_last_change() {
        let mut debouncer = AutoSaveDebouncer::default();
        let t0 = Instant::now();

        // Burst of edits at t0, t0+2s, t0+4s
        debouncer.record_change(t0);
        debouncer.record_change(t0 + secs(2));
        debouncer.record_change(t0 + secs(4));

        // Nothing fires inside the quiet period following the last edit
        assert!(!debouncer.fire_due(t0 + secs(5)));
        assert!(!debouncer.fire_due(t0 + Duration::from_millis(8900)));

        // Fires exactly once at last edit + quiet period, then disarms
        assert!(debouncer.fire_due(t0 + secs(9)));
        assert!(!debouncer.is_armed());
        assert!(!debouncer.fire_due(t0 + secs(10)));
    }

    #[test]
    fn test_change_during_armed_period_reschedules() {
        let mut debouncer = AutoSaveDebouncer::default();
        let t0 = Instant::now();

        debouncer.record_change(t0);
        debouncer.record_change(t0 + secs(3));

        assert!(!debouncer.fire_due(t0 + secs(5)));
        assert!(debouncer.fire_due(t0 + secs(8)));
    }

    #[test]
    fn test_cancel_prevents_any_fire() {
        let mut debouncer = AutoSaveDebouncer::default();
        let t0 = Instant::now();

        debouncer.record_change(t0);
        debouncer.cancel();

        assert!(!debouncer.is_armed());
        assert!(!debouncer.fire_due(t0 + secs(60)));
    }

    #[test]
    fn test_fires_at_exactly_the_deadline() {
        let mut debouncer = AutoSaveDebouncer::new(secs(5));
        let t0 = Instant::now();

        debouncer.record_change(t0);
        assert!(debouncer.fire_due(t0 + secs(5)));
    }

    #[test]
    fn test_time_until_fire_counts_down_and_saturates() {
        let mut debouncer = AutoSaveDebouncer::new(secs(5));
        let t0 = Instant::now();

        assert_eq!(debouncer.time_until_fire(t0), None);

        debouncer.record_change(t0);
        assert_eq!(debouncer.time_until_fire(t0), Some(secs(5)));
        assert_eq!(debouncer.time_until_fire(t0 + secs(3)), Some(secs(2)));
        assert_eq!(debouncer.time_until_fire(t0 + secs(7)), Some(secs(0)));
    }

    #[test]
    fn test_custom_quiet_period_is_respected() {
        let mut debouncer = AutoSaveDebouncer::new(secs(1));
        let t0 = Instant::now();

        debouncer.record_change(t0);
        assert!(!debouncer.fire_due(t0 + Duration::from_millis(999)));
        assert!(debouncer.fire_due(t0 + secs(1)));
    }

    #[test]
    fn test_save_status_labels() {
        assert_eq!(SaveStatus::Saved.label(), "Saved");
        assert_eq!(SaveStatus::Dirty.label(), "Unsaved changes");
        assert_eq!(SaveStatus::default(), SaveStatus::Saved);
    }
}
