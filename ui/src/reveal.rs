//! One-shot "has this region been seen" state machine.
//!
//! The platform observer feeds visibility fractions in through
//! [`RevealTracker::record`]; the tracker decides when the region counts as
//! seen. Once revealed it never goes back, no matter what is recorded later.

use std::sync::atomic::{AtomicU64, Ordering};

/// Fraction of a region's area that must be inside the viewport to count as seen.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Slack below the threshold still accepted, since observers may report the
/// crossing itself with a rounded ratio such as `0.19998`.
pub const REVEAL_TOLERANCE: f64 = 1e-3;

static NEXT_MARKER: AtomicU64 = AtomicU64::new(0);

/// Names one tracked region in the rendered page through its `data-reveal`
/// attribute, so an observer living in a webview can find it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RevealMarker(u64);

impl RevealMarker {
    /// A marker no other region in this process has.
    pub fn next() -> Self {
        Self(NEXT_MARKER.fetch_add(1, Ordering::Relaxed))
    }

    /// CSS selector matching the element that carries this marker.
    pub fn selector(&self) -> String {
        format!("[data-reveal=\"{}\"]", self.0)
    }
}

impl std::fmt::Display for RevealMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of a tracked region.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum RevealPhase {
    #[default]
    NotObserved,
    Watching,
    /// Terminal. The region crossed the threshold at least once.
    Revealed,
    /// Terminal. The watch was torn down before the region was ever seen.
    Released,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RevealTracker {
    phase: RevealPhase,
    threshold: f64,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            phase: RevealPhase::NotObserved,
            threshold,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn has_been_seen(&self) -> bool {
        self.phase.is_revealed()
    }

    /// Whether the platform observer still needs to deliver notifications.
    pub fn is_watching(&self) -> bool {
        self.phase.is_watching()
    }

    /// Begins watching. Has no effect outside `NotObserved`.
    pub fn start(&mut self) {
        if self.phase.is_not_observed() {
            self.phase = RevealPhase::Watching;
        }
    }

    /// Records a visibility fraction reported by the observer. A region that
    /// is not intersecting at all should be recorded as `0.0`.
    ///
    /// Returns `true` only for the notification that performs the
    /// `Watching -> Revealed` transition; the caller should stop observing then.
    pub fn record(&mut self, visible_fraction: f64) -> bool {
        if self.phase.is_watching() && visible_fraction >= self.threshold - REVEAL_TOLERANCE {
            self.phase = RevealPhase::Revealed;
            return true;
        }
        false
    }

    /// Stops watching. A revealed region stays revealed.
    pub fn release(&mut self) {
        if !self.phase.is_revealed() {
            self.phase = RevealPhase::Released;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watching() -> RevealTracker {
        let mut tracker = RevealTracker::default();
        tracker.start();
        tracker
    }

    #[test]
    fn not_seen_before_start() {
        let mut tracker = RevealTracker::default();
        assert!(tracker.phase().is_not_observed());
        assert!(!tracker.record(1.0));
        assert!(!tracker.has_been_seen());
    }

    #[test]
    fn below_threshold_is_not_seen() {
        let mut tracker = watching();
        for fraction in [0.0, 0.05, 0.1, 0.19] {
            assert!(!tracker.record(fraction));
        }
        assert!(!tracker.has_been_seen());
        assert!(tracker.is_watching());
    }

    #[test]
    fn exactly_threshold_reveals() {
        let mut tracker = watching();
        assert!(tracker.record(REVEAL_THRESHOLD));
        assert!(tracker.has_been_seen());
    }

    #[test]
    fn crossing_reported_just_under_threshold_reveals() {
        let mut tracker = watching();
        assert!(tracker.record(REVEAL_THRESHOLD - 1e-4));
        assert!(tracker.has_been_seen());
        assert!(!tracker.is_watching());
    }

    #[test]
    fn short_of_tolerance_is_not_seen() {
        let mut tracker = watching();
        assert!(!tracker.record(REVEAL_THRESHOLD - 2.0 * REVEAL_TOLERANCE));
        assert!(tracker.is_watching());
    }

    #[test]
    fn reveal_fires_once_and_never_resets() {
        let mut tracker = watching();
        assert!(tracker.record(0.6));
        assert!(!tracker.record(0.9));
        assert!(!tracker.record(0.0));
        assert!(tracker.has_been_seen());
        assert!(!tracker.is_watching());

        tracker.start();
        tracker.release();
        assert!(tracker.phase().is_revealed());
    }

    #[test]
    fn never_visible_then_released() {
        let mut tracker = watching();
        tracker.record(0.1);
        tracker.release();
        assert!(tracker.phase().is_released());
        assert!(!tracker.has_been_seen());

        // A late notification after teardown must not reveal.
        assert!(!tracker.record(1.0));
        tracker.release();
        assert!(!tracker.has_been_seen());
    }

    #[test]
    fn custom_threshold() {
        let mut tracker = RevealTracker::new(0.5);
        tracker.start();
        assert!(!tracker.record(0.3));
        assert!(tracker.record(0.5));
    }

    #[test]
    fn markers_are_distinct_and_select_their_attribute() {
        let first = RevealMarker::next();
        let second = RevealMarker::next();
        assert_ne!(first, second);
        assert_eq!(first.selector(), format!("[data-reveal=\"{first}\"]"));
    }
}
