//! Rate limiting for selection-change notifications.
//!
//! A folder view may change its selection hundreds of times in a burst
//! (select-all in a large folder, rubber-band drags). Listeners get the
//! first change right away and at most one more per window afterwards.

use std::time::{Duration, Instant};

/// Default coalescing window.
pub const SELECTION_DEBOUNCE: Duration = Duration::from_millis(200);

/// Coalesces bursts of change notifications.
///
/// The owner drives it with timestamps: [`notify`](Self::notify) on every
/// change, [`poll`](Self::poll) when the timer from
/// [`deadline`](Self::deadline) fires, [`cancel`](Self::cancel) on teardown.
#[derive(Debug, Clone)]
pub struct SelectionDebouncer {
    window: Duration,
    last_emit: Option<Instant>,
    pending: bool,
}

impl SelectionDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_emit: None,
            pending: false,
        }
    }

    /// Record a change at `now`.
    ///
    /// Returns `true` if the change should be emitted immediately. Otherwise
    /// it is marked pending until the current window ends.
    pub fn notify(&mut self, now: Instant) -> bool {
        if self.in_window(now) {
            self.pending = true;
            return false;
        }

        self.last_emit = Some(now);
        self.pending = false;
        true
    }

    /// Returns `true` once a pending change is due, recording it as emitted.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.pending || self.in_window(now) {
            return false;
        }

        self.last_emit = Some(now);
        self.pending = false;
        true
    }

    /// When the pending change is due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        if !self.pending {
            return None;
        }
        self.last_emit.map(|last| last + self.window)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Drop any pending change.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    fn in_window(&self, now: Instant) -> bool {
        self.last_emit
            .is_some_and(|last| now.saturating_duration_since(last) < self.window)
    }
}

impl Default for SelectionDebouncer {
    fn default() -> Self {
        Self::new(SELECTION_DEBOUNCE)
    }
}
