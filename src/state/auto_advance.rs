//! Per-panel auto-advance countdown.
//!
//! The timer is a tick-driven accumulator, not a thread: the event loop
//! measures wall-clock deltas and feeds them to [`AutoAdvanceTimer::tick`].
//! That keeps cancellation synchronous — restarting the timer inside a
//! navigation call takes effect before any later tick can observe stale
//! elapsed time, so an almost-expired panel can never advance the cursor a
//! second time after a manual navigation already moved it.

use std::time::Duration;

/// Countdown for one panel visit.
///
/// Progress runs from 0.0 to 1.0 over the configured duration. Expiry is
/// reported exactly once per visit; after firing, further ticks are inert
/// until [`AutoAdvanceTimer::restart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvanceTimer {
    duration: Duration,
    elapsed: Duration,
    fired: bool,
}

impl AutoAdvanceTimer {
    /// Timer with the given per-panel duration, starting at zero progress.
    ///
    /// A zero duration is clamped to 1ms so progress stays well-defined.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration: duration.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
            fired: false,
        }
    }

    /// Restart the countdown for a newly active panel.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.fired = false;
    }

    /// Advance the countdown by a measured wall-clock delta.
    ///
    /// Returns `true` on the single tick where the countdown completes;
    /// every other tick (including all ticks after firing) returns `false`.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.fired {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed >= self.duration {
            self.fired = true;
            return true;
        }
        false
    }

    /// Elapsed fraction of the panel's display duration, clamped to
    /// `[0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Whether this visit's expiry has already been reported.
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// The configured per-panel duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}
