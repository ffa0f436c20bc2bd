//! Pointer gesture interpretation.
//!
//! Terminal mouse events arrive as press / drag / release triples. This
//! module folds them into the two gestures the story viewer understands:
//! taps on viewport thirds and horizontal drags past a column threshold.
//! The tracker is pure state; the event loop feeds it coordinates and acts
//! on the released outcome.

/// Horizontal third of the viewport a tap landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapZone {
    /// Left third: go back.
    Left,
    /// Middle third: reserved, taps here do nothing.
    Middle,
    /// Right third: advance (or exit on the last panel).
    Right,
}

/// Classify a column into a viewport third.
///
/// A zero-width viewport classifies as `Middle` (nothing actionable).
pub fn tap_zone(x: u16, width: u16) -> TapZone {
    if width == 0 {
        return TapZone::Middle;
    }
    let third = width / 3;
    if x < third {
        TapZone::Left
    } else if x >= width.saturating_sub(third) {
        TapZone::Right
    } else {
        TapZone::Middle
    }
}

/// Outcome of a completed press/release sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Press and release without movement: a tap at the press column.
    Tap {
        /// Column of the press, for tap-zone classification.
        x: u16,
    },
    /// Horizontal drag to the left past the threshold: advance.
    SwipeLeft,
    /// Horizontal drag to the right past the threshold: go back.
    SwipeRight,
    /// Movement below the threshold, or a release with no tracked press.
    /// Changes nothing and must not reset the auto-advance timer.
    Ignored,
}

/// Tracks one in-flight mouse press until release.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    origin: Option<u16>,
    moved: bool,
}

impl DragTracker {
    /// Fresh tracker with no press in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a button press at column `x`. A second press before release
    /// restarts the gesture.
    pub fn press(&mut self, x: u16) {
        self.origin = Some(x);
        self.moved = false;
    }

    /// Record drag motion while the button is held.
    pub fn drag(&mut self, x: u16) {
        if let Some(origin) = self.origin {
            if x != origin {
                self.moved = true;
            }
        }
    }

    /// Record the button release at column `x` and classify the gesture.
    ///
    /// `threshold` is the minimum horizontal travel, in columns, for the
    /// gesture to count as a swipe. Consumes the tracked press.
    pub fn release(&mut self, x: u16, threshold: u16) -> DragOutcome {
        let Some(origin) = self.origin.take() else {
            return DragOutcome::Ignored;
        };
        let moved = self.moved;
        self.moved = false;

        let dx = i32::from(x) - i32::from(origin);
        if dx >= i32::from(threshold) {
            DragOutcome::SwipeRight
        } else if dx <= -i32::from(threshold) {
            DragOutcome::SwipeLeft
        } else if moved {
            // Travelled, but not far enough: abandoned drag.
            DragOutcome::Ignored
        } else {
            DragOutcome::Tap { x: origin }
        }
    }
}
