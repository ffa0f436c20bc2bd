//! Story playback controller.
//!
//! [`StoryController`] is the composition root of a viewing session: it owns
//! the story, the navigation cursor, the auto-advance timer, and the one-shot
//! exit signal. The shell translates keys and pointer gestures into the
//! semantic operations here; everything below this line is pure state.
//!
//! Phase machine:
//!
//! ```text
//! Idle ──start(non-empty)──> Viewing(0)
//! Idle ──start(empty)──────> Exited(EmptyStory)
//! Viewing(i) ⇄ Viewing(i±1) on navigation within bounds
//! Viewing(last) ──next/expiry──> Exited(EndOfStory)
//! Viewing(_) ──close──────────> Exited(Closed)
//! ```
//!
//! `Exited` is terminal: every operation afterwards is a no-op.

use std::time::Duration;

use tracing::debug;

use crate::model::{NavigationError, Panel, Story};
use crate::state::{AutoAdvanceTimer, NavigationCursor};

/// Playback phase of a viewing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed but not yet started; no panel is active.
    Idle,
    /// Showing the panel at the contained index.
    Viewing(usize),
    /// Session over. Terminal; no transitions out.
    Exited,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The story had no panels to show.
    EmptyStory,
    /// Advanced past the last panel (tap, swipe, or timer expiry).
    EndOfStory,
    /// The user closed the session explicitly.
    Closed,
}

/// Drives one story-viewing session.
///
/// Created with the session, destroyed with it; nothing here persists
/// across sessions. Single-threaded: the event loop is the only mutator.
#[derive(Debug)]
pub struct StoryController {
    story: Story,
    cursor: NavigationCursor,
    timer: AutoAdvanceTimer,
    started: bool,
    exited: Option<ExitReason>,
    exit_taken: bool,
}

impl StoryController {
    /// Controller for `story`, idle until [`start`](Self::start) is called.
    ///
    /// `auto_advance` is the per-panel display duration.
    pub fn new(story: Story, auto_advance: Duration) -> Self {
        let cursor = NavigationCursor::new(story.len());
        Self {
            story,
            cursor,
            timer: AutoAdvanceTimer::new(auto_advance),
            started: false,
            exited: None,
            exit_taken: false,
        }
    }

    /// Begin playback.
    ///
    /// A non-empty story activates panel 0 and starts its countdown. An
    /// empty story exits immediately — no `Viewing` phase is ever observed
    /// and the timer never starts.
    pub fn start(&mut self) {
        if self.started || self.exited.is_some() {
            return;
        }
        self.started = true;
        if self.story.is_empty() {
            self.exit(ExitReason::EmptyStory);
        } else {
            self.timer.restart();
            debug!(panels = self.story.len(), "story playback started");
        }
    }

    /// Current playback phase.
    pub fn phase(&self) -> Phase {
        if self.exited.is_some() {
            Phase::Exited
        } else if self.started {
            Phase::Viewing(self.cursor.current_index())
        } else {
            Phase::Idle
        }
    }

    /// The panel currently on screen, if any.
    pub fn current_panel(&self) -> Option<&Panel> {
        match self.phase() {
            Phase::Viewing(index) => self.story.get(index),
            Phase::Idle | Phase::Exited => None,
        }
    }

    /// The story being played.
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// Read access to the cursor for position queries.
    pub fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    /// Elapsed fraction of the active panel's display duration.
    pub fn progress(&self) -> f64 {
        self.timer.progress()
    }

    /// Whether the session has ended.
    pub fn is_exited(&self) -> bool {
        self.exited.is_some()
    }

    /// Why the session ended, if it has.
    pub fn exit_reason(&self) -> Option<ExitReason> {
        self.exited
    }

    /// Consume the exit signal.
    ///
    /// Yields the reason exactly once per session; later calls return
    /// `None`. This is the single outward exit event the host observes.
    pub fn take_exit(&mut self) -> Option<ExitReason> {
        if self.exit_taken {
            return None;
        }
        let reason = self.exited?;
        self.exit_taken = true;
        Some(reason)
    }

    /// Advance to the next panel (right-tap / swipe-left semantics).
    ///
    /// On the last panel this ends the session instead of moving.
    pub fn next_panel(&mut self) {
        if !self.viewing() {
            return;
        }
        if self.cursor.is_last_panel() {
            self.exit(ExitReason::EndOfStory);
            return;
        }
        // Stop the in-flight countdown before the cursor moves.
        self.timer.restart();
        self.cursor.navigate_forward();
        debug!(index = self.cursor.current_index(), "advanced to panel");
    }

    /// Go back one panel (left-tap / swipe-right semantics).
    ///
    /// On the first panel the cursor stays put but the panel restarts: the
    /// countdown still resets for the re-activated panel.
    pub fn prev_panel(&mut self) {
        if !self.viewing() {
            return;
        }
        self.timer.restart();
        self.cursor.navigate_back();
        debug!(index = self.cursor.current_index(), "went back to panel");
    }

    /// Replay from the first panel.
    pub fn first_panel(&mut self) {
        if !self.viewing() {
            return;
        }
        self.timer.restart();
        self.cursor.reset();
    }

    /// Jump directly to `index`.
    ///
    /// Out-of-range indices are a caller bug and are reported without any
    /// state change. After exit this is an inert `Ok`.
    pub fn jump_to(&mut self, index: usize) -> Result<(), NavigationError> {
        if !self.viewing() {
            return Ok(());
        }
        self.cursor.navigate_to_panel(index)?;
        self.timer.restart();
        Ok(())
    }

    /// End the session at the user's request.
    pub fn close(&mut self) {
        if self.exited.is_some() {
            return;
        }
        self.exit(ExitReason::Closed);
    }

    /// Drive the auto-advance countdown by a measured wall-clock delta.
    ///
    /// On uninterrupted expiry the story advances on its own; expiry on the
    /// last panel ends the session.
    pub fn tick(&mut self, delta: Duration) {
        if !self.viewing() {
            return;
        }
        if self.timer.tick(delta) {
            if self.cursor.is_last_panel() {
                self.exit(ExitReason::EndOfStory);
            } else {
                self.cursor.navigate_forward();
                self.timer.restart();
                debug!(index = self.cursor.current_index(), "auto-advanced to panel");
            }
        }
    }

    fn viewing(&self) -> bool {
        self.started && self.exited.is_none()
    }

    fn exit(&mut self, reason: ExitReason) {
        // First terminating condition wins; exit is observed at most once.
        if self.exited.is_none() {
            debug!(?reason, "story session exited");
            self.exited = Some(reason);
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
