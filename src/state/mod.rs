//! Playback state (pure).
//!
//! Everything here is synchronous, single-mutator state driven from the
//! event loop. The shell supplies wall-clock deltas; no module in this
//! layer reads the clock or the terminal itself.

pub mod auto_advance;
pub mod controller;
pub mod cursor;
pub mod gesture;

pub use auto_advance::AutoAdvanceTimer;
pub use controller::{ExitReason, Phase, StoryController};
pub use cursor::NavigationCursor;
pub use gesture::{tap_zone, DragOutcome, DragTracker, TapZone};
