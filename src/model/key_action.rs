//! Domain-level story actions independent of key bindings.

/// Actions a viewer can take on a playing story.
///
/// These represent user intent, not physical keys. The mapping from
/// `crossterm::event::KeyEvent` to `StoryAction` is owned by
/// `config::KeyBindings`; mouse gestures resolve to the same actions in the
/// event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryAction {
    /// Advance to the next panel; on the last panel this ends the session.
    /// Default: Right/l/n/Space (and tap on the right third).
    NextPanel,
    /// Go back one panel; no-op on the first panel. Default: Left/h/p
    /// (and tap on the left third).
    PrevPanel,
    /// Jump back to the first panel and replay it. Default: g/Home
    FirstPanel,
    /// End the session immediately. Default: q/Esc (Ctrl+C always works).
    Close,
    /// Toggle the key-hint overlay. Default: ?
    Help,
}
