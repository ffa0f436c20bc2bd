//! Keyboard bindings configuration.

use crate::model::StoryAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to story actions.
///
/// Provides vim-flavored defaults alongside the arrow keys. Ctrl+C is
/// handled unconditionally by the event loop and is not part of the map.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, StoryAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<StoryAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Forward
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            StoryAction::NextPanel,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            StoryAction::NextPanel,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
            StoryAction::NextPanel,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            StoryAction::NextPanel,
        );

        // Back
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            StoryAction::PrevPanel,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            StoryAction::PrevPanel,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE),
            StoryAction::PrevPanel,
        );

        // Replay from the top
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            StoryAction::FirstPanel,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            StoryAction::FirstPanel,
        );

        // Close
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            StoryAction::Close,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            StoryAction::Close,
        );

        // Help overlay
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            StoryAction::Help,
        );

        Self { bindings }
    }
}
