//! TUI rendering and terminal management (impure shell).
//!
//! [`TuiApp`] owns the terminal, the playback controller, and the input
//! wiring. The event loop is tick-driven: `event::poll` with a short
//! timeout doubles as the auto-advance clock, and user events are handled
//! before any pending expiry so manual navigation always cancels an
//! in-flight countdown first.

pub mod help;
pub mod layout;
pub mod panel;
pub mod progress;
pub mod styles;

pub use styles::{ColorConfig, PanelStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{InputError, Story, StoryAction};
use crate::parser;
use crate::source::InputSource;
use crate::state::{tap_zone, DragOutcome, DragTracker, ExitReason, StoryController, TapZone};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Story input error.
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Poll timeout driving the auto-advance clock and progress repaints.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Main TUI application.
///
/// Generic over the backend so tests can drive it with `TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    controller: StoryController,
    key_bindings: KeyBindings,
    styles: PanelStyles,
    drag: DragTracker,
    drag_threshold: u16,
    help_visible: bool,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a TUI application over a real terminal.
    ///
    /// Reads and parses the whole export first — input errors surface
    /// before the terminal enters raw mode — then sets up the alternate
    /// screen with mouse capture.
    pub fn new(
        mut input_source: InputSource,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        let lines = input_source.read_lines()?;
        let loaded = parser::parse_story(&lines);
        for err in &loaded.errors {
            warn!("{err}");
        }
        info!(
            source = %input_source.describe(),
            panels = loaded.story.len(),
            skipped = loaded.errors.len(),
            "story loaded"
        );

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, loaded.story, config, colors))
    }

    /// Run the main event loop until the session exits.
    ///
    /// Returns the exit reason (empty story, end of story, or user close).
    pub fn run(&mut self) -> Result<ExitReason, TuiError> {
        self.controller.start();
        if let Some(reason) = self.controller.take_exit() {
            info!(?reason, "story ended before first frame");
            return Ok(reason);
        }
        self.draw()?;

        let mut last_tick = Instant::now();
        loop {
            if event::poll(TICK_INTERVAL)? {
                let restarted = match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(_, _) => false,
                    _ => false,
                };
                if restarted {
                    // The countdown was restarted by navigation; measure
                    // the fresh panel's elapsed time from here.
                    last_tick = Instant::now();
                }
            } else {
                let now = Instant::now();
                self.controller.tick(now - last_tick);
                last_tick = now;
            }

            if let Some(reason) = self.controller.take_exit() {
                info!(?reason, "story session over");
                return Ok(reason);
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Assemble an application over an already-built terminal.
    ///
    /// This is the backend-agnostic constructor used by integration tests
    /// with `TestBackend`.
    pub fn with_terminal(
        terminal: Terminal<B>,
        story: Story,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Self {
        Self {
            terminal,
            controller: StoryController::new(story, config.auto_advance()),
            key_bindings: KeyBindings::default(),
            styles: PanelStyles::with_color_config(colors),
            drag: DragTracker::new(),
            drag_threshold: config.drag_threshold,
            help_visible: false,
        }
    }

    /// The playback controller, for position assertions in tests.
    pub fn controller(&self) -> &StoryController {
        &self.controller
    }

    /// The underlying terminal, for buffer inspection in tests.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Mutable access to the playback controller.
    pub fn controller_mut(&mut self) -> &mut StoryController {
        &mut self.controller
    }

    /// Render one frame of the current state.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let Self {
            terminal,
            controller,
            styles,
            help_visible,
            ..
        } = self;
        terminal.draw(|frame| layout::render_layout(frame, controller, styles, *help_visible))?;
        Ok(())
    }

    /// Handle one keyboard event.
    ///
    /// Returns whether the auto-advance countdown was restarted.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always closes, bindings or not.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.controller.close();
            return false;
        }

        // The help overlay swallows keys: Esc just dismisses it, a bound
        // Close both dismisses and ends the session.
        if self.help_visible {
            self.help_visible = false;
            if key.code != KeyCode::Esc {
                if let Some(StoryAction::Close) = self.key_bindings.get(key) {
                    self.controller.close();
                }
            }
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        match action {
            StoryAction::NextPanel => {
                self.controller.next_panel();
                true
            }
            StoryAction::PrevPanel => {
                self.controller.prev_panel();
                true
            }
            StoryAction::FirstPanel => {
                self.controller.first_panel();
                true
            }
            StoryAction::Close => {
                self.controller.close();
                false
            }
            StoryAction::Help => {
                self.help_visible = true;
                false
            }
        }
    }

    /// Handle one mouse event, folding press/drag/release into gestures.
    ///
    /// Returns whether the auto-advance countdown was restarted.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag.press(mouse.column);
                false
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.drag.drag(mouse.column);
                false
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let outcome = self.drag.release(mouse.column, self.drag_threshold);
                self.apply_gesture(outcome)
            }
            _ => false,
        }
    }

    /// Translate a completed gesture into a navigation operation.
    fn apply_gesture(&mut self, outcome: DragOutcome) -> bool {
        match outcome {
            DragOutcome::Tap { x } => {
                let width = self.terminal.size().map(|s| s.width).unwrap_or(80);
                match tap_zone(x, width) {
                    TapZone::Left => {
                        self.controller.prev_panel();
                        true
                    }
                    TapZone::Right => {
                        self.controller.next_panel();
                        true
                    }
                    TapZone::Middle => false,
                }
            }
            DragOutcome::SwipeLeft => {
                self.controller.next_panel();
                true
            }
            DragOutcome::SwipeRight => {
                self.controller.prev_panel();
                true
            }
            DragOutcome::Ignored => false,
        }
    }
}

/// Play a story from `input_source` on the real terminal.
///
/// The terminal is restored on every exit path before the result is
/// returned to the caller.
pub fn run_with_source(
    input_source: InputSource,
    config: &ResolvedConfig,
    colors: ColorConfig,
) -> Result<ExitReason, TuiError> {
    let mut app = TuiApp::new(input_source, config, colors)?;
    let result = app.run();
    restore_terminal()?;
    result
}

/// Leave raw mode and the alternate screen.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
