//! Panel styling configuration.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled by the `--no-color` CLI flag or a set `NO_COLOR`
/// environment variable, in that priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PanelStyles =====

/// Styles for the story surfaces: panel text roles, the progress header,
/// and the status bar.
pub struct PanelStyles {
    title: Style,
    subtitle: Style,
    body: Style,
    accent: Style,
    date: Style,
    hint: Style,
    progress_done: Style,
    progress_rest: Style,
}

impl PanelStyles {
    /// Styles with the default color scheme, honoring the environment.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Styles under an explicit color configuration.
    ///
    /// With colors disabled only weight/emphasis modifiers remain, so the
    /// story stays readable on monochrome terminals.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                subtitle: Style::default().fg(Color::Gray),
                body: Style::default(),
                accent: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                date: Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                hint: Style::default().fg(Color::DarkGray),
                progress_done: Style::default().fg(Color::White),
                progress_rest: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                title: Style::default().add_modifier(Modifier::BOLD),
                subtitle: Style::default(),
                body: Style::default(),
                accent: Style::default().add_modifier(Modifier::BOLD),
                date: Style::default().add_modifier(Modifier::ITALIC),
                hint: Style::default(),
                progress_done: Style::default(),
                progress_rest: Style::default().add_modifier(Modifier::DIM),
            }
        }
    }

    /// Headline style.
    pub fn title(&self) -> Style {
        self.title
    }

    /// Secondary-line style.
    pub fn subtitle(&self) -> Style {
        self.subtitle
    }

    /// Prose style.
    pub fn body(&self) -> Style {
        self.body
    }

    /// Style for statistics and decorative rules.
    pub fn accent(&self) -> Style {
        self.accent
    }

    /// Style for entry dates.
    pub fn date(&self) -> Style {
        self.date
    }

    /// Style for status-bar hints.
    pub fn hint(&self) -> Style {
        self.hint
    }

    /// Style for the elapsed part of the progress header.
    pub fn progress_done(&self) -> Style {
        self.progress_done
    }

    /// Style for the remaining part of the progress header.
    pub fn progress_rest(&self) -> Style {
        self.progress_rest
    }
}

impl Default for PanelStyles {
    fn default() -> Self {
        Self::new()
    }
}
