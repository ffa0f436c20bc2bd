//! Story screen layout.
//!
//! Three fixed bands: the segmented progress header, the panel body, and a
//! one-line status bar. The whole frame is the tap surface; layout here is
//! presentation only.

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::{Phase, StoryController};
use crate::view::help::render_help_overlay;
use crate::view::panel::render_panel;
use crate::view::progress::progress_line;
use crate::view::styles::PanelStyles;

/// Render the full story screen for the current playback state.
pub fn render_layout(
    frame: &mut Frame,
    controller: &StoryController,
    styles: &PanelStyles,
    help_visible: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // progress header
            Constraint::Min(0),    // panel body
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    let header_area = chunks[0];
    let body_area = chunks[1];
    let status_area = chunks[2];

    if let Phase::Viewing(index) = controller.phase() {
        let line = progress_line(
            controller.story().len(),
            index,
            controller.progress(),
            header_area.width,
            styles,
        );
        frame.render_widget(Paragraph::new(line), header_area);

        if let Some(panel) = controller.current_panel() {
            render_panel(frame, body_area, panel, styles);
        }

        frame.render_widget(
            Paragraph::new(status_bar_line(controller, index, styles)),
            status_area,
        );
    }

    if help_visible {
        render_help_overlay(frame, frame.area(), styles);
    }
}

/// One-line position indicator plus key hints.
fn status_bar_line(
    controller: &StoryController,
    index: usize,
    styles: &PanelStyles,
) -> Line<'static> {
    let position = format!(" {}/{}", index + 1, controller.story().len());
    Line::from(vec![
        Span::styled(position, styles.subtitle()),
        Span::styled("  ←/→ navigate · q close · ? help", styles.hint()),
    ])
}
