//! Key-hint overlay.

use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::view::styles::PanelStyles;

const HELP_LINES: [&str; 7] = [
    "→ / l / Space   next panel",
    "← / h           previous panel",
    "g / Home        replay from start",
    "q / Esc         close",
    "?               toggle this help",
    "",
    "tap the side thirds or drag horizontally with the mouse",
];

/// Render the help overlay centered over the story.
pub fn render_help_overlay(frame: &mut Frame, area: Rect, styles: &PanelStyles) {
    let width = (area.width.saturating_sub(4)).min(60);
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    if width < 10 || height < 3 {
        return;
    }

    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let text: Vec<ratatui::text::Line> = HELP_LINES
        .iter()
        .map(|l| ratatui::text::Line::styled(*l, styles.body()))
        .collect();

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" keys ")),
        popup,
    );
}
