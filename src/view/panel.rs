//! Per-variant panel rendering.
//!
//! Each panel variant gets its own composition of centered lines. The
//! match is exhaustive on purpose: a new panel kind must show up here as a
//! compile error, not as a silently blank screen.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::model::Panel;
use crate::view::styles::PanelStyles;

/// Greedy word wrap to `max_width` display columns.
///
/// Words wider than the limit land on their own line rather than being
/// split mid-word; panel copy is short prose, not code.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }
    let mut lines = Vec::new();
    for source_line in text.lines() {
        let mut current = String::new();
        for word in source_line.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.width() + 1 + word.width() <= max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Compose the display lines for one panel at the given content width.
pub fn panel_lines(panel: &Panel, styles: &PanelStyles, width: u16) -> Vec<Line<'static>> {
    // Leave breathing room at the edges; story copy reads better narrow.
    let text_width = (usize::from(width).saturating_sub(4)).max(8);

    match panel {
        Panel::Text { body, .. } => wrap_text(body, text_width)
            .into_iter()
            .map(|l| Line::styled(l, styles.body()))
            .collect(),

        Panel::Titled {
            title, subtitle, ..
        } => {
            let mut lines: Vec<Line> = wrap_text(title, text_width)
                .into_iter()
                .map(|l| Line::styled(l, styles.title()))
                .collect();
            if let Some(subtitle) = subtitle {
                lines.push(Line::default());
                lines.extend(
                    wrap_text(subtitle, text_width)
                        .into_iter()
                        .map(|l| Line::styled(l, styles.subtitle())),
                );
            }
            lines
        }

        Panel::Stat { value, label, .. } => {
            let mut lines = vec![Line::styled(value.clone(), styles.accent())];
            lines.push(Line::default());
            lines.extend(
                wrap_text(label, text_width)
                    .into_iter()
                    .map(|l| Line::styled(l, styles.subtitle())),
            );
            lines
        }

        Panel::Note { body, date } => {
            let quoted = format!("\u{201c}{body}\u{201d}");
            let mut lines: Vec<Line> = wrap_text(&quoted, text_width)
                .into_iter()
                .map(|l| Line::styled(l, styles.body()))
                .collect();
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("— {}", date.format("%B %-d, %Y")),
                styles.date(),
            ));
            lines
        }

        Panel::Image { source, caption } => {
            let inner = source.width().max("photo".width());
            let frame_width = inner.min(text_width.saturating_sub(4)).max(5);
            let bar = "─".repeat(frame_width + 2);
            let pad = |s: &str| format!("│ {s:^frame_width$} │");
            let mut lines = vec![
                Line::styled(format!("╭{bar}╮"), styles.hint()),
                Line::styled(pad("photo"), styles.hint()),
                Line::from(vec![Span::styled(
                    pad(&truncate_to(source, frame_width)),
                    styles.subtitle(),
                )]),
                Line::styled(format!("╰{bar}╯"), styles.hint()),
            ];
            if let Some(caption) = caption {
                lines.push(Line::default());
                lines.extend(
                    wrap_text(caption, text_width)
                        .into_iter()
                        .map(|l| Line::styled(l, styles.body())),
                );
            }
            lines
        }

        Panel::Context { body } => wrap_text(body, text_width)
            .into_iter()
            .map(|l| Line::styled(l, styles.subtitle()))
            .collect(),

        Panel::Transition { heading } => match heading {
            Some(heading) => vec![Line::styled(
                format!("───  {heading}  ───"),
                styles.accent(),
            )],
            None => vec![Line::styled("· · ·".to_string(), styles.accent())],
        },
    }
}

/// Clip a string to `max` display columns, appending an ellipsis when cut.
fn truncate_to(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for ch in s.chars() {
        if out.width() + 2 > max {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

/// Render one panel centered in `area`.
pub fn render_panel(frame: &mut Frame, area: Rect, panel: &Panel, styles: &PanelStyles) {
    let lines = panel_lines(panel, styles, area.width);

    // Vertical centering: pad above with empty lines.
    let content_height = lines.len().min(usize::from(area.height));
    let top_pad = (usize::from(area.height) - content_height) / 2;
    let mut padded: Vec<Line> = std::iter::repeat_with(Line::default).take(top_pad).collect();
    padded.extend(lines);

    let paragraph = Paragraph::new(padded).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rendered(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn wrap_text_respects_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 15);
        assert!(lines.iter().all(|l| l.width() <= 15), "{lines:?}");
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn wrap_text_keeps_oversized_word_whole() {
        let lines = wrap_text("a supercalifragilistic day", 10);
        assert!(lines.contains(&"supercalifragilistic".to_string()));
    }

    #[test]
    fn wrap_text_of_empty_is_one_blank_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn text_panel_renders_its_body() {
        let styles = PanelStyles::default();
        let panel = Panel::Text {
            body: "a quiet month".to_string(),
            background: None,
        };
        assert_eq!(rendered(&panel_lines(&panel, &styles, 80)), vec!["a quiet month"]);
    }

    #[test]
    fn titled_panel_stacks_title_and_subtitle() {
        let styles = PanelStyles::default();
        let panel = Panel::Titled {
            title: "Your 2025".to_string(),
            subtitle: Some("a year in words".to_string()),
            background: None,
        };
        let lines = rendered(&panel_lines(&panel, &styles, 80));
        assert_eq!(lines, vec!["Your 2025", "", "a year in words"]);
    }

    #[test]
    fn stat_panel_leads_with_the_value() {
        let styles = PanelStyles::default();
        let panel = Panel::Stat {
            value: "312".to_string(),
            label: "entries written".to_string(),
            background: None,
        };
        let lines = rendered(&panel_lines(&panel, &styles, 80));
        assert_eq!(lines[0], "312");
        assert_eq!(lines[2], "entries written");
    }

    #[test]
    fn note_panel_formats_the_entry_date() {
        let styles = PanelStyles::default();
        let panel = Panel::Note {
            body: "rained all day".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        };
        let lines = rendered(&panel_lines(&panel, &styles, 80));
        assert_eq!(lines[0], "\u{201c}rained all day\u{201d}");
        assert_eq!(lines.last().unwrap(), "— March 14, 2025");
    }

    #[test]
    fn image_panel_draws_a_frame_and_caption() {
        let styles = PanelStyles::default();
        let panel = Panel::Image {
            source: "beach.jpg".to_string(),
            caption: Some("low tide".to_string()),
        };
        let lines = rendered(&panel_lines(&panel, &styles, 80));
        assert!(lines[0].starts_with('╭'));
        assert!(lines[1].contains("photo"));
        assert!(lines[2].contains("beach.jpg"));
        assert!(lines[3].starts_with('╰'));
        assert_eq!(lines.last().unwrap(), "low tide");
    }

    #[test]
    fn transition_panel_with_heading_draws_rules() {
        let styles = PanelStyles::default();
        let panel = Panel::Transition {
            heading: Some("Spring".to_string()),
        };
        let lines = rendered(&panel_lines(&panel, &styles, 80));
        assert_eq!(lines, vec!["───  Spring  ───"]);
    }

    #[test]
    fn transition_panel_without_heading_draws_dots() {
        let styles = PanelStyles::default();
        let panel = Panel::Transition { heading: None };
        let lines = rendered(&panel_lines(&panel, &styles, 80));
        assert_eq!(lines, vec!["· · ·"]);
    }

    #[test]
    fn truncate_to_clips_long_sources() {
        let clipped = truncate_to("a-very-long-photo-reference.jpg", 10);
        assert!(clipped.width() <= 10);
        assert!(clipped.ends_with('…'));
    }
}
