//! Segmented progress header.
//!
//! One segment per panel across the top line, Stories-style: panels
//! already seen render full, the active panel's segment fills with the
//! auto-advance countdown, panels still ahead render empty. Very long
//! stories that cannot fit one visible cell per segment fall back to a
//! plain "current/total" counter.

use ratatui::text::{Line, Span};

use crate::view::styles::PanelStyles;

const FILLED: &str = "━";
const EMPTY: &str = "─";
const GAP: &str = " ";

/// Number of leading cells of a segment that render filled at `progress`.
fn filled_cells(cells: usize, progress: f64) -> usize {
    ((cells as f64) * progress.clamp(0.0, 1.0)).floor() as usize
}

/// Build the progress header line for the given playback position.
///
/// `progress` is the active panel's elapsed fraction in `[0.0, 1.0]`.
pub fn progress_line(
    panel_count: usize,
    current_index: usize,
    progress: f64,
    width: u16,
    styles: &PanelStyles,
) -> Line<'static> {
    let width = width as usize;
    if panel_count == 0 || width == 0 {
        return Line::default();
    }

    // Each segment needs at least one cell plus a gap between segments.
    let gaps = panel_count - 1;
    if width < panel_count + gaps {
        return Line::from(Span::styled(
            format!("{}/{}", current_index + 1, panel_count),
            styles.progress_done(),
        ));
    }

    let cells_per_segment = (width - gaps) / panel_count;
    let mut spans = Vec::with_capacity(panel_count * 2);
    for i in 0..panel_count {
        if i > 0 {
            spans.push(Span::raw(GAP));
        }
        let filled = if i < current_index {
            cells_per_segment
        } else if i == current_index {
            filled_cells(cells_per_segment, progress)
        } else {
            0
        };
        if filled > 0 {
            spans.push(Span::styled(FILLED.repeat(filled), styles.progress_done()));
        }
        if filled < cells_per_segment {
            spans.push(Span::styled(
                EMPTY.repeat(cells_per_segment - filled),
                styles.progress_rest(),
            ));
        }
    }
    Line::from(spans)
}
