//! Rewind export parsing.
//!
//! An export is JSON Lines: one `kind`-tagged panel object per line.
//! Parsing is per-line and tolerant — a malformed line yields a
//! [`ParseError`] naming its 1-based line number and is skipped, so a
//! partially corrupt export still plays whatever did parse. A file with no
//! valid panels loads as the empty story, which the controller treats as an
//! immediate exit, not an error.

use crate::model::{Panel, ParseError, Story};

/// Result of loading an export: the playable story plus the per-line
/// errors that were skipped along the way.
#[derive(Debug)]
pub struct LoadedStory {
    /// Panels that parsed, in export order.
    pub story: Story,
    /// Errors for the lines that did not, with their line numbers.
    pub errors: Vec<ParseError>,
}

/// Parse one export line.
///
/// `line_number` is 1-based. Blank lines are not panels and not errors;
/// they yield `Ok(None)`.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<Panel>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|e| ParseError::InvalidPanel {
            line: line_number,
            message: e.to_string(),
        })
}

/// Parse a whole export, skipping malformed lines.
pub fn parse_story<I, S>(lines: I) -> LoadedStory
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut panels = Vec::new();
    let mut errors = Vec::new();

    for (i, line) in lines.into_iter().enumerate() {
        match parse_line(i + 1, line.as_ref()) {
            Ok(Some(panel)) => panels.push(panel),
            Ok(None) => {}
            Err(err) => errors.push(err),
        }
    }

    LoadedStory {
        story: Story::new(panels),
        errors,
    }
}
