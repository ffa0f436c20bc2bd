//! Story panel types (pure).
//!
//! A Rewind story is an ordered, immutable sequence of [`Panel`]s. Panels
//! are value objects: constructed once by the parser, never mutated during
//! playback. The variant set is closed; the renderer matches exhaustively
//! with no catch-all arm, so adding a variant is a compile-visible change
//! at every consumer.

use chrono::NaiveDate;
use serde::Deserialize;

/// One displayable unit of story content within a Rewind session.
///
/// Deserialized from one JSON object per line of a Rewind export, tagged by
/// the `kind` field (e.g. `{"kind": "stat", "value": "312", "label": ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    /// Free-standing prose, the plainest panel form.
    Text {
        /// The prose to display.
        body: String,
        /// Optional named backdrop (e.g. "sunrise", "ink").
        #[serde(default)]
        background: Option<String>,
    },

    /// A headline panel: title with optional subtitle.
    Titled {
        /// Headline text.
        title: String,
        /// Secondary line shown under the title.
        #[serde(default)]
        subtitle: Option<String>,
        /// Optional named backdrop.
        #[serde(default)]
        background: Option<String>,
    },

    /// A single big statistic (e.g. "312" / "entries written this year").
    Stat {
        /// The headline figure, preformatted by the exporter.
        value: String,
        /// What the figure counts.
        label: String,
        /// Optional named backdrop.
        #[serde(default)]
        background: Option<String>,
    },

    /// An excerpt from a journal note, shown with the entry's date.
    Note {
        /// Excerpt text from the note.
        body: String,
        /// Calendar date of the journal entry; formatted at render time.
        date: NaiveDate,
    },

    /// A photo reference with an optional caption.
    ///
    /// Terminals cannot show the photo itself; the renderer draws a framed
    /// placeholder naming the source plus the caption.
    Image {
        /// Exporter-side reference to the photo (path or asset id).
        source: String,
        /// Caption shown under the frame.
        #[serde(default)]
        caption: Option<String>,
    },

    /// Connective narration between content panels.
    Context {
        /// Narration text.
        body: String,
    },

    /// A chapter break separating sections of the story.
    Transition {
        /// Optional chapter heading shown on the break.
        #[serde(default)]
        heading: Option<String>,
    },
}

impl Panel {
    /// Stable variant name, used in logs and the status bar.
    pub fn kind(&self) -> &'static str {
        match self {
            Panel::Text { .. } => "text",
            Panel::Titled { .. } => "titled",
            Panel::Stat { .. } => "stat",
            Panel::Note { .. } => "note",
            Panel::Image { .. } => "image",
            Panel::Context { .. } => "context",
            Panel::Transition { .. } => "transition",
        }
    }
}

/// An ordered, finite sequence of panels: one Rewind story.
///
/// Supplied once per viewing session, before playback starts, and never
/// consulted again for new content. Length may be zero; an empty story is
/// not an error — the controller treats it as an immediate exit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Story {
    panels: Vec<Panel>,
}

impl Story {
    /// Create a story from its panels, preserving order.
    pub fn new(panels: Vec<Panel>) -> Self {
        Self { panels }
    }

    /// Number of panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the story has no panels.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Panel at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    /// All panels in display order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_panel(body: &str) -> Panel {
        Panel::Text {
            body: body.to_string(),
            background: None,
        }
    }

    #[test]
    fn story_preserves_panel_order() {
        let story = Story::new(vec![text_panel("a"), text_panel("b"), text_panel("c")]);
        assert_eq!(story.len(), 3);
        assert_eq!(story.get(0), Some(&text_panel("a")));
        assert_eq!(story.get(2), Some(&text_panel("c")));
    }

    #[test]
    fn story_get_past_end_is_none() {
        let story = Story::new(vec![text_panel("only")]);
        assert_eq!(story.get(1), None);
    }

    #[test]
    fn empty_story_reports_empty() {
        let story = Story::new(vec![]);
        assert!(story.is_empty());
        assert_eq!(story.len(), 0);
    }

    #[test]
    fn deserialize_text_panel() {
        let json = r#"{"kind": "text", "body": "hello"}"#;
        let panel: Panel = serde_json::from_str(json).unwrap();
        assert_eq!(
            panel,
            Panel::Text {
                body: "hello".to_string(),
                background: None
            }
        );
    }

    #[test]
    fn deserialize_stat_panel_with_background() {
        let json = r#"{"kind": "stat", "value": "312", "label": "entries", "background": "ink"}"#;
        let panel: Panel = serde_json::from_str(json).unwrap();
        assert_eq!(
            panel,
            Panel::Stat {
                value: "312".to_string(),
                label: "entries".to_string(),
                background: Some("ink".to_string()),
            }
        );
    }

    #[test]
    fn deserialize_note_panel_parses_date() {
        let json = r#"{"kind": "note", "body": "rained all day", "date": "2025-03-14"}"#;
        let panel: Panel = serde_json::from_str(json).unwrap();
        match panel {
            Panel::Note { date, .. } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
            }
            other => panic!("expected note panel, got {other:?}"),
        }
    }

    #[test]
    fn deserialize_unknown_kind_is_rejected() {
        let json = r#"{"kind": "hologram", "body": "??"}"#;
        assert!(serde_json::from_str::<Panel>(json).is_err());
    }

    #[test]
    fn deserialize_missing_required_field_is_rejected() {
        let json = r#"{"kind": "stat", "value": "312"}"#;
        assert!(serde_json::from_str::<Panel>(json).is_err());
    }

    #[test]
    fn kind_names_cover_all_variants() {
        let panels = [
            text_panel("a"),
            Panel::Titled {
                title: "t".into(),
                subtitle: None,
                background: None,
            },
            Panel::Stat {
                value: "1".into(),
                label: "l".into(),
                background: None,
            },
            Panel::Note {
                body: "b".into(),
                date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            },
            Panel::Image {
                source: "s".into(),
                caption: None,
            },
            Panel::Context { body: "c".into() },
            Panel::Transition { heading: None },
        ];
        let kinds: Vec<_> = panels.iter().map(Panel::kind).collect();
        assert_eq!(
            kinds,
            vec!["text", "titled", "stat", "note", "image", "context", "transition"]
        );
    }
}
