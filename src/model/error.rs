//! Error types for the rewind application.
//!
//! Hierarchical taxonomy built on `thiserror`, composing via `From` and `?`.
//!
//! Recovery strategy:
//! - [`ParseError`] is non-fatal: a malformed export line is logged with its
//!   line number and skipped, and playback proceeds with the panels that did
//!   parse.
//! - [`InputError`] and terminal IO are fatal: without a story source or a
//!   working terminal there is nothing to play.
//! - [`NavigationError`] marks a caller contract violation (an index outside
//!   the story bounds), not a runtime condition to retry.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Domain errors convert into this via `From`, so `?` propagates them from
/// anywhere in the shell layer without manual mapping.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the Rewind export from file or stdin. Fatal.
    #[error("Failed to read story input: {0}")]
    Input(#[from] InputError),

    /// A line of the export could not be parsed as a panel. Non-fatal at
    /// the load boundary; carried here only when surfaced deliberately.
    #[error("Failed to parse story panel: {0}")]
    Parse(#[from] ParseError),

    /// A navigation call violated the cursor's bounds contract.
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Terminal or TUI rendering failure (crossterm/ratatui layer). Fatal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors reading the Rewind export from a file or piped stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The export file does not exist at the given path.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that failed to open.
        path: PathBuf,
    },

    /// Invoked with no file argument and an interactive (non-piped) stdin.
    #[error("No story input: provide an export file path or pipe data to stdin")]
    NoInput,

    /// Any other IO failure (permissions, disk errors, broken pipe).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors parsing one line of a Rewind export.
///
/// Export parsing is per-line and tolerant: each error names the offending
/// 1-based line so the exporter side can be debugged, and the loader skips
/// the line rather than aborting the story.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The line is not a valid panel object (bad JSON, unknown `kind`,
    /// missing variant field, or an unparseable date).
    #[error("Invalid panel at line {line}: {message}")]
    InvalidPanel {
        /// 1-based line number in the export.
        line: usize,
        /// The serde error message describing what went wrong.
        message: String,
    },
}

/// Errors from cursor navigation calls.
///
/// Raised only by explicit jumps to an index; the relative moves
/// (`navigate_forward`, `navigate_back`) saturate at the story bounds and
/// cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// Requested panel index is outside `0..panel_count`.
    #[error("Panel index {index} out of range: story has {panel_count} panels")]
    OutOfRange {
        /// The invalid index that was requested.
        index: usize,
        /// The exclusive upper bound (number of panels in the story).
        panel_count: usize,
    },
}
