//! Story input sources.
//!
//! A Rewind export is supplied exactly once, before viewing starts: from a
//! file path argument or piped stdin. Both are read-once sources behind the
//! [`InputSource`] sum type; nothing is consulted again during playback.

use crate::model::InputError;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified read-once input source for a Rewind export.
#[derive(Debug)]
pub enum InputSource {
    /// Export file named on the command line.
    File(FileSource),
    /// Export piped to stdin.
    Stdin(StdinSource),
}

impl InputSource {
    /// Read the whole export as raw lines.
    ///
    /// Consumes the source's content; a second call on a stdin source
    /// yields nothing further.
    pub fn read_lines(&mut self) -> Result<Vec<String>, InputError> {
        match self {
            InputSource::File(f) => f.read_lines(),
            InputSource::Stdin(s) => s.read_lines(),
        }
    }

    /// Human-readable origin for logs ("path" or "<stdin>").
    pub fn describe(&self) -> String {
        match self {
            InputSource::File(f) => f.path().display().to_string(),
            InputSource::Stdin(_) => "<stdin>".to_string(),
        }
    }
}

/// Detect and create the appropriate input source.
///
/// A file path wins when given; otherwise stdin must be piped.
///
/// # Errors
///
/// [`InputError::FileNotFound`] for a missing file,
/// [`InputError::NoInput`] when no file is given and stdin is a TTY.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rewind_source_test_{name}"));
        fs::write(
            &path,
            "{\"kind\": \"text\", \"body\": \"one\"}\n{\"kind\": \"transition\"}\n",
        )
        .expect("write fixture");
        path
    }

    #[test]
    fn detect_prefers_file_when_given() {
        let path = fixture_path("detect");
        let source = detect_input_source(Some(path.clone())).unwrap();
        assert!(matches!(source, InputSource::File(_)));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn detect_missing_file_is_file_not_found() {
        let err = detect_input_source(Some(PathBuf::from("/no/such/rewind.jsonl"))).unwrap_err();
        assert!(matches!(err, InputError::FileNotFound { .. }));
    }

    #[test]
    fn file_source_reads_all_lines() {
        let path = fixture_path("read");
        let mut source = detect_input_source(Some(path.clone())).unwrap();
        let lines = source.read_lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("text"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn describe_names_the_file() {
        let path = fixture_path("describe");
        let source = detect_input_source(Some(path.clone())).unwrap();
        assert!(source.describe().contains("rewind_source_test_describe"));
        let _ = fs::remove_file(path);
    }
}
