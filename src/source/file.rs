//! File-based export source.

use crate::model::InputError;
use std::fs;
use std::path::{Path, PathBuf};

/// Read-once source for an export file on disk.
///
/// Existence is checked at construction so a bad path fails before the
/// terminal is put into raw mode.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source for the export at `path`.
    ///
    /// # Errors
    ///
    /// [`InputError::FileNotFound`] when the path does not exist.
    pub fn new(path: PathBuf) -> Result<Self, InputError> {
        if !path.exists() {
            return Err(InputError::FileNotFound { path });
        }
        Ok(Self { path })
    }

    /// The export path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole export as lines.
    pub fn read_lines(&mut self) -> Result<Vec<String>, InputError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(content.lines().map(str::to_string).collect())
    }
}
