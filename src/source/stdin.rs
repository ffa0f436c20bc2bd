//! Piped-stdin export source.

use crate::model::InputError;
use std::io::{BufRead, IsTerminal};

/// Read-once source for an export piped to stdin.
#[derive(Debug)]
pub struct StdinSource {
    consumed: bool,
}

impl StdinSource {
    /// Source over piped stdin.
    ///
    /// # Errors
    ///
    /// [`InputError::NoInput`] when stdin is an interactive terminal —
    /// there is nothing to read and blocking on a TTY would hang the app.
    pub fn new() -> Result<Self, InputError> {
        if std::io::stdin().is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self { consumed: false })
    }

    /// Read piped stdin to EOF as lines.
    ///
    /// The pipe is drained on first call; later calls return nothing.
    pub fn read_lines(&mut self) -> Result<Vec<String>, InputError> {
        if self.consumed {
            return Ok(Vec::new());
        }
        self.consumed = true;

        let stdin = std::io::stdin();
        let lines: Result<Vec<String>, std::io::Error> = stdin.lock().lines().collect();
        Ok(lines?)
    }
}
