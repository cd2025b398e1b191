//! Program representation: the instruction text, one line per address.
//!
//! Lines are addressed 1-based. Nothing is decoded up front; the engine
//! decodes the line at the program counter on every step.

use crate::error::LoadError;
use std::fs;
use std::io;
use std::path::Path;

/// A loaded program: the ordered, immutable source lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Source lines; line `n` is `lines[n - 1]`.
    pub lines: Vec<String>,
}

impl Program {
    /// Split instruction text into lines (`\n` or `\r\n`).
    pub fn from_source(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Read a whole program file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;
        Ok(Self::from_source(&text))
    }

    /// The line at 1-based address `pc`.
    pub fn line(&self, pc: usize) -> Option<&str> {
        pc.checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the program has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_program() {
        let program = Program::from_source("");
        assert!(program.is_empty());
        assert_eq!(program.len(), 0);
        assert_eq!(program.line(1), None);
    }

    #[test]
    fn lines_are_one_based() {
        let program = Program::from_source("LOAD A,5\nPRINT A\nEND\n");
        assert_eq!(program.len(), 3);
        assert_eq!(program.line(0), None);
        assert_eq!(program.line(1), Some("LOAD A,5"));
        assert_eq!(program.line(3), Some("END"));
        assert_eq!(program.line(4), None);
    }

    #[test]
    fn crlf_line_endings() {
        let program = Program::from_source("PRINTLN\r\nEND\r\n");
        assert_eq!(program.line(1), Some("PRINTLN"));
        assert_eq!(program.line(2), Some("END"));
    }

    #[test]
    fn blank_lines_keep_their_address() {
        let program = Program::from_source("PRINTLN\n\nEND");
        assert_eq!(program.len(), 3);
        assert_eq!(program.line(2), Some(""));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.pl0");
        assert_eq!(
            Program::load(&path),
            Err(LoadError::FileNotFound { path })
        );
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prog.pl0");
        fs::write(&path, "LOAD A,1\nEND\n").unwrap();
        let program = Program::load(&path).unwrap();
        assert_eq!(program.len(), 2);
    }
}
