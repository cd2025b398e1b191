//! Errors from loading program files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur while reading a program from disk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The program file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Any other read failure.
    #[error("cannot read '{}': {message}", path.display())]
    Io { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let e = LoadError::FileNotFound {
            path: PathBuf::from("prog.pl0"),
        };
        assert_eq!(e.to_string(), "file not found: prog.pl0");
    }

    #[test]
    fn display_io() {
        let e = LoadError::Io {
            path: PathBuf::from("dir"),
            message: "Is a directory".to_string(),
        };
        assert_eq!(e.to_string(), "cannot read 'dir': Is a directory");
    }
}
