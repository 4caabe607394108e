//! Error kinds shared by every pipeline stage
//!
//! `MissingOption` and `FileNotFound` are recoverable: stages report them and the
//! driver short-circuits. `UnreadableFile` and `MalformedLimit` are fatal and
//! propagate to `main`.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TallyError {
    /// A required named option was not supplied
    #[error("Command line argument {name} missing")]
    MissingOption { name: &'static str },

    /// The option was supplied but does not name a regular file
    #[error("File {} does not exist", .path.display())]
    FileNotFound { path: PathBuf },

    /// Open or read failed after the existence check
    #[error("Cannot read file {}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The row limit is present but not a non-negative integer
    #[error("Invalid value {value:?} for max.number.words")]
    MalformedLimit {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl TallyError {
    /// Whether the driver can report this error and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TallyError::MissingOption { .. } | TallyError::FileNotFound { .. }
        )
    }

    /// Stable code used in machine-readable diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            TallyError::MissingOption { .. } => "MISSING_OPTION",
            TallyError::FileNotFound { .. } => "FILE_NOT_FOUND",
            TallyError::UnreadableFile { .. } => "UNREADABLE_FILE",
            TallyError::MalformedLimit { .. } => "MALFORMED_LIMIT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_option_message() {
        let err = TallyError::MissingOption {
            name: "content.file.name",
        };
        assert_eq!(
            err.to_string(),
            "Command line argument content.file.name missing"
        );
        assert!(err.is_recoverable());
        assert_eq!(err.code(), "MISSING_OPTION");
    }

    #[test]
    fn test_file_not_found_message() {
        let err = TallyError::FileNotFound {
            path: PathBuf::from("/data/words.txt"),
        };
        assert_eq!(err.to_string(), "File /data/words.txt does not exist");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_fatal_errors_are_not_recoverable() {
        let source = "abc".parse::<usize>().unwrap_err();
        let err = TallyError::MalformedLimit {
            value: "abc".to_string(),
            source,
        };
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("\"abc\""));

        let err = TallyError::UnreadableFile {
            path: PathBuf::from("x"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.code(), "UNREADABLE_FILE");
    }
}
