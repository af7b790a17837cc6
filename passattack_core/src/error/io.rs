//! I/O related error types

use std::path::PathBuf;
use thiserror::Error;

/// I/O error with additional context
#[derive(Error, Debug)]
#[error("{}", format_io_error(self))]
pub struct IoError {
    /// The kind of I/O error
    pub kind: IoErrorKind,
    /// Path associated with the error (if any)
    pub path: Option<PathBuf>,
    /// Underlying I/O error (if any)
    #[source]
    pub source: Option<std::io::Error>,
}

/// Kind of I/O error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoErrorKind {
    /// Wordlist file not found
    FileNotFound,
    /// Wordlist exists but cannot be read
    PermissionDenied,
    /// Generic I/O error (including mid-stream read faults)
    Other,
}

impl IoError {
    /// Create a file not found error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        Self {
            kind: IoErrorKind::FileNotFound,
            path: Some(path.to_path_buf()),
            source: None,
        }
    }

    /// Create an I/O error from a standard I/O error
    pub fn from_std(source: std::io::Error) -> Self {
        let kind = match source.kind() {
            std::io::ErrorKind::NotFound => IoErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => IoErrorKind::PermissionDenied,
            _ => IoErrorKind::Other,
        };

        Self {
            kind,
            path: None,
            source: Some(source),
        }
    }

    /// Attach a path to the error
    pub fn with_path(mut self, path: &std::path::Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }
}

fn format_io_error(error: &IoError) -> String {
    match (&error.kind, &error.path) {
        (IoErrorKind::FileNotFound, Some(path)) => {
            format!("Wordlist not found: {}", path.display())
        }
        (IoErrorKind::FileNotFound, None) => "Wordlist not found".to_string(),
        (IoErrorKind::PermissionDenied, Some(path)) => {
            format!("Cannot open wordlist: permission denied for {}", path.display())
        }
        (IoErrorKind::PermissionDenied, None) => "Cannot open wordlist: permission denied".to_string(),
        (IoErrorKind::Other, _) => {
            if let Some(source) = &error.source {
                format!("I/O error: {source}")
            } else {
                "I/O error".to_string()
            }
        }
    }
}
