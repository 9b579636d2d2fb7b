//! Error types for the scoring engine and the progress ledger.
//!
//! Validation failures are raised at the input boundary before anything is
//! computed. Persistence failures cover every way the ledger file can be
//! unusable and are never retried.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Malformed or out-of-range input for a weekly submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The user identifier was empty or whitespace.
    #[error("user must not be empty")]
    EmptyUser,

    /// A numeric field could not be parsed as a number.
    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    /// A field that must be a whole number was fractional or out of range.
    #[error("{field} must be a whole non-negative number, got {value:?}")]
    NotAWholeNumber { field: &'static str, value: String },

    /// Hours were negative, NaN or infinite.
    #[error("{field} must be a finite non-negative number, got {value}")]
    OutOfRange { field: &'static str, value: f64 },

    /// Hours so large their points would leave the ledger's range.
    #[error("{field} of {value} is too large to score")]
    TooLarge { field: &'static str, value: f64 },
}

/// Failure reading or writing the ledger.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The ledger could not be opened, read, written or replaced.
    #[error("failed to access ledger {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The header row is missing, reordered or carries unknown columns.
    #[error("ledger {} has an unexpected header: expected [{expected}], found [{found}]", .path.display())]
    SchemaMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    /// A data row could not be read as a ledger entry.
    #[error("ledger {} is unreadable at line {line}: {message}", .path.display())]
    Corrupted {
        path: PathBuf,
        line: u64,
        message: String,
    },
}

impl PersistenceError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Classify a `csv` error: I/O problems stay I/O, everything else means
    /// the file content is not a valid ledger.
    pub(crate) fn from_csv(path: &Path, err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => Self::io(path, source),
            _ => PersistenceError::Corrupted {
                path: path.to_path_buf(),
                line,
                message,
            },
        }
    }
}

/// Errors returned by [`Scorekeeper::submit`](crate::engine::Scorekeeper::submit).
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The submission was rejected before any state changed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The score was computed but could not be written to the ledger.
    /// In-memory state has been rolled back to what it was before.
    #[error("result for {user} week {week} was not recorded: {source}")]
    NotRecorded {
        user: String,
        week: u32,
        #[source]
        source: PersistenceError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let err = PersistenceError::io(
            Path::new("/tmp/ledger.csv"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/ledger.csv"), "got: {msg}");
        assert!(msg.contains("denied"));
    }

    #[test]
    fn validation_error_messages() {
        let err = ValidationError::NotANumber {
            field: "learning hours",
            value: "ten".into(),
        };
        assert_eq!(err.to_string(), "learning hours must be a number, got \"ten\"");
        assert_eq!(ValidationError::EmptyUser.to_string(), "user must not be empty");
    }
}
