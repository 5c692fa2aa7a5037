//! Error types for runlog-core
//!
//! Only [`StoreError`] and [`ConfigError`] ever reach a caller. A
//! [`ScanIssue`] describes something a scan stepped over; it is logged and
//! counted, never returned.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`LogStore`](crate::store::LogStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The primary location could not be created, read, or rewritten.
    #[error("could not write log file {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The entry's sequence cannot be written and read back.
    #[error("sequence {0} is outside 1..={max}", max = crate::format::MAX_SEQUENCE)]
    SequenceOutOfRange(u64),

    /// The configured location list is unusable.
    #[error("invalid log locations: {0}")]
    InvalidLocations(String),
}

impl StoreError {
    /// Create a new WriteFailure error
    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }

    /// Create a new InvalidLocations error
    pub fn invalid_locations(message: impl Into<String>) -> Self {
        Self::InvalidLocations(message.into())
    }
}

/// Something a location scan skipped over.
#[derive(Debug, Error)]
pub enum ScanIssue {
    /// A data line that could not be parsed.
    #[error("line {line}: {reason}")]
    ParseSkip { line: usize, reason: &'static str },

    /// A location that is missing or unreadable.
    #[error("{} unavailable: {source}", path.display())]
    LocationUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config: {0}")]
    Parse(#[from] config::ConfigError),

    #[error("config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
